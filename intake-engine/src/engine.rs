//! The facade combining the controller and the scroll tracker.

use intake_types::{FieldId, FormSchema, FormValues, SectionId};

use crate::controller::FormController;
use crate::observer::ViewportObserver;
use crate::progress::Progress;
use crate::scroll::{SectionRegion, SectionScrollTracker, ViewportSnapshot};
use crate::view::{FieldView, FormViewState, SectionView};

/// One engine instance per mounted form.
///
/// The presentation layer talks only to this facade: field edits go through
/// [`set_field`](Self::set_field), viewport geometry through
/// [`handle_viewport`](Self::handle_viewport), and rendering reads
/// [`view_state`](Self::view_state). Nothing else reads or writes the value
/// map.
pub struct FormEngine {
    controller: FormController,
    tracker: SectionScrollTracker,
}

impl FormEngine {
    /// Mount a form: wire the schema, the viewport capability, and the
    /// measured section regions together.
    ///
    /// Regions are expected in navigation order, one per section; the first
    /// becomes the initially active section.
    pub fn mount(
        schema: FormSchema,
        observer: Box<dyn ViewportObserver>,
        regions: Vec<SectionRegion>,
    ) -> Self {
        Self {
            controller: FormController::new(schema),
            tracker: SectionScrollTracker::mount(observer, regions),
        }
    }

    /// Mount with pre-existing values, e.g., a reopened draft.
    pub fn mount_with_values(
        schema: FormSchema,
        values: FormValues,
        observer: Box<dyn ViewportObserver>,
        regions: Vec<SectionRegion>,
    ) -> Self {
        Self {
            controller: FormController::with_values(schema, values),
            tracker: SectionScrollTracker::mount(observer, regions),
        }
    }

    /// Replace the value for one field.
    pub fn set_field(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.controller.set_field(id, value);
    }

    /// The current values.
    pub fn values(&self) -> &FormValues {
        self.controller.values()
    }

    /// A cloned snapshot of the current values, e.g., for submission.
    pub fn snapshot(&self) -> FormValues {
        self.controller.snapshot()
    }

    /// The schema this form was mounted with.
    pub fn schema(&self) -> &FormSchema {
        self.controller.schema()
    }

    /// The completion state for the progress bar.
    pub fn progress(&self) -> Progress {
        self.controller.progress()
    }

    /// Whether a field is currently shown.
    pub fn is_field_visible(&self, id: &FieldId) -> bool {
        self.controller.is_field_visible(id)
    }

    /// The section to highlight in the navigation sidebar.
    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active_section()
    }

    /// Feed a viewport change into the scroll tracker.
    pub fn handle_viewport(&mut self, viewport: ViewportSnapshot) {
        self.tracker.handle_viewport(viewport);
    }

    /// Scroll a section's top edge into view on a navigation click.
    pub fn scroll_to_section(&mut self, id: &SectionId) {
        self.tracker.scroll_to_section(id);
    }

    /// Release all viewport subscriptions. Idempotent; also runs on drop.
    pub fn unmount(&mut self) {
        self.tracker.unmount();
    }

    /// Build a complete render-ready snapshot.
    ///
    /// Sections come out in navigation order with every field resolved the
    /// way its input would render it, visibility included.
    pub fn view_state(&self) -> FormViewState {
        let schema = self.controller.schema();
        let sections = schema
            .ordered_sections()
            .into_iter()
            .map(|section| SectionView {
                id: section.id().clone(),
                label: section.label().to_string(),
                icon: section.icon().to_string(),
                fields: schema
                    .fields_in(section.id())
                    .map(|field| FieldView {
                        id: field.id().clone(),
                        label: field.label().to_string(),
                        kind: field.kind().clone(),
                        value: self.controller.resolved_value(field.id()).to_string(),
                        required: field.is_required(),
                        visible: self.controller.is_field_visible(field.id()),
                    })
                    .collect(),
            })
            .collect();

        FormViewState {
            title: schema.title().map(String::from),
            sections,
            progress: self.controller.progress(),
            active_section: self.tracker.active_section().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeViewport;
    use intake_types::{FieldKind, FieldSchema, SectionSchema, VisibilityRule};

    fn schema() -> FormSchema {
        FormSchema::new()
            .with_title("Conejo")
            .with_section(SectionSchema::new("general", "Datos generales", 0).with_icon("clipboard"))
            .with_section(SectionSchema::new("cabeza", "Cabeza", 1).with_icon("skull"))
            .with_field(
                FieldSchema::new("sexo", "general", "Sexo", FieldKind::select(["hembra", "macho"]))
                    .required(),
            )
            .with_field(
                FieldSchema::new("secreciones", "cabeza", "Secreciones", FieldKind::YesNo)
                    .required()
                    .with_default("NO"),
            )
            .with_field(
                FieldSchema::new(
                    "secreciones_localizacion",
                    "cabeza",
                    "Localización",
                    FieldKind::Text,
                )
                .visible_when(VisibilityRule::not_equals("secreciones", "NO")),
            )
    }

    fn regions() -> Vec<SectionRegion> {
        vec![
            SectionRegion::new("general", 0.0, 500.0),
            SectionRegion::new("cabeza", 500.0, 1200.0),
        ]
    }

    fn engine() -> FormEngine {
        FormEngine::mount(schema(), Box::new(FakeViewport::new()), regions())
    }

    #[test]
    fn edits_flow_through_to_derived_state() {
        let mut engine = engine();
        assert_eq!(engine.progress().filled, 1);

        engine.set_field("sexo", "hembra");
        assert_eq!(engine.progress().percent, 100);
    }

    #[test]
    fn view_state_resolves_defaults_and_visibility() {
        let engine = engine();
        let view = engine.view_state();

        assert_eq!(view.title.as_deref(), Some("Conejo"));
        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.active_section.as_ref().unwrap().as_str(), "general");

        let cabeza = &view.sections[1];
        assert_eq!(cabeza.icon, "skull");
        let secreciones = &cabeza.fields[0];
        assert_eq!(secreciones.value, "NO");
        assert!(secreciones.visible);

        let localizacion = &cabeza.fields[1];
        assert!(!localizacion.visible);
        assert!(!localizacion.required);
    }

    #[test]
    fn view_state_orders_sections_by_order_value() {
        let schema = FormSchema::new()
            .with_section(SectionSchema::new("late", "Late", 9))
            .with_section(SectionSchema::new("early", "Early", 1));
        let engine = FormEngine::mount(schema, Box::new(FakeViewport::new()), vec![]);

        let view = engine.view_state();
        assert_eq!(view.sections[0].id.as_str(), "early");
        assert_eq!(view.sections[1].id.as_str(), "late");
    }

    #[test]
    fn mount_with_values_resumes_a_draft() {
        let mut draft = FormValues::new();
        draft.set("sexo", "macho");

        let engine = FormEngine::mount_with_values(
            schema(),
            draft,
            Box::new(FakeViewport::new()),
            regions(),
        );
        assert_eq!(engine.progress().percent, 100);
    }

    #[test]
    fn scroll_and_unmount_round_trip() {
        let mut engine = engine();
        engine.handle_viewport(ViewportSnapshot::new(600.0, 800.0));
        assert_eq!(engine.active_section().unwrap().as_str(), "cabeza");

        engine.unmount();
        engine.handle_viewport(ViewportSnapshot::new(0.0, 800.0));
        assert_eq!(engine.active_section().unwrap().as_str(), "cabeza");
    }
}
