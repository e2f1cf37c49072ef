use serde::{Deserialize, Serialize};

use crate::{FieldId, SectionId, VisibilityRule};

/// The input type of a field, determining how it is rendered and edited.
///
/// Render dispatch matches on this exhaustively, so every input type has an
/// explicit variant rather than ad hoc branching in the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-form single-line text input.
    Text,

    /// Calendar date input.
    Date,

    /// One choice from a fixed option list.
    Select {
        /// The selectable option strings, in display order.
        options: Vec<String>,
    },

    /// Two-state yes/no toggle, stored as `"SI"` / `"NO"`.
    YesNo,
}

impl FieldKind {
    /// Create a select kind from its option strings.
    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Select {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single field in an intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The key under which this field's value is stored.
    id: FieldId,

    /// The section this field belongs to.
    section: SectionId,

    /// The label shown next to the input.
    label: String,

    /// The input type.
    kind: FieldKind,

    /// Whether a non-empty value counts toward completion.
    required: bool,

    /// Initial value the rendered input shows before user interaction.
    ///
    /// A required field with a non-empty default counts as filled from
    /// creation - the observed forms pre-fill many fields with "normal"
    /// or "NO".
    default: Option<String>,

    /// Condition under which this field is shown; absent means always.
    visible_when: Option<VisibilityRule>,
}

impl FieldSchema {
    /// Create a new always-visible, optional field with no default.
    pub fn new(
        id: impl Into<FieldId>,
        section: impl Into<SectionId>,
        label: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self {
            id: id.into(),
            section: section.into(),
            label: label.into(),
            kind,
            required: false,
            default: None,
            visible_when: None,
        }
    }

    /// Mark this field as required for completion.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value the input starts with.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Show this field only while the rule holds.
    pub fn visible_when(mut self, rule: VisibilityRule) -> Self {
        self.visible_when = Some(rule);
        self
    }

    /// Get the field id.
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// Get the owning section id.
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the input kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Check whether this field counts toward completion.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the default value, if any.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Get the visibility rule, if any.
    pub fn rule(&self) -> Option<&VisibilityRule> {
        self.visible_when.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let field = FieldSchema::new("peso", "general", "Peso (g)", FieldKind::Text);

        assert!(!field.is_required());
        assert_eq!(field.default(), None);
        assert!(field.rule().is_none());
    }

    #[test]
    fn builder_chaining() {
        let field = FieldSchema::new("secreciones", "cabeza", "Secreciones", FieldKind::YesNo)
            .required()
            .with_default("NO");

        assert!(field.is_required());
        assert_eq!(field.default(), Some("NO"));
    }

    #[test]
    fn select_options() {
        let kind = FieldKind::select(["hembra", "macho"]);
        assert_eq!(
            kind,
            FieldKind::Select {
                options: vec!["hembra".to_string(), "macho".to_string()]
            }
        );
    }
}
