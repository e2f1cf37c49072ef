//! Render-ready state handed to the presentation layer.
//!
//! A [`FormViewState`](crate::FormViewState) is a self-contained snapshot:
//! the presentation layer can render sections, inputs, the progress bar,
//! and the navigation highlight from it without touching the schema or the
//! raw value map.

use std::collections::HashMap;

use intake_types::{FieldId, FieldKind, SectionId};

use crate::progress::Progress;

/// One field, resolved for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// The field id.
    pub id: FieldId,

    /// The label shown next to the input.
    pub label: String,

    /// The input type to dispatch on. Exhaustive matching replaces ad hoc
    /// per-field branching.
    pub kind: FieldKind,

    /// The value the input shows: stored value, else schema default, else
    /// empty.
    pub value: String,

    /// Whether this field counts toward completion.
    pub required: bool,

    /// Whether this field is currently shown. Hidden fields keep their
    /// stored value.
    pub visible: bool,
}

/// One section with its fields, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    /// The section id, also the navigation anchor.
    pub id: SectionId,

    /// The heading label.
    pub label: String,

    /// The sidebar icon token.
    pub icon: String,

    /// The section's fields, visible and hidden alike.
    pub fields: Vec<FieldView>,
}

/// A complete render-ready snapshot of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormViewState {
    /// The form title, e.g., the species name.
    pub title: Option<String>,

    /// Sections in navigation order.
    pub sections: Vec<SectionView>,

    /// Completion state for the progress bar.
    pub progress: Progress,

    /// The section to highlight in the navigation sidebar.
    pub active_section: Option<SectionId>,
}

/// Which sections the user has collapsed.
///
/// A presentation toggle only: collapsing plays no part in completion or
/// visibility logic. Owned by the presentation layer alongside the view
/// state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollapsedSections {
    collapsed: HashMap<SectionId, bool>,
}

impl CollapsedSections {
    /// Create a state with every section expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a section between collapsed and expanded.
    pub fn toggle(&mut self, id: impl Into<SectionId>) {
        let entry = self.collapsed.entry(id.into()).or_insert(false);
        *entry = !*entry;
    }

    /// Check whether a section is collapsed. Untoggled sections are not.
    pub fn is_collapsed(&self, id: &SectionId) -> bool {
        self.collapsed.get(id).copied().unwrap_or(false)
    }
}
