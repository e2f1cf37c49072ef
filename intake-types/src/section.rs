use serde::{Deserialize, Serialize};

use crate::SectionId;

/// A contiguous group of fields under one heading.
///
/// Sections double as navigation anchors: the sidebar lists them in `order`
/// and highlights whichever one is currently scrolled into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSchema {
    /// The key identifying this section.
    id: SectionId,

    /// The heading shown above the section and in the navigation sidebar.
    label: String,

    /// Position in document and navigation order (lowest first).
    order: u32,

    /// Opaque display token for the sidebar icon.
    icon: String,
}

impl SectionSchema {
    /// Create a new section.
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            order,
            icon: String::new(),
        }
    }

    /// Set the sidebar icon token.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Get the section id.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Get the heading label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the document/navigation order.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Get the icon token.
    pub fn icon(&self) -> &str {
        &self.icon
    }
}
