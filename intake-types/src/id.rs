use std::fmt;

use serde::{Deserialize, Serialize};

/// A key identifying one field within a form, e.g., `"secreciones"`.
///
/// Field ids are opaque strings, unique within a form instance. They key
/// the `FormValues` map and are referenced by visibility rules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId {
    id: String,
}

impl FieldId {
    /// Create a new field id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for FieldId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

/// A key identifying one section within a form, e.g., `"examen_fisico"`.
///
/// Sections group fields under a heading and double as navigation anchors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId {
    id: String,
}

impl SectionId {
    /// Create a new section id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for SectionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_from_str() {
        let id: FieldId = "sexo".into();
        assert_eq!(id.as_str(), "sexo");
    }

    #[test]
    fn display() {
        let id = FieldId::new("apetito");
        assert_eq!(format!("{id}"), "apetito");
    }

    #[test]
    fn section_id_equality() {
        assert_eq!(SectionId::new("general"), SectionId::from("general"));
    }
}
