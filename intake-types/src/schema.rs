use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{FieldId, FieldSchema, SchemaError, SectionId, SectionSchema};

/// The top-level structure describing one intake form.
///
/// A schema is authored per species as a plain data value and drives the
/// whole engine: which fields exist, which sections they live in, which are
/// required for completion, and which are conditionally visible. One engine
/// parameterized by a schema replaces a per-species form implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Optional form title, e.g., the species name.
    title: Option<String>,

    /// All sections, in declaration order.
    sections: Vec<SectionSchema>,

    /// All fields, in declaration order.
    fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the form title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a section.
    pub fn with_section(mut self, section: SectionSchema) -> Self {
        self.sections.push(section);
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Get the form title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get all sections in declaration order.
    pub fn sections(&self) -> &[SectionSchema] {
        &self.sections
    }

    /// Get all sections sorted by their `order` value.
    pub fn ordered_sections(&self) -> Vec<&SectionSchema> {
        let mut ordered: Vec<_> = self.sections.iter().collect();
        ordered.sort_by_key(|s| s.order());
        ordered
    }

    /// Get the first section in navigation order, if any.
    pub fn first_section(&self) -> Option<&SectionSchema> {
        self.sections.iter().min_by_key(|s| s.order())
    }

    /// Look up a section by id.
    pub fn section(&self, id: &SectionId) -> Option<&SectionSchema> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Get all fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Look up a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Get the fields belonging to a section, in declaration order.
    pub fn fields_in(&self, section: &SectionId) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(move |f| f.section() == section)
    }

    /// Get the schema default for a field, if any.
    pub fn default_of(&self, id: &FieldId) -> Option<&str> {
        self.field(id).and_then(FieldSchema::default)
    }

    /// Get the ids of all required fields, in declaration order.
    ///
    /// This list is fixed per form type and independent of current
    /// visibility: a required field stays on it even while hidden.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldId> {
        self.fields
            .iter()
            .filter(|f| f.is_required())
            .map(FieldSchema::id)
    }

    /// Check the schema for structural authoring mistakes.
    ///
    /// Returns the first problem found: duplicate ids, a field placed in an
    /// undeclared section, or a visibility clause inspecting an undeclared
    /// field.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut section_ids = HashSet::new();
        for section in &self.sections {
            if !section_ids.insert(section.id()) {
                return Err(SchemaError::DuplicateSection(section.id().clone()));
            }
        }

        let mut field_ids = HashSet::new();
        for field in &self.fields {
            if !field_ids.insert(field.id()) {
                return Err(SchemaError::DuplicateField(field.id().clone()));
            }
            if !section_ids.contains(field.section()) {
                return Err(SchemaError::UnknownSection {
                    field: field.id().clone(),
                    section: field.section().clone(),
                });
            }
        }

        for field in &self.fields {
            if let Some(rule) = field.rule() {
                for referenced in rule.referenced_fields() {
                    if !field_ids.contains(referenced) {
                        return Err(SchemaError::UnknownRuleField {
                            field: field.id().clone(),
                            references: referenced.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldKind, VisibilityRule};

    fn schema() -> FormSchema {
        FormSchema::new()
            .with_title("Conejo")
            .with_section(SectionSchema::new("general", "Datos generales", 0))
            .with_section(SectionSchema::new("cabeza", "Cabeza", 1))
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

    #[test]
    fn lookups() {
        let schema = schema();

        assert!(schema.field(&"sexo".into()).is_some());
        assert!(schema.field(&"oído".into()).is_none());
        assert_eq!(schema.default_of(&"secreciones".into()), Some("NO"));
        assert_eq!(schema.default_of(&"sexo".into()), None);
    }

    #[test]
    fn required_fields_ignore_visibility_rules() {
        let schema = schema();
        let required: Vec<_> = schema.required_fields().map(FieldId::as_str).collect();
        assert_eq!(required, vec!["sexo", "secreciones"]);
    }

    #[test]
    fn first_section_is_lowest_order() {
        let schema = FormSchema::new()
            .with_section(SectionSchema::new("b", "B", 5))
            .with_section(SectionSchema::new("a", "A", 1));
        assert_eq!(schema.first_section().unwrap().id().as_str(), "a");
    }

    #[test]
    fn fields_in_section() {
        let schema = schema();
        let in_cabeza: Vec<_> = schema
            .fields_in(&"cabeza".into())
            .map(|f| f.id().as_str())
            .collect();
        assert_eq!(in_cabeza, vec!["secreciones", "secreciones_localizacion"]);
    }

    #[test]
    fn validate_accepts_well_formed_schema() {
        assert!(schema().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_field() {
        let schema = FormSchema::new()
            .with_section(SectionSchema::new("s", "S", 0))
            .with_field(FieldSchema::new("a", "s", "A", FieldKind::Text))
            .with_field(FieldSchema::new("a", "s", "A again", FieldKind::Text));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateField(_))
        ));
    }

    #[test]
    fn validate_rejects_unknown_section() {
        let schema =
            FormSchema::new().with_field(FieldSchema::new("a", "missing", "A", FieldKind::Text));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownSection { .. })
        ));
    }

    #[test]
    fn validate_rejects_rule_on_unknown_field() {
        let schema = FormSchema::new()
            .with_section(SectionSchema::new("s", "S", 0))
            .with_field(
                FieldSchema::new("a", "s", "A", FieldKind::Text)
                    .visible_when(VisibilityRule::equals("ghost", "x")),
            );
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownRuleField { .. })
        ));
    }

    #[test]
    fn schema_json_round_trip() {
        let schema = schema();
        let json = serde_json::to_string(&schema).unwrap();
        let back: FormSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
