use crate::{FieldId, SectionId};

/// Structural problems in a form schema, reported by `FormSchema::validate`.
///
/// These are authoring mistakes, not runtime failures - the engine itself is
/// total over any values and never surfaces errors to the user.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two fields declare the same id.
    #[error("Duplicate field id: {0}")]
    DuplicateField(FieldId),

    /// Two sections declare the same id.
    #[error("Duplicate section id: {0}")]
    DuplicateSection(SectionId),

    /// A field belongs to a section that is not declared.
    #[error("Field '{field}' references unknown section '{section}'")]
    UnknownSection {
        field: FieldId,
        section: SectionId,
    },

    /// A visibility clause inspects a field that is not declared.
    #[error("Visibility rule on '{field}' references unknown field '{references}'")]
    UnknownRuleField {
        field: FieldId,
        references: FieldId,
    },
}
