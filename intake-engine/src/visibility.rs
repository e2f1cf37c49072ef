//! Conditional-visibility evaluation.
//!
//! Pure functions over a schema and the current values. Total: unknown
//! field ids resolve to "unfilled", so evaluation never fails.

use intake_types::{FieldId, FieldSchema, FormSchema, FormValues};

/// Resolve the value a rendered input currently shows for a field.
///
/// A stored value wins even when empty (the user cleared the input and the
/// screen shows the cleared state). Only a field that was never touched
/// falls back to its schema default; a field with neither resolves to `""`.
///
/// Visibility clauses and completion counting both compare against this
/// resolution - comparing against the raw stored value would silently
/// diverge from the default the user sees on screen.
pub fn resolved_value<'a>(
    schema: &'a FormSchema,
    values: &'a FormValues,
    id: &FieldId,
) -> &'a str {
    match values.get(id) {
        Some(value) => value,
        None => schema.default_of(id).unwrap_or(""),
    }
}

/// Decide whether a field is currently shown.
///
/// A field without a rule is always visible. A rule holds when every one of
/// its clauses matches the referenced field's resolved value (AND
/// semantics). Hiding a field never clears its stored value.
pub fn is_visible(field: &FieldSchema, schema: &FormSchema, values: &FormValues) -> bool {
    match field.rule() {
        None => true,
        Some(rule) => rule
            .clauses()
            .iter()
            .all(|clause| clause.op().matches(resolved_value(schema, values, clause.field()))),
    }
}
