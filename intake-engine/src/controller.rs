//! The single mutation point over form values.

use intake_types::{FieldId, FormSchema, FormValues};

use crate::progress::{Progress, compute_progress};
use crate::visibility::{is_visible, resolved_value};

/// Owns the value map and exposes derived state over it.
///
/// No other component mutates [`FormValues`]. Updates follow an immutable
/// discipline: each `set_field` produces a fresh map, so observers holding
/// a previous snapshot can diff against the new one.
pub struct FormController {
    schema: FormSchema,
    values: FormValues,
}

impl FormController {
    /// Create a controller over a schema with an empty value map.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: FormValues::new(),
        }
    }

    /// Create a controller with pre-existing values, e.g., a reopened draft.
    pub fn with_values(schema: FormSchema, values: FormValues) -> Self {
        Self { schema, values }
    }

    /// Replace the value for one field, leaving all other entries untouched.
    ///
    /// Any string is accepted; a blank string is the "explicitly cleared"
    /// state, distinct from a field that was never touched. An id absent
    /// from the schema is stored anyway but logged as a likely typo.
    pub fn set_field(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        let id = id.into();
        if self.schema.field(&id).is_none() {
            tracing::warn!(field = %id, "set_field for an id not in the schema, likely a typo");
        }

        let mut next = self.values.clone();
        next.set(id, value);
        self.values = next;
    }

    /// The current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// A cloned snapshot of the current values.
    pub fn snapshot(&self) -> FormValues {
        self.values.clone()
    }

    /// The schema this controller operates over.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The value the rendered input currently shows for a field.
    pub fn resolved_value(&self, id: &FieldId) -> &str {
        resolved_value(&self.schema, &self.values, id)
    }

    /// Whether a field is currently shown. Unknown ids are never visible.
    pub fn is_field_visible(&self, id: &FieldId) -> bool {
        self.schema
            .field(id)
            .is_some_and(|field| is_visible(field, &self.schema, &self.values))
    }

    /// The completion state for the current values.
    pub fn progress(&self) -> Progress {
        compute_progress(&self.schema, &self.values)
    }
}
