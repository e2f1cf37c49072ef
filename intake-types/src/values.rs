use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::FieldId;

/// Current values of a form, keyed by field id.
///
/// Values are plain strings; select and yes/no fields store their option
/// string. A key that is absent and a key holding the empty string both
/// mean "unfilled". The map is insertion-order agnostic - lookup is by key.
///
/// Serializes as a flat JSON object, so handing a snapshot across the
/// presentation boundary and reconstructing it is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: HashMap<FieldId, String>,
}

impl FormValues {
    /// Create a new empty value map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Replace the value for a field, leaving all other entries untouched.
    pub fn set(&mut self, id: impl Into<FieldId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the stored value for a field, if any.
    ///
    /// `None` means the field was never touched; `Some("")` means it was
    /// explicitly cleared. Callers wanting the on-screen value should resolve
    /// against the schema default instead of reading this raw.
    pub fn get(&self, id: &FieldId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Check if a value is stored for a field (even an empty one).
    pub fn contains(&self, id: &FieldId) -> bool {
        self.values.contains_key(id)
    }

    /// Check if a field holds a non-empty stored value.
    pub fn is_filled(&self, id: &FieldId) -> bool {
        self.values.get(id).is_some_and(|v| !v.is_empty())
    }

    /// Remove the stored value for a field.
    pub fn remove(&mut self, id: &FieldId) -> Option<String> {
        self.values.remove(id)
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(id, v)| (id, v.as_str()))
    }

    /// Get the number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another value map into this one, overwriting on key collision.
    pub fn extend(&mut self, other: FormValues) {
        self.values.extend(other.values);
    }
}

impl IntoIterator for FormValues {
    type Item = (FieldId, String);
    type IntoIter = std::collections::hash_map::IntoIter<FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a FieldId, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, FieldId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(FieldId, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FieldId, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
