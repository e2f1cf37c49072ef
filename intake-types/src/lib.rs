//! Core types for the intake-engine crate.
//!
//! This crate provides the foundational types for describing intake forms:
//! - `FormSchema` - The top-level form structure
//! - `FieldSchema` and `FieldKind` - Individual fields and their input types
//! - `SectionSchema` - Named groups of fields, also navigation anchors
//! - `VisibilityRule` - Predicates controlling conditional fields
//! - `FormValues` - The collected data, keyed by field id
//!
//! All types are plain data, JSON-serializable, and carry no engine logic.

mod id;
pub use id::{FieldId, SectionId};

mod values;
pub use values::FormValues;

mod rule;
pub use rule::{Clause, ClauseOp, VisibilityRule};

mod field;
pub use field::{FieldKind, FieldSchema};

mod section;
pub use section::SectionSchema;

mod schema;
pub use schema::FormSchema;

mod error;
pub use error::SchemaError;
