use serde::{Deserialize, Serialize};

use crate::FieldId;

/// Comparison applied to another field's resolved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClauseOp {
    /// The resolved value equals the expected string.
    Equals(String),

    /// The resolved value differs from the expected string.
    NotEquals(String),

    /// The resolved value is one of the listed strings.
    In(Vec<String>),
}

impl ClauseOp {
    /// Evaluate this comparison against a resolved value.
    ///
    /// The caller must pass the value the rendered input would show (stored
    /// value, falling back to the schema default, falling back to `""`).
    /// An unfilled field therefore never equals a concrete expectation,
    /// while a `NotEquals` clause against it holds.
    pub fn matches(&self, resolved: &str) -> bool {
        match self {
            Self::Equals(expected) => resolved == expected,
            Self::NotEquals(expected) => resolved != expected,
            Self::In(options) => options.iter().any(|o| o == resolved),
        }
    }
}

/// One `(field, operator, expected)` condition inside a visibility rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    field: FieldId,
    op: ClauseOp,
}

impl Clause {
    /// Create a new clause.
    pub fn new(field: impl Into<FieldId>, op: ClauseOp) -> Self {
        Self {
            field: field.into(),
            op,
        }
    }

    /// The field whose value this clause inspects.
    pub fn field(&self) -> &FieldId {
        &self.field
    }

    /// The comparison to apply.
    pub fn op(&self) -> &ClauseOp {
        &self.op
    }
}

/// A predicate over form values controlling whether a field is shown.
///
/// A rule is one or more clauses combined with AND semantics: the field is
/// visible only when every clause holds. Rules never clear stored values -
/// hiding a field retains whatever it held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    clauses: Vec<Clause>,
}

impl VisibilityRule {
    /// Show the field only when `field` resolves to `value`.
    pub fn equals(field: impl Into<FieldId>, value: impl Into<String>) -> Self {
        Self {
            clauses: vec![Clause::new(field, ClauseOp::Equals(value.into()))],
        }
    }

    /// Show the field only when `field` resolves to something other than `value`.
    pub fn not_equals(field: impl Into<FieldId>, value: impl Into<String>) -> Self {
        Self {
            clauses: vec![Clause::new(field, ClauseOp::NotEquals(value.into()))],
        }
    }

    /// Show the field only when `field` resolves to one of `values`.
    pub fn one_of<I, S>(field: impl Into<FieldId>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clauses: vec![Clause::new(
                field,
                ClauseOp::In(values.into_iter().map(Into::into).collect()),
            )],
        }
    }

    /// Add a further clause; all clauses must hold for the field to show.
    pub fn and(mut self, field: impl Into<FieldId>, op: ClauseOp) -> Self {
        self.clauses.push(Clause::new(field, op));
        self
    }

    /// Get the clauses of this rule.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Field ids referenced by this rule.
    pub fn referenced_fields(&self) -> impl Iterator<Item = &FieldId> {
        self.clauses.iter().map(Clause::field)
    }
}
