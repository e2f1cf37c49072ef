//! Completion tracking over a schema's required fields.

use intake_types::{FormSchema, FormValues};

use crate::visibility::resolved_value;

/// Completion state of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Required fields whose resolved value is non-empty.
    pub filled: usize,

    /// Required fields declared by the schema.
    pub total: usize,

    /// `filled / total` as a rounded percentage, 0 when `total` is 0.
    pub percent: u8,
}

/// Compute the completion state for the current values.
///
/// `total` is fixed per form type and independent of visibility. `filled`
/// counts resolved values, so a required field with a non-empty default
/// counts from creation, before any user interaction.
///
/// Required-but-currently-hidden fields count toward `filled` as well. The
/// observed forms compute completion over the full required list regardless
/// of conditional visibility; this is intentional, not an oversight.
///
/// Rounding is half-up, so 2 of 3 yields 67.
pub fn compute_progress(schema: &FormSchema, values: &FormValues) -> Progress {
    let mut filled = 0;
    let mut total = 0;
    for id in schema.required_fields() {
        total += 1;
        if !resolved_value(schema, values, id).is_empty() {
            filled += 1;
        }
    }

    let percent = if total == 0 {
        0
    } else {
        ((filled as f64 / total as f64) * 100.0).round() as u8
    };

    Progress {
        filled,
        total,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_types::{FieldKind, FieldSchema, SectionSchema, VisibilityRule};

    fn schema() -> FormSchema {
        FormSchema::new()
            .with_section(SectionSchema::new("s", "S", 0))
            .with_field(
                FieldSchema::new("a", "s", "A", FieldKind::Text)
                    .required()
                    .with_default("normal"),
            )
            .with_field(FieldSchema::new("b", "s", "B", FieldKind::Text).required())
            .with_field(FieldSchema::new("c", "s", "C", FieldKind::Text).required())
            .with_field(FieldSchema::new("extra", "s", "Extra", FieldKind::Text))
    }

    #[test]
    fn defaults_count_before_interaction() {
        let progress = compute_progress(&schema(), &FormValues::new());
        assert_eq!(
            progress,
            Progress {
                filled: 1,
                total: 3,
                percent: 33
            }
        );
    }

    #[test]
    fn filling_a_field_advances_percent() {
        let mut values = FormValues::new();
        values.set("b", "x");
        let progress = compute_progress(&schema(), &values);
        assert_eq!(
            progress,
            Progress {
                filled: 2,
                total: 3,
                percent: 67
            }
        );
    }

    #[test]
    fn all_filled_is_one_hundred() {
        let mut values = FormValues::new();
        values.set("b", "x");
        values.set("c", "y");
        assert_eq!(compute_progress(&schema(), &values).percent, 100);
    }

    #[test]
    fn optional_fields_never_count() {
        let mut values = FormValues::new();
        values.set("extra", "filled anyway");
        assert_eq!(compute_progress(&schema(), &values).filled, 1);
    }

    #[test]
    fn clearing_a_defaulted_field_unfills_it() {
        let mut values = FormValues::new();
        values.set("a", "");
        assert_eq!(compute_progress(&schema(), &values).filled, 0);
    }

    #[test]
    fn zero_required_fields_is_zero_percent() {
        let schema = FormSchema::new().with_section(SectionSchema::new("s", "S", 0));
        let progress = compute_progress(&schema, &FormValues::new());
        assert_eq!(
            progress,
            Progress {
                filled: 0,
                total: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn hidden_required_fields_still_count() {
        let schema = FormSchema::new()
            .with_section(SectionSchema::new("s", "S", 0))
            .with_field(
                FieldSchema::new("gate", "s", "Gate", FieldKind::YesNo)
                    .required()
                    .with_default("NO"),
            )
            .with_field(
                FieldSchema::new("detail", "s", "Detail", FieldKind::Text)
                    .required()
                    .with_default("normal")
                    .visible_when(VisibilityRule::not_equals("gate", "NO")),
            );

        // "detail" is hidden while gate == "NO", but its resolved default
        // still counts - preserved from the observed forms.
        let progress = compute_progress(&schema, &FormValues::new());
        assert_eq!(progress.filled, 2);
        assert_eq!(progress.percent, 100);
    }
}
