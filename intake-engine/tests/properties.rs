//! Property-based tests: the engine must be total over arbitrary values.

use intake_engine::{
    FieldId, FieldKind, FieldSchema, FormSchema, FormValues, SectionSchema, VisibilityRule,
    compute_progress, is_visible, resolved_value,
};
use proptest::prelude::*;

/// A schema with a mix of required, defaulted, and rule-gated fields.
fn schema() -> FormSchema {
    FormSchema::new()
        .with_section(SectionSchema::new("s", "S", 0))
        .with_field(
            FieldSchema::new("gate", "s", "Gate", FieldKind::YesNo)
                .required()
                .with_default("NO"),
        )
        .with_field(FieldSchema::new("name", "s", "Name", FieldKind::Text).required())
        .with_field(
            FieldSchema::new("detail", "s", "Detail", FieldKind::Text)
                .visible_when(VisibilityRule::not_equals("gate", "NO")),
        )
}

fn arbitrary_values() -> impl Strategy<Value = FormValues> {
    proptest::collection::hash_map("[a-z_]{1,12}", ".{0,16}", 0..8).prop_map(|map| {
        map.into_iter()
            .map(|(k, v)| (FieldId::new(k), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn progress_is_always_in_bounds(values in arbitrary_values()) {
        let progress = compute_progress(&schema(), &values);
        prop_assert!(progress.filled <= progress.total);
        prop_assert!(progress.percent <= 100);
    }

    #[test]
    fn progress_percent_is_zero_iff_nothing_filled(values in arbitrary_values()) {
        let progress = compute_progress(&schema(), &values);
        prop_assert_eq!(progress.percent == 0, progress.filled == 0);
    }

    #[test]
    fn visibility_never_panics(values in arbitrary_values()) {
        let schema = schema();
        for field in schema.fields() {
            let _ = is_visible(field, &schema, &values);
        }
    }

    #[test]
    fn resolution_is_total_over_unknown_ids(values in arbitrary_values(), id in "[a-z_]{1,12}") {
        let schema = schema();
        let id = FieldId::new(id);
        let resolved = resolved_value(&schema, &values, &id);
        match values.get(&id) {
            Some(stored) => prop_assert_eq!(resolved, stored),
            None => prop_assert_eq!(resolved, schema.default_of(&id).unwrap_or("")),
        }
    }

    #[test]
    fn set_is_idempotent(values in arbitrary_values(), id in "[a-z_]{1,12}", value in ".{0,16}") {
        let mut once = values.clone();
        once.set(id.as_str(), value.as_str());

        let mut twice = values;
        twice.set(id.as_str(), value.as_str());
        twice.set(id.as_str(), value.as_str());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn json_round_trip_is_lossless(values in arbitrary_values()) {
        let json = serde_json::to_string(&values).unwrap();
        let back: FormValues = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, values);
    }
}
