//! # intake-engine
//!
//! Schema-driven intake form engine. Presentation-agnostic.
//!
//! The original veterinary record system re-implemented the same form
//! machinery once per species: which fields count toward completion, which
//! conditional sub-fields are shown, and which section the navigation
//! sidebar should highlight while the user scrolls. This crate generalizes
//! that machinery into one engine parameterized by a per-species
//! [`FormSchema`] value.
//!
//! ## Usage
//!
//! ```
//! use intake_engine::{
//!     FakeViewport, FieldKind, FieldSchema, FormEngine, FormSchema, SectionRegion,
//!     SectionSchema, ViewportSnapshot, VisibilityRule,
//! };
//!
//! let schema = FormSchema::new()
//!     .with_section(SectionSchema::new("cabeza", "Cabeza", 0))
//!     .with_field(
//!         FieldSchema::new("secreciones", "cabeza", "Secreciones", FieldKind::YesNo)
//!             .required()
//!             .with_default("NO"),
//!     )
//!     .with_field(
//!         FieldSchema::new("secreciones_localizacion", "cabeza", "Localización", FieldKind::Text)
//!             .visible_when(VisibilityRule::not_equals("secreciones", "NO")),
//!     );
//!
//! let mut engine = FormEngine::mount(
//!     schema,
//!     Box::new(FakeViewport::new()),
//!     vec![SectionRegion::new("cabeza", 0.0, 600.0)],
//! );
//!
//! assert!(!engine.is_field_visible(&"secreciones_localizacion".into()));
//! engine.set_field("secreciones", "clara");
//! assert!(engine.is_field_visible(&"secreciones_localizacion".into()));
//! assert_eq!(engine.progress().percent, 100);
//!
//! engine.handle_viewport(ViewportSnapshot::new(0.0, 800.0));
//! assert_eq!(engine.active_section().unwrap().as_str(), "cabeza");
//! ```
//!
//! The engine is total: unknown ids resolve to "unfilled", a schema with no
//! required fields reports zero percent, and teardown is idempotent. It
//! performs no I/O; viewport geometry arrives through the injected
//! [`ViewportObserver`] capability, which a presentation layer backs with
//! real intersection observation and tests back with [`FakeViewport`].

// Re-export all types from intake-types
pub use intake_types::*;

pub mod visibility;
pub use visibility::{is_visible, resolved_value};

mod progress;
pub use progress::{Progress, compute_progress};

mod observer;
pub use observer::{SubscriptionId, ViewportObserver};

mod scroll;
pub use scroll::{SectionRegion, SectionScrollTracker, TriggerBand, ViewportSnapshot};

mod controller;
pub use controller::FormController;

mod engine;
pub use engine::FormEngine;

mod view;
pub use view::{CollapsedSections, FieldView, FormViewState, SectionView};

// Fake observer for driving the tracker with synthetic geometry in tests
mod fake_viewport;
pub use fake_viewport::FakeViewport;
