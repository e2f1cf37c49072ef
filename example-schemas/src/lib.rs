//! Per-species intake schemas.
//!
//! The original record system carried one hand-written form component per
//! species; here each species is a plain [`FormSchema`](intake_types::FormSchema)
//! value and a single engine renders them all. These schemas reproduce a
//! representative slice of the observed clinical vocabulary - they are
//! examples and test fixtures, not a complete clinical catalog.

pub mod bird;
pub mod cat;
pub mod rabbit;

pub use bird::bird;
pub use cat::cat;
pub use rabbit::rabbit;
