//! The viewport observation capability injected into the scroll tracker.

use intake_types::SectionId;

use crate::scroll::SectionRegion;

/// Identifies one observer subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Create a subscription id from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Capability for watching section regions scroll through the viewport.
///
/// The engine performs no I/O of its own; a presentation layer backs this
/// trait with real intersection observation, while tests substitute
/// [`FakeViewport`](crate::FakeViewport) and drive the tracker with
/// synthetic geometry. Implementations forward viewport changes to
/// [`SectionScrollTracker::handle_viewport`](crate::SectionScrollTracker::handle_viewport).
///
/// Single-threaded: all calls happen on the UI event loop.
pub trait ViewportObserver {
    /// Start watching a section's document region.
    ///
    /// The tracker acquires one subscription per section on mount and holds
    /// the returned id until teardown.
    fn observe(&mut self, region: SectionRegion) -> SubscriptionId;

    /// Stop watching. Releasing an unknown or already-released id is a no-op.
    fn release(&mut self, id: SubscriptionId);

    /// Smoothly scroll the viewport so the section's top edge reaches the
    /// viewport top.
    fn scroll_to(&mut self, section: &SectionId);
}
