//! Fake viewport observer for testing the scroll tracker headlessly.
//!
//! `FakeViewport` records every subscription, release, and scroll request,
//! so tests can drive [`SectionScrollTracker`](crate::SectionScrollTracker)
//! with synthetic geometry and assert on resource discipline.

use intake_types::SectionId;

use crate::observer::{SubscriptionId, ViewportObserver};
use crate::scroll::SectionRegion;

/// A viewport observer backed by nothing, for tests.
#[derive(Debug, Default)]
pub struct FakeViewport {
    next_id: u64,
    observed: Vec<(SubscriptionId, SectionRegion)>,
    released: Vec<SubscriptionId>,
    scrolled_to: Vec<SectionId>,
}

impl FakeViewport {
    /// Create a new fake observer with no subscriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscriptions acquired and not yet released.
    pub fn active_subscriptions(&self) -> usize {
        self.observed.len()
    }

    /// Number of release calls that actually released something.
    pub fn release_count(&self) -> usize {
        self.released.len()
    }

    /// Sections a smooth scroll was requested for, in call order.
    pub fn scrolled_to(&self) -> &[SectionId] {
        &self.scrolled_to
    }
}

impl ViewportObserver for FakeViewport {
    fn observe(&mut self, region: SectionRegion) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.observed.push((id, region));
        id
    }

    fn release(&mut self, id: SubscriptionId) {
        // Unknown or already-released ids are a no-op.
        let before = self.observed.len();
        self.observed.retain(|(held, _)| *held != id);
        if self.observed.len() < before {
            self.released.push(id);
        }
    }

    fn scroll_to(&mut self, section: &SectionId) {
        self.scrolled_to.push(section.clone());
    }
}
