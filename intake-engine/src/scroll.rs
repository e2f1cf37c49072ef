//! Section scroll tracking for navigation highlighting.
//!
//! The tracker watches which section's document region intersects a
//! viewport band and keeps one "active" section id that the sidebar
//! highlights. It is independent of form values.

use intake_types::SectionId;

use crate::observer::{SubscriptionId, ViewportObserver};

/// The vertical viewport strip deciding which section counts as in view.
///
/// Fractions are measured from the viewport edges: the band spans from
/// `top_fraction` below the top edge to `bottom_fraction` above the bottom
/// edge. The default band (20% / 30%) is a roughly 50%-tall strip in the
/// upper-middle of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    /// Fraction of the viewport height cut off above the band.
    pub top_fraction: f64,

    /// Fraction of the viewport height cut off below the band.
    pub bottom_fraction: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top_fraction: 0.20,
            bottom_fraction: 0.30,
        }
    }
}

impl TriggerBand {
    /// The band's `(top, bottom)` bounds in document coordinates.
    pub fn bounds(&self, viewport: ViewportSnapshot) -> (f64, f64) {
        let top = viewport.scroll_y + self.top_fraction * viewport.height;
        let bottom = viewport.scroll_y + (1.0 - self.bottom_fraction) * viewport.height;
        (top, bottom)
    }
}

/// Scroll position and size of the viewport at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    /// Document y-coordinate of the viewport's top edge.
    pub scroll_y: f64,

    /// Viewport height.
    pub height: f64,
}

impl ViewportSnapshot {
    /// Create a snapshot from scroll offset and viewport height.
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

/// One section's vertical extent in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRegion {
    section: SectionId,
    top: f64,
    bottom: f64,
}

impl SectionRegion {
    /// Create a region for a section spanning `top..bottom`.
    pub fn new(section: impl Into<SectionId>, top: f64, bottom: f64) -> Self {
        Self {
            section: section.into(),
            top,
            bottom,
        }
    }

    /// The section this region belongs to.
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// Document y-coordinate of the section's top edge.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Document y-coordinate of the section's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    fn intersects(&self, band_top: f64, band_bottom: f64) -> bool {
        self.bottom > band_top && self.top < band_bottom
    }
}

/// Maintains the active section id by observing viewport geometry.
///
/// Mounting acquires one observer subscription per section region;
/// [`unmount`](Self::unmount) (or drop) releases all of them exactly once,
/// on every exit path. Events arriving after unmount are no-ops.
///
/// When several sections intersect the band at once, the one whose top edge
/// is nearest the band top wins. The source behavior was last-observer-wins
/// and therefore nondeterministic across rapid scroll events; the
/// nearest-top rule is the deterministic replacement.
pub struct SectionScrollTracker {
    observer: Box<dyn ViewportObserver>,
    regions: Vec<SectionRegion>,
    band: TriggerBand,
    subscriptions: Vec<SubscriptionId>,
    active: Option<SectionId>,
}

impl SectionScrollTracker {
    /// Mount the tracker: subscribe to every region and activate the first.
    ///
    /// Regions are expected in navigation order; the first one's section is
    /// the initial active id.
    pub fn mount(mut observer: Box<dyn ViewportObserver>, regions: Vec<SectionRegion>) -> Self {
        let subscriptions = regions
            .iter()
            .map(|region| observer.observe(region.clone()))
            .collect();
        let active = regions.first().map(|r| r.section().clone());

        Self {
            observer,
            regions,
            band: TriggerBand::default(),
            subscriptions,
            active,
        }
    }

    /// Replace the default trigger band.
    pub fn with_band(mut self, band: TriggerBand) -> Self {
        self.band = band;
        self
    }

    /// The section currently highlighted in the navigation sidebar.
    pub fn active_section(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Check whether the tracker still holds its subscriptions.
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Feed a viewport change into the tracker.
    ///
    /// Among regions intersecting the trigger band, the one whose top edge
    /// is closest to the band top becomes active. When no region intersects
    /// the band the current active id is kept. After unmount this is a
    /// no-op.
    pub fn handle_viewport(&mut self, viewport: ViewportSnapshot) {
        if self.subscriptions.is_empty() {
            return;
        }

        let (band_top, band_bottom) = self.band.bounds(viewport);
        let nearest = self
            .regions
            .iter()
            .filter(|region| region.intersects(band_top, band_bottom))
            .min_by(|a, b| {
                let da = (a.top() - band_top).abs();
                let db = (b.top() - band_top).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(region) = nearest {
            self.active = Some(region.section().clone());
        }
    }

    /// Scroll the viewport so the section's top edge reaches the top.
    ///
    /// The active id is set optimistically for responsive highlighting; the
    /// observation path would converge on the same section once the scroll
    /// crosses the trigger band.
    pub fn scroll_to_section(&mut self, id: &SectionId) {
        self.observer.scroll_to(id);
        self.active = Some(id.clone());
    }

    /// Release all observer subscriptions. Idempotent.
    pub fn unmount(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            self.observer.release(subscription);
        }
    }
}

impl Drop for SectionScrollTracker {
    fn drop(&mut self) {
        self.unmount();
    }
}
