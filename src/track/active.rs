//! Active-heading tracking against viewport scroll position.

/// Vertical clearance for click-to-scroll jumps (fixed header height).
pub const CLICK_OFFSET: f64 = 80.0;

/// Clearance added to the scroll position when probing which section is in
/// view (navbar plus a little breathing room).
pub const TRACK_OFFSET: f64 = 120.0;

/// Remaining scroll room below which the last heading is forced active.
pub const NEAR_BOTTOM_THRESHOLD: f64 = 50.0;

/// Scroll distance past which a back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Viewport measurements, sampled by the host at the frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// An active-item transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Tracks which heading is currently "in view".
///
/// Holds at most one active index into the displayed heading set; starts
/// with none. State only moves in [`ScrollTracker::update`], driven by the
/// metrics the host samples.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    active: Option<usize>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Recompute the active heading. Returns the transition when it changed,
    /// `None` when the same item (or no item) remains active.
    ///
    /// `offsets` are the displayed headings' document positions, in order.
    pub fn update(&mut self, offsets: &[f64], metrics: &ViewportMetrics) -> Option<ActiveChange> {
        let current = locate(offsets, metrics);
        if current == self.active {
            return None;
        }

        let change = ActiveChange {
            previous: self.active,
            current,
        };
        self.active = current;
        Some(change)
    }
}

/// Find the heading whose section contains the probe position.
///
/// The probe sits `TRACK_OFFSET` below the scroll position. A heading is
/// active while the probe is at or past its offset but before the next
/// heading's; the last section extends to the end of the document. When the
/// viewport is within `NEAR_BOTTOM_THRESHOLD` of the bottom, the last
/// heading wins outright — a short final section would otherwise never
/// contain the probe.
fn locate(offsets: &[f64], metrics: &ViewportMetrics) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }

    let probe = metrics.scroll_y + TRACK_OFFSET;

    if probe + metrics.viewport_height >= metrics.document_height - NEAR_BOTTOM_THRESHOLD {
        return Some(offsets.len() - 1);
    }

    let mut active = None;
    for (index, &top) in offsets.iter().enumerate() {
        let next_top = offsets
            .get(index + 1)
            .copied()
            .unwrap_or(metrics.document_height);
        if top <= probe && probe < next_top {
            active = Some(index);
        }
    }
    active
}

/// Percentage of the scrollable range consumed, clamped to 0..=100.
///
/// A document shorter than the viewport has no scrollable range and reads
/// as 0.
pub fn reading_progress(metrics: &ViewportMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Whether a back-to-top control should be shown at this scroll position.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}
