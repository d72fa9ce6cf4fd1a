//! TOC panel auto-scroll planning.
//!
//! When the active item changes, the panel (not the page) scrolls so the
//! item stays visible. The planner is pure: it takes the panel and item
//! geometry the host measured and returns a scroll command, or nothing when
//! the item is already fully visible or the move would be imperceptible.

/// How the host should perform a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The panel's scroll state, measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

/// The active item's position within the panel's scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    pub offset_top: f64,
    pub height: f64,
}

/// A planned panel scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelScroll {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Scroll deltas at or below this are suppressed to avoid jitter.
const MIN_SCROLL_DELTA: f64 = 5.0;

/// Breathing room left above or below an item parked near a panel edge.
const EDGE_MARGIN: f64 = 40.0;

/// Margin used when nudging a nearby off-screen item into view.
const NUDGE_MARGIN: f64 = 20.0;

/// Plan a panel scroll that keeps the active item visible.
///
/// Preference order: center the item in the panel; near the scroll extremes,
/// snap to the extreme when the item sits in the panel's outer third,
/// otherwise leave `EDGE_MARGIN` of room. Items just off-screen are nudged
/// in with a small margin rather than recentered; items far off-screen are
/// centered. The result is clamped to the panel's scroll range. Moves of
/// `MIN_SCROLL_DELTA` or less return `None`; moves longer than one panel
/// height scroll instantly, shorter ones smoothly.
pub fn plan_scroll(panel: &PanelGeometry, item: &ItemGeometry) -> Option<PanelScroll> {
    let visible_top = panel.scroll_top;
    let visible_bottom = panel.scroll_top + panel.client_height;
    let item_top = item.offset_top;
    let item_bottom = item.offset_top + item.height;

    let fully_visible = item_top >= visible_top && item_bottom <= visible_bottom;
    if fully_visible {
        return None;
    }

    let max_scroll_top = (panel.scroll_height - panel.client_height).max(0.0);
    let center_offset = panel.client_height / 2.0 - item.height / 2.0;

    let mut target = item.offset_top - center_offset;

    if target < 0.0 {
        target = if item.offset_top < panel.client_height / 3.0 {
            // Upper third of the content: go all the way to the top
            0.0
        } else {
            (item.offset_top - EDGE_MARGIN).max(0.0)
        };
    } else if target > max_scroll_top {
        let distance_from_bottom = panel.scroll_height - item.offset_top - item.height;
        target = if distance_from_bottom < panel.client_height / 3.0 {
            max_scroll_top
        } else {
            (item.offset_top - panel.client_height + item.height + EDGE_MARGIN).min(max_scroll_top)
        };
    }

    if item_bottom < visible_top {
        // Item is above the viewport
        let distance_above = visible_top - item_bottom;
        target = if distance_above > panel.client_height {
            (item.offset_top - center_offset).max(0.0)
        } else {
            (item.offset_top - NUDGE_MARGIN).max(0.0)
        };
    } else if item_top > visible_bottom {
        // Item is below the viewport
        let distance_below = item_top - visible_bottom;
        target = if distance_below > panel.client_height {
            (item.offset_top - center_offset).min(max_scroll_top)
        } else {
            (item.offset_top - panel.client_height + item.height + NUDGE_MARGIN)
                .min(max_scroll_top)
        };
    }

    let delta = (target - panel.scroll_top).abs();
    if delta <= MIN_SCROLL_DELTA {
        return None;
    }

    let behavior = if delta > panel.client_height {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    };

    Some(PanelScroll { top: target, behavior })
}

/// Whether the panel's content overflows its maximum height (drives the
/// panel's `has-scroll` styling).
pub fn panel_needs_scroll(content_height: f64, max_height: f64) -> bool {
    content_height > max_height
}
