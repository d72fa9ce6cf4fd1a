//! Runtime scroll tracking: active-item state, panel follow-scroll, and
//! frame coalescing.

mod active;
mod frame;
mod panel;

pub use active::{
    ActiveChange, BACK_TO_TOP_THRESHOLD, CLICK_OFFSET, NEAR_BOTTOM_THRESHOLD, ScrollTracker,
    TRACK_OFFSET, ViewportMetrics, back_to_top_visible, reading_progress,
};
pub use frame::FrameGate;
pub use panel::{
    ItemGeometry, PanelGeometry, PanelScroll, ScrollBehavior, panel_needs_scroll, plan_scroll,
};
