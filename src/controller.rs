//! TOC panel controller.
//!
//! One explicitly-owned object per panel: it holds the outline, the rendered
//! markup, the active-item tracker, and the frame gates for scroll and
//! resize. The host feeds it events and measurements and applies the
//! [`Effect`]s it returns; nothing in here touches a document directly.

use crate::heading::Heading;
use crate::outline::{Outline, TocNode};
use crate::render::{RenderOptions, render};
use crate::track::{
    CLICK_OFFSET, FrameGate, ItemGeometry, PanelGeometry, ScrollBehavior, ScrollTracker,
    ViewportMetrics, plan_scroll,
};

/// A side effect for the host to apply to its document.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Move the `active` class from `previous` to `current` (indices into
    /// the displayed heading set; `None` clears).
    SetActive {
        previous: Option<usize>,
        current: Option<usize>,
    },
    /// Scroll the TOC panel so the active item stays visible.
    ScrollPanel { top: f64, behavior: ScrollBehavior },
    /// Scroll the document itself (click-to-jump).
    ScrollDocument { top: f64, behavior: ScrollBehavior },
}

/// State and behavior of one TOC panel.
pub struct TocController {
    outline: Outline,
    markup: String,
    tracker: ScrollTracker,
    scroll_gate: FrameGate,
    resize_gate: FrameGate,
}

impl TocController {
    /// Build a controller from the headings found in the content region.
    ///
    /// Returns `None` when there is nothing to outline — the host hides the
    /// panel entirely rather than showing an empty list. Rebuilding from an
    /// unchanged heading set yields structurally identical markup.
    pub fn new(headings: Vec<Heading>, options: &RenderOptions) -> Option<TocController> {
        let outline = Outline::from_headings(&headings)?;
        if outline.is_empty() {
            return None;
        }
        let markup = render(&outline.forest, options);

        Some(TocController {
            outline,
            markup,
            tracker: ScrollTracker::new(),
            scroll_gate: FrameGate::new(),
            resize_gate: FrameGate::new(),
        })
    }

    /// The nested-list markup for the panel. The host replaces the panel
    /// container's entire content with this (clear-then-append), so stale
    /// markup never accumulates across rebuilds.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn forest(&self) -> &[TocNode] {
        &self.outline.forest
    }

    /// The displayed headings, filtered and id-assigned, in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.outline.headings
    }

    pub fn min_level(&self) -> u8 {
        self.outline.min_level
    }

    pub fn active(&self) -> Option<usize> {
        self.tracker.active()
    }

    /// Record fresh layout positions for the displayed headings (after a
    /// resize or content change). Extra values are ignored; missing ones
    /// leave the old position in place.
    pub fn update_offsets(&mut self, offsets: &[f64]) {
        for (heading, &offset) in self.outline.headings.iter_mut().zip(offsets) {
            heading.offset = offset;
        }
    }

    /// A scroll event arrived. Returns `true` when the host should schedule
    /// a frame callback; further events before that frame are dropped.
    pub fn on_scroll(&mut self) -> bool {
        self.scroll_gate.request()
    }

    /// A resize (or resize-observer) event arrived. Same one-pending-frame
    /// discipline as scrolling.
    pub fn on_resize(&mut self) -> bool {
        self.resize_gate.request()
    }

    /// The scheduled frame fired: recompute the active item from the latest
    /// metrics and plan any panel follow-scroll.
    ///
    /// `item_geometry` maps the newly active index to the panel and item
    /// measurements the host takes from its rendered list; return `None`
    /// when the panel is not measurable (hidden, detached).
    pub fn on_frame<F>(&mut self, metrics: &ViewportMetrics, item_geometry: F) -> Vec<Effect>
    where
        F: FnOnce(usize) -> Option<(PanelGeometry, ItemGeometry)>,
    {
        self.scroll_gate.complete();
        self.resize_gate.complete();

        let offsets: Vec<f64> = self.outline.headings.iter().map(|h| h.offset).collect();
        let mut effects = Vec::new();

        if let Some(change) = self.tracker.update(&offsets, metrics) {
            effects.push(Effect::SetActive {
                previous: change.previous,
                current: change.current,
            });

            if let Some(index) = change.current
                && let Some((panel, item)) = item_geometry(index)
                && let Some(plan) = plan_scroll(&panel, &item)
            {
                effects.push(Effect::ScrollPanel {
                    top: plan.top,
                    behavior: plan.behavior,
                });
            }
        }

        effects
    }

    /// An outline link was activated: smooth-scroll the document to the
    /// heading, offset to clear the fixed header.
    pub fn jump_to(&self, index: usize) -> Option<Effect> {
        let heading = self.outline.headings.get(index)?;
        Some(Effect::ScrollDocument {
            top: heading.offset - CLICK_OFFSET,
            behavior: ScrollBehavior::Smooth,
        })
    }
}
