//! WASM bindings for in-browser TOC generation.
//!
//! This module exposes the extraction and rendering pipeline to JavaScript
//! via wasm-bindgen. Scroll tracking stays on the JS side of the boundary:
//! the host keeps a [`crate::TocController`]-shaped loop of its own or calls
//! back in per frame; these bindings cover the build-and-render step.

use wasm_bindgen::prelude::*;

use crate::outline::Outline;
use crate::render::{RenderOptions, render};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Extract headings from `html` inside the `content_id` container and return
/// the rendered TOC markup.
///
/// Returns an empty string when the container is missing or holds no
/// headings — the caller hides the panel.
#[wasm_bindgen]
pub fn toc_markup(html: &str, content_id: &str, tooltips: bool) -> Result<String, JsValue> {
    let headings = crate::heading::extract_headings(html, content_id)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let Some(headings) = headings else {
        return Ok(String::new());
    };
    let Some(outline) = Outline::from_headings(&headings) else {
        return Ok(String::new());
    };

    Ok(render(&outline.forest, &RenderOptions { tooltips }))
}

/// Find which heading is active for a scroll position.
///
/// `offsets` are the displayed headings' document positions in order;
/// returns the active index or -1 when no section is in view.
#[wasm_bindgen]
pub fn active_heading(
    offsets: &[f64],
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
) -> i32 {
    let metrics = crate::track::ViewportMetrics {
        scroll_y,
        viewport_height,
        document_height,
    };
    let mut tracker = crate::track::ScrollTracker::new();
    match tracker.update(offsets, &metrics) {
        Some(change) => change.current.map_or(-1, |i| i as i32),
        None => -1,
    }
}
