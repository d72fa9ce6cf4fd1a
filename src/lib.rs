//! # rubric
//!
//! Table-of-contents extraction, rendering, and scroll tracking for web
//! documents.
//!
//! ## Features
//!
//! - Scan an HTML document for the headings inside a content container
//! - Build a hierarchical outline anchored at the shallowest heading
//!   present, capped at three relative levels
//! - Render the outline as nested ordered-list markup with the data
//!   attributes indentation and highlighting hang off of
//! - Track the active section against scroll position and plan panel
//!   follow-scrolls, with frame-coalesced event handling
//!
//! ## Quick Start
//!
//! ```
//! use rubric::{RenderOptions, TocController, extract_headings};
//!
//! let html = r#"<html><body><div id="article-content">
//!   <h2 id="intro">Intro</h2>
//!   <h3>Detail</h3>
//!   <h2>Wrap up</h2>
//! </div></body></html>"#;
//!
//! let headings = extract_headings(html, "article-content")
//!     .unwrap()
//!     .expect("content container present");
//! let toc = TocController::new(headings, &RenderOptions::default())
//!     .expect("outline is non-empty");
//!
//! assert!(toc.markup().contains("data-heading-id=\"intro\""));
//! assert_eq!(toc.min_level(), 2);
//! ```
//!
//! ## Runtime tracking
//!
//! The controller never touches a document. The host forwards scroll and
//! resize events to [`TocController::on_scroll`] / `on_resize` (which
//! coalesce them to one recomputation per frame), calls
//! [`TocController::on_frame`] with freshly sampled [`ViewportMetrics`],
//! and applies the returned [`Effect`]s: toggling the `active` class,
//! scrolling the panel, or scrolling the document after a click.

pub mod controller;
pub mod error;
pub mod heading;
pub mod outline;
pub mod render;
pub mod track;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use controller::{Effect, TocController};
pub use error::{Error, Result};
pub use heading::{Heading, extract_headings, extract_headings_bytes, extract_headings_file};
pub use outline::{Hierarchy, Outline, TocNode, analyze, assign_ids, build};
pub use render::RenderOptions;
pub use track::{
    ActiveChange, FrameGate, ItemGeometry, PanelGeometry, PanelScroll, ScrollBehavior,
    ScrollTracker, ViewportMetrics, back_to_top_visible, panel_needs_scroll, plan_scroll,
    reading_progress,
};
