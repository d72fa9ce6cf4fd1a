//! Outline construction: hierarchy analysis and tree building.
//!
//! Turns a flat, document-ordered heading sequence into a forest of TOC
//! nodes. Both passes are pure functions over plain data; nothing here
//! touches a document.

mod hierarchy;
mod tree;

pub use hierarchy::{Hierarchy, analyze};
pub use tree::{TocNode, assign_ids, build};

use crate::heading::Heading;

/// A fully analyzed and built outline.
#[derive(Debug, Clone)]
pub struct Outline {
    /// Displayed headings (filtered to three relative levels, ids assigned).
    pub headings: Vec<Heading>,
    /// Minimum heading level present in the input.
    pub min_level: u8,
    /// Deepest level displayed (`min_level + 2`).
    pub max_display_level: u8,
    /// Root nodes in document order.
    pub forest: Vec<TocNode>,
}

impl Outline {
    /// Analyze, filter, assign ids, and build the forest in one step.
    ///
    /// Returns `None` for an empty heading set — the caller hides the TOC
    /// panel instead of rendering an empty list.
    pub fn from_headings(headings: &[Heading]) -> Option<Outline> {
        let hierarchy = analyze(headings)?;
        let mut filtered = hierarchy.filtered;
        assign_ids(&mut filtered);
        let forest = build(&filtered, hierarchy.min_level);

        Some(Outline {
            headings: filtered,
            min_level: hierarchy.min_level,
            max_display_level: hierarchy.max_display_level,
            forest,
        })
    }

    /// Total number of entries in the forest, including nested ones.
    pub fn len(&self) -> usize {
        fn count(nodes: &[TocNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.forest)
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }
}
