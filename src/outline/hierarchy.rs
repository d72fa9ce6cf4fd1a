//! Heading hierarchy analysis.

use crate::heading::Heading;

/// Result of scanning a heading sequence.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    /// Minimum (most significant) level present.
    pub min_level: u8,
    /// Deepest level that will be displayed.
    pub max_display_level: u8,
    /// Order-preserving subsequence with `level <= max_display_level`.
    pub filtered: Vec<Heading>,
}

/// Displayed relative depth is capped at three levels.
const DISPLAY_LEVELS: u8 = 3;

/// Scan a document-ordered heading sequence and filter it for display.
///
/// The shallowest heading present anchors the outline: everything deeper
/// than `min_level + 2` is dropped so the outline never shows more than
/// three relative levels, regardless of how deep the document nests.
///
/// Returns `None` for an empty input.
pub fn analyze(headings: &[Heading]) -> Option<Hierarchy> {
    let min_level = headings.iter().map(|h| h.level).min()?;
    let max_display_level = min_level + (DISPLAY_LEVELS - 1);

    let filtered = headings
        .iter()
        .filter(|h| h.level <= max_display_level)
        .cloned()
        .collect();

    Some(Hierarchy {
        min_level,
        max_display_level,
        filtered,
    })
}
