//! TOC forest construction.

use crate::heading::Heading;

/// One entry in the outline tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct TocNode {
    /// Anchor id of the heading this entry points at.
    pub id: String,
    /// Heading label.
    pub text: String,
    /// Heading level as written in the document (1..=6).
    pub absolute_level: u8,
    /// `absolute_level - min_level`; the shallowest entries sit at 0.
    /// Indentation is a linear function of this, not of nesting depth.
    pub relative_level: u8,
    /// Entries nested under this one, in document order.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<TocNode>,
}

/// Give every heading a stable anchor id.
///
/// Existing ids are kept; missing ones are synthesized as
/// `heading-<index>` from the heading's position in the filtered sequence.
/// Returns the synthesized `(index, id)` pairs so the host can write them
/// back onto the document elements.
pub fn assign_ids(headings: &mut [Heading]) -> Vec<(usize, String)> {
    let mut synthesized = Vec::new();

    for (index, heading) in headings.iter_mut().enumerate() {
        if heading.id.as_deref().is_none_or(str::is_empty) {
            let id = format!("heading-{index}");
            heading.id = Some(id.clone());
            synthesized.push((index, id));
        }
    }

    synthesized
}

/// Build the outline forest from a filtered, id-assigned heading sequence.
///
/// A level-tracking stack holds the path from a root to the deepest open
/// node. Each heading closes every open node at its own relative level or
/// deeper, then attaches to whatever remains — the nearest preceding
/// shallower heading — or starts a new root. Any level sequence, monotonic
/// or not, yields a well-formed forest whose pre-order traversal matches
/// the input order.
pub fn build(filtered: &[Heading], min_level: u8) -> Vec<TocNode> {
    let mut forest: Vec<TocNode> = Vec::new();
    let mut stack: Vec<TocNode> = Vec::new();

    for (index, heading) in filtered.iter().enumerate() {
        let relative_level = heading.level.saturating_sub(min_level);

        let node = TocNode {
            id: heading
                .id
                .clone()
                .unwrap_or_else(|| format!("heading-{index}")),
            text: heading.text.clone(),
            absolute_level: heading.level,
            relative_level,
            children: Vec::new(),
        };

        // Close siblings and deeper nodes that cannot be this one's parent
        while stack.last().is_some_and(|top| top.relative_level >= relative_level) {
            let Some(closed) = stack.pop() else { break };
            attach(closed, &mut stack, &mut forest);
        }

        stack.push(node);
    }

    while let Some(closed) = stack.pop() {
        attach(closed, &mut stack, &mut forest);
    }

    forest
}

fn attach(node: TocNode, stack: &mut [TocNode], forest: &mut Vec<TocNode>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => forest.push(node),
    }
}
