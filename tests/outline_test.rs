//! Outline construction tests: hierarchy analysis and forest shape for the
//! documented scenarios, plus property checks over arbitrary level
//! sequences.

use proptest::prelude::*;
use rubric::{Heading, Outline, TocNode, analyze};

fn headings(levels: &[u8]) -> Vec<Heading> {
    levels
        .iter()
        .enumerate()
        .map(|(i, &level)| Heading {
            level,
            text: format!("Section {i}"),
            id: None,
            offset: i as f64 * 250.0,
        })
        .collect()
}

fn flatten<'a>(nodes: &'a [TocNode], out: &mut Vec<&'a TocNode>) {
    for node in nodes {
        out.push(node);
        flatten(&node.children, out);
    }
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_scenario_a() {
    // [2,3,3,2,4]: minLevel=2, nothing filtered, two roots
    let outline = Outline::from_headings(&headings(&[2, 3, 3, 2, 4])).unwrap();
    assert_eq!(outline.min_level, 2);
    assert_eq!(outline.max_display_level, 4);
    assert_eq!(outline.headings.len(), 5);

    assert_eq!(outline.forest.len(), 2);
    let levels: Vec<u8> = outline.forest[0].children.iter().map(|c| c.absolute_level).collect();
    assert_eq!(levels, [3, 3]);
    assert_eq!(outline.forest[1].children.len(), 1);
    assert_eq!(outline.forest[1].children[0].absolute_level, 4);
}

#[test]
fn test_scenario_b() {
    // [1..6]: only the first three survive filtering, forming a chain
    let outline = Outline::from_headings(&headings(&[1, 2, 3, 4, 5, 6])).unwrap();
    assert_eq!(outline.min_level, 1);
    assert_eq!(outline.max_display_level, 3);
    assert_eq!(outline.len(), 3);

    assert_eq!(outline.forest.len(), 1);
    let root = &outline.forest[0];
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].children.len(), 1);
    assert!(root.children[0].children[0].children.is_empty());
}

#[test]
fn test_scenario_c_empty() {
    assert!(Outline::from_headings(&[]).is_none());
    assert!(analyze(&[]).is_none());
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_ids_survive_and_fill_in() {
    let mut hs = headings(&[2, 3, 2]);
    hs[1].id = Some("kept".to_string());
    let outline = Outline::from_headings(&hs).unwrap();
    let ids: Vec<&str> = outline.headings.iter().filter_map(|h| h.id.as_deref()).collect();
    assert_eq!(ids, ["heading-0", "kept", "heading-2"]);

    let mut flat = Vec::new();
    flatten(&outline.forest, &mut flat);
    assert_eq!(flat[1].id, "kept");
}

#[test]
fn test_relative_levels_anchor_at_zero() {
    // A document whose shallowest heading is h4 still indents from zero
    let outline = Outline::from_headings(&headings(&[4, 5, 4, 6])).unwrap();
    assert_eq!(outline.min_level, 4);
    assert_eq!(outline.forest[0].relative_level, 0);
    assert_eq!(outline.forest[0].children[0].relative_level, 1);
}

proptest! {
    #[test]
    fn prop_min_level_and_filter(levels in prop::collection::vec(1u8..=6, 1..40)) {
        let hierarchy = analyze(&headings(&levels)).unwrap();
        let true_min = levels.iter().copied().min().unwrap();
        prop_assert_eq!(hierarchy.min_level, true_min);
        prop_assert!(hierarchy.filtered.iter().all(|h| h.level <= true_min + 2));
        // The shallowest heading always survives the filter
        prop_assert!(!hierarchy.filtered.is_empty());
    }

    #[test]
    fn prop_preorder_reproduces_document_order(levels in prop::collection::vec(1u8..=6, 1..40)) {
        let outline = Outline::from_headings(&headings(&levels)).unwrap();
        let mut flat = Vec::new();
        flatten(&outline.forest, &mut flat);

        let expected: Vec<&str> = outline.headings.iter().map(|h| h.text.as_str()).collect();
        let actual: Vec<&str> = flat.iter().map(|n| n.text.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_children_strictly_deeper(levels in prop::collection::vec(1u8..=6, 1..40)) {
        fn check(nodes: &[TocNode]) -> bool {
            nodes.iter().all(|node| {
                node.children.iter().all(|c| c.relative_level > node.relative_level)
                    && check(&node.children)
            })
        }
        let outline = Outline::from_headings(&headings(&levels)).unwrap();
        prop_assert!(check(&outline.forest));
    }

    #[test]
    fn prop_roots_sit_at_the_shallowest_open_level(levels in prop::collection::vec(1u8..=6, 1..40)) {
        // A node is a root exactly when no preceding heading is shallower,
        // i.e. the first heading is always a root and every later root's
        // level is <= all levels before it.
        let outline = Outline::from_headings(&headings(&levels)).unwrap();
        let displayed: Vec<u8> = outline.headings.iter().map(|h| h.level).collect();

        let mut expected_roots = 0;
        let mut running_min = u8::MAX;
        for &level in &displayed {
            if level <= running_min {
                expected_roots += 1;
                running_min = level;
            }
        }
        prop_assert_eq!(outline.forest.len(), expected_roots);
    }
}
