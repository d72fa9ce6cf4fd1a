//! Nested ordered-list markup generation.
//!
//! Materializes an outline forest as the `<ol>`/`<li>` structure the TOC
//! panel displays. The output is a complete replacement for the panel's
//! content: the host swaps the container's children atomically, so repeated
//! renders never accumulate stale markup or stale listeners.

use std::fmt::Write;

use crate::outline::TocNode;
use crate::util::escape_html;

/// Rendering options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Add tooltip classes and a `data-tip` attribute to each link.
    pub tooltips: bool,
}

/// Render the forest as nested ordered lists.
///
/// Each item carries the data attributes the companion CSS and the scroll
/// tracker consume: `data-relative-level` drives indentation (a linear
/// function of relative level, so the outline stays readable under the
/// three-level cap), `data-heading-id` drives highlight matching.
pub fn render(forest: &[TocNode], options: &RenderOptions) -> String {
    let mut out = String::new();
    write_list(&mut out, forest, options);
    out
}

fn write_list(out: &mut String, nodes: &[TocNode], options: &RenderOptions) {
    out.push_str("<ol class=\"toc-list\">");

    for node in nodes {
        let id = escape_html(&node.id);
        let text = escape_html(&node.text);

        let _ = write!(
            out,
            "<li class=\"toc-item-wrapper\" style=\"--toc-indent-multiplier: {}\">",
            node.relative_level
        );

        let link_class = if options.tooltips {
            "toc-link tooltip tooltip-right"
        } else {
            "toc-link"
        };

        let _ = write!(
            out,
            "<a href=\"#{id}\" class=\"{link_class}\" data-relative-level=\"{}\" \
             data-absolute-level=\"{}\" data-heading-id=\"{id}\"",
            node.relative_level, node.absolute_level
        );
        if options.tooltips {
            let _ = write!(out, " data-tip=\"{text}\"");
        }
        let _ = write!(out, ">{text}</a>");

        if !node.children.is_empty() {
            write_list(out, &node.children, options);
        }

        out.push_str("</li>");
    }

    out.push_str("</ol>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::Heading;
    use crate::outline::{assign_ids, build};

    fn forest(levels: &[u8]) -> Vec<TocNode> {
        let mut headings: Vec<Heading> = levels
            .iter()
            .enumerate()
            .map(|(i, &level)| Heading {
                level,
                text: format!("Section {i}"),
                id: None,
                offset: i as f64,
            })
            .collect();
        assign_ids(&mut headings);
        let min = levels.iter().copied().min().unwrap_or(1);
        build(&headings, min)
    }

    #[test]
    fn test_flat_list() {
        let html = render(&forest(&[2, 2]), &RenderOptions::default());
        assert_eq!(html.matches("<ol").count(), 1);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("href=\"#heading-0\""));
        assert!(html.contains("data-heading-id=\"heading-1\""));
    }

    #[test]
    fn test_nested_list_structure() {
        let html = render(&forest(&[2, 3]), &RenderOptions::default());
        // Child list sits inside the parent <li>
        assert_eq!(html.matches("<ol").count(), 2);
        let parent_li = html.find("<li").unwrap();
        let child_ol = html.rfind("<ol").unwrap();
        let parent_close = html.find("</li>").unwrap();
        assert!(parent_li < child_ol && child_ol < parent_close);
    }

    #[test]
    fn test_data_attributes() {
        let html = render(&forest(&[2, 4]), &RenderOptions::default());
        assert!(html.contains("data-relative-level=\"0\""));
        assert!(html.contains("data-relative-level=\"2\""));
        assert!(html.contains("data-absolute-level=\"4\""));
        assert!(html.contains("--toc-indent-multiplier: 2"));
    }

    #[test]
    fn test_tooltips() {
        let options = RenderOptions { tooltips: true };
        let html = render(&forest(&[2]), &options);
        assert!(html.contains("tooltip tooltip-right"));
        assert!(html.contains("data-tip=\"Section 0\""));

        let plain = render(&forest(&[2]), &RenderOptions::default());
        assert!(!plain.contains("data-tip"));
    }

    #[test]
    fn test_text_escaped() {
        let nodes = vec![TocNode {
            id: "x".to_string(),
            text: "a < b & \"c\"".to_string(),
            absolute_level: 2,
            relative_level: 0,
            children: Vec::new(),
        }];
        let html = render(&nodes, &RenderOptions::default());
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let f = forest(&[2, 3, 3, 2, 4]);
        let options = RenderOptions { tooltips: true };
        assert_eq!(render(&f, &options), render(&f, &options));
    }
}
