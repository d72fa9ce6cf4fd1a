//! File-to-outline tests: reading documents from disk, including non-UTF-8
//! input, and serializing the outline.

use std::io::Write;

use rubric::{Outline, extract_headings_bytes, extract_headings_file};
use tempfile::NamedTempFile;

#[test]
fn test_outline_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<html><body><div id="article-content">
<h2>Alpha</h2><h3>Alpha detail</h3><h2>Beta</h2>
</div></body></html>"#
    )
    .unwrap();

    let headings = extract_headings_file(file.path(), "article-content")
        .unwrap()
        .unwrap();
    let outline = Outline::from_headings(&headings).unwrap();
    assert_eq!(outline.forest.len(), 2);
    assert_eq!(outline.forest[0].text, "Alpha");
}

#[test]
fn test_windows_1252_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<div id=\"c\"><h2>R\xe9sum\xe9</h2></div>").unwrap();

    let headings = extract_headings_file(file.path(), "c").unwrap().unwrap();
    assert_eq!(headings[0].text, "R\u{e9}sum\u{e9}");
}

#[test]
fn test_outline_serializes_to_json() {
    let html = r#"<div id="c"><h2 id="top">Top</h2><h3>Nested</h3></div>"#;
    let headings = extract_headings_bytes(html.as_bytes(), "c", None)
        .unwrap()
        .unwrap();
    let outline = Outline::from_headings(&headings).unwrap();

    let json = serde_json::to_value(&outline.forest).unwrap();
    assert_eq!(json[0]["id"], "top");
    assert_eq!(json[0]["relative_level"], 0);
    assert_eq!(json[0]["children"][0]["text"], "Nested");
    // Leaves omit the empty children array entirely
    assert!(json[0]["children"][0].get("children").is_none());
}
