//! Heading extraction from HTML content.
//!
//! Scans a document for a content container (an element with a known `id`)
//! and collects the `h1`..`h6` elements inside it, in document order. The
//! scan is streaming and tolerant of HTML: void elements, character entities,
//! and case-insensitive tag names are handled without building a DOM.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};
use crate::util::decode_text;

/// One heading in a document.
///
/// `offset` is the heading's vertical position, supplied by the host once
/// layout exists. The extractor seeds it with the element's byte position in
/// the source so document order survives when there is no layout at all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Heading {
    /// Nesting level, 1 (most significant) through 6.
    pub level: u8,
    /// Flattened, whitespace-normalized label.
    pub text: String,
    /// The element's `id` attribute, if it carried one.
    pub id: Option<String>,
    /// Vertical position in the document.
    pub offset: f64,
}

/// Elements that never have content and therefore never produce an end tag.
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"param", b"source", b"track", b"wbr",
];

/// Extract the headings inside the element whose `id` is `content_id`.
///
/// Returns `Ok(None)` when the container is absent — the caller should hide
/// the TOC panel rather than render an empty outline. A present container
/// with no headings yields `Ok(Some(vec![]))`.
pub fn extract_headings(html: &str, content_id: &str) -> Result<Option<Vec<Heading>>> {
    let mut reader = Reader::from_str(html);
    reader.config_mut().check_end_names = false;
    reader.config_mut().allow_unmatched_ends = true;

    let mut headings = Vec::new();
    let mut found_container = false;
    // Open elements inside the container, innermost last. End tags unwind
    // only to a matching open tag, so stray closes cannot end the scan early.
    let mut open_tags: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<OpenHeading> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let local = lowercase_local(e.name().as_ref());

                // Raw-text elements would otherwise feed markup-looking
                // script bodies into the scanner.
                if local == b"script" || local == b"style" {
                    skip_raw_element(&mut reader, &local)?;
                    continue;
                }

                if !found_container {
                    if attribute_value(&e, b"id")?.as_deref() == Some(content_id) {
                        found_container = true;
                        open_tags.push(local);
                    }
                    continue;
                }

                if let Some(level) = heading_level(&local) {
                    // A new heading implicitly closes a malformed open one.
                    if let Some(open) = current.take() {
                        headings.push(open.finish());
                    }
                    current = Some(OpenHeading {
                        level,
                        tag: local.clone(),
                        id: attribute_value(&e, b"id")?,
                        offset: reader.buffer_position() as f64,
                        text: String::new(),
                    });
                }

                if !is_void(&local) {
                    open_tags.push(local);
                }
            }
            Ok(Event::Empty(e)) => {
                let local = lowercase_local(e.name().as_ref());

                if !found_container {
                    if attribute_value(&e, b"id")?.as_deref() == Some(content_id) {
                        // Empty container: present, but nothing to outline.
                        return Ok(Some(Vec::new()));
                    }
                    continue;
                }

                if let Some(level) = heading_level(&local) {
                    headings.push(Heading {
                        level,
                        text: String::new(),
                        id: attribute_value(&e, b"id")?,
                        offset: reader.buffer_position() as f64,
                    });
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut open) = current {
                    open.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut open) = current {
                    open.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let Some(ref mut open) = current {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    if let Some(resolved) = resolve_entity(&entity) {
                        open.text.push_str(&resolved);
                    }
                }
            }
            Ok(Event::End(e)) => {
                if !found_container {
                    continue;
                }

                let local = lowercase_local(e.name().as_ref());
                if current.as_ref().is_some_and(|open| open.tag == local)
                    && let Some(open) = current.take()
                {
                    headings.push(open.finish());
                }

                // Void elements never open, so their XHTML-style closes
                // (</br>) have nothing to unwind. Other end tags with no
                // matching open tag are strays and are ignored too.
                if !is_void(&local)
                    && let Some(pos) = open_tags.iter().rposition(|tag| *tag == local)
                {
                    open_tags.truncate(pos);
                    if open_tags.is_empty() {
                        break;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    if let Some(open) = current.take() {
        headings.push(open.finish());
    }

    if found_container {
        Ok(Some(headings))
    } else {
        Ok(None)
    }
}

/// Byte-level entry point: decodes the document (UTF-8, hint, or CP1252
/// fallback) before scanning.
pub fn extract_headings_bytes(
    bytes: &[u8],
    content_id: &str,
    hint_encoding: Option<&str>,
) -> Result<Option<Vec<Heading>>> {
    let html = decode_text(bytes, hint_encoding);
    extract_headings(&html, content_id)
}

/// Read a document from disk and extract its headings.
pub fn extract_headings_file(
    path: impl AsRef<std::path::Path>,
    content_id: &str,
) -> Result<Option<Vec<Heading>>> {
    let bytes = std::fs::read(path)?;
    extract_headings_bytes(&bytes, content_id, None)
}

/// A heading whose end tag has not been seen yet.
struct OpenHeading {
    level: u8,
    tag: Vec<u8>,
    id: Option<String>,
    offset: f64,
    text: String,
}

impl OpenHeading {
    fn finish(self) -> Heading {
        Heading {
            level: self.level,
            text: normalize_whitespace(&self.text),
            id: self.id,
            offset: self.offset,
        }
    }
}

fn heading_level(local: &[u8]) -> Option<u8> {
    match local {
        b"h1" => Some(1),
        b"h2" => Some(2),
        b"h3" => Some(3),
        b"h4" => Some(4),
        b"h5" => Some(5),
        b"h6" => Some(6),
        _ => None,
    }
}

fn is_void(local: &[u8]) -> bool {
    VOID_ELEMENTS.contains(&local)
}

/// Strip any namespace prefix and lowercase (HTML tag names are
/// case-insensitive).
fn lowercase_local(name: &[u8]) -> Vec<u8> {
    let local = name
        .iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name);
    local.to_ascii_lowercase()
}

fn attribute_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref().eq_ignore_ascii_case(key) {
            return Ok(Some(String::from_utf8(attr.value.to_vec())?));
        }
    }
    Ok(None)
}

/// Consume events until the matching end tag of a raw-text element.
fn skip_raw_element(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<()> {
    let mut nesting = 1u32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if lowercase_local(e.name().as_ref()) == tag {
                    nesting += 1;
                }
            }
            Ok(Event::End(e)) => {
                if lowercase_local(e.name().as_ref()) == tag {
                    nesting -= 1;
                    if nesting == 0 {
                        return Ok(());
                    }
                }
            }
            Ok(Event::Eof) => return Ok(()),
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        "nbsp" => return Some("\u{a0}".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#')
        && let Ok(code) = dec.parse::<u32>()
        && let Some(c) = char::from_u32(code)
    {
        return Some(c.to_string());
    }

    None
}
