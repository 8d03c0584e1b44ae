//! HTML-to-plain-text conversion for editor snapshots.
//!
//! # Responsibility
//! - Strip markup tags from rich-text editor HTML.
//! - Decode the character entities the editor emits.
//!
//! # Invariants
//! - A dangling `<` with no closing `>` survives as text; the section
//!   splitter leaves exactly such residue and relies on it being trimmed by
//!   [`section_part_text`](crate::segment::section::section_part_text), not
//!   here.
//! - Entities are decoded after tags are removed, so decoded angle brackets
//!   are never re-interpreted as markup.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Converts an HTML fragment to its text content.
///
/// Tags are removed without inserting separators, matching how a DOM
/// `textContent` read flattens adjacent block elements.
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    decode_entities(&stripped)
}

/// Decodes the small entity set produced by the rich-text editor.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        // Ampersand last so freshly decoded text cannot cascade.
        .replace("&amp;", "&")
}
