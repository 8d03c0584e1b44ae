//! Bold-tag section boundary detection.
//!
//! # Responsibility
//! - Split an editor HTML blob into alternating intro/heading/body parts.
//! - Apply the per-part residual trimming the raw split leaves behind.
//!
//! # Invariants
//! - Without a balanced bold pair the whole input is one part and
//!   `has_sections` is false.
//! - Parts alternate `[introBody, heading1, body1, heading2, body2, ...]`.
//!
//! The split marker is the shared tail of the open and close tag
//! (`strong>` / `b>`), so heading parts keep a trailing `</` and body parts
//! keep a trailing `<`. Callers pair odd (heading) and even (body) indices;
//! that pairing is an open correctness risk when a heading is not closed
//! before the next body starts.

use log::debug;

use crate::segment::html::html_to_text;

/// Result of bold-tag section detection over one HTML blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSplit {
    /// Whether a balanced bold open/close pair was found.
    pub has_sections: bool,
    /// Raw parts; one element equal to the input when `has_sections` is
    /// false.
    pub parts: Vec<String>,
}

/// Which trimming rule applies to a section part's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// The untitled introduction before the first heading.
    Introduction,
    /// A titled section that is not the last part of the editor contents.
    Middle,
    /// The last titled section; the raw split leaves no residue after it.
    Final,
}

/// Detects section boundaries in editor HTML via inline bold markers.
///
/// `<strong>`/`</strong>` is preferred over `<b>`/`</b>` when both closes
/// and opens of the former are present.
pub fn split_sections(html: &str) -> SectionSplit {
    let marker = if html.contains("<strong>") && html.contains("</strong>") {
        Some("strong>")
    } else if html.contains("<b>") && html.contains("</b>") {
        Some("b>")
    } else {
        None
    };

    let split = match marker {
        Some(marker) => SectionSplit {
            has_sections: true,
            parts: html.split(marker).map(str::to_string).collect(),
        },
        None => SectionSplit {
            has_sections: false,
            parts: vec![html.to_string()],
        },
    };
    debug!(
        "event=section_split module=segment has_sections={} part_count={}",
        split.has_sections,
        split.parts.len()
    );
    split
}

/// Converts one raw section part to plain text, trimming split residue.
///
/// Introduction and middle parts end in the `<` left by the next heading's
/// opening tag; the final part has nothing after it. Only the first stray
/// `<` is removed, mirroring a single-occurrence replace.
pub fn section_part_text(part_html: &str, kind: SectionKind) -> String {
    let text = html_to_text(part_html);
    match kind {
        SectionKind::Introduction | SectionKind::Middle => remove_first('<', &text),
        SectionKind::Final => text,
    }
}

/// Trims the residual `</` tag suffix off a raw heading part.
pub fn heading_name(raw_heading: &str) -> &str {
    raw_heading.strip_suffix("</").unwrap_or(raw_heading)
}

fn remove_first(needle: char, text: &str) -> String {
    match text.find(needle) {
        Some(index) => {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..index]);
            out.push_str(&text[index + needle.len_utf8()..]);
            out
        }
        None => text.to_string(),
    }
}
