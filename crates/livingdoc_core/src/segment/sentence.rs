//! Punctuation-and-capitalization sentence segmentation.
//!
//! # Responsibility
//! - Split plain text into ordered sentence strings.
//!
//! # Invariants
//! - The boundary terminator stays attached to the preceding sentence.
//! - Input with no detected boundary yields exactly one piece.
//!
//! This is a heuristic, not a grammar: abbreviations ("Dr. Smith"), decimal
//! numbers mid-sentence followed by a capital, and quoted sentences ending
//! away from their punctuation all mis-split. That is a known limitation of
//! the strategy, kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// A terminator (`.`, `?`, `!`) followed by whitespace and an ASCII
/// uppercase letter or digit marks a sentence boundary.
static SENTENCE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?!])\s+[A-Z0-9]").expect("valid sentence boundary regex"));

/// Splits `text` into ordered sentence strings.
///
/// A single trailing newline (appended by the editor widget) is stripped
/// before splitting. The whitespace between sentences is dropped; the
/// uppercase letter or digit that signalled the boundary starts the next
/// sentence.
pub fn segment(text: &str) -> Vec<String> {
    let input = strip_trailing_newline(text);

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY_RE.find_iter(input) {
        // Terminator, whitespace run, and the following [A-Z0-9] are all
        // single-byte, so these offsets sit on char boundaries.
        let end = boundary.start() + 1;
        sentences.push(input[start..end].to_string());
        start = boundary.end() - 1;
    }
    sentences.push(input[start..].to_string());
    sentences
}

fn strip_trailing_newline(text: &str) -> &str {
    if text.ends_with('\n') {
        match text.rfind('\n') {
            Some(index) => &text[..index],
            None => text,
        }
    } else {
        text
    }
}
