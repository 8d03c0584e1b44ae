//! Document domain model.
//!
//! # Responsibility
//! - Define the aggregate `Document` and its owned sub-objects.
//! - Provide lifecycle helpers for soft-delete and user-authorship flags.
//!
//! # Invariants
//! - `Sentence::id` is backend-assigned; a missing id marks a sentence as new
//!   to the backend.
//! - Soft-deleted sentences keep their record with empty `text` so position
//!   bookkeeping and backend sync stay stable.
//! - Sub-objects have no lifecycle of their own; they are created, mutated
//!   and discarded by reconciliation passes on the owning document.

use serde::{Deserialize, Serialize};

/// Backend-assigned integer primary key for sentences.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SentenceId = i64;

/// Backend-assigned integer primary key for documents.
pub type DocumentId = i64;

/// One sentence of document text with provenance flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Absent for sentences the user authored since the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SentenceId>,
    pub text: String,
    /// Zero-based order within the owning container.
    pub position: usize,
    /// True when the sentence originated from, or was touched by, a user edit.
    #[serde(default)]
    pub is_user_defined: bool,
    /// Soft-delete tombstone; deleted sentences keep empty text in place.
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Sentence {
    /// Creates a fresh user-authored sentence with no backend identity.
    pub fn user_authored(text: impl Into<String>, position: usize) -> Self {
        Self {
            id: None,
            text: text.into(),
            position,
            is_user_defined: true,
            is_deleted: false,
            url: None,
        }
    }

    /// Tombstones this sentence in place.
    ///
    /// Text is cleared but the record stays so positions and backend sync
    /// remain stable.
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.is_user_defined = true;
        self.text.clear();
    }

    /// Character length of the sentence text as the editor counts it.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A titled, ordered group of sentences within a document.
///
/// Sections are a flat sequence; nesting is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    /// Citation records scoped to this section, pruned on save like the
    /// document-level list.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Reference from an article to one sentence it sourced.
///
/// `position` mirrors the referenced sentence's current position and is
/// rewritten on every reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSentenceRef {
    pub id: SentenceId,
    pub position: usize,
}

/// Backend-sourced citation/provenance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub sentences: Vec<ArticleSentenceRef>,
}

/// Backend-suggested related link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SuggestedLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One saved revision snapshot, echoed back to the backend untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DocumentHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Opaque backend payload; never interpreted by the editor core.
    #[serde(
        rename = "articleList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub article_list: Option<serde_json::Value>,
}

/// Aggregate root owned by the document service.
///
/// `sentences` holds the untitled introduction; titled content lives in
/// `sections`. The whole aggregate is replaced on load and recomputed in
/// full on save; there is no partial persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Introduction sentences with no owning section.
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub suggested_links: Vec<SuggestedLink>,
    #[serde(rename = "documentHistories", default)]
    pub document_histories: Vec<DocumentHistory>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document awaiting a backend load.
    pub fn new() -> Self {
        Self {
            id: None,
            title: String::new(),
            // Authorship is not tracked by the editor yet.
            author: "no_auth".to_string(),
            sentences: Vec::new(),
            sections: Vec::new(),
            keywords: Vec::new(),
            articles: Vec::new(),
            suggested_links: Vec::new(),
            document_histories: Vec::new(),
        }
    }

    /// Index of the first section whose heading equals `heading`, if any.
    pub fn find_section_index(&self, heading: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.heading == heading)
    }

    /// Flattened render of the whole document.
    ///
    /// Introduction sentences are space-joined, skipping literal
    /// single-space placeholder texts; each section contributes a
    /// bold-wrapped heading on its own line followed by its sentences.
    pub fn render_text(&self) -> String {
        let mut text = String::new();
        for sentence in &self.sentences {
            if sentence.text != " " {
                text.push(' ');
                text.push_str(&sentence.text);
            }
        }
        let mut text = text.trim_start().to_string();

        for section in &self.sections {
            text.push_str(&format!("\n\n<b>{}</b>\n", section.heading));
            for sentence in &section.sentences {
                text.push(' ');
                text.push_str(&sentence.text);
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Section, Sentence};

    fn sentence(id: i64, text: &str, position: usize) -> Sentence {
        Sentence {
            id: Some(id),
            text: text.to_string(),
            position,
            is_user_defined: false,
            is_deleted: false,
            url: None,
        }
    }

    #[test]
    fn user_authored_has_no_backend_identity() {
        let s = Sentence::user_authored("Fresh text.", 3);
        assert_eq!(s.id, None);
        assert_eq!(s.position, 3);
        assert!(s.is_user_defined);
        assert!(!s.is_deleted);
    }

    #[test]
    fn soft_delete_clears_text_and_keeps_record() {
        let mut s = sentence(7, "Doomed.", 0);
        s.soft_delete();
        assert!(s.is_deleted);
        assert!(s.is_user_defined);
        assert_eq!(s.text, "");
        assert_eq!(s.id, Some(7));
    }

    #[test]
    fn render_text_skips_placeholder_and_wraps_headings() {
        let mut doc = Document::new();
        doc.sentences = vec![sentence(1, "First.", 0), sentence(2, " ", 1)];
        doc.sections = vec![Section {
            heading: "Background".to_string(),
            sentences: vec![sentence(3, "Deep.", 0), sentence(4, "Deeper.", 1)],
            ..Section::default()
        }];

        assert_eq!(
            doc.render_text(),
            "First.\n\n<b>Background</b>\n Deep. Deeper."
        );
    }

    #[test]
    fn find_section_index_matches_first_heading() {
        let mut doc = Document::new();
        doc.sections = vec![
            Section {
                heading: "One".to_string(),
                ..Section::default()
            },
            Section {
                heading: "Two".to_string(),
                ..Section::default()
            },
        ];
        assert_eq!(doc.find_section_index("Two"), Some(1));
        assert_eq!(doc.find_section_index("Three"), None);
    }
}
