//! Document editing façade.
//!
//! # Responsibility
//! - Own the structured document state for one editing session.
//! - Run the save pipeline: section split → per-part segmentation →
//!   reconciliation → article pruning → full-payload transmit.
//! - Delegate fine-grained editor change events to the edit tracker.
//!
//! # Invariants
//! - The owned state only changes to a reconciled payload after the backend
//!   accepted it; a failed save leaves state untouched.
//! - Reconciliation is skipped entirely when the editor plain text is empty;
//!   the current payload is still transmitted.
//! - A single editing session is assumed: overlapping saves are unguarded by
//!   design (last response wins).

use log::warn;

use crate::backend::api::{ApiError, ApiResult, DocumentBackend};
use crate::model::document::{Document, DocumentId};
use crate::reconcile::article::prune_article_refs;
use crate::reconcile::edit_tracker;
use crate::reconcile::exact_match::{ExactTextMatchReconciler, SentenceReconciler};
use crate::segment::section::{heading_name, section_part_text, split_sections, SectionKind};
use crate::segment::sentence::segment;

/// Name used for the untitled leading part of the editor contents.
const INTRODUCTION: &str = "Introduction";

/// Stateful façade binding editor snapshots to the document backend.
pub struct DocumentService<B: DocumentBackend> {
    backend: B,
    reconciler: Box<dyn SentenceReconciler>,
    document: Document,
}

impl<B: DocumentBackend> DocumentService<B> {
    /// Creates a service with an empty document and exact-text-match
    /// reconciliation.
    pub fn new(backend: B) -> Self {
        Self::with_reconciler(backend, Box::new(ExactTextMatchReconciler))
    }

    /// Creates a service with a caller-chosen reconciliation strategy.
    pub fn with_reconciler(backend: B, reconciler: Box<dyn SentenceReconciler>) -> Self {
        Self {
            backend,
            reconciler,
            document: Document::new(),
        }
    }

    /// Current document state.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable document state, for edit tracking callers and fixtures.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Flattened render the editor widget binds to.
    pub fn text(&self) -> String {
        self.document.render_text()
    }

    /// Replaces the whole document state from the backend.
    pub fn load(&mut self, id: DocumentId) -> ApiResult<()> {
        self.document = self.backend.fetch_document(id)?;
        Ok(())
    }

    /// Reconciles editor contents into the document and transmits it.
    ///
    /// `editor_text` is the plain-text snapshot, `editor_html` the HTML
    /// snapshot of the same contents. An empty plain text skips
    /// reconciliation but still transmits the current payload.
    pub fn save(&mut self, editor_text: &str, editor_html: &str) -> ApiResult<()> {
        let id = self.document.id.ok_or(ApiError::NoDocumentId)?;
        let mut payload = self.document.clone();

        if !editor_text.is_empty() {
            self.reconcile_editor_html(&mut payload, editor_html);
        }

        self.backend.store_document(id, &payload)?;
        self.document = payload;
        Ok(())
    }

    /// Requests a fresh whole-document summary and replaces state.
    pub fn generate_user_summary(&mut self) -> ApiResult<()> {
        let id = self.document.id.ok_or(ApiError::NoDocumentId)?;
        self.document = self.backend.user_summary(id)?;
        Ok(())
    }

    /// Requests a summary for one section heading and replaces state.
    pub fn generate_section_summary(&mut self, heading: &str) -> ApiResult<()> {
        let id = self.document.id.ok_or(ApiError::NoDocumentId)?;
        self.document = self.backend.section_summary(id, heading)?;
        Ok(())
    }

    /// Replaces a word across the generated summary and replaces state.
    pub fn change_word(&mut self, old_word: &str, new_word: &str) -> ApiResult<()> {
        let id = self.document.id.ok_or(ApiError::NoDocumentId)?;
        self.document = self.backend.change_word(id, old_word, new_word)?;
        Ok(())
    }

    /// Applies a raw deletion event from the editor change stream.
    pub fn track_deletion(&mut self, position: usize, size: usize) {
        edit_tracker::track_deletion(&mut self.document, position, size);
    }

    /// Applies a raw insertion event from the editor change stream.
    pub fn track_insertion(&mut self, position: usize, inserted_text: &str, old_text: &str) {
        edit_tracker::track_insertion(&mut self.document, position, inserted_text, old_text);
    }

    /// Runs the reconciliation pipeline over one editor HTML snapshot.
    fn reconcile_editor_html(&self, payload: &mut Document, editor_html: &str) {
        let split = split_sections(editor_html);
        let parts = pair_parts(&split.parts, split.has_sections);
        let last = parts.len() - 1;

        for (entry_index, (name, body_html)) in parts.iter().enumerate() {
            if entry_index == 0 {
                let text = section_part_text(body_html, SectionKind::Introduction);
                let texts = segment(&text);
                let reconciled = self.reconciler.reconcile(&payload.sentences, &texts);
                prune_article_refs(&reconciled, &mut payload.articles);
                payload.sentences = reconciled;
                continue;
            }

            let Some(section_index) = payload.find_section_index(name) else {
                // Headings typed since the last load have no section record
                // yet; they are picked up by the next summary round trip.
                warn!(
                    "event=unknown_heading module=service heading_len={}",
                    name.len()
                );
                continue;
            };

            let kind = if entry_index == last {
                SectionKind::Final
            } else {
                SectionKind::Middle
            };
            let texts = segment(&section_part_text(body_html, kind));

            let section = &mut payload.sections[section_index];
            let reconciled = self.reconciler.reconcile(&section.sentences, &texts);
            prune_article_refs(&reconciled, &mut section.articles);
            section.sentences = reconciled;
        }
    }
}

/// Pairs raw split parts into `(name, body)` entries.
///
/// Part 0 is always the untitled introduction; afterwards odd parts are
/// heading candidates (residual `</` trimmed) and even parts their bodies.
/// A heading with no following body pairs with an empty one — the fragile
/// odd/even pairing is a documented risk of the bold-marker heuristic.
fn pair_parts(parts: &[String], has_sections: bool) -> Vec<(String, String)> {
    let mut paired = Vec::new();
    let intro_body = parts.first().cloned().unwrap_or_default();
    paired.push((INTRODUCTION.to_string(), intro_body));

    if has_sections {
        let mut index = 1;
        while index < parts.len() {
            let name = heading_name(&parts[index]).to_string();
            let body = parts.get(index + 1).cloned().unwrap_or_default();
            paired.push((name, body));
            index += 2;
        }
    }
    paired
}

#[cfg(test)]
mod tests {
    use super::pair_parts;

    fn parts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_intro_heading_and_body() {
        let paired = pair_parts(
            &parts(&["intro<p><", "History</", " body.</p>"]),
            true,
        );
        assert_eq!(
            paired,
            vec![
                ("Introduction".to_string(), "intro<p><".to_string()),
                ("History".to_string(), " body.</p>".to_string()),
            ]
        );
    }

    #[test]
    fn heading_without_body_pairs_with_empty() {
        let paired = pair_parts(&parts(&["intro<", "Dangling</"]), true);
        assert_eq!(paired[1], ("Dangling".to_string(), String::new()));
    }

    #[test]
    fn no_sections_is_intro_only() {
        let paired = pair_parts(&parts(&["whole input"]), false);
        assert_eq!(paired.len(), 1);
        assert_eq!(paired[0].0, "Introduction");
    }
}
