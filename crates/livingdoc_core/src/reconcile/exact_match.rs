//! Exact-text-match sentence reconciliation.
//!
//! # Responsibility
//! - Rebuild one container's sentence list from newly segmented texts,
//!   reusing prior records wherever the text is byte-for-byte unchanged.
//!
//! # Invariants
//! - Output positions are contiguous and zero-based.
//! - A reused record keeps its backend id and provenance flags; only
//!   `position` is rewritten.
//! - Unmatched new text yields a record with no id, signalling "new" to the
//!   backend.
//!
//! Identity-by-exact-text-match is a deliberate simplicity-over-precision
//! tradeoff: editing a single character of a sentence drops its backend id.
//! The trait seam exists so an LCS or fingerprint matcher can be substituted
//! without touching callers.

use log::debug;

use crate::model::document::Sentence;

/// Strategy seam for mapping segmented editor text onto sentence records.
pub trait SentenceReconciler {
    /// Produces the new ordered sentence list for one container.
    fn reconcile(&self, old_sentences: &[Sentence], new_texts: &[String]) -> Vec<Sentence>;
}

/// The shipped strategy: identity is exact string equality.
///
/// When the same text occurs more than once in `old_sentences`, the first
/// occurrence wins every time it is asked for — a documented
/// non-determinism of which record "is" the sentence, inherent to
/// exact-match identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTextMatchReconciler;

impl SentenceReconciler for ExactTextMatchReconciler {
    fn reconcile(&self, old_sentences: &[Sentence], new_texts: &[String]) -> Vec<Sentence> {
        let mut reused = 0usize;
        let reconciled: Vec<Sentence> = new_texts
            .iter()
            .enumerate()
            .map(|(position, text)| {
                match old_sentences.iter().find(|old| old.text == *text) {
                    Some(matched) => {
                        reused += 1;
                        let mut kept = matched.clone();
                        kept.position = position;
                        kept
                    }
                    None => Sentence::user_authored(text.clone(), position),
                }
            })
            .collect();

        debug!(
            "event=reconcile module=reconcile old={} new={} reused={} fabricated={}",
            old_sentences.len(),
            new_texts.len(),
            reused,
            reconciled.len() - reused
        );
        reconciled
    }
}
