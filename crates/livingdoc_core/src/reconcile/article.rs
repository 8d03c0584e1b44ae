//! Article citation reference pruning.
//!
//! # Responsibility
//! - Drop article references to sentences that were edited or deleted.
//! - Re-number surviving references to the referenced sentence's current
//!   position.
//!
//! # Invariants
//! - The article list keeps its cardinality; only each article's reference
//!   list shrinks.
//! - After pruning, every reference id exists in the reconciled sentence set
//!   and carries that sentence's position.
//!
//! The kept list is rebuilt functionally rather than spliced by ascending
//! index, which removes the index-shift hazard of in-place removal outright.

use std::collections::HashMap;

use log::debug;

use crate::model::document::{Article, Sentence, SentenceId};

/// Prunes stale sentence references from `articles` against the reconciled
/// `sentences` of the same container.
///
/// Sentences without a backend id (freshly user-authored) cannot be
/// referenced yet and do not keep any reference alive.
pub fn prune_article_refs(sentences: &[Sentence], articles: &mut [Article]) {
    let positions: HashMap<SentenceId, usize> = sentences
        .iter()
        .filter_map(|sentence| sentence.id.map(|id| (id, sentence.position)))
        .collect();

    let mut dropped = 0usize;
    for article in articles.iter_mut() {
        let before = article.sentences.len();
        article.sentences.retain_mut(|reference| {
            match positions.get(&reference.id) {
                Some(&position) => {
                    reference.position = position;
                    true
                }
                None => false,
            }
        });
        dropped += before - article.sentences.len();
    }

    if dropped > 0 {
        debug!(
            "event=article_prune module=reconcile articles={} dropped_refs={}",
            articles.len(),
            dropped
        );
    }
}
