//! Positional edit tracking over the structured document.
//!
//! # Responsibility
//! - Apply raw (position, length) deletion events from the editor change
//!   stream directly to sentence records.
//! - Apply multi-word insertion events by splicing new sentence records at
//!   the located offset.
//!
//! # Invariants
//! - Offsets are counted in characters with exactly one joining character
//!   between adjacent sentences (and after each section heading).
//! - Whole-sentence deletions tombstone records in place; they never remove
//!   them.
//! - Positions of surrounding sentences are left stale here; the next
//!   save-time reconciliation renumbers them.
//!
//! Deletions that cross a sentence boundary without starting exactly on one
//! are an unhandled known gap: the walk falls through and the event is
//! logged and dropped.

use log::{debug, warn};

use crate::model::document::{Document, Sentence};

/// Applies a text-deletion event of `size` characters at `position`.
///
/// Two supported shapes:
/// - the deletion starts exactly at a sentence boundary and covers at least
///   that whole sentence: whole sentences are tombstoned front-to-back until
///   the remaining size is smaller than the next candidate;
/// - the deletion lies strictly within one sentence: the character range is
///   spliced out and the sentence marked user-defined.
pub fn track_deletion(document: &mut Document, position: usize, size: usize) {
    let mut sentence_start = 0;
    let mut index = 0;

    while index < document.sentences.len() {
        let length = document.sentences[index].char_len();
        let sentence_end = sentence_start + length;

        if position == sentence_start && size >= length {
            tombstone_whole_sentences(document, size, index);
            return;
        }

        if position >= sentence_start && position < sentence_end && size < length {
            let local = position - sentence_start;
            let sentence = &mut document.sentences[index];
            sentence.is_user_defined = true;
            sentence.text = splice_out_chars(&sentence.text, local, size);
            debug!(
                "event=deletion_within_sentence module=edit_tracker index={} local={} size={}",
                index, local, size
            );
            return;
        }

        // One joining character separates adjacent sentences.
        sentence_start = sentence_end + 1;
        index += 1;
    }

    // Known gap: a deletion crossing a sentence boundary without starting
    // exactly on one lands here and is dropped.
    warn!(
        "event=deletion_unhandled module=edit_tracker position={} size={}",
        position, size
    );
}

fn tombstone_whole_sentences(document: &mut Document, mut size: usize, mut index: usize) {
    while index < document.sentences.len() {
        let length = document.sentences[index].char_len();
        if size < length {
            break;
        }
        size -= length;
        document.sentences[index].soft_delete();
        debug!(
            "event=sentence_tombstoned module=edit_tracker index={} remaining_size={}",
            index, size
        );
        index += 1;
    }
}

fn splice_out_chars(text: &str, start: usize, count: usize) -> String {
    text.chars()
        .take(start)
        .chain(text.chars().skip(start + count))
        .collect()
}

/// Applies a text-insertion event at `position`.
///
/// Single-word insertions are accepted as no-ops at this layer; save-time
/// segmentation picks them up. Multi-word insertions are split on `.` into
/// new user-authored records spliced in after the sentence the cumulative
/// offset walk lands on. When the offset lands past the introduction, the
/// walk continues over sections and inserts into the first section it lands
/// inside, stopping there.
pub fn track_insertion(
    document: &mut Document,
    position: usize,
    inserted_text: &str,
    _old_text: &str,
) {
    if inserted_text.split_whitespace().count() <= 1 {
        return;
    }

    let mut current_length = 0;
    let mut consumed = 0;
    while current_length <= position && consumed < document.sentences.len() {
        current_length += document.sentences[consumed].char_len() + 1;
        consumed += 1;
    }

    if consumed >= document.sentences.len() && position > current_length {
        track_insertion_section(document, position, current_length, inserted_text);
        return;
    }

    let anchor = consumed.saturating_sub(1);
    let fresh = split_inserted_sentences(inserted_text, anchor);
    debug!(
        "event=insertion module=edit_tracker container=introduction at={} count={}",
        consumed,
        fresh.len()
    );
    document.sentences.splice(consumed..consumed, fresh);
}

fn track_insertion_section(
    document: &mut Document,
    position: usize,
    current_length: usize,
    inserted_text: &str,
) {
    let mut offset = current_length;

    for (section_index, section) in document.sections.iter_mut().enumerate() {
        offset += section.heading.chars().count() + 1;

        let mut consumed = 0;
        while offset < position && consumed < section.sentences.len() {
            offset += section.sentences[consumed].char_len() + 1;
            consumed += 1;
        }

        if consumed >= section.sentences.len() {
            // Landed past this section's sentences; keep walking.
            continue;
        }

        let anchor = consumed.saturating_sub(1);
        let fresh = split_inserted_sentences(inserted_text, anchor);
        debug!(
            "event=insertion module=edit_tracker container=section section_index={} at={} count={}",
            section_index,
            anchor,
            fresh.len()
        );
        section.sentences.splice(anchor..anchor, fresh);
        return;
    }

    warn!(
        "event=insertion_unplaced module=edit_tracker position={}",
        position
    );
}

fn split_inserted_sentences(inserted_text: &str, position: usize) -> Vec<Sentence> {
    inserted_text
        .split('.')
        .map(|piece| {
            let mut sentence = Sentence::user_authored(piece, position);
            sentence.url = Some(String::new());
            sentence
        })
        .collect()
}
