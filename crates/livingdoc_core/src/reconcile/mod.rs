//! Edit reconciliation between editor text and structured sentences.
//!
//! # Responsibility
//! - Map freshly segmented editor text back onto structured sentence records.
//! - Keep article citation references in sync with surviving sentences.
//! - Apply fine-grained positional edits without full re-segmentation.
//!
//! # Invariants
//! - Reconciliation never fails: every path terminates on arbitrary text.
//! - Sentence identity is preserved only on exact text equality; any textual
//!   edit reads as delete-old + insert-new by design.

pub mod article;
pub mod edit_tracker;
pub mod exact_match;
