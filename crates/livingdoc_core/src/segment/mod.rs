//! Text segmentation heuristics for editor content.
//!
//! # Responsibility
//! - Split plain text into sentence strings.
//! - Split editor HTML into section parts and convert parts to plain text.
//!
//! # Invariants
//! - Every function here is total: arbitrary user-typed input degrades the
//!   result, it never fails.
//! - These are heuristics tuned to the rich-text editor's output, kept behind
//!   narrow interfaces so they can be swapped for a structured editor-delta
//!   format later.

pub mod html;
pub mod section;
pub mod sentence;
