//! Structured document model shared by reconciliation and the backend wire.
//!
//! # Responsibility
//! - Define the canonical sentence/section/article shapes used by core logic.
//! - Keep one serde-mapped schema for load and save payloads.
//!
//! # Invariants
//! - Sentence deletion is represented by soft-delete placeholders, never by
//!   removing the record.
//! - `position` is contiguous and zero-based within its container after each
//!   reconciliation pass.

pub mod document;
