//! Editor-model core for living documents.
//!
//! Binds a rich-text editor snapshot to a structured sentence/section
//! document model: segments editor text into sentences, reconciles them
//! against prior records so unchanged sentences keep their backend ids,
//! prunes stale article citations, tracks fine-grained positional edits, and
//! talks to the document/summarizer backend over HTTP.

pub mod backend;
pub mod logging;
pub mod model;
pub mod reconcile;
pub mod segment;
pub mod service;

pub use backend::api::{ApiError, ApiResult, BackendConfig, DocumentBackend, SUMMARIZER_NAMES};
pub use backend::http::HttpDocumentBackend;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    Article, ArticleSentenceRef, Document, DocumentHistory, DocumentId, Section, Sentence,
    SentenceId, SuggestedLink,
};
pub use reconcile::article::prune_article_refs;
pub use reconcile::edit_tracker::{track_deletion, track_insertion};
pub use reconcile::exact_match::{ExactTextMatchReconciler, SentenceReconciler};
pub use segment::section::{split_sections, SectionKind, SectionSplit};
pub use segment::sentence::segment;
pub use service::document_service::DocumentService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
