//! Document backend contract and endpoint configuration.
//!
//! # Responsibility
//! - Define the trait seam for document persistence and summarization calls.
//! - Hold the base/summarizer endpoint configuration.
//!
//! # Invariants
//! - Endpoint URLs always end with a trailing slash so id segments append
//!   cleanly.
//! - Errors carry enough context to log; they are never retried here.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::document::{Document, DocumentId};

/// Result type for backend APIs.
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend-layer error for transport and protocol failures.
#[derive(Debug)]
pub enum ApiError {
    /// Connection, timeout or body-decoding failure from the HTTP client.
    Transport(reqwest::Error),
    /// The backend answered with a non-success status.
    UnexpectedStatus { url: String, status: u16 },
    /// An operation needing a document id ran before any document was loaded.
    NoDocumentId,
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::UnexpectedStatus { url, status } => {
                write!(f, "unexpected status {status} from `{url}`")
            }
            Self::NoDocumentId => write!(f, "no document loaded: missing document id"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::UnexpectedStatus { .. } => None,
            Self::NoDocumentId => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Summarizer engines the backend exposes as URL segments.
pub const SUMMARIZER_NAMES: &[&str] = &[
    "textrank",
    "fast",
    "frequency",
    "presum",
    "bart",
    "t5",
    "gpt3",
];

const DEFAULT_BASE_URL: &str = "http://localhost:8000/documents/";
const DEFAULT_SUMMARIZER: &str = "gpt3";

/// Endpoint configuration for the document and summarizer APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Document CRUD base, trailing slash guaranteed.
    pub base_url: String,
    /// Summarization base, trailing slash guaranteed.
    pub summarizer_url: String,
}

impl BackendConfig {
    /// Builds a config from an explicit base URL and summarizer name.
    ///
    /// The summarizer endpoint lives under the base URL as
    /// `{base}/{summarizer}/`.
    pub fn new(base_url: impl Into<String>, summarizer: &str) -> Self {
        let base_url = ensure_trailing_slash(base_url.into());
        let summarizer_url = format!("{base_url}{summarizer}/");
        Self {
            base_url,
            summarizer_url,
        }
    }

    /// Builds a config from `LIVINGDOC_BASE_URL` / `LIVINGDOC_SUMMARIZER`,
    /// falling back to local defaults.
    pub fn from_env() -> Self {
        let base = std::env::var("LIVINGDOC_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let summarizer = std::env::var("LIVINGDOC_SUMMARIZER")
            .unwrap_or_else(|_| DEFAULT_SUMMARIZER.to_string());
        Self::new(base, &summarizer)
    }

    /// URL of one document resource: `{base}/{id}/`.
    pub fn document_url(&self, id: DocumentId) -> String {
        format!("{}{id}/", self.base_url)
    }

    /// URL of a document-scoped summarizer action: `{summarizer}/{id}/{action}/`.
    pub fn summarizer_action_url(&self, id: DocumentId, action: &str) -> String {
        format!("{}{id}/{action}/", self.summarizer_url)
    }

    /// URL of a document-scoped base action: `{base}/{id}/{action}/`.
    pub fn document_action_url(&self, id: DocumentId, action: &str) -> String {
        format!("{}{id}/{action}/", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_SUMMARIZER)
    }
}

fn ensure_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

/// Persistence and summarization contract for documents.
///
/// The HTTP implementation lives in [`crate::backend::http`]; tests supply
/// in-memory implementations.
pub trait DocumentBackend {
    /// Fetches the full document payload.
    fn fetch_document(&self, id: DocumentId) -> ApiResult<Document>;
    /// Stores the full document payload; partial saves do not exist.
    fn store_document(&self, id: DocumentId, payload: &Document) -> ApiResult<()>;
    /// Requests a fresh whole-document summary; returns the updated document.
    fn user_summary(&self, id: DocumentId) -> ApiResult<Document>;
    /// Requests a summary for one section heading; returns the updated
    /// document.
    fn section_summary(&self, id: DocumentId, heading: &str) -> ApiResult<Document>;
    /// Replaces a word across the generated summary; returns the updated
    /// document.
    fn change_word(&self, id: DocumentId, old_word: &str, new_word: &str)
        -> ApiResult<Document>;
}
