//! Blocking HTTP implementation of the document backend.
//!
//! # Responsibility
//! - Map each [`DocumentBackend`] operation onto its REST endpoint.
//! - Decode full document payloads from JSON responses.
//!
//! # Invariants
//! - Every call is a single request: no retry, no queueing, no cancellation.
//! - A non-success status becomes `ApiError::UnexpectedStatus` after being
//!   logged; bodies of failed responses are not interpreted.

use log::{debug, error};
use reqwest::blocking::{Client, Response};
use serde_json::json;

use crate::backend::api::{ApiError, ApiResult, BackendConfig, DocumentBackend};
use crate::model::document::{Document, DocumentId};

/// `reqwest`-backed document backend.
pub struct HttpDocumentBackend {
    config: BackendConfig,
    client: Client,
}

impl HttpDocumentBackend {
    /// Creates a backend over the given endpoint configuration.
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Endpoint configuration in use.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn check_status(url: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            error!(
                "event=backend_error module=backend url={} status={}",
                url,
                status.as_u16()
            );
            Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }

    fn get_document(&self, url: &str) -> ApiResult<Document> {
        debug!("event=backend_get module=backend url={url}");
        let response = self.client.get(url).send()?;
        let document = Self::check_status(url, response)?.json::<Document>()?;
        Ok(document)
    }

    fn post_for_document(&self, url: &str, body: &serde_json::Value) -> ApiResult<Document> {
        debug!("event=backend_post module=backend url={url}");
        let response = self.client.post(url).json(body).send()?;
        let document = Self::check_status(url, response)?.json::<Document>()?;
        Ok(document)
    }
}

impl DocumentBackend for HttpDocumentBackend {
    fn fetch_document(&self, id: DocumentId) -> ApiResult<Document> {
        self.get_document(&self.config.document_url(id))
    }

    fn store_document(&self, id: DocumentId, payload: &Document) -> ApiResult<()> {
        let url = self.config.document_url(id);
        debug!("event=backend_put module=backend url={url}");
        let response = self.client.put(&url).json(payload).send()?;
        Self::check_status(&url, response)?;
        Ok(())
    }

    fn user_summary(&self, id: DocumentId) -> ApiResult<Document> {
        self.get_document(&self.config.summarizer_action_url(id, "user_summary"))
    }

    fn section_summary(&self, id: DocumentId, heading: &str) -> ApiResult<Document> {
        self.post_for_document(
            &self.config.summarizer_action_url(id, "section_summary"),
            &json!({ "section_heading": heading }),
        )
    }

    fn change_word(
        &self,
        id: DocumentId,
        old_word: &str,
        new_word: &str,
    ) -> ApiResult<Document> {
        self.post_for_document(
            &self.config.document_action_url(id, "change_word"),
            &json!({ "old_word": old_word, "new_word": new_word }),
        )
    }
}
