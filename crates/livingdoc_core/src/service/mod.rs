//! Use-case services over the document model.
//!
//! # Responsibility
//! - Own document state and orchestrate segmentation, reconciliation and
//!   backend round trips.
//!
//! # Invariants
//! - Service APIs never bypass the backend trait seam.
//! - Document state is replaced wholesale on load and on successful save.

pub mod document_service;
