//! Backend HTTP boundary.
//!
//! # Responsibility
//! - Define the document backend contract the editor core calls.
//! - Provide the HTTP implementation and its endpoint configuration.
//!
//! # Invariants
//! - The core never talks HTTP directly; everything goes through
//!   [`api::DocumentBackend`].
//! - No retries, no request de-duplication: a failed call surfaces its error
//!   once and the caller decides.

pub mod api;
pub mod http;
