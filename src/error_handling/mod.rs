//! Error handling.
//!
//! This module defines the error taxonomy for the lookup pipeline:
//! - **InvalidFormat**: detected client-side, never reaches the network
//! - **NotFound**: HTTP 404 from the lookup API, names the attempted IP
//! - **Http**: any other non-2xx status, carries the raw status code
//! - **Transport**: network/connectivity failure, carries the underlying error
//!
//! plus initialization and configuration-validation errors.

mod types;

// Re-export public API
pub use types::{ConfigValidationError, InitializationError, LookupError};
