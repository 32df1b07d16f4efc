//! Geolocation lookup: response types and the HTTP client.

mod client;
mod types;

// Re-export public API
pub use client::LookupClient;
pub use types::{FieldKey, LookupResult};
