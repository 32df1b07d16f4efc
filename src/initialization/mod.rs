//! Resource initialization.
//!
//! This module provides functions to initialize the HTTP client and logger.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
