//! Error type definitions.
//!
//! This module defines all error types used throughout the application.
//! User-facing messages are localized (Portuguese), matching the rest of the
//! rendered output; log messages stay in English.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error raised by [`crate::Config::validate`] for an out-of-range field.
#[derive(Error, Debug)]
#[error("Invalid configuration for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending configuration field.
    pub field: &'static str,
    /// Description of the constraint that was violated.
    pub message: String,
}

/// Errors produced by the lookup pipeline.
///
/// All four variants surface as inline UI messages at the orchestrator
/// boundary; none propagate further.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Input failed client-side IP validation. Never reaches the network.
    #[error("Formato de IP inválido: \"{input}\". Por favor, digite um IPv4 ou IPv6 válido.")]
    InvalidFormat {
        /// The rejected (trimmed) input.
        input: String,
    },

    /// The lookup API returned HTTP 404 for the attempted target.
    #[error("IP não encontrado ou inválido: \"{ip}\".")]
    NotFound {
        /// The attempted IP, or the self-lookup phrase when none was given.
        ip: String,
    },

    /// The lookup API returned a non-2xx status other than 404.
    #[error("Erro HTTP! Status: {status}")]
    Http {
        /// The raw HTTP status code.
        status: u16,
    },

    /// Network-level failure (DNS, connectivity, body decoding).
    #[error("Erro de rede: {0}")]
    Transport(#[from] ReqwestError),
}
