//! ip_status library: IP geolocation lookup with a driven map view
//!
//! This library looks up geolocation data for an IP address (or the caller's
//! own) against the ipinfo.io API, renders a fixed set of labeled fields, and
//! drives a map view — re-centered on each result, with a switchable tile
//! layer — through a small capability interface.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ip_status::app::{Orchestrator, TerminalMap, TerminalUi};
//! use ip_status::initialization::init_client;
//! use ip_status::{Config, LookupClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config).await?;
//! let lookup = LookupClient::new(client, config.api_base.clone(), None);
//!
//! let mut orchestrator = Orchestrator::new(TerminalUi::new(), TerminalMap::new(), lookup);
//! orchestrator.submit("8.8.8.8").await;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod lookup;
pub mod map;
pub mod render;
mod utils;
pub mod validator;

// Re-export public API
pub use app::Orchestrator;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::LookupError;
pub use lookup::{FieldKey, LookupClient, LookupResult};
pub use map::{MapController, MapSurface, TileLayerChoice};
pub use render::{render_fields, FieldBlock};
pub use validator::is_valid_ip;
