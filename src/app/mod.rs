//! Application orchestration.
//!
//! This module provides:
//! - The UI capability trait the orchestrator drives
//! - The orchestrator wiring validator → lookup client → renderer + map
//! - Terminal surface implementations for the CLI binary

mod orchestrator;
mod surface;
mod terminal;

// Re-export public API
pub use orchestrator::Orchestrator;
pub use surface::UiSurface;
pub use terminal::{TerminalMap, TerminalUi};
