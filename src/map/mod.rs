//! Map view control.
//!
//! This module provides:
//! - The tile-layer provider table (URL templates and attributions)
//! - The capability trait the external map widget is driven through
//! - The controller owning the single view/marker/layer across lookups

mod controller;
mod surface;
mod tiles;

// Re-export public API
pub use controller::MapController;
pub use surface::MapSurface;
pub use tiles::TileLayerChoice;
