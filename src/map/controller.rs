//! The map controller.
//!
//! Owns the single map view, its marker, and its active tile layer, and
//! mutates them in place across lookups. Starts Uninitialized; the first
//! update with valid coordinates creates the view, every later update
//! re-centers it. State is an owned value threaded through the orchestrator —
//! there are no globals.

use crate::config::{DEFAULT_ZOOM, LAYOUT_SETTLE_DELAY, MAX_TILE_ZOOM};
use crate::map::surface::MapSurface;
use crate::map::tiles::TileLayerChoice;
use crate::render::escape_html;

/// Handles owned while the controller is in the Active state.
///
/// Invariant: one view, one marker, and exactly one tile layer.
struct ActiveMap<S: MapSurface> {
    view: S::View,
    marker: S::Marker,
    layer: S::Layer,
    choice: TileLayerChoice,
}

/// Drives a [`MapSurface`] through the lookup lifecycle.
pub struct MapController<S: MapSurface> {
    surface: S,
    active: Option<ActiveMap<S>>,
}

impl<S: MapSurface> MapController<S> {
    /// Creates an Uninitialized controller over `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            active: None,
        }
    }

    /// Centers the map at `(lat, lon)` and places/moves the marker there.
    ///
    /// The first call creates the view (zoom 13, scroll-wheel zoom disabled)
    /// with the default street layer; later calls re-center the existing view
    /// and move the existing marker instead of recreating anything. The marker
    /// popup is (re)bound each time with the location summary.
    pub fn update(&mut self, lat: f64, lon: f64, location_info: &str) {
        let center = (lat, lon);
        if self.active.is_none() {
            log::debug!("Initializing map view at ({}, {})", lat, lon);
            let mut view = self.surface.create_view(center, DEFAULT_ZOOM, false);
            let choice = TileLayerChoice::default();
            let layer = self.surface.add_tile_layer(
                &mut view,
                choice.url_template(),
                choice.attribution(),
                MAX_TILE_ZOOM,
            );
            let marker = self.surface.add_marker(&mut view, center);
            self.active = Some(ActiveMap {
                view,
                marker,
                layer,
                choice,
            });
        } else if let Some(active) = self.active.as_mut() {
            log::debug!("Re-centering map view at ({}, {})", lat, lon);
            self.surface.set_view(&mut active.view, center, DEFAULT_ZOOM);
            self.surface.set_marker_pos(&mut active.marker, center);
        }

        if let Some(active) = self.active.as_mut() {
            let popup = format!(
                "<b>Localização IP:</b><br>{}",
                escape_html(location_info)
            );
            self.surface.bind_popup(&mut active.marker, &popup);
        }
    }

    /// Swaps the active tile layer for `choice`'s provider.
    ///
    /// Removes exactly the previously active layer before adding the new one;
    /// marker, center, and zoom are untouched. A no-op while Uninitialized.
    pub fn switch_layer(&mut self, choice: TileLayerChoice) {
        let Some(active) = self.active.take() else {
            log::debug!("Ignoring layer switch to {}: map not initialized", choice.as_str());
            return;
        };
        log::debug!(
            "Switching tile layer {} -> {}",
            active.choice.as_str(),
            choice.as_str()
        );
        let ActiveMap {
            mut view, marker, layer, ..
        } = active;
        self.surface.remove_layer(&mut view, layer);
        let layer = self.surface.add_tile_layer(
            &mut view,
            choice.url_template(),
            choice.attribution(),
            MAX_TILE_ZOOM,
        );
        self.active = Some(ActiveMap {
            view,
            marker,
            layer,
            choice,
        });
    }

    /// Forces a size recalculation after the container becomes visible again.
    ///
    /// Deferred rather than synchronous: the container may have been hidden
    /// during the loading state, and layout needs a moment to settle before
    /// the recalculation observes the real height.
    pub async fn refresh_layout(&mut self) {
        if self.active.is_none() {
            return;
        }
        tokio::time::sleep(LAYOUT_SETTLE_DELAY).await;
        if let Some(active) = self.active.as_mut() {
            self.surface.recalculate_size(&mut active.view);
        }
    }

    /// Whether the view has been created.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The currently active tile-layer choice, if Active.
    pub fn active_layer(&self) -> Option<TileLayerChoice> {
        self.active.as_ref().map(|a| a.choice)
    }

    /// Read access to the underlying surface (used by tests and the CLI).
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
