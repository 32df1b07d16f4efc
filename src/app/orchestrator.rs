//! The lookup orchestrator.
//!
//! Wires input validation, the lookup client, the field renderer, and the map
//! controller together, and owns the loading/error UI states. Every failure
//! is absorbed here and surfaced as an inline UI message; nothing propagates
//! further up.

use crate::app::surface::UiSurface;
use crate::error_handling::LookupError;
use crate::lookup::LookupClient;
use crate::map::{MapController, MapSurface, TileLayerChoice};
use crate::render::render_fields;
use crate::utils::sanitize::sanitize_and_truncate_error_message;
use crate::validator::is_valid_ip;

/// Drives the full lookup pipeline against a UI surface and a map surface.
pub struct Orchestrator<U: UiSurface, S: MapSurface> {
    ui: U,
    map: MapController<S>,
    client: LookupClient,
    // Bumped at the start of each lookup; a result whose generation no longer
    // matches was superseded and is dropped instead of rendered.
    generation: u64,
}

impl<U: UiSurface, S: MapSurface> Orchestrator<U, S> {
    /// Creates an orchestrator over the given surfaces and client.
    pub fn new(ui: U, map_surface: S, client: LookupClient) -> Self {
        Self {
            ui,
            map: MapController::new(map_surface),
            client,
            generation: 0,
        }
    }

    /// Handles a form submission with `raw` input.
    ///
    /// Blank input takes the self-lookup path; a valid IP is looked up; an
    /// invalid one gets an inline warning and never reaches the network.
    /// Returns whether a lookup ran and rendered successfully.
    pub async fn submit(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.run_lookup(None).await;
        }
        if is_valid_ip(trimmed) {
            return self.run_lookup(Some(trimmed.to_string())).await;
        }

        let error = LookupError::InvalidFormat {
            input: trimmed.to_string(),
        };
        log::warn!("Rejected lookup input {:?}", trimmed);
        self.ui.show_warning(&error.to_string());
        self.ui.hide_map_and_summary();
        false
    }

    /// Handles the "use my IP" trigger: clears the input and self-looks-up.
    ///
    /// Returns whether the lookup rendered successfully.
    pub async fn use_my_ip(&mut self) -> bool {
        self.ui.set_input("");
        self.run_lookup(None).await
    }

    /// Forwards a tile-layer selection to the map controller.
    pub fn switch_layer(&mut self, choice: TileLayerChoice) {
        self.map.switch_layer(choice);
    }

    async fn run_lookup(&mut self, ip: Option<String>) -> bool {
        self.generation += 1;
        let generation = self.generation;

        self.ui.show_loading();
        self.ui.clear_fields();
        self.ui.hide_map_and_summary();
        self.ui.set_input(ip.as_deref().unwrap_or(""));

        let outcome = self.client.fetch(ip.as_deref()).await;

        if generation != self.generation {
            log::debug!(
                "Dropping result of superseded lookup (generation {})",
                generation
            );
            return false;
        }

        self.ui.hide_loading();
        match outcome {
            Ok(result) => {
                let blocks = render_fields(&result);
                self.ui.show_fields(&blocks);
                if let Some((lat, lon)) = result.coordinates() {
                    let summary = result.location_summary();
                    self.map.update(lat, lon, &summary);
                    self.map.refresh_layout().await;
                    self.ui.show_summary(&summary);
                }
                true
            }
            Err(error) => {
                log::error!("IP lookup failed: {}", error);
                self.ui
                    .show_error(&sanitize_and_truncate_error_message(&error.to_string()));
                false
            }
        }
    }

    /// Read access to the UI surface (used by tests and the CLI).
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Read access to the map controller (used by tests and the CLI).
    pub fn map(&self) -> &MapController<S> {
        &self.map
    }
}
