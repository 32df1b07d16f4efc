//! Terminal implementations of the UI and map surfaces.
//!
//! The CLI binary renders field cards as colored lines on stdout and the map
//! as a one-line description with an OpenStreetMap link. Surface operations
//! that only make sense for a retained graphical widget (hiding containers,
//! size recalculation) are no-ops here.

use colored::*;

use crate::app::surface::UiSurface;
use crate::map::MapSurface;
use crate::render::FieldBlock;

/// UI surface that writes to stdout/stderr.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    /// Creates a terminal UI surface.
    pub fn new() -> Self {
        Self
    }
}

impl UiSurface for TerminalUi {
    fn show_loading(&mut self) {
        println!("{}", "Buscando dados do IP...".dimmed());
    }

    fn hide_loading(&mut self) {
        // The loading line has already scrolled by; nothing to retract.
    }

    fn set_input(&mut self, value: &str) {
        log::debug!("Input field set to {:?}", value);
    }

    fn clear_fields(&mut self) {
        // Previous output stays in the scrollback.
    }

    fn show_fields(&mut self, blocks: &[FieldBlock]) {
        for block in blocks {
            println!(
                "{} {}: {}",
                block.icon,
                block.label.bold(),
                block.value.cyan()
            );
        }
    }

    fn show_summary(&mut self, summary: &str) {
        println!("\n📍 {}", summary.green().bold());
    }

    fn hide_map_and_summary(&mut self) {
        // No retained map/summary widgets on a terminal.
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{} {}", "Ocorreu um erro ao buscar os dados.".red().bold(), message.red());
    }

    fn show_warning(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }
}

/// A terminal "map view": just the state a text rendering needs.
#[derive(Debug, Clone)]
pub struct TerminalView {
    center: (f64, f64),
    zoom: u8,
}

/// A terminal tile layer, identified by its provider attribution.
#[derive(Debug, Clone)]
pub struct TerminalLayer {
    attribution: String,
}

/// A terminal marker.
#[derive(Debug, Clone)]
pub struct TerminalMarker {
    position: (f64, f64),
}

/// Map surface that narrates map state to stdout.
#[derive(Debug, Default)]
pub struct TerminalMap;

impl TerminalMap {
    /// Creates a terminal map surface.
    pub fn new() -> Self {
        Self
    }

    fn describe(view: &TerminalView) {
        let (lat, lon) = view.center;
        println!(
            "🗺️  Mapa centralizado em ({}, {}), zoom {} — https://www.openstreetmap.org/?mlat={}&mlon={}#map={}/{}/{}",
            lat, lon, view.zoom, lat, lon, view.zoom, lat, lon
        );
    }
}

impl MapSurface for TerminalMap {
    type View = TerminalView;
    type Layer = TerminalLayer;
    type Marker = TerminalMarker;

    fn create_view(
        &mut self,
        center: (f64, f64),
        zoom: u8,
        _scroll_wheel_zoom: bool,
    ) -> TerminalView {
        let view = TerminalView { center, zoom };
        Self::describe(&view);
        view
    }

    fn set_view(&mut self, view: &mut TerminalView, center: (f64, f64), zoom: u8) {
        view.center = center;
        view.zoom = zoom;
        Self::describe(view);
    }

    fn add_tile_layer(
        &mut self,
        _view: &mut TerminalView,
        _url_template: &str,
        attribution: &str,
        _max_zoom: u8,
    ) -> TerminalLayer {
        println!("   {}", attribution.dimmed());
        TerminalLayer {
            attribution: attribution.to_string(),
        }
    }

    fn remove_layer(&mut self, _view: &mut TerminalView, layer: TerminalLayer) {
        log::debug!("Removed tile layer ({})", layer.attribution);
    }

    fn add_marker(&mut self, _view: &mut TerminalView, position: (f64, f64)) -> TerminalMarker {
        TerminalMarker { position }
    }

    fn set_marker_pos(&mut self, marker: &mut TerminalMarker, position: (f64, f64)) {
        marker.position = position;
    }

    fn bind_popup(&mut self, marker: &mut TerminalMarker, html: &str) {
        let (lat, lon) = marker.position;
        log::debug!("Popup at ({}, {}): {}", lat, lon, html);
    }

    fn recalculate_size(&mut self, _view: &mut TerminalView) {
        // Terminal output has no layout to invalidate.
    }
}
