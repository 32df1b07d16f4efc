// Shared test helpers: recording implementations of the UI and map surfaces.
//
// These record every operation the orchestrator and map controller perform so
// tests can assert on the final rendered state.

#![allow(dead_code)] // Each test binary uses a subset of these helpers

use std::collections::HashSet;

use ip_status::app::UiSurface;
use ip_status::map::MapSurface;
use ip_status::render::FieldBlock;

/// UI surface that records orchestrator-driven state changes.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub loading_visible: bool,
    pub loading_shown_count: usize,
    pub input: String,
    pub fields: Vec<FieldBlock>,
    pub summary: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl UiSurface for RecordingUi {
    fn show_loading(&mut self) {
        self.loading_visible = true;
        self.loading_shown_count += 1;
    }

    fn hide_loading(&mut self) {
        self.loading_visible = false;
    }

    fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    fn clear_fields(&mut self) {
        self.fields.clear();
    }

    fn show_fields(&mut self, blocks: &[FieldBlock]) {
        self.fields = blocks.to_vec();
    }

    fn show_summary(&mut self, summary: &str) {
        self.summary = Some(summary.to_string());
    }

    fn hide_map_and_summary(&mut self) {
        self.summary = None;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

/// Map surface that records widget operations; handles are plain ids.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views_created: usize,
    pub markers_created: usize,
    pub next_layer_id: u32,
    pub live_layers: HashSet<u32>,
    pub added_templates: Vec<String>,
    pub last_center: Option<(f64, f64)>,
    pub last_zoom: Option<u8>,
    pub last_marker_pos: Option<(f64, f64)>,
    pub popups: Vec<String>,
    pub size_recalculations: usize,
}

impl MapSurface for RecordingMap {
    type View = ();
    type Layer = u32;
    type Marker = ();

    fn create_view(&mut self, center: (f64, f64), zoom: u8, _scroll_wheel_zoom: bool) {
        self.views_created += 1;
        self.last_center = Some(center);
        self.last_zoom = Some(zoom);
    }

    fn set_view(&mut self, _view: &mut (), center: (f64, f64), zoom: u8) {
        self.last_center = Some(center);
        self.last_zoom = Some(zoom);
    }

    fn add_tile_layer(
        &mut self,
        _view: &mut (),
        url_template: &str,
        _attribution: &str,
        _max_zoom: u8,
    ) -> u32 {
        let id = self.next_layer_id;
        self.next_layer_id += 1;
        self.live_layers.insert(id);
        self.added_templates.push(url_template.to_string());
        id
    }

    fn remove_layer(&mut self, _view: &mut (), layer: u32) {
        assert!(
            self.live_layers.remove(&layer),
            "layer {} removed but not live",
            layer
        );
    }

    fn add_marker(&mut self, _view: &mut (), position: (f64, f64)) {
        self.markers_created += 1;
        self.last_marker_pos = Some(position);
    }

    fn set_marker_pos(&mut self, _marker: &mut (), position: (f64, f64)) {
        self.last_marker_pos = Some(position);
    }

    fn bind_popup(&mut self, _marker: &mut (), html: &str) {
        self.popups.push(html.to_string());
    }

    fn recalculate_size(&mut self, _view: &mut ()) {
        self.size_recalculations += 1;
    }
}
