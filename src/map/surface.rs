//! The map widget capability interface.
//!
//! The map library is an external collaborator; the controller only needs the
//! small set of capabilities below. Keeping it behind a trait lets the
//! controller be driven by a terminal surface in the CLI and by recording
//! surfaces in tests.

/// Capabilities the map controller requires from a map widget.
///
/// Implementations own the widget-specific handle types; the controller holds
/// them opaquely and hands them back for each operation.
pub trait MapSurface {
    /// Handle to a created map view.
    type View;
    /// Handle to an added tile layer.
    type Layer;
    /// Handle to a placed marker.
    type Marker;

    /// Creates the map view centered at `center` with the given zoom.
    ///
    /// `scroll_wheel_zoom` controls whether scroll-to-zoom interaction is
    /// enabled on the new view.
    fn create_view(&mut self, center: (f64, f64), zoom: u8, scroll_wheel_zoom: bool)
        -> Self::View;

    /// Re-centers an existing view.
    fn set_view(&mut self, view: &mut Self::View, center: (f64, f64), zoom: u8);

    /// Constructs a tile layer from a URL template and adds it to the view.
    fn add_tile_layer(
        &mut self,
        view: &mut Self::View,
        url_template: &str,
        attribution: &str,
        max_zoom: u8,
    ) -> Self::Layer;

    /// Removes a previously added layer from the view, consuming the handle.
    fn remove_layer(&mut self, view: &mut Self::View, layer: Self::Layer);

    /// Places a marker on the view at `position`.
    fn add_marker(&mut self, view: &mut Self::View, position: (f64, f64)) -> Self::Marker;

    /// Moves an existing marker to `position`.
    fn set_marker_pos(&mut self, marker: &mut Self::Marker, position: (f64, f64));

    /// Binds popup markup to a marker and presents the popup immediately.
    fn bind_popup(&mut self, marker: &mut Self::Marker, html: &str);

    /// Forces the view to recalculate its size after a layout change.
    fn recalculate_size(&mut self, view: &mut Self::View);
}
