//! Tile-layer providers.

use clap::ValueEnum;

/// The selectable tile-layer providers.
///
/// Each variant maps to a fixed tile URL template and attribution string.
/// Selection is mutually exclusive: the map carries exactly one tile layer at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TileLayerChoice {
    /// OpenStreetMap street tiles (the default)
    #[default]
    Street,
    /// Esri World Imagery satellite tiles
    Satellite,
    /// OpenTopoMap topographic tiles
    Topo,
}

impl TileLayerChoice {
    /// Returns the tile URL template for this provider.
    pub fn url_template(&self) -> &'static str {
        match self {
            TileLayerChoice::Street => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            TileLayerChoice::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            TileLayerChoice::Topo => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        }
    }

    /// Returns the attribution markup for this provider.
    pub fn attribution(&self) -> &'static str {
        match self {
            TileLayerChoice::Street => {
                "© <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            TileLayerChoice::Satellite => {
                "Tiles © Esri &mdash; Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community"
            }
            TileLayerChoice::Topo => {
                "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)"
            }
        }
    }

    /// Returns the provider name as used in the UI selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            TileLayerChoice::Street => "street",
            TileLayerChoice::Satellite => "satellite",
            TileLayerChoice::Topo => "topo",
        }
    }
}
