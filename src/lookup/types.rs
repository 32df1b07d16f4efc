//! Lookup data structures.
//!
//! This module defines the response shape returned by the geolocation API and
//! the fixed set of recognized field keys.

use serde::Deserialize;
use strum_macros::EnumIter;

/// The recognized response keys, in display order.
///
/// Iteration order (via `strum::IntoEnumIterator`) follows declaration order,
/// which is the order the field renderer emits blocks in — independent of the
/// order keys appear in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FieldKey {
    /// The looked-up IP address
    Ip,
    /// Reverse-DNS hostname
    Hostname,
    /// City name
    City,
    /// State/region name
    Region,
    /// Country code
    Country,
    /// `"<lat>,<lon>"` in decimal degrees
    Loc,
    /// Provider (ISP/organization)
    Org,
    /// Postal code
    Postal,
    /// IANA timezone name
    Timezone,
}

impl FieldKey {
    /// Returns the wire key as it appears in the API response.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Ip => "ip",
            FieldKey::Hostname => "hostname",
            FieldKey::City => "city",
            FieldKey::Region => "region",
            FieldKey::Country => "country",
            FieldKey::Loc => "loc",
            FieldKey::Org => "org",
            FieldKey::Postal => "postal",
            FieldKey::Timezone => "timezone",
        }
    }
}

/// A single geolocation lookup response.
///
/// All keys are optional; absent keys are simply omitted from rendering.
/// Unrecognized keys in the response body are ignored. The value lives only
/// for the duration of one render cycle — nothing is persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupResult {
    /// The looked-up IP address
    pub ip: Option<String>,
    /// Reverse-DNS hostname
    pub hostname: Option<String>,
    /// City name
    pub city: Option<String>,
    /// State/region name
    pub region: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// `"<lat>,<lon>"` in decimal degrees
    pub loc: Option<String>,
    /// Provider (ISP/organization)
    pub org: Option<String>,
    /// Postal code
    pub postal: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
}

impl LookupResult {
    /// Returns the value for `key` if present and non-blank.
    pub fn field(&self, key: FieldKey) -> Option<&str> {
        let value = match key {
            FieldKey::Ip => &self.ip,
            FieldKey::Hostname => &self.hostname,
            FieldKey::City => &self.city,
            FieldKey::Region => &self.region,
            FieldKey::Country => &self.country,
            FieldKey::Loc => &self.loc,
            FieldKey::Org => &self.org,
            FieldKey::Postal => &self.postal,
            FieldKey::Timezone => &self.timezone,
        };
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Parses the `loc` field into `(lat, lon)` decimal degrees.
    ///
    /// Returns `None` when `loc` is absent or either component fails to parse
    /// as a number; the map is driven only when this returns `Some`.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let loc = self.field(FieldKey::Loc)?;
        let (lat, lon) = loc.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        Some((lat, lon))
    }

    /// Builds the human-readable location summary: city, region, and country
    /// joined with ", ", skipping any that are absent.
    pub fn location_summary(&self) -> String {
        [FieldKey::City, FieldKey::Region, FieldKey::Country]
            .iter()
            .filter_map(|key| self.field(*key))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
