//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including API endpoints, map defaults, and operational parameters.

use std::time::Duration;

/// Base URL of the geolocation lookup API.
///
/// The self-lookup endpoint is `{base}/json`; the per-IP endpoint is
/// `{base}/{ip}/json`. Users can override this via the `--api-base` CLI flag
/// (tests point it at a local mock server).
pub const DEFAULT_API_BASE: &str = "https://ipinfo.io";

/// Per-request timeout in seconds for the lookup client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_status/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding an optional ipinfo.io API token.
///
/// When set (directly or via a `.env` file), the token is appended to lookup
/// requests as a `token` query parameter. Anonymous requests work without it,
/// subject to the provider's free-tier limits.
pub const IPINFO_TOKEN_ENV: &str = "IPINFO_TOKEN";

/// Label used in place of an IP address when the caller's own IP is looked up.
pub const SELF_LOOKUP_LABEL: &str = "seu IP";

// Map view defaults
/// Zoom level applied when the map view is created and on every re-center.
pub const DEFAULT_ZOOM: u8 = 13;
/// Maximum zoom passed to tile layers.
pub const MAX_TILE_ZOOM: u8 = 19;
/// Delay before forcing a map size recalculation.
///
/// The map container may have been hidden while the loading indicator was up;
/// recalculating synchronously would still observe the collapsed layout.
pub const LAYOUT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Maximum length for displayed error messages (longer ones are truncated).
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;
