//! The geolocation lookup client.
//!
//! One HTTP GET per lookup, no retries, no caching. The per-request timeout is
//! whatever the underlying `reqwest::Client` was built with
//! (see `initialization::init_client`); nothing further is enforced here.

use std::sync::Arc;

use reqwest::StatusCode;

use crate::config::SELF_LOOKUP_LABEL;
use crate::error_handling::LookupError;
use crate::lookup::types::LookupResult;
use crate::validator::is_valid_ip;

/// Client for the geolocation-by-IP API.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Arc<reqwest::Client>,
    api_base: String,
    token: Option<String>,
}

impl LookupClient {
    /// Creates a lookup client against `api_base` (no trailing slash).
    ///
    /// `token` is an optional API token appended to each request as a `token`
    /// query parameter.
    pub fn new(
        client: Arc<reqwest::Client>,
        api_base: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            token,
        }
    }

    /// Resolves the request URL and the attempted-target label for `ip`.
    ///
    /// A trimmed, non-empty, syntactically valid IP selects the per-IP
    /// endpoint; anything else falls back to the self-lookup endpoint. The
    /// label keeps whatever the caller asked for so error messages can echo it.
    fn endpoint(&self, ip: Option<&str>) -> (String, String) {
        let requested = ip.map(str::trim).filter(|s| !s.is_empty());
        let url = match requested {
            Some(ip) if is_valid_ip(ip) => format!("{}/{}/json", self.api_base, ip),
            _ => format!("{}/json", self.api_base),
        };
        let label = requested
            .map(str::to_string)
            .unwrap_or_else(|| SELF_LOOKUP_LABEL.to_string());
        (url, label)
    }

    /// Performs a single lookup.
    ///
    /// `ip = None` (or blank input) looks up the caller's own IP.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] on HTTP 404, naming the attempted target
    /// - [`LookupError::Http`] on any other non-2xx status
    /// - [`LookupError::Transport`] on connectivity or body-decoding failures
    pub async fn fetch(&self, ip: Option<&str>) -> Result<LookupResult, LookupError> {
        let (url, attempted) = self.endpoint(ip);
        log::debug!("Looking up {} via {}", attempted, url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound { ip: attempted });
        }
        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
            });
        }

        let result = response.json::<LookupResult>().await?;
        log::debug!("Lookup for {} succeeded", attempted);
        Ok(result)
    }
}
