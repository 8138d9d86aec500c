//! Client configuration.
//!
//! `ShareConfig` carries the vendor endpoint, the application id sent on every
//! login call, and HTTP settings. Defaults target the US share host; use
//! [`Region`] or [`ShareConfig::with_base_url`] to point elsewhere (e.g. a mock
//! server in tests).

use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Share service root for accounts registered in the United States
const US_BASE_URL: &str = "https://share2.dexcom.com/ShareWebServices/Services";

/// Share service root for accounts registered outside the United States
const OUS_BASE_URL: &str = "https://shareous1.dexcom.com/ShareWebServices/Services";

/// Application id the vendor expects from share clients. Must match exactly.
pub const DEFAULT_APPLICATION_ID: &str = "d89443d2-327c-4a6f-89e5-496bbb0317db";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Vendor data center an account is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Ous,
}

impl Region {
    pub fn base_url(self) -> &'static str {
        match self {
            Region::Us => US_BASE_URL,
            Region::Ous => OUS_BASE_URL,
        }
    }
}

/// Configuration for [`ShareClient`](crate::ShareClient).
///
/// ```
/// use dexshare_core::{Region, ShareConfig};
/// use std::time::Duration;
///
/// let config = ShareConfig::for_region(Region::Ous)
///     .with_timeout(Duration::from_secs(10));
/// assert!(config.base_url.contains("shareous1"));
/// ```
#[derive(Debug, Clone)]
pub struct ShareConfig {
    /// Service root; endpoint paths are appended after a `/`
    pub base_url: String,
    /// Application id sent on both login calls
    pub application_id: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self::for_region(Region::default())
    }
}

impl ShareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_region(region: Region) -> Self {
        Self {
            base_url: region.base_url().to_string(),
            application_id: DEFAULT_APPLICATION_ID.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: format!("dexshare/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = application_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL for an endpoint path such as `General/AuthenticatePublisherAccount`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Reject configurations that can never produce a valid request.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err("base URL is empty".to_string());
        }
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(format!("base URL must be http(s): {}", base));
        }
        if self.application_id.trim().is_empty() {
            return Err("application id is empty".to_string());
        }
        Ok(())
    }
}
