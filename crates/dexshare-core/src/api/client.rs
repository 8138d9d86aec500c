//! Share client: lazy login handshake and latest-values read.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::error::{Result, ShareError};
use super::transport::{HttpTransport, Transport};
use crate::auth::{AccountId, Credentials, LoginState, SessionId};
use crate::config::ShareConfig;
use crate::models::{
    AccountLookupRequest, GlucoseReading, RawReading, ReadingsRequest, SessionRequest,
};

// ============================================================================
// Constants
// ============================================================================

/// Takes an account name and password, returns the account id
const ACCOUNT_ID_ENDPOINT: &str = "General/AuthenticatePublisherAccount";

/// Takes an account id and password, returns a session id
const SESSION_ENDPOINT: &str = "General/LoginPublisherAccountById";

/// Takes a session id, returns the most recent readings first
const READINGS_ENDPOINT: &str = "Publisher/ReadPublisherLatestGlucoseValues";

/// Lookback used by `get_latest_reading`: the vendor's maximum of one day
const LATEST_LOOKBACK_MINUTES: u32 = 1440;

/// Client for one share account.
///
/// Login happens lazily on the first read and the resulting session is reused
/// for every later read on the same instance. Reads take `&mut self`, so a
/// client has a single writer; wrap it in a mutex to share it.
pub struct ShareClient<T = HttpTransport> {
    transport: T,
    config: ShareConfig,
    credentials: Credentials,
    state: LoginState,
}

impl ShareClient<HttpTransport> {
    /// Create a client for the US share host. No request is sent.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(username, password), ShareConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ShareConfig) -> Result<Self> {
        config.validate().map_err(ShareError::Config)?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(credentials, config, transport)
    }
}

impl<T: Transport> ShareClient<T> {
    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(credentials: Credentials, config: ShareConfig, transport: T) -> Result<Self> {
        config.validate().map_err(ShareError::Config)?;
        Ok(Self {
            transport,
            config,
            credentials,
            state: LoginState::default(),
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn account_id(&self) -> Option<&str> {
        self.state.account_id().map(AccountId::as_str)
    }

    async fn post<R: DeserializeOwned, B: Serialize + Sync>(&self, endpoint: &str, body: &B) -> Result<R> {
        let url = self.config.endpoint_url(endpoint);

        debug!(endpoint = endpoint, "Sending share request");
        let text = self.transport.post_json(&url, body).await?;

        serde_json::from_str(&text).map_err(|e| ShareError::decode(endpoint, e))
    }

    async fn fetch_account_id(&mut self) -> Result<()> {
        let token: String = {
            let request = AccountLookupRequest {
                account_name: self.credentials.username(),
                password: self.credentials.password(),
                application_id: &self.config.application_id,
            };
            self.post(ACCOUNT_ID_ENDPOINT, &request).await?
        };

        let account_id = AccountId::parse(token).map_err(|reason| {
            warn!(username = self.credentials.username(), "Account id lookup rejected");
            ShareError::Authentication(format!("account id lookup failed: {}", reason))
        })?;

        debug!(account_id = account_id.as_str(), "Account id resolved");
        self.state.resolve_account(account_id);
        Ok(())
    }

    async fn authenticate(&mut self) -> Result<()> {
        let token: String = {
            let account_id = self.state.account_id().ok_or_else(|| {
                ShareError::Authentication("account id must be resolved before authenticating".to_string())
            })?;
            let request = SessionRequest {
                account_id: account_id.as_str(),
                password: self.credentials.password(),
                application_id: &self.config.application_id,
            };
            self.post(SESSION_ENDPOINT, &request).await?
        };

        let session_id = SessionId::parse(token).map_err(|reason| {
            warn!(username = self.credentials.username(), "Session authentication rejected");
            ShareError::Authentication(format!("session authentication failed: {}", reason))
        })?;

        self.state.authenticate(session_id);
        info!(username = self.credentials.username(), "Share session established");
        Ok(())
    }

    /// Run the login handshake now instead of on the first read.
    ///
    /// Does nothing when a session is already held. If an earlier attempt got
    /// as far as the account id, only session authentication is repeated.
    pub async fn login(&mut self) -> Result<()> {
        if self.state.is_authenticated() {
            return Ok(());
        }
        if self.state.account_id().is_none() {
            self.fetch_account_id().await?;
        }
        self.authenticate().await
    }

    /// Fetch up to `max_count` readings from the last `minutes` minutes,
    /// most recent first as the vendor returns them.
    ///
    /// Logs in first if this instance holds no session. Neither argument is
    /// validated here; the vendor rejects out-of-range values itself.
    pub async fn get_readings(&mut self, minutes: u32, max_count: u32) -> Result<Vec<GlucoseReading>> {
        self.login().await?;

        let raw: Vec<RawReading> = {
            let session_id = self.state.session_id().ok_or_else(|| {
                ShareError::Authentication("no session after login".to_string())
            })?;
            let request = ReadingsRequest {
                session_id: session_id.as_str(),
                minutes,
                max_count,
            };
            self.post(READINGS_ENDPOINT, &request).await?
        };

        debug!(minutes = minutes, max_count = max_count, count = raw.len(), "Readings received");
        raw.iter().map(RawReading::to_reading).collect()
    }

    /// Most recent reading from the last day, if any.
    pub async fn get_latest_reading(&mut self) -> Result<Option<GlucoseReading>> {
        let readings = self.get_readings(LATEST_LOOKBACK_MINUTES, 1).await?;
        Ok(readings.into_iter().next())
    }
}

impl<T> std::fmt::Debug for ShareClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
