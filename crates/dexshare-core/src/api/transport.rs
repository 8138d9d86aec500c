//! HTTP transport used by the share client.
//!
//! The share service only ever needs one primitive: POST a JSON body and read
//! the response text. `Transport` abstracts that primitive so the login and
//! read logic can be exercised against an in-memory double.

use std::future::Future;

use reqwest::{header, Client};
use serde::Serialize;
use tracing::debug;

use super::error::{Result, ShareError};
use crate::config::ShareConfig;

/// A POST-JSON primitive.
pub trait Transport {
    /// POST `body` as JSON to `url` and return the raw response body.
    ///
    /// Non-success statuses must be reported as errors, not as bodies.
    fn post_json<B>(&self, url: &str, body: &B) -> impl Future<Output = Result<String>> + Send
    where
        B: Serialize + Sync + ?Sized;
}

/// reqwest-backed transport.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ShareConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ShareError::from_status(status, &body))
        }
    }
}

impl Transport for HttpTransport {
    async fn post_json<B>(&self, url: &str, body: &B) -> Result<String>
    where
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        debug!(url = url, status = status.as_u16(), bytes = text.len(), "Share response received");
        Ok(text)
    }
}
