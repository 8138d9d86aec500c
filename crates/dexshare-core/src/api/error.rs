use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShareError>;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vendor rejected request (status {status}, code {code:?}): {message}")]
    Vendor {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to parse timestamp: {0}")]
    TimestampFormat(String),

    #[error("Invalid timestamp: {0}")]
    TimestampValue(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Vendor codes meaning the session id is no longer accepted
const SESSION_ERROR_CODES: &[&str] = &["SessionIdNotFound", "SessionNotValid"];

/// Error payload the share service returns on failure
#[derive(Debug, Deserialize)]
struct VendorErrorBody {
    #[serde(rename = "Code")]
    code: Option<String>,
    #[serde(rename = "Message")]
    message: Option<String>,
}

impl ShareError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let status = status.as_u16();
        match serde_json::from_str::<VendorErrorBody>(body) {
            Ok(VendorErrorBody { code, message }) if code.is_some() || message.is_some() => {
                ShareError::Vendor {
                    status,
                    code,
                    message: message.unwrap_or_default(),
                }
            }
            _ => ShareError::Vendor {
                status,
                code: None,
                message: Self::truncate_body(body),
            },
        }
    }

    pub(crate) fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        ShareError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// True when the vendor reported the session id as unknown or expired.
    /// Callers can respond by building a fresh client.
    pub fn is_session_error(&self) -> bool {
        match self {
            ShareError::Vendor { code: Some(code), .. } => {
                SESSION_ERROR_CODES.contains(&code.as_str())
            }
            _ => false,
        }
    }
}
