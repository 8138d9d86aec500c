use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Result;
use crate::utils::parse_vendor_timestamp;

/// mg/dL per mmol/L for glucose
const MGDL_PER_MMOLL: f64 = 18.0;

/// A single glucose value as reported by the share service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlucoseReading {
    pub timestamp: DateTime<Utc>,
    /// mg/dL
    pub value: i32,
    /// Vendor trend tag, e.g. "Flat" or "FortyFiveUp"
    pub trend: String,
}

impl GlucoseReading {
    pub fn mmol_per_l(&self) -> f64 {
        f64::from(self.value) / MGDL_PER_MMOLL
    }

    /// Arrow for the trend tag, or `None` for tags the vendor has not documented
    pub fn trend_arrow(&self) -> Option<&'static str> {
        let arrow = match self.trend.as_str() {
            "None" => "",
            "DoubleUp" => "↑↑",
            "SingleUp" => "↑",
            "FortyFiveUp" => "↗",
            "Flat" => "→",
            "FortyFiveDown" => "↘",
            "SingleDown" => "↓",
            "DoubleDown" => "↓↓",
            "NotComputable" => "?",
            "RateOutOfRange" => "-",
            _ => return None,
        };
        Some(arrow)
    }
}

/// Wire record from `ReadPublisherLatestGlucoseValues`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    /// `Date(<epoch-millis>)`
    #[serde(rename = "WT")]
    pub wt: String,
    #[serde(rename = "Trend")]
    pub trend: String,
    #[serde(rename = "Value")]
    pub value: i32,
}

impl RawReading {
    pub fn to_reading(&self) -> Result<GlucoseReading> {
        Ok(GlucoseReading {
            timestamp: parse_vendor_timestamp(&self.wt)?,
            value: self.value,
            trend: self.trend.clone(),
        })
    }
}

/// Body for the account id lookup
#[derive(Debug, Serialize)]
pub(crate) struct AccountLookupRequest<'a> {
    #[serde(rename = "accountName")]
    pub account_name: &'a str,
    pub password: &'a str,
    #[serde(rename = "applicationId")]
    pub application_id: &'a str,
}

/// Body for session authentication
#[derive(Debug, Serialize)]
pub(crate) struct SessionRequest<'a> {
    #[serde(rename = "accountId")]
    pub account_id: &'a str,
    pub password: &'a str,
    #[serde(rename = "applicationId")]
    pub application_id: &'a str,
}

/// Body for the latest values read
#[derive(Debug, Serialize)]
pub(crate) struct ReadingsRequest<'a> {
    #[serde(rename = "sessionId")]
    pub session_id: &'a str,
    pub minutes: u32,
    #[serde(rename = "maxCount")]
    pub max_count: u32,
}
