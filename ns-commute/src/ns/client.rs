//! NS Reisinformatie HTTP client.
//!
//! Provides an async method for querying the `/trips` journey-planning
//! endpoint. Handles authentication and conversion to domain types.

use chrono::NaiveDateTime;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::Trip;

use super::convert::convert_trips;
use super::error::NsError;
use super::types::TripsResponse;

/// Default base URL for the NS Reisinformatie API.
const DEFAULT_BASE_URL: &str = "https://gateway.apiportal.ns.nl/reisinformatie-api/api/v3";

/// Configuration for the NS client.
#[derive(Debug, Clone)]
pub struct NsConfig {
    /// Subscription key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to the production gateway)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NsConfig {
    /// Create a new config with the given subscription key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// NS Reisinformatie API client.
#[derive(Debug, Clone)]
pub struct NsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NsClient {
    /// Create a new NS client with the given configuration.
    pub fn new(config: NsConfig) -> Result<Self, NsError> {
        let mut headers = HeaderMap::new();

        // The NS API portal authenticates with an Azure APIM
        // subscription key header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| NsError::ApiError {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("ocp-apim-subscription-key"), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch candidate trips between two stations around a departure
    /// datetime.
    ///
    /// `date_time` is sent as a local ISO 8601 datetime without a
    /// timezone suffix, which is what the API expects. Trips come back
    /// in the API's own preference order.
    pub async fn plan_trips(
        &self,
        from_station: &str,
        to_station: &str,
        date_time: NaiveDateTime,
    ) -> Result<Vec<Trip>, NsError> {
        let url = format!("{}/trips", self.base_url);
        let date_time = date_time.format("%Y-%m-%dT%H:%M:%S").to_string();

        debug!(from_station, to_station, %date_time, "requesting trips");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("fromStation", from_station),
                ("toStation", to_station),
                ("dateTime", date_time.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let trips: TripsResponse = serde_json::from_str(&body).map_err(|e| NsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        debug!(count = trips.trips.len(), "trips received");

        Ok(convert_trips(&trips)?)
    }
}
