//! Weather API client
//!
//! This module provides the single outbound call the application makes:
//! `GET {base}/api/weather?city=<name>`, parsed into a [`WeatherSnapshot`].

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{is_day_now, WeatherSnapshot};

/// Displayed when a transport or parse error carries no message of its own.
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch weather data";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The backend returned a non-success status.
    ///
    /// All non-2xx statuses collapse to this variant; the backend's error
    /// detail is discarded.
    #[error("City not found")]
    CityNotFound,

    /// HTTP request failed at the transport level
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse the JSON response body
    #[error("{0}")]
    ParseError(#[from] serde_json::Error),
}

impl WeatherError {
    /// The single string shown to the user for this failure.
    ///
    /// Falls back to [`FETCH_FAILED_FALLBACK`] if the underlying error
    /// renders to an empty message.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            FETCH_FAILED_FALLBACK.to_string()
        } else {
            message
        }
    }
}

/// Current-conditions payload as the backend sends it.
///
/// The backend may include an `is_day` field; it is deliberately absent here
/// so it can never leak into the snapshot.
#[derive(Debug, Deserialize)]
struct ApiConditions {
    city: String,
    region: String,
    country: String,
    condition: String,
    temp: f64,
    feels_like: f64,
    wind_speed: f64,
    humidity: f64,
    pressure: f64,
}

/// Client for fetching current conditions from the weather backend
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient talking to the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a new WeatherClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions for the given city.
    ///
    /// The city name is sent URL-encoded as the `city` query parameter.
    /// Any non-success status maps to [`WeatherError::CityNotFound`]; the
    /// `is_day` flag is computed from the local clock before the snapshot
    /// is returned.
    ///
    /// # Arguments
    /// * `city` - City name as the user typed it
    ///
    /// # Returns
    /// * `Ok(WeatherSnapshot)` - Conditions for the city
    /// * `Err(WeatherError)` - If the request, status, or parsing fails
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/api/weather", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(&[("city", city)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::CityNotFound);
        }

        let text = response.text().await?;
        let api: ApiConditions = serde_json::from_str(&text)?;

        Ok(snapshot_from_api(api, is_day_now()))
    }
}

/// Builds a snapshot from the wire payload, attaching the client-side
/// day/night flag.
fn snapshot_from_api(api: ApiConditions, is_day: bool) -> WeatherSnapshot {
    WeatherSnapshot {
        city: api.city,
        region: api.region,
        country: api.country,
        condition: api.condition,
        temp: api.temp,
        feels_like: api.feels_like,
        wind_speed: api.wind_speed,
        humidity: api.humidity.clamp(0.0, 100.0) as u8,
        pressure: api.pressure,
        is_day,
    }
}
