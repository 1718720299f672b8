//! Core data models for wxdash
//!
//! Contains the weather snapshot type held by the application between
//! lookups, plus the local day-window helper used to derive `is_day`.

pub mod weather;

pub use weather::{WeatherClient, WeatherError, FETCH_FAILED_FALLBACK};

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Local-hour window considered daytime: 06:00 inclusive to 18:00 exclusive.
const DAY_WINDOW: std::ops::Range<u32> = 6..18;

/// Complete weather result for one city lookup.
///
/// A snapshot is all-or-nothing: it is created whole from a successful
/// response, replaced whole by the next successful response, and dropped
/// entirely when a lookup fails. Individual fields are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Display name of the city as returned by the backend
    pub city: String,
    /// Administrative region
    pub region: String,
    /// Country name
    pub country: String,
    /// Free-text weather description (e.g. "Partly cloudy")
    pub condition: String,
    /// Current temperature in Celsius
    pub temp: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in millibars
    pub pressure: f64,
    /// Whether the local clock falls in the day window.
    ///
    /// Always computed client-side; any value the backend sends is ignored.
    pub is_day: bool,
}

impl WeatherSnapshot {
    /// Temperature rounded for display (storage keeps the raw value).
    pub fn display_temp(&self) -> i64 {
        self.temp.round() as i64
    }

    /// Feels-like temperature rounded for display.
    pub fn display_feels_like(&self) -> i64 {
        self.feels_like.round() as i64
    }
}

/// Returns whether the given local hour falls in the day window [6, 18).
pub fn is_day_hour(hour: u32) -> bool {
    DAY_WINDOW.contains(&hour)
}

/// Returns whether the local wall clock currently falls in the day window.
pub fn is_day_now() -> bool {
    is_day_hour(Local::now().hour())
}
