use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One complete current-weather reading, in the provider's native units.
///
/// A snapshot is only ever built from a fully decoded response, so its fields
/// always describe the same observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub country: String,
    pub temperature_k: f64,
    pub feels_like_k: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    /// Wind speed exactly as reported (m/s for the default OpenWeather units).
    pub wind_speed: f64,
    /// Condition keyword, e.g. "Clear", "Rain", "Snow".
    pub condition: String,
    pub observed_at: Option<DateTime<Utc>>,
}
