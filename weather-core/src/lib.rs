//! Core library for the `weather-now` city lookup.
//!
//! This crate defines:
//! - The fixed city catalog and its autocomplete filter
//! - The search session: input, suggestions and the last weather snapshot
//! - The OpenWeather provider behind the `WeatherProvider` seam
//! - Display values derived from a snapshot (Celsius, units, icons)
//! - Configuration & credentials handling
//!
//! It is used by `weather-now`, but can also be reused by other front ends.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod session;

pub use catalog::{CityCatalog, MAX_SUGGESTIONS};
pub use config::Config;
pub use display::{WeatherView, kelvin_to_celsius, render_panel};
pub use error::{FetchError, LookupError};
pub use icon::{WeatherIcon, icon_for};
pub use model::WeatherSnapshot;
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use session::{SearchSession, SubmitOutcome};
