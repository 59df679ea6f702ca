use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::{
    WeatherSnapshot,
    icon::{WeatherIcon, icon_for},
};

/// Shown instead of metrics before the first successful lookup.
pub const PLACEHOLDER: &str = "Search a city to see weather reports";

const KELVIN_OFFSET: f64 = 273.15;

/// Whole degrees Celsius, with halves rounded up (towards positive infinity),
/// so -0.5 °C shows as 0 and -10.5 °C as -10.
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - KELVIN_OFFSET + 0.5).floor() as i64
}

/// Display-ready values derived from a [`WeatherSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub location: String,
    pub condition: String,
    pub icon: WeatherIcon,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherView {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        Self {
            temperature_c: kelvin_to_celsius(snapshot.temperature_k),
            feels_like_c: kelvin_to_celsius(snapshot.feels_like_k),
            location: format!("{}, {}", snapshot.city_name, snapshot.country),
            condition: snapshot.condition.clone(),
            icon: icon_for(&snapshot.condition),
            humidity: format!("{}%", snapshot.humidity_pct),
            pressure: format!("{} hPa", snapshot.pressure_hpa),
            // Passed through unconverted; labelled with OpenWeather's default unit.
            wind_speed: format!("{} m/s", snapshot.wind_speed),
            observed_at: snapshot.observed_at,
        }
    }
}

impl fmt::Display for WeatherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}°C", self.icon.glyph(), self.temperature_c)?;
        writeln!(f, "{}", self.location)?;
        writeln!(f, "{}", self.condition)?;
        writeln!(f)?;
        writeln!(f, "  Humidity    {}", self.humidity)?;
        writeln!(f, "  Pressure    {}", self.pressure)?;
        writeln!(f, "  Wind Speed  {}", self.wind_speed)?;
        write!(f, "  Feels Like  {} °C", self.feels_like_c)?;
        if let Some(at) = self.observed_at {
            write!(f, "\n  Observed    {}", at.format("%Y-%m-%d %H:%M UTC"))?;
        }
        Ok(())
    }
}

/// The metrics panel, or the placeholder prompt when nothing has been fetched.
pub fn render_panel(snapshot: Option<&WeatherSnapshot>) -> String {
    match snapshot {
        Some(snapshot) => WeatherView::from_snapshot(snapshot).to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconKind;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            city_name: "Mumbai".into(),
            country: "IN".into(),
            temperature_k: 300.15,
            feels_like_k: 303.4,
            humidity_pct: 74,
            pressure_hpa: 1008,
            wind_speed: 4.12,
            condition: "Clear".into(),
            observed_at: None,
        }
    }

    #[test]
    fn kelvin_converts_and_rounds() {
        assert_eq!(kelvin_to_celsius(300.15), 27);
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(303.4), 30);
        assert_eq!(kelvin_to_celsius(303.7), 31);
        assert_eq!(kelvin_to_celsius(263.15), -10);
        assert_eq!(kelvin_to_celsius(273.65), 1);
    }

    #[test]
    fn negative_half_degrees_round_up() {
        assert_eq!(kelvin_to_celsius(272.65), 0);
        assert_eq!(kelvin_to_celsius(262.65), -10);
        assert_eq!(kelvin_to_celsius(270.15), -3);

        let mut snap = snapshot();
        snap.temperature_k = 272.65;
        snap.feels_like_k = 262.65;
        let view = WeatherView::from_snapshot(&snap);
        assert_eq!((view.temperature_c, view.feels_like_c), (0, -10));
    }

    #[test]
    fn view_derives_all_metrics() {
        let view = WeatherView::from_snapshot(&snapshot());

        assert_eq!(view.temperature_c, 27);
        assert_eq!(view.feels_like_c, 30);
        assert_eq!(view.location, "Mumbai, IN");
        assert_eq!(view.condition, "Clear");
        assert_eq!(view.icon.kind, IconKind::Sun);
        assert_eq!(view.humidity, "74%");
        assert_eq!(view.pressure, "1008 hPa");
        assert_eq!(view.wind_speed, "4.12 m/s");
    }

    #[test]
    fn panel_shows_placeholder_without_snapshot() {
        assert_eq!(render_panel(None), PLACEHOLDER);
    }

    #[test]
    fn panel_renders_metrics() {
        let panel = render_panel(Some(&snapshot()));

        assert!(panel.starts_with("☀ 27°C"));
        assert!(panel.contains("Mumbai, IN"));
        assert!(panel.contains("Humidity    74%"));
        assert!(panel.contains("Feels Like  30 °C"));
        assert!(!panel.contains("Observed"));
    }

    #[test]
    fn panel_includes_observation_time_when_known() {
        let mut snap = snapshot();
        snap.observed_at = DateTime::<Utc>::from_timestamp(1_700_000_000, 0);

        let panel = render_panel(Some(&snap));
        assert!(panel.contains("Observed    2023-11-14 22:13 UTC"));
    }
}
