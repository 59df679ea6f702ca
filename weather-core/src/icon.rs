use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Sun,
    CloudRain,
}

/// Presentation tweak applied on top of the base icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconModifier {
    Rotated,
    Pulsing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherIcon {
    pub kind: IconKind,
    pub modifier: Option<IconModifier>,
}

impl WeatherIcon {
    const fn plain(kind: IconKind) -> Self {
        Self { kind, modifier: None }
    }

    const fn modified(kind: IconKind, modifier: IconModifier) -> Self {
        Self { kind, modifier: Some(modifier) }
    }

    /// Terminal rendering of the icon.
    pub fn glyph(&self) -> &'static str {
        match (self.kind, self.modifier) {
            (IconKind::Sun, _) => "☀",
            (IconKind::CloudRain, Some(IconModifier::Rotated)) => "❄",
            (IconKind::CloudRain, Some(IconModifier::Pulsing)) => "⛈",
            (IconKind::CloudRain, None) => "🌧",
        }
    }
}

/// Maps an OpenWeather condition keyword (`weather[0].main`) to an icon.
///
/// Total: anything unrecognized gets the default cloud icon.
pub fn icon_for(condition: &str) -> WeatherIcon {
    match condition {
        "Clear" => WeatherIcon::plain(IconKind::Sun),
        "Clouds" | "Rain" | "Drizzle" | "Mist" | "Fog" => WeatherIcon::plain(IconKind::CloudRain),
        "Snow" => WeatherIcon::modified(IconKind::CloudRain, IconModifier::Rotated),
        c if c.eq_ignore_ascii_case("thunderstorm") => {
            WeatherIcon::modified(IconKind::CloudRain, IconModifier::Pulsing)
        }
        _ => WeatherIcon::plain(IconKind::CloudRain),
    }
}
