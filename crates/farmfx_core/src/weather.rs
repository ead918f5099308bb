//! Weather conditions shown by the sky

use std::fmt;
use std::str::FromStr;

use farmfx_math::Color;
use serde::{Deserialize, Serialize};

/// Sky condition driving cloud color, rain and lightning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherState {
    /// No clouds at all
    Clear,
    /// White fair-weather clouds
    #[default]
    Sunny,
    /// Gray clouds with rain
    Rainy,
    /// Dark clouds with rain and lightning
    Storm,
    /// Blue-gray clouds with heavy rain
    Flood,
}

impl WeatherState {
    /// All states, in menu order
    pub const ALL: [WeatherState; 5] = [
        WeatherState::Clear,
        WeatherState::Sunny,
        WeatherState::Rainy,
        WeatherState::Storm,
        WeatherState::Flood,
    ];

    /// Whether clouds in this state produce rain
    pub fn is_precipitating(self) -> bool {
        matches!(self, WeatherState::Rainy | WeatherState::Storm | WeatherState::Flood)
    }

    /// Cloud tint this state fades towards
    pub fn cloud_color(self) -> Color {
        match self {
            WeatherState::Rainy => Color::rgba(80.0, 80.0, 80.0, 110.0),
            WeatherState::Storm => Color::rgba(50.0, 50.0, 50.0, 115.0),
            WeatherState::Flood => Color::rgba(70.0, 70.0, 90.0, 115.0),
            WeatherState::Clear | WeatherState::Sunny => Color::rgba(255.0, 255.0, 255.0, 100.0),
        }
    }

    /// Lowercase name, as used in config files
    pub fn name(self) -> &'static str {
        match self {
            WeatherState::Clear => "clear",
            WeatherState::Sunny => "sunny",
            WeatherState::Rainy => "rainy",
            WeatherState::Storm => "storm",
            WeatherState::Flood => "flood",
        }
    }
}

impl fmt::Display for WeatherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeatherState {
    type Err = WeatherParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        WeatherState::ALL
            .into_iter()
            .find(|state| state.name() == lower)
            .ok_or_else(|| WeatherParseError(s.to_string()))
    }
}

/// Unknown weather name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherParseError(pub String);

impl fmt::Display for WeatherParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown weather state: {}", self.0)
    }
}

impl std::error::Error for WeatherParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip_names() {
        for state in WeatherState::ALL {
            assert_eq!(state.name().parse::<WeatherState>(), Ok(state));
        }
        assert_eq!(" Storm ".parse::<WeatherState>(), Ok(WeatherState::Storm));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hail".parse::<WeatherState>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown weather state: hail");
    }

    #[test]
    fn test_precipitation() {
        assert!(!WeatherState::Clear.is_precipitating());
        assert!(!WeatherState::Sunny.is_precipitating());
        assert!(WeatherState::Rainy.is_precipitating());
        assert!(WeatherState::Storm.is_precipitating());
        assert!(WeatherState::Flood.is_precipitating());
    }

    #[test]
    fn test_cloud_colors() {
        assert_eq!(WeatherState::Storm.cloud_color(), Color::rgba(50.0, 50.0, 50.0, 115.0));
        assert_eq!(WeatherState::Clear.cloud_color(), WeatherState::Sunny.cloud_color());
    }
}
