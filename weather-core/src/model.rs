use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// A trimmed, non-empty location ready to be sent to a provider.
///
/// The only way to build one is [`TryFrom<&str>`], so an empty query cannot
/// reach the lookup step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for LocationQuery {
    type Error = ErrorKind;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorKind::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Result of one successful lookup. Replaced whole, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_celsius: f64,
    pub condition_text: String,
    pub location_name: String,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl WeatherSnapshot {
    pub fn new(
        temperature_celsius: f64,
        condition_text: impl Into<String>,
        location_name: impl Into<String>,
    ) -> Self {
        Self {
            temperature_celsius,
            condition_text: condition_text.into(),
            location_name: location_name.into(),
            unit: TemperatureUnit::Celsius,
        }
    }
}
