//! Human-readable text derived from a [`WeatherSnapshot`].
//!
//! Everything here is a pure function of its arguments. The only ambient
//! input, the local hour, comes through a [`Clock`] so callers can pin it.

use chrono::{Local, Timelike};
use serde::Serialize;

use crate::model::{TemperatureUnit, WeatherSnapshot};

/// Source of the current local hour (0–23).
pub trait Clock {
    fn current_hour(&self) -> u32;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

const CONDITIONS: &[(&str, &str)] = &[
    ("sunny", "It's a beautiful sunny day!"),
    ("partly cloudy", "Expect some clouds and sunshine."),
    ("cloudy", "It's cloudy today."),
    ("overcast", "The sky is overcast."),
    ("rain", "Don't forget your umbrella! It's raining."),
    ("thunderstorm", "Thunderstorms are expected today."),
    ("snow", "Bundle up! It's snowing."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful, there's fog outside."),
];

/// Banded advice for a temperature. Bands are half-open on the upper edge.
pub fn temperature_message(temperature: f64, unit: TemperatureUnit) -> String {
    // Turns -0.0 into 0.0 so it prints as "0".
    let temperature = temperature + 0.0;

    if unit != TemperatureUnit::Celsius {
        return format!("{temperature}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's freezing at {temperature}°C! Bundle up!")
    } else if temperature < 10.0 {
        format!("It's quite cold at {temperature}°C. Wear warm clothes.")
    } else if temperature < 20.0 {
        format!("The temperature is {temperature}°C. Comfortable for a light jacket.")
    } else if temperature < 30.0 {
        format!("It's a pleasant {temperature}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {temperature}°C. Stay hydrated!")
    }
}

/// Friendly sentence for a known condition; anything else is returned as-is.
pub fn condition_message(condition: &str) -> String {
    let key = condition.to_lowercase();
    CONDITIONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| condition.to_string())
}

pub fn is_night(hour: u32) -> bool {
    !(6..18).contains(&hour)
}

pub fn location_message(location: &str, hour: u32) -> String {
    if is_night(hour) {
        format!("{location} at Night")
    } else {
        format!("{location} During the Day")
    }
}

/// The three strings rendered under a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedMessages {
    pub temperature: String,
    pub condition: String,
    pub location_time: String,
}

impl DerivedMessages {
    pub fn derive(snapshot: &WeatherSnapshot, clock: &dyn Clock) -> Self {
        Self {
            temperature: temperature_message(snapshot.temperature_celsius, snapshot.unit),
            condition: condition_message(&snapshot.condition_text),
            location_time: location_message(&snapshot.location_name, clock.current_hour()),
        }
    }
}
