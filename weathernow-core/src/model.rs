use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{codes::WeatherCodeEntry, error::LookupError};

/// A city name the user asked for: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::Validation);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// First geocoding match for a [`CityQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
    pub country_code: Option<String>,
}

impl GeoResult {
    /// `"London, GB"`, or just the name when the provider gave no country code.
    pub fn label(&self) -> String {
        match self.country_code.as_deref() {
            Some(code) if !code.is_empty() => format!("{}, {}", self.display_name, code),
            _ => self.display_name.clone(),
        }
    }
}

/// Raw current-observation values, in provider units (°C, km/h, %).
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_kph: f64,
    pub cloud_cover_pct: u8,
    pub weather_code: i32,
    /// Local time of the observation at the location.
    pub observed_at: Option<NaiveDateTime>,
}

/// The record the UI renders after a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
    pub city_label: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub humidity: u8,
    pub wind_speed: i32,
    pub cloud_cover: u8,
    pub description: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
}

impl WeatherView {
    pub fn assemble(place: &GeoResult, current: &CurrentConditions, entry: WeatherCodeEntry) -> Self {
        Self {
            city_label: place.label(),
            temperature: round_half_up(current.temperature_c),
            feels_like: round_half_up(current.feels_like_c),
            humidity: current.humidity_pct,
            wind_speed: round_half_up(current.wind_kph),
            cloud_cover: current.cloud_cover_pct,
            description: entry.description.to_string(),
            symbol: entry.symbol.to_string(),
            observed_at: current.observed_at,
        }
    }
}

/// Round to the nearest integer, halves towards positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
