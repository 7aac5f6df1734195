use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::LookupError, model::CurrentConditions};

use super::{ConditionsSource, get_json};

const SERVICE: &str = "Open-Meteo forecast";

/// Variables requested in the `current` block, in the order the API documents them.
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,cloud_cover,wind_speed_10m";

/// `current.time` is local time without seconds when `timezone=auto`.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current conditions from the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct OpenMeteoConditions {
    http: Client,
    url: String,
}

impl OpenMeteoConditions {
    pub fn new(http: Client, url: String) -> Self {
        Self { http, url }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Current,
}

#[derive(Debug, Deserialize)]
struct Current {
    #[serde(default)]
    time: Option<String>,
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: u8,
    weather_code: i32,
    cloud_cover: u8,
    wind_speed_10m: f64,
}

impl From<Current> for CurrentConditions {
    fn from(current: Current) -> Self {
        let observed_at = current.time.as_deref().and_then(parse_local_time);

        CurrentConditions {
            temperature_c: current.temperature_2m,
            feels_like_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            wind_kph: current.wind_speed_10m,
            cloud_cover_pct: current.cloud_cover,
            weather_code: current.weather_code,
            observed_at,
        }
    }
}

fn parse_local_time(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, TIME_FORMAT) {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::debug!(raw, error = %e, "ignoring unparsable observation time");
            None
        }
    }
}

#[async_trait]
impl ConditionsSource for OpenMeteoConditions {
    async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, LookupError> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];

        let parsed: ForecastResponse = get_json(&self.http, &self.url, &params, SERVICE).await?;
        Ok(parsed.current.into())
    }
}
