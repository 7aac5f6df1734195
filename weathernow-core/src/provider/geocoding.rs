use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{CityQuery, GeoResult},
};

use super::{Geocoder, get_json};

const SERVICE: &str = "Open-Meteo geocoding";

/// Name search against the Open-Meteo geocoding API, keeping only the best match.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    url: String,
    language: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, url: String, language: String) -> Self {
        Self { http, url, language }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<Place>>,
}

#[derive(Debug, Deserialize)]
struct Place {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country_code: Option<String>,
}

impl From<Place> for GeoResult {
    fn from(place: Place) -> Self {
        GeoResult {
            latitude: place.latitude,
            longitude: place.longitude,
            display_name: place.name,
            country_code: place.country_code,
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, query: &CityQuery) -> Result<GeoResult, LookupError> {
        let params = [
            ("name", query.as_str().to_string()),
            ("count", "1".to_string()),
            ("language", self.language.clone()),
            ("format", "json".to_string()),
        ];

        let parsed: SearchResponse = get_json(&self.http, &self.url, &params, SERVICE).await?;

        let place = parsed
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(LookupError::NotFound)?;

        tracing::debug!(
            name = %place.name,
            latitude = place.latitude,
            longitude = place.longitude,
            "resolved city"
        );
        Ok(place.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_results_field_parses() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.5}"#).expect("valid body");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn place_without_country_code() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"results":[{"id":1,"name":"Atlantis","latitude":1.5,"longitude":2.5}]}"#,
        )
        .expect("valid body");

        let place: GeoResult = parsed.results.expect("results").remove(0).into();
        assert_eq!(place.display_name, "Atlantis");
        assert_eq!(place.country_code, None);
    }
}
