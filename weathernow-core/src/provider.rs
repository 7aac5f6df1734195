use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::{
    Config,
    error::LookupError,
    model::{CityQuery, CurrentConditions, GeoResult},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::OpenMeteoConditions;
pub use geocoding::OpenMeteoGeocoder;

/// Resolves a place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, query: &CityQuery) -> Result<GeoResult, LookupError>;
}

/// Fetches current conditions for a coordinate pair.
#[async_trait]
pub trait ConditionsSource: Send + Sync + Debug {
    async fn fetch_current(&self, latitude: f64, longitude: f64)
    -> Result<CurrentConditions, LookupError>;
}

/// Construct both Open-Meteo clients from config, sharing one HTTP client.
pub fn providers_from_config(config: &Config) -> (Box<dyn Geocoder>, Box<dyn ConditionsSource>) {
    let http = Client::new();

    let geocoder = OpenMeteoGeocoder::new(
        http.clone(),
        config.endpoints.geocoding.clone(),
        config.language.clone(),
    );
    let conditions = OpenMeteoConditions::new(http, config.endpoints.forecast.clone());

    (Box::new(geocoder), Box::new(conditions))
}

/// Error body Open-Meteo sends with 4xx responses.
#[derive(Debug, Deserialize)]
struct ApiError {
    reason: String,
}

/// GET `url` with `query`, check the status and decode the body as `T`.
///
/// Every failure along the way becomes [`LookupError::Transport`] naming `service`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
    service: &str,
) -> Result<T, LookupError> {
    tracing::debug!(service, url, ?query, "sending request");

    let res = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| LookupError::transport(format!("Failed to send request to {service}"), e))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| LookupError::transport(format!("Failed to read {service} response body"), e))?;

    if !status.is_success() {
        return Err(LookupError::Transport(format!(
            "{service} request failed with status {status}: {}",
            error_reason(&body),
        )));
    }

    serde_json::from_str(&body)
        .map_err(|e| LookupError::transport(format!("Failed to parse {service} JSON"), e))
}

fn error_reason(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api) => api.reason,
        Err(_) => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
