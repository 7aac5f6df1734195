//! End-to-end lookups against mock Open-Meteo servers.

use weathernow_core::{Config, Endpoints, LookupError, WeatherLookup};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(geocoding: String, forecast: String) -> Config {
    Config {
        endpoints: Endpoints { geocoding, forecast },
        ..Config::default()
    }
}

fn lookup_against(server: &MockServer) -> WeatherLookup {
    WeatherLookup::from_config(&config_for(
        format!("{}/v1/search", server.uri()),
        format!("{}/v1/forecast", server.uri()),
    ))
}

fn london_place() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "id": 2643743,
            "name": "London",
            "latitude": 51.5,
            "longitude": -0.12,
            "country_code": "GB",
            "timezone": "Europe/London"
        }],
        "generationtime_ms": 0.7
    })
}

fn overcast_current() -> serde_json::Value {
    serde_json::json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "Europe/London",
        "current": {
            "time": "2026-10-16T14:45",
            "interval": 900,
            "temperature_2m": 15.4,
            "relative_humidity_2m": 70,
            "apparent_temperature": 14.0,
            "weather_code": 3,
            "cloud_cover": 80,
            "wind_speed_10m": 12.3
        }
    })
}

async fn mount_geocoding(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_lookup_london() {
    let server = MockServer::start().await;
    mount_geocoding(&server, london_place()).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5"))
        .and(query_param("longitude", "-0.12"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,cloud_cover,wind_speed_10m",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overcast_current()))
        .expect(1)
        .mount(&server)
        .await;

    let view = lookup_against(&server).lookup("London").await.unwrap();

    assert_eq!(view.city_label, "London, GB");
    assert_eq!(view.temperature, 15);
    assert_eq!(view.feels_like, 14);
    assert_eq!(view.humidity, 70);
    assert_eq!(view.wind_speed, 12);
    assert_eq!(view.cloud_cover, 80);
    assert_eq!(view.description, "Overcast");
    assert_eq!(view.symbol, "☁️");
    assert_eq!(
        view.observed_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).as_deref(),
        Some("2026-10-16 14:45")
    );
}

#[tokio::test]
async fn test_city_name_is_trimmed_and_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "name": "São Paulo", "latitude": -23.5475, "longitude": -46.63611 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overcast_current()))
        .mount(&server)
        .await;

    let view = lookup_against(&server).lookup("  São Paulo  ").await.unwrap();

    assert_eq!(view.city_label, "São Paulo");
}

#[tokio::test]
async fn test_unknown_city() {
    let server = MockServer::start().await;
    mount_geocoding(&server, serde_json::json!({ "results": [] })).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overcast_current()))
        .expect(0)
        .mount(&server)
        .await;

    let err = lookup_against(&server).lookup("Zzzznotacity").await.unwrap_err();

    assert_eq!(err, LookupError::NotFound);
    assert_eq!(err.to_string(), "City not found. Please try another city.");
}

#[tokio::test]
async fn test_missing_results_field_is_not_found() {
    let server = MockServer::start().await;
    mount_geocoding(&server, serde_json::json!({ "generationtime_ms": 0.3 })).await;

    let err = lookup_against(&server).lookup("Nowhere").await.unwrap_err();

    assert_eq!(err, LookupError::NotFound);
}

#[tokio::test]
async fn test_blank_query_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = lookup_against(&server).lookup("   ").await.unwrap_err();

    assert_eq!(err.to_string(), "Please enter a city name.");
}

#[tokio::test]
async fn test_conditions_unreachable() {
    let server = MockServer::start().await;
    mount_geocoding(&server, london_place()).await;

    // Nothing listens on the discard port.
    let lookup = WeatherLookup::from_config(&config_for(
        format!("{}/v1/search", server.uri()),
        "http://127.0.0.1:9/v1/forecast".to_string(),
    ));

    let err = lookup.lookup("London").await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
    assert!(
        err.to_string().starts_with("Failed to send request to Open-Meteo forecast"),
        "unexpected message: {err}"
    );
}

#[tokio::test]
async fn test_conditions_error_status_carries_reason() {
    let server = MockServer::start().await;
    mount_geocoding(&server, london_place()).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Cannot initialize WeatherVariable from invalid String value"
        })))
        .mount(&server)
        .await;

    let err = lookup_against(&server).lookup("London").await.unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("400"), "Error should mention status: {msg}");
    assert!(msg.contains("Cannot initialize WeatherVariable"), "Error should carry reason: {msg}");
}

#[tokio::test]
async fn test_conditions_missing_field_is_transport_error() {
    let server = MockServer::start().await;
    mount_geocoding(&server, london_place()).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current": { "temperature_2m": 15.4 }
        })))
        .mount(&server)
        .await;

    let err = lookup_against(&server).lookup("London").await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse Open-Meteo forecast JSON"));
}

#[tokio::test]
async fn test_geocoding_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = lookup_against(&server).lookup("London").await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse Open-Meteo geocoding JSON"));
}

#[tokio::test]
async fn test_language_hint_comes_from_config() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_place()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(overcast_current()))
        .mount(&server)
        .await;

    let config = Config {
        language: "de".to_string(),
        ..config_for(
            format!("{}/v1/search", server.uri()),
            format!("{}/v1/forecast", server.uri()),
        )
    };

    let view = WeatherLookup::from_config(&config).lookup("London").await.unwrap();
    assert_eq!(view.city_label, "London, GB");
}
