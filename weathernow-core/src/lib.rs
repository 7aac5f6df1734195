//! Core library for the `weathernow` client.
//!
//! This crate defines:
//! - The weather code table and shared domain models
//! - Open-Meteo geocoding and current-conditions clients behind small traits
//! - The lookup pipeline that turns a city name into a [`WeatherView`]
//! - The view state machine driven by the interactive shell
//! - Configuration handling
//!
//! It is used by `weathernow-cli`, but can also be reused by other front ends.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod state;

pub use codes::WeatherCodeEntry;
pub use config::{Config, Endpoints};
pub use error::LookupError;
pub use model::{CityQuery, CurrentConditions, GeoResult, WeatherView};
pub use pipeline::WeatherLookup;
pub use provider::{ConditionsSource, Geocoder, OpenMeteoConditions, OpenMeteoGeocoder};
pub use state::{Effect, Event, View, ViewState};
