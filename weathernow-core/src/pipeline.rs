use crate::{
    Config, codes,
    error::LookupError,
    model::{CityQuery, WeatherView},
    provider::{ConditionsSource, Geocoder, providers_from_config},
};

/// City name in, [`WeatherView`] out.
///
/// Geocoding and the conditions request run strictly one after the other; any failure
/// aborts the whole lookup, so callers either get a complete view or an error.
#[derive(Debug)]
pub struct WeatherLookup {
    geocoder: Box<dyn Geocoder>,
    conditions: Box<dyn ConditionsSource>,
}

impl WeatherLookup {
    pub fn new(geocoder: Box<dyn Geocoder>, conditions: Box<dyn ConditionsSource>) -> Self {
        Self { geocoder, conditions }
    }

    /// Build a lookup backed by the Open-Meteo endpoints named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let (geocoder, conditions) = providers_from_config(config);
        Self::new(geocoder, conditions)
    }

    pub async fn lookup(&self, city_name: &str) -> Result<WeatherView, LookupError> {
        let query = CityQuery::parse(city_name)?;

        let place = self.geocoder.resolve(&query).await?;
        let current = self.conditions.fetch_current(place.latitude, place.longitude).await?;
        let entry = codes::lookup(current.weather_code);

        Ok(WeatherView::assemble(&place, &current, entry))
    }
}
