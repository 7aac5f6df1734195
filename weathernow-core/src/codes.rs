//! Weather code table.
//!
//! Covers the subset of WMO codes Open-Meteo documents for the `weather_code` variable
//! that we care to describe. Anything else maps to [`FALLBACK`].

/// Human-readable description and symbol for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub description: &'static str,
    pub symbol: &'static str,
}

impl WeatherCodeEntry {
    const fn new(description: &'static str, symbol: &'static str) -> Self {
        Self { description, symbol }
    }
}

pub const FALLBACK: WeatherCodeEntry = WeatherCodeEntry::new("Unknown", "❓");

/// Look up a weather code. Never fails; unmapped codes yield [`FALLBACK`].
pub fn lookup(code: i32) -> WeatherCodeEntry {
    known(code).unwrap_or(FALLBACK)
}

fn known(code: i32) -> Option<WeatherCodeEntry> {
    let entry = match code {
        0 => WeatherCodeEntry::new("Clear sky", "☀️"),
        1 => WeatherCodeEntry::new("Mainly clear", "🌤️"),
        2 => WeatherCodeEntry::new("Partly cloudy", "⛅"),
        3 => WeatherCodeEntry::new("Overcast", "☁️"),
        45 => WeatherCodeEntry::new("Foggy", "🌫️"),
        51 => WeatherCodeEntry::new("Light drizzle", "🌧️"),
        53 => WeatherCodeEntry::new("Moderate drizzle", "🌧️"),
        55 => WeatherCodeEntry::new("Dense drizzle", "🌧️"),
        61 => WeatherCodeEntry::new("Slight rain", "🌧️"),
        63 => WeatherCodeEntry::new("Moderate rain", "🌧️"),
        65 => WeatherCodeEntry::new("Heavy rain", "🌧️"),
        71 => WeatherCodeEntry::new("Slight snow", "❄️"),
        73 => WeatherCodeEntry::new("Moderate snow", "❄️"),
        75 => WeatherCodeEntry::new("Heavy snow", "❄️"),
        80 => WeatherCodeEntry::new("Rain showers", "🌧️"),
        82 => WeatherCodeEntry::new("Heavy rain showers", "🌧️"),
        85 => WeatherCodeEntry::new("Snow showers", "🌨️"),
        86 => WeatherCodeEntry::new("Heavy snow showers", "🌨️"),
        95 => WeatherCodeEntry::new("Thunderstorm", "⛈️"),
        96 => WeatherCodeEntry::new("Thunderstorm with hail", "⛈️"),
        _ => return None,
    };

    Some(entry)
}
