use std::fmt;

use weathernow_core::{View, ViewState, WeatherView};

pub const TITLE: &str = "Weather Now";
pub const PROMPT: &str = "Enter city name... > ";

/// One full frame of the shell: the search form plus whatever the view holds.
pub struct Screen<'a>(pub &'a ViewState);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "Search: {}", state.query())?;
        writeln!(f)?;

        match state.view() {
            View::Idle => Ok(()),
            View::Loading => writeln!(f, "⏳ Loading weather data"),
            View::Failed(message) => writeln!(f, "⚠️  {message}"),
            View::Loaded(view) => write!(f, "{}", Card(view)),
        }
    }
}

/// The result card for a loaded view.
pub struct Card<'a>(pub &'a WeatherView);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.0;

        writeln!(f, "{}  {}", w.symbol, w.city_label)?;
        writeln!(f, "{}°C", w.temperature)?;
        writeln!(f, "{}", w.description)?;
        writeln!(f)?;
        writeln!(f, "Feels like:  {}°C", w.feels_like)?;
        writeln!(f, "Humidity:    {}%", w.humidity)?;
        writeln!(f, "Wind:        {} km/h", w.wind_speed)?;
        writeln!(f, "Cloud Cover: {}%", w.cloud_cover)?;

        if let Some(at) = w.observed_at {
            writeln!(f, "Observed:    {} (local time)", at.format("%Y-%m-%d %H:%M"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use weathernow_core::{Event, LookupError};

    fn london() -> WeatherView {
        WeatherView {
            city_label: "London, GB".to_string(),
            temperature: 15,
            feels_like: 14,
            humidity: 70,
            wind_speed: 12,
            cloud_cover: 80,
            description: "Overcast".to_string(),
            symbol: "☁️".to_string(),
            observed_at: None,
        }
    }

    fn resolved(outcome: Result<WeatherView, LookupError>) -> ViewState {
        let mut state = ViewState::new("London");
        state.update(Event::Mount);
        state.update(Event::Resolved { seq: 1, outcome });
        state
    }

    #[test]
    fn idle_shows_only_the_form() {
        let frame = Screen(&ViewState::new("London")).to_string();
        assert_eq!(frame, "Weather Now\nSearch: London\n\n");
    }

    #[test]
    fn loading_shows_spinner_only() {
        let mut state = ViewState::new("London");
        state.update(Event::Mount);

        let frame = Screen(&state).to_string();

        assert!(frame.starts_with("Weather Now\nSearch: London\n"));
        assert!(frame.contains("Loading weather data"));
        assert!(!frame.contains("°C"));
    }

    #[test]
    fn failure_shows_message() {
        let frame = Screen(&resolved(Err(LookupError::NotFound))).to_string();

        assert!(frame.contains("City not found. Please try another city."));
        assert!(!frame.contains("Loading"));
    }

    #[test]
    fn loaded_shows_card() {
        let frame = Screen(&resolved(Ok(london()))).to_string();

        assert!(frame.contains("Search: London"));
        assert!(frame.contains("☁️  London, GB\n15°C\nOvercast\n"));
        assert!(frame.contains("Feels like:  14°C"));
        assert!(frame.contains("Humidity:    70%"));
        assert!(frame.contains("Wind:        12 km/h"));
        assert!(frame.contains("Cloud Cover: 80%"));
        assert!(!frame.contains("Observed"));
    }

    #[test]
    fn card_shows_observation_time() {
        let observed_at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(14, 45, 0));
        let view = WeatherView { observed_at, ..london() };

        let card = Card(&view).to_string();

        assert!(card.ends_with("Observed:    2026-10-16 14:45 (local time)\n"));
    }
}
