use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::Text;
use weathernow_core::{
    CityQuery, Config, Effect, Event, View, ViewState, WeatherLookup, config::DEFAULT_LANGUAGE,
};

use crate::{render::Card, shell};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Current weather for any city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search interactively; starts with the default city. This is the default command.
    Interactive,

    /// Look up one city and exit.
    Show {
        /// City name; the configured default city when absent.
        city: Option<String>,

        /// Print the result as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Set the default city and the language hint used for place names.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let config = Config::load_from(&config_path)?;

        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => {
                let lookup = Arc::new(WeatherLookup::from_config(&config));
                shell::run(lookup, config.default_city).await
            }
            Command::Show { city, json } => {
                let lookup = WeatherLookup::from_config(&config);
                let city = city.unwrap_or(config.default_city);
                show(&lookup, city, json).await
            }
            Command::Configure => configure(config, config_path),
        }
    }
}

async fn show(lookup: &WeatherLookup, city: String, json: bool) -> Result<()> {
    let state = lookup_once(lookup, city).await;

    match state.view() {
        View::Loaded(view) if json => {
            let out = serde_json::to_string_pretty(view).context("Failed to serialize result")?;
            println!("{out}");
        }
        View::Loaded(view) => print!("{}", Card(view)),
        View::Failed(message) => bail!("{message}"),
        View::Idle | View::Loading => bail!("Lookup did not complete"),
    }

    Ok(())
}

/// Drive a single submission through the view state, as the shell would.
async fn lookup_once(lookup: &WeatherLookup, city: String) -> ViewState {
    let mut state = ViewState::new(city);

    if let Effect::Lookup { seq, city } = state.update(Event::Submit) {
        let outcome = lookup.lookup(&city).await;
        state.update(Event::Resolved { seq, outcome });
    }

    state
}

fn configure(mut config: Config, path: PathBuf) -> Result<()> {
    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    let city = CityQuery::parse(&city)?;

    let language = Text::new("Language hint for place names:")
        .with_default(&config.language)
        .prompt()
        .context("Failed to read language")?;

    config.default_city = city.to_string();
    config.language = language_or_default(&language);
    config.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// Blank input keeps the geocoder's default language instead of sending `language=`.
fn language_or_default(input: &str) -> String {
    match input.trim() {
        "" => DEFAULT_LANGUAGE.to_string(),
        language => language.to_string(),
    }
}
