use anyhow::{Context, anyhow};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use wetter_core::{
    Config,
    config::API_KEY_ENV,
    provider::client_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wetter",
    version,
    about = "Current weather, forecasts, moon and rain for a location",
    after_help = "Example: wetter today Paris,FR\n\nThe API key is read from OPENWEATHERMAP_API_KEY or the config file."
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Store an OpenWeather API key in the config file and exit.
    #[arg(long, conflicts_with_all = ["function", "location"])]
    pub configure: bool,

    /// What to show.
    #[arg(value_enum, required_unless_present = "configure")]
    pub function: Option<Function>,

    /// Location, e.g. "Paris,FR". Several words are joined with '+'.
    #[arg(required_unless_present = "configure", num_args = 1..)]
    pub location: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    Current,
    Today,
    Tomorrow,
    Aftertomorrow,
    Moon,
    Rain,
    Alert,
}

impl Function {
    /// Forecast day offset for the per-day functions.
    pub fn day_offset(self) -> Option<usize> {
        match self {
            Function::Today => Some(0),
            Function::Tomorrow => Some(1),
            Function::Aftertomorrow => Some(2),
            _ => None,
        }
    }
}

/// Join location words the way the geocode query expects them.
pub fn location_query(words: &[String]) -> String {
    words.join("+")
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.configure {
            return configure();
        }

        let function = self
            .function
            .ok_or_else(|| anyhow!("Missing function. Run `wetter --help` for usage."))?;
        let location = location_query(&self.location);

        let config = Config::load()?;
        let client = client_from_config(&config, std::env::var(API_KEY_ENV).ok())?;

        info!(?function, %location, "looking up weather");
        let (conditions, forecast) = client
            .lookup(&location)
            .await
            .with_context(|| format!("Weather lookup for '{location}' failed"))?;

        let output = match function {
            Function::Current => render::current(&conditions, &forecast),
            Function::Today | Function::Tomorrow | Function::Aftertomorrow => {
                let offset = function.day_offset().unwrap_or_default();
                render::day(&forecast.for_day(offset)?)
            }
            Function::Moon => render::moon(forecast.day(0)?),
            Function::Rain => render::rain(&forecast)?,
            Function::Alert => render::alerts(&forecast),
        };

        println!("{output}");
        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(())
}
