//! Core library for the `wetter` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocode and one-call client over a pluggable transport
//! - Normalization of upstream JSON into a stable domain model
//! - Derived analytics (wind sectors, moon phases, rain windows, day summaries)
//!
//! It is used by `wetter-cli`, but can also be reused by other binaries or services.

pub mod analytics;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;

pub use analytics::DaySummary;
pub use classify::{CompassPoint, MoonPhase};
pub use config::Config;
pub use error::{ParseError, ParseErrorKind, TransportError, ValidationError, WeatherError};
pub use model::{
    Alert, Bearing, Conditions, Coordinates, DailyTemperatures, Forecast, ForecastDaily,
    ForecastHourly, Speed,
};
pub use provider::{HttpResponse, ReqwestTransport, Transport, openweather::OpenWeatherClient};
