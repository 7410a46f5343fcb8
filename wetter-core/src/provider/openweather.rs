use chrono_tz::Tz;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::{
    error::WeatherError,
    model::{Conditions, Coordinates, Forecast},
    normalize::{parse_geocode, parse_weather},
};

use super::{HttpResponse, Transport};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Geocode and one-call lookups against OpenWeather. Every call is a single
/// round-trip; nothing is cached or retried.
#[derive(Debug)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    timezone: Tz,
    transport: Box<dyn Transport>,
}

impl OpenWeatherClient {
    /// Client with the public base URL and Berlin local time.
    pub fn new(api_key: String, transport: Box<dyn Transport>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE,
            transport,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn geocode_url(&self, location: &str) -> String {
        format!(
            "{}/geo/1.0/direct?q={}&limit=1&appid={}",
            self.base_url, location, self.api_key
        )
    }

    /// Coordinates are written in their shortest round-trip form.
    pub fn weather_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/data/3.0/onecall?lat={}&lon={}&units=metric&lang=de&appid={}",
            self.base_url, coordinates.lat, coordinates.lon, self.api_key
        )
    }

    #[instrument(skip(self))]
    pub async fn resolve_location(&self, location: &str) -> Result<Coordinates, WeatherError> {
        let body = self.get_ok(&self.geocode_url(location)).await?;
        let coordinates = parse_geocode(&body)?;
        debug!(lat = coordinates.lat, lon = coordinates.lon, "resolved location");
        Ok(coordinates)
    }

    #[instrument(skip(self))]
    pub async fn fetch_weather(
        &self,
        coordinates: Coordinates,
    ) -> Result<(Conditions, Forecast), WeatherError> {
        let body = self.get_ok(&self.weather_url(coordinates)).await?;
        Ok(parse_weather(&body, self.timezone)?)
    }

    /// Geocode `location`, then fetch weather for the first match.
    pub async fn lookup(&self, location: &str) -> Result<(Conditions, Forecast), WeatherError> {
        let coordinates = self.resolve_location(location).await?;
        self.fetch_weather(coordinates).await
    }

    async fn get_ok(&self, url: &str) -> Result<Vec<u8>, WeatherError> {
        debug!(url = %self.redact(url), "fetching");
        let HttpResponse { status, body } = self.transport.fetch(url).await?;

        if status != StatusCode::OK {
            warn!(%status, "upstream request failed");
            return Err(WeatherError::UpstreamStatus {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    fn redact(&self, url: &str) -> String {
        if self.api_key.is_empty() { url.to_string() } else { url.replace(&self.api_key, "***") }
    }
}
