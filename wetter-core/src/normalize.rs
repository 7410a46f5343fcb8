//! Mapping from the OpenWeather wire format onto the normalized model.
//!
//! The `Ow*` types mirror the upstream JSON and never leave this module.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{ParseError, ParseErrorKind},
    model::{
        Alert, Bearing, Conditions, Coordinates, DailyTemperatures, Forecast, ForecastDaily,
        ForecastHourly, Speed,
    },
};

/// Hours needed downstream for the rain analysis of today.
pub const MIN_HOURLY_ENTRIES: usize = 12;
/// Today, tomorrow and the day after.
pub const MIN_DAILY_ENTRIES: usize = 3;

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M %Z";
const CLOCK_FORMAT: &str = "%H:%M";
const DAY_FORMAT: &str = "%d.%m.%Y";
const ALERT_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    dt: i64,
    sunrise: i64,
    sunset: i64,
    temp: f64,
    feels_like: f64,
    dew_point: f64,
    pressure: i32,
    humidity: u8,
    wind_speed: f64,
    /// Only sent where available.
    #[serde(default)]
    wind_gust: f64,
    wind_deg: f64,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwHourly {
    dt: i64,
    temp: f64,
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct OwDailyTemp {
    max: f64,
    min: f64,
    morn: f64,
    day: f64,
    eve: f64,
    night: f64,
}

#[derive(Debug, Deserialize)]
struct OwAlert {
    start: i64,
    end: i64,
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwDaily {
    dt: i64,
    moonrise: i64,
    moonset: i64,
    moon_phase: f64,
    temp: OwDailyTemp,
    #[serde(default)]
    alerts: Vec<OwAlert>,
}

#[derive(Debug, Deserialize)]
struct OwOneCallResponse {
    current: OwCurrent,
    hourly: Vec<OwHourly>,
    daily: Vec<OwDaily>,
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    lat: f64,
    lon: f64,
}

/// Parse a one-call body into current conditions and forecast.
///
/// Validation short-circuits in order: JSON shape, non-empty current weather,
/// then minimum hourly/daily counts. Nothing is returned on failure.
pub fn parse_weather(data: &[u8], tz: Tz) -> Result<(Conditions, Forecast), ParseError> {
    let resp: OwOneCallResponse = serde_json::from_slice(data).map_err(|e| {
        ParseError::new(ParseErrorKind::Malformed { reason: e.to_string() }, data)
    })?;

    let summary = resp
        .current
        .weather
        .first()
        .map(|w| w.description.clone())
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingCurrentWeather, data))?;

    if resp.hourly.len() < MIN_HOURLY_ENTRIES || resp.daily.len() < MIN_DAILY_ENTRIES {
        return Err(ParseError::new(
            ParseErrorKind::InsufficientForecastData {
                hourly: resp.hourly.len(),
                daily: resp.daily.len(),
            },
            data,
        ));
    }

    let local = |ts: i64, pattern: &str| format_epoch(ts, tz, pattern, data);
    let current = &resp.current;

    let conditions = Conditions {
        summary,
        temperature: current.temp,
        timestamp: local(current.dt, TIMESTAMP_FORMAT)?,
        sunrise: local(current.sunrise, CLOCK_FORMAT)?,
        sunset: local(current.sunset, CLOCK_FORMAT)?,
        feels_like: current.feels_like,
        dew_point: current.dew_point,
        pressure: current.pressure,
        humidity: current.humidity,
        wind_speed: Speed(current.wind_speed),
        wind_gust: Speed(current.wind_gust),
        wind_direction: Bearing(current.wind_deg),
    };

    let hourly = resp
        .hourly
        .iter()
        .map(|h| {
            Ok(ForecastHourly {
                day: local(h.dt, DAY_FORMAT)?,
                hour: local(h.dt, CLOCK_FORMAT)?,
                temperature: h.temp,
                rain_probability: h.pop * 100.0,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let daily = resp
        .daily
        .iter()
        .map(|d| {
            let alerts = d
                .alerts
                .iter()
                .map(|a| {
                    Ok(Alert {
                        start: local(a.start, ALERT_FORMAT)?,
                        end: local(a.end, ALERT_FORMAT)?,
                        name: a.name.clone(),
                        description: a.description.clone(),
                    })
                })
                .collect::<Result<Vec<_>, ParseError>>()?;

            Ok(ForecastDaily {
                day: local(d.dt, DAY_FORMAT)?,
                moonrise: local(d.moonrise, CLOCK_FORMAT)?,
                moonset: local(d.moonset, CLOCK_FORMAT)?,
                moon_phase: d.moon_phase,
                temperatures: DailyTemperatures {
                    max: d.temp.max,
                    min: d.temp.min,
                    morning: d.temp.morn,
                    day: d.temp.day,
                    evening: d.temp.eve,
                    night: d.temp.night,
                },
                alerts,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    debug!(hourly = hourly.len(), daily = daily.len(), "parsed one-call response");

    Ok((conditions, Forecast { hourly, daily }))
}

/// Parse a geocode body; only the best (first) match is used.
pub fn parse_geocode(data: &[u8]) -> Result<Coordinates, ParseError> {
    let resp: Vec<OwGeoEntry> = serde_json::from_slice(data).map_err(|e| {
        ParseError::new(ParseErrorKind::Malformed { reason: e.to_string() }, data)
    })?;

    let first = resp
        .first()
        .ok_or_else(|| ParseError::new(ParseErrorKind::NoLocationMatch, data))?;

    Ok(Coordinates { lat: first.lat, lon: first.lon })
}

/// Format epoch seconds in `tz` with a strftime-style pattern.
pub fn format_timestamp(ts: i64, tz: Tz, pattern: &str) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|utc| utc.with_timezone(&tz).format(pattern).to_string())
}

fn format_epoch(ts: i64, tz: Tz, pattern: &str, data: &[u8]) -> Result<String, ParseError> {
    format_timestamp(ts, tz, pattern).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Malformed { reason: format!("timestamp {ts} out of range") },
            data,
        )
    })
}
