use serde::{Deserialize, Serialize};

use crate::classify::{CompassPoint, MoonPhase, km_per_hour};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Speed as delivered upstream, in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed(pub f64);

impl Speed {
    pub fn km_per_hour(self) -> f64 {
        km_per_hour(self.0)
    }
}

/// Wind bearing in degrees, as delivered upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearing(pub f64);

impl Bearing {
    pub fn compass_point(self) -> CompassPoint {
        CompassPoint::from_bearing(self.0)
    }
}

/// Snapshot of the current weather. Time fields are already formatted in the
/// local zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub summary: String,
    pub temperature: f64,
    pub timestamp: String,
    pub sunrise: String,
    pub sunset: String,
    pub feels_like: f64,
    pub dew_point: f64,
    pub pressure: i32,
    pub humidity: u8,
    pub wind_speed: Speed,
    pub wind_gust: Speed,
    pub wind_direction: Bearing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHourly {
    pub day: String,
    pub hour: String,
    pub temperature: f64,
    /// Probability of precipitation in percent (0..=100).
    pub rain_probability: f64,
}

impl ForecastHourly {
    pub fn is_rainy(&self) -> bool {
        self.rain_probability > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperatures {
    pub max: f64,
    pub min: f64,
    pub morning: f64,
    pub day: f64,
    pub evening: f64,
    pub night: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub start: String,
    pub end: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDaily {
    pub day: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: f64,
    pub temperatures: DailyTemperatures,
    pub alerts: Vec<Alert>,
}

impl ForecastDaily {
    pub fn moon_phase_name(&self) -> MoonPhase {
        MoonPhase::from_fraction(self.moon_phase)
    }
}

/// Hourly and daily forecasts in upstream (chronological) order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub hourly: Vec<ForecastHourly>,
    pub daily: Vec<ForecastDaily>,
}
