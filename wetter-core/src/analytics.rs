//! Values derived from a normalized [`Forecast`]: rain windows, per-day
//! summaries and the alert lookup over the three-day horizon.

use serde::Serialize;

use crate::{
    error::ValidationError,
    model::{Alert, DailyTemperatures, Forecast, ForecastDaily, ForecastHourly},
};

/// 0 = today, 1 = tomorrow, 2 = the day after.
pub const MAX_DAY_OFFSET: usize = 2;

const FIRST_HOUR: &str = "00:00";
const LAST_HOUR: &str = "23:00";

/// Everything shown for a single forecast day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary<'a> {
    pub offset: usize,
    pub day: &'a str,
    pub temperatures: DailyTemperatures,
    pub rain: String,
    pub alerts: &'a [Alert],
}

impl Forecast {
    /// Select `daily[offset]` without searching.
    pub fn day(&self, offset: usize) -> Result<&ForecastDaily, ValidationError> {
        if offset > MAX_DAY_OFFSET {
            return Err(ValidationError::OffsetOutOfRange { offset });
        }
        self.daily
            .get(offset)
            .ok_or(ValidationError::DayUnavailable { offset, available: self.daily.len() })
    }

    /// Rain windows for the day at `offset`, see [`rainy_periods`].
    pub fn rainy_periods(&self, offset: usize) -> Result<String, ValidationError> {
        let day = self.day(offset)?;
        Ok(rainy_periods(&self.hourly, &day.day))
    }

    pub fn for_day(&self, offset: usize) -> Result<DaySummary<'_>, ValidationError> {
        let daily = self.day(offset)?;

        Ok(DaySummary {
            offset,
            day: &daily.day,
            temperatures: daily.temperatures,
            rain: rainy_periods(&self.hourly, &daily.day),
            alerts: &daily.alerts,
        })
    }

    /// Alerts of the earliest day within the horizon that has any, together
    /// with that day's offset. `None` means no alerts at all.
    pub fn first_alerts(&self) -> Option<(usize, &[Alert])> {
        self.daily
            .iter()
            .take(MAX_DAY_OFFSET + 1)
            .enumerate()
            .find(|(_, d)| !d.alerts.is_empty())
            .map(|(offset, d)| (offset, d.alerts.as_slice()))
    }
}

/// Describe the rainy runs among the hours belonging to `day`.
///
/// A run is a maximal sequence of consecutive same-day entries with a rain
/// probability above zero. Adjacency is by position among the selected hours,
/// not by wall clock. A run still open when the hours run out ends at the
/// last rainy hour seen.
pub fn rainy_periods(hourly: &[ForecastHourly], day: &str) -> String {
    let mut runs = Vec::new();
    let mut open: Option<(&str, &str)> = None;

    for hour in hourly.iter().filter(|h| h.day == day) {
        if hour.is_rainy() {
            open = match open {
                Some((first, _)) => Some((first, hour.hour.as_str())),
                None => Some((hour.hour.as_str(), hour.hour.as_str())),
            };
        } else if let Some((first, last)) = open.take() {
            runs.push(describe_run(first, last));
        }
    }
    if let Some((first, last)) = open {
        runs.push(describe_run(first, last));
    }

    if runs.is_empty() { "no rain.".to_string() } else { runs.join(", ") }
}

fn describe_run(first: &str, last: &str) -> String {
    if first == FIRST_HOUR && last == LAST_HOUR {
        "all day long".to_string()
    } else if first == last {
        format!("at {first}")
    } else {
        format!("from {first} to {last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(day: &str, rainy: &[u32]) -> Vec<ForecastHourly> {
        (0..24)
            .map(|h| ForecastHourly {
                day: day.to_string(),
                hour: format!("{h:02}:00"),
                temperature: 20.0,
                rain_probability: if rainy.contains(&h) { 40.0 } else { 0.0 },
            })
            .collect()
    }

    fn daily(day: &str, alerts: Vec<Alert>) -> ForecastDaily {
        ForecastDaily {
            day: day.to_string(),
            moonrise: "00:24".to_string(),
            moonset: "08:14".to_string(),
            moon_phase: 0.62,
            temperatures: DailyTemperatures {
                max: 25.0,
                min: 12.0,
                morning: 14.0,
                day: 23.0,
                evening: 21.0,
                night: 15.0,
            },
            alerts,
        }
    }

    fn alert(name: &str) -> Alert {
        Alert {
            start: "18.06.2022 11:00".to_string(),
            end: "18.06.2022 19:00".to_string(),
            name: name.to_string(),
            description: "Es tritt eine starke Wärmebelastung auf.".to_string(),
        }
    }

    fn three_days(alerts: [Vec<Alert>; 3]) -> Forecast {
        let [a, b, c] = alerts;
        let mut hourly = hours("17.06.2022", &[]);
        hourly.extend(hours("18.06.2022", &[10, 11, 12, 18]));
        hourly.extend(hours("19.06.2022", &(0..24).collect::<Vec<u32>>()));
        Forecast {
            hourly,
            daily: vec![daily("17.06.2022", a), daily("18.06.2022", b), daily("19.06.2022", c)],
        }
    }

    #[test]
    fn dry_day() {
        assert_eq!(rainy_periods(&hours("17.06.2022", &[]), "17.06.2022"), "no rain.");
    }

    #[test]
    fn single_rainy_hour() {
        assert_eq!(rainy_periods(&hours("17.06.2022", &[14]), "17.06.2022"), "at 14:00");
    }

    #[test]
    fn rain_all_day() {
        let all: Vec<u32> = (0..24).collect();
        assert_eq!(rainy_periods(&hours("17.06.2022", &all), "17.06.2022"), "all day long");
    }

    #[test]
    fn two_runs_in_order() {
        let got = rainy_periods(&hours("17.06.2022", &[10, 11, 12, 18]), "17.06.2022");
        assert_eq!(got, "from 10:00 to 12:00, at 18:00");
    }

    #[test]
    fn run_open_at_end_of_data_is_flushed() {
        let partial: Vec<ForecastHourly> =
            hours("17.06.2022", &[20, 21, 22, 23]).into_iter().take(22).collect();
        assert_eq!(rainy_periods(&partial, "17.06.2022"), "from 20:00 to 21:00");
    }

    #[test]
    fn run_until_midnight_without_start_at_midnight_is_a_range() {
        let got = rainy_periods(&hours("17.06.2022", &[17, 18, 19, 20, 21, 22, 23]), "17.06.2022");
        assert_eq!(got, "from 17:00 to 23:00");
    }

    #[test]
    fn other_days_are_ignored() {
        let mut hourly = hours("17.06.2022", &[]);
        hourly.extend(hours("18.06.2022", &[3]));
        assert_eq!(rainy_periods(&hourly, "17.06.2022"), "no rain.");
        assert_eq!(rainy_periods(&hourly, "18.06.2022"), "at 03:00");
    }

    #[test]
    fn adjacency_is_positional_not_wall_clock() {
        let mut hourly = hours("17.06.2022", &[]);
        hourly.retain(|h| h.hour == "08:00" || h.hour == "15:00");
        for h in &mut hourly {
            h.rain_probability = 10.0;
        }
        assert_eq!(rainy_periods(&hourly, "17.06.2022"), "from 08:00 to 15:00");
    }

    #[test]
    fn forecast_rainy_periods_by_offset() {
        let fc = three_days([vec![], vec![], vec![]]);
        assert_eq!(fc.rainy_periods(0).unwrap(), "no rain.");
        assert_eq!(fc.rainy_periods(1).unwrap(), "from 10:00 to 12:00, at 18:00");
        assert_eq!(fc.rainy_periods(2).unwrap(), "all day long");
    }

    #[test]
    fn for_day_rejects_offset_out_of_range() {
        assert_eq!(
            Forecast::default().for_day(9).unwrap_err(),
            ValidationError::OffsetOutOfRange { offset: 9 }
        );
        let fc = three_days([vec![], vec![], vec![]]);
        assert_eq!(fc.for_day(3).unwrap_err(), ValidationError::OffsetOutOfRange { offset: 3 });
    }

    #[test]
    fn for_day_on_short_forecast_is_unavailable() {
        assert_eq!(
            Forecast::default().for_day(1).unwrap_err(),
            ValidationError::DayUnavailable { offset: 1, available: 0 }
        );
    }

    #[test]
    fn for_day_selects_by_position() {
        let fc = three_days([vec![], vec![alert("Hitzewarnung")], vec![]]);
        for offset in 0..=MAX_DAY_OFFSET {
            assert!(fc.for_day(offset).is_ok());
        }

        let summary = fc.for_day(1).unwrap();
        assert_eq!(summary.day, "18.06.2022");
        assert_eq!(summary.temperatures.max, 25.0);
        assert_eq!(summary.rain, "from 10:00 to 12:00, at 18:00");
        assert_eq!(summary.alerts.len(), 1);
        assert_eq!(summary.alerts[0].name, "Hitzewarnung");
    }

    #[test]
    fn first_alerts_prefers_earliest_day() {
        let fc = three_days([vec![], vec![alert("Gewitter")], vec![alert("Hitze")]]);
        let (offset, alerts) = fc.first_alerts().unwrap();
        assert_eq!(offset, 1);
        assert_eq!(alerts[0].name, "Gewitter");
    }

    #[test]
    fn first_alerts_none_when_all_empty() {
        let fc = three_days([vec![], vec![], vec![]]);
        assert!(fc.first_alerts().is_none());
    }

    #[test]
    fn first_alerts_ignores_days_beyond_horizon() {
        let mut fc = three_days([vec![], vec![], vec![]]);
        fc.daily.push(daily("20.06.2022", vec![alert("Sturm")]));
        assert!(fc.first_alerts().is_none());
    }
}
