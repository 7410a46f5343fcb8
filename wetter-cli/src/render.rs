//! Console text for each CLI function.

use wetter_core::{
    Alert, Conditions, DaySummary, Forecast, ForecastDaily, ValidationError,
    analytics::MAX_DAY_OFFSET,
};

const DAY_NAMES: [&str; MAX_DAY_OFFSET + 1] = ["Today", "Tomorrow", "Day after tomorrow"];

pub fn current(conditions: &Conditions, forecast: &Forecast) -> String {
    let c = conditions;
    let mut lines = vec![
        format!("{} ({})", c.summary, c.timestamp),
        format!("Temperature:  {:.1} °C, feels like {:.1} °C", c.temperature, c.feels_like),
        format!("Dew point:    {:.1} °C", c.dew_point),
        format!("Pressure:     {} hPa", c.pressure),
        format!("Humidity:     {} %", c.humidity),
        format!(
            "Wind:         {:.1} km/h from {}, gusts {:.1} km/h",
            c.wind_speed.km_per_hour(),
            c.wind_direction.compass_point(),
            c.wind_gust.km_per_hour(),
        ),
        format!("Sun:          rise {}, set {}", c.sunrise, c.sunset),
    ];

    if let Some(today) = forecast.daily.first() {
        lines.push(format!("Moon:         {}", today.moon_phase_name()));
    }

    lines.join("\n")
}

pub fn day(summary: &DaySummary<'_>) -> String {
    let t = &summary.temperatures;
    let mut lines = vec![
        format!("{} ({})", day_name(summary.offset), summary.day),
        format!("Min/Max:      {:.1} °C / {:.1} °C", t.min, t.max),
        format!(
            "Morning {:.1} °C, day {:.1} °C, evening {:.1} °C, night {:.1} °C",
            t.morning, t.day, t.evening, t.night
        ),
        format!("Rain:         {}", summary.rain),
    ];
    lines.extend(summary.alerts.iter().map(alert_line));

    lines.join("\n")
}

pub fn moon(daily: &ForecastDaily) -> String {
    format!(
        "Moon ({}): {}, rise {}, set {}",
        daily.day,
        daily.moon_phase_name(),
        daily.moonrise,
        daily.moonset
    )
}

pub fn rain(forecast: &Forecast) -> Result<String, ValidationError> {
    let lines = (0..=MAX_DAY_OFFSET)
        .map(|offset| {
            let daily = forecast.day(offset)?;
            let periods = forecast.rainy_periods(offset)?;
            Ok(format!("{} ({}): {}", day_name(offset), daily.day, periods))
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(lines.join("\n"))
}

pub fn alerts(forecast: &Forecast) -> String {
    match forecast.first_alerts() {
        None => "no alerts".to_string(),
        Some((offset, alerts)) => {
            let mut lines = vec![format!("{}:", day_name(offset))];
            lines.extend(alerts.iter().map(alert_line));
            lines.join("\n")
        }
    }
}

fn alert_line(alert: &Alert) -> String {
    format!("! {} ({} - {}): {}", alert.name, alert.start, alert.end, alert.description)
}

fn day_name(offset: usize) -> &'static str {
    DAY_NAMES.get(offset).copied().unwrap_or("Day")
}
