//! Converts raw OpenWeatherMap payloads into the canonical snapshot shape.
//!
//! The clock is an argument everywhere: day labels and the last-updated
//! stamp come from the `now` the caller passes in, never from a direct read.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};

use crate::models::openweather::{CurrentWeatherResponse, ForecastSlot};
use crate::models::weather::{CurrentWeather, ForecastDay, WeatherData};
use crate::utils::units::{meters_to_miles, pressure_to_in_hg};
use crate::utils::weather_utils::{
    aqi_level, day_name, format_local_time, uv_level, weather_icon, wind_direction,
};

/// The snapshot always carries this many forecast entries when the forecast
/// feed yields anything at all.
pub const FORECAST_DAYS: usize = 10;

/// Meters of visibility assumed when the provider omits the field.
const DEFAULT_VISIBILITY_METERS: f64 = 10_000.0;

pub fn build_weather_data(
    raw: &CurrentWeatherResponse,
    uv_index: f64,
    aqi: f64,
    slots: &[ForecastSlot],
    now: DateTime<Utc>,
) -> WeatherData {
    WeatherData {
        current: normalize_current(raw, uv_index, aqi, now),
        forecast: normalize_forecast(slots, now.date_naive()),
    }
}

fn normalize_current(
    raw: &CurrentWeatherResponse,
    uv_index: f64,
    aqi: f64,
    now: DateTime<Utc>,
) -> CurrentWeather {
    let condition = raw.weather.first();
    let icon_code = condition.map(|c| c.icon.as_str()).unwrap_or("01d");

    let location = match raw.sys.country.as_deref() {
        Some(country) if !country.is_empty() => format!("{}, {}", raw.name, country),
        _ => raw.name.clone(),
    };

    CurrentWeather {
        location,
        temperature: raw.main.temp.round() as i32,
        feels_like: raw.main.feels_like.round() as i32,
        description: condition
            .map(|c| c.main.clone())
            .unwrap_or_else(|| "Clear".to_string()),
        humidity: raw.main.humidity,
        pressure: pressure_to_in_hg(raw.main.pressure),
        visibility: meters_to_miles(raw.visibility.unwrap_or(DEFAULT_VISIBILITY_METERS)),
        wind_speed: raw.wind.as_ref().map(|w| w.speed).unwrap_or(0.0).round() as i32,
        wind_direction: wind_direction(raw.wind.as_ref().and_then(|w| w.deg).unwrap_or(0.0))
            .to_string(),
        uv_index: uv_index.round() as i32,
        uv_level: uv_level(uv_index).to_string(),
        aqi: aqi.round() as i32,
        aqi_level: aqi_level(aqi).to_string(),
        icon: weather_icon(icon_code).to_string(),
        sunrise: raw
            .sys
            .sunrise
            .map(|t| format_local_time(t, raw.timezone))
            .unwrap_or_default(),
        sunset: raw
            .sys
            .sunset
            .map(|t| format_local_time(t, raw.timezone))
            .unwrap_or_default(),
        is_day: !icon_code.ends_with('n'),
        last_updated: now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    }
}

/// Reduces the 3-hourly forecast feed to one entry per calendar day
/// (preferring the noon sample), then truncates or extends to exactly
/// [`FORECAST_DAYS`] entries. The feed only covers about five days, so the
/// tail repeats the last known day with the date advanced. An empty feed
/// stays empty.
pub fn normalize_forecast(slots: &[ForecastSlot], today: NaiveDate) -> Vec<ForecastDay> {
    let mut daily: BTreeMap<NaiveDate, &ForecastSlot> = BTreeMap::new();
    for slot in slots {
        let Some(stamp) = DateTime::<Utc>::from_timestamp(slot.dt, 0) else {
            continue;
        };
        let entry = daily.entry(stamp.date_naive()).or_insert(slot);
        if stamp.hour() == 12 {
            *entry = slot;
        }
    }

    let mut forecast: Vec<ForecastDay> = daily
        .iter()
        .take(FORECAST_DAYS)
        .map(|(date, slot)| {
            let condition = slot.weather.first();
            ForecastDay {
                date: date.format("%Y-%m-%d").to_string(),
                day_name: day_name(*date, today),
                icon: weather_icon(condition.map(|c| c.icon.as_str()).unwrap_or("01d"))
                    .to_string(),
                description: condition
                    .map(|c| c.main.clone())
                    .unwrap_or_else(|| "Clear".to_string()),
                temp_high: slot.main.temp_max.round() as i32,
                temp_low: slot.main.temp_min.round() as i32,
                precipitation_chance: (slot.pop * 100.0).round() as i32,
            }
        })
        .collect();

    while !forecast.is_empty() && forecast.len() < FORECAST_DAYS {
        let last = forecast[forecast.len() - 1].clone();
        let Ok(previous) = NaiveDate::parse_from_str(&last.date, "%Y-%m-%d") else {
            break;
        };
        let next = previous + Duration::days(1);
        forecast.push(ForecastDay {
            date: next.format("%Y-%m-%d").to_string(),
            day_name: day_name(next, today),
            ..last
        });
    }

    forecast
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    // 2025-06-16 00:00:00 UTC
    const MIDNIGHT: i64 = 1_750_032_000;

    fn sample_current() -> CurrentWeatherResponse {
        serde_json::from_value(json!({
            "name": "Karachi",
            "sys": { "country": "PK", "sunrise": 1_750_034_520i64, "sunset": 1_750_083_180i64 },
            "main": { "temp": 88.3, "feels_like": 92.1, "humidity": 62, "pressure": 1009.0 },
            "visibility": 8000.0,
            "wind": { "speed": 11.4, "deg": 248.0 },
            "weather": [{ "id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d" }],
            "timezone": 18_000,
            "dt": 1_750_060_000i64
        }))
        .unwrap()
    }

    fn slot(dt: i64, temp_max: f64, temp_min: f64, icon: &str, pop: f64) -> ForecastSlot {
        serde_json::from_value(json!({
            "dt": dt,
            "main": { "temp_max": temp_max, "temp_min": temp_min },
            "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": icon }],
            "pop": pop
        }))
        .unwrap()
    }

    #[test]
    fn current_conditions_are_derived() {
        let now = Utc.with_ymd_and_hms(2025, 6, 16, 12, 30, 45).unwrap();
        let data = build_weather_data(&sample_current(), 6.4, 100.0, &[], now);
        let current = data.current;

        assert_eq!(current.location, "Karachi, PK");
        assert_eq!(current.temperature, 88);
        assert_eq!(current.feels_like, 92);
        assert_eq!(current.description, "Clouds");
        assert_eq!(current.humidity, 62);
        assert_eq!(current.pressure, "29.80");
        assert_eq!(current.visibility, 5);
        assert_eq!(current.wind_speed, 11);
        assert_eq!(current.wind_direction, "WSW");
        assert_eq!(current.uv_index, 6);
        assert_eq!(current.uv_level, "High");
        assert_eq!(current.aqi, 100);
        assert_eq!(current.aqi_level, "Moderate");
        assert_eq!(current.icon, "partly-cloudy-day");
        assert_eq!(current.sunrise, "5:42 AM");
        assert_eq!(current.sunset, "7:13 PM");
        assert!(current.is_day);
        assert_eq!(current.last_updated, "6/16/2025, 12:30:45 PM");
        assert!(data.forecast.is_empty());
    }

    #[test]
    fn night_icon_clears_the_day_flag() {
        let mut raw = sample_current();
        raw.weather[0].icon = "01n".to_string();
        let now = Utc.with_ymd_and_hms(2025, 6, 16, 22, 0, 0).unwrap();
        let current = normalize_current(&raw, 0.0, 0.0, now);
        assert_eq!(current.icon, "clear-night");
        assert!(!current.is_day);
    }

    #[test]
    fn forecast_prefers_the_noon_sample() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let slots = vec![
            slot(MIDNIGHT + 9 * 3_600, 80.0, 70.0, "01d", 0.0),
            slot(MIDNIGHT + 12 * 3_600, 95.0, 74.0, "10d", 0.6),
            slot(MIDNIGHT + 15 * 3_600, 91.0, 73.0, "01d", 0.1),
        ];
        let forecast = normalize_forecast(&slots, today);
        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast[0].temp_high, 95);
        assert_eq!(forecast[0].icon, "rain");
        assert_eq!(forecast[0].precipitation_chance, 60);
    }

    #[test]
    fn forecast_extends_to_ten_days_deterministically() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let slots: Vec<ForecastSlot> = (0..5)
            .map(|day| {
                slot(
                    MIDNIGHT + day * 86_400 + 12 * 3_600,
                    90.0 + day as f64,
                    75.0,
                    "02d",
                    0.35,
                )
            })
            .collect();
        let forecast = normalize_forecast(&slots, today);

        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast[0].date, "2025-06-16");
        assert_eq!(forecast[0].day_name, "Today");
        assert_eq!(forecast[1].day_name, "Tomorrow");
        assert_eq!(forecast[4].date, "2025-06-20");
        assert_eq!(forecast[9].date, "2025-06-25");
        // the padded tail repeats the last real day's values
        for day in &forecast[5..] {
            assert_eq!(day.temp_high, 94);
            assert_eq!(day.temp_low, 75);
            assert_eq!(day.precipitation_chance, 35);
        }
        // running it twice yields the same tail
        assert_eq!(forecast, normalize_forecast(&slots, today));
    }

    #[test]
    fn forecast_truncates_past_ten_days() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        let slots: Vec<ForecastSlot> = (0..14)
            .map(|day| slot(MIDNIGHT + day * 86_400 + 12 * 3_600, 85.0, 70.0, "01d", 0.0))
            .collect();
        let forecast = normalize_forecast(&slots, today);
        assert_eq!(forecast.len(), FORECAST_DAYS);
        assert_eq!(forecast[9].date, "2025-06-25");
    }

    #[test]
    fn empty_feed_stays_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        assert!(normalize_forecast(&[], today).is_empty());
    }
}
