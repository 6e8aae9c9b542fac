//! Derived classification fields: severity bands, compass labels, day
//! labels and the internal icon vocabulary.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a wind bearing in degrees.
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = ((degrees / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[index]
}

pub fn uv_level(uv_index: f64) -> &'static str {
    if uv_index <= 2.0 {
        "Low"
    } else if uv_index <= 5.0 {
        "Moderate"
    } else if uv_index <= 7.0 {
        "High"
    } else if uv_index <= 10.0 {
        "Very High"
    } else {
        "Extreme"
    }
}

/// US EPA air-quality bands.
pub fn aqi_level(aqi: f64) -> &'static str {
    if aqi <= 50.0 {
        "Good"
    } else if aqi <= 100.0 {
        "Moderate"
    } else if aqi <= 150.0 {
        "Unhealthy for Sensitive Groups"
    } else if aqi <= 200.0 {
        "Unhealthy"
    } else if aqi <= 300.0 {
        "Very Unhealthy"
    } else {
        "Hazardous"
    }
}

/// Maps an OpenWeatherMap icon code to the internal icon vocabulary. Codes
/// carry a day/night suffix; conditions without a distinct night variant
/// share one icon.
pub fn weather_icon(code: &str) -> &'static str {
    match code {
        "01d" => "clear-day",
        "01n" => "clear-night",
        "02d" => "partly-cloudy-day",
        "02n" => "partly-cloudy-night",
        "03d" | "03n" | "04d" | "04n" => "cloudy",
        "09d" | "09n" | "10d" | "10n" => "rain",
        "11d" | "11n" => "thunderstorm",
        "13d" | "13n" => "snow",
        "50d" | "50n" => "fog",
        _ => "cloudy",
    }
}

/// "Today", "Tomorrow", or the abbreviated weekday name.
pub fn day_name(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%a").to_string()
    }
}

/// Formats a unix timestamp as a local "h:MM AM/PM" string for the given
/// UTC offset in seconds. Returns an empty string for offsets or timestamps
/// outside chrono's range.
pub fn format_local_time(unix: i64, offset_seconds: i32) -> String {
    FixedOffset::east_opt(offset_seconds)
        .and_then(|tz| tz.timestamp_opt(unix, 0).single())
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_covers_the_circle() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(90.0), "E");
        assert_eq!(wind_direction(180.0), "S");
        assert_eq!(wind_direction(248.0), "WSW");
        assert_eq!(wind_direction(359.0), "N");
        assert_eq!(wind_direction(22.5), "NNE");
    }

    #[test]
    fn uv_bands() {
        assert_eq!(uv_level(0.0), "Low");
        assert_eq!(uv_level(2.0), "Low");
        assert_eq!(uv_level(3.0), "Moderate");
        assert_eq!(uv_level(6.5), "High");
        assert_eq!(uv_level(9.0), "Very High");
        assert_eq!(uv_level(11.0), "Extreme");
    }

    #[test]
    fn aqi_bands() {
        assert_eq!(aqi_level(50.0), "Good");
        assert_eq!(aqi_level(51.0), "Moderate");
        assert_eq!(aqi_level(150.0), "Unhealthy for Sensitive Groups");
        assert_eq!(aqi_level(200.0), "Unhealthy");
        assert_eq!(aqi_level(300.0), "Very Unhealthy");
        assert_eq!(aqi_level(301.0), "Hazardous");
    }

    #[test]
    fn icon_vocabulary() {
        assert_eq!(weather_icon("01d"), "clear-day");
        assert_eq!(weather_icon("01n"), "clear-night");
        assert_eq!(weather_icon("02n"), "partly-cloudy-night");
        assert_eq!(weather_icon("04n"), "cloudy");
        assert_eq!(weather_icon("10d"), "rain");
        assert_eq!(weather_icon("11n"), "thunderstorm");
        assert_eq!(weather_icon("13d"), "snow");
        assert_eq!(weather_icon("50d"), "fog");
        assert_eq!(weather_icon("not-a-code"), "cloudy");
    }

    #[test]
    fn day_labels() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
        assert_eq!(day_name(today, today), "Today");
        assert_eq!(
            day_name(NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(), today),
            "Tomorrow"
        );
        assert_eq!(
            day_name(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(), today),
            "Fri"
        );
    }

    #[test]
    fn local_time_formatting() {
        assert_eq!(format_local_time(0, 0), "12:00 AM");
        // 2025-06-16 00:42 UTC at UTC+5
        assert_eq!(format_local_time(1_750_034_520, 18_000), "5:42 AM");
        assert_eq!(format_local_time(1_750_083_180, 18_000), "7:13 PM");
    }
}
