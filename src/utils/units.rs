//! Display-unit conversions.
//!
//! The upstream API is queried in imperial units, so Fahrenheit, mph and
//! miles are the base everything converts from. Rounding happens once, at
//! the end of each conversion.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    Mph,
    Kmh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

pub fn convert_temperature(value_f: f64, unit: TemperatureUnit) -> i32 {
    match unit {
        TemperatureUnit::Fahrenheit => value_f.round() as i32,
        TemperatureUnit::Celsius => ((value_f - 32.0) * 5.0 / 9.0).round() as i32,
    }
}

pub fn convert_speed(value_mph: f64, unit: SpeedUnit) -> i32 {
    match unit {
        SpeedUnit::Mph => value_mph.round() as i32,
        SpeedUnit::Kmh => (value_mph * 1.60934).round() as i32,
    }
}

pub fn convert_distance(value_miles: f64, unit: DistanceUnit) -> i32 {
    match unit {
        DistanceUnit::Miles => value_miles.round() as i32,
        DistanceUnit::Kilometers => (value_miles * 1.60934).round() as i32,
    }
}

/// hPa to inHg, formatted to two decimals for display.
pub fn pressure_to_in_hg(hpa: f64) -> String {
    format!("{:.2}", hpa * 0.02953)
}

/// The provider reports visibility in meters.
pub fn meters_to_miles(meters: f64) -> i32 {
    (meters * 0.000621371).round() as i32
}
