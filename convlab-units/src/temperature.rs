//! Temperature conversion
//!
//! Celsius, Fahrenheit and Kelvin are not related by a single factor, so
//! temperature stays out of the scale tables and converts piecewise through
//! Celsius instead.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{ConversionError, UnitCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius (°C)",
            TemperatureUnit::Fahrenheit => "Fahrenheit (°F)",
            TemperatureUnit::Kelvin => "Kelvin (K)",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * (5.0 / 9.0),
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => (celsius * (9.0 / 5.0)) + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| ConversionError::UnknownUnit {
                category: UnitCategory::Temperature,
                unit: s.to_string(),
            })
    }
}

/// Convert a temperature, pivoting through Celsius
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert_temperature(100.0, Celsius, Kelvin), 373.15);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        let f = convert_temperature(0.0, Kelvin, Fahrenheit);
        assert!((f - -459.67).abs() < 1e-9);
    }

    #[test]
    fn test_identity() {
        for unit in TemperatureUnit::ALL {
            assert!((convert_temperature(-40.0, unit, unit) - -40.0).abs() < 1e-9, "{}", unit);
        }
    }

    #[test]
    fn test_minus_forty_meets() {
        assert!((convert_temperature(-40.0, Celsius, Fahrenheit) - -40.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("kelvin".parse::<TemperatureUnit>().unwrap(), Kelvin);
        assert!("rankine".parse::<TemperatureUnit>().is_err());
    }
}
