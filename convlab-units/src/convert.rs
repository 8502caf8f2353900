//! Unit conversion functions
//!
//! Linear categories convert as `value * scale(from) / scale(to)`.
//! Non-finite values are not rejected; they propagate through the
//! arithmetic and callers are expected to validate input beforehand.

use crate::{ConversionError, TemperatureUnit, UnitCategory};
use crate::temperature::convert_temperature;
use crate::units::UNITS;

/// Convert between two units of a linear category
pub fn convert_linear(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let table = UNITS.table(category).ok_or(ConversionError::NotLinear(category))?;
    let from_unit = table.require(from)?;
    let to_unit = table.require(to)?;
    Ok(from_unit.convert_to(value, to_unit))
}

/// Convert between any two units of a category, temperature included
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    if category.is_linear() {
        return convert_linear(category, value, from, to);
    }
    let from: TemperatureUnit = from.parse()?;
    let to: TemperatureUnit = to.parse()?;
    Ok(convert_temperature(value, from, to))
}

pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Length, value, from, to)
}

pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Weight, value, from, to)
}

pub fn convert_speed(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Speed, value, from, to)
}

pub fn convert_area(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Area, value, from, to)
}

pub fn convert_volume(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Volume, value, from, to)
}

pub fn convert_time(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Time, value, from, to)
}

pub fn convert_digital(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Digital, value, from, to)
}

pub fn convert_energy(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Energy, value, from, to)
}

pub fn convert_pressure(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    convert_linear(UnitCategory::Pressure, value, from, to)
}
