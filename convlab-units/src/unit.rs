//! Unit representation with its scale factor

use std::fmt;
use serde::Serialize;
use convlab_core::ConvertError;
use crate::UnitCategory;

/// A unit that scales linearly to its category's base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Endpoint id (e.g. "nauticalMile")
    pub id: &'static str,
    /// Label shown to users (e.g. "Nautical Miles (nmi)")
    pub display_name: &'static str,
    /// Multiplier converting a quantity of this unit into the base unit
    pub scale_to_base: f64,
}

impl UnitDefinition {
    pub const fn new(id: &'static str, display_name: &'static str, scale_to_base: f64) -> Self {
        UnitDefinition { id, display_name, scale_to_base }
    }

    pub fn is_base(&self) -> bool {
        self.scale_to_base == 1.0
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale_to_base
    }

    pub fn from_base(&self, value: f64) -> f64 {
        value / self.scale_to_base
    }

    /// Convert a value from this unit to another unit of the same category
    pub fn convert_to(&self, value: f64, target: &UnitDefinition) -> f64 {
        target.from_base(self.to_base(value))
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// An id/label pair for any unit, including temperature units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitOption {
    pub id: &'static str,
    pub name: &'static str,
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("unknown {category} unit: {unit}")]
    UnknownUnit { category: UnitCategory, unit: String },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("{0} has no scale factors; use the temperature converter")]
    NotLinear(UnitCategory),
}

impl From<ConversionError> for ConvertError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownUnit { unit, .. } => ConvertError::unknown_unit(&unit),
            ConversionError::UnknownCategory(c) => ConvertError::unknown_category(&c),
            other => ConvertError::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convlab_core::codes;

    const METER: UnitDefinition = UnitDefinition::new("meter", "Meters (m)", 1.0);
    const KILOMETER: UnitDefinition = UnitDefinition::new("kilometer", "Kilometers (km)", 1000.0);

    #[test]
    fn test_base_unit() {
        assert!(METER.is_base());
        assert!(!KILOMETER.is_base());
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(METER.convert_to(5000.0, &KILOMETER), 5.0);
        assert_eq!(KILOMETER.convert_to(5.0, &METER), 5000.0);
    }

    #[test]
    fn test_error_into_convert_error() {
        let err: ConvertError = ConversionError::UnknownUnit {
            category: UnitCategory::Length,
            unit: "furlong".to_string(),
        }
        .into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert!(err.message.contains("furlong"));
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnknownUnit {
            category: UnitCategory::Speed,
            unit: "warp".to_string(),
        };
        assert_eq!(err.to_string(), "unknown speed unit: warp");
    }
}
