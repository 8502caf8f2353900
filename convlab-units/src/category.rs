//! Unit categories

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ConversionError;

/// A family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Speed,
    Area,
    Volume,
    Time,
    Digital,
    Energy,
    Pressure,
}

impl UnitCategory {
    /// Every category, in display order
    pub const ALL: [UnitCategory; 10] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Speed,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Time,
        UnitCategory::Digital,
        UnitCategory::Energy,
        UnitCategory::Pressure,
    ];

    /// Stable id, also the category string the formatter understands
    pub fn id(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Speed => "speed",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::Time => "time",
            UnitCategory::Digital => "digital",
            UnitCategory::Energy => "energy",
            UnitCategory::Pressure => "pressure",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight / Mass",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Speed => "Speed",
            UnitCategory::Area => "Area",
            UnitCategory::Volume => "Volume",
            UnitCategory::Time => "Time",
            UnitCategory::Digital => "Digital Storage",
            UnitCategory::Energy => "Energy",
            UnitCategory::Pressure => "Pressure",
        }
    }

    /// Temperature is the only affine category; all others scale linearly
    pub fn is_linear(&self) -> bool {
        !matches!(self, UnitCategory::Temperature)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for UnitCategory {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.id() == needle)
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!(" Digital ".parse::<UnitCategory>().unwrap(), UnitCategory::Digital);
        assert!("mass".parse::<UnitCategory>().is_err());
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = UnitCategory::ALL.iter().filter(|c| !c.is_linear()).collect();
        assert_eq!(affine, vec![&UnitCategory::Temperature]);
    }

    #[test]
    fn test_display_is_id() {
        assert_eq!(UnitCategory::Weight.to_string(), "weight");
        assert_eq!(UnitCategory::Weight.title(), "Weight / Mass");
    }
}
