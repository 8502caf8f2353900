//! Unit definitions - the linear categories and their scale factors

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{UnitCategory, UnitDefinition, UnitOption, TemperatureUnit, ConversionError};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Ordered units of one linear category
#[derive(Debug, Clone)]
pub struct UnitTable {
    category: UnitCategory,
    units: Vec<UnitDefinition>,
}

impl UnitTable {
    fn new(category: UnitCategory) -> Self {
        UnitTable { category, units: Vec::new() }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn get(&self, id: &str) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Look up a unit, failing with the category in the error
    pub fn require(&self, id: &str) -> Result<&UnitDefinition, ConversionError> {
        self.get(id).ok_or_else(|| ConversionError::UnknownUnit {
            category: self.category,
            unit: id.to_string(),
        })
    }

    /// The unit with scale factor 1
    pub fn base(&self) -> Option<&UnitDefinition> {
        self.units.iter().find(|u| u.is_base())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Registry of every linear unit table
pub struct UnitRegistry {
    tables: HashMap<UnitCategory, UnitTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Table of a linear category; `None` for temperature
    pub fn table(&self, category: UnitCategory) -> Option<&UnitTable> {
        self.tables.get(&category)
    }

    pub fn get(&self, category: UnitCategory, id: &str) -> Option<&UnitDefinition> {
        self.table(category).and_then(|t| t.get(id))
    }

    /// Id/label pairs of a category in option order, temperature included
    pub fn options(&self, category: UnitCategory) -> Vec<UnitOption> {
        match self.table(category) {
            Some(table) => table
                .iter()
                .map(|u| UnitOption { id: u.id, name: u.display_name })
                .collect(),
            None => TemperatureUnit::ALL
                .iter()
                .map(|t| UnitOption { id: t.id(), name: t.display_name() })
                .collect(),
        }
    }

    fn register(&mut self, category: UnitCategory, id: &'static str, name: &'static str, scale: f64) {
        self.tables
            .entry(category)
            .or_insert_with(|| UnitTable::new(category))
            .units
            .push(UnitDefinition::new(id, name, scale));
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_speed_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_time_units();
        self.register_digital_units();
        self.register_energy_units();
        self.register_pressure_units();
    }

    fn register_length_units(&mut self) {
        use UnitCategory::Length as L;
        self.register(L, "meter", "Meters (m)", 1.0);
        self.register(L, "kilometer", "Kilometers (km)", 1000.0);
        self.register(L, "centimeter", "Centimeters (cm)", 0.01);
        self.register(L, "millimeter", "Millimeters (mm)", 0.001);
        self.register(L, "inch", "Inches (in)", 0.0254);
        self.register(L, "foot", "Feet (ft)", 0.3048);
        self.register(L, "yard", "Yards (yd)", 0.9144);
        self.register(L, "mile", "Miles (mi)", 1609.344);
        self.register(L, "nauticalMile", "Nautical Miles (nmi)", 1852.0);
    }

    fn register_weight_units(&mut self) {
        use UnitCategory::Weight as W;
        self.register(W, "kilogram", "Kilograms (kg)", 1.0);
        self.register(W, "gram", "Grams (g)", 0.001);
        self.register(W, "milligram", "Milligrams (mg)", 0.000001);
        self.register(W, "metricTon", "Metric Tons (t)", 1000.0);
        self.register(W, "pound", "Pounds (lb)", 0.45359237);
        self.register(W, "ounce", "Ounces (oz)", 0.028349523125);
        self.register(W, "stone", "Stone (st)", 6.35029318);
        self.register(W, "usTon", "US Tons (US t)", 907.18474);
        self.register(W, "imperialTon", "Imperial Tons (UK t)", 1016.0469088);
    }

    fn register_speed_units(&mut self) {
        use UnitCategory::Speed as S;
        self.register(S, "metersPerSecond", "Meters per Second (m/s)", 1.0);
        self.register(S, "kilometersPerHour", "Kilometers per Hour (km/h)", 0.277778);
        self.register(S, "milesPerHour", "Miles per Hour (mph)", 0.44704);
        self.register(S, "knots", "Knots (kn)", 0.514444);
        self.register(S, "feetPerSecond", "Feet per Second (ft/s)", 0.3048);
    }

    fn register_area_units(&mut self) {
        use UnitCategory::Area as A;
        self.register(A, "squareMeter", "Square Meters (m²)", 1.0);
        self.register(A, "squareKilometer", "Square Kilometers (km²)", 1_000_000.0);
        self.register(A, "squareCentimeter", "Square Centimeters (cm²)", 0.0001);
        self.register(A, "squareMillimeter", "Square Millimeters (mm²)", 0.000001);
        self.register(A, "squareInch", "Square Inches (in²)", 0.00064516);
        self.register(A, "squareFoot", "Square Feet (ft²)", 0.09290304);
        self.register(A, "squareYard", "Square Yards (yd²)", 0.83612736);
        self.register(A, "squareMile", "Square Miles (mi²)", 2589988.11);
        self.register(A, "acre", "Acres (ac)", 4046.8564224);
        self.register(A, "hectare", "Hectares (ha)", 10000.0);
    }

    fn register_volume_units(&mut self) {
        use UnitCategory::Volume as V;
        self.register(V, "cubicMeter", "Cubic Meters (m³)", 1.0);
        self.register(V, "liter", "Liters (L)", 0.001);
        self.register(V, "milliliter", "Milliliters (mL)", 0.000001);
        self.register(V, "cubicInch", "Cubic Inches (in³)", 0.0000163871);
        self.register(V, "cubicFoot", "Cubic Feet (ft³)", 0.0283168);
        self.register(V, "cubicYard", "Cubic Yards (yd³)", 0.764555);
        self.register(V, "usGallon", "US Gallons (US gal)", 0.00378541);
        self.register(V, "usQuart", "US Quarts (US qt)", 0.000946353);
        self.register(V, "usPint", "US Pints (US pt)", 0.000473176);
        self.register(V, "usFluidOunce", "US Fluid Ounces (US fl oz)", 0.0000295735);
        self.register(V, "imperialGallon", "Imperial Gallons (UK gal)", 0.00454609);
    }

    fn register_time_units(&mut self) {
        use UnitCategory::Time as T;
        self.register(T, "second", "Seconds (s)", 1.0);
        self.register(T, "minute", "Minutes (min)", 60.0);
        self.register(T, "hour", "Hours (h)", 3600.0);
        self.register(T, "day", "Days (d)", 86400.0);
        self.register(T, "week", "Weeks (wk)", 604800.0);
        self.register(T, "month", "Months (avg)", 2628000.0); // average month
        self.register(T, "year", "Years (yr)", 31536000.0); // non-leap year
        self.register(T, "millisecond", "Milliseconds (ms)", 0.001);
        self.register(T, "microsecond", "Microseconds (μs)", 0.000001);
        self.register(T, "nanosecond", "Nanoseconds (ns)", 0.000000001);
    }

    fn register_digital_units(&mut self) {
        use UnitCategory::Digital as D;
        self.register(D, "bit", "Bits (b)", 0.125);
        self.register(D, "byte", "Bytes (B)", 1.0);
        self.register(D, "kilobyte", "Kilobytes (KB)", 1e3);
        self.register(D, "megabyte", "Megabytes (MB)", 1e6);
        self.register(D, "gigabyte", "Gigabytes (GB)", 1e9);
        self.register(D, "terabyte", "Terabytes (TB)", 1e12);
        self.register(D, "petabyte", "Petabytes (PB)", 1e15);

        // Binary units (IEC)
        self.register(D, "kibibyte", "Kibibytes (KiB)", 1024.0);
        self.register(D, "mebibyte", "Mebibytes (MiB)", 1048576.0);
        self.register(D, "gibibyte", "Gibibytes (GiB)", 1073741824.0);
        self.register(D, "tebibyte", "Tebibytes (TiB)", 1099511627776.0);
        self.register(D, "pebibyte", "Pebibytes (PiB)", 1125899906842624.0);
    }

    fn register_energy_units(&mut self) {
        use UnitCategory::Energy as E;
        self.register(E, "joule", "Joules (J)", 1.0);
        self.register(E, "kilojoule", "Kilojoules (kJ)", 1000.0);
        self.register(E, "calorie", "Calories (cal)", 4.184);
        self.register(E, "kilocalorie", "Kilocalories (kcal)", 4184.0);
        self.register(E, "wattHour", "Watt-hours (Wh)", 3600.0);
        self.register(E, "kilowattHour", "Kilowatt-hours (kWh)", 3600000.0);
        self.register(E, "electronvolt", "Electronvolts (eV)", 1.602176634e-19);
        self.register(E, "britishThermalUnit", "British Thermal Units (BTU)", 1055.06);
        self.register(E, "usTherm", "US Therms", 105506000.0);
        self.register(E, "footPound", "Foot-pounds (ft⋅lb)", 1.355818);
    }

    fn register_pressure_units(&mut self) {
        use UnitCategory::Pressure as P;
        self.register(P, "pascal", "Pascals (Pa)", 1.0);
        self.register(P, "kilopascal", "Kilopascals (kPa)", 1000.0);
        self.register(P, "megapascal", "Megapascals (MPa)", 1_000_000.0);
        self.register(P, "bar", "Bars", 100000.0);
        self.register(P, "psi", "Pounds per Square Inch (psi)", 6894.76);
        self.register(P, "atmosphere", "Atmospheres (atm)", 101325.0);
        self.register(P, "torr", "Torr", 133.322);
        self.register(P, "millimeterMercury", "Millimeters of Mercury (mmHg)", 133.322);
        self.register(P, "inchMercury", "Inches of Mercury (inHg)", 3386.39);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_linear_category_has_a_table() {
        for category in UnitCategory::ALL {
            assert_eq!(UNITS.table(category).is_some(), category.is_linear(), "{}", category);
        }
    }

    #[test]
    fn test_exactly_one_base_unit_per_table() {
        for category in UnitCategory::ALL.iter().filter(|c| c.is_linear()) {
            let table = UNITS.table(*category).unwrap();
            let bases = table.iter().filter(|u| u.is_base()).count();
            assert_eq!(bases, 1, "{} should have one base unit", category);
            assert!(table.len() >= 2);
        }
    }

    #[test]
    fn test_unit_ids_unique() {
        for category in UnitCategory::ALL.iter().filter(|c| c.is_linear()) {
            let ids = UNITS.table(*category).unwrap().ids();
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len(), "duplicate id in {}", category);
        }
    }

    #[test]
    fn test_base_units() {
        let base = |c| UNITS.table(c).unwrap().base().unwrap().id;
        assert_eq!(base(UnitCategory::Length), "meter");
        assert_eq!(base(UnitCategory::Weight), "kilogram");
        assert_eq!(base(UnitCategory::Digital), "byte");
        assert_eq!(base(UnitCategory::Pressure), "pascal");
    }

    #[test]
    fn test_option_order_follows_registration() {
        let options = UNITS.options(UnitCategory::Length);
        assert_eq!(options[0].id, "meter");
        assert_eq!(options[1].id, "kilometer");
        assert_eq!(options.last().unwrap().name, "Nautical Miles (nmi)");
    }

    #[test]
    fn test_temperature_options() {
        let ids: Vec<_> = UNITS.options(UnitCategory::Temperature).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["celsius", "fahrenheit", "kelvin"]);
    }

    #[test]
    fn test_require_unknown_unit() {
        let err = UNITS.table(UnitCategory::Time).unwrap().require("fortnight").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { category: UnitCategory::Time, .. }));
    }
}
