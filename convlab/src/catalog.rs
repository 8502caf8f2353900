//! Converter catalog and search

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Unit,
    Logic,
}

/// One searchable converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    /// Unit category id or logic family id
    pub category: &'static str,
    pub tab_id: &'static str,
    pub kind: CatalogKind,
    pub description: &'static str,
}

const fn unit(title: &'static str, category: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { title, category, tab_id: "units", kind: CatalogKind::Unit, description }
}

const fn logic(title: &'static str, category: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { title, category, tab_id: "logic", kind: CatalogKind::Logic, description }
}

pub static CATALOG: [CatalogEntry; 14] = [
    unit("Length", "length", "Convert meters, kilometers, feet, inches, miles and nautical miles"),
    unit("Weight / Mass", "weight", "Convert kilograms, grams, pounds, ounces, stones and tons"),
    unit("Temperature", "temperature", "Convert Celsius, Fahrenheit and Kelvin"),
    unit("Speed", "speed", "Convert km/h, mph, knots and meters per second"),
    unit("Area", "area", "Convert square meters, acres, hectares and square feet"),
    unit("Volume", "volume", "Convert liters, gallons, quarts, pints and cubic meters"),
    unit("Time", "time", "Convert seconds, minutes, hours, days, weeks and years"),
    unit("Digital Storage", "digital", "Convert bits, bytes, kilobytes, gigabytes and gibibytes"),
    unit("Energy", "energy", "Convert joules, calories, kilowatt-hours, electronvolts and BTU"),
    unit("Pressure", "pressure", "Convert pascals, bar, psi, atmospheres and mmHg"),
    logic("Number Systems", "numeric", "Convert between binary, decimal, hexadecimal and octal"),
    logic("Roman Numerals", "roman", "Convert Arabic numbers to Roman numerals and back"),
    logic("Morse Code", "morse", "Translate text to Morse code and back"),
    logic("Braille", "braille", "Translate text to Braille symbols and back"),
];

/// Case-insensitive substring search over titles and descriptions, in
/// catalog order. Queries with fewer than two non-blank characters match
/// nothing. Surrounding whitespace is kept for the match itself.
pub fn search(query: &str) -> Vec<&'static CatalogEntry> {
    if query.trim().chars().count() < 2 {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogicFamily;
    use convlab_units::UnitCategory;

    #[test]
    fn test_titles_match_categories_and_families() {
        for category in UnitCategory::ALL {
            let entry = CATALOG.iter().find(|e| e.category == category.id()).unwrap();
            assert_eq!(entry.title, category.title());
            assert_eq!(entry.kind, CatalogKind::Unit);
        }
        for family in LogicFamily::ALL {
            let entry = CATALOG.iter().find(|e| e.category == family.id()).unwrap();
            assert_eq!(entry.title, family.title());
            assert_eq!(entry.kind, CatalogKind::Logic);
        }
    }

    #[test]
    fn test_short_query() {
        assert!(search("").is_empty());
        assert!(search("m").is_empty());
        assert!(search("  m  ").is_empty());
    }

    #[test]
    fn test_search_title() {
        let hits: Vec<&str> = search("MORSE").iter().map(|e| e.title).collect();
        assert_eq!(hits, vec!["Morse Code"]);
    }

    #[test]
    fn test_search_description_in_catalog_order() {
        let hits: Vec<&str> = search("meters").iter().map(|e| e.category).collect();
        assert_eq!(hits, vec!["length", "speed", "area", "volume"]);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        assert!(search("  braille ").is_empty());
        assert!(search(" b ").is_empty());
        assert_eq!(search("braille").len(), 1);
        assert_eq!(search("Morse code").len(), 1);
    }

    #[test]
    fn test_serialize_entry() {
        let json = serde_json::to_value(&CATALOG[0]).unwrap();
        assert_eq!(json["kind"], "unit");
        assert_eq!(json["tab_id"], "units");
    }
}
