//! Convlab - Convert anything
//!
//! Unit conversion across ten categories plus number systems, Roman numerals,
//! Morse code and Braille, all offline and synchronous.

mod family;
mod session;
mod catalog;

pub use family::{LogicFamily, EndpointOption};
pub use session::{UnitSession, LogicSession, SessionState, InputValidator, UNIT_ERROR_TEXT};
pub use catalog::{CatalogEntry, CatalogKind, CATALOG, search};

pub use convlab_core::{ConvertError, Outcome, Severity, codes};
pub use convlab_plugin::{ConverterRegistry, ConverterHelp, ConverterMeta, resolve_and_convert};
pub use convlab_units::{UnitCategory, UnitOption, format_conversion, UNITS};

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Main Convlab engine
pub struct Convlab {
    families: HashMap<LogicFamily, Arc<ConverterRegistry>>,
}

impl Convlab {
    pub fn new() -> Self {
        let families: HashMap<_, _> = LogicFamily::ALL
            .into_iter()
            .map(|family| (family, Arc::new(family.registry())))
            .collect();
        debug!(families = families.len(), "convlab engine ready");
        Self { families }
    }

    pub fn registry(&self, family: LogicFamily) -> Arc<ConverterRegistry> {
        match self.families.get(&family) {
            Some(registry) => registry.clone(),
            None => Arc::new(family.registry()),
        }
    }

    /// Convert raw text within a logic family. Empty input or an empty
    /// endpoint id yields `Outcome::Empty`.
    pub fn convert_logic(&self, family: LogicFamily, from: &str, to: &str, input: &str) -> Outcome {
        if input.is_empty() || from.is_empty() || to.is_empty() {
            return Outcome::Empty;
        }
        self.registry(family).convert(from, to, input)
    }

    /// Convert raw numeric text between two units and format the result.
    /// Text without a leading number yields `Outcome::Empty`.
    pub fn convert_unit(&self, category: UnitCategory, from: &str, to: &str, input: &str) -> Outcome {
        if input.is_empty() {
            return Outcome::Empty;
        }
        match convlab_units::convert_and_format(category, input, from, to) {
            Ok(Some(text)) => Outcome::Converted(text),
            Ok(None) => Outcome::Empty,
            Err(e) => Outcome::Failed(e.into()),
        }
    }

    pub fn unit_options(&self, category: UnitCategory) -> Vec<UnitOption> {
        UNITS.options(category)
    }

    pub fn unit_session(&self, category: UnitCategory) -> UnitSession {
        UnitSession::new(category)
    }

    pub fn logic_session(&self, family: LogicFamily) -> LogicSession {
        LogicSession::new(family, self.registry(family))
    }

    /// Help for one converter key, with did-you-mean suggestions when the
    /// key is unknown
    pub fn help(&self, family: LogicFamily, key: &str) -> Result<ConverterHelp, ConvertError> {
        let registry = self.registry(family);
        registry.help(key).ok_or_else(|| {
            let similar = registry.find_similar(key);
            let err = ConvertError::new(codes::UNSUPPORTED_PAIR, format!("Unknown converter '{}'", key));
            if similar.is_empty() {
                err
            } else {
                err.with_suggestion(format!("Did you mean: {}?", similar.join(", ")))
            }
        })
    }

    pub fn list(&self, family: LogicFamily) -> Vec<(String, ConverterMeta)> {
        self.registry(family).list()
    }

    pub fn search(&self, query: &str) -> Vec<&'static CatalogEntry> {
        catalog::search(query)
    }
}

impl Default for Convlab {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_logic() {
        let lab = Convlab::new();
        assert_eq!(lab.convert_logic(LogicFamily::Morse, "text", "morse", "SOS").to_string(), "... --- ...");
        assert_eq!(lab.convert_logic(LogicFamily::Numeric, "hex", "binary", "F").to_string(), "1111");
        assert_eq!(lab.convert_logic(LogicFamily::Roman, "arabic", "roman", "4000").to_string(), "Invalid input (must be 1-3999)");
    }

    #[test]
    fn test_convert_logic_empty() {
        let lab = Convlab::new();
        assert_eq!(lab.convert_logic(LogicFamily::Morse, "text", "morse", ""), Outcome::Empty);
        assert_eq!(lab.convert_logic(LogicFamily::Morse, "", "morse", "SOS"), Outcome::Empty);
    }

    #[test]
    fn test_convert_logic_unsupported() {
        let lab = Convlab::new();
        let outcome = lab.convert_logic(LogicFamily::Morse, "text", "braille", "hi");
        assert_eq!(outcome, Outcome::Unsupported);
        assert_eq!(outcome.tag(), "unsupported-pair");
    }

    #[test]
    fn test_convert_unit() {
        let lab = Convlab::new();
        assert_eq!(lab.convert_unit(UnitCategory::Digital, "byte", "bit", "2").to_string(), "16");
        assert_eq!(lab.convert_unit(UnitCategory::Temperature, "celsius", "kelvin", "0").to_string(), "273.15");
        assert_eq!(lab.convert_unit(UnitCategory::Length, "meter", "foot", "abc"), Outcome::Empty);
    }

    #[test]
    fn test_convert_unit_unknown_unit() {
        let lab = Convlab::new();
        match lab.convert_unit(UnitCategory::Length, "meter", "parsec", "1") {
            Outcome::Failed(e) => assert_eq!(e.code, codes::UNKNOWN_UNIT),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_help() {
        let lab = Convlab::new();
        let help = lab.help(LogicFamily::Roman, "arabicToRoman").unwrap();
        assert!(!help.examples.is_empty());

        let err = lab.help(LogicFamily::Roman, "arabicToRomen").unwrap_err();
        assert!(err.suggestion.unwrap().contains("arabicToRoman"));
    }

    #[test]
    fn test_list() {
        let lab = Convlab::new();
        assert_eq!(lab.list(LogicFamily::Numeric).len(), 12);
    }

    #[test]
    fn test_sessions_share_registry() {
        let lab = Convlab::new();
        let mut session = lab.logic_session(LogicFamily::Numeric);
        session.set_to("hex");
        session.set_input("11111111");
        assert_eq!(session.result(), "FF");
    }

    #[test]
    fn test_search() {
        let lab = Convlab::new();
        assert_eq!(lab.search("roman").len(), 1);
    }
}
