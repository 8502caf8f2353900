//! Convlab Logic - Encoding and numeral converters
//!
//! Number bases, Roman numerals, Morse code and Braille. Every converter is a
//! pure `&str -> String` function; invalid input comes back as a validation
//! error carrying the literal a user interface shows.

mod helpers;
mod numeral;
mod roman;
mod morse;
mod braille;

use convlab_plugin::ConverterRegistry;
use tracing::debug;

pub use numeral::{
    NumeralBase, BaseConversion, convert_base, parse_in_base, render_in_base,
    binary_to_decimal, binary_to_hex, binary_to_octal,
    decimal_to_binary, decimal_to_hex, decimal_to_octal,
    hex_to_binary, hex_to_decimal, hex_to_octal,
    octal_to_binary, octal_to_decimal, octal_to_hex,
};
pub use roman::{
    to_roman, from_roman, roman_value, arabic_to_roman, ArabicToRoman, RomanToArabic,
    OUT_OF_RANGE, INVALID_NUMERAL, INVALID_NUMBER,
};
pub use morse::{to_morse, from_morse, TextToMorse, MorseToText};
pub use braille::{to_braille, from_braille, TextToBraille, BrailleToText, NUMBER_SIGN, PUNCTUATION_PREFIX};

/// Load the 12 base conversions into a registry
pub fn load_numeric_library(registry: ConverterRegistry) -> ConverterRegistry {
    let registry = BaseConversion::all().fold(registry, |r, c| r.with_converter(c));
    debug!(registry = %registry.name(), converters = registry.len(), "loaded numeric library");
    registry
}

/// Load Arabic/Roman conversions into a registry
pub fn load_roman_library(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter(ArabicToRoman)
        .with_converter(RomanToArabic)
}

/// Load text/Morse conversions into a registry
pub fn load_morse_library(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter(TextToMorse)
        .with_converter(MorseToText)
}

/// Load text/Braille conversions into a registry
pub fn load_braille_library(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter(TextToBraille)
        .with_converter(BrailleToText)
}

#[cfg(test)]
mod tests {
    use super::*;
    use convlab_core::Outcome;

    #[test]
    fn test_numeric_keys() {
        let registry = load_numeric_library(ConverterRegistry::new("numeric"));
        assert_eq!(
            registry.keys(),
            vec![
                "binaryToDecimal", "binaryToHex", "binaryToOctal",
                "decimalToBinary", "decimalToHex", "decimalToOctal",
                "hexToBinary", "hexToDecimal", "hexToOctal",
                "octalToBinary", "octalToDecimal", "octalToHex",
            ]
        );
    }

    #[test]
    fn test_family_keys() {
        assert_eq!(load_roman_library(ConverterRegistry::new("roman")).keys(), vec!["arabicToRoman", "romanToArabic"]);
        assert_eq!(load_morse_library(ConverterRegistry::new("morse")).keys(), vec!["morseToText", "textToMorse"]);
        assert_eq!(load_braille_library(ConverterRegistry::new("braille")).keys(), vec!["brailleToText", "textToBraille"]);
    }

    #[test]
    fn test_dispatch_through_registry() {
        let registry = load_numeric_library(ConverterRegistry::new("numeric"));
        assert_eq!(registry.convert("decimal", "hex", "255"), Outcome::Converted("FF".into()));
        assert_eq!(registry.convert("binary", "decimal", "12"), Outcome::Invalid("Invalid binary input".into()));
        assert_eq!(registry.convert("binary", "binary", "1"), Outcome::Unsupported);
        assert_eq!(registry.convert("decimal", "hex", &"9".repeat(50)).to_string(), "Error in conversion");
    }

    #[test]
    fn test_roman_dispatch() {
        let registry = load_roman_library(ConverterRegistry::new("roman"));
        assert_eq!(registry.convert("arabic", "roman", "1994").to_string(), "MCMXCIV");
        assert_eq!(registry.convert("roman", "arabic", "hello").to_string(), "Invalid Roman numeral");
    }
}
