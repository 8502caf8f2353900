//! Roman numerals

use crate::helpers::{leading_int, require_pattern, LeadingInt};
use convlab_core::ConvertError;
use convlab_plugin::{ConverterMeta, ConverterPlugin};

/// Descending values with the subtractive pairs interleaved
const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub const OUT_OF_RANGE: &str = "Invalid input (must be 1-3999)";
pub const INVALID_NUMERAL: &str = "Invalid Roman numeral";
pub const INVALID_NUMBER: &str = "Invalid number";

/// Greedy subtractive encoding of `n` in 1..=3999
pub fn to_roman(n: i64) -> Result<String, ConvertError> {
    if !(1..=3999).contains(&n) {
        return Err(ConvertError::invalid_input(OUT_OF_RANGE));
    }

    let mut remaining = n as u32;
    let mut out = String::new();
    for (value, symbol) in ROMAN_TABLE {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(out)
}

fn symbol_value(c: char) -> u64 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Value of a Roman numeral. Only the alphabet is checked, so ungrammatical
/// strings such as "IIII" or "VX" are accepted.
pub fn roman_value(s: &str) -> Result<u64, ConvertError> {
    require_pattern(s, r"(?i)^[IVXLCDM]+$", INVALID_NUMERAL)?;

    let values: Vec<u64> = s.to_uppercase().chars().map(symbol_value).collect();
    let mut total: u64 = 0;
    let mut i = 0;
    while i < values.len() {
        let current = values[i];
        let next = values.get(i + 1).copied().unwrap_or(0);
        let step = if current < next {
            i += 2;
            next - current
        } else {
            i += 1;
            current
        };
        total = total
            .checked_add(step)
            .ok_or_else(|| ConvertError::overflow("Roman numeral value too large"))?;
    }
    Ok(total)
}

pub fn from_roman(s: &str) -> Result<String, ConvertError> {
    roman_value(s).map(|v| v.to_string())
}

/// Read a leading integer from free text, then encode it
pub fn arabic_to_roman(input: &str) -> Result<String, ConvertError> {
    match leading_int(input) {
        LeadingInt::Value(n) => to_roman(n),
        LeadingInt::OutOfRange => Err(ConvertError::invalid_input(OUT_OF_RANGE)),
        LeadingInt::Missing => Err(ConvertError::invalid_input(INVALID_NUMBER)),
    }
}

// ============ Plugins ============

pub struct ArabicToRoman;

static ARABIC_TO_ROMAN_EXAMPLES: [&str; 3] = ["1994", "2024", "3999"];

impl ConverterPlugin for ArabicToRoman {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "arabic",
            to: "roman",
            description: "Write an integer from 1 to 3999 as a Roman numeral",
            examples: &ARABIC_TO_ROMAN_EXAMPLES,
            category: "roman",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        arabic_to_roman(input)
    }
}

pub struct RomanToArabic;

static ROMAN_TO_ARABIC_EXAMPLES: [&str; 3] = ["MCMXCIV", "xiv", "MMXXIV"];

impl ConverterPlugin for RomanToArabic {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "roman",
            to: "arabic",
            description: "Read a Roman numeral as an integer",
            examples: &ROMAN_TO_ARABIC_EXAMPLES,
            category: "roman",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        from_roman(input)
    }
}
