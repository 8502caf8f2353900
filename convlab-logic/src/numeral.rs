//! Number base conversion: binary, decimal, hexadecimal, octal
//!
//! Input is validated against the full alphabet of its base, read as an
//! unsigned 128-bit integer and re-rendered in the target base. Hex output is
//! uppercase.

use crate::helpers::require_pattern;
use convlab_core::ConvertError;
use convlab_plugin::{ConverterMeta, ConverterPlugin};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralBase {
    Binary,
    Decimal,
    Hex,
    Octal,
}

impl NumeralBase {
    pub const ALL: [NumeralBase; 4] = [
        NumeralBase::Binary,
        NumeralBase::Decimal,
        NumeralBase::Hex,
        NumeralBase::Octal,
    ];

    /// Endpoint id used in composite keys
    pub fn id(self) -> &'static str {
        match self {
            NumeralBase::Binary => "binary",
            NumeralBase::Decimal => "decimal",
            NumeralBase::Hex => "hex",
            NumeralBase::Octal => "octal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumeralBase::Binary => "Binary",
            NumeralBase::Decimal => "Decimal",
            NumeralBase::Hex => "Hexadecimal",
            NumeralBase::Octal => "Octal",
        }
    }

    pub fn radix(self) -> u32 {
        match self {
            NumeralBase::Binary => 2,
            NumeralBase::Decimal => 10,
            NumeralBase::Hex => 16,
            NumeralBase::Octal => 8,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            NumeralBase::Binary => r"^[01]+$",
            NumeralBase::Decimal => r"^[0-9]+$",
            NumeralBase::Hex => r"^[0-9A-Fa-f]+$",
            NumeralBase::Octal => r"^[0-7]+$",
        }
    }

    /// Literal returned when input does not belong to this base
    pub fn invalid_literal(self) -> &'static str {
        match self {
            NumeralBase::Binary => "Invalid binary input",
            NumeralBase::Decimal => "Invalid decimal input",
            NumeralBase::Hex => "Invalid hexadecimal input",
            NumeralBase::Octal => "Invalid octal input",
        }
    }

    pub fn from_id(id: &str) -> Option<NumeralBase> {
        NumeralBase::ALL.into_iter().find(|b| b.id() == id)
    }
}

/// Validate `input` for `base` and read it as an unsigned integer
pub fn parse_in_base(input: &str, base: NumeralBase) -> Result<u128, ConvertError> {
    require_pattern(input, base.pattern(), base.invalid_literal())?;
    u128::from_str_radix(input, base.radix()).map_err(|_| {
        ConvertError::overflow(format!("{} value does not fit in 128 bits", base.label()))
            .with_suggestion("Use a shorter number")
    })
}

pub fn render_in_base(value: u128, base: NumeralBase) -> String {
    match base {
        NumeralBase::Binary => format!("{:b}", value),
        NumeralBase::Decimal => value.to_string(),
        NumeralBase::Hex => format!("{:X}", value),
        NumeralBase::Octal => format!("{:o}", value),
    }
}

pub fn convert_base(input: &str, from: NumeralBase, to: NumeralBase) -> Result<String, ConvertError> {
    let value = parse_in_base(input, from)?;
    Ok(render_in_base(value, to))
}

// ============ Named conversions ============

pub fn binary_to_decimal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Binary, NumeralBase::Decimal)
}

pub fn binary_to_hex(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Binary, NumeralBase::Hex)
}

pub fn binary_to_octal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Binary, NumeralBase::Octal)
}

pub fn decimal_to_binary(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Decimal, NumeralBase::Binary)
}

pub fn decimal_to_hex(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Decimal, NumeralBase::Hex)
}

pub fn decimal_to_octal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Decimal, NumeralBase::Octal)
}

pub fn hex_to_binary(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Hex, NumeralBase::Binary)
}

pub fn hex_to_decimal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Hex, NumeralBase::Decimal)
}

pub fn hex_to_octal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Hex, NumeralBase::Octal)
}

pub fn octal_to_binary(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Octal, NumeralBase::Binary)
}

pub fn octal_to_decimal(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Octal, NumeralBase::Decimal)
}

pub fn octal_to_hex(input: &str) -> Result<String, ConvertError> {
    convert_base(input, NumeralBase::Octal, NumeralBase::Hex)
}

// ============ Plugin ============

/// One source/target base pair
pub struct BaseConversion {
    pub from: NumeralBase,
    pub to: NumeralBase,
}

impl BaseConversion {
    pub fn new(from: NumeralBase, to: NumeralBase) -> Self {
        Self { from, to }
    }

    /// Every ordered pair of distinct bases
    pub fn all() -> impl Iterator<Item = BaseConversion> {
        NumeralBase::ALL.into_iter().flat_map(|from| {
            NumeralBase::ALL
                .into_iter()
                .filter(move |to| *to != from)
                .map(move |to| BaseConversion::new(from, to))
        })
    }
}

static BINARY_EXAMPLES: [&str; 2] = ["1010", "11111111"];
static DECIMAL_EXAMPLES: [&str; 2] = ["10", "255"];
static HEX_EXAMPLES: [&str; 2] = ["A", "ff"];
static OCTAL_EXAMPLES: [&str; 2] = ["12", "377"];

impl ConverterPlugin for BaseConversion {
    fn meta(&self) -> ConverterMeta {
        let (description, examples): (&'static str, &'static [&'static str]) = match self.from {
            NumeralBase::Binary => ("Convert a binary integer to another base", &BINARY_EXAMPLES[..]),
            NumeralBase::Decimal => ("Convert a decimal integer to another base", &DECIMAL_EXAMPLES[..]),
            NumeralBase::Hex => ("Convert a hexadecimal integer to another base", &HEX_EXAMPLES[..]),
            NumeralBase::Octal => ("Convert an octal integer to another base", &OCTAL_EXAMPLES[..]),
        };
        ConverterMeta {
            from: self.from.id(),
            to: self.to.id(),
            description,
            examples,
            category: "numeric",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        convert_base(input, self.from, self.to)
    }
}
