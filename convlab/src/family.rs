//! Logic converter families

use convlab_core::ConvertError;
use convlab_plugin::ConverterRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One selectable endpoint of a logic converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn endpoint(id: &'static str, label: &'static str) -> EndpointOption {
    EndpointOption { id, label }
}

const NUMERIC_ENDPOINTS: [EndpointOption; 4] = [
    endpoint("binary", "Binary"),
    endpoint("decimal", "Decimal"),
    endpoint("hex", "Hexadecimal"),
    endpoint("octal", "Octal"),
];

const ROMAN_INPUTS: [EndpointOption; 2] = [endpoint("arabic", "Arabic Number"), endpoint("roman", "Roman Numeral")];
const ROMAN_OUTPUTS: [EndpointOption; 2] = [endpoint("roman", "Roman Numeral"), endpoint("arabic", "Arabic Number")];

const MORSE_INPUTS: [EndpointOption; 2] = [endpoint("text", "Text"), endpoint("morse", "Morse Code")];
const MORSE_OUTPUTS: [EndpointOption; 2] = [endpoint("morse", "Morse Code"), endpoint("text", "Text")];

const BRAILLE_INPUTS: [EndpointOption; 2] = [endpoint("text", "Text"), endpoint("braille", "Braille")];
const BRAILLE_OUTPUTS: [EndpointOption; 2] = [endpoint("braille", "Braille"), endpoint("text", "Text")];

/// A group of logic converters sharing one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicFamily {
    Numeric,
    Roman,
    Morse,
    Braille,
}

impl LogicFamily {
    pub const ALL: [LogicFamily; 4] = [
        LogicFamily::Numeric,
        LogicFamily::Roman,
        LogicFamily::Morse,
        LogicFamily::Braille,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            LogicFamily::Numeric => "numeric",
            LogicFamily::Roman => "roman",
            LogicFamily::Morse => "morse",
            LogicFamily::Braille => "braille",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LogicFamily::Numeric => "Number Systems",
            LogicFamily::Roman => "Roman Numerals",
            LogicFamily::Morse => "Morse Code",
            LogicFamily::Braille => "Braille",
        }
    }

    /// Source endpoints, in option order
    pub fn input_options(&self) -> &'static [EndpointOption] {
        match self {
            LogicFamily::Numeric => &NUMERIC_ENDPOINTS,
            LogicFamily::Roman => &ROMAN_INPUTS,
            LogicFamily::Morse => &MORSE_INPUTS,
            LogicFamily::Braille => &BRAILLE_INPUTS,
        }
    }

    /// Destination endpoints, in option order
    pub fn output_options(&self) -> &'static [EndpointOption] {
        match self {
            LogicFamily::Numeric => &NUMERIC_ENDPOINTS,
            LogicFamily::Roman => &ROMAN_OUTPUTS,
            LogicFamily::Morse => &MORSE_OUTPUTS,
            LogicFamily::Braille => &BRAILLE_OUTPUTS,
        }
    }

    /// Build this family's converter registry
    pub fn registry(&self) -> ConverterRegistry {
        let registry = ConverterRegistry::new(self.id());
        match self {
            LogicFamily::Numeric => convlab_logic::load_numeric_library(registry),
            LogicFamily::Roman => convlab_logic::load_roman_library(registry),
            LogicFamily::Morse => convlab_logic::load_morse_library(registry),
            LogicFamily::Braille => convlab_logic::load_braille_library(registry),
        }
    }
}

impl fmt::Display for LogicFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LogicFamily {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        LogicFamily::ALL
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| {
                ConvertError::unknown_category(s)
                    .with_suggestion("Use one of: numeric, roman, morse, braille")
            })
    }
}
