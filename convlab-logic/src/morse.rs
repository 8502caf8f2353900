//! International Morse code
//!
//! Characters are separated by single spaces and words by `/`. The inverse
//! table is derived from the forward one, so the two can never drift apart.

use convlab_core::ConvertError;
use convlab_plugin::{ConverterMeta, ConverterPlugin};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

const MORSE_TABLE: [(char, &str); 55] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
    (' ', "/"),
];

static FORWARD: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    MORSE_TABLE.iter().copied().collect()
});

static INVERSE: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    FORWARD.iter().map(|(&c, &code)| (code, c)).collect()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

/// Encode text. Unknown characters pass through unchanged.
pub fn to_morse(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let tokens: Vec<String> = text
        .to_uppercase()
        .chars()
        .map(|c| match FORWARD.get(&c) {
            Some(code) => (*code).to_string(),
            None => c.to_string(),
        })
        .collect();

    WHITESPACE_RUN.replace_all(&tokens.join(" "), " ").into_owned()
}

/// Decode space-separated codes. Unknown tokens pass through unchanged.
pub fn from_morse(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }

    code.split(' ')
        .map(|token| match INVERSE.get(token) {
            Some(c) => c.to_string(),
            None => token.to_string(),
        })
        .collect()
}

// ============ Plugins ============

pub struct TextToMorse;

static TEXT_TO_MORSE_EXAMPLES: [&str; 2] = ["SOS", "Hello World"];

impl ConverterPlugin for TextToMorse {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "text",
            to: "morse",
            description: "Encode text as Morse code, words separated by /",
            examples: &TEXT_TO_MORSE_EXAMPLES,
            category: "morse",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        Ok(to_morse(input))
    }
}

pub struct MorseToText;

static MORSE_TO_TEXT_EXAMPLES: [&str; 2] = ["... --- ...", ".... .. / - .... . .-. ."];

impl ConverterPlugin for MorseToText {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "morse",
            to: "text",
            description: "Decode Morse code into uppercase text",
            examples: &MORSE_TO_TEXT_EXAMPLES,
            category: "morse",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        Ok(from_morse(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tables_are_inverse() {
        assert_eq!(FORWARD.len(), INVERSE.len());
        for (c, code) in FORWARD.iter() {
            assert_eq!(INVERSE.get(code), Some(c));
        }
    }

    #[test]
    fn test_to_morse() {
        assert_eq!(to_morse("SOS"), "... --- ...");
        assert_eq!(to_morse("sos"), "... --- ...");
        assert_eq!(to_morse("Hi there"), ".... .. / - .... . .-. .");
    }

    #[test]
    fn test_to_morse_unknown_passes_through() {
        assert_eq!(to_morse("a#b"), ".- # -...");
    }

    #[test]
    fn test_to_morse_collapses_whitespace() {
        assert_eq!(to_morse("a\tb"), ".- -...");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_morse(""), "");
        assert_eq!(from_morse(""), "");
    }

    #[test]
    fn test_from_morse() {
        assert_eq!(from_morse("... --- ..."), "SOS");
        assert_eq!(from_morse(".... .. / - .... . .-. ."), "HI THERE");
        assert_eq!(from_morse("-..-."), "/");
    }

    #[test]
    fn test_from_morse_unknown_passes_through() {
        assert_eq!(from_morse("... ------- ..."), "S-------S");
    }

    #[test]
    fn test_plugins() {
        assert_eq!(TextToMorse.call("SOS").unwrap(), "... --- ...");
        assert_eq!(MorseToText.call("... --- ...").unwrap(), "SOS");
    }

    proptest! {
        #[test]
        fn test_morse_idempotent(text in "[a-zA-Z0-9 .,?!]{0,40}") {
            let once = to_morse(&text);
            prop_assert_eq!(to_morse(&from_morse(&once)), once);
        }
    }
}
