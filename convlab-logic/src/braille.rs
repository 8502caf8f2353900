//! Grade 1 Braille using Unicode Braille Patterns
//!
//! Letters and most punctuation take one cell. Digits are the number sign
//! `⠼` followed by the cell of the letter a-j, and a few punctuation marks
//! are the prefix `⠐` followed by a payload cell.

use convlab_core::ConvertError;
use convlab_plugin::{ConverterMeta, ConverterPlugin};
use std::collections::HashMap;
use std::sync::LazyLock;

pub const NUMBER_SIGN: char = '⠼';
pub const PUNCTUATION_PREFIX: char = '⠐';

const LETTERS: [(char, char); 26] = [
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
];

/// Digits reuse the cells of a-j: 1 is a, ..., 9 is i, 0 is j
const DIGITS: [(char, char); 10] = [
    ('1', 'a'),
    ('2', 'b'),
    ('3', 'c'),
    ('4', 'd'),
    ('5', 'e'),
    ('6', 'f'),
    ('7', 'g'),
    ('8', 'h'),
    ('9', 'i'),
    ('0', 'j'),
];

const PUNCTUATION: [(char, &str); 12] = [
    ('.', "⠲"),
    (',', "⠂"),
    ('?', "⠦"),
    ('!', "⠖"),
    ('\'', "⠄"),
    ('"', "⠐⠂"),
    (';', "⠆"),
    (':', "⠒"),
    ('-', "⠤"),
    ('(', "⠐⠣"),
    (')', "⠐⠜"),
    (' ', "⠀"),
];

static FORWARD: LazyLock<HashMap<char, String>> = LazyLock::new(|| {
    let mut table: HashMap<char, String> = LETTERS
        .iter()
        .map(|&(c, cell)| (c, cell.to_string()))
        .collect();

    for (digit, letter) in DIGITS {
        if let Some(cell) = LETTERS.iter().find(|(l, _)| *l == letter).map(|(_, cell)| *cell) {
            table.insert(digit, format!("{}{}", NUMBER_SIGN, cell));
        }
    }

    for (c, cells) in PUNCTUATION {
        table.insert(c, cells.to_string());
    }

    table
});

static INVERSE: LazyLock<HashMap<String, char>> = LazyLock::new(|| {
    FORWARD.iter().map(|(&c, cells)| (cells.clone(), c)).collect()
});

/// Encode text. Input is lowercased; unknown characters pass through.
pub fn to_braille(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match FORWARD.get(&c) {
            Some(cells) => cells.clone(),
            None => c.to_string(),
        })
        .collect()
}

/// Decode Braille cells.
///
/// A number sign or punctuation prefix with a following cell consumes both
/// cells as one unit; anything else is read one cell at a time. Unknown
/// units pass through unchanged.
pub fn from_braille(cells: &str) -> String {
    let chars: Vec<char> = cells.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        let has_next = i + 1 < chars.len();

        if (current == NUMBER_SIGN || current == PUNCTUATION_PREFIX) && has_next {
            let pair: String = chars[i..i + 2].iter().collect();
            match INVERSE.get(&pair) {
                Some(c) => out.push(*c),
                None => out.push_str(&pair),
            }
            i += 2;
        } else {
            let mut buf = [0u8; 4];
            match INVERSE.get(current.encode_utf8(&mut buf) as &str) {
                Some(c) => out.push(*c),
                None => out.push(current),
            }
            i += 1;
        }
    }

    out
}

// ============ Plugins ============

pub struct TextToBraille;

static TEXT_TO_BRAILLE_EXAMPLES: [&str; 2] = ["hello", "room 101"];

impl ConverterPlugin for TextToBraille {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "text",
            to: "braille",
            description: "Encode text as Unicode Braille cells",
            examples: &TEXT_TO_BRAILLE_EXAMPLES,
            category: "braille",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        Ok(to_braille(input))
    }
}

pub struct BrailleToText;

static BRAILLE_TO_TEXT_EXAMPLES: [&str; 2] = ["⠓⠑⠇⠇⠕", "⠼⠁⠼⠚"];

impl ConverterPlugin for BrailleToText {
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "braille",
            to: "text",
            description: "Decode Unicode Braille cells into lowercase text",
            examples: &BRAILLE_TO_TEXT_EXAMPLES,
            category: "braille",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        Ok(from_braille(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tables_are_inverse() {
        assert_eq!(FORWARD.len(), 26 + 10 + 12);
        assert_eq!(FORWARD.len(), INVERSE.len());
    }

    #[test]
    fn test_letters() {
        assert_eq!(to_braille("hello"), "⠓⠑⠇⠇⠕");
        assert_eq!(to_braille("HeLLo"), "⠓⠑⠇⠇⠕");
        assert_eq!(from_braille("⠓⠑⠇⠇⠕"), "hello");
    }

    #[test]
    fn test_digits_use_number_sign() {
        assert_eq!(to_braille("1"), "⠼⠁");
        assert_eq!(to_braille("0"), "⠼⠚");
        assert_eq!(from_braille("⠼⠁⠼⠚"), "10");
    }

    #[test]
    fn test_two_cell_punctuation() {
        assert_eq!(to_braille("(\"a\")"), "⠐⠣⠐⠂⠁⠐⠂⠐⠜");
        assert_eq!(from_braille("⠐⠣⠐⠂⠁⠐⠂⠐⠜"), "(\"a\")");
    }

    #[test]
    fn test_space_is_blank_cell() {
        assert_eq!(to_braille("a b"), "⠁⠀⠃");
        assert_eq!(from_braille("⠁⠀⠃"), "a b");
    }

    #[test]
    fn test_digit_then_letter() {
        assert_eq!(from_braille("⠼⠁⠁"), "1a");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(to_braille("a#"), "⠁#");
        assert_eq!(from_braille("x⠁"), "xa");
    }

    #[test]
    fn test_unknown_pair_passes_through() {
        assert_eq!(from_braille("⠼⠼"), "⠼⠼");
        assert_eq!(from_braille("⠐⠁"), "⠐⠁");
    }

    #[test]
    fn test_trailing_prefix_read_alone() {
        assert_eq!(from_braille("⠁⠼"), "a⠼");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_braille(""), "");
        assert_eq!(from_braille(""), "");
    }

    #[test]
    fn test_plugins() {
        assert_eq!(TextToBraille.call("room 101").unwrap(), "⠗⠕⠕⠍⠀⠼⠁⠼⠚⠼⠁");
        assert_eq!(BrailleToText.call("⠼⠁⠼⠚").unwrap(), "10");
    }

    proptest! {
        #[test]
        fn test_braille_round_trip(text in "[a-z0-9 .,?!';:()\"-]{0,40}") {
            prop_assert_eq!(from_braille(&to_braille(&text)), text);
        }
    }
}
