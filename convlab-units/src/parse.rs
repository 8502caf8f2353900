//! Numeric input parsing for unit converters

use regex::Regex;
use std::sync::LazyLock;

/// Leading numeric prefix: sign, digits with at most one point, exponent
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("numeric prefix pattern is valid")
});

/// What a user may type into a unit converter field
static KEYSTROKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d*\.?\d*$").expect("keystroke pattern is valid")
});

/// Parse the longest numeric prefix of `input`, ignoring leading whitespace
/// and anything after the number. Returns `None` when there is no number,
/// e.g. for `"-"`, `"."` or `"abc"`.
pub fn parse_numeric_input(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let prefix = NUMERIC_PREFIX.find(trimmed)?;
    prefix.as_str().parse::<f64>().ok()
}

/// True if `input` is an acceptable partial entry: empty, or an optional
/// minus sign followed by digits with at most one decimal point.
pub fn accepts_keystroke(input: &str) -> bool {
    input.is_empty() || KEYSTROKE.is_match(input)
}
