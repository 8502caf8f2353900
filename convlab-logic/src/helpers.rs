//! Helper functions for logic converters
//!
//! Alphabet validation with a shared compiled-pattern cache, and the lenient
//! integer prefix parser used for Arabic input.

use convlab_core::ConvertError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Regex cache for compiled patterns
static REGEX_CACHE: OnceLock<RwLock<HashMap<String, Regex>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, Regex>> {
    REGEX_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Get or compile a regex pattern with caching
pub fn get_regex(pattern: &str) -> Result<Regex, ConvertError> {
    let cache = get_cache();

    {
        let read_guard = cache.read().map_err(|_| {
            ConvertError::internal("Failed to acquire regex cache lock")
        })?;
        if let Some(re) = read_guard.get(pattern) {
            return Ok(re.clone());
        }
    }

    let re = Regex::new(pattern).map_err(|e| {
        ConvertError::internal(format!("Invalid regex '{}': {}", pattern, e))
    })?;

    // Caching is best-effort
    if let Ok(mut write_guard) = cache.write() {
        write_guard.insert(pattern.to_string(), re.clone());
    }

    Ok(re)
}

/// Reject `input` with the exact `literal` unless the whole string matches
/// `pattern`.
pub fn require_pattern(input: &str, pattern: &str, literal: &str) -> Result<(), ConvertError> {
    if get_regex(pattern)?.is_match(input) {
        Ok(())
    } else {
        Err(ConvertError::invalid_input(literal))
    }
}

/// Outcome of reading a leading integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingInt {
    /// A value that fits in `i64`
    Value(i64),
    /// Digits were present but the value does not fit in `i64`
    OutOfRange,
    /// No digits at the start of the input
    Missing,
}

/// Read an optionally signed run of decimal digits at the start of `input`
/// (after leading whitespace). Anything after the digits is ignored.
pub fn leading_int(input: &str) -> LeadingInt {
    let Ok(re) = get_regex(r"^[+-]?\d+") else {
        return LeadingInt::Missing;
    };
    match re.find(input.trim_start()) {
        Some(m) => match m.as_str().parse::<i64>() {
            Ok(n) => LeadingInt::Value(n),
            Err(_) => LeadingInt::OutOfRange,
        },
        None => LeadingInt::Missing,
    }
}
