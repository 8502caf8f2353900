//! Conversion outcomes
//!
//! Every conversion attempt ends in exactly one `Outcome`. Outcomes are
//! computed fresh per attempt and never mutated afterwards.

use crate::ConvertError;
use serde::{Deserialize, Serialize};

/// Text shown when no converter resolves for the requested pair
pub const UNSUPPORTED_TEXT: &str = "Conversion not supported";

/// Text shown when a resolved converter fails at runtime
pub const FAILED_TEXT: &str = "Error in conversion";

/// Result of a single conversion attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Outcome {
    /// Nothing to convert (empty input or unset endpoint)
    Empty,
    /// Successful conversion, already rendered
    Converted(String),
    /// Input rejected; carries the literal to display
    Invalid(String),
    /// No converter registered for the pair
    Unsupported,
    /// Converter raised an error; cause kept for diagnostics only
    Failed(ConvertError),
}

impl Outcome {
    /// Short tag describing the outcome kind
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Empty => "empty",
            Outcome::Converted(_) => "ok",
            Outcome::Invalid(_) => "invalid-input",
            Outcome::Unsupported => "unsupported-pair",
            Outcome::Failed(_) => "error",
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Outcome::Converted(_))
    }

    /// The converted text, if the attempt succeeded
    pub fn as_converted(&self) -> Option<&str> {
        match self {
            Outcome::Converted(s) => Some(s),
            _ => None,
        }
    }

    /// Map a converter's `Result` into an outcome. Validation errors keep
    /// their literal, everything else becomes `Failed`.
    pub fn from_result(result: Result<String, ConvertError>) -> Self {
        match result {
            Ok(s) => Outcome::Converted(s),
            Err(e) if e.is_validation() => Outcome::Invalid(e.message),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::Empty
    }
}

/// Renders the exact user-facing string
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Empty => Ok(()),
            Outcome::Converted(s) => write!(f, "{}", s),
            Outcome::Invalid(literal) => write!(f, "{}", literal),
            Outcome::Unsupported => write!(f, "{}", UNSUPPORTED_TEXT),
            Outcome::Failed(_) => write!(f, "{}", FAILED_TEXT),
        }
    }
}
