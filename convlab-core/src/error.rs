//! Structured conversion errors
//!
//! Errors never cross a converter boundary as panics. They are values that
//! carry a machine-readable code plus the human-readable literal a caller
//! is allowed to show.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNSUPPORTED_PAIR: &str = "UNSUPPORTED_PAIR";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The input was rejected; the message is safe to show verbatim
    Validation,
    /// The conversion itself failed; the message is diagnostic only
    Error,
}

/// Structured error produced by converters and the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl ConvertError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// True when the input was rejected by a validator (as opposed to the
    /// conversion failing).
    pub fn is_validation(&self) -> bool {
        self.severity == Severity::Validation
    }

    // ========== Common Error Constructors ==========

    /// Input rejected by a validator. `literal` is the exact text shown to
    /// the user, e.g. `"Invalid binary input"`.
    pub fn invalid_input(literal: impl Into<String>) -> Self {
        Self::new(codes::INVALID_INPUT, literal)
            .with_severity(Severity::Validation)
    }

    pub fn unknown_unit(unit: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", unit))
            .with_suggestion("List the units of the category to see valid ids")
    }

    pub fn unknown_category(category: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", category))
    }

    pub fn unsupported_pair(from: &str, to: &str) -> Self {
        Self::new(
            codes::UNSUPPORTED_PAIR,
            format!("Conversion from {} to {} not supported", from, to),
        )
    }

    pub fn overflow(details: impl Into<String>) -> Self {
        Self::new(codes::OVERFLOW, format!("Numeric overflow: {}", details.into()))
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_validation() {
        let err = ConvertError::invalid_input("Invalid binary input");
        assert!(err.is_validation());
        assert_eq!(err.code, codes::INVALID_INPUT);
        assert_eq!(err.message, "Invalid binary input");
    }

    #[test]
    fn test_overflow_is_not_validation() {
        let err = ConvertError::overflow("too many digits");
        assert!(!err.is_validation());
        assert_eq!(err.code, codes::OVERFLOW);
    }

    #[test]
    fn test_display_includes_suggestion() {
        let err = ConvertError::unknown_unit("furlong");
        let text = err.to_string();
        assert!(text.starts_with("[UNKNOWN_UNIT] Unknown unit: furlong"));
        assert!(text.contains("suggestion:"));
    }

    #[test]
    fn test_serialize_skips_missing_suggestion() {
        let err = ConvertError::invalid_input("Invalid Roman numeral");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["severity"], "validation");
        assert!(json.get("suggestion").is_none());
    }
}
