//! Convlab Core - Fundamental types
//!
//! This crate provides the core types used throughout Convlab:
//! - `Outcome`: the result of one conversion attempt
//! - `ConvertError`: structured errors with machine-readable codes

mod error;
mod outcome;

pub use error::{ConvertError, Severity, codes};
pub use outcome::{Outcome, UNSUPPORTED_TEXT, FAILED_TEXT};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConvertError, Outcome, Severity};
    pub use crate::error::codes;
}
