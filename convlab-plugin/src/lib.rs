//! Convlab Plugin System
//!
//! Provides the pieces every converter family is built from:
//! - `ConverterPlugin`: a pure `&str -> String` transform with metadata
//! - `ConverterRegistry`: composite-key table plus the dispatcher
//! - key helpers that build `<from>To<To>` style composite keys

mod traits;
mod key;
mod registry;

pub use traits::{ConverterPlugin, ConverterMeta, FnConverter};
pub use key::{capitalize, composite_key, candidate_keys};
pub use registry::{ConverterRegistry, ConverterHelp, resolve_and_convert};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        ConverterPlugin, ConverterMeta, FnConverter,
        ConverterRegistry, composite_key,
    };
    pub use convlab_core::prelude::*;
}
