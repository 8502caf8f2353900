//! Plugin traits

use convlab_core::ConvertError;
use serde::Serialize;

/// Metadata for a converter plugin
#[derive(Debug, Clone, Serialize)]
pub struct ConverterMeta {
    /// Source endpoint id (e.g. "binary")
    pub from: &'static str,
    /// Destination endpoint id (e.g. "decimal")
    pub to: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    pub category: &'static str,
}

/// Pure converter plugin
///
/// `call` must be referentially transparent: the same input always yields
/// the same output and nothing is mutated.
pub trait ConverterPlugin: Send + Sync {
    fn meta(&self) -> ConverterMeta;
    fn call(&self, input: &str) -> Result<String, ConvertError>;
}

/// Adapter that turns a closure into a converter
pub struct FnConverter<F> {
    description: &'static str,
    func: F,
}

impl<F> FnConverter<F>
where
    F: Fn(&str) -> Result<String, ConvertError> + Send + Sync,
{
    pub fn new(func: F) -> Self {
        Self { description: "", func }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

impl<F> ConverterPlugin for FnConverter<F>
where
    F: Fn(&str) -> Result<String, ConvertError> + Send + Sync,
{
    fn meta(&self) -> ConverterMeta {
        ConverterMeta {
            from: "",
            to: "",
            description: self.description,
            examples: &[],
            category: "custom",
        }
    }

    fn call(&self, input: &str) -> Result<String, ConvertError> {
        (self.func)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_converter_calls_closure() {
        let upper = FnConverter::new(|s: &str| Ok(s.to_uppercase()));
        assert_eq!(upper.call("sos").unwrap(), "SOS");
        assert_eq!(upper.meta().category, "custom");
    }

    #[test]
    fn test_fn_converter_propagates_error() {
        let reject = FnConverter::new(|_: &str| Err(ConvertError::invalid_input("nope")))
            .with_description("always rejects");
        assert!(reject.call("x").unwrap_err().is_validation());
        assert_eq!(reject.meta().description, "always rejects");
    }
}
