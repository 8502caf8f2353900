//! Converter Registry
//!
//! A registry maps composite keys to converters. It is built once, read-only
//! afterwards, and doubles as the dispatcher: given a `(from, to)` pair it
//! resolves the converter and turns whatever happens into an `Outcome`.

use crate::{ConverterPlugin, ConverterMeta, FnConverter, candidate_keys};
use convlab_core::{ConvertError, Outcome};
use serde::Serialize;
use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Help entry for one registered converter
#[derive(Debug, Clone, Serialize)]
pub struct ConverterHelp {
    pub key: String,
    pub description: String,
    pub examples: Vec<String>,
    pub category: String,
}

/// Composite-key table of converters
#[derive(Clone)]
pub struct ConverterRegistry {
    name: String,
    converters: HashMap<String, Arc<dyn ConverterPlugin>>,
}

impl ConverterRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            converters: HashMap::new(),
        }
    }

    /// Register a plugin under the canonical key built from its metadata
    pub fn with_converter<C: ConverterPlugin + 'static>(mut self, c: C) -> Self {
        let meta = c.meta();
        let key = crate::composite_key(meta.from, meta.to);
        self.converters.insert(key, Arc::new(c));
        self
    }

    /// Register a closure under an explicit key
    pub fn with_fn<F>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> Result<String, ConvertError> + Send + Sync + 'static,
    {
        self.converters.insert(key.into(), Arc::new(FnConverter::new(f)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&dyn ConverterPlugin> {
        self.converters.get(key).map(|c| c.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.converters.contains_key(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.converters.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    /// Find the converter for a pair, returning the key that matched
    pub fn resolve(&self, from: &str, to: &str) -> Option<(String, &dyn ConverterPlugin)> {
        candidate_keys(from, to)
            .into_iter()
            .find_map(|key| {
                let converter = self.converters.get(&key)?;
                Some((key, converter.as_ref()))
            })
    }

    /// Dispatch `input` to the converter registered for `(from, to)`
    pub fn convert(&self, from: &str, to: &str, input: &str) -> Outcome {
        let Some((key, converter)) = self.resolve(from, to) else {
            warn!(
                registry = %self.name,
                from,
                to,
                available = ?self.keys(),
                "conversion not supported"
            );
            return Outcome::Unsupported;
        };

        debug!(registry = %self.name, key = %key, "resolved converter");

        let result = panic::catch_unwind(AssertUnwindSafe(|| converter.call(input)))
            .unwrap_or_else(|payload| {
                Err(ConvertError::internal(format!(
                    "converter '{}' panicked: {}",
                    key,
                    panic_message(payload.as_ref())
                )))
            });

        let outcome = Outcome::from_result(result);
        if let Outcome::Failed(e) = &outcome {
            error!(registry = %self.name, from, to, error = %e, "conversion error");
        }
        outcome
    }

    pub fn help(&self, key: &str) -> Option<ConverterHelp> {
        let converter = self.converters.get(key)?;
        let meta = converter.meta();
        Some(ConverterHelp {
            key: key.to_string(),
            description: meta.description.to_string(),
            examples: meta.examples.iter().map(|e| e.to_string()).collect(),
            category: meta.category.to_string(),
        })
    }

    /// Metadata of every registered converter, sorted by key
    pub fn list(&self) -> Vec<(String, ConverterMeta)> {
        self.keys()
            .into_iter()
            .filter_map(|k| self.converters.get(k).map(|c| (k.to_string(), c.meta())))
            .collect()
    }

    /// Keys similar to the given one, closest first (for error suggestions).
    ///
    /// Keys are compared case-insensitively by edit distance. A key within a
    /// third of the query's length is kept, as is any key sharing the query's
    /// source or target endpoint.
    pub fn find_similar(&self, key: &str) -> Vec<String> {
        let query = key.to_lowercase();
        let budget = (query.chars().count() / 3).max(2);
        let (query_from, query_to) = split_endpoints(&query);

        let mut matches: Vec<(String, usize)> = self.converters.keys()
            .filter_map(|candidate| {
                let lower = candidate.to_lowercase();
                let distance = edit_distance(&query, &lower);
                let (from, to) = split_endpoints(&lower);
                let shares_endpoint = (!query_from.is_empty() && query_from == from)
                    || (!query_to.is_empty() && query_to == to);
                (distance <= budget || shares_endpoint).then(|| (candidate.clone(), distance))
            })
            .collect();

        matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }
}

/// Split a lowercased `fromtoto` key at its first `to` separator
fn split_endpoints(key: &str) -> (&str, &str) {
    match key.get(1..).and_then(|rest| rest.find("to")) {
        Some(i) => (&key[..i + 1], &key[i + 3..]),
        None => (key, ""),
    }
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ca != *cb);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
        }
    }
    row[b.len()]
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

impl std::fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConverterRegistry")
            .field("name", &self.name)
            .field("keys", &self.keys())
            .finish()
    }
}

/// Free-function form of [`ConverterRegistry::convert`]
pub fn resolve_and_convert(registry: &ConverterRegistry, from: &str, to: &str, input: &str) -> Outcome {
    registry.convert(from, to, input)
}
