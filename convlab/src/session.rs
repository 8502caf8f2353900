//! Converter sessions
//!
//! A session holds what a single converter card shows: the raw input, the
//! selected endpoints and the last outcome. Every setter recomputes the
//! outcome before returning, so a session is never observed mid-conversion.

use crate::family::{EndpointOption, LogicFamily};
use convlab_core::Outcome;
use convlab_plugin::ConverterRegistry;
use convlab_units::{accepts_keystroke, convert_and_format, UnitCategory, UnitOption, UNITS};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Text a unit session shows when conversion itself fails
pub const UNIT_ERROR_TEXT: &str = "Error";

/// Observable state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Settled,
    Invalid,
    Failed,
}

impl From<&Outcome> for SessionState {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Empty => SessionState::Idle,
            Outcome::Converted(_) => SessionState::Settled,
            Outcome::Invalid(_) => SessionState::Invalid,
            Outcome::Unsupported | Outcome::Failed(_) => SessionState::Failed,
        }
    }
}

/// Next id after `current` in `ids`, wrapping around. An id not in the list
/// yields the first one.
fn next_cyclic<'a>(ids: &[&'a str], current: &str) -> Option<&'a str> {
    if ids.is_empty() {
        return None;
    }
    let next = ids.iter().position(|id| *id == current).map_or(0, |i| i + 1);
    Some(ids[next % ids.len()])
}

// ============ Unit session ============

pub struct UnitSession {
    category: UnitCategory,
    options: Vec<UnitOption>,
    input: String,
    from: String,
    to: String,
    outcome: Outcome,
}

impl UnitSession {
    /// Start with the first unit converting to the second
    pub fn new(category: UnitCategory) -> Self {
        let options = UNITS.options(category);
        let mut session = Self {
            category,
            options,
            input: String::new(),
            from: String::new(),
            to: String::new(),
            outcome: Outcome::Empty,
        };
        session.reset();
        session
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn options(&self) -> &[UnitOption] {
        &self.options
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn state(&self) -> SessionState {
        SessionState::from(&self.outcome)
    }

    /// Text to display for the current outcome
    pub fn result(&self) -> String {
        match &self.outcome {
            Outcome::Failed(_) => UNIT_ERROR_TEXT.to_string(),
            other => other.to_string(),
        }
    }

    /// Replace the input if it passes the keystroke filter. Returns whether
    /// the input was accepted.
    pub fn set_input(&mut self, input: &str) -> bool {
        if !accepts_keystroke(input) {
            return false;
        }
        self.input = input.to_string();
        self.recompute();
        true
    }

    /// Select the source unit, moving the destination along if they collide
    pub fn set_from(&mut self, id: &str) {
        self.from = id.to_string();
        if self.from == self.to {
            if let Some(next) = next_cyclic(&self.ids(), id) {
                self.to = next.to_string();
            }
        }
        self.recompute();
    }

    /// Select the destination unit, moving the source along if they collide
    pub fn set_to(&mut self, id: &str) {
        self.to = id.to_string();
        if self.to == self.from {
            if let Some(next) = next_cyclic(&self.ids(), id) {
                self.from = next.to_string();
            }
        }
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.from = self.options.first().map(|o| o.id).unwrap_or_default().to_string();
        self.to = self.options.get(1).map(|o| o.id).unwrap_or_default().to_string();
        self.outcome = Outcome::Empty;
    }

    fn ids(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.id).collect()
    }

    fn recompute(&mut self) {
        self.outcome = if self.input.is_empty() {
            Outcome::Empty
        } else {
            match convert_and_format(self.category, &self.input, &self.from, &self.to) {
                Ok(Some(text)) => Outcome::Converted(text),
                Ok(None) => Outcome::Empty,
                Err(e) => Outcome::Failed(e.into()),
            }
        };
    }
}

impl fmt::Debug for UnitSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitSession")
            .field("category", &self.category)
            .field("input", &self.input)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("outcome", &self.outcome)
            .finish()
    }
}

// ============ Logic session ============

/// Predicate run on the raw input before any converter is looked up
pub type InputValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

pub struct LogicSession {
    family: LogicFamily,
    registry: Arc<ConverterRegistry>,
    validator: Option<InputValidator>,
    input: String,
    from: String,
    to: String,
    outcome: Outcome,
}

impl LogicSession {
    /// Start with the first input and first output endpoint selected
    pub fn new(family: LogicFamily, registry: Arc<ConverterRegistry>) -> Self {
        let mut session = Self {
            family,
            registry,
            validator: None,
            input: String::new(),
            from: String::new(),
            to: String::new(),
            outcome: Outcome::Empty,
        };
        session.reset();
        session
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self.recompute();
        self
    }

    pub fn family(&self) -> LogicFamily {
        self.family
    }

    pub fn input_options(&self) -> &'static [EndpointOption] {
        self.family.input_options()
    }

    pub fn output_options(&self) -> &'static [EndpointOption] {
        self.family.output_options()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn state(&self) -> SessionState {
        SessionState::from(&self.outcome)
    }

    pub fn result(&self) -> String {
        self.outcome.to_string()
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
        self.recompute();
    }

    /// Select the source endpoint. A collision with the destination moves
    /// the destination to the output option after `id`.
    pub fn set_from(&mut self, id: &str) {
        self.from = id.to_string();
        if self.from == self.to {
            let outputs: Vec<&str> = self.output_options().iter().map(|o| o.id).collect();
            if let Some(next) = next_cyclic(&outputs, id) {
                self.to = next.to_string();
            }
        }
        self.recompute();
    }

    /// Select the destination endpoint. A collision with the source moves
    /// the source to the input option after `id`.
    pub fn set_to(&mut self, id: &str) {
        self.to = id.to_string();
        if self.to == self.from {
            let inputs: Vec<&str> = self.input_options().iter().map(|o| o.id).collect();
            if let Some(next) = next_cyclic(&inputs, id) {
                self.from = next.to_string();
            }
        }
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.from = self.input_options().first().map(|o| o.id).unwrap_or_default().to_string();
        self.to = self.output_options().first().map(|o| o.id).unwrap_or_default().to_string();
        self.outcome = Outcome::Empty;
    }

    fn recompute(&mut self) {
        if self.input.is_empty() || self.from.is_empty() || self.to.is_empty() {
            self.outcome = Outcome::Empty;
            return;
        }

        if let Some(validator) = &self.validator {
            if !validator(&self.input) {
                self.outcome = Outcome::Invalid(format!("Invalid {} input", self.from));
                return;
            }
        }

        self.outcome = self.registry.convert(&self.from, &self.to, &self.input);
    }
}

impl fmt::Debug for LogicSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogicSession")
            .field("family", &self.family)
            .field("input", &self.input)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("outcome", &self.outcome)
            .finish()
    }
}
