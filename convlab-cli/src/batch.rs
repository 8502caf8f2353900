//! Line-delimited JSON batch mode
//!
//! Each non-blank input line is one request; each produces exactly one
//! response line. A malformed line gets a `PARSE_ERROR` response and the
//! loop moves on.

use convlab::{ConvertError, Convlab, LogicFamily, Outcome, UnitCategory};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BatchRequest {
    Unit {
        category: UnitCategory,
        from: String,
        to: String,
        input: String,
    },
    Logic {
        family: LogicFamily,
        from: String,
        to: String,
        input: String,
    },
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub result: String,
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ConvertError>,
}

impl BatchResponse {
    fn from_outcome(outcome: Outcome, from: &str, to: &str) -> Self {
        let result = outcome.to_string();
        let tag = outcome.tag();
        let error = match outcome {
            Outcome::Failed(e) => Some(e),
            Outcome::Unsupported => Some(ConvertError::unsupported_pair(from, to)),
            _ => None,
        };
        Self { result, tag, error }
    }

    fn parse_error(details: impl Into<String>) -> Self {
        Self {
            result: String::new(),
            tag: "error",
            error: Some(ConvertError::parse_error(details)),
        }
    }
}

/// Answer one request line. Blank lines yield `None`.
pub fn handle_line(lab: &Convlab, line: &str) -> Option<BatchResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: BatchRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "malformed batch request");
            return Some(BatchResponse::parse_error(e.to_string()));
        }
    };

    let response = match request {
        BatchRequest::Unit { category, from, to, input } => {
            BatchResponse::from_outcome(lab.convert_unit(category, &from, &to, &input), &from, &to)
        }
        BatchRequest::Logic { family, from, to, input } => {
            BatchResponse::from_outcome(lab.convert_logic(family, &from, &to, &input), &from, &to)
        }
    };
    Some(response)
}

/// Process every line of `reader`, writing one JSON response per request.
/// Returns the number of responses written.
pub fn run_batch<R: BufRead, W: Write>(lab: &Convlab, reader: R, mut writer: W) -> anyhow::Result<usize> {
    let mut answered = 0;
    for line in reader.lines() {
        let line = line?;
        if let Some(response) = handle_line(lab, &line) {
            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            answered += 1;
        }
    }
    debug!(answered, "batch finished");
    Ok(answered)
}
