//! Convlab CLI
//!
//! Commands:
//! - unit: convert a value between two units of a category
//! - logic: convert text within a logic family (numeric, roman, morse, braille)
//! - units: list the unit ids of a category
//! - search: search the converter catalog
//! - batch: read JSON requests from stdin, one per line

#![forbid(unsafe_code)]

mod batch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use convlab::{Convlab, LogicFamily, Outcome, UnitCategory};
use serde_json::json;
use std::io;
use tracing_subscriber::EnvFilter;

/// Convlab - convert units, number systems, Roman numerals, Morse and Braille
#[derive(Parser, Debug)]
#[command(name = "convlab", version)]
#[command(about = "Offline converter for units and encodings", long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between two units
    Unit {
        /// Category id, e.g. length or temperature
        category: UnitCategory,
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Convert text within a logic family
    Logic {
        /// Family id: numeric, roman, morse or braille
        family: LogicFamily,
        from: String,
        to: String,
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// List the units of a category
    Units {
        category: UnitCategory,
    },
    /// Search converters by title or description
    Search {
        query: String,
    },
    /// Answer JSON requests read line by line from stdin
    Batch,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(io::stderr)
        .init();
}

fn print_outcome(outcome: &Outcome, as_json: bool) {
    if as_json {
        println!("{}", json!({ "result": outcome.to_string(), "tag": outcome.tag() }));
    } else {
        println!("{}", outcome);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let lab = Convlab::new();

    match args.command {
        Command::Unit { category, from, to, input } => {
            print_outcome(&lab.convert_unit(category, &from, &to, &input), args.json);
        }
        Command::Logic { family, from, to, input } => {
            print_outcome(&lab.convert_logic(family, &from, &to, &input), args.json);
        }
        Command::Units { category } => {
            let options = lab.unit_options(category);
            if args.json {
                println!("{}", serde_json::to_string(&options)?);
            } else {
                for option in options {
                    println!("{:<24} {}", option.id, option.name);
                }
            }
        }
        Command::Search { query } => {
            let hits = lab.search(&query);
            if args.json {
                println!("{}", serde_json::to_string(&hits)?);
            } else {
                for entry in hits {
                    println!("{:<18} [{}] {}", entry.title, entry.category, entry.description);
                }
            }
        }
        Command::Batch => {
            let stdin = io::stdin();
            batch::run_batch(&lab, stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_command() {
        let args = Args::try_parse_from(["convlab", "unit", "length", "mile", "kilometer", "3"]).unwrap();
        match args.command {
            Command::Unit { category, from, .. } => {
                assert_eq!(category, UnitCategory::Length);
                assert_eq!(from, "mile");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_input() {
        let args = Args::try_parse_from(["convlab", "unit", "temperature", "celsius", "kelvin", "-40"]).unwrap();
        match args.command {
            Command::Unit { input, .. } => assert_eq!(input, "-40"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let args = Args::try_parse_from(["convlab", "logic", "morse", "text", "morse", "sos", "--json", "-v"]).unwrap();
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_unknown_family_rejected() {
        assert!(Args::try_parse_from(["convlab", "logic", "klingon", "a", "b", "c"]).is_err());
    }
}
