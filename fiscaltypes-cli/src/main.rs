//! fiscaltypes command-line interface.
//!
//! Commands:
//! - `fiscaltypes types`: print every registered type path
//! - `fiscaltypes complete <prefix>`: print completion candidates
//! - `fiscaltypes model [file]`: read a JSON field list (file or stdin) and
//!   print the derived schema/model JSON
//!
//! Exit codes: 0 on success, 1 on any error. Structural validation errors
//! are printed one per line on stderr.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fiscaltypes::TypeProcessor;

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("fiscaltypes=debug,fiscaltypes_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let processor = match TypeProcessor::with_defaults() {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match cli.command {
        Commands::Types => {
            for path in processor.all_types() {
                println!("{path}");
            }
            0
        }
        Commands::Complete { prefix } => {
            for candidate in processor.autocomplete(&prefix) {
                println!("{candidate}");
            }
            0
        }
        Commands::Model { file } => run_model(&processor, file.as_deref()),
    }
}

fn run_model(processor: &TypeProcessor, file: Option<&Path>) -> i32 {
    let input = match read_input(file) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    tracing::debug!(bytes = input.len(), "field list read");

    let value: serde_json::Value = match serde_json::from_str(&input) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: invalid JSON input: {e}");
            return 1;
        }
    };

    match processor.fields_to_model(&value) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(rendered) => {
                println!("{rendered}");
                0
            }
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{error}");
            }
            1
        }
    }
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            if io::stdin().is_terminal() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "no input file given and stdin is a terminal",
                ));
            }
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
