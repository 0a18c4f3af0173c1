//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fiscaltypes",
    about = "Inspect fiscal field types and derive schema models",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every registered type path
    Types,
    /// Complete a partial type path
    Complete {
        /// Partial path, e.g. `economic-classification:`
        prefix: String,
    },
    /// Derive schema and model from a field list
    Model {
        /// Path to a JSON field list; reads stdin when omitted
        file: Option<PathBuf>,
    },
}
