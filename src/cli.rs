use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Unit Converter - convert a value between units of the same category
#[derive(Debug, Parser)]
#[command(name = "unit_converter_cli")]
#[command(about = "Convert values between length, mass, temperature and other units")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (created with defaults if missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log level filter, overrides the configured one (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Without a subcommand an interactive menu session is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// List the unit categories
    Categories,
    /// List the units of a category
    Units {
        /// Category name (case-insensitive)
        category: String,
    },
    /// Convert a single value
    Convert {
        /// Category name, e.g. "Length"
        category: String,
        /// Unit to convert from, e.g. "Mile"
        from: String,
        /// Unit to convert to, e.g. "Kilometre"
        to: String,
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}
