//! Command-line argument definitions for the taguml CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the diagram mode, input/output
//! paths, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the taguml diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Diagram to generate
    ///
    /// An unrecognized mode is rejected with a usage error rather than
    /// silently falling back to the default.
    #[arg(value_enum, default_value = "func")]
    pub mode: Mode,

    /// Path to the ctags tag file
    #[arg(short, long, default_value = "tags.txt")]
    pub input: String,

    /// Output path; defaults to functions.puml or classes.puml by mode
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// The two diagram modes.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Function call diagram
    Func,

    /// Class/package structure diagram
    Class,
}

impl Mode {
    /// Output filename used when `--output` is not given.
    pub fn default_output(self) -> &'static str {
        match self {
            Mode::Func => "functions.puml",
            Mode::Class => "classes.puml",
        }
    }
}
