//! Error types for taguml operations.
//!
//! Tag parsing itself never fails (bad lines degrade to warnings), so
//! the error type only covers the surrounding machinery: reading and
//! writing files, and loading configuration.

use std::io;

use thiserror::Error;

/// The main error type for taguml operations.
#[derive(Debug, Error)]
pub enum TagumlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
