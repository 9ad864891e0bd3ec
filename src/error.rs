//! Error types for the tinysheet binary

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the sheet itself.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}
