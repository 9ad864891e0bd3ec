//! Error types for tinysheet core.

use thiserror::Error;

/// Errors that can occur while saving or loading a sheet.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
