//! Cell-scoped evaluation errors.

use thiserror::Error;

/// Why a cell failed to evaluate.
///
/// Errors live on the cell that produced them and are recomputed every pass;
/// they are never persisted.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Syntax error, trailing residue, empty expression or unbalanced `(`.
    #[error("PARSE")]
    Parse,
    /// Reference outside `A1..Z100`.
    #[error("BADREF")]
    BadRef,
    /// Divisor evaluated to exactly 0.0.
    #[error("DIV/0")]
    DivZero,
    /// The formula transitively references itself.
    #[error("CYCLE")]
    Cycle,
    /// Reserved for dependency-only propagation. Referencing an errored cell
    /// currently propagates that cell's own error instead.
    #[error("DEPERR")]
    DepErr,
}

impl ErrorKind {
    /// Grid display form, e.g. `#DIV/0`.
    pub fn display(&self) -> String {
        format!("#{}", self)
    }
}
