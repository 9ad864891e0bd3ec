//! Spreadsheet engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`], [`EvalRecord`], [`Grid`] - Fixed-size cell storage
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`parse_expression`] - Recursive-descent formula parser
//! - [`eval_cell`], [`recompute`] - Memoised, cycle-detecting evaluation
//! - [`format_number`], [`display_cell`] - Format values for display

mod cell;
mod cell_ref;
mod error;
mod eval;
mod format;
mod grid;
mod parser;

pub use cell::{CELL_TEXT_CAPACITY, Cell, EvalRecord};
pub use cell_ref::{CellRef, label_of, parse_label};
pub use error::ErrorKind;
pub use eval::{GridResolver, cell_result, eval_cell, recompute, reset_eval};
pub use format::{display_cell, fit_to_width, format_number};
pub use grid::{COLS, Grid, ROWS};
pub use parser::{Resolve, parse_expression, parse_literal};
