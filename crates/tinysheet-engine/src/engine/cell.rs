//! Cell data structures for the spreadsheet grid.
//!
//! - [`Cell`] - Raw text plus the transient evaluation record
//! - [`EvalRecord`] - Per-pass memo used by the evaluator

use super::error::ErrorKind;

/// Storage capacity of a cell's text, counting a terminator byte.
/// Text is therefore limited to `CELL_TEXT_CAPACITY - 1` bytes.
pub const CELL_TEXT_CAPACITY: usize = 128;

/// Result of evaluating a cell during the current recompute pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalRecord {
    pub value: f64,
    pub error: Option<ErrorKind>,
    pub evaluated: bool,
    pub evaluating: bool,
}

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    text: String,
    pub eval: EvalRecord,
}

impl Cell {
    pub fn new(text: &str) -> Cell {
        let mut cell = Cell::default();
        cell.set_text(text);
        cell
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, truncating to capacity on a character boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(truncate_to_capacity(text));
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.eval = EvalRecord::default();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Formula body without the leading `=`, if this cell is a formula.
    pub fn formula(&self) -> Option<&str> {
        self.text.strip_prefix('=')
    }

    /// Evaluated outcome as a result; meaningful once `eval.evaluated` is set.
    pub fn result(&self) -> Result<f64, ErrorKind> {
        match self.eval.error {
            Some(err) => Err(err),
            None => Ok(self.eval.value),
        }
    }
}

fn truncate_to_capacity(text: &str) -> &str {
    let max = CELL_TEXT_CAPACITY - 1;
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
