//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between spreadsheet-style cell references
//! ("A1" through "Z100") and zero-indexed row/column coordinates.
//!
//! # Examples
//!
//! ```
//! use tinysheet_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1);  // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::grid::{COLS, ROWS};

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<letter>[A-Za-z])(?<numbers>[0-9]+)$").expect("label regex is valid")
});

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g., "A1", "z100").
    /// Returns None if the input is malformed or outside the grid.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        let caps = LABEL_RE.captures(name)?;
        let col = letter_to_col(caps["letter"].as_bytes()[0])?;
        let row = row_from_digits(&caps["numbers"])?;
        Some(CellRef::new(row, col))
    }

    /// True when both coordinates fall inside the fixed grid.
    pub fn in_bounds(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Column index to its letter (0 -> A, 25 -> Z).
    pub fn col_to_letter(col: usize) -> char {
        debug_assert!(col < COLS);
        (b'A' + col as u8) as char
    }
}

/// Map an ASCII letter (either case) to a column index.
pub(crate) fn letter_to_col(letter: u8) -> Option<usize> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let col = (letter.to_ascii_uppercase() - b'A') as usize;
    (col < COLS).then_some(col)
}

/// Parse a 1-based decimal row label into a 0-based row index.
pub(crate) fn row_from_digits(digits: &str) -> Option<usize> {
    let row = digits.parse::<usize>().ok()?.checked_sub(1)?;
    (row < ROWS).then_some(row)
}

/// Label for a coordinate pair, e.g. `label_of(0, 0) == "A1"`.
pub fn label_of(row: usize, col: usize) -> String {
    CellRef::new(row, col).to_string()
}

/// Parse a label into `(row, col)`.
pub fn parse_label(label: &str) -> Option<(usize, usize)> {
    CellRef::from_str(label).map(|r| (r.row, r.col))
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellRef::from_str(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letter(self.col), self.row + 1)
    }
}
