//! Fixed-size grid of cells.

use super::cell::Cell;
use super::cell_ref::CellRef;

/// Number of rows (1..=100).
pub const ROWS: usize = 100;
/// Number of columns (A..=Z).
pub const COLS: usize = 26;

/// A dense `ROWS x COLS` array of cells addressed by [`CellRef`].
///
/// Cells exist at every coordinate for the lifetime of the grid; deleting a
/// cell means emptying its text.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: vec![Cell::default(); ROWS * COLS],
        }
    }

    fn index(at: CellRef) -> usize {
        assert!(at.in_bounds(), "cell {:?} outside grid", at);
        at.row * COLS + at.col
    }

    pub fn get(&self, at: CellRef) -> &Cell {
        &self.cells[Self::index(at)]
    }

    pub fn get_mut(&mut self, at: CellRef) -> &mut Cell {
        &mut self.cells[Self::index(at)]
    }

    pub fn text(&self, at: CellRef) -> &str {
        self.get(at).text()
    }

    pub fn set_text(&mut self, at: CellRef, text: &str) {
        self.get_mut(at).set_text(text);
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellRef::new(i / COLS, i % COLS), cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Non-empty cells in row-major order.
    pub fn non_empty(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.iter().filter(|(_, cell)| !cell.is_empty())
    }

    /// True when two grids hold the same texts, ignoring eval state.
    pub fn same_text(&self, other: &Grid) -> bool {
        self.cells
            .iter()
            .zip(&other.cells)
            .all(|(a, b)| a.text() == b.text())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
