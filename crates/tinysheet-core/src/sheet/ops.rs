use super::Spreadsheet;
use tinysheet_engine::engine::CellRef;

impl Spreadsheet {
    /// Raw text of a cell.
    pub fn text(&self, at: CellRef) -> &str {
        self.grid.text(at)
    }

    /// Replace a cell's text (truncated to capacity).
    pub fn set_text(&mut self, at: CellRef, text: &str) {
        if self.grid.text(at) != text {
            self.grid.set_text(at, text);
            self.modified = true;
        }
    }

    /// Empty a cell.
    pub fn clear_cell(&mut self, at: CellRef) {
        self.set_text(at, "");
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.grid.non_empty().count()
    }
}
