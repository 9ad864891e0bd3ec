use super::Spreadsheet;
use tinysheet_engine::engine::{self, CellRef, ErrorKind};

impl Spreadsheet {
    /// Begin a new recompute pass. Cells are then evaluated lazily, the first
    /// time something asks for them.
    pub fn begin_pass(&mut self) {
        engine::reset_eval(&mut self.grid);
    }

    /// Reset and evaluate every cell.
    pub fn recompute(&mut self) {
        engine::recompute(&mut self.grid);
    }

    /// Value or error of a cell in the current pass.
    pub fn result(&mut self, at: CellRef) -> Result<f64, ErrorKind> {
        engine::cell_result(&mut self.grid, at)
    }

    /// Display string of a cell in the current pass.
    pub fn display(&mut self, at: CellRef) -> String {
        engine::eval_cell(&mut self.grid, at);
        engine::display_cell(self.grid.get(at))
    }
}
