use std::path::PathBuf;
use tinysheet_engine::engine::Grid;

/// UI-agnostic document state for the spreadsheet.
///
/// The sheet is a single owned value; the controller threads it through
/// every command instead of reaching for global state.
pub struct Spreadsheet {
    /// The fixed 100 x 26 grid
    pub grid: Grid,
    /// Last file saved to or loaded from
    pub file_path: Option<PathBuf>,
    /// Whether the grid changed since the last save or load
    pub modified: bool,
}

impl Spreadsheet {
    /// Create an empty sheet.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Spreadsheet {
            grid: Grid::new(),
            file_path: None,
            modified: false,
        }
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}
