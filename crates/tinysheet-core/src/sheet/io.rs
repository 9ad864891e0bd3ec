use super::Spreadsheet;
use crate::error::Result;
use crate::storage::{read_sheet, write_sheet};
use std::path::Path;
use tracing::{info, warn};

impl Spreadsheet {
    /// Save to `path` and remember it as the current file.
    /// Returns the number of cells written.
    pub fn save_as(&mut self, path: &Path) -> Result<usize> {
        let count = write_sheet(path, &self.grid).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "save failed");
        })?;
        info!(path = %path.display(), count, "saved sheet");
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(count)
    }

    /// Load from `path`, replacing the whole sheet.
    /// Returns the number of cells stored.
    ///
    /// If the file cannot be opened the sheet is untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        match read_sheet(path, &mut self.grid) {
            Ok(count) => {
                info!(path = %path.display(), count, "loaded sheet");
                self.file_path = Some(path.to_path_buf());
                self.modified = false;
                Ok(count)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                Err(e)
            }
        }
    }
}
