//! Writer for the sheet file format

use crate::error::Result;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tinysheet_engine::engine::Grid;

/// Write a grid to a sheet file. Returns the number of records written.
///
/// The content goes to a temporary file next to `path` which is then renamed
/// over it, so a failed save leaves any existing file intact.
pub fn write_sheet(path: &Path, grid: &Grid) -> Result<usize> {
    let content = write_sheet_content(grid);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(grid.non_empty().count())
}

/// Write a grid to a sheet format string
pub fn write_sheet_content(grid: &Grid) -> String {
    let mut out = String::new();
    for (at, cell) in grid.non_empty() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} {} {}", at.row, at.col, escape_text(cell.text()));
    }
    out
}

pub(crate) fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
