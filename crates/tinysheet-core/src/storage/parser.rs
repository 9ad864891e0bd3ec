//! Reader for the sheet file format.
//!
//! One record per line: `<row> <col> <escaped-text>`, 0-based decimal
//! coordinates. Blank lines and lines starting with `#` are ignored, as are
//! malformed records and records outside the grid.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tinysheet_engine::engine::{CellRef, Grid};
use tracing::debug;

/// Load a sheet file into `grid`, replacing its contents.
///
/// Returns the number of records stored. If the file cannot be opened the
/// grid is left untouched; a read error part-way through leaves the grid
/// cleared plus whatever was stored before the error.
pub fn read_sheet(path: &Path, grid: &mut Grid) -> Result<usize> {
    let file = File::open(path)?;
    grid.clear();

    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    let mut stored = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if store_record(&line, grid) {
            stored += 1;
        }
    }
    Ok(stored)
}

/// Parse sheet content from a string into `grid`, replacing its contents.
pub fn parse_sheet_content(content: &str, grid: &mut Grid) -> usize {
    grid.clear();
    content
        .split_inclusive('\n')
        .filter(|line| store_record(line.as_bytes(), grid))
        .count()
}

fn store_record(line: &[u8], grid: &mut Grid) -> bool {
    let Some((row, col, text)) = parse_record(line) else {
        return false;
    };
    let at = CellRef::new(row, col);
    if !at.in_bounds() {
        debug!(row, col, "skipping record outside the grid");
        return false;
    }
    grid.set_text(at, &text);
    true
}

/// Split one line into `(row, col, text)`. Returns `None` for blank lines,
/// comments and malformed records.
fn parse_record(line: &[u8]) -> Option<(usize, usize, String)> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let mut pos = skip_while(line, 0, |b| b.is_ascii_whitespace());
    if pos == line.len() || line[pos] == b'#' {
        return None;
    }

    let (row, next) = read_decimal(line, pos)?;
    pos = skip_while(line, next, |b| b.is_ascii_whitespace());
    let (col, next) = read_decimal(line, pos)?;
    pos = skip_while(line, next, |b| b == b' ' || b == b'\t');

    let text = unescape_text(&line[pos..]);
    Some((row, col, String::from_utf8_lossy(&text).into_owned()))
}

fn skip_while(line: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < line.len() && pred(line[pos]) {
        pos += 1;
    }
    pos
}

fn read_decimal(line: &[u8], pos: usize) -> Option<(usize, usize)> {
    let end = skip_while(line, pos, |b| b.is_ascii_digit());
    if end == pos {
        return None;
    }
    let digits = std::str::from_utf8(&line[pos..end]).ok()?;
    // Values too large for usize are out of range anyway.
    let value = digits.parse::<usize>().ok()?;
    Some((value, end))
}

/// Undo the writer's escapes: `\n`, `\t` and `\\`. Any other backslash is
/// kept, and the byte after it is examined normally.
pub(crate) fn unescape_text(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'\\' {
            let replacement = match input.get(i + 1) {
                Some(b'n') => Some(b'\n'),
                Some(b't') => Some(b'\t'),
                Some(b'\\') => Some(b'\\'),
                _ => None,
            };
            if let Some(byte) = replacement {
                out.push(byte);
                i += 2;
                continue;
            }
        }
        out.push(input[i]);
        i += 1;
    }
    out
}
