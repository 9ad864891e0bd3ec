//! Application state and logic.
//!
//! [`App`] owns the [`Spreadsheet`], the cursor and viewport, the prompt being
//! edited and the transient status message. Key dispatch lives in
//! [`super::actions`]; drawing lives in [`super::ui`].

use std::path::{Path, PathBuf};
use tinysheet_core::{CellRef, Spreadsheet};
use tinysheet_engine::engine::{COLS, ROWS, format_number, label_of};
use tracing::{debug, info};

use super::prompt::{LineEditor, PromptKind};

/// Width of one grid column on screen.
pub const CELL_WIDTH: usize = 10;
/// Width of the row label gutter.
pub const ROW_LABEL_WIDTH: usize = 4;
/// Header row plus status row.
const CHROME_HEIGHT: usize = 2;

/// What the keyboard is currently driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Navigate the grid, single-key commands.
    Normal,
    /// Typing into the status-row prompt.
    Prompt(PromptKind),
    /// Help overlay is open; any key closes it.
    Help,
}

pub struct App {
    pub sheet: Spreadsheet,
    pub cursor_row: usize,
    pub cursor_col: usize,
    /// First visible row
    pub viewport_row: usize,
    /// First visible column
    pub viewport_col: usize,
    pub visible_rows: usize,
    pub visible_cols: usize,
    pub mode: Mode,
    pub prompt: LineEditor,
    /// Path used when a save/load prompt is committed empty.
    prompt_default: String,
    /// Shown on the next frame only.
    pub status_message: Option<String>,
    /// Offered by save/load prompts before any file was used.
    pub default_file: PathBuf,
}

impl Default for App {
    fn default() -> Self {
        App::new(PathBuf::from("sheet.txt"))
    }
}

impl App {
    pub fn new(default_file: PathBuf) -> Self {
        App {
            sheet: Spreadsheet::new(),
            cursor_row: 0,
            cursor_col: 0,
            viewport_row: 0,
            viewport_col: 0,
            visible_rows: 1,
            visible_cols: 1,
            mode: Mode::Normal,
            prompt: LineEditor::default(),
            prompt_default: String::new(),
            status_message: None,
            default_file,
        }
    }

    pub fn current_cell_ref(&self) -> CellRef {
        CellRef::new(self.cursor_row, self.cursor_col)
    }

    /// Fit the grid to a terminal of `width` x `height` characters.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.visible_rows = (height as usize).saturating_sub(CHROME_HEIGHT).max(1);
        self.visible_cols = ((width as usize).saturating_sub(ROW_LABEL_WIDTH) / CELL_WIDTH).max(1);
        self.update_viewport();
    }

    /// Start a new frame: every cell is re-evaluated on demand.
    pub fn begin_pass(&mut self) {
        self.sheet.begin_pass();
    }

    /// Drop the transient status once it has been drawn.
    pub fn end_frame(&mut self) {
        self.status_message = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Move cursor by delta, clamped to the grid
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor_col = (self.cursor_col as i64 + dx as i64).clamp(0, COLS as i64 - 1) as usize;
        self.cursor_row = (self.cursor_row as i64 + dy as i64).clamp(0, ROWS as i64 - 1) as usize;
        self.update_viewport();
    }

    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(ROWS - 1);
        self.cursor_col = col.min(COLS - 1);
        self.update_viewport();
    }

    /// Update viewport to keep cursor visible
    pub fn update_viewport(&mut self) {
        if self.cursor_col < self.viewport_col {
            self.viewport_col = self.cursor_col;
        } else if self.cursor_col >= self.viewport_col + self.visible_cols {
            self.viewport_col = self.cursor_col + 1 - self.visible_cols;
        }

        if self.cursor_row < self.viewport_row {
            self.viewport_row = self.cursor_row;
        } else if self.cursor_row >= self.viewport_row + self.visible_rows {
            self.viewport_row = self.cursor_row + 1 - self.visible_rows;
        }
    }

    /// Rows currently on screen.
    pub fn visible_row_range(&self) -> std::ops::Range<usize> {
        self.viewport_row..(self.viewport_row + self.visible_rows).min(ROWS)
    }

    /// Columns currently on screen.
    pub fn visible_col_range(&self) -> std::ops::Range<usize> {
        self.viewport_col..(self.viewport_col + self.visible_cols).min(COLS)
    }

    /// Summary of the current cell, followed by the transient status.
    pub fn status_line(&mut self) -> String {
        let at = self.current_cell_ref();
        let raw: String = self
            .sheet
            .text(at)
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let outcome = match self.sheet.result(at) {
            Ok(v) => format!("val={}", format_number(v)),
            Err(kind) => format!("err={kind}"),
        };
        let mut line = format!("{} [{}] {}", label_of(at.row, at.col), raw, outcome);
        if self.sheet.modified {
            line.push_str(" [+]");
        }
        if let Some(status) = &self.status_message {
            line.push_str("  ");
            line.push_str(status);
        }
        line
    }

    /// Open the status-row prompt with `initial` already typed.
    pub fn open_prompt(&mut self, kind: PromptKind, initial: &str) {
        self.prompt = LineEditor::with_text(initial);
        self.prompt_default = initial.to_string();
        self.mode = Mode::Prompt(kind);
    }

    /// Path offered by the save and load prompts.
    pub fn suggested_path(&self) -> String {
        self.sheet
            .file_path
            .as_deref()
            .unwrap_or(&self.default_file)
            .display()
            .to_string()
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = LineEditor::default();
        self.mode = Mode::Normal;
    }

    /// Act on the prompt's text and return to normal mode.
    pub fn commit_prompt(&mut self, kind: PromptKind) {
        let input = self.prompt.text().to_string();
        self.cancel_prompt();
        debug!(?kind, input = %input, "prompt committed");
        match kind {
            PromptKind::Edit => {
                let at = self.current_cell_ref();
                self.sheet.set_text(at, &input);
            }
            PromptKind::Goto => self.goto(&input),
            PromptKind::Save | PromptKind::Load => {
                let path = if input.trim().is_empty() {
                    self.prompt_default.clone()
                } else {
                    input
                };
                if path.trim().is_empty() {
                    self.set_status("No file name");
                } else if kind == PromptKind::Save {
                    self.save_to(Path::new(path.trim()));
                } else {
                    self.load_from(Path::new(path.trim()));
                }
            }
        }
    }

    fn goto(&mut self, label: &str) {
        match CellRef::from_str(label.trim()) {
            Some(at) if at.in_bounds() => self.move_to(at.row, at.col),
            _ => self.set_status(format!("Bad cell: {}", label.trim())),
        }
    }

    pub fn save_to(&mut self, path: &Path) {
        match self.sheet.save_as(path) {
            Ok(count) => self.set_status(format!("Saved {} cells to {}", count, path.display())),
            Err(e) => self.set_status(format!("Save failed: {e}")),
        }
    }

    pub fn load_from(&mut self, path: &Path) {
        match self.sheet.load_file(path) {
            Ok(count) => {
                info!(path = %path.display(), count, "sheet loaded from prompt");
                self.set_status(format!("Loaded {} cells from {}", count, path.display()));
            }
            Err(e) => self.set_status(format!("Load failed: {e}")),
        }
    }

    pub fn clear_current_cell(&mut self) {
        let at = self.current_cell_ref();
        self.sheet.clear_cell(at);
    }
}
