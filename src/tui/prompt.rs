//! Single-line editor shown on the status row.

use super::input::Key;

/// What the prompt is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// New text for the current cell.
    Edit,
    /// A cell label to jump to.
    Goto,
    /// A path to save to.
    Save,
    /// A path to load from.
    Load,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Edit => "Edit",
            PromptKind::Goto => "Goto",
            PromptKind::Save => "Save as",
            PromptKind::Load => "Load",
        }
    }
}

/// Outcome of feeding one key to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptEvent {
    Pending,
    Commit,
    Cancel,
}

/// Printable-ASCII line buffer: insert at the end, backspace, commit, cancel.
#[derive(Clone, Debug, Default)]
pub struct LineEditor {
    buffer: String,
}

impl LineEditor {
    pub fn with_text(text: &str) -> Self {
        LineEditor {
            buffer: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: Key) -> PromptEvent {
        match key {
            Key::Enter => PromptEvent::Commit,
            Key::Esc | Key::CtrlG | Key::CtrlC => PromptEvent::Cancel,
            Key::Backspace => {
                // Edit text preloaded from a cell may hold non-ASCII characters.
                self.buffer.pop();
                PromptEvent::Pending
            }
            Key::Char(b) if (b' '..=b'~').contains(&b) => {
                self.buffer.push(b as char);
                PromptEvent::Pending
            }
            _ => PromptEvent::Pending,
        }
    }
}
