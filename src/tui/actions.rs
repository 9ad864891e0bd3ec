use super::app::{App, Mode};
use super::input::Key;
use super::prompt::{PromptEvent, PromptKind};

/// A normal-mode command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(i32, i32),
    FirstColumn,
    LastColumn,
    PageUp,
    PageDown,
    EditCell,
    EditFormula,
    ClearCell,
    Goto,
    Save,
    Load,
    ToggleHelp,
    Quit,
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Normal-mode key bindings.
pub fn action_for_key(key: Key) -> Option<Action> {
    let action = match key {
        Key::Up => Action::Move(0, -1),
        Key::Down => Action::Move(0, 1),
        Key::Left | Key::BackTab => Action::Move(-1, 0),
        Key::Right | Key::Tab => Action::Move(1, 0),
        Key::Home => Action::FirstColumn,
        Key::End => Action::LastColumn,
        Key::PageUp => Action::PageUp,
        Key::PageDown => Action::PageDown,
        Key::Enter | Key::Char(b'e') => Action::EditCell,
        Key::Char(b'=') => Action::EditFormula,
        Key::Delete | Key::Char(b'c') => Action::ClearCell,
        Key::Char(b'g') => Action::Goto,
        Key::Char(b's') => Action::Save,
        Key::Char(b'l') => Action::Load,
        Key::Char(b'?') => Action::ToggleHelp,
        Key::Char(b'q') | Key::CtrlC => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Move(dx, dy) => app.move_cursor(dx, dy),
        Action::FirstColumn => app.move_to(app.cursor_row, 0),
        Action::LastColumn => app.move_to(app.cursor_row, usize::MAX),
        Action::PageUp => app.move_cursor(0, -(app.visible_rows as i32)),
        Action::PageDown => app.move_cursor(0, app.visible_rows as i32),
        Action::EditCell => {
            let text = app.sheet.text(app.current_cell_ref()).to_string();
            app.open_prompt(PromptKind::Edit, &text);
        }
        Action::EditFormula => app.open_prompt(PromptKind::Edit, "="),
        Action::ClearCell => app.clear_current_cell(),
        Action::Goto => app.open_prompt(PromptKind::Goto, ""),
        Action::Save => {
            let path = app.suggested_path();
            app.open_prompt(PromptKind::Save, &path);
        }
        Action::Load => {
            let path = app.suggested_path();
            app.open_prompt(PromptKind::Load, &path);
        }
        Action::ToggleHelp => app.mode = Mode::Help,
        Action::Quit => return ApplyResult::Quit,
    }
    ApplyResult::Continue
}

/// Dispatch one key according to the current mode.
pub fn apply_key(app: &mut App, key: Key) -> ApplyResult {
    match app.mode {
        Mode::Normal => match action_for_key(key) {
            Some(action) => apply_action(app, action),
            None => ApplyResult::Continue,
        },
        Mode::Prompt(kind) => {
            match app.prompt.handle_key(key) {
                PromptEvent::Commit => app.commit_prompt(kind),
                PromptEvent::Cancel => app.cancel_prompt(),
                PromptEvent::Pending => {}
            }
            ApplyResult::Continue
        }
        Mode::Help => {
            if key != Key::Null {
                app.mode = Mode::Normal;
            }
            ApplyResult::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tinysheet_core::CellRef;
    use tinysheet_engine::engine::{COLS, ROWS};

    fn sized() -> App {
        let mut app = App::default();
        app.resize(84, 22);
        app
    }

    fn type_str(app: &mut App, s: &str) {
        for b in s.bytes() {
            apply_key(app, Key::Char(b));
        }
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = sized();
        apply_key(&mut app, Key::Down);
        apply_key(&mut app, Key::Tab);
        apply_key(&mut app, Key::Tab);
        apply_key(&mut app, Key::BackTab);
        assert_eq!((app.cursor_row, app.cursor_col), (1, 1));

        apply_key(&mut app, Key::End);
        assert_eq!(app.cursor_col, COLS - 1);
        apply_key(&mut app, Key::Home);
        assert_eq!(app.cursor_col, 0);

        apply_key(&mut app, Key::PageDown);
        assert_eq!(app.cursor_row, 21);
        apply_key(&mut app, Key::PageUp);
        apply_key(&mut app, Key::PageUp);
        assert_eq!(app.cursor_row, 0);
    }

    #[test]
    fn test_edit_formula_with_equals_key() {
        let mut app = sized();
        apply_key(&mut app, Key::Char(b'='));
        assert_eq!(app.mode, Mode::Prompt(PromptKind::Edit));
        type_str(&mut app, "1+2");
        apply_key(&mut app, Key::Enter);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.sheet.text(CellRef::new(0, 0)), "=1+2");
    }

    #[test]
    fn test_edit_preloads_current_text() {
        let mut app = sized();
        app.sheet.set_text(CellRef::new(0, 0), "12");
        apply_key(&mut app, Key::Char(b'e'));
        assert_eq!(app.prompt.text(), "12");
        apply_key(&mut app, Key::Backspace);
        type_str(&mut app, "5");
        apply_key(&mut app, Key::Enter);
        assert_eq!(app.sheet.text(CellRef::new(0, 0)), "15");
    }

    #[test]
    fn test_cancel_leaves_cell_alone() {
        let mut app = sized();
        app.sheet.set_text(CellRef::new(0, 0), "old");
        apply_key(&mut app, Key::Enter);
        type_str(&mut app, "new");
        apply_key(&mut app, Key::Esc);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.sheet.text(CellRef::new(0, 0)), "old");

        apply_key(&mut app, Key::Char(b'g'));
        apply_key(&mut app, Key::CtrlG);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_clear_cell_keys() {
        let mut app = sized();
        app.sheet.set_text(CellRef::new(0, 0), "1");
        app.sheet.set_text(CellRef::new(0, 1), "2");
        apply_key(&mut app, Key::Char(b'c'));
        apply_key(&mut app, Key::Right);
        apply_key(&mut app, Key::Delete);
        assert_eq!(app.sheet.cell_count(), 0);
    }

    #[test]
    fn test_goto_key() {
        let mut app = sized();
        apply_key(&mut app, Key::Char(b'g'));
        type_str(&mut app, "Z100");
        apply_key(&mut app, Key::Enter);
        assert_eq!((app.cursor_row, app.cursor_col), (ROWS - 1, COLS - 1));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sized();
        assert_eq!(apply_key(&mut app, Key::Char(b'q')), ApplyResult::Quit);
        assert_eq!(apply_key(&mut app, Key::CtrlC), ApplyResult::Quit);
        // Inside a prompt, `q` is text and Ctrl-C cancels.
        apply_key(&mut app, Key::Char(b'='));
        assert_eq!(apply_key(&mut app, Key::Char(b'q')), ApplyResult::Continue);
        assert_eq!(apply_key(&mut app, Key::CtrlC), ApplyResult::Continue);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_help_overlay() {
        let mut app = sized();
        apply_key(&mut app, Key::Char(b'?'));
        assert_eq!(app.mode, Mode::Help);
        apply_key(&mut app, Key::Null);
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(apply_key(&mut app, Key::Char(b'q')), ApplyResult::Continue);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_save_key_offers_default_file() {
        let mut app = App::new("budget.txt".into());
        apply_key(&mut app, Key::Char(b's'));
        assert_eq!(app.mode, Mode::Prompt(PromptKind::Save));
        assert_eq!(app.prompt.text(), "budget.txt");
        apply_key(&mut app, Key::Esc);

        apply_key(&mut app, Key::Char(b'l'));
        assert_eq!(app.mode, Mode::Prompt(PromptKind::Load));
        assert_eq!(app.prompt.text(), "budget.txt");
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut app = sized();
        for key in [Key::Null, Key::Char(b'x'), Key::Backspace, Key::Esc] {
            assert_eq!(apply_key(&mut app, key), ApplyResult::Continue);
        }
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!((app.cursor_row, app.cursor_col), (0, 0));
        assert_eq!(app.sheet.cell_count(), 0);
    }

    fn any_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::Up),
            Just(Key::Down),
            Just(Key::Left),
            Just(Key::Right),
            Just(Key::Home),
            Just(Key::End),
            Just(Key::PageUp),
            Just(Key::PageDown),
            Just(Key::Tab),
            Just(Key::BackTab),
            Just(Key::Enter),
            Just(Key::Esc),
            Just(Key::Backspace),
            Just(Key::Delete),
            Just(Key::Null),
            Just(Key::Char(b'g')),
            Just(Key::Char(b'=')),
            Just(Key::Char(b'?')),
            (b'0'..=b'9').prop_map(Key::Char),
            (b'A'..=b'Z').prop_map(Key::Char),
        ]
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_grid_and_on_screen(
            keys in proptest::collection::vec(any_key(), 0..200),
            width in 0u16..200,
            height in 0u16..80,
        ) {
            let mut app = App::default();
            app.resize(width, height);
            for key in keys {
                apply_key(&mut app, key);
                prop_assert!(app.cursor_row < ROWS && app.cursor_col < COLS);
                prop_assert!(app.visible_row_range().contains(&app.cursor_row));
                prop_assert!(app.visible_col_range().contains(&app.cursor_col));
            }
        }
    }
}
