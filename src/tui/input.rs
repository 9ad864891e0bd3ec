use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::prelude::Backend;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::actions::{ApplyResult, apply_key};
use super::app::App;
use super::ui;

/// A decoded key, independent of the terminal library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A plain byte; only printable ASCII is ever inserted into text.
    Char(u8),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    CtrlC,
    CtrlG,
    Esc,
    /// Anything else: resizes, mouse, unmapped keys. Triggers a redraw only.
    Null,
}

/// Blocking source of decoded keys.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// How often a blocked key read wakes up to check for shutdown.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Reads keys from the real terminal.
///
/// Returns [`Key::Null`] once `shutdown` is raised so the loop can notice it.
pub struct CrosstermKeys {
    shutdown: Arc<AtomicBool>,
}

impl CrosstermKeys {
    pub fn new(shutdown: Arc<AtomicBool>) -> Self {
        CrosstermKeys { shutdown }
    }
}

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        while !self.shutdown.load(Ordering::Relaxed) {
            if event::poll(SHUTDOWN_POLL)? {
                return event::read().map(decode_event);
            }
        }
        Ok(Key::Null)
    }
}

/// Map a crossterm event to a [`Key`].
pub fn decode_event(event: Event) -> Key {
    match event {
        // Only process key press events (Windows reports Press + Release)
        Event::Key(key) if key.kind != KeyEventKind::Release => decode_key(key),
        _ => Key::Null,
    }
}

fn decode_key(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Key::CtrlC,
            KeyCode::Char('g') => Key::CtrlG,
            KeyCode::Char('h') => Key::Backspace,
            _ => Key::Null,
        };
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii() => Key::Char(c as u8),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    }
}

/// The redraw loop: size, recompute, draw, read one key, dispatch.
///
/// Terminal errors inside the loop are logged and the frame is skipped; the
/// loop ends when a key asks to quit or `shutdown` is raised.
pub fn run_app<B: Backend, K: KeySource>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    app: &mut App,
    shutdown: &AtomicBool,
) {
    loop {
        match terminal.size() {
            Ok(size) => app.resize(size.width, size.height),
            Err(e) => warn!(error = %e, "failed to query terminal size"),
        }

        app.begin_pass();
        if let Err(e) = terminal.draw(|f| ui::draw(f, app)) {
            warn!(error = %e, "failed to draw frame");
        }
        app.end_frame();

        let key = match keys.read_key() {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "failed to read key");
                Key::Null
            }
        };
        if shutdown.load(Ordering::Relaxed) {
            info!("shutdown signal received");
            return;
        }
        if apply_key(app, key) == ApplyResult::Quit {
            debug!("quit requested");
            return;
        }
    }
}
