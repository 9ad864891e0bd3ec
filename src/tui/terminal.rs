//! Raw-mode terminal session.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGQUIT};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;
use std::io::{self, Stdout};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Once};

pub type Backend = CrosstermBackend<Stdout>;

/// Raw mode and the alternate screen, held for the guard's lifetime.
pub struct TerminalGuard {
    terminal: Terminal<Backend>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide).inspect_err(|_| teardown_terminal())?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| teardown_terminal())?;
        terminal.clear().inspect_err(|_| teardown_terminal())?;
        Ok(TerminalGuard { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restore the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            teardown_terminal();
            previous(info);
        }));
    });
}

/// Signals that end the session cleanly instead of killing the process.
#[cfg(unix)]
const SHUTDOWN_SIGNALS: &[i32] = &[SIGTERM, SIGHUP, SIGQUIT, SIGINT];
#[cfg(not(unix))]
const SHUTDOWN_SIGNALS: &[i32] = &[SIGTERM, SIGINT];

/// Route termination signals to a shutdown flag.
///
/// The first signal only sets the flag; the redraw loop notices it and
/// returns, so the guard restores the terminal. A second signal while the
/// flag is still set exits immediately with status 1.
pub fn register_shutdown_signals() -> io::Result<Arc<AtomicBool>> {
    let shutdown = Arc::new(AtomicBool::new(false));
    for &signal in SHUTDOWN_SIGNALS {
        flag::register_conditional_shutdown(signal, 1, Arc::clone(&shutdown))?;
        flag::register(signal, Arc::clone(&shutdown))?;
    }
    Ok(shutdown)
}
