//! Terminal front end: controller, key decoding and rendering.

mod actions;
mod app;
mod help;
mod input;
mod prompt;
mod terminal;
mod ui;

pub use app::App;

use crate::error::AppError;
use input::CrosstermKeys;
use std::sync::Arc;
use terminal::TerminalGuard;
use tracing::info;

/// Take over the terminal and run until the user quits or a termination
/// signal arrives.
pub fn run(app: &mut App) -> Result<(), AppError> {
    let shutdown = terminal::register_shutdown_signals().map_err(AppError::Terminal)?;
    let mut guard = TerminalGuard::enter().map_err(AppError::Terminal)?;
    info!("terminal session started");
    let mut keys = CrosstermKeys::new(Arc::clone(&shutdown));
    input::run_app(guard.terminal_mut(), &mut keys, app, &shutdown);
    drop(guard);
    info!("terminal session ended");
    Ok(())
}
