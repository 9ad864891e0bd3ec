//! tinysheet - a tiny spreadsheet in the terminal

mod config;
mod error;
mod logging;
mod tui;

use anyhow::Context;
use config::Config;
use std::env;
use tracing::info;

fn print_usage() {
    eprintln!("Usage: tinysheet [OPTIONS]");
    eprintln!();
    eprintln!("A 26 x 100 spreadsheet with arithmetic formulas (=A1+B2*3).");
    eprintln!("Press ? inside the sheet for key bindings.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help                Print help");
}

fn main() -> anyhow::Result<()> {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Error: Unexpected argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
    }

    let (config, warnings) = Config::load();
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    if let Err(e) = logging::init(&config) {
        eprintln!("Warning: {:#}", e);
    }
    info!(default_file = %config.default_file.display(), "starting");

    let mut app = tui::App::new(config.default_file);
    tui::run(&mut app).context("terminal session failed")?;
    info!("exiting");
    Ok(())
}
