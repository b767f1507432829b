//! Main application orchestrator.
//!
//! Resolves settings, initializes the optional verbose log, opens the path
//! store and hands the parsed command to the command runner. Console output
//! goes to stdout; the verbose log is flushed before returning.

use std::env;
use std::io;

use super::cli::{Cli, Command};
use super::commands::CommandRunner;
use super::config::Settings;
use super::error::AppError;
use super::logger;
use super::{verbose_eprintln, verbose_println};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for any command-level failure. No store write happens
/// after a failure has been detected.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::from_cli(&cli)?;
    let quiet_mode = settings.quiet;

    if let Some(log_file) = settings.log_file.as_deref().filter(|_| !quiet_mode) {
        if let Err(e) = logger::init_global_logger(log_file) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                log_file.display(),
                e
            );
        }
    }
    verbose_println!(quiet_mode, "[start] {:?} (store: {:?})", cli.command, settings.backend);

    if let Command::List {
        color_output: true, ..
    } = cli.command
    {
        colored::control::set_override(true);
    }

    let result = run_command(&cli, &settings);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to perform final flush of the verbose log: {}", e);
    }
    result
}

fn run_command(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let mut store = settings.open_store()?;
    let process_path = env::var_os("PATH");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    CommandRunner::new(&mut *store, &settings.cwd, settings.quiet).dispatch(
        &cli.command,
        process_path.as_deref(),
        &mut out,
    )
}
