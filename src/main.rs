mod app;
mod engine;
mod store;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // No arguments at all: show the banner instead of clap's usage error.
    if std::env::args_os().len() <= 1 {
        app::print_usage_banner();
        return ExitCode::SUCCESS;
    }

    let cli = app::Cli::parse();
    match app::run_app(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
