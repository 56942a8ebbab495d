// src/main.rs
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use console::{style, Term};

use rust_passgen::cli::{handlers, Args};
use rust_passgen::core::config::Config;
use rust_passgen::error::AppError;
use rust_passgen::logging;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        log::warn!("Could not open log file, logging to stderr: {}", e);
    }
    config.log_warnings();
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    if let Err(e) = ctrlc::set_handler(|| {
        let _ = Term::stdout().show_cursor();
        eprintln!("\n{}", style("Operation cancelled by user.").red());
        std::process::exit(i32::from(AppError::Cancelled.exit_code()));
    }) {
        log::warn!("Failed to set Ctrl+C handler: {}", e);
    }

    match handlers::handle_args(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cancelled) => {
            eprintln!("\n{}", style("Operation cancelled by user.").red());
            ExitCode::from(AppError::Cancelled.exit_code())
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", style(format!("Error: {}", e)).red().bold());
            ExitCode::from(e.exit_code())
        }
    }
}
