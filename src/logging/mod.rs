// src/logging/mod.rs
use std::fs::OpenOptions;
use std::io;

use crate::core::config::Config;

/// Install the global `env_logger`.
///
/// `RUST_LOG` wins over `PASSGEN_LOG_LEVEL` when both are set. Output goes to
/// stderr unless a log file is configured, in which case it is appended there.
/// A log file that cannot be opened still leaves a stderr logger installed;
/// the open error is returned so the caller can report it.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    let mut open_error = None;
    if let Some(path) = &config.log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => open_error = Some(e),
        }
    }

    // A second init (tests, embedding) is harmless
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    match open_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
