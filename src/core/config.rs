// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::generators::config::{DEFAULT_PASSWORD_COUNT, DEFAULT_PASSWORD_LENGTH};
use crate::generators::ResolutionDefaults;

// Application configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_count: usize,

    // Delivery
    pub copy_to_clipboard: bool,
    pub animation_delay: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading; logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_password_count: DEFAULT_PASSWORD_COUNT,

            copy_to_clipboard: true,
            animation_delay: Duration::from_millis(100),

            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSGEN_DEFAULT_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => config.ignore("PASSGEN_DEFAULT_LENGTH", &val),
            }
        }

        if let Some(val) = lookup("PASSGEN_DEFAULT_COUNT") {
            match val.parse() {
                Ok(count) => config.default_password_count = count,
                Err(_) => config.ignore("PASSGEN_DEFAULT_COUNT", &val),
            }
        }

        // Delivery
        if let Some(val) = lookup("PASSGEN_CLIPBOARD") {
            match parse_bool(&val) {
                Some(enabled) => config.copy_to_clipboard = enabled,
                None => config.ignore("PASSGEN_CLIPBOARD", &val),
            }
        }

        if let Some(val) = lookup("PASSGEN_ANIMATION_DELAY_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.animation_delay = Duration::from_millis(ms),
                Err(_) => config.ignore("PASSGEN_ANIMATION_DELAY_MS", &val),
            }
        }

        // Logging
        if let Some(level) = lookup("PASSGEN_LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.ignore("PASSGEN_LOG_LEVEL", &level),
            }
        }

        if let Some(path) = lookup("PASSGEN_LOG_FILE") {
            if !path.trim().is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }

        config
    }

    /// Emit the warnings collected by [`Config::load`]. Call after `logging::init`.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    fn ignore(&mut self, key: &str, val: &str) {
        self.warnings.push(format!("Ignoring invalid {} '{}'", key, val));
    }

    pub fn resolution_defaults(&self) -> ResolutionDefaults {
        ResolutionDefaults {
            length: self.default_password_length,
            count: self.default_password_count,
        }
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(load(&[]), Config::default());
        assert_eq!(Config::default().resolution_defaults(), ResolutionDefaults::default());
    }

    #[test]
    fn reads_generation_defaults() {
        let config = load(&[("PASSGEN_DEFAULT_LENGTH", "20"), ("PASSGEN_DEFAULT_COUNT", "4")]);
        let defaults = config.resolution_defaults();
        assert_eq!(defaults.length, 20);
        assert_eq!(defaults.count, 4);
    }

    #[test]
    fn ignores_unparseable_values() {
        let config = load(&[
            ("PASSGEN_DEFAULT_LENGTH", "long"),
            ("PASSGEN_CLIPBOARD", "maybe"),
            ("PASSGEN_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.default_password_length, DEFAULT_PASSWORD_LENGTH);
        assert!(config.copy_to_clipboard);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(
            config.warnings,
            vec![
                "Ignoring invalid PASSGEN_DEFAULT_LENGTH 'long'".to_string(),
                "Ignoring invalid PASSGEN_CLIPBOARD 'maybe'".to_string(),
                "Ignoring invalid PASSGEN_LOG_LEVEL 'loud'".to_string(),
            ]
        );
    }

    #[test]
    fn bad_count_and_delay_are_reported() {
        let config = load(&[
            ("PASSGEN_DEFAULT_COUNT", "-1"),
            ("PASSGEN_ANIMATION_DELAY_MS", "fast"),
        ]);
        assert_eq!(config.default_password_count, DEFAULT_PASSWORD_COUNT);
        assert_eq!(config.animation_delay, Duration::from_millis(100));
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains("PASSGEN_DEFAULT_COUNT '-1'"));
        assert!(config.warnings[1].contains("PASSGEN_ANIMATION_DELAY_MS 'fast'"));
    }

    #[test]
    fn reads_delivery_and_logging() {
        let config = load(&[
            ("PASSGEN_CLIPBOARD", "no"),
            ("PASSGEN_ANIMATION_DELAY_MS", "0"),
            ("PASSGEN_LOG_LEVEL", "DEBUG"),
            ("PASSGEN_LOG_FILE", "/tmp/passgen.log"),
        ]);
        assert!(!config.copy_to_clipboard);
        assert_eq!(config.animation_delay, Duration::ZERO);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
        assert!(config.warnings.is_empty());
    }
}
