// src/cli/handlers.rs
use console::Term;
use serde::Serialize;

use super::{display, menu, Args};
use crate::core::config::Config;
use crate::error::AppError;
use crate::generators::{self, GenerationConfig, PasswordGenerator, MIN_PASSWORD_LENGTH};
use crate::models::{DeliveryOptions, GenerationOptions, StrengthReport};
use crate::utils;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    passwords: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reports: Option<Vec<StrengthReport>>,
}

// Entry point for a parsed command line
pub fn handle_args(args: &Args, config: &Config) -> Result<(), AppError> {
    let term = Term::stdout();

    if args.interactive {
        display::print_header(&term)?;
        menu::run_interactive_mode(&term, config)?;
        return display::print_footer(&term).map_err(AppError::from);
    }

    let options = args.generation_options();
    let delivery = args.delivery_options(config);

    if delivery.json {
        return handle_json(&term, config, &options, &delivery);
    }

    display::print_header(&term)?;
    let passwords = handle_generate(&term, config, &options)?;
    deliver(&term, config, &passwords, &delivery)?;
    display::print_footer(&term)?;
    Ok(())
}

/// Resolve options and generate the batch.
pub fn handle_generate(
    term: &Term,
    config: &Config,
    options: &GenerationOptions,
) -> Result<Vec<String>, AppError> {
    let generation = resolve(config, options)?;
    if let Some(warning) = template_warning(&generation) {
        display::print_warning(term, "Warning: Template may not produce secure passwords.")?;
        display::print_warning(term, &warning)?;
        display::print_warning(
            term,
            "Ensure it includes U (uppercase), L (lowercase), D (digit), and S (special) characters.",
        )?;
    }
    generate_batch(&generation)
}

fn resolve(config: &Config, options: &GenerationOptions) -> Result<GenerationConfig, AppError> {
    let generation = GenerationConfig::resolve(options, config.resolution_defaults())?;
    if let Some(warning) = template_warning(&generation) {
        log::warn!("{}", warning);
    }
    Ok(generation)
}

fn template_warning(generation: &GenerationConfig) -> Option<String> {
    generation
        .template()
        .and_then(|t| t.coverage_warning(MIN_PASSWORD_LENGTH))
}

fn generate_batch(generation: &GenerationConfig) -> Result<Vec<String>, AppError> {
    let mut generator = PasswordGenerator::from_entropy()?;
    let passwords = generator.generate(generation)?;
    log::info!("Generated {} password(s) of length {}", passwords.len(), generation.length());
    Ok(passwords)
}

/// Display, copy and save a generated batch.
pub fn deliver(
    term: &Term,
    config: &Config,
    passwords: &[String],
    delivery: &DeliveryOptions,
) -> Result<(), AppError> {
    display::print_heading(term, passwords.len())?;

    match passwords {
        [only] if delivery.matrix => {
            display::matrix_effect(term, only, config.animation_delay)?;
            if delivery.evaluate {
                display::show_strength(term, &generators::evaluate(only))?;
            }
            if delivery.copy_to_clipboard {
                copy_with_notice(term, only, utils::copy_to_clipboard)?;
            }
        }
        _ => {
            if delivery.matrix {
                log::debug!("Matrix effect skipped for a batch of {}", passwords.len());
            }
            for (i, password) in passwords.iter().enumerate() {
                let is_last = i + 1 == passwords.len();
                if passwords.len() > 1 {
                    display::print_label(term, i + 1)?;
                }

                if delivery.animate && is_last {
                    display::animate_password(term, password, config.animation_delay)?;
                } else {
                    display::show_password(term, password)?;
                }

                if delivery.evaluate {
                    display::show_strength(term, &generators::evaluate(password))?;
                }

                // Only the last password goes to the clipboard
                if delivery.copy_to_clipboard && is_last {
                    copy_with_notice(term, password, utils::copy_to_clipboard)?;
                }
            }
        }
    }

    if let Some(path) = &delivery.save_path {
        utils::save_passwords_to_file(passwords, path)?;
        term.write_line("")?;
        display::print_success(term, &format!("Passwords saved to {}", path.display()))?;
    }

    Ok(())
}

// A failed copy is reported but never fails the run
fn copy_with_notice<F>(term: &Term, password: &str, copy: F) -> Result<(), AppError>
where
    F: FnOnce(&str) -> Result<(), AppError>,
{
    match copy(password) {
        Ok(()) => display::clipboard_notice(term, true)?,
        Err(e) => {
            log::warn!("{}", e);
            display::clipboard_notice(term, false)?;
        }
    }
    Ok(())
}

// Machine-readable mode: no banner, no effects, no clipboard
fn handle_json(
    term: &Term,
    config: &Config,
    options: &GenerationOptions,
    delivery: &DeliveryOptions,
) -> Result<(), AppError> {
    let generation = resolve(config, options)?;
    let passwords = generate_batch(&generation)?;

    let output = render_json(&passwords, delivery.evaluate)?;
    term.write_line(&output)?;

    if let Some(path) = &delivery.save_path {
        utils::save_passwords_to_file(&passwords, path)?;
    }
    Ok(())
}

pub fn render_json(passwords: &[String], with_reports: bool) -> Result<String, AppError> {
    let reports = with_reports.then(|| passwords.iter().map(|p| generators::evaluate(p)).collect());
    let output = JsonOutput { passwords, reports };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn json_without_reports() {
        let passwords = vec!["Ab3!Ab3!Ab3!".to_string()];
        let value: Value = serde_json::from_str(&render_json(&passwords, false).unwrap()).unwrap();
        assert_eq!(value["passwords"][0], "Ab3!Ab3!Ab3!");
        assert!(value.get("reports").is_none());
    }

    #[test]
    fn json_with_reports() {
        let passwords = vec!["Ab3!Ab3!Ab3!".to_string(), "aaaaaaaa".to_string()];
        let value: Value = serde_json::from_str(&render_json(&passwords, true).unwrap()).unwrap();
        assert_eq!(value["reports"][0]["tier"], "Strong");
        assert_eq!(value["reports"][1]["tier"], "Weak");
        assert_eq!(value["reports"][1]["class_count"], 1);
    }

    #[test]
    fn generate_rejects_bad_configuration() {
        let term = Term::stdout();
        let options = GenerationOptions {
            length: Some(8),
            ..Default::default()
        };
        let err = handle_generate(&term, &Config::default(), &options).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn generate_uses_config_defaults() {
        let term = Term::stdout();
        let config = Config {
            default_password_length: 20,
            default_password_count: 2,
            ..Config::default()
        };
        let passwords = handle_generate(&term, &config, &GenerationOptions::default()).unwrap();
        assert_eq!(passwords.len(), 2);
        assert!(passwords.iter().all(|p| p.len() == 20));
    }

    #[cfg(unix)]
    fn notice_for(copy: impl FnOnce(&str) -> Result<(), AppError>) -> (Result<(), AppError>, String) {
        use std::io::{Read, Seek, SeekFrom};

        let mut out = tempfile::tempfile().unwrap();
        let term = Term::read_write_pair(tempfile::tempfile().unwrap(), out.try_clone().unwrap());
        let result = copy_with_notice(&term, "Ab3!Ab3!Ab3!", copy);

        let mut text = String::new();
        out.seek(SeekFrom::Start(0)).unwrap();
        out.read_to_string(&mut text).unwrap();
        (result, text)
    }

    #[cfg(unix)]
    #[test]
    fn failed_copy_is_reported_not_fatal() {
        let (result, text) = notice_for(|_| Err(AppError::Clipboard("no display".into())));
        assert!(result.is_ok());
        assert!(text.contains("! Could not copy password to clipboard"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_copy_receives_the_password() {
        let mut seen = None;
        let (result, text) = notice_for(|p| {
            seen = Some(p.to_string());
            Ok(())
        });
        assert!(result.is_ok());
        assert!(text.contains("Password copied to clipboard"));
        assert_eq!(seen.as_deref(), Some("Ab3!Ab3!Ab3!"));
    }
}
