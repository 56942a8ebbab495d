// src/cli/menu.rs
use std::path::PathBuf;

use console::{style, Term};
use inquire::{Confirm, Text};

use super::{display, handlers};
use crate::core::config::Config;
use crate::error::AppError;
use crate::generators::MIN_PASSWORD_LENGTH;
use crate::models::{CharacterClass, DeliveryOptions, GenerationOptions};
use crate::utils;

pub fn run_interactive_mode(term: &Term, config: &Config) -> Result<(), AppError> {
    term.write_line("")?;
    term.write_line(&style("Password Generator Interactive Mode").yellow().to_string())?;
    term.write_line(&style(utils::rule()).yellow().to_string())?;

    let length = prompt_number(
        term,
        &format!("Enter password length (min {}):", MIN_PASSWORD_LENGTH),
        config.default_password_length,
        MIN_PASSWORD_LENGTH,
        &format!("Password length must be at least {}.", MIN_PASSWORD_LENGTH),
    )?;

    let [include_uppercase, include_lowercase, include_numbers, include_special] = prompt_classes(term)?;

    let count = prompt_number(
        term,
        "Number of passwords to generate:",
        config.default_password_count,
        1,
        "Must generate at least 1 password.",
    )?;

    let evaluate = Confirm::new("Show password strength evaluation?")
        .with_default(false)
        .prompt()?;

    let copy_to_clipboard = Confirm::new("Copy password to clipboard?")
        .with_default(config.copy_to_clipboard)
        .prompt()?;

    let animate = Confirm::new("Show animated reveal?")
        .with_default(false)
        .prompt()?;

    let save = Confirm::new("Save passwords to file?")
        .with_default(false)
        .prompt()?;

    let save_path = if save {
        let filename = Text::new("Enter filename:").prompt()?;
        if filename.trim().is_empty() {
            display::print_warning(term, "No filename provided. Passwords will not be saved.")?;
            None
        } else {
            Some(PathBuf::from(filename.trim()))
        }
    } else {
        None
    };

    let options = GenerationOptions {
        length: Some(length),
        count: Some(count),
        exclude_uppercase: !include_uppercase,
        exclude_lowercase: !include_lowercase,
        exclude_numbers: !include_numbers,
        exclude_special: !include_special,
        template: None,
    };
    let delivery = DeliveryOptions {
        evaluate,
        copy_to_clipboard,
        animate,
        matrix: false,
        save_path,
        json: false,
    };

    term.write_line("")?;
    display::print_warning(term, "Generating passwords...")?;
    let passwords = handlers::handle_generate(term, config, &options)?;
    handlers::deliver(term, config, &passwords, &delivery)
}

// Re-prompts until the answer parses and reaches `minimum`
fn prompt_number(
    term: &Term,
    message: &str,
    default: usize,
    minimum: usize,
    too_small: &str,
) -> Result<usize, AppError> {
    let default = default.to_string();
    loop {
        let answer = Text::new(message).with_default(&default).prompt()?;
        match answer.trim().parse::<usize>() {
            Ok(value) if value >= minimum => return Ok(value),
            Ok(_) => display::print_error(term, too_small)?,
            Err(_) => display::print_error(term, "Please enter a valid number")?,
        }
    }
}

// One confirmation per class, in fixed class order; at least one is required
fn prompt_classes(term: &Term) -> Result<[bool; 4], AppError> {
    loop {
        let mut answers = [true; 4];
        for (answer, class) in answers.iter_mut().zip(CharacterClass::ALL) {
            *answer = Confirm::new(&format!("Include {}?", class.describe()))
                .with_default(true)
                .prompt()?;
        }

        if answers.iter().any(|a| *a) {
            return Ok(answers);
        }
        display::print_error(term, "You must include at least one character type.")?;
    }
}
