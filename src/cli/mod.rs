// src/cli/mod.rs
use std::path::PathBuf;
use clap::Parser;

pub mod display;
pub mod handlers;
pub mod menu;

use crate::core::config::Config;
use crate::models::{DeliveryOptions, GenerationOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate secure random passwords", long_about = None)]
pub struct Args {
    /// Password length (default: 16, minimum: 12)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// Number of passwords to generate (default: 1)
    #[arg(short = 'n', long = "number", value_name = "N")]
    pub count: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Exclude special characters
    #[arg(long)]
    pub no_special: bool,

    /// Do not copy password to clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Show password strength evaluation
    #[arg(short, long)]
    pub evaluate: bool,

    /// Save generated passwords to file
    #[arg(short, long, value_name = "FILENAME")]
    pub save: Option<PathBuf>,

    /// Use pattern template (U=uppercase, L=lowercase, D=digit, S=special, X=any)
    #[arg(short, long, value_name = "PATTERN")]
    pub template: Option<String>,

    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Show animated password reveal
    #[arg(short, long)]
    pub animate: bool,

    /// Show password with matrix effect animation
    #[arg(short, long)]
    pub matrix: bool,

    /// Print passwords (and reports) as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.length,
            count: self.count,
            exclude_uppercase: self.no_uppercase,
            exclude_lowercase: self.no_lowercase,
            exclude_numbers: self.no_numbers,
            exclude_special: self.no_special,
            template: self.template.clone(),
        }
    }

    pub fn delivery_options(&self, config: &Config) -> DeliveryOptions {
        DeliveryOptions {
            evaluate: self.evaluate,
            copy_to_clipboard: config.copy_to_clipboard && !self.no_clipboard,
            animate: self.animate,
            matrix: self.matrix,
            save_path: self.save.clone(),
            json: self.json,
        }
    }
}
