// src/cli/display.rs
use std::io;
use std::thread;
use std::time::Duration;

use console::{style, Term};
use rand::Rng;

use crate::models::{StrengthReport, StrengthTier};
use crate::utils;

const MATRIX_ROWS: usize = 5;
const MATRIX_MIN_WIDTH: usize = 30;
const MATRIX_NOISE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub fn print_header(term: &Term) -> io::Result<()> {
    let banner = [
        "",
        "    ╔═══════════════════════════════════════════════════════╗",
        "    ║                 PASSWORD GENERATOR                    ║",
        "    ╚═══════════════════════════════════════════════════════╝",
    ];
    for line in banner {
        term.write_line(&style(line).cyan().bold().to_string())?;
    }
    Ok(())
}

pub fn print_footer(term: &Term) -> io::Result<()> {
    term.write_line("")?;
    term.write_line(&style(utils::rule()).yellow().to_string())?;
    term.write_line(&style("Thank you for using the Password Generator Tool!").cyan().to_string())
}

pub fn print_heading(term: &Term, count: usize) -> io::Result<()> {
    term.write_line("")?;
    term.write_line(&style(utils::generated_heading(count)).yellow().to_string())?;
    term.write_line(&style(utils::rule()).yellow().to_string())
}

pub fn print_label(term: &Term, index: usize) -> io::Result<()> {
    term.write_line("")?;
    term.write_line(&style(format!("Password {}:", index)).cyan().to_string())
}

pub fn print_warning(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&style(message).yellow().to_string())
}

pub fn print_error(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&style(message).red().to_string())
}

pub fn print_success(term: &Term, message: &str) -> io::Result<()> {
    term.write_line(&style(message).green().to_string())
}

pub fn show_password(term: &Term, password: &str) -> io::Result<()> {
    term.write_line(&style("Generated Password:").green().bold().to_string())?;
    term.write_line(&style(password).magenta().bold().to_string())
}

pub fn show_strength(term: &Term, report: &StrengthReport) -> io::Result<()> {
    let line = utils::strength_line(report);
    let styled = match report.tier {
        StrengthTier::VeryStrong | StrengthTier::Strong => style(line).green(),
        StrengthTier::Moderate => style(line).yellow(),
        StrengthTier::Weak => style(line).red(),
    };
    term.write_line(&styled.to_string())?;
    term.write_line(&style(utils::class_summary(report)).dim().to_string())?;

    if !report.feedback.is_empty() {
        term.write_line(&style("Feedback:").yellow().to_string())?;
        for item in &report.feedback {
            term.write_line(&style(format!(" • {}", item)).yellow().to_string())?;
        }
    }
    Ok(())
}

pub fn clipboard_notice(term: &Term, copied: bool) -> io::Result<()> {
    if copied {
        term.write_line(&format!(
            "{}{}",
            style("✓ Password copied to clipboard! ").yellow(),
            style("[Ready to paste]").green()
        ))
    } else {
        term.write_line(&style("! Could not copy password to clipboard").yellow().to_string())
    }
}

/// Typing-style reveal: masked first, then one character at a time.
///
/// Without a terminal (redirected or piped) the password is printed plainly.
pub fn animate_password(term: &Term, password: &str, delay: Duration) -> io::Result<()> {
    if !term.is_term() {
        return show_password(term, password);
    }

    term.write_line(&style("Generated Password:").green().bold().to_string())?;

    let chars: Vec<char> = password.chars().collect();
    term.hide_cursor()?;
    term.write_str(&style("*".repeat(chars.len())).cyan().to_string())?;
    term.flush()?;
    thread::sleep(delay * 5);

    for shown in 1..=chars.len() {
        let revealed: String = chars[..shown].iter().collect();
        let masked = "*".repeat(chars.len() - shown);
        term.clear_line()?;
        term.write_str(&format!("{}{}", style(revealed).magenta().bold(), style(masked).cyan()))?;
        term.flush()?;
        thread::sleep(delay);
    }

    term.clear_line()?;
    term.write_line(&style(password).magenta().bold().to_string())?;
    term.show_cursor()
}

/// Falling-noise effect with the password revealed in the middle row.
///
/// Without a terminal only the final `Password:` line is written.
pub fn matrix_effect(term: &Term, password: &str, delay: Duration) -> io::Result<()> {
    if !term.is_term() {
        return print_matrix_result(term, password);
    }

    let mut rng = rand::thread_rng();
    let chars: Vec<char> = password.chars().collect();
    let width = (chars.len() + 10).max(MATRIX_MIN_WIDTH);
    let mut grid = vec![vec![" ".to_string(); width]; MATRIX_ROWS];

    term.write_line(&style("Generating secure password...").green().bold().to_string())?;
    term.write_line("")?;
    term.hide_cursor()?;

    for _ in 0..3 {
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen_bool(0.2) {
                    let noise = char::from(MATRIX_NOISE[rng.gen_range(0..MATRIX_NOISE.len())]);
                    *cell = style(noise).green().to_string();
                }
            }
        }
        draw_grid(term, &grid)?;
        thread::sleep(delay);
        term.move_cursor_up(MATRIX_ROWS)?;
    }

    let middle = MATRIX_ROWS / 2;
    let start = (width - chars.len()) / 2;
    for (i, c) in chars.iter().enumerate() {
        grid[middle][start + i] = style(c).white().bold().to_string();
        for _ in 0..3 {
            draw_grid(term, &grid)?;
            thread::sleep(delay / 2);
            term.move_cursor_up(MATRIX_ROWS)?;
        }
    }

    draw_grid(term, &grid)?;
    term.show_cursor()?;
    term.write_line("")?;
    print_matrix_result(term, password)?;
    term.write_line("")
}

fn print_matrix_result(term: &Term, password: &str) -> io::Result<()> {
    term.write_line(&format!(
        "{}{}",
        style("Password: ").magenta().bold(),
        style(password).magenta().bold()
    ))
}

fn draw_grid(term: &Term, grid: &[Vec<String>]) -> io::Result<()> {
    for row in grid {
        term.clear_line()?;
        term.write_line(&row.concat())?;
    }
    term.flush()
}
