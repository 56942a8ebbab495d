// src/utils/io.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clipboard::{ClipboardContext, ClipboardProvider};

use crate::error::AppError;

/// Write passwords to `path`, one per line, replacing any existing file.
pub fn save_passwords_to_file(passwords: &[String], path: &Path) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for password in passwords {
        writeln!(writer, "{}", password)?;
    }
    writer.flush()?;

    log::info!("Saved {} password(s) to {}", passwords.len(), path.display());
    Ok(())
}

/// Place `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), AppError> {
    let mut ctx = ClipboardContext::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    log::debug!("Copied {} characters to clipboard", text.chars().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn saves_one_password_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let passwords = vec!["Ab3!Ab3!Ab3!".to_string(), "x9?Kq_2mZ!pL".to_string()];

        save_passwords_to_file(&passwords, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Ab3!Ab3!Ab3!\nx9?Kq_2mZ!pL\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "old\nold\nold\n").unwrap();

        save_passwords_to_file(&["fresh".to_string()], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("passwords.txt");
        let err = save_passwords_to_file(&["x".to_string()], &path).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
