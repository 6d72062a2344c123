//! File system helpers shared by both utilities.
//!
//! Covers validating input paths, reading text with newline normalization,
//! and opening the rendered output for writing. Verbose logging goes through
//! the macros of the parent `app` module.

use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Error as IoError};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `path` exists and is a regular file.
///
/// # Errors
/// `AppError::InputNotFound` if nothing exists at `path`,
/// `AppError::InvalidPath` if it is not a file.
pub fn validate_input_file(path: &Path) -> Result<(), AppError> {
    if !path.exists() {
        verbose_eprintln!("Input Error: file not found: {}", path.display());
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        let error_msg = format!("Path is not a file: {}", path.display());
        verbose_eprintln!("Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}

/// Reads a whole text file, turning `\r\n` and lone `\r` into `\n`.
pub fn read_text_file(path: &Path) -> Result<String, AppError> {
    validate_input_file(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        verbose_eprintln!("Failed to read {}: {}", path.display(), e);
        // The file can vanish between the check and the read.
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::InputNotFound(path.to_path_buf())
        } else {
            AppError::Io(e)
        }
    })?;
    Ok(normalize_newlines(&content).into_owned())
}

/// Universal-newline translation.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Opens `file_path` for writing, creating it or truncating it to zero bytes.
///
/// The caller owns the returned writer and must flush it; dropping it
/// flushes too, but silently discards errors.
pub fn create_output_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
