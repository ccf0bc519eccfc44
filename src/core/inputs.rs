// src/core/inputs.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FormatError, PageError};

/// Reads a whole text file. The handle is released before returning.
///
/// # Errors
///
/// * `PageError::FileNotFound` if the file is missing or cannot be read
/// * `PageError::Format` if the file is not valid UTF-8
#[inline]
pub fn read_text(path: &Path) -> Result<String, PageError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            PageError::Format(FormatError::NotUtf8(path.to_path_buf()))
        } else {
            PageError::file(path, e)
        }
    })
}

/// Size of a regular file in bytes. Only metadata is read.
///
/// # Errors
///
/// Returns `PageError::FileNotFound` if the path does not exist, cannot be
/// inspected, or is a directory.
#[inline]
pub fn file_size(path: &Path) -> Result<u64, PageError> {
    let metadata = fs::metadata(path).map_err(|e| PageError::file(path, e))?;
    if metadata.is_dir() {
        return Err(PageError::file(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "is a directory"),
        ));
    }
    Ok(metadata.len())
}
