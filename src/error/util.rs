//! Utility functions for error handling
//!
//! Helpers that attach file context to I/O failures.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{GedcomError, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(GedcomError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {} (needed for: {purpose})", path.display()),
        )));
    }

    if !path.is_file() {
        return Err(GedcomError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a file: {} (expected a file for: {purpose})", path.display()),
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            io::ErrorKind::InvalidData => {
                "File contains invalid UTF-8 data - cannot read as text"
            }
            _ => "Failed to read file content",
        };
        GedcomError::Io(io::Error::new(
            e.kind(),
            format!("{context}: {} ({e})", path.display()),
        ))
    })
}
