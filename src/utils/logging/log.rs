//! Logging utilities
//!
//! Shared message formats for reading documents and loading configuration.

use std::path::Path;
use std::time::Duration;

/// Log that work on a GEDCOM document has started
///
/// # Arguments
/// * `operation` - What is being done to the document, e.g. "Reading GEDCOM file"
/// * `path` - Location of the document
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation}: {}", path.display());
}

/// Log that work on a document or record set has finished
///
/// # Arguments
/// * `operation` - Past-tense verb, e.g. "read"
/// * `subject` - What was operated on (a path, or a short label)
/// * `items` - Number of records processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(operation: &str, subject: &str, items: usize, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} records from {subject} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} records from {subject}");
    }
}

/// Log a recoverable problem, such as an environment variable that could not
/// be parsed or a record that was skipped
///
/// # Arguments
/// * `message` - What was ignored and why
/// * `source` - Optional origin, such as a variable name or a document label
pub fn log_warning(message: &str, source: Option<&str>) {
    log::warn!("{}", warning_text(message, source));
}

fn warning_text(message: &str, source: Option<&str>) -> String {
    match source {
        Some(source) => format!("{source}: {message}"),
        None => message.to_string(),
    }
}
