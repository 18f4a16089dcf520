//! Configuration for a document comparison run.

use std::env;
use std::str::FromStr;

use crate::algorithm::matching::{FilterMode, MatchingOptions, SortMode};
use crate::transform::TransformOptions;
use crate::utils::logging::log_warning;

/// Environment variable overriding [`MatchingOptions::min_similarity`]
pub const MIN_SIMILARITY_VAR: &str = "GEDCOM_MIN_SIMILARITY";
/// Environment variable overriding [`MatchingOptions::use_parallel`]
pub const PARALLEL_VAR: &str = "GEDCOM_PARALLEL";
/// Environment variable overriding [`MatchingOptions::parallel_threshold`]
pub const PARALLEL_THRESHOLD_VAR: &str = "GEDCOM_PARALLEL_THRESHOLD";

/// Configuration for a comparison run
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    /// Engine options
    pub matching: MatchingOptions,
    /// Which comparisons are reported
    pub filter: FilterMode,
    /// Order of the reported comparisons
    pub sort: SortMode,
    /// Options for JSON rendering of documents
    pub transform: TransformOptions,
}

impl DiffConfig {
    /// Defaults with overrides from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`. Unparseable values are ignored
    /// with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = parse_var::<f64>(&lookup, MIN_SIMILARITY_VAR) {
            config.matching.min_similarity = value;
        }
        if let Some(value) = lookup(PARALLEL_VAR).and_then(|raw| parse_flag(PARALLEL_VAR, &raw)) {
            config.matching.use_parallel = value;
        }
        if let Some(value) = parse_var::<usize>(&lookup, PARALLEL_THRESHOLD_VAR) {
            config.matching.parallel_threshold = value;
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    let parsed = raw.trim().parse::<T>().ok();
    if parsed.is_none() {
        log_warning(&format!("ignoring unparseable value {raw:?}"), Some(key));
    }
    parsed
}

fn parse_flag(key: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            log_warning(&format!("ignoring unparseable value {raw:?}"), Some(key));
            None
        }
    }
}
