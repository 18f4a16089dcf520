//! Matching options for aligning individuals
//!
//! This module provides the weights and thresholds used by the comparison
//! engine, with a builder in the same style as the rest of the crate.

use crate::error::{GedcomError, Result};
use std::fmt;

/// Relative importance of each similarity category.
///
/// Weights need not sum to one; the combined score is divided by their sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityWeights {
    /// The individual's own name and life dates
    pub own: f64,
    /// The individual's parents
    pub parents: f64,
    /// The individual's spouses
    pub spouses: f64,
    /// The individual's children
    pub children: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            own: 0.7,
            parents: 0.1,
            spouses: 0.1,
            children: 0.1,
        }
    }
}

impl SimilarityWeights {
    /// Create a weight vector
    #[must_use]
    pub const fn new(own: f64, parents: f64, spouses: f64, children: f64) -> Self {
        Self {
            own,
            parents,
            spouses,
            children,
        }
    }

    /// Normalization basis
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.own + self.parents + self.spouses + self.children
    }

    /// Reject negative, non-finite or all-zero weights
    pub fn validate(&self) -> Result<()> {
        for (label, weight) in [
            ("own", self.own),
            ("parents", self.parents),
            ("spouses", self.spouses),
            ("children", self.children),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(GedcomError::config(format!(
                    "{label} weight must be a non-negative number, got {weight}"
                )));
            }
        }

        if self.sum() <= 0.0 {
            return Err(GedcomError::config(
                "at least one similarity weight must be greater than zero",
            ));
        }

        Ok(())
    }
}

/// Cheap pre-filter applied before a pair is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateFilter {
    /// Score every left individual against every right individual
    All,
    /// Skip pairs whose surnames share no word. Individuals without a
    /// surname are always scored.
    #[default]
    SharedSurname,
}

/// Configuration for the comparison engine
#[derive(Debug, Clone)]
pub struct MatchingOptions {
    /// Category weights
    pub weights: SimilarityWeights,

    /// Pairs scoring below this are never matched
    pub min_similarity: f64,

    /// Pre-filter limiting which pairs get scored
    pub candidate_filter: CandidateFilter,

    /// Whether to use parallel processing for scoring
    pub use_parallel: bool,

    /// Minimum number of candidate pairs before scoring goes parallel
    pub parallel_threshold: usize,

    /// Whether to draw a progress bar while scoring in parallel
    pub show_progress: bool,
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            min_similarity: 0.735,
            candidate_filter: CandidateFilter::default(),
            use_parallel: true,
            parallel_threshold: 10_000,
            show_progress: false,
        }
    }
}

impl MatchingOptions {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing matching options
    #[must_use]
    pub fn builder() -> MatchingOptionsBuilder {
        MatchingOptionsBuilder::new()
    }

    /// Check that the options describe a usable engine
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(GedcomError::config(format!(
                "minimum similarity must be between 0 and 1, got {}",
                self.min_similarity
            )));
        }

        Ok(())
    }
}

impl fmt::Display for MatchingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matching Options:")?;
        writeln!(
            f,
            "  Weights: own {}, parents {}, spouses {}, children {}",
            self.weights.own, self.weights.parents, self.weights.spouses, self.weights.children
        )?;
        writeln!(f, "  Minimum similarity: {}", self.min_similarity)?;
        writeln!(f, "  Candidate filter: {:?}", self.candidate_filter)?;
        writeln!(
            f,
            "  Parallel: {} (threshold {} pairs)",
            self.use_parallel, self.parallel_threshold
        )
    }
}

/// Builder for constructing matching options
#[derive(Debug, Clone, Default)]
pub struct MatchingOptionsBuilder {
    options: MatchingOptions,
}

impl MatchingOptionsBuilder {
    /// Create a new builder with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category weights
    #[must_use]
    pub const fn weights(mut self, weights: SimilarityWeights) -> Self {
        self.options.weights = weights;
        self
    }

    /// Set the minimum similarity for a match
    #[must_use]
    pub const fn min_similarity(mut self, min_similarity: f64) -> Self {
        self.options.min_similarity = min_similarity;
        self
    }

    /// Set the candidate pre-filter
    #[must_use]
    pub const fn candidate_filter(mut self, filter: CandidateFilter) -> Self {
        self.options.candidate_filter = filter;
        self
    }

    /// Set whether to use parallel processing
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.options.use_parallel = parallel;
        self
    }

    /// Set the number of candidate pairs at which scoring goes parallel
    #[must_use]
    pub const fn parallel_threshold(mut self, pairs: usize) -> Self {
        self.options.parallel_threshold = pairs;
        self
    }

    /// Set whether to show a progress bar
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.options.show_progress = show;
        self
    }

    /// Build the options, validating them
    pub fn build(self) -> Result<MatchingOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
