//! Alignment of individuals across two genealogical documents
//!
//! This module implements the comparison engine. It includes:
//!
//! 1. Matching options and similarity weights
//! 2. Per-individual attribute extraction and pair scoring
//! 3. Sequential or parallel candidate scoring with a greedy claim pass
//! 4. Filtered and sorted report views over the alignment
//!
//! Scoring is deterministic: the claim pass sorts candidate pairs with a
//! total order, so sequential and parallel scoring give the same alignment.

pub mod criteria;
pub mod extraction;
pub mod filtering;
pub mod matcher;
pub mod parallel;
pub mod sequential;
pub mod similarity;
pub mod types;
pub mod view;

// Re-export key types
pub use criteria::{CandidateFilter, MatchingOptions, MatchingOptionsBuilder, SimilarityWeights};
pub use matcher::{ComparisonEngine, compare};
pub use types::{Attribute, Comparison, ComparisonSummary, ScoredPair, SideSummary, Similarity};
pub use view::{FilterMode, IndividualComparisons, SortMode};
