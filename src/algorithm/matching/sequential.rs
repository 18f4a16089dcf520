//! Sequential candidate scoring
//!
//! This module scores candidate pairs on the calling thread, for inputs
//! below the parallel threshold.

use crate::algorithm::matching::criteria::MatchingOptions;
use crate::algorithm::matching::extraction::ExtractedIndividual;
use crate::algorithm::matching::filtering::is_candidate;
use crate::algorithm::matching::similarity::pair_similarity;
use crate::algorithm::matching::types::ScoredPair;

/// Score one left individual against every right individual, keeping pairs
/// that pass the pre-filter and reach the minimum similarity
pub(crate) fn score_row(
    left_index: usize,
    left: &ExtractedIndividual,
    right: &[ExtractedIndividual],
    options: &MatchingOptions,
) -> Vec<ScoredPair> {
    right
        .iter()
        .enumerate()
        .filter(|(_, candidate)| is_candidate(options.candidate_filter, left, candidate))
        .map(|(right_index, candidate)| ScoredPair {
            left: left_index,
            right: right_index,
            similarity: pair_similarity(left, candidate, &options.weights),
        })
        .filter(|pair| pair.similarity.score >= options.min_similarity)
        .collect()
}

/// Score all candidate pairs sequentially
pub fn perform_sequential_scoring(
    left: &[ExtractedIndividual],
    right: &[ExtractedIndividual],
    options: &MatchingOptions,
) -> Vec<ScoredPair> {
    left.iter()
        .enumerate()
        .flat_map(|(left_index, individual)| score_row(left_index, individual, right, options))
        .collect()
}
