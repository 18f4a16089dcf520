//! Parallel candidate scoring
//!
//! This module fans candidate scoring out over Rayon for large inputs.
//! Scoring only reads the extracted attributes; the order of the returned
//! pairs is irrelevant because the claim pass sorts them with a total order.

use crate::algorithm::matching::criteria::MatchingOptions;
use crate::algorithm::matching::extraction::ExtractedIndividual;
use crate::algorithm::matching::sequential::score_row;
use crate::algorithm::matching::types::ScoredPair;
use crate::utils::logging::progress;
use log::info;
use rayon::prelude::*;

/// Score all candidate pairs in parallel, one task per left individual
pub fn perform_parallel_scoring(
    left: &[ExtractedIndividual],
    right: &[ExtractedIndividual],
    options: &MatchingOptions,
) -> Vec<ScoredPair> {
    let num_threads = rayon::current_num_threads();
    info!("Using parallel scoring with {num_threads} threads");

    let pb = progress::create_optional_progress_bar(
        options.show_progress,
        left.len() as u64,
        Some("Scoring candidate pairs"),
    );

    let pairs: Vec<ScoredPair> = left
        .par_iter()
        .enumerate()
        .flat_map_iter(|(left_index, individual)| {
            let row = score_row(left_index, individual, right, options);
            pb.inc(1);
            row
        })
        .collect();

    progress::finish_progress_bar(&pb, Some("Scoring complete"));
    pairs
}
