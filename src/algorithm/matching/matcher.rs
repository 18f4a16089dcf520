//! Core comparison engine
//!
//! This module implements the `ComparisonEngine` which orchestrates the
//! alignment: extraction, candidate scoring and the greedy claim pass.

use crate::algorithm::matching::criteria::{MatchingOptions, SimilarityWeights};
use crate::algorithm::matching::extraction::extract_individuals;
use crate::algorithm::matching::filtering::count_candidates;
use crate::algorithm::matching::parallel::perform_parallel_scoring;
use crate::algorithm::matching::sequential::perform_sequential_scoring;
use crate::algorithm::matching::types::{Comparison, ScoredPair};
use crate::algorithm::matching::view::IndividualComparisons;
use crate::error::Result;
use crate::models::IndividualNode;
use log::{debug, info};
use std::time::Instant;

/// Aligns two sequences of individuals
#[derive(Debug, Clone)]
pub struct ComparisonEngine {
    options: MatchingOptions,
}

impl ComparisonEngine {
    /// Create an engine, rejecting invalid options
    pub fn new(options: MatchingOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options the engine was built with
    #[must_use]
    pub const fn options(&self) -> &MatchingOptions {
        &self.options
    }

    /// Align `left` with `right`.
    ///
    /// Every individual appears in exactly one comparison. Matched pairs come
    /// first in claim order, then left singletons in left order, then right
    /// singletons in right order.
    #[must_use]
    pub fn compare<'a>(
        &self,
        left: &[IndividualNode<'a>],
        right: &[IndividualNode<'a>],
    ) -> IndividualComparisons<'a> {
        let start_time = Instant::now();

        let left_attributes = extract_individuals(left);
        let right_attributes = extract_individuals(right);

        let candidates = count_candidates(
            self.options.candidate_filter,
            &left_attributes,
            &right_attributes,
        );
        info!(
            "Comparing {} individuals with {} individuals ({} candidate pairs)",
            left.len(),
            right.len(),
            candidates
        );

        let use_parallel =
            self.options.use_parallel && candidates >= self.options.parallel_threshold;

        let mut pairs = if use_parallel {
            perform_parallel_scoring(&left_attributes, &right_attributes, &self.options)
        } else {
            perform_sequential_scoring(&left_attributes, &right_attributes, &self.options)
        };
        debug!(
            "{} pairs reached the minimum similarity of {}",
            pairs.len(),
            self.options.min_similarity
        );

        pairs.sort_by(ScoredPair::rank);
        let comparisons = claim(&pairs, left, right);

        let elapsed = start_time.elapsed();
        let matched = comparisons.iter().filter(|c| c.is_match()).count();
        info!(
            "Comparison complete: {} matched pairs, {} unmatched in {:.2?}",
            matched,
            comparisons.len() - matched,
            elapsed
        );

        IndividualComparisons::new(comparisons)
    }
}

/// Walk ranked pairs claiming those whose sides are both free, then emit the
/// remaining individuals as singletons
fn claim<'a>(
    ranked: &[ScoredPair],
    left: &[IndividualNode<'a>],
    right: &[IndividualNode<'a>],
) -> Vec<Comparison<'a>> {
    let mut left_claimed = vec![false; left.len()];
    let mut right_claimed = vec![false; right.len()];
    let mut comparisons = Vec::with_capacity(left.len() + right.len());

    for pair in ranked {
        if left_claimed[pair.left] || right_claimed[pair.right] {
            continue;
        }
        left_claimed[pair.left] = true;
        right_claimed[pair.right] = true;
        comparisons.push(Comparison::matched(
            pair.left,
            left[pair.left],
            pair.right,
            right[pair.right],
            pair.similarity,
        ));
    }

    comparisons.extend(
        left.iter()
            .enumerate()
            .filter(|(index, _)| !left_claimed[*index])
            .map(|(index, individual)| Comparison::left_only(index, *individual)),
    );
    comparisons.extend(
        right
            .iter()
            .enumerate()
            .filter(|(index, _)| !right_claimed[*index])
            .map(|(index, individual)| Comparison::right_only(index, *individual)),
    );

    comparisons
}

/// Align two sequences with default options and the given weights
pub fn compare<'a>(
    left: &[IndividualNode<'a>],
    right: &[IndividualNode<'a>],
    weights: SimilarityWeights,
) -> Result<IndividualComparisons<'a>> {
    let options = MatchingOptions::builder().weights(weights).build()?;
    Ok(ComparisonEngine::new(options)?.compare(left, right))
}
