//! Candidate pre-filtering
//!
//! Cheap checks that decide whether a pair is worth scoring at all.

use crate::algorithm::matching::criteria::CandidateFilter;
use crate::algorithm::matching::extraction::ExtractedIndividual;

/// Whether a pair survives the pre-filter
#[must_use]
pub fn is_candidate(filter: CandidateFilter, a: &ExtractedIndividual, b: &ExtractedIndividual) -> bool {
    match filter {
        CandidateFilter::All => true,
        CandidateFilter::SharedSurname => {
            let (x, y) = (&a.own.surname, &b.own.surname);
            x.is_empty() || y.is_empty() || x.iter().any(|word| y.contains(word))
        }
    }
}

/// Count the pairs that survive the pre-filter
#[must_use]
pub fn count_candidates(
    filter: CandidateFilter,
    left: &[ExtractedIndividual],
    right: &[ExtractedIndividual],
) -> usize {
    match filter {
        CandidateFilter::All => left.len() * right.len(),
        CandidateFilter::SharedSurname => left
            .iter()
            .map(|a| right.iter().filter(|b| is_candidate(filter, a, b)).count())
            .sum(),
    }
}
