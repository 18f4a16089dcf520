//! Pair scoring
//!
//! Own similarity compares names and life dates. Relation similarity is the
//! best one-to-one pairing of two relative sets under own similarity. Missing
//! data never counts against a pair: an own component absent on either side is
//! left out, a relation category empty on both sides is left out, and a
//! relation category empty on one side scores [`NEUTRAL`].

use crate::algorithm::matching::criteria::SimilarityWeights;
use crate::algorithm::matching::extraction::{ExtractedIndividual, Profile, Words};
use crate::algorithm::matching::types::Similarity;
use crate::models::Date;

/// Score of a category with no evidence either way
pub const NEUTRAL: f64 = 0.5;

/// Relative sets up to this size are paired exhaustively
const EXHAUSTIVE_LIMIT: usize = 12;

const GIVEN_WEIGHT: f64 = 0.45;
const SURNAME_WEIGHT: f64 = 0.45;
const SUFFIX_WEIGHT: f64 = 0.1;

const NAME_WEIGHT: f64 = 0.6;
const BIRTH_WEIGHT: f64 = 0.2;
const DEATH_WEIGHT: f64 = 0.2;

/// Weighted average over the components present on both sides
fn weighted_mean(parts: &[(Option<f64>, f64)]) -> Option<f64> {
    let (total, weight) = parts
        .iter()
        .filter_map(|(score, weight)| score.map(|s| (s * weight, *weight)))
        .fold((0.0, 0.0), |(t, w), (s, x)| (t + s, w + x));
    (weight > 0.0).then(|| total / weight)
}

/// Dice coefficient over word sets; `None` when either side is empty
fn word_similarity(a: &Words, b: &Words) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if a == b {
        return Some(1.0);
    }

    let shared = a.iter().filter(|word| b.contains(word)).count();
    #[allow(clippy::cast_precision_loss)]
    Some(2.0 * shared as f64 / (a.len() + b.len()) as f64)
}

fn text_similarity(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() {
        None
    } else if a == b {
        Some(1.0)
    } else {
        Some(0.0)
    }
}

fn date_similarity(a: Option<&Date>, b: Option<&Date>) -> Option<f64> {
    Some(a?.similarity(b?))
}

/// Name closeness, or `None` when no component is present on both sides
#[must_use]
pub fn name_similarity(a: &Profile, b: &Profile) -> Option<f64> {
    weighted_mean(&[
        (word_similarity(&a.given, &b.given), GIVEN_WEIGHT),
        (word_similarity(&a.surname, &b.surname), SURNAME_WEIGHT),
        (text_similarity(&a.suffix, &b.suffix), SUFFIX_WEIGHT),
    ])
}

/// Own similarity of two profiles in [0, 1]
#[must_use]
pub fn own_similarity(a: &Profile, b: &Profile) -> f64 {
    weighted_mean(&[
        (name_similarity(a, b), NAME_WEIGHT),
        (date_similarity(a.birth.as_ref(), b.birth.as_ref()), BIRTH_WEIGHT),
        (date_similarity(a.death.as_ref(), b.death.as_ref()), DEATH_WEIGHT),
    ])
    .unwrap_or(NEUTRAL)
}

/// Best one-to-one pairing of two relative sets, averaged over the larger
/// set. Relatives left without a partner count as zero.
///
/// Returns `None` when both sets are empty, so the category drops out of the
/// combined score. A set empty on one side only scores [`NEUTRAL`].
#[must_use]
pub fn relation_similarity(a: &[Profile], b: &[Profile]) -> Option<f64> {
    if a.is_empty() && b.is_empty() {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(NEUTRAL);
    }

    // Pair from the smaller side; the score is symmetric
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let scores: Vec<Vec<f64>> = small
        .iter()
        .map(|x| large.iter().map(|y| own_similarity(x, y)).collect())
        .collect();

    let best = if large.len() <= EXHAUSTIVE_LIMIT {
        exhaustive_assignment(&scores, large.len())
    } else {
        greedy_assignment(&scores)
    };

    #[allow(clippy::cast_precision_loss)]
    let denominator = large.len() as f64;
    Some((best / denominator).clamp(0.0, 1.0))
}

/// Maximum total of a one-to-one assignment of every row to a distinct
/// column, by memoized search over the set of used columns.
fn exhaustive_assignment(scores: &[Vec<f64>], columns: usize) -> f64 {
    fn best(scores: &[Vec<f64>], columns: usize, used: usize, memo: &mut [Option<f64>]) -> f64 {
        let row = used.count_ones() as usize;
        if row == scores.len() {
            return 0.0;
        }
        if let Some(known) = memo[used] {
            return known;
        }

        let mut result = 0.0_f64;
        for column in 0..columns {
            if used & (1 << column) == 0 {
                let total = scores[row][column] + best(scores, columns, used | (1 << column), memo);
                result = result.max(total);
            }
        }

        memo[used] = Some(result);
        result
    }

    let mut memo = vec![None; 1 << columns];
    best(scores, columns, 0, &mut memo)
}

/// Highest-first claiming, used when the sets are too large to search
fn greedy_assignment(scores: &[Vec<f64>]) -> f64 {
    let mut pairs: Vec<(usize, usize, f64)> = scores
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &s)| (i, j, s)))
        .collect();
    pairs.sort_by(|x, y| y.2.total_cmp(&x.2).then(x.0.cmp(&y.0)).then(x.1.cmp(&y.1)));

    let columns = scores.first().map_or(0, Vec::len);
    let mut row_used = vec![false; scores.len()];
    let mut column_used = vec![false; columns];
    let mut total = 0.0;
    for (i, j, s) in pairs {
        if !row_used[i] && !column_used[j] {
            row_used[i] = true;
            column_used[j] = true;
            total += s;
        }
    }
    total
}

/// Full similarity of two extracted individuals
#[must_use]
pub fn pair_similarity(
    a: &ExtractedIndividual,
    b: &ExtractedIndividual,
    weights: &SimilarityWeights,
) -> Similarity {
    Similarity::new(
        own_similarity(&a.own, &b.own),
        relation_similarity(&a.parents, &b.parents),
        relation_similarity(&a.spouses, &b.spouses),
        relation_similarity(&a.children, &b.children),
        weights,
    )
}
