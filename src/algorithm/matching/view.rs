//! Report views over an alignment
//!
//! The engine aligns two individual sets once; [`FilterMode`] and
//! [`SortMode`] only change which comparisons are emitted and in what order.

use crate::algorithm::matching::types::Comparison;
use crate::error::GedcomError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Which comparisons a view emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilterMode {
    /// Every comparison
    #[default]
    All,
    /// Matched pairs that differ in at least one compared attribute
    OnlyDifferent,
    /// Individuals present on one side only
    OnlyUnmatched,
}

/// Order of the comparisons in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortMode {
    /// Descending similarity, ties by left then right position. Unmatched
    /// individuals follow: left ones in left order, then right ones in right
    /// order.
    #[default]
    HighestSimilarity,
    /// Case-insensitive by full name (left side, else right), stable on ties
    /// with respect to [`SortMode::HighestSimilarity`]
    WrittenName,
}

impl FilterMode {
    /// Whether a comparison is emitted under this mode
    #[must_use]
    pub fn accepts(self, comparison: &Comparison<'_>) -> bool {
        match self {
            Self::All => true,
            Self::OnlyDifferent => comparison.is_match() && !comparison.differences().is_empty(),
            Self::OnlyUnmatched => !comparison.is_match(),
        }
    }
}

impl FromStr for FilterMode {
    type Err = GedcomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "different" | "only-different" => Ok(Self::OnlyDifferent),
            "unmatched" | "only-unmatched" => Ok(Self::OnlyUnmatched),
            other => Err(GedcomError::config(format!(
                "unknown filter mode '{other}', expected all, different or unmatched"
            ))),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::OnlyDifferent => "different",
            Self::OnlyUnmatched => "unmatched",
        })
    }
}

impl FromStr for SortMode {
    type Err = GedcomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "similarity" | "highest-similarity" => Ok(Self::HighestSimilarity),
            "name" | "written-name" => Ok(Self::WrittenName),
            other => Err(GedcomError::config(format!(
                "unknown sort mode '{other}', expected similarity or name"
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HighestSimilarity => "similarity",
            Self::WrittenName => "name",
        })
    }
}

/// Rank of a comparison under [`SortMode::HighestSimilarity`]
fn similarity_order(a: &Comparison<'_>, b: &Comparison<'_>) -> Ordering {
    // Matched pairs (group 0), then left-only (1), then right-only (2)
    let group = |c: &Comparison<'_>| match (c.is_match(), c.left_index().is_some()) {
        (true, _) => 0,
        (false, true) => 1,
        (false, false) => 2,
    };
    let score = |c: &Comparison<'_>| c.similarity().map_or(0.0, |s| s.score);

    group(a)
        .cmp(&group(b))
        .then_with(|| score(b).total_cmp(&score(a)))
        .then_with(|| a.left_index().cmp(&b.left_index()))
        .then_with(|| a.right_index().cmp(&b.right_index()))
}

/// The full alignment of two individual sets
#[derive(Debug, Clone, Default)]
pub struct IndividualComparisons<'a> {
    comparisons: Vec<Comparison<'a>>,
}

impl<'a> IndividualComparisons<'a> {
    /// Wrap an alignment
    #[must_use]
    pub const fn new(comparisons: Vec<Comparison<'a>>) -> Self {
        Self { comparisons }
    }

    /// Every comparison in alignment order
    #[must_use]
    pub fn as_slice(&self) -> &[Comparison<'a>] {
        &self.comparisons
    }

    /// Iterate in alignment order
    pub fn iter(&self) -> std::slice::Iter<'_, Comparison<'a>> {
        self.comparisons.iter()
    }

    /// Number of comparisons
    #[must_use]
    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    /// Whether there are no comparisons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    /// Number of matched pairs
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.comparisons.iter().filter(|c| c.is_match()).count()
    }

    /// Filtered and sorted view
    #[must_use]
    pub fn view(&self, filter: FilterMode, sort: SortMode) -> Vec<&Comparison<'a>> {
        let mut view: Vec<&Comparison<'a>> =
            self.comparisons.iter().filter(|c| filter.accepts(c)).collect();

        view.sort_by(|a, b| similarity_order(a, b));
        if sort == SortMode::WrittenName {
            view.sort_by_cached_key(|c| c.written_name().to_lowercase());
        }

        view
    }
}

impl<'a> IntoIterator for IndividualComparisons<'a> {
    type Item = Comparison<'a>;
    type IntoIter = std::vec::IntoIter<Comparison<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b IndividualComparisons<'a> {
    type Item = &'b Comparison<'a>;
    type IntoIter = std::slice::Iter<'b, Comparison<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.iter()
    }
}
