//! Type definitions for the comparison engine
//!
//! This module contains the similarity score and the comparison entries the
//! engine produces.

use crate::algorithm::matching::criteria::SimilarityWeights;
use crate::models::{EventNode, IndividualNode, Name, Record};
use serde::Serialize;
use std::fmt;

/// Sub-scores of a pair and their weighted combination, all in [0, 1].
///
/// A relation category is `None` when neither side has relatives in it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Similarity {
    /// Own name and life dates
    pub own: f64,
    /// Best one-to-one matching of parents
    pub parents: Option<f64>,
    /// Best one-to-one matching of spouses
    pub spouses: Option<f64>,
    /// Best one-to-one matching of children
    pub children: Option<f64>,
    /// Weighted average of the categories with evidence
    pub score: f64,
}

impl Similarity {
    /// Combine sub-scores with validated weights
    #[must_use]
    pub fn new(
        own: f64,
        parents: Option<f64>,
        spouses: Option<f64>,
        children: Option<f64>,
        weights: &SimilarityWeights,
    ) -> Self {
        let mut similarity = Self {
            own,
            parents,
            spouses,
            children,
            score: 0.0,
        };
        similarity.score = similarity.weighted(weights);
        similarity
    }

    /// Weighted average over the categories with evidence, renormalized by
    /// their weights. When none of them carries weight the own score stands
    /// alone.
    #[must_use]
    pub fn weighted(&self, weights: &SimilarityWeights) -> f64 {
        let (total, weight) = [
            (Some(self.own), weights.own),
            (self.parents, weights.parents),
            (self.spouses, weights.spouses),
            (self.children, weights.children),
        ]
        .into_iter()
        .filter_map(|(score, weight)| score.map(|s| (s * weight, weight)))
        .fold((0.0, 0.0), |(t, w), (s, x)| (t + s, w + x));

        if weight > 0.0 {
            (total / weight).clamp(0.0, 1.0)
        } else {
            self.own
        }
    }
}

/// A scored candidate pair, identified by positions in the compared sequences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPair {
    /// Position in the left sequence
    pub left: usize,
    /// Position in the right sequence
    pub right: usize,
    /// Pair similarity
    pub similarity: Similarity,
}

impl ScoredPair {
    /// Descending score, then left position, then right position
    #[must_use]
    pub fn rank(&self, other: &Self) -> std::cmp::Ordering {
        other
            .similarity
            .score
            .total_cmp(&self.similarity.score)
            .then(self.left.cmp(&other.left))
            .then(self.right.cmp(&other.right))
    }
}

/// An attribute compared between the two sides of a matched pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Attribute {
    /// Name title
    Title,
    /// Name prefix
    Prefix,
    /// Given names
    GivenName,
    /// Surname prefix
    SurnamePrefix,
    /// Surname
    Surname,
    /// Name suffix
    Suffix,
    /// Birth date
    BirthDate,
    /// Birth place
    BirthPlace,
    /// Death date
    DeathDate,
    /// Death place
    DeathPlace,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Title => "title",
            Self::Prefix => "prefix",
            Self::GivenName => "given name",
            Self::SurnamePrefix => "surname prefix",
            Self::Surname => "surname",
            Self::Suffix => "suffix",
            Self::BirthDate => "birth date",
            Self::BirthPlace => "birth place",
            Self::DeathDate => "death date",
            Self::DeathPlace => "death place",
        };
        f.write_str(label)
    }
}

/// One entry of an alignment: a matched pair or an unmatched individual.
///
/// At least one side is present, and the similarity is present exactly when
/// both sides are. The constructors are the only way to build one.
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    left: Option<(usize, IndividualNode<'a>)>,
    right: Option<(usize, IndividualNode<'a>)>,
    similarity: Option<Similarity>,
}

impl<'a> Comparison<'a> {
    /// A matched pair. Indices are positions in the compared sequences.
    #[must_use]
    pub const fn matched(
        left_index: usize,
        left: IndividualNode<'a>,
        right_index: usize,
        right: IndividualNode<'a>,
        similarity: Similarity,
    ) -> Self {
        Self {
            left: Some((left_index, left)),
            right: Some((right_index, right)),
            similarity: Some(similarity),
        }
    }

    /// An individual present only on the left
    #[must_use]
    pub const fn left_only(index: usize, individual: IndividualNode<'a>) -> Self {
        Self {
            left: Some((index, individual)),
            right: None,
            similarity: None,
        }
    }

    /// An individual present only on the right
    #[must_use]
    pub const fn right_only(index: usize, individual: IndividualNode<'a>) -> Self {
        Self {
            left: None,
            right: Some((index, individual)),
            similarity: None,
        }
    }

    /// Left individual, if any
    #[must_use]
    pub fn left(&self) -> Option<IndividualNode<'a>> {
        self.left.map(|(_, individual)| individual)
    }

    /// Right individual, if any
    #[must_use]
    pub fn right(&self) -> Option<IndividualNode<'a>> {
        self.right.map(|(_, individual)| individual)
    }

    /// Position of the left individual in the compared sequence
    #[must_use]
    pub fn left_index(&self) -> Option<usize> {
        self.left.map(|(index, _)| index)
    }

    /// Position of the right individual in the compared sequence
    #[must_use]
    pub fn right_index(&self) -> Option<usize> {
        self.right.map(|(index, _)| index)
    }

    /// Similarity of a matched pair
    #[must_use]
    pub const fn similarity(&self) -> Option<Similarity> {
        self.similarity
    }

    /// Whether both sides are present
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.similarity.is_some()
    }

    /// Full name of whichever side is present, left first
    #[must_use]
    pub fn written_name(&self) -> String {
        self.left().or_else(|| self.right()).map(|i| i.text()).unwrap_or_default()
    }

    /// Compared attributes that differ between the two sides. Empty for
    /// unmatched individuals.
    #[must_use]
    pub fn differences(&self) -> Vec<Attribute> {
        let (Some(left), Some(right)) = (self.left(), self.right()) else {
            return Vec::new();
        };

        let mut differences = name_differences(&left.name(), &right.name());

        if event_date_text(left.birth()) != event_date_text(right.birth()) {
            differences.push(Attribute::BirthDate);
        }
        if normalized(left.birth_place()) != normalized(right.birth_place()) {
            differences.push(Attribute::BirthPlace);
        }
        if event_date_text(left.death()) != event_date_text(right.death()) {
            differences.push(Attribute::DeathDate);
        }
        if normalized(left.death_place()) != normalized(right.death_place()) {
            differences.push(Attribute::DeathPlace);
        }

        differences
    }

    /// Serializable summary for reports
    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            left: self.left().map(side_summary),
            right: self.right().map(side_summary),
            similarity: self.similarity,
            differences: self.differences(),
        }
    }
}

fn side_summary(individual: IndividualNode<'_>) -> SideSummary {
    SideSummary {
        pointer: individual.pointer().map(str::to_string),
        name: individual.text(),
        birth: individual.birth_date().map(|d| d.to_string()),
        death: individual.death_date().map(|d| d.to_string()),
    }
}

/// Parsed date when possible, otherwise the normalized raw value
fn event_date_text(event: Option<EventNode<'_>>) -> Option<String> {
    event.map(|e| {
        e.date().map_or_else(
            || e.date_value().map(normalize).unwrap_or_default(),
            |d| d.to_string(),
        )
    })
}

fn normalized(value: Option<String>) -> Option<String> {
    value.map(|v| normalize(&v))
}

fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn name_differences(left: &Name, right: &Name) -> Vec<Attribute> {
    [
        (Attribute::Title, &left.title, &right.title),
        (Attribute::Prefix, &left.prefix, &right.prefix),
        (Attribute::GivenName, &left.given_name, &right.given_name),
        (Attribute::SurnamePrefix, &left.surname_prefix, &right.surname_prefix),
        (Attribute::Surname, &left.surname, &right.surname),
        (Attribute::Suffix, &left.suffix, &right.suffix),
    ]
    .into_iter()
    .filter(|(_, l, r)| normalize(l) != normalize(r))
    .map(|(attribute, _, _)| attribute)
    .collect()
}

/// One side of a [`ComparisonSummary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSummary {
    /// Record pointer
    pub pointer: Option<String>,
    /// Rendered full name
    pub name: String,
    /// Rendered birth date
    pub birth: Option<String>,
    /// Rendered death date
    pub death: Option<String>,
}

/// Owned, serializable form of a [`Comparison`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Left individual
    pub left: Option<SideSummary>,
    /// Right individual
    pub right: Option<SideSummary>,
    /// Similarity of a matched pair
    pub similarity: Option<Similarity>,
    /// Differing attributes of a matched pair
    pub differences: Vec<Attribute>,
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.left(), self.right(), self.similarity) {
            (Some(left), Some(right), Some(similarity)) => {
                write!(f, "{left} <=> {right} [{:.3}]", similarity.score)
            }
            (Some(left), None, _) => write!(f, "{left} <=> (none)"),
            (None, Some(right), _) => write!(f, "(none) <=> {right}"),
            _ => Ok(()),
        }
    }
}
