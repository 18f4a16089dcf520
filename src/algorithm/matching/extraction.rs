//! Attribute extraction for the comparison engine
//!
//! Names, dates and relatives are read from the tree once per individual,
//! before any pair is scored. Relatives are extracted as bare [`Profile`]s
//! with no relatives of their own, which caps relation scoring at one hop
//! even in self-referential trees.

use crate::models::{Date, IndividualNode};
use smallvec::SmallVec;

/// Lower-cased words of a name component
pub type Words = SmallVec<[String; 4]>;

/// Own attributes of one individual, normalized for comparison
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    /// Given-name words
    pub given: Words,
    /// Surname words
    pub surname: Words,
    /// Normalized suffix
    pub suffix: String,
    /// Birth date
    pub birth: Option<Date>,
    /// Death date
    pub death: Option<Date>,
}

impl Profile {
    /// Read the comparable attributes of an individual
    #[must_use]
    pub fn from_individual(individual: &IndividualNode<'_>) -> Self {
        let name = individual.name();
        Self {
            given: words(&name.given_name),
            surname: words(&name.surname),
            suffix: words(&name.suffix).join(" "),
            birth: individual.birth_date(),
            death: individual.death_date(),
        }
    }
}

/// An individual's profile plus the profiles of its relatives
#[derive(Debug, Clone, Default)]
pub struct ExtractedIndividual {
    /// Own attributes
    pub own: Profile,
    /// Parent profiles
    pub parents: SmallVec<[Profile; 2]>,
    /// Spouse profiles
    pub spouses: SmallVec<[Profile; 2]>,
    /// Child profiles
    pub children: SmallVec<[Profile; 4]>,
}

impl ExtractedIndividual {
    /// Extract an individual and its one-hop relatives
    #[must_use]
    pub fn from_individual(individual: &IndividualNode<'_>) -> Self {
        let relations = individual.relations();
        Self {
            own: Profile::from_individual(individual),
            parents: relations.parents.iter().map(Profile::from_individual).collect(),
            spouses: relations.spouses.iter().map(Profile::from_individual).collect(),
            children: relations.children.iter().map(Profile::from_individual).collect(),
        }
    }
}

/// Extract every individual of a sequence, keeping its order
#[must_use]
pub fn extract_individuals(individuals: &[IndividualNode<'_>]) -> Vec<ExtractedIndividual> {
    individuals.iter().map(ExtractedIndividual::from_individual).collect()
}

/// Split a name component into lower-cased words
#[must_use]
pub fn words(value: &str) -> Words {
    value.split_whitespace().map(str::to_lowercase).collect()
}
