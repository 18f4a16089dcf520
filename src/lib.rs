//! A Rust library for reading GEDCOM genealogy files, parsing personal names
//! and aligning the individuals of two documents by similarity.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod transform;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DiffConfig;
pub use error::{GedcomError, Result};
pub use models::{
    Date, DateQualifier, Document, EventNode, FamilyNode, IndividualNode, Name, NameNode, Node,
    NodeKind, Record, Tag,
};

// Comparison engine
pub use algorithm::matching::{
    Comparison, ComparisonEngine, FilterMode, IndividualComparisons, MatchingOptions,
    SimilarityWeights, SortMode, compare,
};

// Input and output surfaces
pub use reader::{parse_document, read_document};
pub use transform::{TransformOptions, transform};
