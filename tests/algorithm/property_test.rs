// Property-based tests for name parsing and the comparison engine.
// CI: 64 cases (default). Soak: PROPTEST_CASES=5000 cargo test --release

use std::collections::HashSet;

use crate::utils::{family_document, individual};
use gedcom_diff::algorithm::matching::{
    ComparisonEngine, FilterMode, MatchingOptions, SimilarityWeights, SortMode, compare,
};
use gedcom_diff::{Document, Name, Node, Tag};
use proptest::prelude::*;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(64),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

/// Raw name text, including stray slashes and irregular spacing
fn arb_raw_name() -> impl Strategy<Value = String> {
    r"[A-Za-z /.]{0,24}"
}

fn arb_override() -> impl Strategy<Value = Node> {
    (
        prop_oneof![
            Just(Tag::GivenName),
            Just(Tag::Surname),
            Just(Tag::NamePrefix),
            Just(Tag::NameSuffix),
            Just(Tag::Title),
            Just(Tag::Note),
        ],
        r"[A-Za-z ]{0,10}",
    )
        .prop_map(|(tag, value)| Node::new(tag, value))
}

/// (name, birth year) pairs drawn from a small vocabulary so matches happen
fn arb_people() -> impl Strategy<Value = Vec<(String, u16)>> {
    let given = prop_oneof![Just("Ann"), Just("Bo"), Just("Carl"), Just("Dina")];
    let surname = prop_oneof![Just("Berg"), Just("Dahl"), Just("Lund")];
    prop::collection::vec(
        (given, surname, 1850_u16..1856)
            .prop_map(|(g, s, year)| (format!("{g} /{s}/"), year)),
        0..8,
    )
}

/// Any valid weight vector: non-negative with a positive sum
fn arb_weights() -> impl Strategy<Value = SimilarityWeights> {
    (0.0..5.0_f64, 0.0..5.0_f64, 0.0..5.0_f64, 0.0..5.0_f64)
        .prop_filter("weights must not all be zero", |(o, p, s, c)| o + p + s + c > 0.0)
        .prop_map(|(own, parents, spouses, children)| {
            SimilarityWeights::new(own, parents, spouses, children)
        })
}

fn document(prefix: &str, people: &[(String, u16)]) -> Document {
    Document::from(
        people
            .iter()
            .enumerate()
            .map(|(i, (name, year))| individual(&format!("{prefix}{i}"), name, &year.to_string(), ""))
            .collect::<Vec<_>>(),
    )
}

fn options(parallel: bool) -> MatchingOptions {
    MatchingOptions::builder()
        .weights(SimilarityWeights::default())
        .min_similarity(0.5)
        .use_parallel(parallel)
        .parallel_threshold(0)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn name_parsing_is_pure(raw in arb_raw_name(), overrides in prop::collection::vec(arb_override(), 0..4)) {
        let first = Name::parse(&raw, &overrides);
        let second = Name::parse(&raw, &overrides);
        prop_assert_eq!(&first, &second);

        for part in first.parts() {
            prop_assert_eq!(part.trim(), part);
            prop_assert!(!part.contains("  "));
        }
    }

    #[test]
    fn every_individual_is_aligned_once(left in arb_people(), right in arb_people()) {
        let left_doc = document("L", &left);
        let right_doc = document("R", &right);
        let engine = ComparisonEngine::new(options(false)).unwrap();
        let result = engine.compare(&left_doc.individuals(), &right_doc.individuals());

        let mut left_seen = HashSet::new();
        let mut right_seen = HashSet::new();
        for comparison in &result {
            prop_assert!(comparison.left().is_some() || comparison.right().is_some());
            prop_assert_eq!(
                comparison.similarity().is_some(),
                comparison.left().is_some() && comparison.right().is_some()
            );
            if let Some(similarity) = comparison.similarity() {
                prop_assert!((0.0..=1.0).contains(&similarity.score));
                prop_assert!(similarity.score >= 0.5);
            }
            if let Some(index) = comparison.left_index() {
                prop_assert!(left_seen.insert(index));
            }
            if let Some(index) = comparison.right_index() {
                prop_assert!(right_seen.insert(index));
            }
        }
        prop_assert_eq!(left_seen.len(), left.len());
        prop_assert_eq!(right_seen.len(), right.len());
    }

    #[test]
    fn alignment_is_deterministic(left in arb_people(), right in arb_people()) {
        let left_doc = document("L", &left);
        let right_doc = document("R", &right);
        let render = |parallel: bool| {
            let engine = ComparisonEngine::new(options(parallel)).unwrap();
            let result = engine.compare(&left_doc.individuals(), &right_doc.individuals());
            let rows: Vec<_> = result
                .view(FilterMode::All, SortMode::HighestSimilarity)
                .iter()
                .map(|c| (c.left_index(), c.right_index(), c.similarity().map(|s| s.score)))
                .collect();
            rows
        };

        let sequential = render(false);
        prop_assert_eq!(&sequential, &render(false));
        prop_assert_eq!(&sequential, &render(true));
    }

    #[test]
    fn identical_copies_always_match(people in arb_people(), weights in arb_weights()) {
        let left_doc = document("L", &people);
        let right_doc = document("R", &people);
        let result = compare(&left_doc.individuals(), &right_doc.individuals(), weights).unwrap();

        prop_assert_eq!(result.len(), people.len());
        prop_assert_eq!(result.matched_count(), people.len());
        for comparison in &result {
            prop_assert_eq!(comparison.similarity().map(|s| s.score), Some(1.0));
        }
    }

    #[test]
    fn identical_families_match_member_for_member(weights in arb_weights()) {
        let left_doc = family_document("Cain /Smith/", "1820");
        let right_doc = family_document("Cain /Smith/", "1820");
        let result = compare(&left_doc.individuals(), &right_doc.individuals(), weights).unwrap();

        prop_assert_eq!(result.len(), 3);
        for comparison in &result {
            prop_assert!(comparison.is_match());
            prop_assert_eq!(comparison.left_index(), comparison.right_index());
        }
    }
}
