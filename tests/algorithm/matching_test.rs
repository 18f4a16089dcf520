#[cfg(test)]
mod tests {
    use crate::utils::{family_document, individual, left_document, right_document};
    use gedcom_diff::algorithm::matching::{
        Attribute, CandidateFilter, ComparisonEngine, FilterMode, MatchingOptions, SimilarityWeights,
        SortMode, compare,
    };
    use gedcom_diff::{Document, Record};

    fn engine(options: MatchingOptions) -> ComparisonEngine {
        ComparisonEngine::new(options).unwrap()
    }

    #[test]
    fn test_end_to_end_alignment() {
        let left = left_document();
        let right = right_document();

        let result = compare(
            &left.individuals(),
            &right.individuals(),
            SimilarityWeights::default(),
        )
        .unwrap();

        assert_eq!(result.len(), 3);
        let entries = result.as_slice();

        let jane = &entries[0];
        assert!(jane.is_match());
        assert_eq!(jane.left().unwrap().pointer(), Some("P3"));
        assert_eq!(jane.right().unwrap().pointer(), Some("P3"));
        let similarity = jane.similarity().unwrap();
        assert_eq!(similarity.score, 1.0);
        assert_eq!(similarity.parents, None);
        assert!(jane.differences().is_empty());

        let elliot = &entries[1];
        assert_eq!(elliot.left().unwrap().given_name(), "Elliot");
        assert!(elliot.right().is_none());
        assert!(elliot.similarity().is_none());

        let john = &entries[2];
        assert!(john.left().is_none());
        assert_eq!(john.right().unwrap().given_name(), "John");
    }

    #[test]
    fn test_alignment_holds_under_relation_heavy_weights() {
        let left = left_document();
        let right = right_document();

        for weights in [
            SimilarityWeights::new(1.0, 1.0, 1.0, 1.0),
            SimilarityWeights::new(0.1, 2.0, 2.0, 2.0),
            SimilarityWeights::new(0.0, 0.0, 0.0, 1.0),
        ] {
            let result = compare(&left.individuals(), &right.individuals(), weights).unwrap();
            assert_eq!(result.len(), 3, "weights {weights:?}");
            assert_eq!(result.matched_count(), 1);

            let jane = &result.as_slice()[0];
            assert_eq!(jane.left().unwrap().given_name(), "Jane");
            assert_eq!(jane.right().unwrap().given_name(), "Jane");
            assert_eq!(jane.similarity().unwrap().score, 1.0);
        }
    }

    #[test]
    fn test_rendered_comparison_lines() {
        let left = left_document();
        let right = right_document();
        let result = compare(&left.individuals(), &right.individuals(), SimilarityWeights::default())
            .unwrap();

        let lines: Vec<String> = result.iter().map(ToString::to_string).collect();
        assert!(lines[0].starts_with("Jane Doe (b. 3 Mar 1803   d. 14 Jun 1877) <=> Jane Doe"));
        assert_eq!(
            lines[1],
            "Elliot Chance (b. 4 Jan 1843   d. 17 Mar 1907) <=> (none)"
        );
        assert_eq!(lines[2], "(none) <=> John Smith (b. 4 Jan 1803   d. 17 Mar 1877)");
    }

    #[test]
    fn test_every_individual_appears_exactly_once() {
        let left = Document::from(vec![
            individual("A", "Ann /Berg/", "1900", ""),
            individual("B", "Ann /Berg/", "1900", ""),
            individual("C", "Carl /Berg/", "1890", ""),
        ]);
        let right = Document::from(vec![
            individual("X", "Ann /Berg/", "1900", ""),
            individual("Y", "Karl /Berg/", "1890", ""),
        ]);

        let options = MatchingOptions::builder()
            .min_similarity(0.0)
            .use_parallel(false)
            .build()
            .unwrap();
        let result = engine(options).compare(&left.individuals(), &right.individuals());

        let mut left_seen: Vec<usize> = result.iter().filter_map(|c| c.left_index()).collect();
        let mut right_seen: Vec<usize> = result.iter().filter_map(|c| c.right_index()).collect();
        left_seen.sort_unstable();
        right_seen.sort_unstable();
        assert_eq!(left_seen, [0, 1, 2]);
        assert_eq!(right_seen, [0, 1]);

        for comparison in &result {
            assert!(comparison.left().is_some() || comparison.right().is_some());
            assert_eq!(
                comparison.similarity().is_some(),
                comparison.left().is_some() && comparison.right().is_some()
            );
        }

        // Ties go to the earlier left individual
        let first = &result.as_slice()[0];
        assert_eq!((first.left_index(), first.right_index()), (Some(0), Some(0)));
    }

    fn population(prefix: &str, count: usize, names: usize, first_year: usize) -> Document {
        Document::from(
            (0..count)
                .map(|i| {
                    individual(
                        &format!("{prefix}{i}"),
                        &format!("Name{} /Family{}/", i % names, i % 3),
                        &(first_year + i % 4).to_string(),
                        "",
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let left = population("L", 30, 7, 1800);
        let right = population("R", 25, 5, 1801);

        let sequential = MatchingOptions::builder()
            .use_parallel(false)
            .min_similarity(0.3)
            .build()
            .unwrap();
        let parallel = MatchingOptions::builder()
            .use_parallel(true)
            .parallel_threshold(0)
            .min_similarity(0.3)
            .build()
            .unwrap();

        let a = engine(sequential).compare(&left.individuals(), &right.individuals());
        let b = engine(parallel).compare(&left.individuals(), &right.individuals());

        let summarize = |result: &gedcom_diff::IndividualComparisons<'_>| {
            result
                .view(FilterMode::All, SortMode::HighestSimilarity)
                .iter()
                .map(|c| (c.left_index(), c.right_index(), c.similarity().map(|s| s.score)))
                .collect::<Vec<_>>()
        };
        assert_eq!(summarize(&a), summarize(&b));
    }

    #[test]
    fn test_views_filter_and_sort() {
        let left = Document::from(vec![
            individual("A", "Zed /Quinn/", "1900", ""),
            individual("B", "Amy /Quinn/", "1 Jan 1850", ""),
            individual("C", "Bob /Unique/", "", ""),
        ]);
        let right = Document::from(vec![
            individual("X", "Zed /Quinn/", "1900", ""),
            individual("Y", "Amy /Quinn/", "Jan 1850", ""),
        ]);
        let options = MatchingOptions::builder()
            .min_similarity(0.6)
            .use_parallel(false)
            .build()
            .unwrap();
        let result = engine(options).compare(&left.individuals(), &right.individuals());
        assert_eq!(result.matched_count(), 2);

        let unmatched = result.view(FilterMode::OnlyUnmatched, SortMode::HighestSimilarity);
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].written_name(), "Bob Unique");

        let different = result.view(FilterMode::OnlyDifferent, SortMode::HighestSimilarity);
        assert_eq!(different.len(), 1);
        assert_eq!(different[0].differences(), vec![Attribute::BirthDate]);

        let by_name: Vec<String> = result
            .view(FilterMode::All, SortMode::WrittenName)
            .iter()
            .map(|c| c.written_name())
            .collect();
        assert_eq!(by_name, ["Amy Quinn", "Bob Unique", "Zed Quinn"]);

        let by_score = result.view(FilterMode::All, SortMode::HighestSimilarity);
        assert_eq!(by_score[0].written_name(), "Zed Quinn");
        assert_eq!(by_score[2].written_name(), "Bob Unique");
    }

    #[test]
    fn test_relatives_lift_the_score() {
        let left = family_document("Cain /Smith/", "1820");
        let right = family_document("Cain /Smith/", "1820");
        let stranger = Document::from(vec![individual("C", "Cain /Smith/", "1820", "")]);

        let options = MatchingOptions::builder()
            .min_similarity(0.0)
            .candidate_filter(CandidateFilter::All)
            .use_parallel(false)
            .build()
            .unwrap();
        let engine = engine(options);

        let with_family = engine.compare(&left.individuals()[2..3], &right.individuals()[2..3]);
        let alone = engine.compare(&left.individuals()[2..3], &stranger.individuals());

        let with_family = with_family.as_slice()[0].similarity().unwrap();
        let alone = alone.as_slice()[0].similarity().unwrap();
        assert_eq!(with_family.parents, Some(1.0));
        assert_eq!(alone.parents, Some(0.5));
        assert!(with_family.score > alone.score);
    }

    #[test]
    fn test_raising_children_weight_never_lowers_a_strong_children_score() {
        let left = family_document("Cain /Smith/", "1820");
        let right = family_document("Cain /Smith/", "1820");
        // The fathers: same spouse and children on both sides, no parents
        let left_father = &left.individuals()[0..1];
        let right_father = &right.individuals()[0..1];

        let mut previous = 0.0;
        for children in [0.0, 0.1, 0.5, 1.0, 5.0] {
            let weights = SimilarityWeights::new(0.7, 0.1, 0.1, children);
            let options = MatchingOptions::builder()
                .weights(weights)
                .min_similarity(0.0)
                .use_parallel(false)
                .build()
                .unwrap();
            let result = engine(options).compare(left_father, right_father);
            let similarity = result.as_slice()[0].similarity().unwrap();
            assert_eq!(similarity.parents, None);
            assert_eq!(similarity.children, Some(1.0));
            assert!(similarity.score + 1e-12 >= previous);
            previous = similarity.score;
        }
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let left = left_document();
        let err = compare(
            &left.individuals(),
            &left.individuals(),
            SimilarityWeights::new(0.0, 0.0, 0.0, 0.0),
        )
        .unwrap_err();
        assert!(err.is_config());
    }
}
