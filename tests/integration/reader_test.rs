#[cfg(test)]
mod tests {
    use std::io::Write;

    use gedcom_diff::algorithm::matching::{FilterMode, SimilarityWeights, SortMode};
    use gedcom_diff::{GedcomError, Record, compare, parse_document, read_document};
    use tempfile::NamedTempFile;

    const LEFT: &str = "\
0 HEAD
1 GEDC
2 VERS 5.5.1
0 @P3@ INDI
1 NAME Jane /Doe/
1 BIRT
2 DATE 3 MAR 1803
2 PLAC Boston,
3 CONC  Massachusetts
1 DEAT
2 DATE 14 JUN 1877
0 @P1@ INDI
1 NAME Elliot /Chance/
1 BIRT
2 DATE 4 JAN 1843
1 DEAT
2 DATE 17 MAR 1907
0 TRLR
";

    const RIGHT: &str = "\
0 HEAD
0 @X1@ INDI
1 NAME Jane /Doe/
1 BIRT
2 DATE 3 MAR 1803
1 DEAT
2 DATE 14 JUN 1877
0 @X2@ INDI
1 NAME John /Smith/
1 NOTE First line
2 CONT second line
0 TRLR
";

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_structure_and_continuations() {
        let document = parse_document(LEFT).unwrap();
        assert_eq!(document.len(), 4);
        assert_eq!(document.individuals().len(), 2);

        let jane = document.individuals()[0];
        assert_eq!(jane.pointer(), Some("P3"));
        assert_eq!(jane.birth_place().as_deref(), Some("Boston, Massachusetts"));
        assert_eq!(jane.birth_date().unwrap().to_string(), "3 Mar 1803");
        assert_eq!(document.places(), ["Boston, Massachusetts"]);

        let right = parse_document(RIGHT).unwrap();
        let john = right.individuals()[1];
        let note = &john.children()[1];
        assert_eq!(note.value(), "First line\nsecond line");
    }

    #[test]
    fn test_read_files_and_compare() {
        let left_file = write_temp(LEFT);
        let right_file = write_temp(RIGHT);

        let left = read_document(left_file.path()).unwrap();
        let right = read_document(right_file.path()).unwrap();

        let result = compare(&left.individuals(), &right.individuals(), SimilarityWeights::default())
            .unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.matched_count(), 1);

        let unmatched: Vec<String> = result
            .view(FilterMode::OnlyUnmatched, SortMode::WrittenName)
            .iter()
            .map(|c| c.written_name())
            .collect();
        assert_eq!(unmatched, ["Elliot Chance", "John Smith"]);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.ged")).unwrap_err();
        assert!(matches!(err, GedcomError::Io(_)));
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_document("0 HEAD\n1 SOUR x\nthree GEDC\n").unwrap_err();
        assert!(matches!(err, GedcomError::Parse { line: 3, .. }));
        assert!(err.to_string().contains("line 3"));
    }
}
