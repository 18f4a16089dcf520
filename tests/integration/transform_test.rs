#[cfg(test)]
mod tests {
    use crate::utils::{jane, left_document};
    use gedcom_diff::{Document, Node, Tag, TransformOptions, transform};
    use serde_json::json;

    #[test]
    fn test_round_trip_shape() {
        let value = transform(&left_document(), &TransformOptions::default());
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["ptr"], "P3");
        assert_eq!(records[0]["nodes"][1]["tag"], "BIRT");
        assert_eq!(records[0]["nodes"][1]["nodes"][0], json!({"tag": "DATE", "val": "3 Mar 1803"}));
    }

    #[test]
    fn test_tag_keys_with_pretty_tags_and_string_names() {
        let document = Document::from(vec![jane()]);
        let options = TransformOptions {
            pretty_tags: true,
            tag_keys: true,
            string_name: true,
            ..TransformOptions::default()
        };

        assert_eq!(
            transform(&document, &options),
            json!({
                "Individual": {
                    "Name": "Jane Doe",
                    "Birth": {"Date": "3 Mar 1803"},
                    "Death": {"Date": "14 June 1877"},
                }
            })
        );
    }

    #[test]
    fn test_excluded_and_unofficial_tags_are_dropped() {
        let document = Document::from(vec![
            jane().with_child(Node::new("_FSFTID", "ABC-123")),
            Node::new(Tag::Trailer, ""),
        ]);
        let options = TransformOptions {
            no_pointers: true,
            only_official_tags: true,
            exclude_tags: vec![Tag::Trailer, Tag::Death],
            ..TransformOptions::default()
        };

        let value = transform(&document, &options);
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].get("ptr").is_none());
        let tags: Vec<&str> = records[0]["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|node| node["tag"].as_str())
            .collect();
        assert_eq!(tags, ["NAME", "BIRT"]);
    }
}
