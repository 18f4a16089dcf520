#[cfg(test)]
mod tests {
    use gedcom_diff::{Name, NameNode, Node, Record, Tag};

    /// Expected components: title, prefix, given, surname prefix, surname, suffix
    type Expected = [&'static str; 6];

    fn check(node: &Node, expected: Expected) {
        let view = NameNode::new(node);
        let actual = [
            view.title(),
            view.prefix(),
            view.given_name(),
            view.surname_prefix(),
            view.surname(),
            view.suffix(),
        ];
        assert_eq!(actual, expected.map(str::to_string), "parsing {:?}", node.value());
    }

    fn plain(value: &str) -> Node {
        Node::name(value, Vec::new())
    }

    #[test]
    fn test_free_text_names() {
        let cases: [(&str, Expected); 9] = [
            ("", ["", "", "", "", "", ""]),
            ("/Double  Last/", ["", "", "", "", "Double Last", ""]),
            ("//", ["", "", "", "", "", ""]),
            ("a / b", ["", "", "a", "", "", "/ b"]),
            ("Double First", ["", "", "Double First", "", "", ""]),
            ("First /Last/", ["", "", "First", "", "Last", ""]),
            ("First   Middle /Last/", ["", "", "First Middle", "", "Last", ""]),
            ("First /Last/  Suffix ", ["", "", "First", "", "Last", "Suffix"]),
            ("   /Last/ Suffix", ["", "", "", "", "Last", "Suffix"]),
        ];

        for (value, expected) in cases {
            check(&plain(value), expected);
        }
    }

    #[test]
    fn test_given_name_override_first_wins() {
        let node = Node::name(
            "First /Last/ II",
            vec![
                Node::new(Tag::GivenName, " Other  Name "),
                Node::new(Tag::GivenName, "Uh-oh"),
            ],
        );
        check(&node, ["", "", "Other Name", "", "Last", "II"]);
    }

    #[test]
    fn test_surname_override_first_wins() {
        let node = Node::name(
            "First /Last/ II",
            vec![
                Node::new(Tag::Surname, " Other  name "),
                Node::new(Tag::Surname, "uh-oh"),
            ],
        );
        check(&node, ["", "", "First", "", "Other name", "II"]);
    }

    #[test]
    fn test_prefix_override() {
        let node = Node::name(
            "First /Last/ Esq.",
            vec![
                Node::new(Tag::NamePrefix, " Mr "),
                Node::new(Tag::NamePrefix, "Dr"),
            ],
        );
        check(&node, ["", "Mr", "First", "", "Last", "Esq."]);
    }

    #[test]
    fn test_suffix_override_with_mixed_tags() {
        let node = Node::name(
            "First /Last/ Suffix",
            vec![
                Node::new(Tag::NameSuffix, " Esq. "),
                Node::new(Tag::NameSuffix, "Dr"),
                Node::new(Tag::NamePrefix, "Sir"),
            ],
        );
        check(&node, ["", "Sir", "First", "", "Last", "Esq."]);
    }

    #[test]
    fn test_surname_prefix_override() {
        let node = Node::name(
            "First /Last/ Esq.",
            vec![
                Node::new(Tag::SurnamePrefix, " Foo "),
                Node::new(Tag::SurnamePrefix, "Bar"),
            ],
        );
        check(&node, ["", "", "First", "Foo", "Last", "Esq."]);
    }

    #[test]
    fn test_title_override() {
        let node = Node::name(
            "First /Last/ Esq.",
            vec![
                Node::new(Tag::Title, " Grand  Duke "),
                Node::new(Tag::Title, "Nobody"),
            ],
        );
        check(&node, ["Grand Duke", "", "First", "", "Last", "Esq."]);
    }

    #[test]
    fn test_unrelated_children_are_ignored() {
        let node = Node::name("First /Last/", vec![Node::new(Tag::Note, "not a name part")]);
        check(&node, ["", "", "First", "", "Last", ""]);
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let name = Name::parse(
            "John /Smith/ Jr.",
            &[Node::new(Tag::Title, "Sir"), Node::new(Tag::SurnamePrefix, "van")],
        );
        assert_eq!(name.full_name(), "Sir John van Smith Jr.");
        assert!(Name::parse("//", &[]).is_empty());
    }
}
