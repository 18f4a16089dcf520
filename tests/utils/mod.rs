use gedcom_diff::{Document, Node, Tag};

/// Build a person record with an optional name, birth date and death date
#[must_use]
pub fn individual(pointer: &str, name: &str, birth: &str, death: &str) -> Node {
    let mut children = Vec::new();

    if !name.is_empty() {
        children.push(Node::name(name, Vec::new()));
    }

    if !birth.is_empty() {
        children.push(Node::event(Tag::Birth, Some(birth), None));
    }

    if !death.is_empty() {
        children.push(Node::event(Tag::Death, Some(death), None));
    }

    Node::individual(pointer, children)
}

#[must_use]
pub fn elliot() -> Node {
    individual("P1", "Elliot /Chance/", "4 Jan 1843", "17 Mar 1907")
}

#[must_use]
pub fn john() -> Node {
    individual("P2", "John /Smith/", "4 Jan 1803", "17 Mar 1877")
}

#[must_use]
pub fn jane() -> Node {
    individual("P3", "Jane /Doe/", "3 Mar 1803", "14 June 1877")
}

/// Left side of the end-to-end scenario: Jane and Elliot
#[must_use]
pub fn left_document() -> Document {
    Document::from(vec![jane(), elliot()])
}

/// Right side of the end-to-end scenario: Jane and John
#[must_use]
pub fn right_document() -> Document {
    Document::from(vec![jane(), john()])
}

/// Two parents and one child linked through a family record
#[must_use]
pub fn family_document(child_name: &str, child_birth: &str) -> Document {
    let father = individual("F", "Adam /Smith/", "1 Jan 1800", "")
        .with_child(Node::link(Tag::FamilySpouse, "FAM1"));
    let mother = individual("M", "Eve /Jones/", "2 Feb 1802", "")
        .with_child(Node::link(Tag::FamilySpouse, "FAM1"));
    let child = individual("C", child_name, child_birth, "")
        .with_child(Node::link(Tag::FamilyChild, "FAM1"));

    let family = Node::family(
        "FAM1",
        vec![
            Node::link(Tag::Husband, "F"),
            Node::link(Tag::Wife, "M"),
            Node::link(Tag::Child, "C"),
        ],
    );

    Document::from(vec![father, mother, child, family])
}
