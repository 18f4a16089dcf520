//! Family records
//!
//! A `FAM` record links partners (`HUSB`, `WIFE`) and children (`CHIL`) by
//! pointer.

use crate::models::document::Document;
use crate::models::individual::IndividualNode;
use crate::models::node::{Node, Record};
use crate::models::tag::Tag;

/// View over a family record
#[derive(Debug, Clone, Copy)]
pub struct FamilyNode<'a> {
    document: &'a Document,
    node: &'a Node,
}

impl<'a> FamilyNode<'a> {
    /// Pair a family record with its document
    #[must_use]
    pub const fn new(document: &'a Document, node: &'a Node) -> Self {
        Self { document, node }
    }

    fn linked(&self, tag: &Tag) -> Vec<IndividualNode<'a>> {
        let document = self.document;
        self.node
            .children_with_tag(tag)
            .filter_map(Node::value_pointer)
            .filter_map(|pointer| document.resolve_individual(pointer))
            .collect()
    }

    /// First husband
    #[must_use]
    pub fn husband(&self) -> Option<IndividualNode<'a>> {
        self.linked(&Tag::Husband).into_iter().next()
    }

    /// First wife
    #[must_use]
    pub fn wife(&self) -> Option<IndividualNode<'a>> {
        self.linked(&Tag::Wife).into_iter().next()
    }

    /// Husband then wife, whichever are present
    #[must_use]
    pub fn partners(&self) -> Vec<IndividualNode<'a>> {
        self.husband().into_iter().chain(self.wife()).collect()
    }

    /// Children in the order the family lists them
    #[must_use]
    pub fn child_individuals(&self) -> Vec<IndividualNode<'a>> {
        self.linked(&Tag::Child)
    }
}

impl Record for FamilyNode<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    /// `Husband & Wife`
    fn text(&self) -> String {
        self.partners().iter().map(Record::text).collect::<Vec<_>>().join(" & ")
    }
}
