//! Individual entity model
//!
//! [`IndividualNode`] is a view over an `INDI` record paired with the
//! document it belongs to. Name and life events are read from its children;
//! relations are resolved through the family records it points at.

use crate::models::date::Date;
use crate::models::document::Document;
use crate::models::event::EventNode;
use crate::models::family::FamilyNode;
use crate::models::name::{Name, NameNode};
use crate::models::node::{Node, Record};
use crate::models::tag::Tag;
use smallvec::SmallVec;
use std::fmt;

/// Relatives one hop away from an individual
#[derive(Debug, Clone, Default)]
pub struct Relations<'a> {
    /// Husbands and wives of the families this individual is a child of
    pub parents: SmallVec<[IndividualNode<'a>; 2]>,
    /// Partners in the families this individual is a spouse in
    pub spouses: SmallVec<[IndividualNode<'a>; 2]>,
    /// Children of the families this individual is a spouse in
    pub children: SmallVec<[IndividualNode<'a>; 4]>,
}

/// View over a person record
#[derive(Clone, Copy)]
pub struct IndividualNode<'a> {
    document: &'a Document,
    node: &'a Node,
}

impl<'a> IndividualNode<'a> {
    /// Pair a person record with its document
    #[must_use]
    pub const fn new(document: &'a Document, node: &'a Node) -> Self {
        Self { document, node }
    }

    /// The owning document
    #[must_use]
    pub const fn document(&self) -> &'a Document {
        self.document
    }

    /// Whether both views refer to the very same record
    #[must_use]
    pub fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self.node, other.node)
    }

    /// The first `NAME` record, if any
    #[must_use]
    pub fn name_node(&self) -> Option<NameNode<'a>> {
        self.node.first_child(&Tag::Name).map(NameNode::new)
    }

    /// Parsed primary name. Individuals without a `NAME` get an empty name.
    #[must_use]
    pub fn name(&self) -> Name {
        self.name_node().map(|n| n.name()).unwrap_or_default()
    }

    /// Title of the primary name
    #[must_use]
    pub fn title(&self) -> String {
        self.name().title
    }

    /// Name prefix of the primary name
    #[must_use]
    pub fn prefix(&self) -> String {
        self.name().prefix
    }

    /// Given names of the primary name
    #[must_use]
    pub fn given_name(&self) -> String {
        self.name().given_name
    }

    /// Surname prefix of the primary name
    #[must_use]
    pub fn surname_prefix(&self) -> String {
        self.name().surname_prefix
    }

    /// Surname of the primary name
    #[must_use]
    pub fn surname(&self) -> String {
        self.name().surname
    }

    /// Suffix of the primary name
    #[must_use]
    pub fn suffix(&self) -> String {
        self.name().suffix
    }

    /// Recorded sex code (`M`, `F`, `U`, ...)
    #[must_use]
    pub fn sex(&self) -> Option<&'a str> {
        self.node
            .child_value(&Tag::Sex)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn event(&self, tag: &Tag) -> Option<EventNode<'a>> {
        self.node.first_child(tag).map(EventNode::new)
    }

    /// First birth event
    #[must_use]
    pub fn birth(&self) -> Option<EventNode<'a>> {
        self.event(&Tag::Birth)
    }

    /// First death event
    #[must_use]
    pub fn death(&self) -> Option<EventNode<'a>> {
        self.event(&Tag::Death)
    }

    /// Date of the first birth event
    #[must_use]
    pub fn birth_date(&self) -> Option<Date> {
        self.birth().and_then(|e| e.date())
    }

    /// Place of the first birth event
    #[must_use]
    pub fn birth_place(&self) -> Option<String> {
        self.birth().and_then(|e| e.place())
    }

    /// Date of the first death event
    #[must_use]
    pub fn death_date(&self) -> Option<Date> {
        self.death().and_then(|e| e.date())
    }

    /// Place of the first death event
    #[must_use]
    pub fn death_place(&self) -> Option<String> {
        self.death().and_then(|e| e.place())
    }

    fn linked_families(&self, tag: &Tag) -> Vec<FamilyNode<'a>> {
        self.node
            .children_with_tag(tag)
            .filter_map(Node::value_pointer)
            .filter_map(|pointer| self.document.resolve_family(pointer))
            .collect()
    }

    /// Families this individual is a child of
    #[must_use]
    pub fn families_as_child(&self) -> Vec<FamilyNode<'a>> {
        self.linked_families(&Tag::FamilyChild)
    }

    /// Families this individual is a spouse in
    #[must_use]
    pub fn families_as_spouse(&self) -> Vec<FamilyNode<'a>> {
        self.linked_families(&Tag::FamilySpouse)
    }

    /// Parents, spouses and children. Each relative appears once, in the
    /// order the family links list them. Dangling links are skipped.
    #[must_use]
    pub fn relations(&self) -> Relations<'a> {
        let mut relations = Relations::default();

        for family in self.families_as_child() {
            for parent in family.partners() {
                push_unique(&mut relations.parents, parent);
            }
        }

        for family in self.families_as_spouse() {
            for partner in family.partners() {
                if !partner.is_same(self) {
                    push_unique(&mut relations.spouses, partner);
                }
            }
            for child in family.child_individuals() {
                push_unique(&mut relations.children, child);
            }
        }

        relations
    }

    /// Parents of this individual
    #[must_use]
    pub fn parents(&self) -> SmallVec<[IndividualNode<'a>; 2]> {
        self.relations().parents
    }

    /// Spouses of this individual
    #[must_use]
    pub fn spouses(&self) -> SmallVec<[IndividualNode<'a>; 2]> {
        self.relations().spouses
    }

    /// Children of this individual
    #[must_use]
    pub fn child_individuals(&self) -> SmallVec<[IndividualNode<'a>; 4]> {
        self.relations().children
    }
}

fn push_unique<'a, A>(list: &mut SmallVec<A>, individual: IndividualNode<'a>)
where
    A: smallvec::Array<Item = IndividualNode<'a>>,
{
    if !list.iter().any(|existing| existing.is_same(&individual)) {
        list.push(individual);
    }
}

impl Record for IndividualNode<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    /// Full name, or the pointer when the record has no name
    fn text(&self) -> String {
        let name = self.name().full_name();
        if name.is_empty() {
            self.pointer().map(|p| format!("@{p}@")).unwrap_or_default()
        } else {
            name
        }
    }
}

impl fmt::Debug for IndividualNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndividualNode")
            .field("pointer", &self.pointer())
            .field("name", &self.text())
            .finish()
    }
}

impl fmt::Display for IndividualNode<'_> {
    /// `Jane Doe (b. 3 Mar 1803   d. 14 Jun 1877)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())?;
        let birth = self.birth_date().map(|d| format!("b. {d}"));
        let death = self.death_date().map(|d| format!("d. {d}"));
        let events: Vec<String> = [birth, death].into_iter().flatten().collect();
        if !events.is_empty() {
            write!(f, " ({})", events.join("   "))?;
        }
        Ok(())
    }
}
