//! Document model
//!
//! A [`Document`] owns the top-level records of one GEDCOM file and a lookup
//! table from pointer to node position. Nodes never point back at their
//! document; views that need pointer resolution borrow the document instead.

use crate::models::family::FamilyNode;
use crate::models::individual::IndividualNode;
use crate::models::node::{Node, Record, strip_pointer};
use crate::models::tag::Tag;
use itertools::Itertools;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Child-index path from the document root to a node
type NodePath = SmallVec<[usize; 4]>;

/// An ordered set of top-level records plus a pointer index
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    pointers: FxHashMap<String, NodePath>,
}

impl Document {
    /// Create a document, indexing every pointer in the given records
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        let mut document = Self::default();
        for node in nodes {
            document.push(node);
        }
        document
    }

    /// Associate a record (and its subtree) with this document.
    ///
    /// Pointers are indexed once here. When a pointer is defined twice the
    /// first definition wins.
    pub fn push(&mut self, node: Node) {
        let mut path = NodePath::new();
        path.push(self.nodes.len());
        index_pointers(&node, &mut path, &mut self.pointers);
        self.nodes.push(node);
    }

    /// Top-level records in document order
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of top-level records
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order iterator over every node in the document
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flat_map(Node::walk)
    }

    /// Resolve a pointer (`F1` or `@F1@`) to its node. Dangling pointers
    /// yield `None`.
    #[must_use]
    pub fn resolve(&self, pointer: &str) -> Option<&Node> {
        let path = self.pointers.get(strip_pointer(pointer))?;
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.nodes.get(*first)?, |node, &i| node.children().get(i))
    }

    /// Every person record, nested or top level, in document order
    #[must_use]
    pub fn individuals(&self) -> Vec<IndividualNode<'_>> {
        self.walk()
            .filter(|node| node.tag() == &Tag::Individual)
            .map(|node| IndividualNode::new(self, node))
            .collect()
    }

    /// Every family record in document order
    #[must_use]
    pub fn families(&self) -> Vec<FamilyNode<'_>> {
        self.walk()
            .filter(|node| node.tag() == &Tag::Family)
            .map(|node| FamilyNode::new(self, node))
            .collect()
    }

    /// Distinct place names in first-seen order
    #[must_use]
    pub fn places(&self) -> Vec<&str> {
        self.walk()
            .filter(|node| node.tag() == &Tag::Place)
            .map(|node| node.value().trim())
            .filter(|place| !place.is_empty())
            .unique()
            .collect()
    }

    /// Resolve a pointer and keep it only if it names a person record
    pub(crate) fn resolve_individual(&self, pointer: &str) -> Option<IndividualNode<'_>> {
        match self.resolve(pointer) {
            Some(node) if node.tag() == &Tag::Individual => Some(IndividualNode::new(self, node)),
            Some(node) => {
                debug!("Pointer @{pointer}@ names a {} record, not an individual", node.tag());
                None
            }
            None => {
                debug!("Dangling individual pointer @{pointer}@");
                None
            }
        }
    }

    /// Resolve a pointer and keep it only if it names a family record
    pub(crate) fn resolve_family(&self, pointer: &str) -> Option<FamilyNode<'_>> {
        match self.resolve(pointer) {
            Some(node) if node.tag() == &Tag::Family => Some(FamilyNode::new(self, node)),
            Some(node) => {
                debug!("Pointer @{pointer}@ names a {} record, not a family", node.tag());
                None
            }
            None => {
                debug!("Dangling family pointer @{pointer}@");
                None
            }
        }
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}

fn index_pointers(node: &Node, path: &mut NodePath, pointers: &mut FxHashMap<String, NodePath>) {
    if let Some(pointer) = node.pointer() {
        if pointers.contains_key(pointer) {
            warn!("Duplicate pointer @{pointer}@ ignored, keeping first definition");
        } else {
            pointers.insert(pointer.to_string(), path.clone());
        }
    }

    for (i, child) in node.children().iter().enumerate() {
        path.push(i);
        index_pointers(child, path, pointers);
        path.pop();
    }
}
