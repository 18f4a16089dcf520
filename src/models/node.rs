//! Record tree
//!
//! A [`Node`] is one GEDCOM line together with its nested sub-records. Every
//! typed view over a node ([`IndividualNode`], [`FamilyNode`], [`NameNode`],
//! [`EventNode`]) shares the [`Record`] contract and only adds accessors.

use crate::models::document::Document;
use crate::models::event::EventNode;
use crate::models::family::FamilyNode;
use crate::models::individual::IndividualNode;
use crate::models::name::NameNode;
use crate::models::tag::Tag;
use serde::Serialize;
use smallvec::SmallVec;

/// A single tagged record and its ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

/// The capability shared by every node kind
pub trait Record {
    /// The underlying tree node
    fn node(&self) -> &Node;

    /// Record type
    fn tag(&self) -> &Tag {
        &self.node().tag
    }

    /// Cross-reference id, without the surrounding `@`
    fn pointer(&self) -> Option<&str> {
        self.node().pointer.as_deref()
    }

    /// Raw value, possibly empty
    fn value(&self) -> &str {
        &self.node().value
    }

    /// Ordered sub-records
    fn children(&self) -> &[Node] {
        &self.node().children
    }

    /// Human-readable rendering
    fn text(&self) -> String {
        normalize_whitespace(self.value())
    }
}

impl Record for Node {
    fn node(&self) -> &Node {
        self
    }
}

/// Closed set of node kinds. Obtained from [`Node::kind`].
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// Person record
    Individual(IndividualNode<'a>),
    /// Family record
    Family(FamilyNode<'a>),
    /// Name record
    Name(NameNode<'a>),
    /// Life event such as a birth or death
    Event(EventNode<'a>),
    /// Anything else
    Generic(&'a Node),
}

impl Node {
    /// Create a node without pointer or children
    pub fn new(tag: impl Into<Tag>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            pointer: None,
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Set the cross-reference id. Surrounding `@` are stripped; an empty
    /// pointer clears it.
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl AsRef<str>) -> Self {
        let pointer = strip_pointer(pointer.as_ref());
        self.pointer = (!pointer.is_empty()).then(|| pointer.to_string());
        self
    }

    /// Replace the children
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Append a child
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Build a person record
    #[must_use]
    pub fn individual(pointer: &str, children: Vec<Self>) -> Self {
        Self::new(Tag::Individual, "").with_pointer(pointer).with_children(children)
    }

    /// Build a family record
    #[must_use]
    pub fn family(pointer: &str, children: Vec<Self>) -> Self {
        Self::new(Tag::Family, "").with_pointer(pointer).with_children(children)
    }

    /// Build a name record
    #[must_use]
    pub fn name(value: &str, overrides: Vec<Self>) -> Self {
        Self::new(Tag::Name, value).with_children(overrides)
    }

    /// Build an event with an optional date and place
    #[must_use]
    pub fn event(tag: Tag, date: Option<&str>, place: Option<&str>) -> Self {
        let mut event = Self::new(tag, "");
        if let Some(date) = date {
            event.children.push(Self::new(Tag::Date, date));
        }
        if let Some(place) = place {
            event.children.push(Self::new(Tag::Place, place));
        }
        event
    }

    /// Build a link whose value is a pointer to another record
    #[must_use]
    pub fn link(tag: Tag, target: &str) -> Self {
        Self::new(tag, format!("@{}@", strip_pointer(target)))
    }

    pub(crate) fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }

    /// First direct child with the given tag
    #[must_use]
    pub fn first_child(&self, tag: &Tag) -> Option<&Self> {
        self.children.iter().find(|child| &child.tag == tag)
    }

    /// Direct children with the given tag, in order
    pub fn children_with_tag<'a>(&'a self, tag: &'a Tag) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| &child.tag == tag)
    }

    /// Value of the first direct child with the given tag
    #[must_use]
    pub fn child_value(&self, tag: &Tag) -> Option<&str> {
        self.first_child(tag).map(|child| child.value.as_str())
    }

    /// The value interpreted as a pointer (`@F1@` → `F1`), if it looks like one
    #[must_use]
    pub fn value_pointer(&self) -> Option<&str> {
        let value = self.value.trim();
        (value.len() > 2 && value.starts_with('@') && value.ends_with('@'))
            .then(|| strip_pointer(value))
    }

    /// Pre-order iterator over this node and all of its descendants
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: SmallVec::from_elem(self, 1),
        }
    }

    /// Typed view of this node. Views that need pointer resolution borrow
    /// the owning document.
    #[must_use]
    pub fn kind<'a>(&'a self, document: &'a Document) -> NodeKind<'a> {
        match self.tag {
            Tag::Individual => NodeKind::Individual(IndividualNode::new(document, self)),
            Tag::Family => NodeKind::Family(FamilyNode::new(document, self)),
            Tag::Name => NodeKind::Name(NameNode::new(self)),
            _ if EventNode::is_event_tag(&self.tag) => NodeKind::Event(EventNode::new(self)),
            _ => NodeKind::Generic(self),
        }
    }
}

/// Pre-order traversal returned by [`Node::walk`]
#[derive(Debug)]
pub struct Walk<'a> {
    stack: SmallVec<[&'a Node; 16]>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Strip the `@` delimiters from a pointer
#[must_use]
pub fn strip_pointer(pointer: &str) -> &str {
    pointer.trim().trim_matches('@')
}

/// Collapse runs of whitespace into a single space and trim the result
#[must_use]
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
