//! JSON rendering of a record tree
//!
//! Every node becomes an object `{"tag", "ptr", "val", "nodes"}` with empty
//! fields omitted. With `tag_keys` the arrays are folded into objects keyed
//! by tag, which is easier to diff but loses sibling order across tags.

use serde_json::{Map, Value};

use crate::models::{Document, NameNode, Node, Record, Tag};

/// Options for [`transform`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Emit labels such as "Birth" instead of codes such as "BIRT"
    pub pretty_tags: bool,
    /// Omit the `ptr` field
    pub no_pointers: bool,
    /// Key objects by tag instead of emitting arrays
    pub tag_keys: bool,
    /// Render NAME nodes as the full name string, without their parts
    pub string_name: bool,
    /// Tags dropped together with their subtrees
    pub exclude_tags: Vec<Tag>,
    /// Drop every node whose tag is outside the official vocabulary
    pub only_official_tags: bool,
}

impl TransformOptions {
    fn includes(&self, tag: &Tag) -> bool {
        !self.exclude_tags.contains(tag) && (!self.only_official_tags || tag.is_official())
    }

    fn tag_text(&self, tag: &Tag) -> String {
        if self.pretty_tags {
            tag.describe()
        } else {
            tag.code().to_string()
        }
    }
}

/// Render a document as JSON.
///
/// Returns an array of record objects, or a single object keyed by tag when
/// `tag_keys` is set.
#[must_use]
pub fn transform(document: &Document, options: &TransformOptions) -> Value {
    let nodes = transform_nodes(document.nodes(), options);

    if options.tag_keys {
        reduce_tag_keys(nodes)
    } else {
        Value::Array(nodes)
    }
}

fn transform_nodes(nodes: &[Node], options: &TransformOptions) -> Vec<Value> {
    nodes
        .iter()
        .filter(|node| options.includes(node.tag()))
        .map(|node| transform_node(node, options))
        .collect()
}

fn transform_node(node: &Node, options: &TransformOptions) -> Value {
    let mut object = Map::new();
    object.insert("tag".to_string(), Value::String(options.tag_text(node.tag())));

    if let Some(pointer) = node.pointer().filter(|_| !options.no_pointers) {
        object.insert("ptr".to_string(), Value::String(pointer.to_string()));
    }

    if options.string_name && *node.tag() == Tag::Name {
        object.insert("val".to_string(), Value::String(NameNode::new(node).text()));
        return Value::Object(object);
    }

    if !node.value().is_empty() {
        object.insert("val".to_string(), Value::String(node.value().to_string()));
    }

    let children = transform_nodes(node.children(), options);
    if !children.is_empty() {
        object.insert("nodes".to_string(), Value::Array(children));
    }

    Value::Object(object)
}

/// Fold an array of node objects into an object keyed by tag. Repeated tags
/// become arrays; a node with children folds recursively, a leaf collapses to
/// its value.
fn reduce_tag_keys(nodes: Vec<Value>) -> Value {
    let mut keyed = Map::new();

    for node in nodes {
        let Value::Object(mut object) = node else {
            continue;
        };
        let Some(Value::String(tag)) = object.remove("tag") else {
            continue;
        };

        let folded = match object.remove("nodes") {
            Some(Value::Array(children)) => reduce_tag_keys(children),
            _ => object.remove("val").unwrap_or(Value::Null),
        };

        match keyed.get_mut(&tag) {
            Some(Value::Array(existing)) => existing.push(folded),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, folded]);
            }
            None => {
                keyed.insert(tag, folded);
            }
        }
    }

    Value::Object(keyed)
}
