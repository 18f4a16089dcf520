//! Domain models for genealogical records
//!
//! The record tree ([`Node`], [`Document`]) is generic; the typed views
//! ([`IndividualNode`], [`FamilyNode`], [`NameNode`], [`EventNode`]) add
//! derived accessors on top of it without changing how the tree is walked.

pub mod date;
pub mod document;
pub mod event;
pub mod family;
pub mod individual;
pub mod name;
pub mod node;
pub mod tag;

// Re-export commonly used types
pub use date::{Date, DateQualifier};
pub use document::Document;
pub use event::EventNode;
pub use family::FamilyNode;
pub use individual::{IndividualNode, Relations};
pub use name::{Name, NameNode};
pub use node::{Node, NodeKind, Record};
pub use tag::Tag;
