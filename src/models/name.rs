//! Name parsing
//!
//! A GEDCOM name value looks like `Given Names /Surname/ Suffix`. Structured
//! override children (`GIVN`, `SURN`, `SPFX`, `NPFX`, `NSFX`, `TITL`) take
//! precedence over whatever the free text says.
//!
//! Malformed input is preserved rather than repaired: with a single slash the
//! slash and everything after it become the suffix.

use crate::models::node::{Node, Record, normalize_whitespace};
use crate::models::tag::Tag;
use serde::Serialize;

/// Structured components of a personal name
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Name {
    /// Title such as "Grand Duke"
    pub title: String,
    /// Name prefix such as "Dr"
    pub prefix: String,
    /// Given names
    pub given_name: String,
    /// Surname prefix such as "van"
    pub surname_prefix: String,
    /// Surname
    pub surname: String,
    /// Suffix such as "Jr."
    pub suffix: String,
}

/// Free-text regions of a raw name value, before normalization
struct Regions<'a> {
    given: &'a str,
    surname: &'a str,
    suffix: &'a str,
}

impl<'a> Regions<'a> {
    fn split(raw: &'a str) -> Self {
        let Some(first) = raw.find('/') else {
            return Self {
                given: raw,
                surname: "",
                suffix: "",
            };
        };

        match raw[first + 1..].find('/') {
            Some(offset) => {
                let second = first + 1 + offset;
                Self {
                    given: &raw[..first],
                    surname: &raw[first + 1..second],
                    suffix: &raw[second + 1..],
                }
            }
            None => Self {
                given: &raw[..first],
                surname: "",
                suffix: &raw[first..],
            },
        }
    }
}

impl Name {
    /// Parse a raw name value with optional override children.
    ///
    /// Pure: the same inputs always give the same name. Only children tagged
    /// as name parts are consulted; the first child per tag wins.
    #[must_use]
    pub fn parse(raw: &str, overrides: &[Node]) -> Self {
        let regions = Regions::split(raw);
        let pick = |tag: Tag, fallback: &str| -> String {
            overrides
                .iter()
                .find(|child| child.tag() == &tag)
                .map_or_else(|| normalize_whitespace(fallback), |child| {
                    normalize_whitespace(child.value())
                })
        };

        Self {
            title: pick(Tag::Title, ""),
            prefix: pick(Tag::NamePrefix, ""),
            given_name: pick(Tag::GivenName, regions.given),
            surname_prefix: pick(Tag::SurnamePrefix, ""),
            surname: pick(Tag::Surname, regions.surname),
            suffix: pick(Tag::NameSuffix, regions.suffix),
        }
    }

    /// Whether every component is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts().all(str::is_empty)
    }

    /// All components in display order
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.prefix.as_str(),
            self.given_name.as_str(),
            self.surname_prefix.as_str(),
            self.surname.as_str(),
            self.suffix.as_str(),
        ]
        .into_iter()
    }

    /// Rendered name with empty components skipped
    #[must_use]
    pub fn full_name(&self) -> String {
        self.parts().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
    }
}

/// View over a `NAME` record
#[derive(Debug, Clone, Copy)]
pub struct NameNode<'a> {
    node: &'a Node,
}

impl<'a> NameNode<'a> {
    /// Wrap a node. The caller is responsible for the tag being `NAME`.
    #[must_use]
    pub const fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// Parsed components
    #[must_use]
    pub fn name(&self) -> Name {
        Name::parse(self.node.value(), self.node.children())
    }

    /// Title such as "Grand Duke"
    #[must_use]
    pub fn title(&self) -> String {
        self.name().title
    }

    /// Name prefix
    #[must_use]
    pub fn prefix(&self) -> String {
        self.name().prefix
    }

    /// Given names
    #[must_use]
    pub fn given_name(&self) -> String {
        self.name().given_name
    }

    /// Surname prefix
    #[must_use]
    pub fn surname_prefix(&self) -> String {
        self.name().surname_prefix
    }

    /// Surname
    #[must_use]
    pub fn surname(&self) -> String {
        self.name().surname
    }

    /// Name suffix
    #[must_use]
    pub fn suffix(&self) -> String {
        self.name().suffix
    }
}

impl Record for NameNode<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    fn text(&self) -> String {
        self.name().full_name()
    }
}
