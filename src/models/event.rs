//! Life events
//!
//! Births, deaths and the other dated/placed events share one shape: an
//! event record with `DATE` and `PLAC` children.

use crate::models::date::Date;
use crate::models::node::{Node, Record, normalize_whitespace};
use crate::models::tag::Tag;

/// View over an event record such as `BIRT` or `DEAT`
#[derive(Debug, Clone, Copy)]
pub struct EventNode<'a> {
    node: &'a Node,
}

impl<'a> EventNode<'a> {
    /// Wrap a node
    #[must_use]
    pub const fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// Tags treated as events
    #[must_use]
    pub const fn is_event_tag(tag: &Tag) -> bool {
        matches!(
            tag,
            Tag::Birth
                | Tag::Death
                | Tag::Baptism
                | Tag::Christening
                | Tag::Burial
                | Tag::Cremation
                | Tag::Marriage
                | Tag::Divorce
                | Tag::Engagement
                | Tag::Adoption
                | Tag::Census
                | Tag::Residence
                | Tag::Emigration
                | Tag::Immigration
                | Tag::Naturalization
                | Tag::Probate
                | Tag::Will
                | Tag::Graduation
                | Tag::Retirement
                | Tag::Event
        )
    }

    /// Raw value of the first `DATE` child
    #[must_use]
    pub fn date_value(&self) -> Option<&'a str> {
        self.node
            .child_value(&Tag::Date)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Parsed date of the first `DATE` child, if it can be understood
    #[must_use]
    pub fn date(&self) -> Option<Date> {
        self.date_value().and_then(Date::parse)
    }

    /// Normalized value of the first `PLAC` child
    #[must_use]
    pub fn place(&self) -> Option<String> {
        self.node
            .child_value(&Tag::Place)
            .map(normalize_whitespace)
            .filter(|v| !v.is_empty())
    }
}

impl Record for EventNode<'_> {
    fn node(&self) -> &Node {
        self.node
    }

    fn text(&self) -> String {
        let date = self
            .date()
            .map(|d| d.to_string())
            .or_else(|| self.date_value().map(str::to_string));
        [date, self.place()].into_iter().flatten().collect::<Vec<_>>().join(", ")
    }
}
