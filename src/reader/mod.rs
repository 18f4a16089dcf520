//! Module for reading GEDCOM files into a record tree.
//!
//! Each line has the form `LEVEL [@POINTER@] TAG [VALUE]`. Nesting follows
//! the level numbers; `CONT` and `CONC` lines continue the value of their
//! parent instead of becoming nodes.

use std::path::Path;
use std::time::Instant;

use log::{debug, warn};

use crate::error::util::safe_read_to_string;
use crate::error::{GedcomError, Result};
use crate::models::{Document, Node, Tag};
use crate::utils::logging::{log_operation_complete, log_operation_start};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One physical line split into its fields
#[derive(Debug, PartialEq, Eq)]
struct Line<'a> {
    level: usize,
    pointer: Option<&'a str>,
    tag: &'a str,
    value: &'a str,
}

impl<'a> Line<'a> {
    fn parse(number: usize, text: &'a str) -> Result<Self> {
        let text = text.trim_start();
        let (level, rest) = text.split_once(' ').unwrap_or((text, ""));
        let level = level
            .parse::<usize>()
            .map_err(|_| GedcomError::parse(number, format!("invalid level '{level}'")))?;

        let rest = rest.trim_start();
        let (pointer, rest) = match rest.split_once(' ') {
            Some((first, tail)) if is_pointer(first) => (Some(first), tail.trim_start()),
            None if is_pointer(rest) => (Some(rest), ""),
            _ => (None, rest),
        };

        let (tag, value) = rest.split_once(' ').unwrap_or((rest, ""));
        if tag.is_empty() {
            return Err(GedcomError::parse(number, "missing tag"));
        }

        Ok(Self {
            level,
            pointer,
            tag,
            value,
        })
    }
}

fn is_pointer(token: &str) -> bool {
    token.len() > 2 && token.starts_with('@') && token.ends_with('@')
}

/// Open records, innermost last. The node at position `i` has level `i`.
#[derive(Debug, Default)]
struct TreeBuilder {
    open: Vec<Node>,
    document: Document,
}

impl TreeBuilder {
    /// Close every open node deeper than `level - 1`
    fn close_to(&mut self, level: usize) {
        while self.open.len() > level {
            let Some(node) = self.open.pop() else { break };
            match self.open.last_mut() {
                Some(parent) => parent.children_mut().push(node),
                None => self.document.push(node),
            }
        }
    }

    fn accept(&mut self, number: usize, line: &Line<'_>) -> Result<()> {
        if line.level > self.open.len() {
            return Err(GedcomError::parse(
                number,
                format!(
                    "level {} follows level {}",
                    line.level,
                    self.open.len().saturating_sub(1)
                ),
            ));
        }

        self.close_to(line.level);

        let tag = Tag::from_code(line.tag);
        if matches!(tag, Tag::Continued | Tag::Concatenation) {
            let Some(parent) = self.open.last_mut() else {
                warn!("Line {number}: {} without a parent record, skipped", line.tag);
                return Ok(());
            };
            let value = parent.value_mut();
            if tag == Tag::Continued {
                value.push('\n');
            }
            value.push_str(line.value);
            return Ok(());
        }

        let mut node = Node::new(tag, line.value);
        if let Some(pointer) = line.pointer {
            node = node.with_pointer(pointer);
        }
        self.open.push(node);
        Ok(())
    }

    fn finish(mut self) -> Document {
        self.close_to(0);
        self.document
    }
}

/// Parse GEDCOM text into a document
pub fn parse_document(input: &str) -> Result<Document> {
    let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
    let mut builder = TreeBuilder::default();

    for (index, text) in input.lines().enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        let line = Line::parse(index + 1, text)?;
        builder.accept(index + 1, &line)?;
    }

    let document = builder.finish();
    debug!("Parsed {} top-level records", document.len());
    Ok(document)
}

/// Read and parse a GEDCOM file
pub fn read_document(path: &Path) -> Result<Document> {
    let start = Instant::now();
    log_operation_start("Reading GEDCOM file", path);

    let content = safe_read_to_string(path, "GEDCOM document")?;
    let document = parse_document(&content)?;

    log_operation_complete(
        "read",
        &path.display().to_string(),
        document.len(),
        Some(start.elapsed()),
    );
    Ok(document)
}
