//! Algorithm implementations
//!
//! This module contains the record-linkage engine used to compare two
//! genealogical documents.

pub mod matching;
