//! Term query implementation for exact term matching.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::{Query, searcher_per_reader};
use crate::search::searcher::Searcher;
use crate::segment::reader::Reader;

/// A query that matches documents containing a specific term.
///
/// The term is matched byte for byte; no analysis is applied.
#[derive(Debug, Clone)]
pub struct TermQuery {
    /// The field to search in.
    field: Vec<u8>,
    /// The term to search for.
    term: Vec<u8>,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new<F, T>(field: F, term: T) -> Query
    where
        F: Into<Vec<u8>>,
        T: Into<Vec<u8>>,
    {
        Query::Term(TermQuery {
            field: field.into(),
            term: term.into(),
        })
    }

    /// Get the field name.
    pub fn field(&self) -> &[u8] {
        &self.field
    }

    /// Get the term.
    pub fn term(&self) -> &[u8] {
        &self.term
    }

    /// Searcher over documents containing the term, across `readers`.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        searcher_per_reader(readers, |reader| reader.match_term(&self.field, &self.term))
    }

    /// Whether `other` is a term query for the same field and term.
    pub fn equal(&self, other: &Query) -> bool {
        match normalize(other) {
            Query::Term(inner) => self.field == inner.field && self.term == inner.term,
            _ => false,
        }
    }
}

impl fmt::Display for TermQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "term({}, {})",
            String::from_utf8_lossy(&self.field),
            String::from_utf8_lossy(&self.term)
        )
    }
}
