//! Disjunction (OR) query.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::{Query, write_joined};
use crate::search::searcher::Searcher;
use crate::search::union::union_of;
use crate::segment::reader::Reader;

/// A query matching documents that match any child.
///
/// An empty disjunction matches nothing.
#[derive(Debug, Clone)]
pub struct DisjunctionQuery {
    queries: Vec<Query>,
}

impl DisjunctionQuery {
    /// Create a new disjunction query.
    pub fn new(queries: Vec<Query>) -> Query {
        Query::Disjunction(DisjunctionQuery { queries })
    }

    /// Get the child queries.
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        let searchers = self
            .queries
            .iter()
            .map(|query| query.searcher(readers))
            .collect::<Result<Vec<_>>>()?;
        Ok(union_of(searchers))
    }

    pub fn equal(&self, other: &Query) -> bool {
        if let [only] = self.queries.as_slice() {
            return only.equal(other);
        }
        match normalize(other) {
            Query::Disjunction(inner) => {
                self.queries.len() == inner.queries.len()
                    && self
                        .queries
                        .iter()
                        .zip(&inner.queries)
                        .all(|(a, b)| a.equal(b))
            }
            _ => false,
        }
    }
}

impl fmt::Display for DisjunctionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disjunction(")?;
        write_joined(f, &self.queries)?;
        f.write_str(")")
    }
}
