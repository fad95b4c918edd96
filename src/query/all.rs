//! Query matching every document.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::Query;
use crate::search::negation::universe;
use crate::search::searcher::Searcher;
use crate::segment::reader::Reader;

/// A query matching every document in the readers' universe.
#[derive(Debug, Clone, Default)]
pub struct AllQuery;

impl AllQuery {
    /// Create a new all query.
    pub fn new() -> Query {
        Query::All(AllQuery)
    }

    /// Searcher over every document in `readers`.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        universe(readers)
    }

    /// Whether `other` is also an all query.
    pub fn equal(&self, other: &Query) -> bool {
        matches!(normalize(other), Query::All(_))
    }
}

impl fmt::Display for AllQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("all()")
    }
}
