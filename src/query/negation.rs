//! Negation query: the complement of a child query.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::Query;
use crate::search::negation::NegationSearcher;
use crate::search::searcher::Searcher;
use crate::segment::reader::Reader;

/// A query matching every document of the reader set that its child does
/// not match.
///
/// The complement is taken against the readers passed to
/// [`searcher`](NegationQuery::searcher), never a cached universe.
#[derive(Debug, Clone)]
pub struct NegationQuery {
    query: Box<Query>,
}

impl NegationQuery {
    /// Create a new negation query.
    pub fn new(query: Query) -> Query {
        Query::Negation(NegationQuery {
            query: Box::new(query),
        })
    }

    /// Get the negated query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Build the complement searcher over `readers`.
    ///
    /// Fails if the child's searcher cannot be built.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        let child = self.query.searcher(readers)?;
        Ok(Box::new(NegationSearcher::new(readers, child)?))
    }

    /// Whether `other`, once normalized, is a negation of an equal query.
    pub fn equal(&self, other: &Query) -> bool {
        match normalize(other) {
            Query::Negation(inner) => self.query.equal(&inner.query),
            _ => false,
        }
    }
}

impl fmt::Display for NegationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "negation({})", self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::searcher::collect_docs;
    use crate::segment::document::Document;
    use crate::segment::memory::MemSegment;

    fn readers() -> Vec<Arc<dyn Reader>> {
        let mut builder = MemSegment::builder(1);
        for color in ["red", "blue", "red", "blue", "green"] {
            builder
                .insert(Document::builder().add_field("color", color).build())
                .unwrap();
        }
        vec![Arc::new(builder.build())]
    }

    #[test]
    fn test_negation_yields_complement_in_order() {
        let query = NegationQuery::new(Query::term("color", "blue"));
        let mut searcher = query.searcher(&readers()).unwrap();

        assert_eq!(collect_docs(&mut searcher).unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn test_negation_over_no_readers() {
        let query = NegationQuery::new(Query::term("color", "blue"));
        let mut searcher = query.searcher(&[]).unwrap();

        assert!(collect_docs(&mut searcher).unwrap().is_empty());
    }

    #[test]
    fn test_negation_of_all_is_empty() {
        let query = NegationQuery::new(Query::all());
        let mut searcher = query.searcher(&readers()).unwrap();

        assert!(collect_docs(&mut searcher).unwrap().is_empty());
    }

    #[test]
    fn test_negation_display() {
        let query = NegationQuery::new(Query::term("color", "red"));
        assert_eq!(query.to_string(), "negation(term(color, red))");
    }

    #[test]
    fn test_negation_equality() {
        let a = NegationQuery::new(Query::term("color", "red"));
        let b = NegationQuery::new(Query::conjunction(vec![Query::term("color", "red")]));
        let c = NegationQuery::new(Query::term("color", "blue"));

        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_ne!(a, Query::term("color", "red"));
        // Structural, not semantic.
        assert_ne!(NegationQuery::new(a.clone()), Query::term("color", "red"));
    }

    #[test]
    fn test_wrapped_negation_equals_bare() {
        let bare = NegationQuery::new(Query::field("color"));
        let wrapped = Query::disjunction(vec![bare.clone()]);

        assert_eq!(bare, wrapped);
        assert_eq!(wrapped, bare);
    }
}
