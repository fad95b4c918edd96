//! Conjunction (AND) query.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::{Query, write_joined};
use crate::search::conjunction::ConjunctionSearcher;
use crate::search::negation::NegationSearcher;
use crate::search::searcher::{EmptySearcher, Searcher};
use crate::search::union::union_of;
use crate::segment::reader::Reader;

/// A query matching documents that match every child.
///
/// An empty conjunction matches nothing. A conjunction with a single child
/// is transparent and compares equal to that child.
#[derive(Debug, Clone)]
pub struct ConjunctionQuery {
    queries: Vec<Query>,
}

impl ConjunctionQuery {
    /// Create a new conjunction query.
    pub fn new(queries: Vec<Query>) -> Query {
        Query::Conjunction(ConjunctionQuery { queries })
    }

    /// Get the child queries.
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Build the intersection searcher over `readers`.
    ///
    /// Negated children are not enumerated over the universe one by one:
    /// they are subtracted from the intersection of the positive children
    /// instead. Only a conjunction made solely of negations walks the
    /// universe.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        let mut positive = Vec::new();
        let mut excluded = Vec::new();
        for query in &self.queries {
            match normalize(query) {
                Query::Negation(negation) => excluded.push(negation.query().searcher(readers)?),
                other => positive.push(other.searcher(readers)?),
            }
        }

        debug!(
            "conjunction of {} positive and {} excluded clauses",
            positive.len(),
            excluded.len()
        );

        let searcher: Box<dyn Searcher> = match (positive.is_empty(), excluded.is_empty()) {
            (true, true) => Box::new(EmptySearcher::new()),
            (false, true) => intersect(positive),
            (true, false) => Box::new(NegationSearcher::new(readers, union_of(excluded))?),
            (false, false) => Box::new(NegationSearcher::with_universe(
                intersect(positive),
                union_of(excluded),
            )),
        };
        Ok(searcher)
    }

    /// Whether `other`, once normalized, is a conjunction with pairwise
    /// equal children in the same order.
    pub fn equal(&self, other: &Query) -> bool {
        if let [only] = self.queries.as_slice() {
            return only.equal(other);
        }
        match normalize(other) {
            Query::Conjunction(inner) => {
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

fn intersect(mut searchers: Vec<Box<dyn Searcher>>) -> Box<dyn Searcher> {
    if searchers.len() == 1 {
        if let Some(only) = searchers.pop() {
            return only;
        }
    }
    Box::new(ConjunctionSearcher::new(searchers))
}

impl fmt::Display for ConjunctionQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("conjunction(")?;
        write_joined(f, &self.queries)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::searcher::collect_docs;
    use crate::segment::document::Document;
    use crate::segment::memory::MemSegment;

    fn readers() -> Vec<Arc<dyn Reader>> {
        let mut builder = MemSegment::builder(0);
        for (city, country) in [
            ("paris", "france"),
            ("lyon", "france"),
            ("berlin", "germany"),
            ("paris", "usa"),
        ] {
            builder
                .insert(
                    Document::builder()
                        .add_field("city", city)
                        .add_field("country", country)
                        .build(),
                )
                .unwrap();
        }
        vec![Arc::new(builder.build())]
    }

    fn docs(query: &Query) -> Vec<u64> {
        let mut searcher = query.searcher(&readers()).unwrap();
        collect_docs(&mut searcher).unwrap()
    }

    #[test]
    fn test_conjunction_intersects() {
        let query = ConjunctionQuery::new(vec![
            Query::term("city", "paris"),
            Query::term("country", "france"),
        ]);
        assert_eq!(docs(&query), vec![0]);
    }

    #[test]
    fn test_conjunction_subtracts_negations() {
        let query = ConjunctionQuery::new(vec![
            Query::term("city", "paris"),
            Query::negation(Query::term("country", "france")),
        ]);
        assert_eq!(docs(&query), vec![3]);
    }

    #[test]
    fn test_conjunction_of_only_negations() {
        let query = ConjunctionQuery::new(vec![
            Query::negation(Query::term("city", "paris")),
            Query::disjunction(vec![Query::negation(Query::term("city", "lyon"))]),
        ]);
        assert_eq!(docs(&query), vec![2]);
    }

    #[test]
    fn test_empty_conjunction_matches_nothing() {
        assert!(docs(&ConjunctionQuery::new(vec![])).is_empty());
    }

    #[test]
    fn test_conjunction_equality_is_ordered() {
        let ab = ConjunctionQuery::new(vec![Query::field("a"), Query::field("b")]);
        let ba = ConjunctionQuery::new(vec![Query::field("b"), Query::field("a")]);
        let ab_wrapped = ConjunctionQuery::new(vec![
            Query::disjunction(vec![Query::field("a")]),
            Query::field("b"),
        ]);

        assert_eq!(ab, ab_wrapped);
        assert_ne!(ab, ba);
        assert_ne!(ab, Query::disjunction(vec![Query::field("a"), Query::field("b")]));
    }
}
