//! The query sum type and its dispatch.

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::error::Result;
use crate::query::all::AllQuery;
use crate::query::conjunction::ConjunctionQuery;
use crate::query::disjunction::DisjunctionQuery;
use crate::query::field::FieldQuery;
use crate::query::negation::NegationQuery;
use crate::query::normalize::normalize;
use crate::query::regexp::RegexpQuery;
use crate::query::term::TermQuery;
use crate::search::searcher::Searcher;
use crate::search::union::union_of;
use crate::segment::reader::Reader;

/// A node of the boolean query algebra.
///
/// Every variant offers the same three operations:
///
/// - [`searcher`](Query::searcher) compiles the node into a cursor over a
///   reader set;
/// - equality ([`Query::equal`], also `==`) compares tree structure after
///   unwrapping transparent single-child nodes on both sides (see
///   [`normalize`]);
/// - `Display` renders the tree, e.g. `negation(term(city, paris))`.
///
/// Structural equality is not semantic equality: `negation(negation(q))`
/// matches the same documents as `q` but is not equal to it.
#[derive(Debug, Clone)]
pub enum Query {
    /// Every document.
    All(AllQuery),
    /// Documents with any value in a field.
    Field(FieldQuery),
    /// Documents with an exact term in a field.
    Term(TermQuery),
    /// Documents with a term in a field matching a regex.
    Regexp(RegexpQuery),
    /// Documents matching every child.
    Conjunction(ConjunctionQuery),
    /// Documents matching any child.
    Disjunction(DisjunctionQuery),
    /// Documents not matching the child.
    Negation(NegationQuery),
}

impl Query {
    /// Query matching every document.
    pub fn all() -> Query {
        AllQuery::new()
    }

    /// Query matching documents with any value in `field`.
    pub fn field<F: Into<Vec<u8>>>(field: F) -> Query {
        FieldQuery::new(field)
    }

    /// Query matching documents with `term` in `field`.
    pub fn term<F: Into<Vec<u8>>, T: Into<Vec<u8>>>(field: F, term: T) -> Query {
        TermQuery::new(field, term)
    }

    /// Query matching documents with a term in `field` that `pattern`
    /// matches in its entirety.
    pub fn regexp<F: Into<Vec<u8>>, P: AsRef<[u8]>>(field: F, pattern: P) -> Result<Query> {
        RegexpQuery::new(field, pattern)
    }

    /// Query matching documents that match every one of `queries`.
    pub fn conjunction(queries: Vec<Query>) -> Query {
        ConjunctionQuery::new(queries)
    }

    /// Query matching documents that match any of `queries`.
    pub fn disjunction(queries: Vec<Query>) -> Query {
        DisjunctionQuery::new(queries)
    }

    /// Query matching documents that `query` does not match.
    pub fn negation(query: Query) -> Query {
        NegationQuery::new(query)
    }

    /// Build a searcher over `readers`.
    ///
    /// Errors from any node or reader abort the whole search; there are no
    /// partial results.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        trace!("building searcher for {self} over {} readers", readers.len());
        match self {
            Query::All(q) => q.searcher(readers),
            Query::Field(q) => q.searcher(readers),
            Query::Term(q) => q.searcher(readers),
            Query::Regexp(q) => q.searcher(readers),
            Query::Conjunction(q) => q.searcher(readers),
            Query::Disjunction(q) => q.searcher(readers),
            Query::Negation(q) => q.searcher(readers),
        }
    }

    /// Structural equality after unwrapping transparent nodes on both sides.
    pub fn equal(&self, other: &Query) -> bool {
        match normalize(self) {
            Query::All(q) => q.equal(other),
            Query::Field(q) => q.equal(other),
            Query::Term(q) => q.equal(other),
            Query::Regexp(q) => q.equal(other),
            Query::Conjunction(q) => q.equal(other),
            Query::Disjunction(q) => q.equal(other),
            Query::Negation(q) => q.equal(other),
        }
    }
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Query {}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::All(q) => q.fmt(f),
            Query::Field(q) => q.fmt(f),
            Query::Term(q) => q.fmt(f),
            Query::Regexp(q) => q.fmt(f),
            Query::Conjunction(q) => q.fmt(f),
            Query::Disjunction(q) => q.fmt(f),
            Query::Negation(q) => q.fmt(f),
        }
    }
}

/// Union the searchers `f` builds for each reader.
pub(crate) fn searcher_per_reader<F>(readers: &[Arc<dyn Reader>], f: F) -> Result<Box<dyn Searcher>>
where
    F: Fn(&dyn Reader) -> Result<Box<dyn Searcher>>,
{
    let searchers = readers
        .iter()
        .map(|reader| f(reader.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(union_of(searchers))
}

/// Write `items` separated by `", "`.
pub(crate) fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Query]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
