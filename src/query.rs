//! The boolean query algebra.
//!
//! A [`Query`] is an immutable tree built from the constructors on
//! [`Query`] (or the per-variant `new` functions). Calling
//! [`Query::searcher`] compiles it into a [`Searcher`](crate::search::Searcher)
//! over a set of segment readers.

pub mod all;
pub mod conjunction;
pub mod disjunction;
pub mod field;
pub mod negation;
pub mod normalize;
#[allow(clippy::module_inception)]
pub mod query;
pub mod regexp;
pub mod term;

pub use self::all::AllQuery;
pub use self::conjunction::ConjunctionQuery;
pub use self::disjunction::DisjunctionQuery;
pub use self::field::FieldQuery;
pub use self::negation::NegationQuery;
pub use self::normalize::normalize;
pub use self::query::Query;
pub use self::regexp::RegexpQuery;
pub use self::term::TermQuery;
