//! Searchers: lazy, ascending cursors over matching documents.
//!
//! Every query compiles into a tree of searchers. Leaves come from segment
//! readers (postings and universes); inner nodes combine them.

pub mod conjunction;
pub mod negation;
pub mod postings;
pub mod searcher;
pub mod union;

pub use self::conjunction::ConjunctionSearcher;
pub use self::negation::{NegationSearcher, universe};
pub use self::postings::{PostingsSearcher, RangeSearcher};
pub use self::searcher::{EmptySearcher, Searcher, collect_docs};
pub use self::union::{UnionSearcher, union_of};
