//! # Loupe
//!
//! Boolean query and search over immutable full-text index segments.
//!
//! ## Features
//!
//! - Composable query algebra: all, field, term, regexp, conjunction,
//!   disjunction and negation
//! - Lazy, ascending document cursors with `next` and `skip_to`
//! - Regex patterns compiled once into a DFA for FST dictionaries and a
//!   general engine for in-memory dictionaries, with identical whole-string
//!   semantics
//! - Negation computed against the exact segment set being searched
//! - Structural query equality that sees through single-child wrappers

pub mod error;
pub mod postings;
pub mod query;
pub mod regexp;
pub mod search;
pub mod segment;

pub mod prelude {
    pub use crate::error::{LoupeError, Result};
    pub use crate::postings::{DocId, PostingsList};
    pub use crate::query::{Query, normalize};
    pub use crate::regexp::{CompiledRegex, RegexCompiler, RegexConfig, compile_regex};
    pub use crate::search::{Searcher, collect_docs};
    pub use crate::segment::{Document, FstSegment, MemSegment, Reader, ReaderKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
