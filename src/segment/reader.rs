//! Segment reader trait.

use std::fmt::{self, Debug};

use crate::error::Result;
use crate::postings::DocId;
use crate::regexp::CompiledRegex;
use crate::search::searcher::Searcher;

/// How a segment stores its term dictionary, which decides the regex engine
/// used to evaluate regexp predicates against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderKind {
    /// Terms held in ordinary in-memory maps; scanned with the general engine.
    Memory,
    /// Terms held in finite-state transducers; intersected with the automaton.
    Fst,
}

impl fmt::Display for ReaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderKind::Memory => f.write_str("memory"),
            ReaderKind::Fst => f.write_str("fst"),
        }
    }
}

/// Read-only view over one immutable segment.
///
/// A segment owns the contiguous document ids `[base, base + doc_count)`;
/// `base + doc_count` never exceeds [`DocId::MAX`], so the last id owned is
/// at most `DocId::MAX - 1`.
/// Every method returns a fresh searcher, so the universe and postings can
/// be enumerated as many times as needed. Implementations must be safe for
/// concurrent read-only use.
pub trait Reader: Send + Sync + Debug {
    /// The storage kind of this segment.
    fn kind(&self) -> ReaderKind;

    /// The first document id owned by this segment.
    fn base(&self) -> DocId;

    /// Number of documents in this segment.
    fn doc_count(&self) -> u64;

    /// Every document in this segment, ascending.
    fn universe(&self) -> Result<Box<dyn Searcher>>;

    /// Documents with `term` in `field`.
    fn match_term(&self, field: &[u8], term: &[u8]) -> Result<Box<dyn Searcher>>;

    /// Documents with any term in `field` accepted by `regex`.
    ///
    /// Implementations pick the engine matching their [`ReaderKind`].
    fn match_regexp(&self, field: &[u8], regex: &CompiledRegex) -> Result<Box<dyn Searcher>>;

    /// Documents with any value at all in `field`.
    fn match_field(&self, field: &[u8]) -> Result<Box<dyn Searcher>>;

    /// One past the last document id owned by this segment.
    fn end(&self) -> DocId {
        self.base() + self.doc_count()
    }
}
