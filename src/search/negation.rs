//! Complement of a searcher within the universe of a reader set.

use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::postings::DocId;
use crate::search::searcher::Searcher;
use crate::search::union::union_of;
use crate::segment::reader::Reader;

/// Every document held by `readers`, ascending.
///
/// The universe is rebuilt from the readers on each call; an empty reader
/// set has an empty universe.
pub fn universe(readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
    let searchers = readers
        .iter()
        .map(|reader| reader.universe())
        .collect::<Result<Vec<_>>>()?;
    Ok(union_of(searchers))
}

/// A searcher producing every document in the readers' universe that its
/// child does not produce.
///
/// The universe and the child are both ascending, so the complement is a
/// single merge: each universe candidate is checked by skipping the child
/// forward to it.
#[derive(Debug)]
pub struct NegationSearcher {
    universe: Box<dyn Searcher>,
    child: Box<dyn Searcher>,
    current: Option<DocId>,
    exhausted: bool,
}

impl NegationSearcher {
    /// Create the complement of `child` over the universe of `readers`.
    pub fn new(readers: &[Arc<dyn Reader>], child: Box<dyn Searcher>) -> Result<Self> {
        let universe = universe(readers)?;
        debug!(
            "negation over {} readers, universe cost {}, child cost {}",
            readers.len(),
            universe.cost(),
            child.cost()
        );
        Ok(NegationSearcher::with_universe(universe, child))
    }

    /// Create the complement of `child` within an explicit universe.
    pub fn with_universe(universe: Box<dyn Searcher>, child: Box<dyn Searcher>) -> Self {
        NegationSearcher {
            universe,
            child,
            current: None,
            exhausted: false,
        }
    }

    fn finish(&mut self) -> Result<bool> {
        self.current = None;
        self.exhausted = true;
        Ok(false)
    }

    /// Whether the child produces `doc`. Only ever moves the child forward.
    fn child_matches(&mut self, doc: DocId) -> Result<bool> {
        if self.child.is_exhausted() {
            return Ok(false);
        }
        if let Some(child_doc) = self.child.doc_id() {
            if child_doc >= doc {
                return Ok(child_doc == doc);
            }
        }
        Ok(self.child.skip_to(doc)? && self.child.doc_id() == Some(doc))
    }

    /// Starting from the universe's current position, settle on the first
    /// candidate the child does not produce.
    fn settle(&mut self) -> Result<bool> {
        loop {
            let Some(candidate) = self.universe.doc_id() else {
                return self.finish();
            };
            if !self.child_matches(candidate)? {
                self.current = Some(candidate);
                return Ok(true);
            }
            if !self.universe.next()? {
                return self.finish();
            }
        }
    }
}

impl Searcher for NegationSearcher {
    fn doc_id(&self) -> Option<DocId> {
        self.current
    }

    fn next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        if !self.universe.next()? {
            return self.finish();
        }
        self.settle()
    }

    fn skip_to(&mut self, target: DocId) -> Result<bool> {
        if self.current.is_some_and(|doc| doc >= target) {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }
        if !self.universe.skip_to(target)? {
            return self.finish();
        }
        self.settle()
    }

    fn cost(&self) -> u64 {
        self.universe.cost()
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
