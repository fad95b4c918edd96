//! Union (OR) of several searchers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::binary_heap::PeekMut;

use crate::error::Result;
use crate::postings::DocId;
use crate::search::searcher::{EmptySearcher, Searcher};

/// Combine searchers into one, avoiding a union node for zero or one input.
pub fn union_of(mut searchers: Vec<Box<dyn Searcher>>) -> Box<dyn Searcher> {
    match searchers.len() {
        0 => Box::new(EmptySearcher::new()),
        1 => searchers.pop().unwrap_or_else(|| Box::new(EmptySearcher::new())),
        _ => Box::new(UnionSearcher::new(searchers)),
    }
}

/// A positioned searcher in the union heap.
#[derive(Debug)]
struct HeapEntry {
    searcher: Box<dyn Searcher>,
}

impl HeapEntry {
    fn doc(&self) -> DocId {
        self.searcher.doc_id().unwrap_or(DocId::MAX)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.doc() == other.doc()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: lower doc IDs come first
        other.doc().cmp(&self.doc())
    }
}

/// A searcher producing every document matched by any of its children,
/// once, in ascending order.
#[derive(Debug)]
pub struct UnionSearcher {
    /// Children not yet started.
    pending: Vec<Box<dyn Searcher>>,
    /// Started, positioned children ordered by current document.
    heap: BinaryHeap<HeapEntry>,
    current: Option<DocId>,
    exhausted: bool,
    cost: u64,
}

impl UnionSearcher {
    /// Create a new union of the given searchers.
    pub fn new(searchers: Vec<Box<dyn Searcher>>) -> Self {
        let cost = searchers.iter().map(|s| s.cost()).sum();
        UnionSearcher {
            heap: BinaryHeap::with_capacity(searchers.len()),
            pending: searchers,
            current: None,
            exhausted: false,
            cost,
        }
    }

    /// Start every pending child at the first document >= `target`.
    fn start(&mut self, target: Option<DocId>) -> Result<()> {
        for mut searcher in self.pending.drain(..) {
            let positioned = match target {
                Some(target) => searcher.skip_to(target)?,
                None => searcher.next()?,
            };
            if positioned {
                self.heap.push(HeapEntry { searcher });
            }
        }
        Ok(())
    }

    /// Advance every child positioned before `target`, dropping exhausted ones.
    fn advance_heap(&mut self, target: DocId) -> Result<()> {
        while let Some(mut top) = self.heap.peek_mut() {
            if top.doc() >= target {
                break;
            }
            if !top.searcher.skip_to(target)? {
                PeekMut::pop(top);
            }
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<bool> {
        match self.heap.peek() {
            Some(top) => {
                self.current = Some(top.doc());
                Ok(true)
            }
            None => {
                self.current = None;
                self.exhausted = true;
                Ok(false)
            }
        }
    }
}

impl Searcher for UnionSearcher {
    fn doc_id(&self) -> Option<DocId> {
        self.current
    }

    fn next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        match self.current {
            None => self.start(None)?,
            Some(doc) => match doc.checked_add(1) {
                Some(target) => self.advance_heap(target)?,
                None => self.heap.clear(),
            },
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
        if self.current.is_none() {
            self.start(Some(target))?;
        } else {
            self.advance_heap(target)?;
        }
        self.settle()
    }

    fn cost(&self) -> u64 {
        self.cost
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postings::PostingsList;
    use crate::search::postings::PostingsSearcher;
    use crate::search::searcher::collect_docs;

    fn postings(docs: &[DocId]) -> Box<dyn Searcher> {
        Box::new(PostingsSearcher::new(PostingsList::from(docs.to_vec())))
    }

    #[test]
    fn test_union_merges_and_dedups() {
        let mut searcher = UnionSearcher::new(vec![
            postings(&[1, 4, 7]),
            postings(&[2, 4, 8]),
            postings(&[]),
            postings(&[0, 7]),
        ]);

        assert_eq!(searcher.cost(), 8);
        assert_eq!(collect_docs(&mut searcher).unwrap(), vec![0, 1, 2, 4, 7, 8]);
        assert!(searcher.is_exhausted());
    }

    #[test]
    fn test_union_skip_to() {
        let mut searcher = UnionSearcher::new(vec![postings(&[1, 5, 9]), postings(&[3, 6])]);

        assert!(searcher.skip_to(4).unwrap());
        assert_eq!(searcher.doc_id(), Some(5));
        assert!(searcher.skip_to(5).unwrap());
        assert_eq!(searcher.doc_id(), Some(5));
        assert!(searcher.next().unwrap());
        assert_eq!(searcher.doc_id(), Some(6));
        assert!(!searcher.skip_to(10).unwrap());
        assert!(searcher.is_exhausted());
    }

    #[test]
    fn test_union_of_shortcuts() {
        let mut none = union_of(vec![]);
        assert!(!none.next().unwrap());

        let mut single = union_of(vec![postings(&[3])]);
        assert_eq!(collect_docs(&mut single).unwrap(), vec![3]);
    }
}
