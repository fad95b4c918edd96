//! Leaf searchers over postings lists and contiguous id ranges.

use crate::error::Result;
use crate::postings::{DocId, PostingsList};
use crate::search::searcher::Searcher;

/// A searcher over a sorted postings list.
#[derive(Debug)]
pub struct PostingsSearcher {
    docs: PostingsList,
    /// Index of the next unread entry.
    cursor: usize,
    current: Option<DocId>,
    exhausted: bool,
}

impl PostingsSearcher {
    /// Create a new postings searcher.
    pub fn new(docs: PostingsList) -> Self {
        PostingsSearcher {
            docs,
            cursor: 0,
            current: None,
            exhausted: false,
        }
    }

    fn finish(&mut self) -> Result<bool> {
        self.current = None;
        self.exhausted = true;
        Ok(false)
    }
}

impl Searcher for PostingsSearcher {
    fn doc_id(&self) -> Option<DocId> {
        self.current
    }

    fn next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        match self.docs.get(self.cursor) {
            Some(&doc) => {
                self.cursor += 1;
                self.current = Some(doc);
                Ok(true)
            }
            None => self.finish(),
        }
    }

    fn skip_to(&mut self, target: DocId) -> Result<bool> {
        if self.current.is_some_and(|doc| doc >= target) {
            return Ok(true);
        }
        if self.exhausted {
            return Ok(false);
        }
        self.cursor += self.docs[self.cursor..].partition_point(|&doc| doc < target);
        self.next()
    }

    fn cost(&self) -> u64 {
        self.docs.len() as u64
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// A searcher over every id in `[start, end)`.
///
/// Segments expose their universe this way, so walking it never
/// materializes the ids.
#[derive(Debug)]
pub struct RangeSearcher {
    next_doc: DocId,
    end: DocId,
    current: Option<DocId>,
    exhausted: bool,
}

impl RangeSearcher {
    /// Create a searcher over `[start, end)`.
    pub fn new(start: DocId, end: DocId) -> Self {
        RangeSearcher {
            next_doc: start,
            end,
            current: None,
            exhausted: false,
        }
    }
}

impl Searcher for RangeSearcher {
    fn doc_id(&self) -> Option<DocId> {
        self.current
    }

    fn next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        if self.next_doc < self.end {
            self.current = Some(self.next_doc);
            self.next_doc += 1;
            Ok(true)
        } else {
            self.current = None;
            self.exhausted = true;
            Ok(false)
        }
    }

    fn skip_to(&mut self, target: DocId) -> Result<bool> {
        if self.current.is_some_and(|doc| doc >= target) {
            return Ok(true);
        }
        self.next_doc = self.next_doc.max(target);
        self.next()
    }

    fn cost(&self) -> u64 {
        self.end.saturating_sub(self.next_doc)
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
