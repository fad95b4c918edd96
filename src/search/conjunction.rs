//! Intersection (AND) of several searchers.

use crate::error::Result;
use crate::postings::DocId;
use crate::search::searcher::Searcher;

/// A searcher producing the documents matched by all of its children.
///
/// Children are ordered by cost so the sparsest one leads; the others are
/// skipped forward to each candidate it proposes.
#[derive(Debug)]
pub struct ConjunctionSearcher {
    searchers: Vec<Box<dyn Searcher>>,
    current: Option<DocId>,
    exhausted: bool,
    cost: u64,
}

impl ConjunctionSearcher {
    /// Create a new conjunction. An empty conjunction matches nothing.
    pub fn new(mut searchers: Vec<Box<dyn Searcher>>) -> Self {
        searchers.sort_by_key(|s| s.cost());
        let cost = searchers.first().map(|s| s.cost()).unwrap_or(0);
        let exhausted = searchers.is_empty();
        ConjunctionSearcher {
            searchers,
            current: None,
            exhausted,
            cost,
        }
    }

    fn finish(&mut self) -> Result<bool> {
        self.current = None;
        self.exhausted = true;
        Ok(false)
    }

    /// Move every child to the first document >= `target` that all share.
    fn align(&mut self, mut target: DocId) -> Result<bool> {
        'candidates: loop {
            for i in 0..self.searchers.len() {
                if !self.searchers[i].skip_to(target)? {
                    return self.finish();
                }
                match self.searchers[i].doc_id() {
                    Some(doc) if doc > target => {
                        target = doc;
                        continue 'candidates;
                    }
                    Some(_) => {}
                    None => return self.finish(),
                }
            }
            self.current = Some(target);
            return Ok(true);
        }
    }

    fn lead_doc(&self) -> Option<DocId> {
        self.searchers.first().and_then(|s| s.doc_id())
    }
}

impl Searcher for ConjunctionSearcher {
    fn doc_id(&self) -> Option<DocId> {
        self.current
    }

    fn next(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        if !self.searchers[0].next()? {
            return self.finish();
        }
        match self.lead_doc() {
            Some(doc) => self.align(doc),
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
        self.align(target)
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
    use crate::search::postings::{PostingsSearcher, RangeSearcher};
    use crate::search::searcher::collect_docs;

    fn postings(docs: &[DocId]) -> Box<dyn Searcher> {
        Box::new(PostingsSearcher::new(PostingsList::from(docs.to_vec())))
    }

    #[test]
    fn test_conjunction_intersects() {
        let mut searcher = ConjunctionSearcher::new(vec![
            postings(&[1, 2, 3, 5, 8, 13]),
            postings(&[2, 3, 5, 7, 11, 13]),
            Box::new(RangeSearcher::new(0, 100)),
        ]);

        assert_eq!(searcher.cost(), 6);
        assert_eq!(collect_docs(&mut searcher).unwrap(), vec![2, 3, 5, 13]);
    }

    #[test]
    fn test_conjunction_disjoint() {
        let mut searcher = ConjunctionSearcher::new(vec![postings(&[1, 3]), postings(&[2, 4])]);

        assert!(!searcher.next().unwrap());
        assert!(searcher.is_exhausted());
    }

    #[test]
    fn test_conjunction_skip_to() {
        let mut searcher =
            ConjunctionSearcher::new(vec![postings(&[1, 4, 6, 9]), postings(&[4, 5, 6, 9])]);

        assert!(searcher.skip_to(5).unwrap());
        assert_eq!(searcher.doc_id(), Some(6));
        assert!(searcher.next().unwrap());
        assert_eq!(searcher.doc_id(), Some(9));
        assert!(!searcher.next().unwrap());
    }

    #[test]
    fn test_empty_conjunction() {
        let mut searcher = ConjunctionSearcher::new(vec![]);

        assert!(searcher.is_exhausted());
        assert!(!searcher.next().unwrap());
    }
}
