//! Base searcher trait.

use std::fmt::Debug;

use crate::error::Result;
use crate::postings::DocId;

/// A single-pass cursor over matching documents in ascending id order.
///
/// A searcher starts unpositioned: [`doc_id`](Searcher::doc_id) is `None`
/// until the first successful call to [`next`](Searcher::next) or
/// [`skip_to`](Searcher::skip_to). Once either returns `false` the searcher
/// is exhausted and stays that way.
///
/// Searchers hold their own read cursors and are owned by exactly one caller.
/// Dropping a searcher part way through stops all further reader access.
pub trait Searcher: Send + Debug {
    /// The current document, if positioned.
    fn doc_id(&self) -> Option<DocId>;

    /// Move to the next matching document.
    fn next(&mut self) -> Result<bool>;

    /// Move to the first matching document >= `target`.
    ///
    /// Does not move if already positioned on a document >= `target`.
    fn skip_to(&mut self, target: DocId) -> Result<bool>;

    /// Estimated number of documents this searcher may visit.
    fn cost(&self) -> u64;

    /// Whether no further documents will be produced.
    fn is_exhausted(&self) -> bool;
}

impl<S: Searcher + ?Sized> Searcher for Box<S> {
    fn doc_id(&self) -> Option<DocId> {
        (**self).doc_id()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn skip_to(&mut self, target: DocId) -> Result<bool> {
        (**self).skip_to(target)
    }

    fn cost(&self) -> u64 {
        (**self).cost()
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }
}

/// Drain the remaining documents of a searcher.
pub fn collect_docs<S: Searcher + ?Sized>(searcher: &mut S) -> Result<Vec<DocId>> {
    let mut docs = Vec::new();
    while searcher.next()? {
        if let Some(doc) = searcher.doc_id() {
            docs.push(doc);
        }
    }
    Ok(docs)
}

/// A searcher that matches no documents.
#[derive(Debug, Default)]
pub struct EmptySearcher;

impl EmptySearcher {
    /// Create a new empty searcher.
    pub fn new() -> Self {
        EmptySearcher
    }
}

impl Searcher for EmptySearcher {
    fn doc_id(&self) -> Option<DocId> {
        None
    }

    fn next(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn skip_to(&mut self, _target: DocId) -> Result<bool> {
        Ok(false)
    }

    fn cost(&self) -> u64 {
        0
    }

    fn is_exhausted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_searcher() {
        let mut searcher = EmptySearcher::new();

        assert_eq!(searcher.doc_id(), None);
        assert!(searcher.is_exhausted());
        assert_eq!(searcher.cost(), 0);
        assert!(!searcher.next().unwrap());
        assert!(!searcher.skip_to(5).unwrap());
        assert!(collect_docs(&mut searcher).unwrap().is_empty());
    }

    #[test]
    fn test_boxed_searcher_delegates() {
        let mut searcher: Box<dyn Searcher> = Box::new(EmptySearcher::new());

        assert!(searcher.is_exhausted());
        assert!(!searcher.next().unwrap());
    }
}
