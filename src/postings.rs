//! Document identifiers and sorted postings lists.

use std::ops::Deref;
use std::sync::Arc;

/// Globally ordered document identifier.
///
/// Each segment owns a contiguous, non-overlapping range of identifiers, so
/// ids from different segments can be merged into one ascending stream.
pub type DocId = u64;

/// An immutable, ascending, duplicate-free list of document ids.
///
/// Cloning is cheap; the ids are shared between the segment and every
/// searcher reading them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostingsList {
    docs: Arc<[DocId]>,
}

impl PostingsList {
    /// Build a list from ids in any order.
    pub fn from_unsorted(mut docs: Vec<DocId>) -> Self {
        docs.sort_unstable();
        docs.dedup();
        PostingsList { docs: docs.into() }
    }

    /// Number of documents in the list.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the list holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Whether `doc` is in the list.
    pub fn contains(&self, doc: DocId) -> bool {
        self.docs.binary_search(&doc).is_ok()
    }
}

impl Deref for PostingsList {
    type Target = [DocId];

    fn deref(&self) -> &[DocId] {
        &self.docs
    }
}

impl FromIterator<DocId> for PostingsList {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        PostingsList::from_unsorted(iter.into_iter().collect())
    }
}

impl From<Vec<DocId>> for PostingsList {
    fn from(docs: Vec<DocId>) -> Self {
        PostingsList::from_unsorted(docs)
    }
}
