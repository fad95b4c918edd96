//! In-memory segment.

use std::collections::BTreeMap;

use log::debug;

use crate::error::{LoupeError, Result};
use crate::postings::{DocId, PostingsList};
use crate::regexp::{CompiledRegex, EngineKind, MatchEngine};
use crate::search::postings::{PostingsSearcher, RangeSearcher};
use crate::search::searcher::{EmptySearcher, Searcher};
use crate::search::union::union_of;
use crate::segment::document::Document;
use crate::segment::reader::{Reader, ReaderKind};

/// Postings of one field.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldPostings {
    /// Term -> documents containing it.
    pub(crate) terms: BTreeMap<Vec<u8>, PostingsList>,
    /// Documents with any value in this field.
    pub(crate) docs: PostingsList,
}

/// A segment whose term dictionary lives in ordinary sorted maps.
///
/// Regexp predicates are evaluated by scanning every term of the field with
/// the general regex engine.
#[derive(Debug, Clone)]
pub struct MemSegment {
    base: DocId,
    docs: Vec<Document>,
    fields: BTreeMap<Vec<u8>, FieldPostings>,
}

impl MemSegment {
    /// Create a builder for a segment whose first document gets id `base`.
    pub fn builder(base: DocId) -> MemSegmentBuilder {
        MemSegmentBuilder::new(base)
    }

    /// The stored document with the given id.
    pub fn document(&self, doc: DocId) -> Option<&Document> {
        let offset = doc.checked_sub(self.base)?;
        self.docs.get(usize::try_from(offset).ok()?)
    }

    /// Field names present in this segment, ascending.
    pub fn field_names(&self) -> impl Iterator<Item = &[u8]> {
        self.fields.keys().map(|name| name.as_slice())
    }

    pub(crate) fn fields(&self) -> &BTreeMap<Vec<u8>, FieldPostings> {
        &self.fields
    }

    /// Documents with any term in `field` accepted by `engine`.
    pub fn match_with(&self, field: &[u8], engine: &dyn MatchEngine) -> Result<Box<dyn Searcher>> {
        let Some(postings) = self.fields.get(field) else {
            return Ok(Box::new(EmptySearcher::new()));
        };
        let searchers: Vec<Box<dyn Searcher>> = postings
            .terms
            .iter()
            .filter(|(term, _)| engine.is_match(term))
            .map(|(_, docs)| Box::new(PostingsSearcher::new(docs.clone())) as Box<dyn Searcher>)
            .collect();
        Ok(union_of(searchers))
    }
}

impl Reader for MemSegment {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Memory
    }

    fn base(&self) -> DocId {
        self.base
    }

    fn doc_count(&self) -> u64 {
        self.docs.len() as u64
    }

    fn universe(&self) -> Result<Box<dyn Searcher>> {
        Ok(Box::new(RangeSearcher::new(self.base, self.end())))
    }

    fn match_term(&self, field: &[u8], term: &[u8]) -> Result<Box<dyn Searcher>> {
        match self.fields.get(field).and_then(|f| f.terms.get(term)) {
            Some(docs) => Ok(Box::new(PostingsSearcher::new(docs.clone()))),
            None => Ok(Box::new(EmptySearcher::new())),
        }
    }

    fn match_regexp(&self, field: &[u8], regex: &CompiledRegex) -> Result<Box<dyn Searcher>> {
        self.match_with(field, regex.engine(EngineKind::General))
    }

    fn match_field(&self, field: &[u8]) -> Result<Box<dyn Searcher>> {
        match self.fields.get(field) {
            Some(postings) => Ok(Box::new(PostingsSearcher::new(postings.docs.clone()))),
            None => Ok(Box::new(EmptySearcher::new())),
        }
    }
}

/// Accumulates documents and builds an immutable [`MemSegment`].
#[derive(Debug)]
pub struct MemSegmentBuilder {
    base: DocId,
    docs: Vec<Document>,
    fields: BTreeMap<Vec<u8>, BTreeMap<Vec<u8>, Vec<DocId>>>,
}

impl MemSegmentBuilder {
    /// Create a builder whose first document gets id `base`.
    pub fn new(base: DocId) -> Self {
        MemSegmentBuilder {
            base,
            docs: Vec::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a document, returning the id it was assigned.
    pub fn insert(&mut self, doc: Document) -> Result<DocId> {
        // The segment's exclusive end, `id + 1`, must stay representable.
        let id = self
            .base
            .checked_add(self.docs.len() as u64)
            .filter(|id| id.checked_add(1).is_some())
            .ok_or_else(|| LoupeError::other("document id space exhausted"))?;

        for field in doc.fields() {
            let postings = self
                .fields
                .entry(field.name.clone())
                .or_default()
                .entry(field.value.clone())
                .or_default();
            // Ids are assigned in ascending order, so only the tail can repeat.
            if postings.last() != Some(&id) {
                postings.push(id);
            }
        }
        self.docs.push(doc);
        Ok(id)
    }

    /// Add a document, consuming and returning the builder.
    pub fn with_document(mut self, doc: Document) -> Result<Self> {
        self.insert(doc)?;
        Ok(self)
    }

    /// Number of documents added so far.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether no documents have been added.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Seal the segment.
    pub fn build(self) -> MemSegment {
        let fields: BTreeMap<Vec<u8>, FieldPostings> = self
            .fields
            .into_iter()
            .map(|(name, terms)| {
                let docs = terms.values().flatten().copied().collect::<PostingsList>();
                let terms = terms
                    .into_iter()
                    .map(|(term, docs)| (term, PostingsList::from(docs)))
                    .collect();
                (name, FieldPostings { terms, docs })
            })
            .collect();

        debug!(
            "built memory segment: base {}, {} documents, {} fields",
            self.base,
            self.docs.len(),
            fields.len()
        );

        MemSegment {
            base: self.base,
            docs: self.docs,
            fields,
        }
    }
}
