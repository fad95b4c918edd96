//! Segment whose term dictionaries are finite-state transducers.

use std::collections::BTreeMap;

use fst::{IntoStreamer, Map, Streamer};
use log::debug;

use crate::error::{LoupeError, Result};
use crate::postings::{DocId, PostingsList};
use crate::regexp::CompiledRegex;
use crate::search::postings::{PostingsSearcher, RangeSearcher};
use crate::search::searcher::{EmptySearcher, Searcher};
use crate::search::union::union_of;
use crate::segment::memory::MemSegment;
use crate::segment::reader::{Reader, ReaderKind};

/// Term dictionary and postings of one field.
#[derive(Debug)]
struct FstField {
    /// Term -> index into `postings`.
    terms: Map<Vec<u8>>,
    postings: Vec<PostingsList>,
    /// Documents with any value in this field.
    docs: PostingsList,
}

impl FstField {
    fn postings_at(&self, index: u64) -> Result<&PostingsList> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.postings.get(i))
            .ok_or_else(|| {
                LoupeError::storage(format!(
                    "term dictionary points at postings {index}, only {} present",
                    self.postings.len()
                ))
            })
    }
}

/// A sealed segment with one FST term dictionary per field.
///
/// Regexp predicates are evaluated by intersecting the dictionary with the
/// automaton form of the regex, so only matching terms are ever visited.
#[derive(Debug)]
pub struct FstSegment {
    base: DocId,
    doc_count: u64,
    fields: BTreeMap<Vec<u8>, FstField>,
}

impl FstSegment {
    /// Seal an in-memory segment, keeping its ids and postings.
    pub fn from_mem(segment: &MemSegment) -> Result<Self> {
        let mut fields = BTreeMap::new();
        for (name, field) in segment.fields() {
            // BTreeMap iteration is sorted, as the FST builder requires.
            let terms = Map::from_iter(
                field
                    .terms
                    .keys()
                    .enumerate()
                    .map(|(i, term)| (term.as_slice(), i as u64)),
            )?;
            let postings = field.terms.values().cloned().collect();
            fields.insert(
                name.clone(),
                FstField {
                    terms,
                    postings,
                    docs: field.docs.clone(),
                },
            );
        }

        debug!(
            "sealed segment into FST: base {}, {} documents, {} fields",
            segment.base(),
            segment.doc_count(),
            fields.len()
        );

        Ok(FstSegment {
            base: segment.base(),
            doc_count: segment.doc_count(),
            fields,
        })
    }

    /// Number of distinct terms in `field`.
    pub fn term_count(&self, field: &[u8]) -> usize {
        self.fields.get(field).map(|f| f.terms.len()).unwrap_or(0)
    }
}

impl Reader for FstSegment {
    fn kind(&self) -> ReaderKind {
        ReaderKind::Fst
    }

    fn base(&self) -> DocId {
        self.base
    }

    fn doc_count(&self) -> u64 {
        self.doc_count
    }

    fn universe(&self) -> Result<Box<dyn Searcher>> {
        Ok(Box::new(RangeSearcher::new(self.base, self.end())))
    }

    fn match_term(&self, field: &[u8], term: &[u8]) -> Result<Box<dyn Searcher>> {
        let Some(fst_field) = self.fields.get(field) else {
            return Ok(Box::new(EmptySearcher::new()));
        };
        match fst_field.terms.get(term) {
            Some(index) => {
                let docs = fst_field.postings_at(index)?;
                Ok(Box::new(PostingsSearcher::new(docs.clone())))
            }
            None => Ok(Box::new(EmptySearcher::new())),
        }
    }

    fn match_regexp(&self, field: &[u8], regex: &CompiledRegex) -> Result<Box<dyn Searcher>> {
        let Some(fst_field) = self.fields.get(field) else {
            return Ok(Box::new(EmptySearcher::new()));
        };
        let mut searchers: Vec<Box<dyn Searcher>> = Vec::new();
        let mut stream = fst_field.terms.search(regex.automaton().clone()).into_stream();
        while let Some((_, index)) = stream.next() {
            let docs = fst_field.postings_at(index)?;
            searchers.push(Box::new(PostingsSearcher::new(docs.clone())));
        }
        Ok(union_of(searchers))
    }

    fn match_field(&self, field: &[u8]) -> Result<Box<dyn Searcher>> {
        match self.fields.get(field) {
            Some(fst_field) => Ok(Box::new(PostingsSearcher::new(fst_field.docs.clone()))),
            None => Ok(Box::new(EmptySearcher::new())),
        }
    }
}
