//! Query matching documents that have a field.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::{Query, searcher_per_reader};
use crate::search::searcher::Searcher;
use crate::segment::reader::Reader;

/// A query matching documents with any value in a field.
#[derive(Debug, Clone)]
pub struct FieldQuery {
    field: Vec<u8>,
}

impl FieldQuery {
    /// Create a new field query.
    pub fn new<F: Into<Vec<u8>>>(field: F) -> Query {
        Query::Field(FieldQuery {
            field: field.into(),
        })
    }

    /// Get the field name.
    pub fn field(&self) -> &[u8] {
        &self.field
    }

    /// Searcher over documents with the field, across `readers`.
    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        searcher_per_reader(readers, |reader| reader.match_field(&self.field))
    }

    /// Whether `other` is a field query on the same field.
    pub fn equal(&self, other: &Query) -> bool {
        match normalize(other) {
            Query::Field(inner) => self.field == inner.field,
            _ => false,
        }
    }
}

impl fmt::Display for FieldQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field({})", String::from_utf8_lossy(&self.field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::searcher::collect_docs;
    use crate::segment::document::Document;
    use crate::segment::memory::MemSegment;

    #[test]
    fn test_field_query() {
        let segment = MemSegment::builder(0)
            .with_document(Document::builder().add_field("title", "a").build())
            .unwrap()
            .with_document(Document::builder().add_field("body", "b").build())
            .unwrap()
            .build();
        let readers: Vec<Arc<dyn Reader>> = vec![Arc::new(segment)];

        let query = FieldQuery::new("title");
        let mut searcher = query.searcher(&readers).unwrap();
        assert_eq!(collect_docs(&mut searcher).unwrap(), vec![0]);
        assert_eq!(query.to_string(), "field(title)");
        assert_ne!(query, FieldQuery::new("body"));
    }
}
