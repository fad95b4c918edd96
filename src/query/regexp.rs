//! Query matching terms against a regular expression.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::query::normalize::normalize;
use crate::query::query::{Query, searcher_per_reader};
use crate::regexp::{CompiledRegex, compile_regex};
use crate::search::searcher::Searcher;
use crate::segment::reader::Reader;

/// A query matching documents with a term in `field` that the regex matches
/// as a whole string.
///
/// The pattern is compiled once, into both engines; each reader picks the
/// engine that suits its storage.
#[derive(Debug, Clone)]
pub struct RegexpQuery {
    field: Vec<u8>,
    regex: CompiledRegex,
}

impl RegexpQuery {
    /// Compile `pattern` and create a new regexp query.
    pub fn new<F, P>(field: F, pattern: P) -> Result<Query>
    where
        F: Into<Vec<u8>>,
        P: AsRef<[u8]>,
    {
        let regex = compile_regex(pattern.as_ref())?;
        Ok(RegexpQuery::with_compiled(field, regex))
    }

    /// Create a regexp query from an already compiled regex.
    pub fn with_compiled<F: Into<Vec<u8>>>(field: F, regex: CompiledRegex) -> Query {
        Query::Regexp(RegexpQuery {
            field: field.into(),
            regex,
        })
    }

    /// Get the field name.
    pub fn field(&self) -> &[u8] {
        &self.field
    }

    /// Get the compiled regex.
    pub fn regex(&self) -> &CompiledRegex {
        &self.regex
    }

    pub fn searcher(&self, readers: &[Arc<dyn Reader>]) -> Result<Box<dyn Searcher>> {
        searcher_per_reader(readers, |reader| reader.match_regexp(&self.field, &self.regex))
    }

    /// Two regexp queries are equal when field and source pattern are.
    pub fn equal(&self, other: &Query) -> bool {
        match normalize(other) {
            Query::Regexp(inner) => {
                self.field == inner.field && self.regex.source() == inner.regex.source()
            }
            _ => false,
        }
    }
}

impl fmt::Display for RegexpQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "regexp({}, {})",
            String::from_utf8_lossy(&self.field),
            self.regex
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoupeError;
    use crate::regexp::{RegexCompiler, RegexConfig};

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let error = RegexpQuery::new("name", "a(b").unwrap_err();
        assert!(matches!(error, LoupeError::Compile(_)));
    }

    #[test]
    fn test_equality_uses_source_pattern() {
        let a = RegexpQuery::new("name", "^caf.*").unwrap();
        let b = RegexpQuery::new("name", "^caf.*").unwrap();
        let c = RegexpQuery::new("name", "caf.*").unwrap();

        assert_eq!(a, b);
        // Same language, different source.
        assert_ne!(a, c);
        assert_ne!(a, RegexpQuery::new("title", "^caf.*").unwrap());
    }

    #[test]
    fn test_with_compiled() {
        let config = RegexConfig {
            case_insensitive: true,
            ..RegexConfig::default()
        };
        let regex = RegexCompiler::new(config).compile(b"pa.*").unwrap();
        let query = RegexpQuery::with_compiled("city", regex);

        assert_eq!(query.to_string(), "regexp(city, pa.*)");
    }
}
