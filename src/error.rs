//! Error types for the Loupe library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LoupeError`] enum. Regex compilation failures are further described by
//! [`CompileError`], which keeps the underlying engine error so callers can
//! surface the exact syntax problem.
//!
//! # Examples
//!
//! ```
//! use loupe::error::{LoupeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LoupeError::storage("reader went away"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::str::Utf8Error;

use thiserror::Error;

/// The main error type for Loupe operations.
#[derive(Error, Debug)]
pub enum LoupeError {
    /// A regex pattern was rejected by one of the matching engines.
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    /// A segment reader failed while enumerating documents or postings.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Term dictionary construction errors.
    #[error("FST error: {0}")]
    Fst(#[from] fst::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Failure to compile a regex into both of its matchers.
///
/// Compilation is all or nothing, so any of these variants means no
/// [`CompiledRegex`](crate::regexp::CompiledRegex) was produced.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The pattern bytes are not valid UTF-8.
    #[error("pattern is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// The general-purpose engine rejected its normalized pattern.
    #[error("general engine: {0}")]
    General(#[from] regex::Error),

    /// The automaton engine rejected its normalized pattern.
    #[error("automaton engine: {0}")]
    Automaton(#[from] regex_automata::dfa::dense::BuildError),

    /// The automaton was built but has no usable anchored start state.
    #[error("automaton start state: {0}")]
    AutomatonStart(#[from] regex_automata::MatchError),
}

/// Result type alias for operations that may fail with LoupeError.
pub type Result<T> = std::result::Result<T, LoupeError>;

impl LoupeError {
    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        LoupeError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoupeError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LoupeError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Whether this error came from regex compilation.
    pub fn is_compile(&self) -> bool {
        matches!(self, LoupeError::Compile(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LoupeError::storage("Test storage error");
        assert_eq!(error.to_string(), "Storage error: Test storage error");

        let error = LoupeError::invalid_config("size_limit must be positive");
        assert_eq!(
            error.to_string(),
            "Error: Invalid configuration: size_limit must be positive"
        );
    }

    #[test]
    fn test_compile_error_conversion() {
        let regex_error = regex::Regex::new("a(b").unwrap_err();
        let error = LoupeError::from(CompileError::from(regex_error));

        assert!(error.is_compile());
        match error {
            LoupeError::Compile(CompileError::General(_)) => {} // Expected
            _ => panic!("Expected general compile error variant"),
        }
    }
}
