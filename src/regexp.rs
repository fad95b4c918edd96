//! Regex compilation into a pair of equivalent matchers.
//!
//! Segments backed by a finite-state transducer look terms up through a
//! deterministic automaton, while in-memory segments scan their terms with a
//! general-purpose regex. [`compile_regex`] builds both from one pattern so
//! the two kinds of segment agree on which terms a regexp query selects.

pub mod compiler;
pub mod config;
pub mod engine;

pub use self::compiler::{CompiledRegex, NormalizedPattern, RegexCompiler, compile_regex};
pub use self::config::RegexConfig;
pub use self::engine::{AutomatonRegex, EngineKind, GeneralRegex, MatchEngine};
