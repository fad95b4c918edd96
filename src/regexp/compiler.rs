//! Compiling one pattern into both matching engines.

use std::fmt;

use log::trace;

use crate::error::{CompileError, Result};
use crate::regexp::config::RegexConfig;
use crate::regexp::engine::{AutomatonRegex, EngineKind, GeneralRegex, MatchEngine};

/// The per-engine forms of a caller's pattern.
///
/// The automaton is implicitly anchored at both ends, so it receives the
/// pattern with at most one leading `^` removed. The general engine gets an
/// explicit `^(?:...)$` around the same body so that it enforces the same
/// whole-string match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPattern<'a> {
    /// Pattern handed to the automaton engine.
    pub automaton: &'a str,
    /// Pattern handed to the general engine.
    pub general: String,
}

impl<'a> NormalizedPattern<'a> {
    /// Normalize a pattern. Only the first of several leading anchors is
    /// stripped; any further `^` stays a zero-width assertion in both forms.
    /// An anchor that a repetition operator applies to (`^*a`) is kept.
    pub fn new(source: &'a str) -> Self {
        let body = match source.strip_prefix('^') {
            Some(rest) if !rest.starts_with(['*', '+', '?', '{']) => rest,
            _ => source,
        };
        NormalizedPattern {
            automaton: body,
            general: format!("^(?:{body})$"),
        }
    }
}

/// A regex compiled into an automaton and a general-purpose matcher that
/// accept the same language of whole strings.
#[derive(Debug, Clone)]
pub struct CompiledRegex {
    source: String,
    automaton: AutomatonRegex,
    general: GeneralRegex,
}

impl CompiledRegex {
    /// The pattern as the caller supplied it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Matcher for FST-backed segments.
    pub fn automaton(&self) -> &AutomatonRegex {
        &self.automaton
    }

    /// Matcher for in-memory segments.
    pub fn general(&self) -> &GeneralRegex {
        &self.general
    }

    /// The matcher of the requested kind.
    pub fn engine(&self, kind: EngineKind) -> &dyn MatchEngine {
        match kind {
            EngineKind::Automaton => &self.automaton,
            EngineKind::General => &self.general,
        }
    }
}

impl fmt::Display for CompiledRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Builds [`CompiledRegex`] values under a shared [`RegexConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    config: RegexConfig,
}

impl RegexCompiler {
    /// Create a compiler with the given configuration.
    pub fn new(config: RegexConfig) -> Self {
        RegexCompiler { config }
    }

    /// The configuration both engines are built with.
    pub fn config(&self) -> &RegexConfig {
        &self.config
    }

    /// Compile `pattern` into both engines.
    ///
    /// Fails if either engine rejects its normalized form; a partially
    /// built value is never returned.
    pub fn compile(&self, pattern: &[u8]) -> Result<CompiledRegex> {
        let source = std::str::from_utf8(pattern).map_err(CompileError::from)?;
        let normalized = NormalizedPattern::new(source);
        trace!(
            "compiling regex {:?}: automaton={:?} general={:?}",
            source, normalized.automaton, normalized.general
        );

        let general = GeneralRegex::new(&normalized.general, &self.config)?;
        let automaton = AutomatonRegex::new(normalized.automaton, &self.config)?;

        Ok(CompiledRegex {
            source: source.to_string(),
            automaton,
            general,
        })
    }
}

/// Compile `pattern` with the default configuration.
pub fn compile_regex(pattern: &[u8]) -> Result<CompiledRegex> {
    RegexCompiler::default().compile(pattern)
}
