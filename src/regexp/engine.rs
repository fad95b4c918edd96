//! The two matching engines behind a compiled regex.

use std::fmt::{self, Debug};
use std::sync::Arc;

use regex::bytes::{Regex, RegexBuilder};
use regex_automata::dfa::Automaton as _;
use regex_automata::dfa::{StartKind, dense};
use regex_automata::util::primitives::StateID;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input, MatchKind};

use crate::error::CompileError;
use crate::regexp::config::RegexConfig;

/// Which engine a matcher is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Deterministic automaton, walked byte by byte alongside an FST.
    Automaton,
    /// General-purpose regex evaluated against whole values.
    General,
}

/// A matcher that decides whether a whole byte string belongs to its language.
///
/// Both engines implement this so segment readers can be written against
/// `&dyn MatchEngine` and tested with substitute engines.
pub trait MatchEngine: Send + Sync + Debug {
    /// The engine family.
    fn kind(&self) -> EngineKind;

    /// The pattern text this engine was built from, after normalization.
    fn pattern(&self) -> &str;

    /// Whether the entire input is accepted.
    fn is_match(&self, input: &[u8]) -> bool;
}

/// Automaton form of a regex.
///
/// The automaton is always anchored at the start of the input and only
/// accepts once every byte has been consumed. It also implements
/// [`fst::Automaton`] so term dictionaries can be intersected with it.
#[derive(Clone)]
pub struct AutomatonRegex {
    pattern: String,
    dfa: Arc<dense::DFA<Vec<u32>>>,
    start: StateID,
}

impl AutomatonRegex {
    /// Build the automaton for a pattern that carries no leading `^`.
    pub fn new(pattern: &str, config: &RegexConfig) -> Result<Self, CompileError> {
        // MatchKind::All keeps every thread alive past an early match, so a
        // longer alternative can still reach the end of the input.
        let dfa = dense::Builder::new()
            .configure(
                dense::DFA::config()
                    .start_kind(StartKind::Anchored)
                    .match_kind(MatchKind::All)
                    .dfa_size_limit(Some(config.dfa_size_limit))
                    .determinize_size_limit(Some(config.dfa_size_limit)),
            )
            .syntax(
                syntax::Config::new()
                    .unicode(config.unicode)
                    .case_insensitive(config.case_insensitive)
                    .utf8(false),
            )
            .build(pattern)?;

        let start = dfa.start_state_forward(&Input::new("").anchored(Anchored::Yes))?;

        Ok(AutomatonRegex {
            pattern: pattern.to_string(),
            dfa: Arc::new(dfa),
            start,
        })
    }

    /// Whether the entire input is accepted.
    pub fn is_match(&self, input: &[u8]) -> bool {
        let mut state = self.start;
        for &byte in input {
            match self.step(state, byte) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.accepts_at_end(state)
    }

    /// The pattern this automaton was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn step(&self, state: StateID, byte: u8) -> Option<StateID> {
        let next = self.dfa.next_state(state, byte);
        if self.dfa.is_dead_state(next) || self.dfa.is_quit_state(next) {
            None
        } else {
            Some(next)
        }
    }

    // Matches are reported one transition late, so the end-of-input
    // transition decides whether a match ends exactly here.
    fn accepts_at_end(&self, state: StateID) -> bool {
        self.dfa.is_match_state(self.dfa.next_eoi_state(state))
    }
}

impl Debug for AutomatonRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutomatonRegex")
            .field("pattern", &self.pattern)
            .field("memory_usage", &self.dfa.memory_usage())
            .finish()
    }
}

impl MatchEngine for AutomatonRegex {
    fn kind(&self) -> EngineKind {
        EngineKind::Automaton
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn is_match(&self, input: &[u8]) -> bool {
        AutomatonRegex::is_match(self, input)
    }
}

impl fst::Automaton for AutomatonRegex {
    type State = Option<StateID>;

    fn start(&self) -> Self::State {
        Some(self.start)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        (*state).is_some_and(|s| self.accepts_at_end(s))
    }

    fn can_match(&self, state: &Self::State) -> bool {
        state.is_some()
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        (*state).and_then(|s| self.step(s, byte))
    }
}

/// General-purpose form of a regex.
///
/// Expects a pattern that is already anchored on both ends.
#[derive(Debug, Clone)]
pub struct GeneralRegex {
    regex: Regex,
}

impl GeneralRegex {
    /// Build the general engine for a fully anchored pattern.
    pub fn new(pattern: &str, config: &RegexConfig) -> Result<Self, CompileError> {
        let regex = RegexBuilder::new(pattern)
            .unicode(config.unicode)
            .case_insensitive(config.case_insensitive)
            .size_limit(config.size_limit)
            .build()?;
        Ok(GeneralRegex { regex })
    }

    /// Whether the entire input is accepted.
    pub fn is_match(&self, input: &[u8]) -> bool {
        self.regex.is_match(input)
    }

    /// The pattern this regex was built from.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl MatchEngine for GeneralRegex {
    fn kind(&self) -> EngineKind {
        EngineKind::General
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    fn is_match(&self, input: &[u8]) -> bool {
        self.regex.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use fst::Automaton;

    use super::*;

    fn automaton(pattern: &str) -> AutomatonRegex {
        AutomatonRegex::new(pattern, &RegexConfig::default()).unwrap()
    }

    #[test]
    fn test_automaton_is_full_match() {
        let regex = automaton("ab.*");

        assert!(regex.is_match(b"ab"));
        assert!(regex.is_match(b"abc"));
        assert!(!regex.is_match(b"xabc"));
        assert!(!regex.is_match(b"a"));
    }

    #[test]
    fn test_automaton_longer_alternative() {
        let regex = automaton("a|ab");

        assert!(regex.is_match(b"a"));
        assert!(regex.is_match(b"ab"));
        assert!(!regex.is_match(b"abb"));
    }

    #[test]
    fn test_automaton_empty_pattern() {
        let regex = automaton("");

        assert!(regex.is_match(b""));
        assert!(!regex.is_match(b"a"));
    }

    #[test]
    fn test_automaton_states_follow_bytes() {
        let regex = automaton("foo");

        let mut state = regex.start();
        for &byte in b"fo" {
            state = regex.accept(&state, byte);
        }
        assert!(regex.can_match(&state));
        assert!(!Automaton::is_match(&regex, &state));

        state = regex.accept(&state, b'o');
        assert!(Automaton::is_match(&regex, &state));

        state = regex.accept(&state, b'o');
        assert!(!regex.can_match(&state));
    }

    #[test]
    fn test_automaton_rejects_bad_syntax() {
        let result = AutomatonRegex::new("a(b", &RegexConfig::default());
        assert!(matches!(result, Err(CompileError::Automaton(_))));
    }

    #[test]
    fn test_general_case_insensitive() {
        let config = RegexConfig {
            case_insensitive: true,
            ..RegexConfig::default()
        };
        let regex = GeneralRegex::new("^(?:abc)$", &config).unwrap();

        assert!(regex.is_match(b"ABC"));
        assert!(!regex.is_match(b"ABCD"));
        assert_eq!(regex.kind(), EngineKind::General);
    }

    #[test]
    fn test_general_rejects_bad_syntax() {
        let result = GeneralRegex::new("^(?:a(b)$", &RegexConfig::default());
        assert!(matches!(result, Err(CompileError::General(_))));
    }
}
