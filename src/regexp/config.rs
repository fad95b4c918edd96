//! Configuration shared by both regex engines.

use serde::{Deserialize, Serialize};

use crate::error::{LoupeError, Result};

/// Settings applied identically to the automaton and the general engine.
///
/// Syntax flags (`unicode`, `case_insensitive`) must be the same for both
/// engines or they stop accepting the same language, so there is only one
/// copy of each. The size limits bound the memory of each engine separately.
///
/// # Example
///
/// ```
/// use loupe::regexp::RegexConfig;
///
/// let config = RegexConfig::from_json(r#"{ "case_insensitive": true }"#).unwrap();
/// assert!(config.case_insensitive);
/// assert!(config.unicode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexConfig {
    /// Approximate heap limit, in bytes, for the general engine's compiled program.
    pub size_limit: usize,

    /// Heap limit, in bytes, for the determinized automaton.
    pub dfa_size_limit: usize,

    /// Whether Unicode classes and `.` operate on code points rather than bytes.
    pub unicode: bool,

    /// Whether literals match without regard to case.
    pub case_insensitive: bool,
}

impl Default for RegexConfig {
    fn default() -> Self {
        RegexConfig {
            size_limit: 10 * (1 << 20),
            dfa_size_limit: 10 * (1 << 20),
            unicode: true,
            case_insensitive: false,
        }
    }
}

impl RegexConfig {
    /// Parse a configuration from JSON, filling missing keys with defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: RegexConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits leave room for at least a trivial pattern.
    pub fn validate(&self) -> Result<()> {
        if self.size_limit == 0 {
            return Err(LoupeError::invalid_config("size_limit must be positive"));
        }
        if self.dfa_size_limit == 0 {
            return Err(LoupeError::invalid_config("dfa_size_limit must be positive"));
        }
        Ok(())
    }
}
