//! JSON configuration for building an [`Engine`].
//!
//! ```json
//! {
//!   "except": ["youtube"],
//!   "strict": true,
//!   "rules": [
//!     { "name": "spoiler", "pattern": "\\[spoiler\\](.*)\\[/spoiler\\]",
//!       "replacement": "<details>$1</details>", "dot_matches_new_line": true }
//!   ]
//! }
//! ```
//!
//! The selection (`only` or `except`) is applied first and custom rules after
//! it, since selecting rules throws away anything that is not in the catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Engine, Error, Result, RuleFlags};

/// How to build an engine: which catalog rules to keep and which rules to add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Keep only these catalog rules.
    pub only: Option<Vec<String>>,
    /// Drop these catalog rules.
    pub except: Vec<String>,
    /// Reject rule names that are not in the catalog instead of ignoring them.
    pub strict: bool,
    /// Custom rules, registered in order after the selection.
    pub rules: Vec<RuleConfig>,
}

/// A custom rule as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub dot_matches_new_line: bool,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub multi_line: bool,
}

impl RuleConfig {
    pub fn flags(&self) -> RuleFlags {
        let mut flags = RuleFlags::empty();
        flags.set(RuleFlags::DOT_MATCHES_NEW_LINE, self.dot_matches_new_line);
        flags.set(RuleFlags::CASE_INSENSITIVE, self.case_insensitive);
        flags.set(RuleFlags::MULTI_LINE, self.multi_line);
        flags
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|source| Error::ConfigIo { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }

    /// Build an engine from this configuration.
    ///
    /// Fails if both `only` and `except` are set, if `strict` is set and a
    /// selection names an unknown rule, or if a custom pattern is invalid.
    pub fn build(&self) -> Result<Engine> {
        let mut engine = Engine::new();

        match (&self.only, self.except.is_empty()) {
            (Some(_), false) => return Err(Error::ConflictingSelection),
            (Some(only), true) if self.strict => {
                engine.try_only(only)?;
            }
            (Some(only), true) => {
                engine.only(only);
            }
            (None, false) if self.strict => {
                engine.try_except(&self.except)?;
            }
            (None, false) => {
                engine.except(&self.except);
            }
            (None, true) => {}
        }

        for rule in &self.rules {
            engine.set_rule_with_flags(&rule.name, &rule.pattern, &rule.replacement, rule.flags())?;
        }

        Ok(engine)
    }
}
