//! Rule-based BBCode to HTML conversion.
//!
//! An [`Engine`] holds an ordered set of named [`Rule`]s. Each rule is a regular
//! expression paired with a replacement template, and [`Engine::parse`] applies
//! them one after another to the running text:
//!
//! ```
//! let engine = bbcode::Engine::new();
//! assert_eq!(engine.parse("foo[b]bar[/b]baz"), "foo<strong>bar</strong>baz");
//! ```
//!
//! The engine does not escape HTML. Angle brackets in the input reach the
//! output untouched, so untrusted input must be sanitized by the caller.

extern crate self as bbcode;

use regex::{Regex, RegexBuilder};

#[macro_use]
mod macros;
mod api;
pub mod config;
mod engine;
mod error;
mod rules;
pub mod service;

pub use api::{ParseDetails, ParseResultVerbose, parse, parse_verbose};
pub use config::{EngineConfig, RuleConfig};
pub use engine::{Engine, RulePass, RuleSet, RunMetrics, RunResult};
pub use error::{Error, Result};
pub use rules::{RuleDef, available_rule_names, catalog};

// --- Rule types -------------------------------------------------------------

bitflags::bitflags! {
    /// Matcher flags applied when a rule's pattern is compiled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RuleFlags: u8 {
        /// `.` also matches `\n`, so a capture can span several lines.
        const DOT_MATCHES_NEW_LINE = 1 << 0;
        const CASE_INSENSITIVE     = 1 << 1;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE           = 1 << 2;
    }
}

/// A named substitution: every match of `pattern` is replaced by
/// `replacement`.
///
/// Groups are referenced by position as `$1`, `${1}` or `\1` (up to two
/// digits), so `$1px` is group 1 followed by `px`. Any other `$` is literal.
///
/// Constructing a `Rule` compiles the pattern, so an invalid pattern is
/// reported here rather than when text is parsed.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    replacement: String,
    /// `replacement` rewritten into `regex` expansion syntax.
    template: String,
    flags: RuleFlags,
}

impl Rule {
    /// Compile a rule with no extra flags.
    pub fn new(name: impl Into<String>, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::with_flags(name, pattern, replacement, RuleFlags::empty())
    }

    /// Compile a rule, applying `flags` to the pattern.
    pub fn with_flags(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        flags: RuleFlags,
    ) -> Result<Self> {
        let name = name.into();
        let pattern = RegexBuilder::new(pattern)
            .dot_matches_new_line(flags.contains(RuleFlags::DOT_MATCHES_NEW_LINE))
            .case_insensitive(flags.contains(RuleFlags::CASE_INSENSITIVE))
            .multi_line(flags.contains(RuleFlags::MULTI_LINE))
            .build()
            .map_err(|source| Error::InvalidPattern { name: name.clone(), source })?;

        let replacement = replacement.into();
        let template = positional_template(&replacement);
        Ok(Rule { name, pattern, replacement, template, flags })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The replacement as it was given.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn flags(&self) -> RuleFlags {
        self.flags
    }

    /// Replace every match in `text`. Returns `None` when nothing matched.
    pub(crate) fn apply(&self, text: &str) -> Option<String> {
        match self.pattern.replace_all(text, self.template.as_str()) {
            std::borrow::Cow::Owned(out) => Some(out),
            std::borrow::Cow::Borrowed(_) => None,
        }
    }
}

/// Rewrite `$N`, `${N}` and `\N` to `${N}` and escape every other `$`.
///
/// `regex` reads `$1px` as a group named `1px`; here it means group 1.
fn positional_template(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut skip_to = 0;

    for (i, ch) in raw.char_indices() {
        if i < skip_to {
            continue;
        }
        if ch != '$' && ch != '\\' {
            out.push(ch);
            continue;
        }

        let rest = &raw[i + 1..];
        match group_reference(rest, ch == '$') {
            Some((group, consumed)) => {
                out.push_str("${");
                out.push_str(group);
                out.push('}');
                skip_to = i + 1 + consumed;
            }
            None if ch == '$' => out.push_str("$$"),
            None => out.push(ch),
        }
    }
    out
}

/// The group number at the start of `rest` and how many bytes it spans.
fn group_reference(rest: &str, allow_braces: bool) -> Option<(&str, usize)> {
    let digits = rest.bytes().take(2).take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        return Some((&rest[..digits], digits));
    }
    if !allow_braces {
        return None;
    }

    let inner = rest.strip_prefix('{')?;
    let end = inner.find('}')?;
    let group = &inner[..end];
    if (1..=2).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()) {
        Some((group, end + 2))
    } else {
        None
    }
}
