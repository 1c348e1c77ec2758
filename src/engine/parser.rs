//! The substitution engine.
//!
//! ## Key concepts
//!
//! - **Catalog**: the fixed built-in rules (`crate::rules`). Selection always
//!   starts from here.
//! - **Active set**: the [`RuleSet`] an engine applies. It starts as a copy of
//!   the catalog, or as whatever the caller passed to [`Engine::with_rules`].
//! - **Pass**: one rule's `replace_all` over the whole current text.
//!
//! ## Selection
//!
//! `only` and `except` recompute the active set from the catalog on every
//! call. They do not compose: a second `only` replaces the first instead of
//! narrowing it, and custom or overridden rules are dropped. Unknown names
//! are ignored; `try_only`/`try_except` reject them instead.
//!
//! ## Debugging
//!
//! Selection and registration emit `debug` events and each pass that changed
//! the text emits a `trace` event (target `bbcode::engine::parser`).

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace};

use super::metrics::{RulePass, RunMetrics, RunResult};
use super::rule_set::RuleSet;
use crate::{EngineConfig, Error, Result, Rule, RuleFlags, rules};

/// Converts BBCode to HTML by applying an ordered set of named rules.
///
/// ```
/// use bbcode::Engine;
///
/// let mut engine = Engine::new();
/// engine.only(["bold", "link"]);
///
/// assert_eq!(engine.rule_names(), vec!["bold", "link"]);
/// assert_eq!(engine.parse("[b]hi[/b] [i]there[/i]"), "<strong>hi</strong> [i]there[/i]");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RuleSet> for Engine {
    fn from(rules: RuleSet) -> Self {
        Engine { rules }
    }
}

impl Engine {
    /// Create an engine whose active set is the full catalog.
    pub fn new() -> Self {
        Engine { rules: rules::builtin_rules().iter().cloned().collect() }
    }

    /// Create an engine with a custom active set.
    ///
    /// Rules run in iteration order. A repeated name keeps the position of its
    /// first occurrence and the definition of its last.
    pub fn with_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        Engine { rules: rules.into_iter().collect() }
    }

    /// Build an engine from a configuration; see [`EngineConfig::build`].
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.build()
    }

    // --- Parsing -------------------------------------------------------------

    /// Rewrite `source` by running every active rule over it, in order.
    ///
    /// Each rule sees the output of the rule before it. Text that no rule
    /// matches passes through unchanged, and nothing is HTML-escaped.
    pub fn parse(&self, source: &str) -> String {
        let mut text = source.to_string();
        for rule in &self.rules {
            if let Some(next) = rule.apply(&text) {
                trace!(rule = rule.name(), "rule rewrote text");
                text = next;
            }
        }
        text
    }

    /// Like [`parse`](Self::parse), and also time every pass and count its
    /// matches.
    pub fn parse_with_metrics(&self, source: &str) -> RunResult {
        let total_start = Instant::now();
        let mut text = source.to_string();
        let mut passes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let pass_start = Instant::now();
            let matches = rule.pattern().find_iter(&text).count();
            if matches > 0 {
                if let Some(next) = rule.apply(&text) {
                    text = next;
                }
            }
            passes.push(RulePass { rule: rule.name().to_string(), duration: pass_start.elapsed(), matches });
        }

        RunResult { output: text, metrics: RunMetrics { total: total_start.elapsed(), passes } }
    }

    /// Apply only the active rule called `name` to `source`.
    ///
    /// Returns `None` if no such rule is active.
    pub fn apply_rule(&self, name: &str, source: &str) -> Option<String> {
        let rule = self.rules.get(name)?;
        Some(rule.apply(source).unwrap_or_else(|| source.to_string()))
    }

    // --- Selection -----------------------------------------------------------

    /// Keep only the catalog rules named in `names`, in catalog order.
    ///
    /// Unknown names are ignored. The selection is recomputed from the catalog,
    /// so custom rules and overrides are discarded.
    pub fn only<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted = name_set(names);
        self.select_from_catalog(|name| wanted.contains(name));
        debug!(active = ?self.rules.names(), ignored = ?unknown_names(&wanted), "selected rules with `only`");
        self
    }

    /// Use every catalog rule except those named in `names`, in catalog order.
    ///
    /// Unknown names are ignored. Like [`only`](Self::only), this starts over
    /// from the catalog.
    pub fn except<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded = name_set(names);
        self.select_from_catalog(|name| !excluded.contains(name));
        debug!(active = ?self.rules.names(), ignored = ?unknown_names(&excluded), "selected rules with `except`");
        self
    }

    /// Strict [`only`](Self::only): fails on names missing from the catalog
    /// and leaves the active set untouched when it does.
    pub fn try_only<I, S>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = ensure_known(names)?;
        Ok(self.only(names))
    }

    /// Strict [`except`](Self::except).
    pub fn try_except<I, S>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = ensure_known(names)?;
        Ok(self.except(names))
    }

    fn select_from_catalog(&mut self, keep: impl Fn(&str) -> bool) {
        self.rules = rules::builtin_rules().iter().filter(|rule| keep(rule.name())).cloned().collect();
    }

    // --- Registration --------------------------------------------------------

    /// Register a rule, or override the active rule with the same name.
    ///
    /// An override keeps the rule's position; a new rule runs last. The pattern
    /// is compiled here, so a bad pattern fails now and never during `parse`.
    pub fn set_rule(&mut self, name: &str, pattern: &str, replacement: &str) -> Result<&mut Self> {
        self.set_rule_with_flags(name, pattern, replacement, RuleFlags::empty())
    }

    /// [`set_rule`](Self::set_rule) with matcher flags.
    pub fn set_rule_with_flags(
        &mut self,
        name: &str,
        pattern: &str,
        replacement: &str,
        flags: RuleFlags,
    ) -> Result<&mut Self> {
        let rule = Rule::with_flags(name, pattern, replacement, flags)?;
        Ok(self.insert_rule(rule))
    }

    /// Register an already compiled rule.
    pub fn insert_rule(&mut self, rule: Rule) -> &mut Self {
        let name = rule.name().to_string();
        match self.rules.insert(rule) {
            Some(_) => debug!(rule = %name, "overrode rule"),
            None => debug!(rule = %name, position = self.rules.len() - 1, "registered rule"),
        }
        self
    }

    /// Drop the active rule called `name`.
    pub fn remove_rule(&mut self, name: &str) -> Option<Rule> {
        let removed = self.rules.remove(name);
        if removed.is_some() {
            debug!(rule = name, "removed rule");
        }
        removed
    }

    // --- Introspection -------------------------------------------------------

    /// Names of the active rules in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.names()
    }

    /// Names of every catalog rule in catalog order.
    pub fn available_rule_names() -> Vec<&'static str> {
        rules::available_rule_names()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn name_set<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().map(|name| name.as_ref().to_string()).collect()
}

/// Names in `names` that are not in the catalog, sorted for stable output.
fn unknown_names(names: &HashSet<String>) -> Vec<&str> {
    let mut unknown: Vec<&str> = names.iter().map(String::as_str).filter(|name| !rules::is_builtin(name)).collect();
    unknown.sort_unstable();
    unknown
}

fn ensure_known<I, S>(names: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = names.into_iter().map(|name| name.as_ref().to_string()).collect();
    let mut unknown: Vec<String> = Vec::new();
    for name in &names {
        if !rules::is_builtin(name) && !unknown.contains(name) {
            unknown.push(name.clone());
        }
    }

    if unknown.is_empty() { Ok(names) } else { Err(Error::UnknownRules(unknown)) }
}
