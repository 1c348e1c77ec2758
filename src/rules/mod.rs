//! The built-in catalog and its compiled form.
//!
//! The catalog itself is a `const` table of [`RuleDef`]s. Compiling it to
//! [`Rule`]s happens once per process; engines clone the compiled rules, so
//! nothing an engine does reaches back into this module.

use once_cell::sync::Lazy;

use crate::{Result, Rule, RuleFlags};

mod catalog;

pub(crate) use catalog::CATALOG;

/// A rule definition that has not been compiled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub flags: RuleFlags,
}

impl RuleDef {
    /// Compile this definition into a [`Rule`].
    pub fn compile(&self) -> Result<Rule> {
        Rule::with_flags(self.name, self.pattern, self.replacement, self.flags)
    }
}

static BUILTIN_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    CATALOG.iter().map(|def| def.compile().expect("built-in rule patterns are valid")).collect()
});

/// The built-in rule definitions in catalog order.
pub fn catalog() -> &'static [RuleDef] {
    CATALOG
}

/// Names of the built-in rules in catalog order.
pub fn available_rule_names() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.name).collect()
}

pub(crate) fn builtin_rules() -> &'static [Rule] {
    &BUILTIN_RULES
}

pub(crate) fn is_builtin(name: &str) -> bool {
    CATALOG.iter().any(|def| def.name == name)
}

#[cfg(test)]
mod tests;
