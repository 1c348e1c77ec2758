//! Ordered rule table.
//!
//! ## Invariants
//!
//! - `index[name]` is the position of that rule in `rules`. The two must stay
//!   aligned, so every mutation rebuilds or patches both.
//! - Names are unique. Inserting an existing name replaces the rule at its
//!   current position; a new name goes to the end.

use std::collections::HashMap;

use crate::Rule;

/// Rules in application order, addressable by name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `rule`, replacing any rule with the same name in place.
    ///
    /// Returns the rule that was replaced, if any.
    pub fn insert(&mut self, rule: Rule) -> Option<Rule> {
        match self.index.get(rule.name()) {
            Some(&pos) => Some(std::mem::replace(&mut self.rules[pos], rule)),
            None => {
                self.index.insert(rule.name().to_string(), self.rules.len());
                self.rules.push(rule);
                None
            }
        }
    }

    /// Remove the rule called `name`, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Rule> {
        let pos = self.index.remove(name)?;
        let removed = self.rules.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.index.get(name).map(|&pos| &self.rules[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
