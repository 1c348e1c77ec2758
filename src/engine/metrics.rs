//! Engine run metrics.
//!
//! `Engine::parse` is the normal path and collects nothing.
//! `Engine::parse_with_metrics` produces the same output and also records, for
//! every active rule, how long its pass took and how many matches it replaced.
//! Counting matches costs an extra scan per rule, so this is for debugging and
//! profiling only.

use std::time::Duration;

/// Timing and match count for one rule's pass over the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePass {
    /// Name of the rule that ran.
    pub rule: String,
    /// Elapsed time for the pass, including the match count.
    pub duration: Duration,
    /// Number of non-overlapping matches replaced.
    pub matches: usize,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Engine::parse_with_metrics`](crate::Engine::parse_with_metrics).
    pub total: Duration,
    /// One entry per active rule, in application order.
    pub passes: Vec<RulePass>,
}

impl RunMetrics {
    /// Total matches across every pass.
    pub fn total_matches(&self) -> usize {
        self.passes.iter().map(|p| p.matches).sum()
    }
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The rewritten text, identical to what `parse` returns.
    pub output: String,
    pub metrics: RunMetrics,
}
