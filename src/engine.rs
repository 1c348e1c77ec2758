//! Substitution engine.
//!
//! An [`Engine`] owns one ordered [`RuleSet`] and rewrites text by running each
//! rule over the output of the previous one:
//!
//! ```text
//! source ──> rule[0].replace_all ──> rule[1].replace_all ──> ... ──> output
//! ```
//!
//! Later rules see text produced by earlier replacements, so a rule may match
//! markup that an earlier rule emitted. The order of the active set is
//! therefore part of the observable behavior.
//!
//! ## Responsibilities by module
//!
//! - `rule_set.rs`: the ordered name → rule table with in-place override.
//! - `parser.rs`: [`Engine`] itself, i.e. parsing, selection (`only`,
//!   `except` and their strict variants), and registration.
//! - `metrics.rs`: per-rule timings and match counts for
//!   [`Engine::parse_with_metrics`].
//!
//! ## Concurrency
//!
//! `parse` borrows the engine immutably and every mutation needs `&mut self`,
//! so an `Arc<Engine>` can be shared between threads for parsing. Callers that
//! need a different selection clone the engine and change the clone.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/rule_set.rs"]
mod rule_set;

pub use metrics::{RulePass, RunMetrics, RunResult};
pub use parser::Engine;
pub use rule_set::RuleSet;
