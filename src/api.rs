use crate::{Engine, RulePass, service};
use std::time::Duration;

/// Additional details returned by [`parse_verbose`].
///
/// Meant for debugging rule order and for spotting slow patterns.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Every active rule's pass, in application order.
    pub passes: Vec<RulePass>,
    /// Names of rules that were active for this input.
    pub active_rules: Vec<String>,
}

impl ParseDetails {
    /// Names of the rules that replaced at least one match.
    pub fn matched_rules(&self) -> Vec<&str> {
        self.passes.iter().filter(|p| p.matches > 0).map(|p| p.rule.as_str()).collect()
    }
}

/// Result from [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    /// The BBCode input.
    pub text: String,
    /// The rendered HTML.
    pub output: String,
    pub details: ParseDetails,
}

/// Parse `text` with the shared default engine.
///
/// # Example
/// ```
/// assert_eq!(bbcode::parse("[u]under[/u]"), "<u>under</u>");
/// ```
pub fn parse(text: &str) -> String {
    service::shared().parse(text)
}

/// Parse `text` with `engine` and return a per-rule trace along with the
/// output.
///
/// The plain [`Engine::parse`] path does not allocate these traces.
pub fn parse_verbose(engine: &Engine, text: &str) -> ParseResultVerbose {
    let active_rules = engine.rule_names().into_iter().map(str::to_string).collect();
    let run = engine.parse_with_metrics(text);

    let details = ParseDetails { total: run.metrics.total, passes: run.metrics.passes, active_rules };
    ParseResultVerbose { text: text.to_string(), output: run.output, details }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uses_the_default_catalog() {
        assert_eq!(parse("[b]x[/b] [img]a.png[/img]"), r#"<strong>x</strong> <img src="a.png">"#);
    }

    #[test]
    fn parse_verbose_includes_metrics_and_rules() {
        let mut engine = Engine::new();
        engine.only(["bold", "italic", "code"]);
        let res = parse_verbose(&engine, "[b]a[/b] [code]b[/code]");

        assert_eq!(res.text, "[b]a[/b] [code]b[/code]");
        assert_eq!(res.output, "<strong>a</strong> <code>b</code>");
        assert_eq!(res.details.active_rules, vec!["bold", "italic", "code"]);
        assert_eq!(res.details.passes.len(), 3);
        assert_eq!(res.details.matched_rules(), vec!["bold", "code"]);
        assert!(res.details.passes.iter().map(|p| p.duration).sum::<Duration>() <= res.details.total);
    }
}
