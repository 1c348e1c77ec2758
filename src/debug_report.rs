use bbcode::{Engine, ParseResultVerbose, RulePass};

/// What a piece of report text is, mapped to an ANSI style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Title,
    Section,
    Matched,
    Rule,
    Hint,
    Custom,
    Muted,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Title => "\x1b[1;36m",
            Style::Section => "\x1b[90m",
            Style::Matched => "\x1b[32m",
            Style::Rule => "\x1b[34m",
            Style::Hint => "\x1b[33m",
            Style::Custom => "\x1b[36m",
            Style::Muted => "\x1b[2m",
        }
    }
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, s: impl AsRef<str>, style: Style) -> String {
        if self.enabled { format!("{}{}\x1b[0m", style.code(), s.as_ref()) } else { s.as_ref().to_string() }
    }
}

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.paint(format!("⚙  Parsing: {:?}", preview(&res.text, 60)), Style::Title));

    println!("\n{}", palette.paint("━━━ Passes ━━━", Style::Section));
    for (idx, pass) in res.details.passes.iter().enumerate() {
        println!("  {}", fmt_pass(idx, pass, &palette));
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", Style::Section));
    if res.details.matched_rules().is_empty() {
        println!("{}", palette.paint("  No rule matched; output equals input", Style::Muted));
        println!("\n{}", palette.paint("Possible reasons:", Style::Hint));
        println!("  • The tag's rule is not active (check --only/--except)");
        println!("  • The closing tag is on another line");
        println!("  • A parameter is outside its pattern (e.g. [size=8], [color=red])");
    }
    for line in res.output.lines() {
        println!("  {}", palette.paint(line, Style::Matched));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", Style::Section));
    let matches: usize = res.details.passes.iter().map(|p| p.matches).sum();
    println!(
        "  Total: {}  │  Rules: {}  │  Matches: {}",
        palette.paint(format!("{:?}", res.details.total), Style::Matched),
        palette.paint(res.details.active_rules.len().to_string(), Style::Custom),
        palette.paint(matches.to_string(), Style::Hint),
    );
    println!();
}

pub fn print_rules(engine: &Engine, color: bool) {
    let palette = Palette::new(color);
    println!("{}", palette.paint("━━━ Rules ━━━", Style::Section));

    for name in Engine::available_rule_names() {
        let marker = if engine.get_rule(name).is_some() {
            palette.paint("✓", Style::Matched)
        } else {
            palette.paint("✗", Style::Muted)
        };
        println!("  {} {}", marker, palette.paint(name, Style::Rule));
    }

    let custom: Vec<&str> =
        engine.rule_names().into_iter().filter(|name| !bbcode::catalog().iter().any(|def| def.name == *name)).collect();
    for name in custom {
        println!(
            "  {} {} {}",
            palette.paint("+", Style::Hint),
            palette.paint(name, Style::Custom),
            palette.paint("(custom)", Style::Muted)
        );
    }
}

fn fmt_pass(idx: usize, pass: &RulePass, palette: &Palette) -> String {
    let label = palette.paint(format!("[{:>2}]", idx), Style::Section);
    let status = if pass.matches > 0 {
        palette.paint(format!("✓ {} match(es)", pass.matches), Style::Matched)
    } else {
        palette.paint("✗ 0 matches", Style::Muted)
    };
    format!(
        "{} {:<14} {} {}",
        label,
        palette.paint(&pass.rule, Style::Rule),
        status,
        palette.paint(format!("{:?}", pass.duration), Style::Muted)
    )
}

fn preview(text: &str, max: usize) -> String {
    let mut s: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        s.push('…');
    }
    s
}
