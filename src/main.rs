mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use bbcode::{Engine, EngineConfig, parse_verbose};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert BBCode to HTML.
///
/// Reads the text from --input, --file, the trailing arguments, or stdin, in
/// that order.
#[derive(Parser, Debug)]
#[command(name = "bbcode", version, about, long_about = None)]
struct Cli {
    /// BBCode text to convert.
    #[arg(short, long, conflicts_with_all = ["file", "words"])]
    input: Option<String>,

    /// Read BBCode from a file.
    #[arg(short, long, conflicts_with = "words")]
    file: Option<PathBuf>,

    /// Comma-separated rule names to keep.
    #[arg(long, value_delimiter = ',', conflicts_with = "except")]
    only: Option<Vec<String>>,

    /// Comma-separated rule names to drop.
    #[arg(long, value_delimiter = ',')]
    except: Option<Vec<String>>,

    /// JSON engine configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject unknown rule names instead of ignoring them.
    #[arg(long)]
    strict: bool,

    /// List available and active rules, then exit.
    #[arg(long)]
    list: bool,

    /// Print a per-rule report instead of bare HTML.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Input text, joined with spaces.
    #[arg(value_name = "INPUT")]
    words: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("BBCODE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let engine = match build_engine(&cli) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    if cli.list {
        debug_report::print_rules(&engine, color);
        return ExitCode::SUCCESS;
    }

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if cli.verbose {
        let res = parse_verbose(&engine, &input);
        debug_report::print_run(&res, color);
    } else {
        print!("{}", engine.parse(&input));
    }

    ExitCode::SUCCESS
}

/// Config file first, then command-line selection on top of it.
fn build_engine(cli: &Cli) -> bbcode::Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };

    if let Some(only) = &cli.only {
        config.only = Some(only.clone());
        config.except.clear();
    }
    if let Some(except) = &cli.except {
        config.except = except.clone();
        config.only = None;
    }
    config.strict |= cli.strict;

    config.build()
}

/// Any text that was supplied, including empty or blank text, is returned
/// as-is. Only an interactive stdin with no other source is an error.
fn read_input(cli: &Cli) -> Result<String, String> {
    if let Some(input) = &cli.input {
        return Ok(input.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path).map_err(|err| format!("error: failed to read {}: {err}", path.display()));
    }
    if !cli.words.is_empty() {
        return Ok(cli.words.join(" "));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("error: no input provided (see --help)".to_string());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn command_line_selection_overrides_the_config() {
        let cli = Cli::try_parse_from(["bbcode", "--only", "bold,link", "[b]x[/b]"]).unwrap();
        let engine = build_engine(&cli).unwrap();
        assert_eq!(engine.rule_names(), vec!["bold", "link"]);
        assert_eq!(read_input(&cli).unwrap(), "[b]x[/b]");
    }

    #[test]
    fn strict_flag_rejects_unknown_names() {
        let cli = Cli::try_parse_from(["bbcode", "--strict", "--except", "blink"]).unwrap();
        assert!(matches!(build_engine(&cli), Err(bbcode::Error::UnknownRules(_))));
    }

    #[test]
    fn only_and_except_flags_conflict() {
        assert!(Cli::try_parse_from(["bbcode", "--only", "bold", "--except", "italic"]).is_err());
    }

    #[test]
    fn trailing_words_are_joined() {
        let cli = Cli::try_parse_from(["bbcode", "[i]a", "b[/i]"]).unwrap();
        assert_eq!(read_input(&cli).unwrap(), "[i]a b[/i]");
    }

    #[test]
    fn blank_input_passes_through_unchanged() {
        let cli = Cli::try_parse_from(["bbcode", "--input", "   "]).unwrap();
        assert_eq!(read_input(&cli).unwrap(), "   ");

        let cli = Cli::try_parse_from(["bbcode", "--input", ""]).unwrap();
        assert_eq!(read_input(&cli).unwrap(), "");
    }

    #[test]
    fn empty_file_is_valid_input() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["bbcode", "--file", path]).unwrap();
        assert_eq!(read_input(&cli).unwrap(), "");
    }
}
