//! Command-line argument parsing
//!
//! Line numbers are 1-based on the command line, the way editors and compilers print them, and
//! converted to the engine's 0-based [`LineRange`]s here.

use clap::{Parser, ValueEnum};
use codewrap_core::LineRange;
use codewrap_lang::DirectiveConfig;
use std::path::PathBuf;

/// Toggle `#if DEBUG` … `#endif` around line ranges of a source file
#[derive(Parser, Debug)]
#[command(name = "codewrap", version, about = "Toggle #if DEBUG wrappers around line ranges")]
pub struct CliArgs {
    /// Source file to edit; reads stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Line or range to toggle (`12` or `12-18`, 1-based, inclusive); repeat or comma-separate
    #[arg(
        short = 'l',
        long = "lines",
        value_name = "RANGE",
        required = true,
        value_delimiter = ',',
        value_parser = parse_line_range
    )]
    pub lines: Vec<LineRange>,

    /// Write the result back to FILE instead of stdout
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Print the edit plan as JSON instead of the edited text
    #[arg(long, conflicts_with = "in_place")]
    pub plan: bool,

    /// Directive dialect (overrides the config file)
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// JSON config file with `directives` and `reject_unbalanced_braces`
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Refuse selections containing a line that ends with a brace, bracket or parenthesis
    #[arg(long)]
    pub check_braces: bool,

    /// Log decisions to stderr (`-v` debug, `-vv` trace); RUST_LOG takes precedence
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Built-in directive dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// `#if DEBUG` / `#elseif` / `#else` / `#endif`
    Swift,
    /// `#if DEBUG` / `#elif` / `#else` / `#endif`
    Csharp,
    /// `#ifdef DEBUG` / `#elif` / `#else` / `#endif`
    C,
}

impl Preset {
    /// Directive literals for this dialect.
    pub fn directives(self) -> DirectiveConfig {
        match self {
            Preset::Swift => DirectiveConfig::swift_debug(),
            Preset::Csharp => DirectiveConfig::csharp_debug(),
            Preset::C => DirectiveConfig::c_debug(),
        }
    }
}

/// Parse `N` or `N-M` (1-based, inclusive) into a 0-based [`LineRange`].
pub fn parse_line_range(value: &str) -> Result<LineRange, String> {
    let parse_line = |s: &str| -> Result<usize, String> {
        let line: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid line number '{}'", s.trim()))?;
        line.checked_sub(1)
            .ok_or_else(|| "line numbers start at 1".to_string())
    };

    match value.split_once('-') {
        Some((start, end)) => Ok(LineRange::new(parse_line(start)?, parse_line(end)?)),
        None => Ok(LineRange::single(parse_line(value)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_range() {
        assert_eq!(parse_line_range("3"), Ok(LineRange::single(2)));
        assert_eq!(parse_line_range("3-5"), Ok(LineRange::new(2, 4)));
        assert_eq!(parse_line_range(" 5 - 3 "), Ok(LineRange::new(2, 4)));
        assert!(parse_line_range("0").is_err());
        assert!(parse_line_range("a-3").is_err());
        assert!(parse_line_range("").is_err());
    }

    #[test]
    fn test_args_accept_repeated_and_comma_separated_ranges() {
        let args =
            CliArgs::try_parse_from(["codewrap", "main.swift", "-l", "1,4-5", "--lines", "9"])
                .unwrap();
        assert_eq!(
            args.lines,
            vec![LineRange::single(0), LineRange::new(3, 4), LineRange::single(8)]
        );
        assert_eq!(args.input_path(), Some(std::path::Path::new("main.swift")));
        assert!(!args.in_place);
    }

    #[test]
    fn test_args_require_lines() {
        assert!(CliArgs::try_parse_from(["codewrap", "main.swift"]).is_err());
    }

    #[test]
    fn test_plan_conflicts_with_in_place() {
        assert!(CliArgs::try_parse_from(["codewrap", "f", "-l", "1", "--plan", "-i"]).is_err());
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = CliArgs::try_parse_from(["codewrap", "-", "-l", "1"]).unwrap();
        assert_eq!(args.input_path(), None);
    }

    #[test]
    fn test_preset() {
        let args = CliArgs::try_parse_from(["codewrap", "-l", "1", "--preset", "c"]).unwrap();
        assert_eq!(args.preset, Some(Preset::C));
        assert_eq!(Preset::C.directives().open, "#ifdef DEBUG");
    }
}
