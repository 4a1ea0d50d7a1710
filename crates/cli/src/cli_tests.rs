#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["todo-gate"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn path_defaults_to_current_directory() {
    let cli = parse(&[]);
    assert_eq!(cli.path, ".");
    assert!(cli.extensions.is_none());
    assert!(cli.todo_pattern.is_none());
    assert!(!cli.verbose);
}

#[test]
fn output_format_parses_both_variants() {
    assert!(matches!(parse(&["--output", "text"]).output, OutputFormat::Text));
    assert!(matches!(parse(&["--output", "json"]).output, OutputFormat::Json));
    assert!(Cli::try_parse_from(["todo-gate", "--output", "xml"]).is_err());
}

#[test]
fn verbose_has_a_short_flag() {
    assert!(parse(&["-v"]).verbose);
    assert!(parse(&["--verbose"]).verbose);
}

#[test]
fn pattern_flag_accepts_regex_text() {
    let cli = parse(&["--todo-pattern", r"#\s*todo\s*:"]);
    assert_eq!(cli.todo_pattern.as_deref(), Some(r"#\s*todo\s*:"));
}
