//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use clap::{Arg, ArgAction};

/// Identifiers to convert (positional, repeatable).
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORD")
        .num_args(0..)
        .help("Identifiers to convert ('-' or none reads lines from stdin)")
}

/// Single sample identifier (positional).
pub fn sample_arg() -> Arg {
    Arg::new("sample")
        .value_name("WORD")
        .help("Identifier to render in every case")
}

/// Target preset (-t/--to).
pub fn to_arg() -> Arg {
    Arg::new("to")
        .short('t')
        .long("to")
        .value_name("CASE")
        .conflicts_with_all(["sep", "capitalize_first", "capitalize_rest", "upper"])
        .help("Target case (see 'camelsnake cases')")
}

/// Custom word separator (--sep).
pub fn sep_arg() -> Arg {
    Arg::new("sep")
        .long("sep")
        .value_name("SEP")
        .allow_hyphen_values(true)
        .help("Insert SEP between words")
}

/// Capitalize the first word (--capitalize-first).
pub fn capitalize_first_arg() -> Arg {
    Arg::new("capitalize_first")
        .long("capitalize-first")
        .action(ArgAction::SetTrue)
        .help("Uppercase the first letter of the first word")
}

/// Capitalize every later word (--capitalize-rest).
pub fn capitalize_rest_arg() -> Arg {
    Arg::new("capitalize_rest")
        .long("capitalize-rest")
        .action(ArgAction::SetTrue)
        .help("Uppercase the first letter of every other word")
}

/// Uppercase post-pass (--upper).
pub fn upper_arg() -> Arg {
    Arg::new("upper")
        .long("upper")
        .action(ArgAction::SetTrue)
        .help("Uppercase the whole result")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
