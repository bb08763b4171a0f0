//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("camelsnake")
        .about("Convert identifiers between naming conventions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(convert_command())
        .subcommand(cases_command())
}

/// Convert identifiers to a preset or a custom convention.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert identifiers")
        .override_usage(
            "\
  camelsnake convert [WORD]... --to <CASE>
  camelsnake convert [WORD]... [--sep <SEP>] [--capitalize-first] [--capitalize-rest] [--upper]",
        )
        .after_help(
            r#"EXAMPLES:
  camelsnake convert HTTPServer                    # http-server
  camelsnake convert adventure_times --to camel    # adventureTimes
  camelsnake convert fooBar --sep . --upper        # FOO.BAR
  cat names.txt | camelsnake convert -t snake      # one result per line"#,
        )
        .arg(words_arg())
        .arg(to_arg())
        .arg(sep_arg())
        .arg(capitalize_first_arg())
        .arg(capitalize_rest_arg())
        .arg(upper_arg())
}

/// List presets, optionally rendering a sample identifier in each.
pub fn cases_command() -> Command {
    Command::new("cases")
        .about("List supported cases")
        .arg(sample_arg())
        .arg(json_arg())
}
