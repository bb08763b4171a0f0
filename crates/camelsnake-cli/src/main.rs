mod cli;
mod commands;
mod logging;
mod util;

#[cfg(test)]
mod util_tests;

use cli::{CasesParams, ConvertParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("convert", m)) => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into());
        }
        Some(("cases", m)) => {
            let params = CasesParams::from_matches(m);
            commands::cases::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
