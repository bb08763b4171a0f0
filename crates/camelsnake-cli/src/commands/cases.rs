use std::fmt::Write;

use camelsnake_core::Case;
use serde_json::{Value, json};

const DEFAULT_SAMPLE: &str = "adventure_times";

pub struct CasesArgs {
    pub sample: Option<String>,
    pub json: bool,
}

pub fn run(args: CasesArgs) {
    let sample = args.sample.as_deref().unwrap_or(DEFAULT_SAMPLE);

    if !args.json {
        print!("{}", render_table(sample));
        return;
    }

    match serde_json::to_string_pretty(&render_json(sample)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render_table(sample: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Supported cases ({}):", Case::ALL.len());
    for case in Case::ALL {
        let _ = writeln!(
            out,
            "  {:<16} {:<21} {}",
            case.key(),
            case.name(),
            case.apply(sample)
        );
    }
    out
}

pub fn render_json(sample: &str) -> Value {
    Case::ALL
        .into_iter()
        .map(|case| {
            json!({
                "key": case.key(),
                "name": case.name(),
                "config": case.config(),
                "screaming": case.is_screaming(),
                "example": case.apply(sample),
            })
        })
        .collect()
}
