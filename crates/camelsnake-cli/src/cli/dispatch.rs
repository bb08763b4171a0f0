//! Dispatch logic: extract params from ArgMatches and convert to command args.

use clap::ArgMatches;

use crate::commands::cases::CasesArgs;
use crate::commands::convert::ConvertArgs;

pub struct ConvertParams {
    pub words: Vec<String>,
    pub to: Option<String>,
    pub sep: Option<String>,
    pub capitalize_first: bool,
    pub capitalize_rest: bool,
    pub upper: bool,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            words: m
                .get_many::<String>("words")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
            to: m.get_one::<String>("to").cloned(),
            sep: m.get_one::<String>("sep").cloned(),
            capitalize_first: m.get_flag("capitalize_first"),
            capitalize_rest: m.get_flag("capitalize_rest"),
            upper: m.get_flag("upper"),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            words: p.words,
            case: p.to,
            separator: p.sep,
            capitalize_first: p.capitalize_first,
            capitalize_rest: p.capitalize_rest,
            upper: p.upper,
        }
    }
}

pub struct CasesParams {
    pub sample: Option<String>,
    pub json: bool,
}

impl CasesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            sample: m.get_one::<String>("sample").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<CasesParams> for CasesArgs {
    fn from(p: CasesParams) -> Self {
        Self {
            sample: p.sample,
            json: p.json,
        }
    }
}
