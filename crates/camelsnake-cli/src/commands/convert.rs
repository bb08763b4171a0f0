use camelsnake_core::{Case, Config};
use tracing::{debug, trace};

use super::case_resolver::require_case;
use crate::util::load_inputs;

pub struct ConvertArgs {
    pub words: Vec<String>,
    pub case: Option<String>,
    pub separator: Option<String>,
    pub capitalize_first: bool,
    pub capitalize_rest: bool,
    pub upper: bool,
}

impl ConvertArgs {
    fn has_custom_flags(&self) -> bool {
        self.separator.is_some() || self.capitalize_first || self.capitalize_rest || self.upper
    }
}

/// What every input is converted to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Preset(Case),
    Custom { config: Config, upper: bool },
}

impl Target {
    /// Target built from the custom flags; kebab-case when none are set.
    pub fn from_flags(args: &ConvertArgs) -> Self {
        if !args.has_custom_flags() {
            return Target::Preset(Case::Kebab);
        }
        Target::Custom {
            config: Config::new(
                args.separator.as_deref(),
                args.capitalize_first,
                args.capitalize_rest,
            ),
            upper: args.upper,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Target::Preset(case) => case.apply(input),
            Target::Custom { config, upper: true } => config.apply(input).to_uppercase(),
            Target::Custom { config, upper: false } => config.apply(input),
        }
    }
}

pub fn run(args: ConvertArgs) {
    let target = match &args.case {
        Some(name) => Target::Preset(require_case(name)),
        None => Target::from_flags(&args),
    };
    debug!(?target, "resolved target");

    let inputs = match load_inputs(&args.words) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    debug!(count = inputs.len(), from_args = !args.words.is_empty(), "converting");

    for input in &inputs {
        let output = target.apply(input);
        trace!(%input, %output);
        println!("{}", output);
    }
}
