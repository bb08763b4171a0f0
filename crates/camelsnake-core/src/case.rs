//! Named naming conventions built on the scanner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A naming convention.
///
/// The screaming variants run the scanner with their lowercase counterpart's
/// settings and uppercase the result afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    /// `adventureTimes`
    Camel,
    /// `AdventureTimes`
    Pascal,
    /// `adventure_times`
    Snake,
    /// `ADVENTURE_TIMES`
    ScreamingSnake,
    /// `adventure-times`
    Kebab,
    /// `ADVENTURE-TIMES`
    ScreamingKebab,
    /// `Adventure-Times`
    Train,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Kebab,
        Case::ScreamingKebab,
        Case::Train,
    ];

    /// Short lookup name, also used by serde.
    pub fn key(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::ScreamingSnake => "screaming-snake",
            Case::Kebab => "kebab",
            Case::ScreamingKebab => "screaming-kebab",
            Case::Train => "train",
        }
    }

    /// The convention's name written in the convention itself.
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Pascal => "PascalCase",
            Case::Snake => "snake_case",
            Case::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Case::Kebab => "kebab-case",
            Case::ScreamingKebab => "SCREAMING-KEBAB-CASE",
            Case::Train => "Train-Case",
        }
    }

    pub fn config(self) -> Config {
        match self {
            Case::Camel => Config::new(None, false, true),
            Case::Pascal => Config::new(None, true, true),
            Case::Snake | Case::ScreamingSnake => Config::new(Some("_"), false, false),
            Case::Kebab | Case::ScreamingKebab => Config::new(Some("-"), false, false),
            Case::Train => Config::new(Some("-"), true, true),
        }
    }

    /// Whether the output is uppercased after scanning.
    pub fn is_screaming(self) -> bool {
        matches!(self, Case::ScreamingSnake | Case::ScreamingKebab)
    }

    pub fn apply(self, input: &str) -> String {
        let out = self.config().apply(input);
        if self.is_screaming() {
            out.to_uppercase()
        } else {
            out
        }
    }

    /// Reduce a convention name to its lookup key.
    ///
    /// `camelCase`, `CAMEL_CASE` and `camel-case` all become `camel`.
    pub fn normalize_name(name: &str) -> String {
        let key = Case::Kebab.apply(name.trim());
        match key.strip_suffix("-case") {
            Some(stem) if !stem.is_empty() => stem.to_owned(),
            _ => key,
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        let case = match key {
            "camel" => Case::Camel,
            "pascal" | "upper-camel" => Case::Pascal,
            "snake" => Case::Snake,
            "screaming-snake" | "upper-snake" | "constant" => Case::ScreamingSnake,
            "kebab" | "dash" | "lisp" => Case::Kebab,
            "screaming-kebab" | "upper-kebab" | "cobol" => Case::ScreamingKebab,
            "train" => Case::Train,
            _ => return None,
        };
        Some(case)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to resolve a convention name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCaseError {
    #[error("unknown case: '{name}'")]
    Unknown { name: String },
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::from_key(&Case::normalize_name(s)).ok_or_else(|| ParseCaseError::Unknown {
            name: s.to_owned(),
        })
    }
}
