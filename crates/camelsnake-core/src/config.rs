//! Boundary scanner and its configuration.
//!
//! The scanner walks the input once, left to right. A word boundary fires on
//! any change of character class except Upper → Lower (a capital followed by
//! lowercase letters stays one word), plus the acronym split: inside a run of
//! capitals, the last capital starts a new word when a lowercase letter
//! follows it (`HTTPServer` → `HTTP` + `Server`).
//!
//! `_` and `-` are consumed as delimiters: they are never emitted and push the
//! start of the next word past themselves.

use serde::{Deserialize, Serialize};

use crate::char_class::{CharClass, classify};

/// Separator and capitalization policy for [`convert`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inserted at every word boundary. `None` runs the words together.
    pub separator: Option<String>,
    /// Uppercase the first character of the first word.
    pub capitalize_first: bool,
    /// Uppercase the first character of every later word.
    pub capitalize_rest: bool,
}

impl Config {
    pub fn new(separator: Option<&str>, capitalize_first: bool, capitalize_rest: bool) -> Self {
        Self {
            separator: separator.map(str::to_owned),
            capitalize_first,
            capitalize_rest,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        convert(
            input,
            self.separator.as_deref(),
            self.capitalize_first,
            self.capitalize_rest,
        )
    }
}

/// Mutable state of a single scan. Owned by one `convert` call.
pub(crate) struct ScanState {
    pub(crate) prev_class: Option<CharClass>,
    /// Char index where the current word begins.
    pub(crate) prev_boundary: usize,
    pub(crate) out: String,
}

impl ScanState {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            prev_class: None,
            prev_boundary: 0,
            out: String::with_capacity(capacity),
        }
    }

    fn is_boundary(&self, index: usize, class: CharClass, next: Option<char>) -> bool {
        let prev = self.prev_class;

        let class_changed = prev != Some(class)
            && index > self.prev_boundary
            && !(prev == Some(CharClass::Upper) && class == CharClass::Lower);

        // HTTPServer -> HTTP + Server
        let acronym_split = prev == Some(CharClass::Upper)
            && class == CharClass::Upper
            && next.is_some_and(|ch| classify(ch) == CharClass::Lower);

        class_changed || acronym_split
    }

    fn push_upper(&mut self, ch: char) {
        self.out.extend(ch.to_uppercase());
    }

    fn push_lower(&mut self, ch: char) {
        self.out.extend(ch.to_lowercase());
    }
}

/// Split `input` into words and rejoin them.
///
/// `separator` is inserted between words (`None` for camelCase/PascalCase).
/// `capitalize_first` controls the first character of the input,
/// `capitalize_rest` the first character of every other word. All remaining
/// characters are lowercased. Total over every input: never fails.
///
/// # Examples
/// ```
/// use camelsnake_core::convert;
/// assert_eq!(convert("AdventureTimes", Some("-"), false, false), "adventure-times");
/// assert_eq!(convert("ADVENTURETimes", Some("_"), false, false), "adventure_times");
/// assert_eq!(convert("adventure_times", None, false, true), "adventureTimes");
/// ```
pub fn convert(
    input: &str,
    separator: Option<&str>,
    capitalize_first: bool,
    capitalize_rest: bool,
) -> String {
    let mut state = ScanState::with_capacity(input.len() + 2);
    let mut chars = input.chars().enumerate().peekable();

    while let Some((i, ch)) = chars.next() {
        let class = classify(ch);
        let next = chars.peek().map(|&(_, next)| next);

        if state.is_boundary(i, class, next) {
            if let Some(sep) = separator {
                state.out.push_str(sep);
            }
            state.prev_boundary = i;
        }
        state.assert_boundary_not_ahead(i);

        if class.is_delimiter() {
            state.prev_boundary += 1;
        } else if i == state.prev_boundary {
            let capitalize = if i == 0 {
                capitalize_first
            } else {
                capitalize_rest
            };
            if capitalize {
                state.push_upper(ch);
            } else {
                state.push_lower(ch);
            }
        } else {
            state.push_lower(ch);
        }

        state.prev_class = Some(class);
    }

    state.out
}
