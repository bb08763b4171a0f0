#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Identifier case conversion.
//!
//! Two layers:
//! - **Scanner** (`convert`): one pass over the input that detects word
//!   boundaries and re-emits the words with a separator and capitalization policy
//! - **Presets** (`Case`): named conventions built on top of the scanner
//!
//! ```
//! use camelsnake_core::{Case, convert};
//!
//! assert_eq!(convert("HTTPServer", Some("-"), false, false), "http-server");
//! assert_eq!(Case::Camel.apply("adventure_times"), "adventureTimes");
//! ```

mod case;
mod char_class;
mod config;
mod invariants;
pub mod utils;

#[cfg(test)]
mod char_class_tests;
#[cfg(test)]
mod properties_tests;

pub use case::{Case, ParseCaseError};
pub use char_class::{CharClass, classify};
pub use config::{Config, convert};
