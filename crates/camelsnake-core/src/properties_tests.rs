//! Property tests for the scanner.

use proptest::prelude::*;

use crate::{Case, convert};

/// `fooBarBaz`-shaped identifiers: a lowercase word followed by capitalized words.
fn camel_ident() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}", prop::collection::vec("[A-Z][a-z]{1,8}", 0..4))
        .prop_map(|(head, tail)| head + &tail.concat())
}

proptest! {
    #[test]
    fn never_panics(input in "\\PC*", sep in proptest::option::of("[-_:. ]{0,2}"), first in any::<bool>(), rest in any::<bool>()) {
        let _ = convert(&input, sep.as_deref(), first, rest);
    }

    #[test]
    fn camel_input_is_a_fixed_point(input in camel_ident()) {
        let once = Case::Camel.apply(&input);
        prop_assert_eq!(&once, &input);
        prop_assert_eq!(Case::Camel.apply(&once), once);
    }

    #[test]
    fn camel_kebab_camel_round_trips(input in camel_ident()) {
        let kebab = Case::Kebab.apply(&input);
        prop_assert_eq!(Case::Camel.apply(&kebab), input);
    }

    #[test]
    fn no_delimiters_without_separator(input in "[a-zA-Z0-9_-]{0,32}", first in any::<bool>(), rest in any::<bool>()) {
        let out = convert(&input, None, first, rest);
        prop_assert!(!out.contains(['_', '-']), "{input:?} -> {out:?}");
    }

    #[test]
    fn acronym_run_splits_before_last_capital(run in "[A-Z]{1,6}", word in "[A-Z][a-z]{1,6}") {
        let input = format!("{run}{word}");
        let expected = format!("{}-{}", run.to_lowercase(), word.to_lowercase());
        prop_assert_eq!(convert(&input, Some("-"), false, false), expected);
    }

    #[test]
    fn capital_run_alone_is_one_word(run in "[A-Z]{1,12}") {
        prop_assert_eq!(convert(&run, Some("-"), false, false), run.to_lowercase());
    }
}
