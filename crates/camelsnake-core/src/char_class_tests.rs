use crate::{CharClass, classify};

#[test]
fn classifies_ascii() {
    assert_eq!(classify('a'), CharClass::Lower);
    assert_eq!(classify('Z'), CharClass::Upper);
    assert_eq!(classify('7'), CharClass::Digit);
    assert_eq!(classify('_'), CharClass::Underscore);
    assert_eq!(classify('-'), CharClass::Dash);
}

#[test]
fn decimal_digits_in_any_script() {
    for ch in ['\u{0661}', '\u{0967}', '\u{FF17}'] {
        assert_eq!(classify(ch), CharClass::Digit, "{ch:?}");
    }
    // Superscripts are numbers but not decimal digits.
    assert_eq!(classify('²'), CharClass::Other);
}

#[test]
fn everything_else_is_other() {
    for ch in [' ', '.', '$', '\t', '/', '\0'] {
        assert_eq!(classify(ch), CharClass::Other, "{ch:?}");
    }
}

#[test]
fn cased_letters_outside_ascii() {
    assert_eq!(classify('é'), CharClass::Lower);
    assert_eq!(classify('Ж'), CharClass::Upper);
    // Uncased scripts fall through to Other.
    assert_eq!(classify('日'), CharClass::Other);
}

#[test]
fn only_dash_and_underscore_delimit() {
    let delimiters: Vec<_> = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Dash,
        CharClass::Underscore,
        CharClass::Other,
    ]
    .into_iter()
    .filter(|c| c.is_delimiter())
    .collect();
    assert_eq!(delimiters, [CharClass::Dash, CharClass::Underscore]);
}
