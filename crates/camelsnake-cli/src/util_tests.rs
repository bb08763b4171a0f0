use std::io::{self, Cursor};

use crate::util::{InputError, expand_words, read_lines};

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fake_stdin() -> io::Result<Vec<String>> {
    Ok(words(&["fromStdin", "second_line"]))
}

#[test]
fn plain_words_pass_through() {
    let inputs = expand_words(&words(&["fooBar", "x"]), || panic!("stdin not expected")).unwrap();
    assert_eq!(inputs, ["fooBar", "x"]);
}

#[test]
fn no_words_reads_stdin() {
    let inputs = expand_words(&[], fake_stdin).unwrap();
    assert_eq!(inputs, ["fromStdin", "second_line"]);
}

#[test]
fn dash_splices_stdin_once() {
    let inputs = expand_words(&words(&["a", "-", "b", "-"]), fake_stdin).unwrap();
    assert_eq!(inputs, ["a", "fromStdin", "second_line", "b"]);
}

#[test]
fn stdin_failure_is_reported() {
    let err = expand_words(&[], || Err(io::Error::other("closed"))).unwrap_err();
    assert!(matches!(err, InputError::Stdin(_)));
    assert_eq!(err.to_string(), "failed to read stdin: closed");
}

#[test]
fn read_lines_strips_line_endings() {
    let lines = read_lines(Cursor::new("fooBar\r\nbaz_qux\n\nlast")).unwrap();
    assert_eq!(lines, ["fooBar", "baz_qux", "", "last"]);
}
