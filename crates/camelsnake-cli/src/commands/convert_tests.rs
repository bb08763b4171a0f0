use camelsnake_core::{Case, Config};

use super::convert::{ConvertArgs, Target};

fn args() -> ConvertArgs {
    ConvertArgs {
        words: Vec::new(),
        case: None,
        separator: None,
        capitalize_first: false,
        capitalize_rest: false,
        upper: false,
    }
}

#[test]
fn no_flags_means_kebab() {
    let target = Target::from_flags(&args());
    assert_eq!(target, Target::Preset(Case::Kebab));
    assert_eq!(target.apply("HTTPServer"), "http-server");
}

#[test]
fn custom_flags_build_config() {
    let target = Target::from_flags(&ConvertArgs {
        separator: Some(".".to_string()),
        capitalize_rest: true,
        ..args()
    });
    assert_eq!(
        target,
        Target::Custom {
            config: Config::new(Some("."), false, true),
            upper: false,
        }
    );
    assert_eq!(target.apply("foo_bar_baz"), "foo.Bar.Baz");
}

#[test]
fn capitalize_alone_joins_words() {
    let target = Target::from_flags(&ConvertArgs {
        capitalize_first: true,
        capitalize_rest: true,
        ..args()
    });
    assert_eq!(target.apply("adventure-times"), "AdventureTimes");
}

#[test]
fn upper_runs_after_scan() {
    let target = Target::from_flags(&ConvertArgs {
        separator: Some(".".to_string()),
        upper: true,
        ..args()
    });
    assert_eq!(target.apply("fooBar"), "FOO.BAR");
}

#[test]
fn preset_target_uses_case() {
    assert_eq!(
        Target::Preset(Case::ScreamingSnake).apply("XMLHttpRequest"),
        "XML_HTTP_REQUEST"
    );
}
