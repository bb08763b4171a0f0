//! Shorthands for the most common conversions.

use crate::Case;

/// Convert any supported convention to camelCase.
///
/// # Examples
/// ```
/// use camelsnake_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("foo_bar"), "fooBar");
/// assert_eq!(to_camel_case("FooBar"), "fooBar");
/// ```
pub fn to_camel_case(s: &str) -> String {
    Case::Camel.apply(s)
}

/// Convert any supported convention to PascalCase.
///
/// # Examples
/// ```
/// use camelsnake_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("foo_bar"), "FooBar");
/// assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    Case::Pascal.apply(s)
}

/// Convert any supported convention to snake_case.
///
/// # Examples
/// ```
/// use camelsnake_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    Case::Snake.apply(s)
}

pub fn to_screaming_snake_case(s: &str) -> String {
    Case::ScreamingSnake.apply(s)
}

pub fn to_kebab_case(s: &str) -> String {
    Case::Kebab.apply(s)
}
