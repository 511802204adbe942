//! Sentence casing: first word lowercase, every later word capitalized.
//!
//! ```rust
//! use utilkit::casing::to_camel_case;
//!
//! assert_eq!(to_camel_case("i'm feeling lucky"), "i'm Feeling Lucky");
//! ```
//!
//! Words are split on any run of whitespace and rejoined with single
//! spaces. Each word is treated by position, so a repeated word is
//! lowercased the first time and capitalized afterwards.

/// Uppercases the first character of `word` and lowercases the rest.
///
/// # Examples
///
/// ```rust
/// use utilkit::casing::capitalize;
///
/// assert_eq!(capitalize("lUCKY"), "Lucky");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut characters = word.chars();
    characters.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(characters.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Lowercases the first word of `input` and capitalizes the others.
///
/// Empty or whitespace-only input yields an empty string.
///
/// # Examples
///
/// ```rust
/// use utilkit::casing::to_camel_case;
///
/// assert_eq!(to_camel_case("I'm i'm"), "i'm I'm");
/// assert_eq!(to_camel_case("   "), "");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut words = input.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut converted = first.to_lowercase();
    for word in words {
        converted.push(' ');
        converted.push_str(&capitalize(word));
    }
    converted
}
