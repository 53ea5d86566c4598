//! Slug generation for plugin names and slugs.

use std::sync::LazyLock;

use deunicode::deunicode;
use regex::Regex;

/// Characters that never survive into a slug.
static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]+").unwrap());
/// Whitespace runs become a single separator.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
/// Repeated separators collapse.
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Turn a display name into a URL and directory safe slug.
///
/// Unicode is transliterated to ASCII, the result is lowercased, punctuation
/// is dropped and whitespace becomes `-`. Underscores are kept.
///
/// # Examples
///
/// - `slugify("Awesome Sauce")` -> `"awesome-sauce"`
/// - `slugify("  Crème Brûlée! ")` -> `"creme-brulee"`
/// - `slugify("feed_tools")` -> `"feed_tools"`
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input.trim()).to_lowercase();
    let cleaned = UNSAFE_CHARS.replace_all(&ascii, "");
    let dashed = WHITESPACE.replace_all(cleaned.trim(), "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Awesome Sauce"), "awesome-sauce");
        assert_eq!(slugify("awesome-sauce"), "awesome-sauce");
        assert_eq!(slugify("Theme"), "theme");
    }

    #[test]
    fn test_slugify_punctuation_and_unicode() {
        assert_eq!(slugify("  Crème Brûlée! "), "creme-brulee");
        assert_eq!(slugify("A -- B"), "a-b");
        assert_eq!(slugify("feed_tools"), "feed_tools");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
