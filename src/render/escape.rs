use regex::Regex;
use std::sync::LazyLock;

static RE2_METACHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*+?()|\\.\[\]{}^$]").expect("valid re2 metacharacter regex"));

/// Escape a raw value for placement inside a double-quoted exact-match
/// literal.
///
/// Backslashes, newlines, and double quotes are escaped; nothing else is
/// expanded. Backticks pass through untouched since the grammar quotes
/// with double quotes.
pub fn escape_label_value_in_exact_selector(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
}

/// Escape a raw value for placement inside a double-quoted regex-match
/// literal so the text matches literally.
///
/// RE2 metacharacters are escaped first, then the result goes through
/// the exact-selector escaping. Used when a literal-match line filter is
/// rendered through the regex operator to carry the case-insensitive
/// flag; user text must not be interpreted as regex on that path.
pub fn escape_label_value_in_regex_selector(value: &str) -> String {
    escape_label_value_in_exact_selector(&RE2_METACHARACTERS.replace_all(value, r"\$0"))
}
