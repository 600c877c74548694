//! Wildcard search transforms and selector cleanup
//!
//! The free-text search box stores its value as a case-insensitive
//! wildcard regex (`(?i).*needle.*`) but displays the bare needle;
//! [`wrap_wildcard_search`] and [`unwrap_wildcard_search`] convert
//! between the two forms.

use regex::Regex;
use std::sync::LazyLock;

/// The 6-character prefix marking an already-wrapped search value.
const WILDCARD_PREFIX: &str = "(?i).*";

/// The match-everything search value, which is never wrapped.
const MATCH_ALL: &str = ".+";

static TRAILING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*\}").expect("valid trailing comma regex"));

/// Wrap a plain substring search into case-insensitive wildcard regex
/// form. Already-wrapped input and the bare `.+` pass through unchanged,
/// so wrapping is idempotent.
pub fn wrap_wildcard_search(input: &str) -> String {
    if input == MATCH_ALL || input.starts_with(WILDCARD_PREFIX) {
        return input.to_string();
    }
    format!("{WILDCARD_PREFIX}{input}.*")
}

/// Inverse of [`wrap_wildcard_search`]: strip the wildcard wrapping when
/// both the prefix and the trailing `.*` are present, otherwise return
/// the input unchanged.
pub fn unwrap_wildcard_search(input: &str) -> String {
    if let Some(stripped) = input.strip_prefix(WILDCARD_PREFIX)
        && let Some(inner) = stripped.strip_suffix(".*")
    {
        return inner.to_string();
    }
    input.to_string()
}

/// Remove a stray comma left before the closing brace of a stream
/// selector, e.g. `{app="api", }` becomes `{app="api"}`.
pub fn sanitize_stream_selector(expression: &str) -> String {
    TRAILING_COMMA_RE.replace(expression, "}").to_string()
}
