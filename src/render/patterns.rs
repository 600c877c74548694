use super::escape::escape_label_value_in_exact_selector;
use super::join_blocks;
use crate::filters::{PatternFilter, PatternKind};

/// Render detected-pattern filters.
///
/// Exclude patterns each get their own `!>` stage. Include patterns
/// share a single `|>` stage, joined with `or` when there are several.
/// The exclude fragment precedes the include fragment. Patterns always
/// use exact-selector escaping; backticks inside a pattern pass through
/// since the quoting is double-quote based.
pub fn render_pattern_filters(patterns: &[PatternFilter]) -> String {
    let exclude: Vec<String> = patterns
        .iter()
        .filter(|p| p.kind == PatternKind::Exclude)
        .map(|p| format!("!> \"{}\"", escape_label_value_in_exact_selector(&p.pattern)))
        .collect();

    let include: Vec<String> = patterns
        .iter()
        .filter(|p| p.kind == PatternKind::Include)
        .map(|p| format!("\"{}\"", escape_label_value_in_exact_selector(&p.pattern)))
        .collect();

    let include_line = if include.is_empty() {
        String::new()
    } else {
        format!("|> {}", include.join(" or "))
    };

    join_blocks(&[exclude.join(" "), include_line])
}
