use super::escape::escape_label_value_in_exact_selector;
use crate::filters::{AdHocFilter, EMPTY_VARIABLE_VALUE, FilterOp, group_by_key_and_inclusion};

/// Render one filter as `key<op>"<escaped value>"`.
///
/// The empty-value sentinel and a work-in-progress empty value render
/// without quoting, since the grammar disallows an empty quoted literal
/// in the selector position.
pub(crate) fn render_filter(filter: &AdHocFilter) -> String {
    if filter.value == EMPTY_VARIABLE_VALUE || filter.value.is_empty() {
        return format!("{}{}{}", filter.key, filter.operator, filter.value);
    }
    format!(
        "{}{}\"{}\"",
        filter.key,
        filter.operator,
        escape_label_value_in_exact_selector(&filter.value)
    )
}

/// Render a multi-value alternation: `key<op>"v1|v2|…"`.
///
/// Values are joined raw. They arrive either as pre-built regex (from a
/// regex-equal filter) or as plain label values whose grammar treats the
/// alternation as the only metacharacter in play, so escaping here would
/// corrupt the pattern.
pub fn render_regex_label_filter(key: &str, values: &[&str], operator: FilterOp) -> String {
    format!("{key}{operator}\"{}\"", values.join("|"))
}

/// Render label filters for the stream-selector context, comma-separated.
///
/// Positive groups with a single member keep the member's own operator;
/// multiple same-key positive filters collapse into one `=~` alternation
/// (independent equality constraints on one key become an OR). Negative
/// filters render one by one: a negated alternation is not equivalent to
/// multiple independent negations, so they never collapse.
pub fn render_label_filters(filters: &[AdHocFilter]) -> String {
    let groups = group_by_key_and_inclusion(filters);

    let mut positive = Vec::with_capacity(groups.positive.len());
    for group in &groups.positive {
        if let [single] = group.filters.as_slice() {
            positive.push(render_filter(single));
        } else {
            let values: Vec<&str> = group.filters.iter().map(|f| f.value.as_str()).collect();
            positive.push(render_regex_label_filter(group.key, &values, FilterOp::RegexEqual));
        }
    }

    let negative: Vec<String> = groups
        .negative
        .iter()
        .flat_map(|group| group.filters.iter().map(|f| render_filter(f)))
        .collect();

    let joined = format!("{}, {}", positive.join(", "), negative.join(", "));
    joined.trim_matches([' ', ',']).to_string()
}

/// Render the detected-level variable as a backtick-quoted alternation,
/// e.g. `| detected_level=~\`info|error\``.
pub fn render_levels_filter(filters: &[AdHocFilter]) -> String {
    if filters.is_empty() {
        return String::new();
    }
    let values: Vec<&str> = filters.iter().map(|f| f.value.as_str()).collect();
    format!(
        "| {}=~`{}`",
        crate::render::LEVEL_VARIABLE_VALUE,
        values.join("|")
    )
}
