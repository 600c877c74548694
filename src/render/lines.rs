use super::escape::{
    escape_label_value_in_exact_selector, escape_label_value_in_regex_selector,
};
use crate::filters::{LineFilter, LineFilterCase, LineFilterOp};

/// Escape a line filter value per the operator's intent.
///
/// A true regex operator means the text is already regex, so only the
/// quoted-literal escaping applies. A literal-match operator rendered
/// case-insensitively must go through the regex operator to carry the
/// `(?i)` flag, so its text additionally gets regex-metacharacter
/// escaping to stay a literal match.
fn escape_line_filter_value(filter: &LineFilter) -> String {
    match filter.operator {
        LineFilterOp::Match | LineFilterOp::NegativeMatch => match filter.case_sensitivity {
            LineFilterCase::CaseInsensitive => escape_label_value_in_regex_selector(&filter.value),
            LineFilterCase::CaseSensitive => escape_label_value_in_exact_selector(&filter.value),
        },
        LineFilterOp::Regex | LineFilterOp::NegativeRegex => {
            escape_label_value_in_exact_selector(&filter.value)
        }
    }
}

/// Build one rendered line filter, switching to the regex operator and
/// injecting the `(?i)` flag for case-insensitive filters.
fn build_line_filter(filter: &LineFilter, value: &str) -> String {
    if filter.case_sensitivity == LineFilterCase::CaseInsensitive {
        let operator = if filter.operator.is_exclusive() {
            LineFilterOp::NegativeRegex
        } else {
            LineFilterOp::Regex
        };
        return format!("{operator} \"(?i){value}\"");
    }

    format!("{} \"{}\"", filter.operator, value)
}

/// Stable-sort line filters into rendering precedence: case-sensitivity
/// first, then operator. Same-precedence filters keep their input order.
pub fn sort_line_filters(filters: &mut [LineFilter]) {
    filters.sort_by_key(|filter| (filter.case_sensitivity, filter.operator));
}

/// Render free-text line filters, space-joined.
///
/// Line filters are order-sensitive and never group by key, so they are
/// first sorted into a fixed precedence to make rendering deterministic
/// regardless of insertion order. Filters with an empty value are
/// work-in-progress placeholders and are dropped.
pub fn render_line_filters(filters: &[LineFilter]) -> String {
    let mut sorted: Vec<LineFilter> = filters.to_vec();
    sort_line_filters(&mut sorted);

    sorted
        .iter()
        .filter(|filter| !filter.value.is_empty())
        .map(|filter| {
            let value = escape_line_filter_value(filter);
            build_line_filter(filter, &value)
        })
        .collect::<Vec<String>>()
        .join(" ")
}
