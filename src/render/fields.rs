use super::escape::escape_label_value_in_exact_selector;
use super::join_blocks;
use crate::filters::{
    AdHocFilter, EMPTY_VARIABLE_VALUE, FieldValue, group_by_key_and_inclusion,
};

/// Render one field filter with its envelope unwrapped:
/// `key<op>"<escaped inner value>"`.
fn render_field_filter(filter: &AdHocFilter) -> String {
    let field = FieldValue::from_filter(filter);
    if field.value == EMPTY_VARIABLE_VALUE || field.value.is_empty() {
        return format!("{}{}{}", filter.key, filter.operator, field.value);
    }
    format!(
        "{}{}\"{}\"",
        filter.key,
        filter.operator,
        escape_label_value_in_exact_selector(&field.value)
    )
}

/// Render one numeric field filter: `key<op><raw value>`, no quoting and
/// no escaping, since numeric literals are unquoted in the grammar.
fn render_numeric_field_filter(filter: &AdHocFilter) -> String {
    let field = FieldValue::from_filter(filter);
    format!("{}{}{}", filter.key, filter.operator, field.value)
}

/// Render structured-field filters for the line-pipeline context.
///
/// Same shape as the metadata renderer, except the value is unwrapped
/// from its `{value, parser}` envelope first, and numeric comparisons
/// form a third partition appended after the negative block. Numeric
/// constraints never group into an OR: `bytes>100 or bytes>200` has no
/// useful meaning, each stays its own stage.
pub fn render_field_filters(filters: &[AdHocFilter]) -> String {
    let (numeric, relational): (Vec<_>, Vec<_>) = filters
        .iter()
        .cloned()
        .partition(|filter| filter.operator.is_numeric());

    let groups = group_by_key_and_inclusion(&relational);

    let positive: Vec<String> = groups
        .positive
        .iter()
        .map(|group| {
            let rendered: Vec<String> =
                group.filters.iter().map(|f| render_field_filter(f)).collect();
            format!("| {}", rendered.join(" or "))
        })
        .collect();

    let negative: Vec<String> = groups
        .negative
        .iter()
        .flat_map(|group| {
            group
                .filters
                .iter()
                .map(|f| format!("| {}", render_field_filter(f)))
        })
        .collect();

    let numeric: Vec<String> = numeric
        .iter()
        .map(|f| format!("| {}", render_numeric_field_filter(f)))
        .collect();

    join_blocks(&[positive.join(" "), negative.join(" "), numeric.join(" ")])
}
