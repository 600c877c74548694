use super::join_blocks;
use super::labels::render_filter;
use crate::filters::{AdHocFilter, group_by_key_and_inclusion};

/// Render structured-metadata filters for the line-pipeline context.
///
/// Positive same-key filters group with the word `or` inside a single
/// pipe stage (`| k="v1" or k="v2"`); negative filters each get their
/// own stage. Stages are space-joined.
pub fn render_metadata_filters(filters: &[AdHocFilter]) -> String {
    let groups = group_by_key_and_inclusion(filters);

    let positive: Vec<String> = groups
        .positive
        .iter()
        .map(|group| {
            let rendered: Vec<String> = group.filters.iter().map(|f| render_filter(f)).collect();
            format!("| {}", rendered.join(" or "))
        })
        .collect();

    let negative: Vec<String> = groups
        .negative
        .iter()
        .flat_map(|group| group.filters.iter().map(|f| format!("| {}", render_filter(f))))
        .collect();

    join_blocks(&[positive.join(" "), negative.join(" ")])
}
