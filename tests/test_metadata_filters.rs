use logql_builder::filters::{AdHocFilter, FilterOp};
use logql_builder::render::render_metadata_filters;

fn filter(key: &str, operator: FilterOp, value: &str) -> AdHocFilter {
    AdHocFilter::new(key, operator, value)
}

#[test]
fn test_renders_positive_filters() {
    let filters = vec![
        filter("level", FilterOp::Equal, "info"),
        filter("cluster", FilterOp::Equal, r#"lil"-cluster"#),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level="info" | cluster="lil\"-cluster""#
    );
}

#[test]
fn test_renders_negative_filters() {
    let filters = vec![
        filter("level", FilterOp::NotEqual, "info"),
        filter("cluster", FilterOp::NotEqual, "lil-cluster"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level!="info" | cluster!="lil-cluster""#
    );
}

#[test]
fn test_groups_positive_filters_with_or() {
    let filters = vec![
        filter("level", FilterOp::Equal, "info"),
        filter("level", FilterOp::Equal, "error"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level="info" or level="error""#
    );
}

#[test]
fn test_groups_positive_regex_filters_with_or() {
    let filters = vec![
        filter("level", FilterOp::RegexEqual, "info"),
        filter("level", FilterOp::RegexEqual, "error"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level=~"info" or level=~"error""#
    );
}

#[test]
fn test_renders_grouped_and_ungrouped_positive_and_negative_filters() {
    let filters = vec![
        filter("level", FilterOp::Equal, "info"),
        filter("component", FilterOp::NotEqual, "comp1"),
        filter("level", FilterOp::Equal, "error"),
        filter("cluster", FilterOp::Equal, "lil-cluster"),
        filter("pod", FilterOp::NotEqual, "pod1"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level="info" or level="error" | cluster="lil-cluster" | component!="comp1" | pod!="pod1""#
    );
}

#[test]
fn test_escapes_regex_filter_values_for_the_quoted_literal() {
    // Regex-equal metadata values are pre-built patterns; only the
    // quoted-literal escaping applies, never a second regex escape.
    let filters = vec![
        filter("host", FilterOp::RegexEqual, r"((25[0-5]|(2[0-4]|1\d|[1-9]|)\d)\.?\b){4}"),
        filter("level", FilterOp::RegexEqual, "error"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| host=~"((25[0-5]|(2[0-4]|1\\d|[1-9]|)\\d)\\.?\\b){4}" | level=~"error""#
    );
}

#[test]
fn test_mixed_regex_and_non_regex_filters() {
    let filters = vec![
        filter("level", FilterOp::RegexEqual, "info"),
        filter("component", FilterOp::RegexNotEqual, "comp1"),
        filter("level", FilterOp::RegexEqual, "error"),
        filter("cluster", FilterOp::Equal, "lil-cluster"),
        filter("pod", FilterOp::NotEqual, "pod1"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level=~"info" or level=~"error" | cluster="lil-cluster" | component!~"comp1" | pod!="pod1""#
    );
}

#[test]
fn test_empty_input_renders_empty_string() {
    assert_eq!(render_metadata_filters(&[]), "");
}

#[test]
fn test_same_key_member_order_follows_input() {
    let filters = vec![
        filter("level", FilterOp::Equal, "error"),
        filter("level", FilterOp::Equal, "info"),
    ];

    assert_eq!(
        render_metadata_filters(&filters),
        r#"| level="error" or level="info""#
    );
}
