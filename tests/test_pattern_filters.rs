use logql_builder::filters::{PatternFilter, PatternKind};
use logql_builder::render::render_pattern_filters;

fn pattern(text: &str, kind: PatternKind) -> PatternFilter {
    PatternFilter::new(text, kind)
}

#[test]
fn test_empty_input_renders_empty_string() {
    assert_eq!(render_pattern_filters(&[]), "");
}

#[test]
fn test_single_include_pattern_escapes_embedded_quotes() {
    let patterns = vec![pattern(
        r#"level=info ts=<_> msg="completing block""#,
        PatternKind::Include,
    )];

    assert_eq!(
        render_pattern_filters(&patterns),
        r#"|> "level=info ts=<_> msg=\"completing block\"""#
    );
}

#[test]
fn test_backticks_pass_through_unescaped() {
    let patterns = vec![pattern(
        r#"logger=sqlstore.metrics traceID=<_> msg="query finished" sql="INSERT INTO instance (`org_id`, `result`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `org_id`=VALUES(`org_id`)" error=null"#,
        PatternKind::Include,
    )];

    assert_eq!(
        render_pattern_filters(&patterns),
        r#"|> "logger=sqlstore.metrics traceID=<_> msg=\"query finished\" sql=\"INSERT INTO instance (`org_id`, `result`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `org_id`=VALUES(`org_id`)\" error=null""#
    );
}

#[test]
fn test_multiple_include_patterns_join_with_or_under_one_token() {
    let patterns = vec![
        pattern("first <_> pattern", PatternKind::Include),
        pattern("second <_> pattern", PatternKind::Include),
    ];

    assert_eq!(
        render_pattern_filters(&patterns),
        r#"|> "first <_> pattern" or "second <_> pattern""#
    );
}

#[test]
fn test_exclude_patterns_each_get_their_own_token() {
    let patterns = vec![
        pattern("noise <_>", PatternKind::Exclude),
        pattern("more noise <_>", PatternKind::Exclude),
    ];

    assert_eq!(
        render_pattern_filters(&patterns),
        r#"!> "noise <_>" !> "more noise <_>""#
    );
}

#[test]
fn test_exclude_fragment_precedes_include_fragment() {
    let patterns = vec![
        pattern("keep <_> this", PatternKind::Include),
        pattern("drop <_> that", PatternKind::Exclude),
    ];

    assert_eq!(
        render_pattern_filters(&patterns),
        r#"!> "drop <_> that" |> "keep <_> this""#
    );
}
