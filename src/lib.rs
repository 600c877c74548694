//! Compile structured filter state into LogQL fragments.
//!
//! The UI holds one flat filter list per variable (labels, structured
//! metadata, structured fields, line filters, patterns); each renderer
//! here turns one of those lists into a single query-language fragment.
//! Callers assemble the full expression by space-joining the stream
//! selector, metadata, field, line, and pattern fragments in that order.
//!
//! Everything in this crate is a pure function of its inputs: no state,
//! no caching, no suspension points, safe to call concurrently.
//!
//! ```
//! use logql_builder::filters::{AdHocFilter, FilterOp};
//! use logql_builder::render::render_label_filters;
//!
//! let filters = vec![
//!     AdHocFilter::new("level", FilterOp::Equal, "info"),
//!     AdHocFilter::new("level", FilterOp::Equal, "error"),
//! ];
//! assert_eq!(render_label_filters(&filters), r#"level=~"info|error""#);
//! ```

pub mod filters;
pub mod render;
pub mod search;
pub mod tag_values;

pub use filters::{
    AdHocFilter, EMPTY_VARIABLE_VALUE, FieldValue, FilterError, FilterMeta, FilterOp, LineFilter,
    LineFilterCase, LineFilterOp, ParserKind, PatternFilter, PatternKind,
};
pub use render::{
    LEVEL_VARIABLE_VALUE, render_field_filters, render_label_filters, render_levels_filter,
    render_line_filters, render_metadata_filters, render_pattern_filters,
};
pub use search::{sanitize_stream_selector, unwrap_wildcard_search, wrap_wildcard_search};
pub use tag_values::{
    FavoriteValuesStore, InMemoryFavorites, TagValueSuggestion, field_value_suggestions,
    filter_used_tag_values, join_tag_filters, sort_favorites_first, suggested_tag_values,
    tag_values_request_filters,
};
