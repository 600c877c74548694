//! Filter-to-LogQL fragment rendering
//!
//! Each renderer turns one category of filter state into a single
//! grammar fragment, ready for the caller to assemble into a full
//! expression. Fragments never carry leading or trailing separator
//! characters; the caller joins the stream selector, metadata, field,
//! line, and pattern fragments with single spaces, in that order.
//!
//! Rendering is pure and infallible: malformed input renders verbatim
//! rather than failing, and an empty filter list always renders as an
//! empty string.

pub mod escape;
pub mod fields;
pub mod labels;
pub mod lines;
pub mod metadata;
pub mod patterns;

pub use escape::{escape_label_value_in_exact_selector, escape_label_value_in_regex_selector};
pub use fields::render_field_filters;
pub use labels::{render_label_filters, render_levels_filter, render_regex_label_filter};
pub use lines::{render_line_filters, sort_line_filters};
pub use metadata::render_metadata_filters;
pub use patterns::render_pattern_filters;

/// The reserved key the detected-level variable renders under.
pub const LEVEL_VARIABLE_VALUE: &str = "detected_level";

/// Join rendered blocks with single spaces, skipping empty ones so a
/// missing block never leaves a doubled separator behind.
pub(crate) fn join_blocks(blocks: &[String]) -> String {
    blocks
        .iter()
        .filter(|block| !block.is_empty())
        .cloned()
        .collect::<Vec<String>>()
        .join(" ")
}
