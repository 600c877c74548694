//! Filter state and classification
//!
//! This module holds the filter types produced by the UI surfaces and the
//! pure classification and grouping primitives the renderers are built
//! on.
//!
//! # Filter categories
//!
//! - [`AdHocFilter`] - label, metadata, and structured-field filters
//!   (`key`, operator, value). Structured-field filters carry a JSON
//!   [`FieldValue`] envelope in `value` so the producing parser travels
//!   with the value; the envelope is decoded at this boundary and the
//!   renderers never see the serialized form.
//! - [`LineFilter`] - free-text filters against the log line body, with
//!   a case-sensitivity flag instead of a key.
//! - [`PatternFilter`] - detected literal log-line templates, included
//!   or excluded wholesale.
//!
//! # Operator classification
//!
//! Every operator is exactly one of inclusive or exclusive. The regex
//! and numeric predicates are orthogonal to that split: `=~`/`!~` (and
//! the line-filter `|~`/`!~`) are regex, and `>` `<` `>=` `<=` are
//! numeric. Classification is a pure function of the symbol, never of
//! context.

pub mod error;
pub mod group;
pub mod operators;
pub mod types;

pub use error::FilterError;
pub use group::{FilterGroups, KeyGroup, group_by_key_and_inclusion};
pub use operators::{FilterOp, LineFilterOp};
pub use types::{
    AdHocFilter, EMPTY_VARIABLE_VALUE, FieldValue, FilterMeta, LineFilter, LineFilterCase,
    ParserKind, PatternFilter, PatternKind,
};
