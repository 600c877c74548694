//! Autocomplete support: joining selected filters and deduplicating
//! candidate values
//!
//! When the UI fetches candidate values for one filter, the other
//! selected filters are first collapsed into a minimal upstream filter
//! set ([`join_tag_filters`], [`tag_values_request_filters`]), and the
//! returned candidates are stripped of values the user has already
//! selected before being sorted favorites-first
//! ([`suggested_tag_values`]).
//!
//! The network call itself lives with the caller; everything here
//! consumes already-resolved value lists.

use crate::filters::{
    AdHocFilter, FieldValue, FilterOp, ParserKind, group_by_key_and_inclusion,
};
use std::collections::{BTreeSet, HashMap};

/// Collapse same-key filters into alternation form.
///
/// Single-member groups pass through with their original operator.
/// Multi-member positive groups become one `=~` filter with pipe-joined
/// values; multi-member negative groups become one `!~` filter.
pub fn join_tag_filters(filters: &[AdHocFilter]) -> Vec<AdHocFilter> {
    let groups = group_by_key_and_inclusion(filters);
    let mut joined = Vec::with_capacity(groups.positive.len() + groups.negative.len());

    for (class, collapsed_op) in [
        (&groups.positive, FilterOp::RegexEqual),
        (&groups.negative, FilterOp::RegexNotEqual),
    ] {
        for group in class.iter() {
            if let [single] = group.filters.as_slice() {
                joined.push(AdHocFilter::new(group.key, single.operator, &single.value));
            } else {
                let values: Vec<&str> = group.filters.iter().map(|f| f.value.as_str()).collect();
                joined.push(AdHocFilter::new(group.key, collapsed_op, values.join("|")));
            }
        }
    }

    joined
}

/// Build the upstream filter set for fetching candidate values for
/// `target`.
///
/// Starting from the joined filters, a same-key exact match is removed
/// when the target operator is inclusive: an exact `=` and a differing
/// value on the same key cannot coexist, and keeping it would make every
/// other candidate impossible. When that removal leaves no inclusive
/// filter on the key, the key's exclusive filters are dropped too; the
/// backend rejects a stream selector that only excludes on a key.
pub fn tag_values_request_filters(
    filters: &[AdHocFilter],
    target: &AdHocFilter,
) -> Vec<AdHocFilter> {
    let mut joined: Vec<AdHocFilter> = join_tag_filters(filters)
        .into_iter()
        .filter(|f| {
            !(target.operator.is_inclusive()
                && f.key == target.key
                && f.operator == FilterOp::Equal)
        })
        .collect();

    let key_has_inclusive = joined
        .iter()
        .any(|f| f.key == target.key && f.operator.is_inclusive());
    if !key_has_inclusive {
        joined.retain(|f| f.key != target.key);
    }

    joined
}

/// Drop candidate values the user has already selected on `key`.
///
/// A candidate is dropped when it equals an exact-match filter value or
/// appears inside the pipe-joined value of a regex filter on the same
/// key.
pub fn filter_used_tag_values(
    candidates: Vec<String>,
    filters: &[AdHocFilter],
    key: &str,
) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|candidate| {
            !filters
                .iter()
                .filter(|f| f.key == key)
                .any(|f| {
                    let value = f.display_value();
                    if f.operator.is_regex() {
                        value.split('|').any(|v| v == candidate)
                    } else {
                        f.operator == FilterOp::Equal && value == candidate
                    }
                })
        })
        .collect()
}

/// Read access to the user's favorited label values, keyed by data
/// source and filter key.
///
/// Injected into the suggestion step instead of read from ambient
/// storage so ordering stays deterministic under test.
pub trait FavoriteValuesStore {
    fn favorite_values(&self, datasource_uid: &str, key: &str) -> BTreeSet<String>;
}

/// In-memory favorites, the default store for tests and embedding
/// callers that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    values: HashMap<(String, String), BTreeSet<String>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, datasource_uid: &str, key: &str, value: impl Into<String>) {
        self.values
            .entry((datasource_uid.to_string(), key.to_string()))
            .or_default()
            .insert(value.into());
    }
}

impl FavoriteValuesStore for InMemoryFavorites {
    fn favorite_values(&self, datasource_uid: &str, key: &str) -> BTreeSet<String> {
        self.values
            .get(&(datasource_uid.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Stable-sort values so favorites come first; ties keep their original
/// order.
pub fn sort_favorites_first(values: &mut [String], favorites: &BTreeSet<String>) {
    if favorites.is_empty() {
        return;
    }
    values.sort_by_key(|value| !favorites.contains(value));
}

/// Turn a fetched candidate list into the suggestion list for one
/// filter: already-selected values removed, favorited values first.
pub fn suggested_tag_values(
    candidates: Vec<String>,
    filters: &[AdHocFilter],
    key: &str,
    datasource_uid: &str,
    favorites: &dyn FavoriteValuesStore,
) -> Vec<String> {
    let mut suggestions = filter_used_tag_values(candidates, filters, key);
    sort_favorites_first(&mut suggestions, &favorites.favorite_values(datasource_uid, key));
    suggestions
}

/// One autocomplete suggestion: the display text, and for field filters
/// the envelope-encoded value to store on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagValueSuggestion {
    pub text: String,
    pub value: Option<String>,
}

/// Re-wrap candidate field values into the envelope form.
///
/// The parser comes from the currently-edited filter's decoded value, or
/// from the filter's `meta` hint (default `Mixed`) while the filter is
/// still work in progress. Structured-metadata fields carry no envelope.
pub fn field_value_suggestions(
    candidates: Vec<String>,
    filter: &AdHocFilter,
) -> Vec<TagValueSuggestion> {
    let parser = if filter.value.is_empty() {
        filter
            .meta
            .as_ref()
            .and_then(|meta| meta.parser)
            .unwrap_or(ParserKind::Mixed)
    } else {
        FieldValue::from_filter(filter).parser
    };

    candidates
        .into_iter()
        .map(|candidate| {
            let value = if parser == ParserKind::StructuredMetadata {
                None
            } else {
                Some(FieldValue::new(candidate.clone(), parser).encode())
            };
            TagValueSuggestion {
                text: candidate,
                value,
            }
        })
        .collect()
}
