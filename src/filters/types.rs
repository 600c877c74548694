use super::error::FilterError;
use super::operators::{FilterOp, LineFilterOp};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sentinel meaning "match the empty value". The sentinel is the
/// two-character string `""` and renders unquoted (`key=""`), since the
/// grammar disallows an empty quoted literal in that position.
pub const EMPTY_VARIABLE_VALUE: &str = "\"\"";

/// Which log-line parser produced a structured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParserKind {
    Logfmt,
    Json,
    StructuredMetadata,
    Mixed,
}

/// Extra state attached to a filter by the autocomplete surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserKind>,
}

/// A single ad-hoc filter as held by the label, metadata, and
/// structured-field variables.
///
/// `key` and `operator` are never empty; `value` may be empty only for a
/// work-in-progress filter, which renders without quoting. For
/// structured-field filters `value` carries the serialized
/// [`FieldValue`] envelope, never shown to the renderers directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdHocFilter {
    pub key: String,
    pub operator: FilterOp,
    pub value: String,
    /// Display labels for the value, e.g. the decoded field value of an
    /// enveloped filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FilterMeta>,
}

impl AdHocFilter {
    pub fn new(key: impl Into<String>, operator: FilterOp, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
            value_labels: Vec::new(),
            meta: None,
        }
    }

    /// The value as shown to the user: the first value label when one is
    /// present, the raw value otherwise.
    pub fn display_value(&self) -> &str {
        self.value_labels.first().map_or(self.value.as_str(), String::as_str)
    }
}

/// Whether a line filter matches case-sensitively.
///
/// Declaration order doubles as rendering precedence; serialized form
/// matches the UI variable keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum LineFilterCase {
    CaseSensitive,
    CaseInsensitive,
}

/// A free-text filter applied to the log line body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFilter {
    pub case_sensitivity: LineFilterCase,
    pub operator: LineFilterOp,
    pub value: String,
}

impl LineFilter {
    pub fn new(
        case_sensitivity: LineFilterCase,
        operator: LineFilterOp,
        value: impl Into<String>,
    ) -> Self {
        Self {
            case_sensitivity,
            operator,
            value: value.into(),
        }
    }
}

/// Whether a detected pattern narrows to or excludes matching lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Include,
    Exclude,
}

/// A detected literal log-line template applied as a pattern filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternFilter {
    pub pattern: String,
    #[serde(rename = "type")]
    pub kind: PatternKind,
}

impl PatternFilter {
    pub fn new(pattern: impl Into<String>, kind: PatternKind) -> Self {
        Self {
            pattern: pattern.into(),
            kind,
        }
    }
}

/// The decoded payload of a structured-field filter value.
///
/// Field filters must remember which parser produced the field, so their
/// `value` string is a JSON envelope rather than the raw field value.
/// Encoding and decoding are confined to this boundary; the renderers
/// only ever see the decoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: String,
    pub parser: ParserKind,
}

impl FieldValue {
    pub fn new(value: impl Into<String>, parser: ParserKind) -> Self {
        Self {
            value: value.into(),
            parser,
        }
    }

    /// Serialize into the envelope form stored in a filter's `value`.
    pub fn encode(&self) -> String {
        // A struct of two plain strings cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| self.value.clone())
    }

    /// Strict decode of an envelope string.
    pub fn decode(raw: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode the envelope carried by `filter`, degrading to the raw
    /// value with the `Mixed` parser when the envelope is malformed.
    /// Renderers use this path so that a bad caller value can never make
    /// rendering fail.
    pub fn from_filter(filter: &AdHocFilter) -> Self {
        match Self::decode(&filter.value) {
            Ok(field) => field,
            Err(error) => {
                warn!(key = %filter.key, %error, "field filter value is not an envelope, using raw value");
                Self::new(filter.value.clone(), ParserKind::Mixed)
            }
        }
    }
}
