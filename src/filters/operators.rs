use super::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operators usable on label, metadata, and structured-field filters.
///
/// Serializes to the grammar symbol (`=`, `!=`, `=~`, `!~`, `>`, `<`,
/// `>=`, `<=`) so filters can round-trip through the collaborator
/// boundary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "=~")]
    RegexEqual,
    #[serde(rename = "!~")]
    RegexNotEqual,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
}

impl FilterOp {
    /// The operator token as it appears in the rendered query.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Equal => "=",
            FilterOp::NotEqual => "!=",
            FilterOp::RegexEqual => "=~",
            FilterOp::RegexNotEqual => "!~",
            FilterOp::Gt => ">",
            FilterOp::Lt => "<",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
        }
    }

    /// True for the equality family: every operator that narrows the
    /// result set toward matching values. Together with
    /// [`FilterOp::is_exclusive`] this partitions the operator set with
    /// no overlap and no gap; numeric comparisons count as inclusive.
    pub fn is_inclusive(&self) -> bool {
        !self.is_exclusive()
    }

    /// True for the negation family (`!=`, `!~`).
    pub fn is_exclusive(&self) -> bool {
        matches!(self, FilterOp::NotEqual | FilterOp::RegexNotEqual)
    }

    /// True for the regex-match operators (`=~`, `!~`).
    pub fn is_regex(&self) -> bool {
        matches!(self, FilterOp::RegexEqual | FilterOp::RegexNotEqual)
    }

    /// True for the numeric comparison operators. Numeric filters render
    /// their value bare, since numeric literals are not quoted in the
    /// grammar.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FilterOp::Gt | FilterOp::Lt | FilterOp::Gte | FilterOp::Lte
        )
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(FilterOp::Equal),
            "!=" => Ok(FilterOp::NotEqual),
            "=~" => Ok(FilterOp::RegexEqual),
            "!~" => Ok(FilterOp::RegexNotEqual),
            ">" => Ok(FilterOp::Gt),
            "<" => Ok(FilterOp::Lt),
            ">=" => Ok(FilterOp::Gte),
            "<=" => Ok(FilterOp::Lte),
            _ => Err(FilterError::UnknownOperator(s.to_string())),
        }
    }
}

/// Operators usable on free-text line filters.
///
/// The declaration order doubles as the rendering precedence used by
/// [`crate::render::render_line_filters`] when sorting filters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LineFilterOp {
    #[serde(rename = "|=")]
    Match,
    #[serde(rename = "!=")]
    NegativeMatch,
    #[serde(rename = "|~")]
    Regex,
    #[serde(rename = "!~")]
    NegativeRegex,
}

impl LineFilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineFilterOp::Match => "|=",
            LineFilterOp::NegativeMatch => "!=",
            LineFilterOp::Regex => "|~",
            LineFilterOp::NegativeRegex => "!~",
        }
    }

    /// True when the user's input is already a regular expression (`|~`,
    /// `!~`), as opposed to a literal substring match.
    pub fn is_regex(&self) -> bool {
        matches!(self, LineFilterOp::Regex | LineFilterOp::NegativeRegex)
    }

    /// True for the negated variants (`!=`, `!~`).
    pub fn is_exclusive(&self) -> bool {
        matches!(self, LineFilterOp::NegativeMatch | LineFilterOp::NegativeRegex)
    }
}

impl fmt::Display for LineFilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineFilterOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "|=" => Ok(LineFilterOp::Match),
            "!=" => Ok(LineFilterOp::NegativeMatch),
            "|~" => Ok(LineFilterOp::Regex),
            "!~" => Ok(LineFilterOp::NegativeRegex),
            _ => Err(FilterError::UnknownOperator(s.to_string())),
        }
    }
}
