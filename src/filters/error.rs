use thiserror::Error;

/// Errors that can occur at the filter boundary
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Unknown filter operator: '{0}'")]
    UnknownOperator(String),

    #[error("Invalid field value envelope: {0}")]
    InvalidFieldValue(#[from] serde_json::Error),
}
