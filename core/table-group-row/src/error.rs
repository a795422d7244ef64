//! FILENAME: core/table-group-row/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupingError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unknown grouping mode: {0}")]
    UnknownGroupingMode(String),

    #[error("Invalid group column width: {0}")]
    InvalidColumnWidth(f64),
}
