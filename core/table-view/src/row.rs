//! FILENAME: core/table-view/src/row.rs
//! Row descriptors.
//!
//! A `TableRow` wraps an opaque row payload produced by the data pipeline.
//! The payload is shared through an `Arc` so that plugins can re-tag a row
//! without copying the data behind it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kind::TableType;

/// Describes a row in the rendered table.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow<R> {
    /// Identity key used by the renderer (plugin rows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Which kind of row this is.
    #[serde(rename = "type")]
    pub row_type: TableType,

    /// The row payload.
    pub row: Arc<R>,

    /// Key of the column a spanning cell of this row starts at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span_start: Option<String>,
}

// Manual impl: cloning shares the payload, so `R` need not be `Clone`.
impl<R> Clone for TableRow<R> {
    fn clone(&self) -> Self {
        TableRow {
            key: self.key.clone(),
            row_type: self.row_type.clone(),
            row: Arc::clone(&self.row),
            col_span_start: self.col_span_start.clone(),
        }
    }
}

impl<R> TableRow<R> {
    /// Creates a data row around the given payload.
    pub fn data(row: R) -> Self {
        TableRow {
            key: None,
            row_type: TableType::DATA,
            row: Arc::new(row),
            col_span_start: None,
        }
    }
}
