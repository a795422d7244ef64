//! FILENAME: core/table-view/src/column.rs
//! Column descriptors.
//!
//! A `TableColumn` is what the renderer iterates over horizontally. Data
//! columns reference a `Column` (the underlying field); plugin columns may
//! reference one as well (e.g. group headers) or none at all.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::kind::TableType;

// ============================================================================
// COLUMN
// ============================================================================

/// An underlying field of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Field name. Unique among the data columns of a table.
    pub name: String,

    /// Caption shown in the header (defaults to the name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns the caption to display.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

// ============================================================================
// TABLE COLUMN
// ============================================================================

/// Describes a column in the rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    /// Identity key used by the renderer (plugin columns only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Which kind of column this is.
    #[serde(rename = "type")]
    pub column_type: TableType,

    /// The referenced field. Shared, never copied, between descriptors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<Arc<Column>>,

    /// Fixed width, if the column has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Placeholder for a column taking part in an uncommitted edit.
    #[serde(default, skip_serializing_if = "is_false")]
    pub draft: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TableColumn {
    /// Creates a data column for the given field.
    pub fn data(column: Column) -> Self {
        TableColumn {
            key: None,
            column_type: TableType::DATA,
            column: Some(Arc::new(column)),
            width: None,
            draft: false,
        }
    }

    /// Creates a column of a foreign kind without a field.
    pub fn of_type(column_type: TableType) -> Self {
        TableColumn {
            key: None,
            column_type,
            column: None,
            width: None,
            draft: false,
        }
    }

    /// Sets the referenced field.
    pub fn with_column(mut self, column: Arc<Column>) -> Self {
        self.column = Some(column);
        self
    }

    /// Sets the width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns a copy flagged as a draft placeholder.
    pub fn as_draft(&self) -> Self {
        TableColumn {
            draft: true,
            ..self.clone()
        }
    }

    /// Name of the referenced field, if any.
    pub fn column_name(&self) -> Option<&str> {
        self.column.as_deref().map(|c| c.name.as_str())
    }

    /// Field name of a data column; `None` for every other kind.
    pub fn data_column_name(&self) -> Option<&str> {
        if self.column_type.is_data() {
            self.column_name()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_column_name_only_for_data_columns() {
        let data = TableColumn::data(Column::new("region"));
        assert_eq!(data.data_column_name(), Some("region"));

        let custom = TableColumn::of_type(TableType::from_static("select"))
            .with_column(Arc::new(Column::new("region")));
        assert_eq!(custom.column_name(), Some("region"));
        assert_eq!(custom.data_column_name(), None);
    }

    #[test]
    fn test_as_draft_keeps_shared_column() {
        let data = TableColumn::data(Column::new("region"));
        let draft = data.as_draft();

        assert!(draft.draft);
        assert!(!data.draft);
        assert!(Arc::ptr_eq(
            data.column.as_ref().unwrap(),
            draft.column.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_wire_shape() {
        let column = TableColumn::data(Column::new("a"));
        assert_eq!(
            serde_json::to_value(&column).unwrap(),
            json!({ "type": "data", "column": { "name": "a" } })
        );

        let parsed: TableColumn = serde_json::from_value(json!({
            "type": "undefined",
            "column": { "name": "a", "title": "A" },
            "draft": true,
        }))
        .unwrap();
        assert_eq!(parsed.column_type.as_str(), "undefined");
        assert_eq!(parsed.column.as_ref().unwrap().display_title(), "A");
        assert!(parsed.draft);
    }
}
