//! FILENAME: core/table-group-row/src/rows.rs
//! Row Projection - Re-tags aggregate rows as group rows.
//!
//! The data pipeline emits group-aggregate rows as ordinary data rows. A row
//! is a group row when the caller's predicate says so, or when its payload
//! carries the legacy `type: "groupRow"` marker. Group rows get the group
//! tag, a derived key and the key of the header column their label spans
//! from. Rows are never added, removed or reordered.

use std::borrow::Cow;
use std::sync::Arc;

use log::{debug, trace};
use serde_json::Value;
use table_view::TableRow;

use crate::definition::{group_key, TABLE_GROUP_TYPE};

/// Payload type marking a group row in data that predates group predicates.
pub const LEGACY_GROUP_ROW_TYPE: &str = "groupRow";

// ============================================================================
// ROW PAYLOAD ACCESS
// ============================================================================

/// Read access to the fields of a row payload that group rows rely on.
pub trait GroupRowData {
    /// Key of the group, unique among its siblings.
    fn group_key(&self) -> Option<Cow<'_, str>>;

    /// Name of the column the group was built from.
    fn grouped_by(&self) -> Option<&str>;

    /// Value of the payload's own `type` field, if it has one.
    fn legacy_row_type(&self) -> Option<&str> {
        None
    }
}

/// JSON payloads: `{ "key": ..., "groupedBy": "...", "type": "groupRow" }`.
impl GroupRowData for Value {
    fn group_key(&self) -> Option<Cow<'_, str>> {
        match self.get("key")? {
            Value::String(key) => Some(Cow::Borrowed(key.as_str())),
            Value::Number(key) => Some(Cow::Owned(key.to_string())),
            Value::Bool(key) => Some(Cow::Owned(key.to_string())),
            _ => None,
        }
    }

    fn grouped_by(&self) -> Option<&str> {
        self.get("groupedBy")?.as_str()
    }

    fn legacy_row_type(&self) -> Option<&str> {
        self.get("type")?.as_str()
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Why (or whether) a row is a group row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRowMarker {
    /// The group-row predicate matched.
    Predicate,
    /// Only the legacy payload marker matched.
    // TODO: drop once all producers supply a group-row predicate.
    LegacyType,
    NotGroup,
}

impl GroupRowMarker {
    pub fn is_group(&self) -> bool {
        !matches!(self, GroupRowMarker::NotGroup)
    }
}

/// Classifies one row payload. The predicate is consulted first.
pub fn classify_row<R, F>(row: &R, is_group_row: &F) -> GroupRowMarker
where
    R: GroupRowData + ?Sized,
    F: Fn(&R) -> bool,
{
    if is_group_row(row) {
        GroupRowMarker::Predicate
    } else if row.legacy_row_type() == Some(LEGACY_GROUP_ROW_TYPE) {
        GroupRowMarker::LegacyType
    } else {
        GroupRowMarker::NotGroup
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Projects table rows, re-tagging group rows in place.
/// Non-group rows are passed through as the same `Arc`.
pub fn table_rows_with_grouping<R, F>(
    table_rows: &[Arc<TableRow<R>>],
    is_group_row: F,
) -> Vec<Arc<TableRow<R>>>
where
    R: GroupRowData,
    F: Fn(&R) -> bool,
{
    let mut group_count = 0usize;
    let mut legacy_count = 0usize;

    let result: Vec<Arc<TableRow<R>>> = table_rows
        .iter()
        .map(|table_row| match classify_row(table_row.row.as_ref(), &is_group_row) {
            GroupRowMarker::NotGroup => Arc::clone(table_row),
            marker => {
                group_count += 1;
                if marker == GroupRowMarker::LegacyType {
                    legacy_count += 1;
                }
                Arc::new(group_row(table_row))
            }
        })
        .collect();

    trace!(
        "projected {} rows, {} group rows ({} legacy)",
        result.len(),
        group_count,
        legacy_count
    );

    result
}

fn group_row<R: GroupRowData>(table_row: &TableRow<R>) -> TableRow<R> {
    let payload = table_row.row.as_ref();
    let col_span_start = payload.grouped_by().map(group_key);
    if col_span_start.is_none() {
        debug!("group row without groupedBy, no span anchor");
    }

    TableRow {
        key: payload.group_key().map(|key| group_key(&key)),
        row_type: TABLE_GROUP_TYPE,
        row: Arc::clone(&table_row.row),
        col_span_start,
    }
}
