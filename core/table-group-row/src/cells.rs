//! FILENAME: core/table-group-row/src/cells.rs
//! Cell classification for the group-row renderer.
//!
//! A group row spans from the header column of its own level. Header columns
//! of outer levels render as indent cells; header columns of inner levels
//! are covered by the span.

use table_view::{TableColumn, TableRow};

use crate::definition::{Grouping, TABLE_GROUP_TYPE};
use crate::rows::GroupRowData;

pub fn is_group_table_row<R>(table_row: &TableRow<R>) -> bool {
    table_row.row_type == TABLE_GROUP_TYPE
}

/// The cell where a group row's label starts.
pub fn is_group_table_cell<R: GroupRowData>(
    table_row: &TableRow<R>,
    table_column: &TableColumn,
) -> bool {
    if !is_group_table_row(table_row) || table_column.column_type != TABLE_GROUP_TYPE {
        return false;
    }
    match (table_row.row.grouped_by(), table_column.column_name()) {
        (Some(grouped_by), Some(column_name)) => grouped_by == column_name,
        _ => false,
    }
}

/// A header cell of an outer grouping level on a group row.
/// Levels missing from `grouping` are never indent cells.
pub fn is_group_indent_table_cell<R: GroupRowData>(
    table_row: &TableRow<R>,
    table_column: &TableColumn,
    grouping: &[Grouping],
) -> bool {
    if !is_group_table_row(table_row) || table_column.column_type != TABLE_GROUP_TYPE {
        return false;
    }
    let (Some(grouped_by), Some(column_name)) =
        (table_row.row.grouped_by(), table_column.column_name())
    else {
        return false;
    };
    if grouped_by == column_name {
        return false;
    }

    let level_of = |name: &str| grouping.iter().position(|g| g.column_name == name);
    match (level_of(column_name), level_of(grouped_by)) {
        (Some(column_level), Some(row_level)) => column_level < row_level,
        _ => false,
    }
}
