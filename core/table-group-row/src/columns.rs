//! FILENAME: core/table-group-row/src/columns.rs
//! Column Projection - Which columns the grouped view displays.
//!
//! Reconciles the committed grouping (which header columns exist and which
//! data columns are folded away) with the draft grouping (which folded
//! columns are previewed as placeholders during a drag). The output is:
//!
//! ```text
//! [group headers in committed order] ++ [input columns, minus hidden ones]
//! ```
//!
//! Columns not affected by grouping are passed through as the same `Arc`.

use std::sync::Arc;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use table_view::{Column, TableColumn};

use crate::definition::{group_key, Grouping, TABLE_GROUP_TYPE};

// ============================================================================
// GROUPING INDEX
// ============================================================================

/// Name-indexed view over a grouping sequence.
/// For duplicated names the first entry wins.
#[derive(Debug)]
pub struct GroupingIndex<'a> {
    by_name: FxHashMap<&'a str, &'a Grouping>,
}

impl<'a> GroupingIndex<'a> {
    pub fn new(grouping: &'a [Grouping]) -> Self {
        let mut by_name = FxHashMap::default();
        by_name.reserve(grouping.len());
        for entry in grouping {
            by_name.entry(entry.column_name.as_str()).or_insert(entry);
        }
        GroupingIndex { by_name }
    }

    pub fn get(&self, column_name: &str) -> Option<&'a Grouping> {
        self.by_name.get(column_name).copied()
    }

    pub fn contains(&self, column_name: &str) -> bool {
        self.by_name.contains_key(column_name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// ============================================================================
// VISIBILITY
// ============================================================================

/// What happens to a column in the non-header part of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnVisibility {
    /// Emitted unchanged.
    Visible,
    /// Emitted flagged as a draft placeholder.
    DraftVisible,
    /// Folded into a group header.
    Hidden,
}

impl ColumnVisibility {
    /// Decides the visibility of one input column.
    pub fn of<F>(
        table_column: &TableColumn,
        committed: &GroupingIndex<'_>,
        drafts: &GroupingIndex<'_>,
        should_retain: &F,
    ) -> ColumnVisibility
    where
        F: Fn(&str) -> bool,
    {
        let Some(name) = table_column.data_column_name() else {
            return ColumnVisibility::Visible;
        };
        if !committed.contains(name) || should_retain(name) {
            return ColumnVisibility::Visible;
        }
        match drafts.get(name) {
            Some(entry) if entry.is_membership_draft() => ColumnVisibility::DraftVisible,
            _ => ColumnVisibility::Hidden,
        }
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// Projects table columns into the grouped column sequence.
///
/// * `grouping` - committed grouping; one header per entry whose column exists
/// * `draft_grouping` - grouping as shown mid-interaction
/// * `group_column_width` - width of every header
/// * `should_retain` - keeps a grouped data column visible (and non-draft)
///
/// Group columns already present in `table_columns` are treated as headers
/// of a previous projection: they are rebuilt from `grouping` rather than
/// passed through, which makes the projection idempotent.
pub fn table_columns_with_grouping<F>(
    table_columns: &[Arc<TableColumn>],
    grouping: &[Grouping],
    draft_grouping: &[Grouping],
    group_column_width: f64,
    should_retain: F,
) -> Vec<Arc<TableColumn>>
where
    F: Fn(&str) -> bool,
{
    let committed = GroupingIndex::new(grouping);
    let drafts = GroupingIndex::new(draft_grouping);
    let grouped_columns = index_grouped_columns(table_columns, &committed);

    let mut result = Vec::with_capacity(grouping.len() + table_columns.len());

    for entry in grouping {
        match grouped_columns.get(entry.column_name.as_str()) {
            Some(column) => result.push(Arc::new(group_header(column, group_column_width))),
            None => debug!(
                "grouping refers to unknown column '{}', no header emitted",
                entry.column_name
            ),
        }
    }
    let header_count = result.len();

    for table_column in table_columns {
        if table_column.column_type == TABLE_GROUP_TYPE {
            continue;
        }
        match ColumnVisibility::of(table_column, &committed, &drafts, &should_retain) {
            ColumnVisibility::Visible => result.push(Arc::clone(table_column)),
            ColumnVisibility::DraftVisible if table_column.draft => {
                result.push(Arc::clone(table_column))
            }
            ColumnVisibility::DraftVisible => result.push(Arc::new(table_column.as_draft())),
            ColumnVisibility::Hidden => {}
        }
    }

    trace!(
        "projected {} columns into {} headers and {} columns",
        table_columns.len(),
        header_count,
        result.len() - header_count
    );

    result
}

/// Maps every committed column name to its field. Data columns take
/// precedence over group headers of a previous projection.
fn index_grouped_columns<'a>(
    table_columns: &'a [Arc<TableColumn>],
    committed: &GroupingIndex<'_>,
) -> FxHashMap<&'a str, &'a Arc<Column>> {
    let mut columns: FxHashMap<&'a str, &'a Arc<Column>> = FxHashMap::default();
    columns.reserve(committed.len());

    for table_column in table_columns {
        let Some(column) = table_column.column.as_ref() else {
            continue;
        };
        let name = column.name.as_str();
        if !committed.contains(name) {
            continue;
        }
        if table_column.column_type.is_data() {
            columns.insert(name, column);
        } else if table_column.column_type == TABLE_GROUP_TYPE {
            columns.entry(name).or_insert(column);
        }
    }

    columns
}

fn group_header(column: &Arc<Column>, width: f64) -> TableColumn {
    TableColumn {
        key: Some(group_key(&column.name)),
        column_type: TABLE_GROUP_TYPE,
        column: Some(Arc::clone(column)),
        width: Some(width),
        draft: false,
    }
}
