//! FILENAME: core/table-group-row/src/lib.rs
//! Group-row subsystem for the table view.
//!
//! This crate projects a flat table view into a grouped one: it inserts a
//! group header column per committed grouping level, hides (or previews)
//! the data columns folded into grouping, and re-tags aggregate rows as
//! group rows anchored to their header. It depends on `table-view` only
//! for the shared descriptor types.
//!
//! Layers:
//! - `definition`: Grouping state and view configuration (what is grouped)
//! - `columns`: Column projection (WHICH columns we display)
//! - `rows`: Row projection (HOW aggregate rows are tagged)
//! - `cells`: Cell classification for the renderer
//! - `error`: Errors raised while loading state or configuration

pub mod definition;
pub mod columns;
pub mod rows;
pub mod cells;
pub mod error;

pub use definition::*;
pub use columns::{table_columns_with_grouping, ColumnVisibility, GroupingIndex};
pub use rows::{
    classify_row, table_rows_with_grouping, GroupRowData, GroupRowMarker,
    LEGACY_GROUP_ROW_TYPE,
};
pub use cells::{is_group_indent_table_cell, is_group_table_cell, is_group_table_row};
pub use error::GroupingError;
