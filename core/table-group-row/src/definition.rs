//! FILENAME: core/table-group-row/src/definition.rs
//! Grouping Definition - What is grouped and how the view reacts to it.
//!
//! This module contains the types that DESCRIBE grouping:
//! - The committed and draft grouping sequences produced by the grouping
//!   controllers (group panel drag/drop, header toggles)
//! - The group-row view configuration (header width, which grouped
//!   columns stay visible)
//!
//! Both are plain serializable snapshots; nothing here holds state between
//! projections.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use table_view::{TableColumn, TableType};

use crate::columns::table_columns_with_grouping;
use crate::error::GroupingError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Tag of group header columns and group rows.
pub const TABLE_GROUP_TYPE: TableType = TableType::from_static("group");

/// Default width of a group header column.
pub const DEFAULT_INDENT_COLUMN_WIDTH: f64 = 20.0;

/// Builds the identity key of a group descriptor: `group_<id>`.
pub fn group_key(id: &str) -> String {
    format!("{}_{}", TABLE_GROUP_TYPE, id)
}

// ============================================================================
// GROUPING ENTRIES
// ============================================================================

/// Kind of uncommitted grouping edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
    /// Column is being dragged into the group panel.
    Add,
    /// Column is being dragged out of the group panel.
    Remove,
    /// Column is being moved within the group panel.
    Reorder,
}

impl GroupingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::Add => "add",
            GroupingMode::Remove => "remove",
            GroupingMode::Reorder => "reorder",
        }
    }

    /// Whether the edit moves a column between the group panel and the data area.
    pub fn changes_membership(&self) -> bool {
        matches!(self, GroupingMode::Add | GroupingMode::Remove)
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingMode {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(GroupingMode::Add),
            "remove" => Ok(GroupingMode::Remove),
            "reorder" => Ok(GroupingMode::Reorder),
            other => Err(GroupingError::UnknownGroupingMode(other.to_string())),
        }
    }
}

/// One level of grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grouping {
    /// Name of the grouped column.
    pub column_name: String,

    /// Set on entries of the draft grouping that are being edited.
    #[serde(default, skip_serializing_if = "is_false")]
    pub draft: bool,

    /// The edit in progress, for draft entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GroupingMode>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Grouping {
    pub fn new(column_name: impl Into<String>) -> Self {
        Grouping {
            column_name: column_name.into(),
            draft: false,
            mode: None,
        }
    }

    /// Creates a draft entry for an edit in progress.
    pub fn draft(column_name: impl Into<String>, mode: GroupingMode) -> Self {
        Grouping {
            column_name: column_name.into(),
            draft: true,
            mode: Some(mode),
        }
    }

    /// True for a draft add/remove; reordering never needs a placeholder.
    pub fn is_membership_draft(&self) -> bool {
        self.draft && self.mode.map_or(false, |mode| mode.changes_membership())
    }
}

/// Committed and draft grouping as handed over by the grouping controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingState {
    /// The applied grouping, outer level first.
    #[serde(default)]
    pub grouping: Vec<Grouping>,

    /// The grouping as the user currently sees it mid-interaction.
    #[serde(default)]
    pub draft_grouping: Vec<Grouping>,
}

impl GroupingState {
    /// State with no interaction in progress (draft equals committed).
    pub fn committed(grouping: Vec<Grouping>) -> Self {
        GroupingState {
            draft_grouping: grouping.clone(),
            grouping,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GroupingError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// VIEW CONFIGURATION
// ============================================================================

/// Per-column override of `show_columns_when_grouped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupColumnExtension {
    pub column_name: String,

    /// Keep the column in the data area while it is grouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_when_grouped: Option<bool>,
}

/// Controls how the group-row view renders grouped columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupRowConfig {
    /// Width of every group header column.
    #[serde(default = "default_indent_column_width")]
    pub indent_column_width: f64,

    /// Keep grouped columns in the data area.
    #[serde(default)]
    pub show_columns_when_grouped: bool,

    /// Per-column overrides.
    #[serde(default)]
    pub column_extensions: Vec<GroupColumnExtension>,
}

fn default_indent_column_width() -> f64 {
    DEFAULT_INDENT_COLUMN_WIDTH
}

impl Default for TableGroupRowConfig {
    fn default() -> Self {
        TableGroupRowConfig {
            indent_column_width: DEFAULT_INDENT_COLUMN_WIDTH,
            show_columns_when_grouped: false,
            column_extensions: Vec::new(),
        }
    }
}

impl TableGroupRowConfig {
    /// Parses and validates a configuration.
    pub fn from_json(json: &str) -> Result<Self, GroupingError> {
        let config: TableGroupRowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GroupingError> {
        if !self.indent_column_width.is_finite() || self.indent_column_width < 0.0 {
            return Err(GroupingError::InvalidColumnWidth(self.indent_column_width));
        }
        Ok(())
    }

    /// Whether a grouped column stays in the data area.
    pub fn should_retain(&self, column_name: &str) -> bool {
        self.column_extensions
            .iter()
            .find(|ext| ext.column_name == column_name)
            .and_then(|ext| ext.show_when_grouped)
            .unwrap_or(self.show_columns_when_grouped)
    }

    /// Retention predicate with the overrides indexed by name.
    pub fn retention(&self) -> impl Fn(&str) -> bool + '_ {
        let mut overrides: FxHashMap<&str, Option<bool>> = FxHashMap::default();
        for ext in &self.column_extensions {
            overrides.entry(ext.column_name.as_str()).or_insert(ext.show_when_grouped);
        }
        let fallback = self.show_columns_when_grouped;

        move |column_name: &str| {
            overrides
                .get(column_name)
                .copied()
                .flatten()
                .unwrap_or(fallback)
        }
    }

    /// Runs the column projection with this configuration.
    pub fn project_columns(
        &self,
        table_columns: &[Arc<TableColumn>],
        state: &GroupingState,
    ) -> Vec<Arc<TableColumn>> {
        table_columns_with_grouping(
            table_columns,
            &state.grouping,
            &state.draft_grouping,
            self.indent_column_width,
            self.retention(),
        )
    }
}
