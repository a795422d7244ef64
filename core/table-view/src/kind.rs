//! FILENAME: core/table-view/src/kind.rs
//! Type tags for table rows and columns.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag distinguishing descriptor kinds ("data", "group", ...).
///
/// The set of tags is open: every table plugin owns its own tag and
/// leaves the tags of other plugins alone. Built-in tags are `'static`
/// so they can be declared as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableType(Cow<'static, str>);

impl TableType {
    /// Tag of plain data rows and columns.
    pub const DATA: TableType = TableType::from_static("data");

    pub const fn from_static(tag: &'static str) -> Self {
        TableType(Cow::Borrowed(tag))
    }

    pub fn new(tag: impl Into<String>) -> Self {
        TableType(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data(&self) -> bool {
        *self == Self::DATA
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TableType {
    fn from(tag: &'static str) -> Self {
        TableType::from_static(tag)
    }
}

impl From<String> for TableType {
    fn from(tag: String) -> Self {
        TableType::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_and_static_tags_compare_equal() {
        assert_eq!(TableType::new("data"), TableType::DATA);
        assert!(TableType::new(String::from("data")).is_data());
        assert!(!TableType::from_static("selection").is_data());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&TableType::DATA).unwrap();
        assert_eq!(json, "\"data\"");

        let parsed: TableType = serde_json::from_str("\"detail\"").unwrap();
        assert_eq!(parsed.as_str(), "detail");
        assert_eq!(parsed.to_string(), "detail");
    }
}
