//! FILENAME: tests/common/mod.rs
//! Fixtures for the group-row projection tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use table_group_row::Grouping;
use table_view::{TableColumn, TableRow};

/// Parses a JSON array of descriptors into shared descriptors.
pub fn descriptors<T: DeserializeOwned>(value: Value) -> Vec<Arc<T>> {
    let items: Vec<T> = serde_json::from_value(value).expect("valid descriptor fixture");
    items.into_iter().map(Arc::new).collect()
}

pub fn columns(value: Value) -> Vec<Arc<TableColumn>> {
    descriptors(value)
}

pub fn rows(value: Value) -> Vec<Arc<TableRow<Value>>> {
    descriptors(value)
}

pub fn grouping(value: Value) -> Vec<Grouping> {
    serde_json::from_value(value).expect("valid grouping fixture")
}

/// Renders projected descriptors back to their JSON wire shape.
pub fn to_json<T: Serialize>(items: &[Arc<T>]) -> Value {
    serde_json::to_value(items).expect("descriptors serialize")
}

/// The table used by most column scenarios: a foreign column named `a`
/// followed by data columns `a` to `d`.
pub fn sample_columns() -> Vec<Arc<TableColumn>> {
    columns(json!([
        { "type": "undefined", "column": { "name": "a" } },
        { "type": "data", "column": { "name": "a" } },
        { "type": "data", "column": { "name": "b" } },
        { "type": "data", "column": { "name": "c" } },
        { "type": "data", "column": { "name": "d" } },
    ]))
}

pub fn sample_grouping() -> Vec<Grouping> {
    grouping(json!([{ "columnName": "a" }, { "columnName": "c" }]))
}

/// Headers the sample grouping produces at width 123.
pub fn sample_headers() -> Vec<Value> {
    vec![
        json!({ "key": "group_a", "type": "group", "column": { "name": "a" }, "width": 123.0 }),
        json!({ "key": "group_c", "type": "group", "column": { "name": "c" }, "width": 123.0 }),
    ]
}

/// Sample headers followed by the given body columns.
pub fn with_sample_headers(body: Vec<Value>) -> Value {
    let mut all = sample_headers();
    all.extend(body);
    Value::Array(all)
}
