//! FILENAME: core/table-view/src/lib.rs
//! Table view descriptors shared by the table plugins.
//!
//! A table view is described as two flat sequences: table columns and table
//! rows. Each descriptor carries a type tag that tells the renderer which
//! kind of cell to draw. Plugins project these sequences into new ones,
//! inserting their own descriptor kinds and passing foreign ones through.
//!
//! Layers:
//! - `kind`: The open type tag shared by rows and columns
//! - `column`: Column descriptors (WHAT the columns are)
//! - `row`: Row descriptors wrapping an opaque row payload

pub mod kind;
pub mod column;
pub mod row;

pub use kind::TableType;
pub use column::{Column, TableColumn};
pub use row::TableRow;
