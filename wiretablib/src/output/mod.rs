//! Output formatting: present wire data as tables.
//!
//! This module handles the third and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **WireTable**: Table-ready data structure with group headers, columns, rows,
//!   empty state and pagination footer
//! - **render_table**: The one-call renderer from columns and rows to a `WireTable`
//!
//! WireTable is a pure presentation layer - it only formats data into strings.
//! All filtering and sorting happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use wiretablib::data::{RowShape, WeightUnit, WireRecord};
//! use wiretablib::output::render_table;
//! use wiretablib::query::{create_wire_columns, ColumnConfig, TableOptions};
//!
//! let columns =
//!     create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
//!         .unwrap();
//! let table = render_table(&columns, &[], &TableOptions::simple()).unwrap();
//! assert!(table.is_empty());
//! assert_eq!(table.empty_message.as_deref(), Some("No results."));
//! ```

pub mod table;

pub use table::{
    render_table, HeaderGroup, PageMarker, Pagination, TableColumn, TableRow, WireTable,
};
