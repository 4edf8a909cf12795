//! Query processing: build columns, then filter, sort and paginate rows.
//!
//! This module handles the second stage of the pipeline - deciding which
//! columns a table has and which rows it shows. It provides:
//!
//! - **Options**: Configuration for columns and rendering (`ColumnConfig`, `TableOptions`)
//! - **Columns**: The column factory (`create_wire_columns`)
//! - **QuerySet**: Rows selected and ordered for presentation
//!
//! ## Example
//!
//! ```rust
//! use wiretablib::data::{RowShape, WeightUnit};
//! use wiretablib::query::{create_wire_columns, ColumnConfig};
//!
//! let config = ColumnConfig::new().format_numeric(true).use_kft(false);
//! let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
//! assert_eq!(columns.len(), 7);
//! assert_eq!(columns[6].key, "weightLbFt");
//! ```

pub mod columns;
pub mod options;
pub mod queryset;

pub use columns::{
    create_wire_columns, find_column, ColumnDescriptor, FormatRule, SortRule, PLACEHOLDER,
};
pub use options::{ColumnConfig, SortDirection, SortSpec, SortState, TableOptions};
pub use queryset::{PageWindow, WireQuerySet};
