//! # wiretablib
//!
//! A library for rendering magnet-wire product specification tables.
//!
//! ## Overview
//!
//! Each product line (single, double or triple insulated wire in a given
//! insulation material and layer thickness) publishes a table of SKUs: part
//! number, gauge, conductor and nominal outer diameter in inches and
//! millimetres, and weight per foot or per thousand feet. This library turns
//! those static rows into display-ready tables.
//!
//! The pipeline has three stages:
//!
//! - **Data**: `WireRecord` rows and the `RowShape` describing which fields a
//!   data set provides, validated into a `Dataset`
//! - **Query**: column descriptors built from a `ColumnConfig`, and the rows a
//!   table shows after search, sort and pagination
//! - **Output**: `WireTable`, formatted strings ready for a template or JSON
//!
//! The `catalog` module registers the built-in product tables on top of that.
//!
//! ## Features
//!
//! - **Stored representation is kept**: a value authored as text (`"0.0100"`)
//!   renders verbatim; only numeric values are formatted
//! - **Weight units are never converted**: lb/ft and lb/kft are separate
//!   fields, and asking for the one a data set lacks is an error
//! - **Simple and full modes**: small reference tables, or tables with global
//!   search, stable multi-column sort and pagination
//! - **Pure data types**: rendering borrows its inputs and has no I/O
//!
//! ## Example
//!
//! ```rust
//! use wiretablib::{create_wire_columns, render_table, ColumnConfig, RowShape};
//! use wiretablib::{TableOptions, WeightUnit, WireRecord};
//!
//! let rows = vec![WireRecord::new("W-100", "18(19/30)")
//!     .conductor(0.0403, 1.02)
//!     .nominal_od("0.0650", "1.65")
//!     .weight(0.0012, WeightUnit::LbPerFt)];
//!
//! let config = ColumnConfig::new().format_numeric(true).use_kft(false);
//! let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
//! let table = render_table(&columns, &rows, &TableOptions::simple()).unwrap();
//!
//! assert_eq!(
//!     table.rows[0].cells,
//!     vec!["W-100", "18(19/30)", "0.0403 in", "1.02 mm", "0.0650", "1.65", "0.0012 lb/ft"]
//! );
//! ```

pub mod catalog;
pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use catalog::{Catalog, ProductTable};
pub use data::{CellValue, Dataset, Field, Measurement, RowShape, Weight, WeightUnit, WireRecord};
pub use error::WiretabError;
pub use output::{render_table, HeaderGroup, PageMarker, Pagination, TableColumn, TableRow, WireTable};
pub use query::{
    create_wire_columns, ColumnConfig, ColumnDescriptor, FormatRule, SortDirection, SortRule,
    SortSpec, SortState, TableOptions, PLACEHOLDER,
};

/// Result type for wiretablib operations
pub type Result<T> = std::result::Result<T, WiretabError>;
