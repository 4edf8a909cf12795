//! Row data: wire records, their shapes, and validated data sets.
//!
//! This module handles the first stage of the pipeline - holding the static
//! specification rows a table is built from. It provides:
//!
//! - **Records**: `WireRecord` and its tagged `CellValue` fields
//! - **Shapes**: `RowShape`, the fields a data set provides
//! - **Data sets**: `Dataset`, rows checked against their invariants
//!
//! ## Example
//!
//! ```rust
//! use wiretablib::data::{Dataset, RowShape, WeightUnit, WireRecord};
//!
//! let rows = vec![WireRecord::new("S22A01TX-2", "22")
//!     .conductor("0.0253", "0.643")
//!     .nominal_od("0.0293", "0.744")
//!     .weight("2.07", WeightUnit::LbPerKft)];
//! let ds = Dataset::new("etfe", RowShape::wire(WeightUnit::LbPerKft), rows).unwrap();
//! assert_eq!(ds.len(), 1);
//! ```

pub mod dataset;
pub mod record;
pub mod shape;

pub use dataset::Dataset;
pub use record::{CellRef, CellValue, Measurement, Weight, WeightUnit, WireRecord};
pub use shape::{Field, RowShape};
