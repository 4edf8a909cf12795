//! Error types for wiretablib

use thiserror::Error;

/// Errors that can occur while building or rendering wire tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WiretabError {
    /// The column configuration asks for a field the row shape does not provide
    #[error("configuration mismatch: row shape has no '{field}' field")]
    ConfigurationMismatch { field: String },

    /// A data set violates one of its invariants
    #[error("invalid data set '{dataset}': {reason}")]
    InvalidDataset { dataset: String, reason: String },

    /// Page size must be at least one row
    #[error("page size must be a positive number, got {0}")]
    InvalidPageSize(usize),

    /// No table with this id exists in the catalog
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// No column with this key exists in the column set
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A sort spec could not be parsed
    #[error("invalid sort spec '{0}' (expected key, key:asc or key:desc)")]
    InvalidSortSpec(String),
}
