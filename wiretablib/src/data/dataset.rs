//! Validated data sets: a shape plus the rows that follow it.

use std::collections::HashSet;

use serde::Serialize;

use super::record::WireRecord;
use super::shape::RowShape;
use crate::error::WiretabError;
use crate::Result;

/// An immutable, validated sequence of wire records sharing one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    id: String,
    shape: RowShape,
    rows: Vec<WireRecord>,
}

/// Finite and non-negative, excluding `-0.0`
fn is_measurement(n: f64) -> bool {
    n.is_finite() && n.is_sign_positive()
}

impl Dataset {
    /// Build a data set, checking its invariants.
    ///
    /// Part numbers must be non-empty and unique, numeric values must be
    /// non-negative, and any stored weight must use the shape's unit.
    pub fn new(id: impl Into<String>, shape: RowShape, rows: Vec<WireRecord>) -> Result<Self> {
        let id = id.into();
        let invalid = |reason: String| WiretabError::InvalidDataset {
            dataset: id.clone(),
            reason,
        };

        let mut seen = HashSet::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.part_number.trim().is_empty() {
                return Err(invalid(format!("row {} has an empty part number", index)));
            }
            if !seen.insert(row.part_number.as_str()) {
                return Err(invalid(format!(
                    "duplicate part number '{}'",
                    row.part_number
                )));
            }
            if let Some(n) = row.numbers().find(|n| !is_measurement(*n)) {
                return Err(invalid(format!(
                    "'{}' has a negative or non-finite value {}",
                    row.part_number, n
                )));
            }
            if let Some(weight) = &row.weight {
                if shape.weight_unit() != Some(weight.unit) {
                    return Err(invalid(format!(
                        "'{}' stores weight in {} but the data set does not",
                        row.part_number, weight.unit
                    )));
                }
            }
        }
        drop(seen);

        Ok(Self { id, shape, rows })
    }

    /// Build a data set whose shape is inferred from its rows
    pub fn inferred(id: impl Into<String>, rows: Vec<WireRecord>) -> Result<Self> {
        let shape = RowShape::infer(&rows);
        Self::new(id, shape, rows)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &RowShape {
        &self.shape
    }

    pub fn rows(&self) -> &[WireRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
