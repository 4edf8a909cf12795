//! Built-in product catalog.
//!
//! Every product table is a registry entry pairing a data set (rows plus their
//! shape) with the column configuration and display mode it is shown with.
//! Adding a product is adding an entry, not a new renderer.
//!
//! ## Example
//!
//! ```rust
//! use wiretablib::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let table = catalog.get("single-etfe-002").unwrap();
//! let rendered = table.render(&table.default_options()).unwrap();
//! assert_eq!(rendered.rows[0].key, "S22A01TX-2");
//! ```

mod sets;

use serde::Serialize;

use crate::data::{Dataset, RowShape, WeightUnit, WireRecord};
use crate::error::WiretabError;
use crate::output::{render_table, WireTable};
use crate::query::{create_wire_columns, ColumnConfig, ColumnDescriptor, TableOptions};
use crate::Result;

/// Part number, AWG, conductor in/mm, nominal O.D. in/mm, weight; all as authored text
type TextRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// Part number, AWG, conductor in/mm, nominal O.D. in/mm, weight; all numeric
type NumericRow = (&'static str, u32, f64, f64, f64, f64, f64);

enum Rows {
    Text(&'static [TextRow]),
    Numeric(&'static [NumericRow]),
}

impl Rows {
    fn records(&self, unit: WeightUnit) -> Vec<WireRecord> {
        match self {
            Rows::Text(rows) => rows
                .iter()
                .map(|&(part, awg, c_in, c_mm, od_in, od_mm, weight)| {
                    WireRecord::new(part, awg)
                        .conductor(c_in, c_mm)
                        .nominal_od(od_in, od_mm)
                        .weight(weight, unit)
                })
                .collect(),
            Rows::Numeric(rows) => rows
                .iter()
                .map(|&(part, awg, c_in, c_mm, od_in, od_mm, weight)| {
                    WireRecord::new(part, awg)
                        .conductor(c_in, c_mm)
                        .nominal_od(od_in, od_mm)
                        .weight(weight, unit)
                })
                .collect(),
        }
    }
}

struct Entry {
    id: &'static str,
    title: &'static str,
    unit: WeightUnit,
    format_numeric: bool,
    simple: bool,
    rows: Rows,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "single-etfe-002",
        title: "Single Insulated ETFE .002 Layer",
        unit: WeightUnit::LbPerKft,
        format_numeric: false,
        simple: true,
        rows: Rows::Text(sets::SINGLE_ETFE_002),
    },
    Entry {
        id: "single-fep-003",
        title: "Single Insulated FEP .003 Layer",
        unit: WeightUnit::LbPerKft,
        format_numeric: false,
        simple: true,
        rows: Rows::Text(sets::SINGLE_FEP_003),
    },
    Entry {
        id: "single-pfa-003",
        title: "Single Insulated PFA .003 Layer",
        unit: WeightUnit::LbPerKft,
        format_numeric: true,
        simple: true,
        rows: Rows::Text(sets::SINGLE_PFA_003),
    },
    Entry {
        id: "double-etfe-001",
        title: "Double Insulated ETFE .001 Layer",
        unit: WeightUnit::LbPerFt,
        format_numeric: false,
        simple: true,
        rows: Rows::Text(sets::DOUBLE_ETFE_001),
    },
    Entry {
        id: "double-tca2-001",
        title: "Double Insulated TCA2 .001 Layer",
        unit: WeightUnit::LbPerFt,
        format_numeric: true,
        simple: true,
        rows: Rows::Numeric(sets::DOUBLE_TCA2_001),
    },
    Entry {
        id: "triple-pfa-002",
        title: "Triple Insulated PFA .002 Layer",
        unit: WeightUnit::LbPerKft,
        format_numeric: false,
        simple: false,
        rows: Rows::Text(sets::TRIPLE_PFA_002),
    },
    Entry {
        id: "triple-etfe-003",
        title: "Triple Insulated ETFE .003 Layer",
        unit: WeightUnit::LbPerKft,
        format_numeric: false,
        simple: false,
        rows: Rows::Text(sets::TRIPLE_ETFE_003),
    },
];

/// One product table: its rows, how its columns are built and how it is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductTable {
    pub id: String,
    pub title: String,
    /// Column factory configuration this table is shown with
    pub config: ColumnConfig,
    /// Shown as a small fixed reference table (no search, sort or pages)
    pub simple: bool,
    pub dataset: Dataset,
}

impl ProductTable {
    pub fn new(
        title: impl Into<String>,
        config: ColumnConfig,
        simple: bool,
        dataset: Dataset,
    ) -> Self {
        Self {
            id: dataset.id().to_string(),
            title: title.into(),
            config,
            simple,
            dataset,
        }
    }

    /// Weight unit the rows are stored in
    pub fn weight_unit(&self) -> Option<WeightUnit> {
        self.dataset.shape().weight_unit()
    }

    pub fn shape(&self) -> &RowShape {
        self.dataset.shape()
    }

    pub fn rows(&self) -> &[WireRecord] {
        self.dataset.rows()
    }

    /// Options this table is shown with by default: its title and mode
    pub fn default_options(&self) -> TableOptions {
        TableOptions::new()
            .with_simple(self.simple)
            .title(self.title.clone())
    }

    /// Columns built from the table's own configuration
    pub fn columns(&self) -> Result<Vec<ColumnDescriptor>> {
        self.columns_with(&self.config)
    }

    /// Columns built from another configuration.
    ///
    /// Fails with a configuration mismatch when `config` selects a weight
    /// field the rows do not store.
    pub fn columns_with(&self, config: &ColumnConfig) -> Result<Vec<ColumnDescriptor>> {
        create_wire_columns(config, self.dataset.shape())
    }

    /// Render with the table's own configuration
    pub fn render(&self, options: &TableOptions) -> Result<WireTable> {
        self.render_with(&self.config, options)
    }

    /// Render with another column configuration
    pub fn render_with(&self, config: &ColumnConfig, options: &TableOptions) -> Result<WireTable> {
        let columns = self.columns_with(config)?;
        render_table(&columns, self.dataset.rows(), options)
    }
}

/// Registry of product tables, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    tables: Vec<ProductTable>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in product tables.
    ///
    /// Every data set is validated on the way in.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for entry in ENTRIES {
            let dataset = Dataset::new(
                entry.id,
                RowShape::wire(entry.unit),
                entry.rows.records(entry.unit),
            )?;
            let config = ColumnConfig::new()
                .format_numeric(entry.format_numeric)
                .use_kft(entry.unit == WeightUnit::LbPerKft);
            catalog.push(ProductTable::new(entry.title, config, entry.simple, dataset))?;
        }
        tracing::debug!(tables = catalog.len(), "loaded built-in catalog");
        Ok(catalog)
    }

    /// Register a table. Ids must be unique.
    pub fn push(&mut self, table: ProductTable) -> Result<()> {
        if self.tables.iter().any(|t| t.id == table.id) {
            return Err(WiretabError::InvalidDataset {
                dataset: table.id,
                reason: "a table with this id is already registered".to_string(),
            });
        }
        self.tables.push(table);
        Ok(())
    }

    /// Look up a table by id
    pub fn get(&self, id: &str) -> Result<&ProductTable> {
        self.tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| WiretabError::UnknownTable(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductTable> {
        self.tables.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
