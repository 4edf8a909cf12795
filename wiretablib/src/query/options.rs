//! Input options for building columns and rendering tables.
//!
//! This module contains all configuration types that control how a table
//! is built and which part of it is shown.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WiretabError;

/// Default number of rows per page in full mode.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page links shown in the pagination window.
pub const DEFAULT_MAX_PAGE_NUMBERS: usize = 5;

/// Default text shown when a table has no rows to display.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No results.";

/// Configuration for the column factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Render numeric values with fixed decimals and a unit suffix
    pub format_numeric: bool,
    /// Surface weight per thousand feet instead of weight per foot
    pub use_kft: bool,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            format_numeric: false,
            use_kft: true,
        }
    }
}

impl ColumnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: enable or disable numeric formatting
    pub fn format_numeric(mut self, on: bool) -> Self {
        self.format_numeric = on;
        self
    }

    /// Builder: select the lb/kft (true) or lb/ft (false) weight field
    pub fn use_kft(mut self, on: bool) -> Self {
        self.use_kft = on;
        self
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl FromStr for SortDirection {
    type Err = WiretabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(WiretabError::InvalidSortSpec(s.to_string())),
        }
    }
}

/// Sort by one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column key (e.g. "awg", "conductor.inches")
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Parses `key`, `key:asc` or `key:desc`.
impl FromStr for SortSpec {
    type Err = WiretabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.rsplit_once(':') {
            Some((key, dir)) => (
                key,
                dir.parse::<SortDirection>()
                    .map_err(|_| WiretabError::InvalidSortSpec(s.to_string()))?,
            ),
            None => (s, SortDirection::Ascending),
        };
        if key.trim().is_empty() {
            return Err(WiretabError::InvalidSortSpec(s.to_string()));
        }
        Ok(Self {
            key: key.trim().to_string(),
            direction,
        })
    }
}

/// Transient sort state owned by one table instance.
///
/// Clicking a header cycles that column through ascending, descending and
/// unsorted. With multi-sort, other columns keep their place; without it,
/// toggling a column replaces whatever was sorted before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    specs: Vec<SortSpec>,
    multi: bool,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort state that keeps several columns sorted at once
    pub fn multi() -> Self {
        Self {
            specs: Vec::new(),
            multi: true,
        }
    }

    /// Cycle `key` through none -> ascending -> descending -> none
    pub fn toggle(&mut self, key: &str) {
        let current = self.direction_of(key);
        if !self.multi {
            self.specs.clear();
        }
        match current {
            None => self.specs.push(SortSpec::ascending(key)),
            Some(SortDirection::Ascending) => {
                if let Some(spec) = self.specs.iter_mut().find(|s| s.key == key) {
                    spec.direction = SortDirection::Descending;
                } else {
                    self.specs.push(SortSpec::descending(key));
                }
            }
            Some(SortDirection::Descending) => self.specs.retain(|s| s.key != key),
        }
    }

    /// Current direction of `key`, if it is sorted
    pub fn direction_of(&self, key: &str) -> Option<SortDirection> {
        self.specs
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.direction)
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    pub fn clear(&mut self) {
        self.specs.clear();
    }
}

/// Options for rendering one table.
///
/// In simple mode rows are shown in input order with no search, sorting or
/// pagination, and only `title` and `empty_message` change the output.
/// `page_size` is still validated: zero is rejected in either mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Minimal chrome: no sort, filter or pagination
    pub simple: bool,
    /// Optional title shown above the table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Global search text (full mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort columns, primary first (full mode only)
    pub sort: Vec<SortSpec>,
    /// Rows per page (full mode only)
    pub page_size: usize,
    /// Zero-based page index (full mode only)
    pub page: usize,
    /// Number of page links in the pagination window
    pub max_page_numbers: usize,
    /// Text shown when there are no rows
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            simple: false,
            title: None,
            search: None,
            sort: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
            max_page_numbers: DEFAULT_MAX_PAGE_NUMBERS,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a small fixed reference table
    pub fn simple() -> Self {
        Self {
            simple: true,
            ..Self::default()
        }
    }

    /// Builder: set simple mode
    pub fn with_simple(mut self, simple: bool) -> Self {
        self.simple = simple;
        self
    }

    /// Builder: set title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: set global search text. Blank text clears the search.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// Builder: add a sort column (primary first)
    pub fn sort_by(mut self, spec: SortSpec) -> Self {
        self.sort.push(spec);
        self
    }

    /// Builder: take sort columns from a sort state
    pub fn sort_state(mut self, state: &SortState) -> Self {
        self.sort = state.specs().to_vec();
        self
    }

    /// Builder: set page size
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Builder: set zero-based page index
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Builder: set pagination window size
    pub fn max_page_numbers(mut self, n: usize) -> Self {
        self.max_page_numbers = n;
        self
    }

    /// Builder: set empty-state message
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }
}
