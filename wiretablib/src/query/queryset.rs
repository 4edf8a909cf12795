//! Query set: the rows a table shows, in the order it shows them.
//!
//! A QuerySet sits between the static row data and the final table output.
//! In full mode it represents rows that have been:
//! - Filtered by the global search text
//! - Sorted (stable, multi-column) according to the sort specs
//! - Sliced to the requested page
//!
//! In simple mode it is the input rows, unchanged and in order.
//!
//! The data pipeline is:
//! 1. Row data (Dataset rows)
//! 2. QuerySet (filtered, sorted, paginated)
//! 3. WireTable (formatted strings for display)

use std::cmp::Ordering;

use serde::Serialize;

use crate::data::WireRecord;
use crate::error::WiretabError;
use crate::Result;

use super::columns::{find_column, ColumnDescriptor};
use super::options::{SortDirection, TableOptions};

/// The page a query set was sliced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Zero-based page index (after clamping)
    pub index: usize,
    /// Rows per page
    pub size: usize,
    /// Number of pages over the filtered rows
    pub count: usize,
}

/// Rows selected for display, borrowed from the input.
#[derive(Debug, Clone, Serialize)]
pub struct WireQuerySet<'a> {
    /// Rows to display, in display order
    pub rows: Vec<&'a WireRecord>,
    /// Rows that passed the filter (before pagination)
    pub matched: usize,
    /// Rows in the input
    pub total: usize,
    /// Page slice, when paginated (full mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageWindow>,
}

impl<'a> WireQuerySet<'a> {
    /// Select rows for display.
    ///
    /// Fails on a zero page size, or on a sort spec naming a column that is
    /// not in `columns`. Never mutates `rows`.
    pub fn from_rows(
        columns: &[ColumnDescriptor],
        rows: &'a [WireRecord],
        options: &TableOptions,
    ) -> Result<Self> {
        if options.page_size == 0 {
            return Err(WiretabError::InvalidPageSize(options.page_size));
        }

        let all: Vec<&'a WireRecord> = rows.iter().collect();
        if options.simple {
            return Ok(WireQuerySet {
                matched: all.len(),
                total: rows.len(),
                rows: all,
                page: None,
            });
        }

        let mut filtered = filter_rows(all, columns, options.search.as_deref());
        sort_rows(&mut filtered, columns, options)?;

        let matched = filtered.len();
        let count = matched.div_ceil(options.page_size);
        let index = options.page.min(count.saturating_sub(1));
        let start = (index * options.page_size).min(matched);
        let end = (start + options.page_size).min(matched);
        let page_rows = filtered[start..end].to_vec();

        Ok(WireQuerySet {
            rows: page_rows,
            matched,
            total: rows.len(),
            page: Some(PageWindow {
                index,
                size: options.page_size,
                count,
            }),
        })
    }
}

/// Keep rows where any formatted cell contains `search`, case-insensitively.
fn filter_rows<'a>(
    rows: Vec<&'a WireRecord>,
    columns: &[ColumnDescriptor],
    search: Option<&str>,
) -> Vec<&'a WireRecord> {
    let needle = match search.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return rows,
    };
    rows.into_iter()
        .filter(|row| {
            columns.iter().any(|c| {
                c.format(row)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Stable multi-column sort. Ties on every spec keep their input order.
fn sort_rows(
    rows: &mut [&WireRecord],
    columns: &[ColumnDescriptor],
    options: &TableOptions,
) -> Result<()> {
    if options.sort.is_empty() {
        return Ok(());
    }
    let specs = options
        .sort
        .iter()
        .map(|spec| -> Result<_> {
            Ok((find_column(columns, &spec.key)?, spec.direction))
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| {
        specs
            .iter()
            .map(|(column, direction)| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    Ok(())
}
