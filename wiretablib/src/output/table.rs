//! Table-ready data structures for wire specification output.
//!
//! This module provides `WireTable`, a presentation-ready data structure
//! that can be directly consumed by templates or serialized to JSON.
//!
//! The data flow is:
//! 1. Row data (Dataset rows) and column descriptors
//! 2. QuerySet (filtered, sorted, paginated)
//! 3. WireTable (formatted strings for display)
//!
//! WireTable is a pure presentation layer - it only formats data, no filtering
//! or sorting logic. All selection happens in the QuerySet layer.

use serde::{Deserialize, Serialize};

use crate::data::WireRecord;
use crate::query::columns::ColumnDescriptor;
use crate::query::options::{SortDirection, TableOptions};
use crate::query::queryset::WireQuerySet;
use crate::Result;

/// A header cell spanning one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGroup {
    /// Group label; empty for columns outside any group
    pub label: String,
    /// Number of columns spanned
    pub span: usize,
}

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub header: String,
    /// Current sort direction, when this column is sorted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

/// A single data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Part number of the record this row shows
    pub key: String,
    /// Formatted cells, in column order
    pub cells: Vec<String>,
}

/// One entry in the pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageMarker {
    /// A page link (1-based number)
    Page { number: usize, current: bool },
    /// A gap between page links
    Ellipsis,
}

/// Pagination footer for full-mode tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based index of the page shown
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows that passed the filter
    pub total_rows: usize,
    /// 1-based index of the first row shown
    pub start: usize,
    /// 1-based index of the last row shown
    pub end: usize,
    /// Visible page links
    pub pages: Vec<PageMarker>,
}

/// Table-ready wire data.
///
/// This is the final data structure before presentation. Templates
/// iterate over groups/columns/rows and apply styling - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTable {
    /// Optional title (e.g., "Single Insulated ETFE .002 Layer")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the table was rendered in simple mode
    pub simple: bool,
    /// Group header row above the column headers
    pub groups: Vec<HeaderGroup>,
    /// Column headers
    pub columns: Vec<TableColumn>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Empty-state message, set when there are no rows to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Active search text (full mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Pagination footer (full mode with rows only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl WireTable {
    /// Create a WireTable from a query set.
    ///
    /// The query set already holds the filtered, sorted and paginated rows.
    /// This method just formats them into displayable strings.
    pub fn from_queryset(
        qs: &WireQuerySet<'_>,
        columns: &[ColumnDescriptor],
        options: &TableOptions,
    ) -> Self {
        let rows: Vec<TableRow> = qs
            .rows
            .iter()
            .map(|record| TableRow {
                key: record.part_number.clone(),
                cells: columns.iter().map(|c| c.cell(record)).collect(),
            })
            .collect();

        let sort = if options.simple {
            &[][..]
        } else {
            &options.sort[..]
        };
        let table_columns = columns
            .iter()
            .map(|c| TableColumn {
                key: c.key.clone(),
                header: c.header.clone(),
                sorted: sort.iter().find(|s| s.key == c.key).map(|s| s.direction),
            })
            .collect();

        let pagination = qs
            .page
            .filter(|_| qs.matched > 0)
            .map(|page| {
                let start = page.index * page.size + 1;
                let end = (start + page.size - 1).min(qs.matched);
                Pagination {
                    page_index: page.index,
                    page_count: page.count,
                    page_size: page.size,
                    total_rows: qs.matched,
                    start,
                    end,
                    pages: visible_pages(page.index, page.count, options.max_page_numbers),
                }
            });

        let empty_message = rows.is_empty().then(|| options.empty_message.clone());
        let search = if options.simple {
            None
        } else {
            options.search.clone()
        };

        WireTable {
            title: options.title.clone(),
            simple: options.simple,
            groups: build_groups(columns),
            columns: table_columns,
            rows,
            empty_message,
            search,
            pagination,
        }
    }

    /// Whether the table shows the empty state
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers, in order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }
}

/// Render rows through columns into a table.
///
/// Pure: the rows and columns are only read, and the same inputs always give
/// the same table. Fails only on an invalid page size or a sort spec naming
/// an unknown column. A row missing a value renders a placeholder cell.
pub fn render_table(
    columns: &[ColumnDescriptor],
    rows: &[WireRecord],
    options: &TableOptions,
) -> Result<WireTable> {
    let qs = WireQuerySet::from_rows(columns, rows, options)?;
    let table = WireTable::from_queryset(&qs, columns, options);
    tracing::debug!(
        simple = options.simple,
        input_rows = qs.total,
        matched = qs.matched,
        shown = table.rows.len(),
        "rendered table"
    );
    Ok(table)
}

/// Collapse consecutive columns with the same group into spanning headers.
fn build_groups(columns: &[ColumnDescriptor]) -> Vec<HeaderGroup> {
    let mut groups: Vec<HeaderGroup> = Vec::new();
    for column in columns {
        let label = column.group.clone().unwrap_or_default();
        match groups.last_mut() {
            Some(last) if !label.is_empty() && last.label == label => last.span += 1,
            _ => groups.push(HeaderGroup { label, span: 1 }),
        }
    }
    groups
}

/// Page links around the current page.
///
/// Shows at most `max` consecutive pages centred on `current` where
/// possible, always includes the first and last page, and marks gaps with
/// an ellipsis. Nothing is shown for a single page.
fn visible_pages(current: usize, count: usize, max: usize) -> Vec<PageMarker> {
    if count <= 1 || max == 0 {
        return Vec::new();
    }

    let half = max / 2;
    let mut start = current.saturating_sub(half);
    let end = (start + max - 1).min(count - 1);
    if end - start + 1 < max {
        start = (end + 1).saturating_sub(max);
    }

    let page = |i: usize| PageMarker::Page {
        number: i + 1,
        current: i == current,
    };

    let mut pages = Vec::new();
    if start > 0 {
        pages.push(page(0));
        if start > 1 {
            pages.push(PageMarker::Ellipsis);
        }
    }
    pages.extend((start..=end).map(page));
    if end < count - 1 {
        if end + 2 < count {
            pages.push(PageMarker::Ellipsis);
        }
        pages.push(page(count - 1));
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CellValue, RowShape, WeightUnit};
    use crate::query::columns::{create_wire_columns, PLACEHOLDER};
    use crate::query::options::{ColumnConfig, SortSpec};

    fn columns() -> Vec<ColumnDescriptor> {
        create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
            .unwrap()
    }

    fn rows(n: usize) -> Vec<WireRecord> {
        (0..n)
            .map(|i| {
                WireRecord::new(format!("P-{:02}", i), format!("{}", 40 - i))
                    .conductor("0.0100", "0.254")
                    .nominal_od("0.0140", "0.356")
                    .weight("0.50", WeightUnit::LbPerKft)
            })
            .collect()
    }

    fn numbers(pages: &[PageMarker]) -> Vec<Option<usize>> {
        pages
            .iter()
            .map(|p| match p {
                PageMarker::Page { number, .. } => Some(*number),
                PageMarker::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_groups() {
        let groups = build_groups(&columns());
        let labels: Vec<(&str, usize)> =
            groups.iter().map(|g| (g.label.as_str(), g.span)).collect();
        assert_eq!(
            labels,
            vec![
                ("", 1),
                ("", 1),
                ("CONDUCTOR", 2),
                ("NOMINAL O.D.", 2),
                ("", 1)
            ]
        );
    }

    #[test]
    fn test_render_simple() {
        let data = rows(3);
        let table = render_table(&columns(), &data, &TableOptions::simple()).unwrap();
        assert!(table.simple);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].key, "P-00");
        assert_eq!(table.rows[0].cells[1], "40");
        assert!(table.pagination.is_none());
        assert!(table.empty_message.is_none());
        assert_eq!(
            table.headers(),
            vec!["PART NUMBER", "AWG", "INCHES", "MM", "INCHES", "MM", "WEIGHT LB/KFT"]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let data = rows(12);
        let cols = columns();
        let options = TableOptions::new()
            .sort_by(SortSpec::ascending("awg"))
            .page(1);
        let first = render_table(&cols, &data, &options).unwrap();
        let second = render_table(&cols, &data, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_render_does_not_mutate_input() {
        let data = rows(5);
        let before = data.clone();
        let options = TableOptions::new().sort_by(SortSpec::ascending("awg"));
        let table = render_table(&columns(), &data, &options).unwrap();
        assert_eq!(data, before);
        assert_eq!(table.rows[0].key, "P-04");
    }

    #[test]
    fn test_empty_state() {
        let data: Vec<WireRecord> = vec![];
        for options in [TableOptions::simple(), TableOptions::new()] {
            let table = render_table(&columns(), &data, &options).unwrap();
            assert!(table.is_empty());
            assert_eq!(table.empty_message.as_deref(), Some("No results."));
            assert!(table.pagination.is_none());
            assert_eq!(table.columns.len(), 7);
        }
    }

    #[test]
    fn test_empty_state_after_filter() {
        let data = rows(4);
        let options = TableOptions::new()
            .search("nothing matches")
            .empty_message("No wire found.");
        let table = render_table(&columns(), &data, &options).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.empty_message.as_deref(), Some("No wire found."));
        assert_eq!(table.search.as_deref(), Some("nothing matches"));
    }

    #[test]
    fn test_missing_value_placeholder() {
        let mut data = rows(2);
        data[1].conductor.mm = None;
        data[1].awg = Some(CellValue::from("22"));
        let table = render_table(&columns(), &data, &TableOptions::simple()).unwrap();
        assert_eq!(table.rows[1].cells[3], PLACEHOLDER);
        assert_eq!(table.rows[1].cells[1], "22");
        assert_eq!(table.rows[0].cells[3], "0.254");
    }

    #[test]
    fn test_pagination_footer() {
        let data = rows(23);
        let options = TableOptions::new().page(2);
        let table = render_table(&columns(), &data, &options).unwrap();
        let pagination = table.pagination.unwrap();
        assert_eq!(pagination.page_index, 2);
        assert_eq!(pagination.page_count, 3);
        assert_eq!(pagination.total_rows, 23);
        assert_eq!(pagination.start, 21);
        assert_eq!(pagination.end, 23);
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_sorted_column_marked() {
        let data = rows(3);
        let options = TableOptions::new().sort_by(SortSpec::descending("conductor.mm"));
        let table = render_table(&columns(), &data, &options).unwrap();
        assert_eq!(table.columns[3].sorted, Some(SortDirection::Descending));
        assert_eq!(table.columns[2].sorted, None);

        let simple = render_table(
            &columns(),
            &data,
            &options.clone().with_simple(true),
        )
        .unwrap();
        assert!(simple.columns.iter().all(|c| c.sorted.is_none()));
    }

    #[test]
    fn test_visible_pages_small() {
        assert!(visible_pages(0, 1, 5).is_empty());
        assert_eq!(
            numbers(&visible_pages(0, 3, 5)),
            vec![Some(1), Some(2), Some(3)]
        );
    }

    #[test]
    fn test_visible_pages_window() {
        assert_eq!(
            numbers(&visible_pages(0, 10, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        assert_eq!(
            numbers(&visible_pages(5, 10, 5)),
            vec![Some(1), None, Some(4), Some(5), Some(6), Some(7), Some(8), None, Some(10)]
        );
        assert_eq!(
            numbers(&visible_pages(9, 10, 5)),
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_visible_pages_marks_current() {
        let pages = visible_pages(1, 3, 5);
        assert_eq!(
            pages[1],
            PageMarker::Page {
                number: 2,
                current: true
            }
        );
    }
}
