//! Template contexts and CSV text for CLI output
//!
//! Terminal and text output go through the outstanding templates; JSON is
//! the serialized library value; CSV is built by hand and passed through the
//! same templates as a single `csv` field.

use console::{measure_text_width, Style};
use outstanding::Theme;
use serde::Serialize;
use wiretablib::{Catalog, PageMarker, Pagination, SortDirection, TableColumn, WireTable};

/// Include templates at compile time
pub(crate) const WIRE_TABLE_TEMPLATE: &str = include_str!("../templates/wire_table.jinja");
pub(crate) const CATALOG_TEMPLATE: &str = include_str!("../templates/catalog.jinja");

/// Space between columns; templates join cells with the same gap
const GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

/// Row data for template rendering (pre-padded cells)
#[derive(Debug, Serialize)]
struct TemplateRow {
    cells: Vec<String>,
}

/// Data context for the wire table template
#[derive(Debug, Serialize)]
pub(crate) struct WireTableContext {
    title: Option<String>,
    search: Option<String>,
    /// Pre-padded group headers; empty when no column is grouped
    groups: Vec<String>,
    /// Pre-padded column headers, with sort markers
    headers: Vec<String>,
    separator: String,
    rows: Vec<TemplateRow>,
    empty_message: Option<String>,
    /// "Showing x-y of n" line (full mode only)
    summary: Option<String>,
    /// Page links (full mode, more than one page)
    pages: Option<String>,
}

/// Data context for the catalog listing template
#[derive(Debug, Serialize)]
pub(crate) struct CatalogContext {
    headers: Vec<String>,
    separator: String,
    rows: Vec<TemplateRow>,
}

/// Hand-built CSV text; both templates print it verbatim
#[derive(Debug, Serialize)]
pub(crate) struct CsvContext {
    csv: String,
}

/// One catalog table, as listed by `wiretab list`
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub rows: usize,
    pub weight_unit: Option<String>,
    pub mode: String,
}

impl CatalogEntry {
    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.rows.to_string(),
            self.weight_unit.clone().unwrap_or_default(),
            self.mode.clone(),
        ]
    }
}

/// Create the theme with styles
pub(crate) fn create_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold())
        .add("group", Style::new().cyan())
        .add("header", Style::new().bold())
        .add("muted", Style::new().dim())
}

/// Pad `text` to `width` display columns
fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(measure_text_width(text));
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

/// Display width of each column over its header and cells
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn separator(widths: &[usize]) -> String {
    let total = widths.iter().sum::<usize>() + GAP * widths.len().saturating_sub(1);
    "-".repeat(total)
}

fn header_label(column: &TableColumn) -> String {
    match column.sorted {
        Some(SortDirection::Ascending) => format!("{} ▲", column.header),
        Some(SortDirection::Descending) => format!("{} ▼", column.header),
        None => column.header.clone(),
    }
}

/// The part number column reads left to right; measurements line up on the right
fn column_align(index: usize) -> Align {
    if index == 0 {
        Align::Left
    } else {
        Align::Right
    }
}

fn page_links(pages: &[PageMarker]) -> String {
    pages
        .iter()
        .map(|marker| match marker {
            PageMarker::Page {
                number,
                current: true,
            } => format!("({})", number),
            PageMarker::Page { number, .. } => number.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn summary_line(pagination: &Pagination) -> String {
    format!(
        "Showing {}-{} of {} · Page {} of {}",
        pagination.start,
        pagination.end,
        pagination.total_rows,
        pagination.page_index + 1,
        pagination.page_count
    )
}

pub(crate) fn build_wire_table_context(table: &WireTable) -> WireTableContext {
    let labels: Vec<String> = table.columns.iter().map(header_label).collect();
    let cells: Vec<Vec<String>> = table.rows.iter().map(|r| r.cells.clone()).collect();
    let widths = column_widths(&labels, &cells);

    let headers = labels
        .iter()
        .enumerate()
        .map(|(i, label)| pad(label, widths[i], column_align(i)))
        .collect();

    let rows = cells
        .iter()
        .map(|row| TemplateRow {
            cells: row
                .iter()
                .enumerate()
                .map(|(i, cell)| pad(cell, widths[i], column_align(i)))
                .collect(),
        })
        .collect();

    let mut groups = Vec::new();
    if table.groups.iter().any(|g| !g.label.is_empty()) {
        let mut start = 0;
        for group in &table.groups {
            let span = &widths[start..(start + group.span).min(widths.len())];
            let width = span.iter().sum::<usize>() + GAP * span.len().saturating_sub(1);
            groups.push(pad(&group.label, width, Align::Center));
            start += group.span;
        }
    }

    let pagination = table.pagination.as_ref();
    WireTableContext {
        title: table.title.clone(),
        search: table.search.clone(),
        groups,
        headers,
        separator: separator(&widths),
        rows,
        empty_message: table.empty_message.clone(),
        summary: pagination.map(summary_line),
        pages: pagination
            .filter(|p| !p.pages.is_empty())
            .map(|p| page_links(&p.pages)),
    }
}

/// Quote a CSV field when it holds a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = fields
        .iter()
        .map(|f| csv_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// CSV of the visible rows, keyed by column key
pub(crate) fn wire_table_csv(table: &WireTable) -> CsvContext {
    let keys: Vec<&str> = table.columns.iter().map(|c| c.key.as_str()).collect();
    let mut csv = csv_line(&keys);
    for row in &table.rows {
        csv.push_str(&csv_line(&row.cells));
    }
    CsvContext { csv }
}

/// Summarize the catalog for listing
pub fn catalog_entries(catalog: &Catalog) -> Vec<CatalogEntry> {
    catalog
        .iter()
        .map(|table| CatalogEntry {
            id: table.id.clone(),
            title: table.title.clone(),
            rows: table.dataset.len(),
            weight_unit: table.weight_unit().map(|u| u.suffix().to_string()),
            mode: if table.simple { "simple" } else { "full" }.to_string(),
        })
        .collect()
}

pub(crate) fn catalog_csv(entries: &[CatalogEntry]) -> CsvContext {
    let mut csv = csv_line(&["id", "title", "rows", "weight_unit", "mode"]);
    for entry in entries {
        csv.push_str(&csv_line(&entry.cells()));
    }
    CsvContext { csv }
}

pub(crate) fn build_catalog_context(entries: &[CatalogEntry]) -> CatalogContext {
    let headers: Vec<String> = ["ID", "TITLE", "ROWS", "WEIGHT", "MODE"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let cells: Vec<Vec<String>> = entries.iter().map(CatalogEntry::cells).collect();
    let widths = column_widths(&headers, &cells);
    let align = |i: usize| if i == 2 { Align::Right } else { Align::Left };

    CatalogContext {
        headers: headers
            .iter()
            .enumerate()
            .map(|(i, h)| pad(h, widths[i], align(i)))
            .collect(),
        separator: separator(&widths),
        rows: cells
            .iter()
            .map(|row| TemplateRow {
                cells: row
                    .iter()
                    .enumerate()
                    .map(|(i, c)| pad(c, widths[i], align(i)))
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outstanding::{render_with_output, OutputMode};
    use wiretablib::TableOptions;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("—", 3, Align::Right), "  —");
        assert_eq!(pad("AWG", 5, Align::Left), "AWG  ");
        assert_eq!(pad("MM", 6, Align::Center), "  MM  ");
        assert_eq!(pad("too wide", 3, Align::Left), "too wide");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("0.0100"), "0.0100");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_page_links() {
        let pages = vec![
            PageMarker::Page {
                number: 1,
                current: false,
            },
            PageMarker::Ellipsis,
            PageMarker::Page {
                number: 4,
                current: true,
            },
        ];
        assert_eq!(page_links(&pages), "1 … (4)");
    }

    #[test]
    fn test_context_aligns_groups_with_columns() {
        let catalog = catalog();
        let table = catalog.get("single-etfe-002").unwrap();
        let rendered = table.render(&table.default_options()).unwrap();
        let context = build_wire_table_context(&rendered);

        let header_width = measure_text_width(&context.headers.join("  "));
        let group_width = measure_text_width(&context.groups.join("  "));
        assert_eq!(header_width, group_width);
        assert_eq!(header_width, measure_text_width(&context.separator));
        assert!(context.groups[2].contains("CONDUCTOR"));
        assert!(context.summary.is_none());
    }

    #[test]
    fn test_context_full_mode_has_summary() {
        let catalog = catalog();
        let table = catalog.get("triple-etfe-003").unwrap();
        let rendered = table.render(&table.default_options()).unwrap();
        let context = build_wire_table_context(&rendered);
        assert_eq!(
            context.summary.as_deref(),
            Some("Showing 1-10 of 20 · Page 1 of 2")
        );
        assert_eq!(context.pages.as_deref(), Some("(1) 2"));
    }

    #[test]
    fn test_wire_table_csv_uses_column_keys() {
        let catalog = catalog();
        let table = catalog.get("double-etfe-001").unwrap();
        let rendered = table.render(&TableOptions::simple()).unwrap();
        let context = wire_table_csv(&rendered);
        let mut lines = context.csv.lines();
        assert_eq!(
            lines.next(),
            Some("partNumber,awg,conductor.inches,conductor.mm,nominalOD.inches,nominalOD.mm,weightLbFt")
        );
        assert_eq!(
            lines.next(),
            Some("D30A01TXX-1,30,0.0100,0.254,0.0140,0.356,0.36")
        );
        assert_eq!(context.csv.lines().count(), 12);
    }

    #[test]
    fn test_csv_passes_through_templates() {
        let catalog = catalog();
        let table = catalog.get("double-etfe-001").unwrap();
        let rendered = table.render(&TableOptions::simple()).unwrap();
        let context = wire_table_csv(&rendered);
        let theme = create_theme();

        let output =
            render_with_output(WIRE_TABLE_TEMPLATE, &context, &theme, OutputMode::Text).unwrap();
        assert_eq!(output.trim_end(), context.csv.trim_end());

        let listing = catalog_csv(&catalog_entries(&catalog));
        let output =
            render_with_output(CATALOG_TEMPLATE, &listing, &theme, OutputMode::Text).unwrap();
        assert!(output.starts_with("id,title,rows,weight_unit,mode\n"));
        assert_eq!(output.lines().count(), 8);
    }

    #[test]
    fn test_catalog_context_right_aligns_rows() {
        let entries = catalog_entries(&catalog());
        let context = build_catalog_context(&entries);
        assert_eq!(context.rows.len(), 7);
        assert_eq!(context.headers[2].trim(), "ROWS");
        assert!(context.rows[0].cells[2].ends_with("19"));
        assert_eq!(
            measure_text_width(&context.headers.join("  ")),
            measure_text_width(&context.separator)
        );
    }

    #[test]
    fn test_catalog_entries() {
        let entries = catalog_entries(&catalog());
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[3].id, "double-etfe-001");
        assert_eq!(entries[3].weight_unit.as_deref(), Some("lb/ft"));
        assert_eq!(entries[6].mode, "full");
    }
}
