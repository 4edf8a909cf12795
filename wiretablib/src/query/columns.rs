//! Column factory: turn a configuration and a row shape into column descriptors.
//!
//! Descriptors are plain data. Each one names the field it reads, the header
//! it shows, how a stored value becomes display text, and how two rows
//! compare on it. Building them checks the configuration against the row
//! shape, so a table that asks for a field its data set lacks fails here,
//! before any row is rendered.

use std::cmp::Ordering;

use serde::Serialize;

use crate::data::{CellRef, Field, RowShape, WeightUnit, WireRecord};
use crate::error::WiretabError;
use crate::Result;

use super::options::ColumnConfig;

/// Text rendered for a cell whose row has no value for the column.
pub const PLACEHOLDER: &str = "—";

/// Decimal places for numeric inch values.
pub const INCH_DECIMALS: usize = 4;

/// Decimal places for numeric millimetre values.
pub const MM_DECIMALS: usize = 2;

/// How a stored value becomes display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormatRule {
    /// Render the stored value unchanged
    Verbatim,
    /// Numbers get fixed decimals and a unit suffix; text passes through
    Fixed {
        decimals: usize,
        suffix: &'static str,
    },
    /// Like `Fixed`, with 4 decimals below 1 and 3 decimals otherwise
    Weight { suffix: &'static str },
}

impl FormatRule {
    /// Format one stored value
    pub fn apply(&self, cell: CellRef<'_>) -> String {
        match (self, cell) {
            (FormatRule::Fixed { decimals, suffix }, CellRef::Numeric(n)) => {
                format!("{:.*} {}", decimals, n, suffix)
            }
            (FormatRule::Weight { suffix }, CellRef::Numeric(n)) => {
                let decimals = if n < 1.0 { 4 } else { 3 };
                format!("{:.*} {}", decimals, n, suffix)
            }
            (_, cell) => cell.to_string(),
        }
    }
}

/// How two rows compare on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortRule {
    /// Text order with digit runs compared by value ("A2" < "A10")
    Alphanumeric,
    /// Leading numeric value; missing or unparseable values count as 0
    Numeric,
}

impl SortRule {
    pub fn compare(&self, a: Option<CellRef<'_>>, b: Option<CellRef<'_>>) -> Ordering {
        match self {
            SortRule::Numeric => {
                let a = a.map(|c| c.sort_number()).unwrap_or(0.0);
                let b = b.map(|c| c.sort_number()).unwrap_or(0.0);
                a.total_cmp(&b)
            }
            SortRule::Alphanumeric => {
                let a = a.map(|c| c.to_string()).unwrap_or_default();
                let b = b.map(|c| c.to_string()).unwrap_or_default();
                natural_cmp(&a, &b)
            }
        }
    }
}

/// Compare strings treating runs of ASCII digits as numbers.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();
    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut a);
                let run_b = take_digits(&mut b);
                let na = run_a.trim_start_matches('0');
                let nb = run_b.trim_start_matches('0');
                let ord = na.len().cmp(&nb.len()).then_with(|| na.cmp(nb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                a.next();
                b.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied().filter(|c| c.is_ascii_digit()) {
        run.push(c);
        chars.next();
    }
    run
}

/// One column: which field it shows and how.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Stable key (e.g. "conductor.inches", "weightLbKft")
    pub key: String,
    /// Header label
    pub header: String,
    /// Group header spanning related columns (e.g. "CONDUCTOR")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub field: Field,
    /// Weight unit this column reads (only meaningful for the weight field)
    #[serde(skip)]
    unit: WeightUnit,
    pub format: FormatRule,
    pub sort: SortRule,
}

impl ColumnDescriptor {
    /// The stored value this column reads from `record`
    pub fn value<'a>(&self, record: &'a WireRecord) -> Option<CellRef<'a>> {
        self.field.get(record, self.unit)
    }

    /// Formatted cell text, or `None` when the record has no value here
    pub fn format(&self, record: &WireRecord) -> Option<String> {
        self.value(record).map(|v| self.format.apply(v))
    }

    /// Formatted cell text, with a placeholder for a missing value
    pub fn cell(&self, record: &WireRecord) -> String {
        self.format(record)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// Compare two records on this column (ascending)
    pub fn compare(&self, a: &WireRecord, b: &WireRecord) -> Ordering {
        self.sort.compare(self.value(a), self.value(b))
    }
}

/// Find a column by key
pub fn find_column<'a>(columns: &'a [ColumnDescriptor], key: &str) -> Result<&'a ColumnDescriptor> {
    columns
        .iter()
        .find(|c| c.key == key)
        .ok_or_else(|| WiretabError::UnknownColumn(key.to_string()))
}

/// Build the wire table columns for a data set of the given shape.
///
/// Columns come out in a fixed order: part number, AWG, conductor
/// inches/mm, nominal O.D. inches/mm, weight. `use_kft` picks which stored
/// weight field is shown; it never converts between the two.
///
/// Fails with [`WiretabError::ConfigurationMismatch`] when the shape is
/// missing a field the columns need.
pub fn create_wire_columns(
    config: &ColumnConfig,
    shape: &RowShape,
) -> Result<Vec<ColumnDescriptor>> {
    let unit = WeightUnit::from_kft(config.use_kft);

    let columns = Field::ALL
        .iter()
        .map(|&field| {
            let present = match field {
                Field::Weight => shape.provides_weight(unit),
                other => shape.contains(other),
            };
            if !present {
                return Err(WiretabError::ConfigurationMismatch {
                    field: field.key(unit).to_string(),
                });
            }
            Ok(build_column(field, unit, config.format_numeric))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        columns = columns.len(),
        weight = unit.key(),
        format_numeric = config.format_numeric,
        "built wire columns"
    );
    Ok(columns)
}

fn build_column(field: Field, unit: WeightUnit, format_numeric: bool) -> ColumnDescriptor {
    let (header, group) = match field {
        Field::PartNumber => ("PART NUMBER", None),
        Field::Awg => ("AWG", None),
        Field::ConductorInches => ("INCHES", Some("CONDUCTOR")),
        Field::ConductorMm => ("MM", Some("CONDUCTOR")),
        Field::NominalOdInches => ("INCHES", Some("NOMINAL O.D.")),
        Field::NominalOdMm => ("MM", Some("NOMINAL O.D.")),
        Field::Weight => (unit.header(), None),
    };

    let format = if !format_numeric {
        FormatRule::Verbatim
    } else {
        match field {
            Field::PartNumber | Field::Awg => FormatRule::Verbatim,
            Field::ConductorInches | Field::NominalOdInches => FormatRule::Fixed {
                decimals: INCH_DECIMALS,
                suffix: "in",
            },
            Field::ConductorMm | Field::NominalOdMm => FormatRule::Fixed {
                decimals: MM_DECIMALS,
                suffix: "mm",
            },
            Field::Weight => FormatRule::Weight {
                suffix: unit.suffix(),
            },
        }
    };

    let sort = match field {
        Field::PartNumber => SortRule::Alphanumeric,
        _ => SortRule::Numeric,
    };

    ColumnDescriptor {
        key: field.key(unit).to_string(),
        header: header.to_string(),
        group: group.map(str::to_string),
        field,
        unit,
        format,
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CellValue;

    fn example_record() -> WireRecord {
        WireRecord::new("W-100", "18(19/30)")
            .conductor(0.0403, 1.02)
            .nominal_od(0.065, 1.65)
            .weight(0.0012, WeightUnit::LbPerFt)
    }

    fn cells(columns: &[ColumnDescriptor], record: &WireRecord) -> Vec<String> {
        columns.iter().map(|c| c.cell(record)).collect()
    }

    #[test]
    fn test_column_order_and_keys() {
        let columns =
            create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
                .unwrap();
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "partNumber",
                "awg",
                "conductor.inches",
                "conductor.mm",
                "nominalOD.inches",
                "nominalOD.mm",
                "weightLbKft"
            ]
        );
        assert_eq!(columns[6].header, "WEIGHT LB/KFT");
        assert_eq!(columns[2].group.as_deref(), Some("CONDUCTOR"));
        assert_eq!(columns[5].group.as_deref(), Some("NOMINAL O.D."));
        assert_eq!(columns[0].group, None);
    }

    #[test]
    fn test_formatted_example_record() {
        let config = ColumnConfig::new().format_numeric(true).use_kft(false);
        let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
        let row = cells(&columns, &example_record());
        assert_eq!(row[0], "W-100");
        assert_eq!(row[1], "18(19/30)");
        assert_eq!(row[2], "0.0403 in");
        assert_eq!(row[3], "1.02 mm");
        assert_eq!(row[4], "0.0650 in");
        assert_eq!(row[5], "1.65 mm");
        assert_eq!(row[6], "0.0012 lb/ft");
        assert_eq!(columns[6].header, "WEIGHT LB/FT");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let config = ColumnConfig::new().format_numeric(true).use_kft(false);
        let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
        let record = example_record();
        assert_eq!(cells(&columns, &record), cells(&columns, &record));
    }

    #[test]
    fn test_unformatted_is_identity() {
        let config = ColumnConfig::new().format_numeric(false).use_kft(false);
        let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
        let numeric = example_record();
        assert_eq!(
            cells(&columns, &numeric),
            vec!["W-100", "18(19/30)", "0.0403", "1.02", "0.065", "1.65", "0.0012"]
        );

        let text = WireRecord::new("D30A01TXX-1", "30")
            .conductor("0.0100", "0.254")
            .nominal_od("0.0140 in", "0.356")
            .weight("0.36", WeightUnit::LbPerFt);
        assert_eq!(
            cells(&columns, &text),
            vec!["D30A01TXX-1", "30", "0.0100", "0.254", "0.0140 in", "0.356", "0.36"]
        );
    }

    #[test]
    fn test_text_passes_through_when_formatting() {
        let config = ColumnConfig::new().format_numeric(true);
        let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerKft)).unwrap();
        let record = WireRecord::new("S22A01TX-2", "22")
            .conductor("0.0253", "0.643")
            .nominal_od("0.0293", "0.744")
            .weight("2.07", WeightUnit::LbPerKft);
        assert_eq!(
            cells(&columns, &record),
            vec!["S22A01TX-2", "22", "0.0253", "0.643", "0.0293", "0.744", "2.07"]
        );
    }

    #[test]
    fn test_weight_decimals_by_magnitude() {
        let rule = FormatRule::Weight { suffix: "lb/kft" };
        assert_eq!(rule.apply(CellRef::Numeric(0.36)), "0.3600 lb/kft");
        assert_eq!(rule.apply(CellRef::Numeric(5.22)), "5.220 lb/kft");
        assert_eq!(rule.apply(CellRef::Numeric(33.37)), "33.370 lb/kft");
    }

    #[test]
    fn test_numeric_awg_has_no_suffix() {
        let config = ColumnConfig::new().format_numeric(true).use_kft(false);
        let columns = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap();
        let record = WireRecord::new("TCA2 18 AWG", 18.0)
            .conductor(0.0403, 1.024)
            .nominal_od(0.0463, 1.176)
            .weight(5.22, WeightUnit::LbPerFt);
        assert_eq!(
            cells(&columns, &record),
            vec![
                "TCA2 18 AWG",
                "18",
                "0.0403 in",
                "1.02 mm",
                "0.0463 in",
                "1.18 mm",
                "5.220 lb/ft"
            ]
        );
    }

    #[test]
    fn test_kft_on_ft_dataset_is_mismatch() {
        let config = ColumnConfig::new().use_kft(true);
        let err = create_wire_columns(&config, &RowShape::wire(WeightUnit::LbPerFt)).unwrap_err();
        assert_eq!(
            err,
            WiretabError::ConfigurationMismatch {
                field: "weightLbKft".to_string()
            }
        );
    }

    #[test]
    fn test_missing_field_is_mismatch() {
        let shape = RowShape::wire(WeightUnit::LbPerKft).without(Field::NominalOdMm);
        let err = create_wire_columns(&ColumnConfig::default(), &shape).unwrap_err();
        assert!(err.to_string().contains("nominalOD.mm"));
    }

    #[test]
    fn test_missing_value_renders_placeholder() {
        let columns =
            create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
                .unwrap();
        let mut record = WireRecord::new("P-1", "24")
            .conductor("0.0201", "0.511")
            .weight("1.3", WeightUnit::LbPerKft);
        record.nominal_od.mm = Some(CellValue::from("0.612"));
        let row = cells(&columns, &record);
        assert_eq!(row[4], PLACEHOLDER);
        assert_eq!(row[5], "0.612");
        assert_eq!(row[6], "1.3");
    }

    #[test]
    fn test_numeric_sort_uses_leading_number() {
        let columns =
            create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
                .unwrap();
        let awg = find_column(&columns, "awg").unwrap();
        let a = WireRecord::new("A", "10(37/26)");
        let b = WireRecord::new("B", "12");
        assert_eq!(awg.compare(&a, &b), Ordering::Less);
        assert_eq!(awg.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("S2A", "S10A"), Ordering::Less);
        assert_eq!(natural_cmp("T10A01", "T10A37"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ABC"), Ordering::Equal);
        assert_eq!(natural_cmp("", "A"), Ordering::Less);
    }

    #[test]
    fn test_find_unknown_column() {
        let columns =
            create_wire_columns(&ColumnConfig::default(), &RowShape::wire(WeightUnit::LbPerKft))
                .unwrap();
        assert_eq!(
            find_column(&columns, "color").unwrap_err(),
            WiretabError::UnknownColumn("color".to_string())
        );
    }
}
