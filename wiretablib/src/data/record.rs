//! Core record types: one wire SKU and the values it stores.
//!
//! Stored values keep the representation they were authored with. A value
//! written as `"0.0100"` stays text so its trailing zeros survive; a value
//! written as `0.01` is numeric and may be reformatted by a column rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored cell value: either a number or pre-formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A plain number (formatting rules may apply decimals and a unit suffix)
    Numeric(f64),
    /// Pre-formatted text, always rendered as-is
    Text(String),
}

impl CellValue {
    /// Borrowed view of this value
    pub fn as_cell(&self) -> CellRef<'_> {
        match self {
            CellValue::Numeric(n) => CellRef::Numeric(*n),
            CellValue::Text(s) => CellRef::Text(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Numeric(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Numeric(f64::from(n))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_cell().fmt(f)
    }
}

/// Borrowed view of a single field on a record.
///
/// The part number is a plain string rather than a [`CellValue`], so field
/// access goes through this view to give every column the same input type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellRef<'a> {
    Numeric(f64),
    Text(&'a str),
}

impl CellRef<'_> {
    /// The number stored in this cell, if it is numeric. Text is never parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellRef::Numeric(n) => Some(*n),
            CellRef::Text(_) => None,
        }
    }

    /// Numeric key used for ordering.
    ///
    /// Numbers are used directly. Text yields its leading numeric prefix
    /// (`"18(19/30)"` gives 18) and 0 when there is none.
    pub fn sort_number(&self) -> f64 {
        match self {
            CellRef::Numeric(n) => *n,
            CellRef::Text(s) => leading_number(s).unwrap_or(0.0),
        }
    }
}

impl fmt::Display for CellRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRef::Numeric(n) => write!(f, "{}", n),
            CellRef::Text(s) => f.write_str(s),
        }
    }
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
    }
    s[..end].parse().ok()
}

/// A linear measurement stored in both unit systems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inches: Option<CellValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mm: Option<CellValue>,
}

impl Measurement {
    pub fn new(inches: impl Into<CellValue>, mm: impl Into<CellValue>) -> Self {
        Self {
            inches: Some(inches.into()),
            mm: Some(mm.into()),
        }
    }
}

/// Unit a data set stores its weight in.
///
/// Each data set picks one. The two are separate stored fields and a value is
/// never converted from one to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Pounds per foot (`weightLbFt`)
    LbPerFt,
    /// Pounds per thousand feet (`weightLbKft`)
    LbPerKft,
}

impl WeightUnit {
    /// Select the unit from the `use_kft` switch
    pub fn from_kft(use_kft: bool) -> Self {
        if use_kft {
            WeightUnit::LbPerKft
        } else {
            WeightUnit::LbPerFt
        }
    }

    /// Stable field key
    pub fn key(&self) -> &'static str {
        match self {
            WeightUnit::LbPerFt => "weightLbFt",
            WeightUnit::LbPerKft => "weightLbKft",
        }
    }

    /// Column header label
    pub fn header(&self) -> &'static str {
        match self {
            WeightUnit::LbPerFt => "WEIGHT LB/FT",
            WeightUnit::LbPerKft => "WEIGHT LB/KFT",
        }
    }

    /// Suffix appended to formatted numeric values
    pub fn suffix(&self) -> &'static str {
        match self {
            WeightUnit::LbPerFt => "lb/ft",
            WeightUnit::LbPerKft => "lb/kft",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Mass per length, tagged with the unit it was authored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: CellValue,
    pub unit: WeightUnit,
}

/// One product SKU's physical specification.
///
/// Fields other than the part number are optional so that a row with a gap
/// in its source data can still be represented; the renderer shows a
/// placeholder for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
    pub part_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awg: Option<CellValue>,
    #[serde(default)]
    pub conductor: Measurement,
    #[serde(rename = "nominalOD", default)]
    pub nominal_od: Measurement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl WireRecord {
    /// Create a record with only a part number and gauge
    pub fn new(part_number: impl Into<String>, awg: impl Into<CellValue>) -> Self {
        Self {
            part_number: part_number.into(),
            awg: Some(awg.into()),
            conductor: Measurement::default(),
            nominal_od: Measurement::default(),
            weight: None,
        }
    }

    /// Builder: set conductor dimensions
    pub fn conductor(mut self, inches: impl Into<CellValue>, mm: impl Into<CellValue>) -> Self {
        self.conductor = Measurement::new(inches, mm);
        self
    }

    /// Builder: set nominal outer diameter
    pub fn nominal_od(mut self, inches: impl Into<CellValue>, mm: impl Into<CellValue>) -> Self {
        self.nominal_od = Measurement::new(inches, mm);
        self
    }

    /// Builder: set weight in the given unit
    pub fn weight(mut self, value: impl Into<CellValue>, unit: WeightUnit) -> Self {
        self.weight = Some(Weight {
            value: value.into(),
            unit,
        });
        self
    }

    /// Weight value, only if stored in `unit`
    pub fn weight_in(&self, unit: WeightUnit) -> Option<&CellValue> {
        self.weight
            .as_ref()
            .filter(|w| w.unit == unit)
            .map(|w| &w.value)
    }

    /// All numeric values stored on this record
    pub(crate) fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        [
            self.awg.as_ref(),
            self.conductor.inches.as_ref(),
            self.conductor.mm.as_ref(),
            self.nominal_od.inches.as_ref(),
            self.nominal_od.mm.as_ref(),
            self.weight.as_ref().map(|w| &w.value),
        ]
        .into_iter()
        .flatten()
        .filter_map(|v| v.as_cell().as_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display_keeps_text() {
        assert_eq!(CellValue::from("0.0100").to_string(), "0.0100");
        assert_eq!(CellValue::from("18(19/30)").to_string(), "18(19/30)");
    }

    #[test]
    fn test_cell_display_numeric_natural() {
        assert_eq!(CellValue::from(18.0).to_string(), "18");
        assert_eq!(CellValue::from(0.0403).to_string(), "0.0403");
        assert_eq!(CellValue::from(22u32).to_string(), "22");
    }

    #[test]
    fn test_text_is_not_a_number() {
        assert_eq!(CellValue::from("0.0253").as_cell().as_number(), None);
        assert_eq!(CellValue::from(0.0253).as_cell().as_number(), Some(0.0253));
    }

    #[test]
    fn test_sort_number() {
        assert_eq!(CellValue::from("18(19/30)").as_cell().sort_number(), 18.0);
        assert_eq!(CellValue::from("0.0253").as_cell().sort_number(), 0.0253);
        assert_eq!(CellValue::from("n/a").as_cell().sort_number(), 0.0);
        assert_eq!(CellValue::from("").as_cell().sort_number(), 0.0);
        assert_eq!(CellValue::from(4.17).as_cell().sort_number(), 4.17);
    }

    #[test]
    fn test_weight_unit_keys() {
        assert_eq!(WeightUnit::from_kft(true), WeightUnit::LbPerKft);
        assert_eq!(WeightUnit::from_kft(false), WeightUnit::LbPerFt);
        assert_eq!(WeightUnit::LbPerKft.key(), "weightLbKft");
        assert_eq!(WeightUnit::LbPerFt.header(), "WEIGHT LB/FT");
    }

    #[test]
    fn test_weight_in_only_matches_stored_unit() {
        let rec = WireRecord::new("W-1", "30").weight("0.36", WeightUnit::LbPerFt);
        assert_eq!(
            rec.weight_in(WeightUnit::LbPerFt),
            Some(&CellValue::from("0.36"))
        );
        assert_eq!(rec.weight_in(WeightUnit::LbPerKft), None);
    }

    #[test]
    fn test_untagged_json_shape() {
        let rec = WireRecord::new("W-100", "18(19/30)")
            .conductor(0.0403, 1.02)
            .nominal_od("0.0650", "1.65");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["partNumber"], "W-100");
        assert_eq!(json["conductor"]["inches"], 0.0403);
        assert_eq!(json["nominalOD"]["inches"], "0.0650");
        assert!(json.get("weight").is_none());
    }
}
