//! Row shapes: which fields a data set provides.

use serde::{Deserialize, Serialize};

use super::record::{CellRef, WeightUnit, WireRecord};

/// A semantic field of a [`WireRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PartNumber,
    Awg,
    ConductorInches,
    ConductorMm,
    NominalOdInches,
    NominalOdMm,
    Weight,
}

impl Field {
    /// Every field, in column order
    pub const ALL: [Field; 7] = [
        Field::PartNumber,
        Field::Awg,
        Field::ConductorInches,
        Field::ConductorMm,
        Field::NominalOdInches,
        Field::NominalOdMm,
        Field::Weight,
    ];

    /// Field key. Weight has no unit-independent key, so the unit decides it.
    pub fn key(&self, unit: WeightUnit) -> &'static str {
        match self {
            Field::PartNumber => "partNumber",
            Field::Awg => "awg",
            Field::ConductorInches => "conductor.inches",
            Field::ConductorMm => "conductor.mm",
            Field::NominalOdInches => "nominalOD.inches",
            Field::NominalOdMm => "nominalOD.mm",
            Field::Weight => unit.key(),
        }
    }

    /// Read this field from a record. Weight is only returned when stored in `unit`.
    pub fn get<'a>(&self, record: &'a WireRecord, unit: WeightUnit) -> Option<CellRef<'a>> {
        let value = match self {
            Field::PartNumber => return Some(CellRef::Text(&record.part_number)),
            Field::Awg => record.awg.as_ref(),
            Field::ConductorInches => record.conductor.inches.as_ref(),
            Field::ConductorMm => record.conductor.mm.as_ref(),
            Field::NominalOdInches => record.nominal_od.inches.as_ref(),
            Field::NominalOdMm => record.nominal_od.mm.as_ref(),
            Field::Weight => record.weight_in(unit),
        };
        value.map(|v| v.as_cell())
    }
}

/// The set of fields a data set provides, plus the unit its weight is stored in.
///
/// A shape says what a data set *has*, independent of whether every row fills
/// every field. A field missing from the shape is a configuration error for a
/// column set that needs it; a field on the shape but missing from one row is
/// just a gap in that row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowShape {
    fields: Vec<Field>,
    weight_unit: Option<WeightUnit>,
}

impl RowShape {
    /// The standard wire shape: every field, weight stored in `unit`
    pub fn wire(unit: WeightUnit) -> Self {
        Self {
            fields: Field::ALL.to_vec(),
            weight_unit: Some(unit),
        }
    }

    /// Builder: drop a field from the shape
    pub fn without(mut self, field: Field) -> Self {
        self.fields.retain(|f| *f != field);
        if field == Field::Weight {
            self.weight_unit = None;
        }
        self
    }

    /// Infer the shape from rows: a field belongs to it when any row carries it.
    ///
    /// The weight unit is taken from the first row carrying a weight.
    pub fn infer(rows: &[WireRecord]) -> Self {
        let weight_unit = rows.iter().find_map(|r| r.weight.as_ref().map(|w| w.unit));
        let unit = weight_unit.unwrap_or(WeightUnit::LbPerKft);
        let fields = Field::ALL
            .into_iter()
            .filter(|f| {
                *f == Field::PartNumber
                    || (*f == Field::Weight && weight_unit.is_some())
                    || rows.iter().any(|r| f.get(r, unit).is_some())
            })
            .collect();
        Self {
            fields,
            weight_unit,
        }
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Unit the data set stores weight in, if it has a weight field
    pub fn weight_unit(&self) -> Option<WeightUnit> {
        self.weight_unit
    }

    /// Whether this shape provides weight in the given unit
    pub fn provides_weight(&self, unit: WeightUnit) -> bool {
        self.contains(Field::Weight) && self.weight_unit == Some(unit)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WireRecord {
        WireRecord::new("S22A01TX-2", "22")
            .conductor("0.0253", "0.643")
            .nominal_od("0.0293", "0.744")
            .weight("2.07", WeightUnit::LbPerKft)
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<&str> = Field::ALL
            .iter()
            .map(|f| f.key(WeightUnit::LbPerFt))
            .collect();
        assert_eq!(
            keys,
            vec![
                "partNumber",
                "awg",
                "conductor.inches",
                "conductor.mm",
                "nominalOD.inches",
                "nominalOD.mm",
                "weightLbFt"
            ]
        );
    }

    #[test]
    fn test_field_get() {
        let rec = sample();
        assert_eq!(
            Field::PartNumber.get(&rec, WeightUnit::LbPerKft),
            Some(CellRef::Text("S22A01TX-2"))
        );
        assert_eq!(
            Field::NominalOdMm.get(&rec, WeightUnit::LbPerKft),
            Some(CellRef::Text("0.744"))
        );
        assert_eq!(
            Field::Weight.get(&rec, WeightUnit::LbPerKft),
            Some(CellRef::Text("2.07"))
        );
        assert_eq!(Field::Weight.get(&rec, WeightUnit::LbPerFt), None);
    }

    #[test]
    fn test_wire_shape_contains_everything() {
        let shape = RowShape::wire(WeightUnit::LbPerFt);
        assert!(Field::ALL.iter().all(|f| shape.contains(*f)));
        assert!(shape.provides_weight(WeightUnit::LbPerFt));
        assert!(!shape.provides_weight(WeightUnit::LbPerKft));
    }

    #[test]
    fn test_without_weight_clears_unit() {
        let shape = RowShape::wire(WeightUnit::LbPerKft).without(Field::Weight);
        assert!(!shape.contains(Field::Weight));
        assert_eq!(shape.weight_unit(), None);
    }

    #[test]
    fn test_infer_from_rows() {
        let rows = vec![sample(), WireRecord::new("X-1", "24")];
        let shape = RowShape::infer(&rows);
        assert_eq!(shape, RowShape::wire(WeightUnit::LbPerKft));
    }

    #[test]
    fn test_infer_missing_fields() {
        let rows = vec![WireRecord::new("X-1", "24").conductor("0.02", "0.51")];
        let shape = RowShape::infer(&rows);
        assert!(shape.contains(Field::ConductorInches));
        assert!(!shape.contains(Field::NominalOdInches));
        assert!(!shape.contains(Field::Weight));
        assert_eq!(shape.weight_unit(), None);
    }
}
