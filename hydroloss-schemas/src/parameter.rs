//! Descriptors for the seven observation fields: what to ask, what type to expect and
//! which values are admissible.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationField {
    Duration,
    Age,
    Weight,
    Temperature,
    RespiratoryRate,
    Sweating,
    Hydration,
}

impl ObservationField {
    /// Name of the field as it appears in `PatientObservation`.
    pub fn name(self) -> &'static str {
        match self {
            ObservationField::Duration => "duration_hours",
            ObservationField::Age => "age_years",
            ObservationField::Weight => "weight_kg",
            ObservationField::Temperature => "temperature_celsius",
            ObservationField::RespiratoryRate => "respiratory_rate",
            ObservationField::Sweating => "sweating_grade",
            ObservationField::Hydration => "hydration_state",
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Real,
}

/// Admissible values for a field. Range bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Range { min: f64, max: f64 },
    OneOf(&'static [i64]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
}

impl FieldValue {
    pub fn as_f64(self) -> f64 {
        match self {
            FieldValue::Integer(v) => v as f64,
            FieldValue::Real(v) => v,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Real(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub field: ObservationField,
    /// Text shown to the user when asking for this value.
    pub prompt: &'static str,
    pub kind: ValueKind,
    pub constraint: Constraint,
}
