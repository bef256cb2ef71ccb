//! The fixed admissible ranges for every observation field, and the checks that enforce
//! them on typed-in text and on observations loaded from disk.

use crate::error::HydrolossError;
use hydroloss_schemas::{
    observation::PatientObservation,
    parameter::{Constraint, FieldValue, ObservationField, ParameterSpec, ValueKind},
};

/// Every field of a `PatientObservation`, in the order the user is asked for them.
pub static PARAMETERS: [ParameterSpec; 7] = [
    ParameterSpec {
        field: ObservationField::Duration,
        prompt: "Ingrese el número de horas para el cálculo (máximo 24): ",
        kind: ValueKind::Integer,
        constraint: Constraint::Range { min: 1.0, max: 24.0 },
    },
    ParameterSpec {
        field: ObservationField::Age,
        prompt: "Ingrese la edad del paciente en años: ",
        kind: ValueKind::Integer,
        constraint: Constraint::Range { min: 1.0, max: 120.0 },
    },
    ParameterSpec {
        field: ObservationField::Weight,
        prompt: "Ingrese el peso del paciente en kg: ",
        kind: ValueKind::Integer,
        constraint: Constraint::Range { min: 1.0, max: 500.0 },
    },
    ParameterSpec {
        field: ObservationField::Temperature,
        prompt: "Ingrese la temperatura corporal en °C: ",
        kind: ValueKind::Real,
        constraint: Constraint::Range { min: 34.0, max: 42.0 },
    },
    ParameterSpec {
        field: ObservationField::RespiratoryRate,
        prompt: "Ingrese la frecuencia respiratoria en respiraciones por minuto: ",
        kind: ValueKind::Integer,
        constraint: Constraint::Range { min: 5.0, max: 50.0 },
    },
    ParameterSpec {
        field: ObservationField::Sweating,
        prompt: "Seleccione el grado de diaforesis (0: Ninguna, 1: Leve, 2: Moderada, 3: Profusa): ",
        kind: ValueKind::Integer,
        constraint: Constraint::OneOf(&[0, 1, 2, 3]),
    },
    ParameterSpec {
        field: ObservationField::Hydration,
        prompt: "Seleccione el estado de hidratación (0: Normal, 1: Deshidratado): ",
        kind: ValueKind::Integer,
        constraint: Constraint::OneOf(&[0, 1]),
    },
];

pub fn spec_for(field: ObservationField) -> &'static ParameterSpec {
    let index = match field {
        ObservationField::Duration => 0,
        ObservationField::Age => 1,
        ObservationField::Weight => 2,
        ObservationField::Temperature => 3,
        ObservationField::RespiratoryRate => 4,
        ObservationField::Sweating => 5,
        ObservationField::Hydration => 6,
    };
    &PARAMETERS[index]
}

/// Converts user text into a value of the parameter's kind and checks its constraint.
///
/// The error string is the message shown to the user before asking again.
pub fn parse_value(spec: &ParameterSpec, raw: &str) -> Result<FieldValue, String> {
    let raw = raw.trim();
    let value = match spec.kind {
        ValueKind::Integer => raw
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| format!("'{}' no es un número entero.", raw))?,
        ValueKind::Real => raw
            .parse::<f64>()
            .map(FieldValue::Real)
            .map_err(|_| format!("'{}' no es un número.", raw))?,
    };
    check_value(spec, value)?;
    Ok(value)
}

pub fn check_value(spec: &ParameterSpec, value: FieldValue) -> Result<(), String> {
    match spec.constraint {
        Constraint::Range { min, max } => {
            let v = value.as_f64();
            // NaN fails both comparisons and is rejected here.
            if !(min <= v && v <= max) {
                return Err(format!("El valor debe estar entre {} y {}.", min, max));
            }
        }
        Constraint::OneOf(options) => {
            let admitted = match value {
                FieldValue::Integer(v) => options.contains(&v),
                FieldValue::Real(v) => options.iter().any(|&o| o as f64 == v),
            };
            if !admitted {
                return Err("Opción no válida.".to_string());
            }
        }
    }
    Ok(())
}

fn field_value(observation: &PatientObservation, field: ObservationField) -> FieldValue {
    match field {
        ObservationField::Duration => FieldValue::Integer(observation.duration_hours.into()),
        ObservationField::Age => FieldValue::Integer(observation.age_years.into()),
        ObservationField::Weight => FieldValue::Real(observation.weight_kg),
        ObservationField::Temperature => FieldValue::Real(observation.temperature_celsius),
        ObservationField::RespiratoryRate => FieldValue::Integer(observation.respiratory_rate.into()),
        ObservationField::Sweating => FieldValue::Integer(observation.sweating_grade.into()),
        ObservationField::Hydration => FieldValue::Integer(observation.hydration_state.into()),
    }
}

/// Applies the prompt constraints to an observation that did not come from the prompt.
///
/// Reports the first field that falls outside its admissible values.
pub fn validate_observation(observation: &PatientObservation) -> Result<(), HydrolossError> {
    for spec in PARAMETERS.iter() {
        let value = field_value(observation, spec.field);
        check_value(spec, value).map_err(|reason| HydrolossError::InvalidValue {
            field: spec.field,
            reason,
        })?;
    }
    Ok(())
}
