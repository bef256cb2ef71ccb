use crate::error::HydrolossError;
use hydroloss_schemas::{
    observation::PatientObservation,
    parameter::{FieldValue, ObservationField},
};

/// A fluent builder for assembling a `PatientObservation` one field at a time.
///
/// The interactive prompt fills fields in its own order; `build` only succeeds once all
/// seven are present.
#[derive(Debug, Default, Clone)]
pub struct ObservationBuilder {
    weight_kg: Option<f64>,
    duration_hours: Option<u32>,
    temperature_celsius: Option<f64>,
    respiratory_rate: Option<u32>,
    sweating_grade: Option<i32>,
    hydration_state: Option<i32>,
    age_years: Option<u32>,
}

impl ObservationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    pub fn with_duration_hours(mut self, duration_hours: u32) -> Self {
        self.duration_hours = Some(duration_hours);
        self
    }

    pub fn with_temperature_celsius(mut self, temperature_celsius: f64) -> Self {
        self.temperature_celsius = Some(temperature_celsius);
        self
    }

    pub fn with_respiratory_rate(mut self, respiratory_rate: u32) -> Self {
        self.respiratory_rate = Some(respiratory_rate);
        self
    }

    pub fn with_sweating_grade(mut self, sweating_grade: i32) -> Self {
        self.sweating_grade = Some(sweating_grade);
        self
    }

    pub fn with_hydration_state(mut self, hydration_state: i32) -> Self {
        self.hydration_state = Some(hydration_state);
        self
    }

    pub fn with_age_years(mut self, age_years: u32) -> Self {
        self.age_years = Some(age_years);
        self
    }

    /// Sets a field from a prompt value, converting it to the field's storage type.
    ///
    /// # Errors
    ///
    /// Returns `HydrolossError::InvalidValue` if an integer field receives a decimal value
    /// or a value that does not fit its storage type.
    pub fn with_value(self, field: ObservationField, value: FieldValue) -> Result<Self, HydrolossError> {
        Ok(match field {
            ObservationField::Weight => self.with_weight_kg(value.as_f64()),
            ObservationField::Temperature => self.with_temperature_celsius(value.as_f64()),
            ObservationField::Duration => self.with_duration_hours(integer(field, value)?),
            ObservationField::Age => self.with_age_years(integer(field, value)?),
            ObservationField::RespiratoryRate => self.with_respiratory_rate(integer(field, value)?),
            ObservationField::Sweating => self.with_sweating_grade(integer(field, value)?),
            ObservationField::Hydration => self.with_hydration_state(integer(field, value)?),
        })
    }

    /// Consumes the builder and returns the finished observation.
    ///
    /// # Errors
    ///
    /// Returns `HydrolossError::MissingField` naming the first field never set.
    pub fn build(self) -> Result<PatientObservation, HydrolossError> {
        Ok(PatientObservation {
            weight_kg: self.weight_kg.ok_or(HydrolossError::MissingField(ObservationField::Weight))?,
            duration_hours: self
                .duration_hours
                .ok_or(HydrolossError::MissingField(ObservationField::Duration))?,
            temperature_celsius: self
                .temperature_celsius
                .ok_or(HydrolossError::MissingField(ObservationField::Temperature))?,
            respiratory_rate: self
                .respiratory_rate
                .ok_or(HydrolossError::MissingField(ObservationField::RespiratoryRate))?,
            sweating_grade: self
                .sweating_grade
                .ok_or(HydrolossError::MissingField(ObservationField::Sweating))?,
            hydration_state: self
                .hydration_state
                .ok_or(HydrolossError::MissingField(ObservationField::Hydration))?,
            age_years: self.age_years.ok_or(HydrolossError::MissingField(ObservationField::Age))?,
        })
    }
}

fn integer<T: TryFrom<i64>>(field: ObservationField, value: FieldValue) -> Result<T, HydrolossError> {
    match value {
        FieldValue::Integer(v) => T::try_from(v).map_err(|_| HydrolossError::InvalidValue {
            field,
            reason: format!("{} is out of bounds", v),
        }),
        FieldValue::Real(v) => Err(HydrolossError::InvalidValue {
            field,
            reason: format!("expected a whole number, got {}", v),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_once_every_field_is_set() {
        let observation = ObservationBuilder::new()
            .with_weight_kg(70.0)
            .with_duration_hours(24)
            .with_temperature_celsius(39.0)
            .with_respiratory_rate(30)
            .with_sweating_grade(2)
            .with_hydration_state(1)
            .with_age_years(70)
            .build()
            .unwrap();
        assert_eq!(observation.weight_kg, 70.0);
        assert_eq!(observation.age_years, 70);
    }

    #[test]
    fn reports_the_missing_field() {
        let result = ObservationBuilder::new()
            .with_weight_kg(70.0)
            .with_duration_hours(24)
            .with_temperature_celsius(39.0)
            .with_respiratory_rate(30)
            .with_sweating_grade(2)
            .with_hydration_state(1)
            .build();
        assert!(matches!(result, Err(HydrolossError::MissingField(ObservationField::Age))));
    }

    #[test]
    fn with_value_converts_prompt_values() {
        let builder = ObservationBuilder::new()
            .with_value(ObservationField::Weight, FieldValue::Integer(3))
            .unwrap()
            .with_value(ObservationField::Duration, FieldValue::Integer(1))
            .unwrap()
            .with_value(ObservationField::Temperature, FieldValue::Real(37.0))
            .unwrap()
            .with_value(ObservationField::RespiratoryRate, FieldValue::Integer(20))
            .unwrap()
            .with_value(ObservationField::Sweating, FieldValue::Integer(0))
            .unwrap()
            .with_value(ObservationField::Hydration, FieldValue::Integer(0))
            .unwrap()
            .with_value(ObservationField::Age, FieldValue::Integer(1))
            .unwrap();
        let observation = builder.build().unwrap();
        assert_eq!(observation.weight_kg, 3.0);
        assert_eq!(observation.temperature_celsius, 37.0);
    }

    #[test]
    fn integer_fields_refuse_negative_or_fractional_values() {
        let negative = ObservationBuilder::new().with_value(ObservationField::Age, FieldValue::Integer(-1));
        assert!(matches!(negative, Err(HydrolossError::InvalidValue { .. })));

        let fractional =
            ObservationBuilder::new().with_value(ObservationField::Duration, FieldValue::Real(1.5));
        assert!(matches!(fractional, Err(HydrolossError::InvalidValue { .. })));
    }
}
