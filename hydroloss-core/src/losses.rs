use crate::adjustments::calculate_adjustments;
use hydroloss_schemas::{observation::PatientObservation, report::LossReport};

/// Baseline insensible loss per kilogram per hour, in ml.
pub const BASE_ML_PER_KG_HOUR: f64 = 0.5;

pub fn base_loss(weight_kg: f64, duration_hours: u32) -> f64 {
    BASE_ML_PER_KG_HOUR * weight_kg * duration_hours as f64
}

/// Estimates insensible losses: the weight/time base plus every adjustment.
pub fn calculate_insensible_losses(
    weight_kg: f64,
    duration_hours: u32,
    temperature_celsius: f64,
    respiratory_rate: u32,
    sweating_grade: i32,
    hydration_state: i32,
    age_years: u32,
) -> LossReport {
    let adjustments = calculate_adjustments(
        temperature_celsius,
        respiratory_rate,
        sweating_grade,
        hydration_state,
        age_years,
    );
    LossReport::new(base_loss(weight_kg, duration_hours), adjustments)
}

pub fn estimate(observation: &PatientObservation) -> LossReport {
    calculate_insensible_losses(
        observation.weight_kg,
        observation.duration_hours,
        observation.temperature_celsius,
        observation.respiratory_rate,
        observation.sweating_grade,
        observation.hydration_state,
        observation.age_years,
    )
}
