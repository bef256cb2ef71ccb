//! Additive corrections to the base insensible loss.
//!
//! Each adjustment depends on exactly one clinical input and is clamped at zero, so the
//! corrections only ever add to the estimate.

use hydroloss_schemas::{
    adjustment::AdjustmentSet,
    observation::{HydrationState, SweatingGrade},
};

pub const NORMOTHERMIA_CELSIUS: f64 = 37.0;
pub const ML_PER_DEGREE: f64 = 100.0;
pub const TACHYPNEA_THRESHOLD: u32 = 20;
pub const ML_PER_EXTRA_BREATH: f64 = 5.0;
pub const DEHYDRATION_ML: f64 = 50.0;
pub const INFANT_ML: f64 = 100.0;
pub const ELDERLY_ML: f64 = 50.0;
pub const ELDERLY_AGE_YEARS: u32 = 65;

pub fn temperature_adjustment(temperature_celsius: f64) -> f64 {
    ((temperature_celsius - NORMOTHERMIA_CELSIUS) * ML_PER_DEGREE).max(0.0)
}

pub fn tachypnea_adjustment(respiratory_rate: u32) -> f64 {
    respiratory_rate.saturating_sub(TACHYPNEA_THRESHOLD) as f64 * ML_PER_EXTRA_BREATH
}

/// Codes outside the sweating table contribute nothing rather than failing.
pub fn sweating_adjustment(sweating_grade: i32) -> f64 {
    SweatingGrade::from_code(sweating_grade).map_or(0.0, sweating_table)
}

fn sweating_table(grade: SweatingGrade) -> f64 {
    match grade {
        SweatingGrade::None => 0.0,
        SweatingGrade::Mild => 100.0,
        SweatingGrade::Moderate => 200.0,
        SweatingGrade::Profuse => 300.0,
    }
}

pub fn hydration_adjustment(hydration_state: i32) -> f64 {
    if HydrationState::from_code(hydration_state) == Some(HydrationState::Dehydrated) {
        DEHYDRATION_ML
    } else {
        0.0
    }
}

pub fn age_adjustment(age_years: u32) -> f64 {
    if age_years < 1 {
        INFANT_ML
    } else if age_years > ELDERLY_AGE_YEARS {
        ELDERLY_ML
    } else {
        0.0
    }
}

pub fn calculate_adjustments(
    temperature_celsius: f64,
    respiratory_rate: u32,
    sweating_grade: i32,
    hydration_state: i32,
    age_years: u32,
) -> AdjustmentSet {
    AdjustmentSet {
        temperature_adjustment: temperature_adjustment(temperature_celsius),
        tachypnea_adjustment: tachypnea_adjustment(respiratory_rate),
        sweating_adjustment: sweating_adjustment(sweating_grade),
        hydration_adjustment: hydration_adjustment(hydration_state),
        age_adjustment: age_adjustment(age_years),
    }
}
