//! Defines the bedside observation a loss estimate is computed from, along with the
//! clinical code tables used to record sweating and hydration.

use serde::{Deserialize, Serialize};

/// Severity of diaphoresis as charted at the bedside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweatingGrade {
    None,
    Mild,
    Moderate,
    Profuse,
}

impl SweatingGrade {
    #[cfg(test)]
    pub const ALL: [SweatingGrade; 4] = [
        SweatingGrade::None,
        SweatingGrade::Mild,
        SweatingGrade::Moderate,
        SweatingGrade::Profuse,
    ];

    /// Maps a charted integer code onto a grade. Codes outside 0..=3 have no grade.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(SweatingGrade::None),
            1 => Some(SweatingGrade::Mild),
            2 => Some(SweatingGrade::Moderate),
            3 => Some(SweatingGrade::Profuse),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            SweatingGrade::None => 0,
            SweatingGrade::Mild => 1,
            SweatingGrade::Moderate => 2,
            SweatingGrade::Profuse => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationState {
    Normal,
    Dehydrated,
}

impl HydrationState {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(HydrationState::Normal),
            1 => Some(HydrationState::Dehydrated),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            HydrationState::Normal => 0,
            HydrationState::Dehydrated => 1,
        }
    }
}

/// A single set of patient measurements taken for one loss estimate.
///
/// Sweating and hydration are kept as the raw charted codes so that a code outside
/// the known tables can still flow through the calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientObservation {
    /// Body weight in kilograms.
    pub weight_kg: f64,
    /// Length of the estimation window in hours (1-24).
    pub duration_hours: u32,
    /// Core body temperature in degrees Celsius.
    pub temperature_celsius: f64,
    /// Breaths per minute.
    pub respiratory_rate: u32,
    /// Diaphoresis code, see `SweatingGrade`.
    pub sweating_grade: i32,
    /// Hydration code, see `HydrationState`.
    pub hydration_state: i32,
    pub age_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweating_codes_map_both_ways() {
        for grade in SweatingGrade::ALL {
            assert_eq!(SweatingGrade::from_code(grade.code()), Some(grade));
        }
        assert_eq!(SweatingGrade::from_code(4), None);
        assert_eq!(SweatingGrade::from_code(-1), None);
    }

    #[test]
    fn hydration_only_knows_two_codes() {
        assert_eq!(HydrationState::from_code(0), Some(HydrationState::Normal));
        assert_eq!(HydrationState::from_code(1), Some(HydrationState::Dehydrated));
        assert_eq!(HydrationState::from_code(2), None);
    }
}
