use serde::{Deserialize, Serialize};

/// The five additive corrections applied on top of the base loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Temperature,
    Tachypnea,
    Sweating,
    Hydration,
    Age,
}

impl AdjustmentKind {
    /// Report order.
    pub const ALL: [AdjustmentKind; 5] = [
        AdjustmentKind::Temperature,
        AdjustmentKind::Tachypnea,
        AdjustmentKind::Sweating,
        AdjustmentKind::Hydration,
        AdjustmentKind::Age,
    ];

    /// Machine-readable key, as used in JSON output and the CSV history.
    pub fn key(self) -> &'static str {
        match self {
            AdjustmentKind::Temperature => "temperature_adjustment",
            AdjustmentKind::Tachypnea => "tachypnea_adjustment",
            AdjustmentKind::Sweating => "sweating_adjustment",
            AdjustmentKind::Hydration => "hydration_adjustment",
            AdjustmentKind::Age => "age_adjustment",
        }
    }

    /// Label printed in the bedside report.
    pub fn description(self) -> &'static str {
        match self {
            AdjustmentKind::Temperature => "Ajuste por temperatura",
            AdjustmentKind::Tachypnea => "Ajuste por taquipnea",
            AdjustmentKind::Sweating => "Ajuste por diaforesis",
            AdjustmentKind::Hydration => "Ajuste por estado de hidratación",
            AdjustmentKind::Age => "Ajuste por edad",
        }
    }
}

/// Adjustment values in ml/day. Every value is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustmentSet {
    pub temperature_adjustment: f64,
    pub tachypnea_adjustment: f64,
    pub sweating_adjustment: f64,
    pub hydration_adjustment: f64,
    pub age_adjustment: f64,
}

impl AdjustmentSet {
    pub fn get(&self, kind: AdjustmentKind) -> f64 {
        match kind {
            AdjustmentKind::Temperature => self.temperature_adjustment,
            AdjustmentKind::Tachypnea => self.tachypnea_adjustment,
            AdjustmentKind::Sweating => self.sweating_adjustment,
            AdjustmentKind::Hydration => self.hydration_adjustment,
            AdjustmentKind::Age => self.age_adjustment,
        }
    }

    /// All five adjustments in report order.
    pub fn entries(&self) -> [(AdjustmentKind, f64); 5] {
        AdjustmentKind::ALL.map(|kind| (kind, self.get(kind)))
    }

    /// Sum of the adjustments, accumulated in report order.
    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, value)| value).sum()
    }
}
