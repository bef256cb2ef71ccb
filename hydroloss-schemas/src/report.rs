use crate::adjustment::AdjustmentSet;
use serde::{Deserialize, Serialize};

/// Outcome of one insensible loss estimate, all figures in ml/day.
///
/// `total_loss_ml` is always `base_loss_ml + adjustments.sum()`; construct reports through
/// `LossReport::new` so the total is derived rather than supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossReport {
    pub base_loss_ml: f64,
    pub adjustments: AdjustmentSet,
    pub total_loss_ml: f64,
}

impl LossReport {
    pub fn new(base_loss_ml: f64, adjustments: AdjustmentSet) -> Self {
        Self {
            base_loss_ml,
            adjustments,
            total_loss_ml: base_loss_ml + adjustments.sum(),
        }
    }

    pub fn adjustment_sum(&self) -> f64 {
        self.adjustments.sum()
    }
}
