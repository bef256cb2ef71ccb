use crate::observation::PatientObservation;
use serde::{Deserialize, Serialize};

/// On-disk wrapper for an observation supplied up front instead of at the prompt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ObservationFile {
    pub schema_version: String,
    pub observation: PatientObservation,
}
