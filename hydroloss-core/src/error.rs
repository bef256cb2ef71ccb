use hydroloss_schemas::parameter::ObservationField;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HydrolossError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: ObservationField,
        reason: String,
    },

    #[error("Observation field '{0}' was never provided")]
    MissingField(ObservationField),

    #[error("Input ended before a value for '{0}' was entered")]
    EndOfInput(ObservationField),

    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
