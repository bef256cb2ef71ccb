use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hydroloss_core::validation::validate_observation;
use hydroloss_schemas::{file_formats::ObservationFile, observation::PatientObservation};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Estimates a patient's insensible fluid losses from bedside observations.
#[derive(Debug, Parser)]
#[command(name = "hydroloss", version, about)]
pub struct Cli {
    /// Read the observation from a YAML file instead of prompting for it.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// How to print the loss report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append this run to a CSV history file.
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Loads an observation file and holds it to the same ranges as the interactive prompt.
pub fn load_observation(path: &Path) -> Result<PatientObservation> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read observation file: {:?}", path))?;
    let file: ObservationFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;
    validate_observation(&file.observation)
        .with_context(|| format!("Observation in {:?} is out of range", path))?;
    Ok(file.observation)
}
