use crate::error::HydrolossError;
use chrono::{DateTime, Utc};
use csv::{Writer, WriterBuilder};
use hydroloss_schemas::{observation::PatientObservation, report::LossReport};
use serde::Serialize;
use std::fs::{File, OpenOptions};

#[derive(Debug, Serialize)]
struct LogEntry {
    recorded_at: String,
    weight_kg: f64,
    duration_hours: u32,
    temperature_celsius: f64,
    respiratory_rate: u32,
    sweating_grade: i32,
    hydration_state: i32,
    age_years: u32,
    base_loss_ml: f64,
    temperature_adjustment: f64,
    tachypnea_adjustment: f64,
    sweating_adjustment: f64,
    hydration_adjustment: f64,
    age_adjustment: f64,
    total_loss_ml: f64,
}

/// Appends one CSV row per estimate, so successive runs build up a history file.
pub struct ReportLogger {
    path: String,
    writer: Writer<File>,
}

impl ReportLogger {
    /// Opens `path` for appending. The header row is written only if the file is empty.
    pub fn open(path: &str) -> Result<Self, HydrolossError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| HydrolossError::FileIO(path.to_string(), e))?;
        let is_empty = file
            .metadata()
            .map_err(|e| HydrolossError::FileIO(path.to_string(), e))?
            .len()
            == 0;
        let writer = WriterBuilder::new().has_headers(is_empty).from_writer(file);
        Ok(Self {
            path: path.to_string(),
            writer,
        })
    }

    pub fn log_report(
        &mut self,
        observation: &PatientObservation,
        report: &LossReport,
    ) -> Result<(), HydrolossError> {
        self.log_report_at(Utc::now(), observation, report)
    }

    pub fn log_report_at(
        &mut self,
        recorded_at: DateTime<Utc>,
        observation: &PatientObservation,
        report: &LossReport,
    ) -> Result<(), HydrolossError> {
        let adjustments = &report.adjustments;
        let entry = LogEntry {
            recorded_at: recorded_at.to_rfc3339(),
            weight_kg: observation.weight_kg,
            duration_hours: observation.duration_hours,
            temperature_celsius: observation.temperature_celsius,
            respiratory_rate: observation.respiratory_rate,
            sweating_grade: observation.sweating_grade,
            hydration_state: observation.hydration_state,
            age_years: observation.age_years,
            base_loss_ml: report.base_loss_ml,
            temperature_adjustment: adjustments.temperature_adjustment,
            tachypnea_adjustment: adjustments.tachypnea_adjustment,
            sweating_adjustment: adjustments.sweating_adjustment,
            hydration_adjustment: adjustments.hydration_adjustment,
            age_adjustment: adjustments.age_adjustment,
            total_loss_ml: report.total_loss_ml,
        };

        self.writer
            .serialize(entry)
            .map_err(|e| HydrolossError::CsvError(self.path.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| HydrolossError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::losses::estimate;
    use chrono::TimeZone;

    fn observation() -> PatientObservation {
        PatientObservation {
            weight_kg: 70.0,
            duration_hours: 24,
            temperature_celsius: 39.0,
            respiratory_rate: 30,
            sweating_grade: 2,
            hydration_state: 1,
            age_years: 70,
        }
    }

    #[test]
    fn header_is_written_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path = path.to_str().unwrap();
        let obs = observation();
        let report = estimate(&obs);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();

        ReportLogger::open(path).unwrap().log_report_at(at, &obs, &report).unwrap();
        ReportLogger::open(path).unwrap().log_report_at(at, &obs, &report).unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("recorded_at,weight_kg,duration_hours"));
        assert!(lines[0].ends_with("age_adjustment,total_loss_ml"));
        assert!(lines[1].starts_with("2024-05-01T08:30:00+00:00,"));
        assert!(lines[1].ends_with(",1390.0"));
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn rows_read_back_with_the_same_figures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let path = path.to_str().unwrap();
        let obs = observation();
        let report = estimate(&obs);

        ReportLogger::open(path).unwrap().log_report(&obs, &report).unwrap();

        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let field = |name: &str| {
            let index = headers.iter().position(|h| h == name).unwrap();
            record[index].parse::<f64>().unwrap()
        };
        assert_eq!(field("base_loss_ml"), 840.0);
        assert_eq!(field("tachypnea_adjustment"), 50.0);
        assert_eq!(field("total_loss_ml"), 1390.0);
    }

    #[test]
    fn unwritable_path_is_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("history.csv");
        let result = ReportLogger::open(missing.to_str().unwrap());
        assert!(matches!(result, Err(HydrolossError::FileIO(..))));
    }
}
