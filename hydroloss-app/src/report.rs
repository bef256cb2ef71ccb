use anyhow::Result;
use hydroloss_schemas::{observation::PatientObservation, report::LossReport};
use serde::Serialize;

const UNIT: &str = "ml/día";
const RULE_WIDTH: usize = 50;

pub fn banner() -> String {
    format!("Cálculo de pérdidas insensibles\n{}", "=".repeat(RULE_WIDTH))
}

/// Renders the bedside summary: base loss, each adjustment, then the total.
pub fn render_text(report: &LossReport) -> String {
    let rule = "*".repeat(RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "Resumen de pérdidas insensibles:".to_string(),
        format!("Pérdidas base: {:.2} {}", report.base_loss_ml, UNIT),
    ];
    for (kind, value) in report.adjustments.entries() {
        lines.push(format!("{}: {:.2} {}", kind.description(), value, UNIT));
    }
    lines.push(format!(
        "Total de pérdidas insensibles: {:.2} {}",
        report.total_loss_ml, UNIT
    ));
    lines.push(rule);
    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    observation: &'a PatientObservation,
    report: &'a LossReport,
}

pub fn render_json(observation: &PatientObservation, report: &LossReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport { observation, report })?)
}
