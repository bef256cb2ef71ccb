use crate::config::{self, Cli, OutputFormat};
use crate::report;
use anyhow::{Context, Result};
use hydroloss_core::{input::Prompter, logger::ReportLogger, losses};
use hydroloss_schemas::observation::PatientObservation;
use std::io::{self, BufRead, Write};

/// Runs one estimate against the process console.
pub fn run(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute(cli, stdin.lock(), stdout.lock(), stderr.lock())
}

/// Runs one estimate end to end: gather the observation, compute, print, record.
///
/// The report and status lines go to `out`. Prompts share `out` in text mode and move
/// to `prompts` in JSON mode, so `out` then carries only the JSON document.
pub fn execute<R, O, P>(cli: &Cli, input: R, mut out: O, prompts: P) -> Result<()>
where
    R: BufRead,
    O: Write,
    P: Write,
{
    let text = cli.format == OutputFormat::Text;
    if text {
        writeln!(out, "{}", report::banner())?;
    }

    let observation = match &cli.input {
        Some(path) => {
            if text {
                writeln!(out, "Leyendo observación desde {:?}...", path)?;
            }
            config::load_observation(path)?
        }
        None => match cli.format {
            OutputFormat::Text => prompt_observation(input, &mut out)?,
            OutputFormat::Json => prompt_observation(input, prompts)?,
        },
    };

    let loss_report = losses::estimate(&observation);

    match cli.format {
        OutputFormat::Text => writeln!(out, "{}", report::render_text(&loss_report))?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&observation, &loss_report)?)?,
    }

    if let Some(log_path) = &cli.log {
        let path = log_path
            .to_str()
            .with_context(|| format!("Log path is not valid UTF-8: {:?}", log_path))?;
        ReportLogger::open(path)?.log_report(&observation, &loss_report)?;
        if text {
            writeln!(out, "Historial actualizado en '{}'", path)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn prompt_observation<R: BufRead, W: Write>(input: R, output: W) -> Result<PatientObservation> {
    let mut prompter = Prompter::new(input, output);
    prompter
        .collect_observation()
        .context("Failed to collect the patient observation")
}
