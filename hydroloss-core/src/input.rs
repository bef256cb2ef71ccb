//! Interactive collection of an observation from a terminal.

use crate::{
    builder::ObservationBuilder,
    error::HydrolossError,
    validation::{parse_value, PARAMETERS},
};
use hydroloss_schemas::{
    observation::PatientObservation,
    parameter::{FieldValue, ParameterSpec},
};
use std::io::{BufRead, Write};

/// Asks for values on `output` and reads answers from `input` until they are valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts until the answer parses and satisfies the parameter's constraint.
    ///
    /// Rejected answers, including lines that are not valid UTF-8, are reported and asked
    /// again with no limit on attempts. The only errors are console failures and the input
    /// closing before a valid answer arrives.
    pub fn ask(&mut self, spec: &ParameterSpec) -> Result<FieldValue, HydrolossError> {
        let mut line = Vec::new();
        loop {
            write!(self.output, "{}", spec.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(HydrolossError::EndOfInput(spec.field));
            }

            let parsed = std::str::from_utf8(&line)
                .map_err(|_| "la entrada no es texto válido.".to_string())
                .and_then(|text| parse_value(spec, text));
            match parsed {
                Ok(value) => return Ok(value),
                Err(reason) => writeln!(self.output, "Entrada no válida: {}", reason)?,
            }
        }
    }

    /// Asks for every observation field in prompt order.
    pub fn collect_observation(&mut self) -> Result<PatientObservation, HydrolossError> {
        let mut builder = ObservationBuilder::new();
        for spec in PARAMETERS.iter() {
            let value = self.ask(spec)?;
            builder = builder.with_value(spec.field, value)?;
        }
        builder.build()
    }
}
