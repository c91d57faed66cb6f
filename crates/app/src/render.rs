use std::io::Write;

use engine::{ExpenseRecord, ParseError, SheetRow, reply};
use serde::Serialize;

use crate::{error::Result, settings::OutputFormat};

#[derive(Serialize)]
struct ErrorLine {
    error: String,
}

enum Sink<W: Write> {
    Reply(W),
    Json(W),
    Csv(csv::Writer<W>),
}

/// Writes extraction outcomes in the configured output format.
pub(crate) struct Renderer<W: Write> {
    submitter: String,
    sink: Sink<W>,
}

impl<W: Write> Renderer<W> {
    pub(crate) fn new(format: OutputFormat, submitter: &str, writer: W) -> Result<Self> {
        let sink = match format {
            OutputFormat::Reply => Sink::Reply(writer),
            OutputFormat::Json => Sink::Json(writer),
            OutputFormat::Csv => {
                let mut csv = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                csv.write_record(SheetRow::HEADER)?;
                Sink::Csv(csv)
            }
        };
        Ok(Self {
            submitter: submitter.to_string(),
            sink,
        })
    }

    pub(crate) fn render(&mut self, outcome: &std::result::Result<ExpenseRecord, ParseError>) -> Result<()> {
        match (&mut self.sink, outcome) {
            (Sink::Reply(out), Ok(record)) => writeln!(out, "{}\n", reply::confirmation(record))?,
            (Sink::Reply(out), Err(err)) => writeln!(out, "{}\n", reply::error_reply(err))?,
            (Sink::Json(out), Ok(record)) => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            (Sink::Json(out), Err(err)) => {
                let line = ErrorLine {
                    error: err.to_string(),
                };
                serde_json::to_writer(&mut *out, &line)?;
                writeln!(out)?;
            }
            (Sink::Csv(csv), Ok(record)) => {
                csv.serialize(SheetRow::new(self.submitter.as_str(), record))?;
            }
            (Sink::Csv(_), Err(err)) => {
                tracing::warn!("message not mirrored to the sheet: {err}");
            }
        }
        Ok(())
    }

    /// Flushes buffered output and hands the writer back.
    pub(crate) fn finish(self) -> Result<W> {
        match self.sink {
            Sink::Reply(mut out) | Sink::Json(mut out) => {
                out.flush()?;
                Ok(out)
            }
            Sink::Csv(csv) => csv.into_inner().map_err(|err| err.into_error().into()),
        }
    }
}
