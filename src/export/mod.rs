//! Machine-readable output for simulation results: pretty JSON and CSV.

use serde::Serialize;

use crate::burn::BurnReport;
use crate::error::ExportError;
use crate::poison::RoundRecord;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Poison run as serialized: total plus the per-round records.
#[derive(Debug, Clone, Serialize)]
pub struct PoisonReport<'a> {
    pub initial_poison: i64,
    pub rounds: i64,
    pub total_damage: i64,
    pub records: &'a [RoundRecord],
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn poison_to_csv(records: &[RoundRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["round", "damage", "total_damage"])?;
    for record in records {
        writer.write_record([
            record.round.to_string(),
            record.damage.to_string(),
            record.total.to_string(),
        ])?;
    }
    finish(writer)
}

pub fn burn_to_csv(report: &BurnReport) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["tick", "time_s", "damage"])?;
    for tick in &report.ticks {
        writer.write_record([
            tick.tick.to_string(),
            format!("{:.1}", tick.time),
            tick.damage.to_string(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    String::from_utf8(bytes).map_err(|_| ExportError::Utf8)
}
