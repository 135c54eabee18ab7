//! Water-sample CSV parsing
//!
//! Maps uploaded rows onto the fixed nine-column sample schema by position.
//! Quoting follows RFC 4180. Parsing is otherwise lenient: the first record
//! is always the header, rows whose cells are all blank are dropped, blank
//! or unparseable cells become `None`, and short rows leave their trailing
//! columns empty. A quoted cell that spans a line break is rejected, which
//! also catches an unterminated quote.

use chrono::{DateTime, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{WaterSample, SAMPLE_COLUMNS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("CSV file is empty")]
    Empty,

    #[error("No valid data found in CSV file")]
    NoRows,

    #[error("Invalid CSV format: {0}")]
    Malformed(String),
}

impl From<csv::Error> for IngestError {
    fn from(e: csv::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

/// Outcome of parsing one upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSamples {
    pub samples: Vec<WaterSample>,
    /// Data records dropped because every cell was blank.
    pub blank_rows: usize,
}

/// Parse a sample CSV document (header record first).
pub fn parse_samples(text: &str) -> Result<ParsedSamples, IngestError> {
    if text.trim().is_empty() {
        return Err(IngestError::Empty);
    }

    // Cells are trimmed after the line-break check so a dangling quote at
    // the end of the input still carries its newline.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let header_cols = reader.headers()?.len();
    if header_cols != SAMPLE_COLUMNS.len() {
        debug!(
            found = header_cols,
            expected = SAMPLE_COLUMNS.len(),
            "Header column count differs from sample schema; mapping by position"
        );
    }

    let mut parsed = ParsedSamples::default();
    for result in reader.records() {
        let record = result?;
        let line_num = record.position().map_or(0, csv::Position::line);
        check_no_line_breaks(&record, line_num)?;

        let fields: Vec<&str> = record.iter().map(str::trim).collect();
        if fields.iter().all(|f| f.is_empty()) {
            parsed.blank_rows += 1;
            continue;
        }
        parsed.samples.push(parse_row(&fields, line_num));
    }

    if parsed.samples.is_empty() {
        return Err(IngestError::NoRows);
    }
    Ok(parsed)
}

fn check_no_line_breaks(record: &StringRecord, line_num: u64) -> Result<(), IngestError> {
    if record.iter().any(|cell| cell.contains(['\n', '\r'])) {
        return Err(IngestError::Malformed(format!(
            "record on line {line_num} has an unterminated quote or a line break inside a field"
        )));
    }
    Ok(())
}

fn parse_row(fields: &[&str], line_num: u64) -> WaterSample {
    let cell = |i: usize| fields.get(i).copied().filter(|s| !s.is_empty());
    let num = |i: usize| {
        cell(i).and_then(|s| match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                warn!(line = line_num, column = SAMPLE_COLUMNS[i], value = s, "Unparseable numeric cell");
                None
            }
        })
    };

    WaterSample {
        location: cell(0).map(str::to_string),
        sample_date: cell(1).and_then(|s| {
            let date = parse_sample_date(s);
            if date.is_none() {
                warn!(line = line_num, value = s, "Unparseable sample_date");
            }
            date
        }),
        ph_level: num(2),
        iron_ppm: num(3),
        chromium_ppm: num(4),
        manganese_ppm: num(5),
        molybdenum_ppm: num(6),
        indium_ppm: num(7),
        tantalum_ppm: num(8),
    }
}

/// Accepts `YYYY-MM-DD`, `MM/DD/YYYY` and RFC 3339 timestamps.
pub fn parse_sample_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}
