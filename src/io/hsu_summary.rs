//! Reader for Groundwater Vistas HSU summary files.
//!
//! HSU (hydrostratigraphic unit) summaries are CSV exports of zone-budget
//! flow terms over the model timesteps. The file interleaves a row of
//! timestamps with one section per zone:
//!
//! ```text
//! Time Values,1.0,2.0,3.0
//!
//! Summary of Flows for HSU Zone 1
//! Storage,0.5,0.6,0.7
//! Constant Head,-0.1,-0.2,-0.1
//!
//! Summary of Flows for HSU Zone 2
//! Storage,1.5,1.4,1.6
//! ```
//!
//! The exporter writes `-1.#QNAN0e+000` / `1.#QNAN0e+000` sentinels for
//! undefined budget terms; both are mapped to NaN.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Section header prefix for each zone.
const ZONE_HEADER: &str = "Summary of Flows for HSU Zone";
/// Row heading of the timestamp line.
const TIME_VALUES: &str = "Time Values";

/// Error type for HSU summary parsing.
#[derive(Debug, Error)]
pub enum HsuFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// No "Time Values" row in the file
    #[error("HSU summary has no Time Values row")]
    MissingTimeValues,

    /// No zone sections in the file
    #[error("HSU summary contains no zone sections")]
    NoZones,
}

/// One named budget row within a zone section.
#[derive(Clone, Debug)]
pub struct HsuRow {
    /// Row heading (e.g. "Storage", "Constant Head")
    pub label: String,
    /// One value per timestep; NaN for undefined terms
    pub values: Vec<f64>,
}

/// All budget rows for one HSU zone.
#[derive(Clone, Debug)]
pub struct HsuZone {
    /// Zone number from the section header
    pub id: u32,
    /// Budget rows in file order
    pub rows: Vec<HsuRow>,
}

impl HsuZone {
    /// Find a budget row by its heading.
    pub fn row(&self, label: &str) -> Option<&HsuRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// Parsed HSU summary: timestamps plus per-zone budget rows.
#[derive(Clone, Debug)]
pub struct HsuSummary {
    /// Model timesteps
    pub times: Vec<f64>,
    /// Zone sections in file order
    pub zones: Vec<HsuZone>,
}

impl HsuSummary {
    /// Find a zone by number.
    pub fn zone(&self, id: u32) -> Option<&HsuZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Number of timesteps.
    pub fn n_steps(&self) -> usize {
        self.times.len()
    }
}

fn parse_value(s: &str, line: usize) -> Result<f64, HsuFileError> {
    // Exporter sentinels for undefined terms
    if s == "-1.#QNAN0e+000" || s == "1.#QNAN0e+000" {
        return Ok(f64::NAN);
    }
    s.parse().map_err(|_| HsuFileError::ParseError {
        line,
        message: format!("Invalid value {:?}", s),
    })
}

/// Read an HSU summary file.
///
/// # Errors
///
/// Returns an [`HsuFileError`] on I/O failure, malformed values or section
/// headers (with line numbers), rows whose length disagrees with the
/// timestamp row, a missing timestamp row, or a file with no zones.
pub fn read_hsu_summary<P: AsRef<Path>>(path: P) -> Result<HsuSummary, HsuFileError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut times: Option<Vec<f64>> = None;
    let mut zones: Vec<HsuZone> = Vec::new();
    let mut current: Option<HsuZone> = None;

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_no = line_num + 1;
        let line = line_result?;
        let line = line.trim_end_matches(['\r', '\n']);

        let fields: Vec<&str> = line.split(',').collect();
        let heading = fields[0].trim();

        // Blank line ends the current section
        if heading.is_empty() && fields.len() == 1 {
            if let Some(zone) = current.take() {
                zones.push(zone);
            }
            continue;
        }

        if heading.contains(TIME_VALUES) {
            let parsed: Result<Vec<f64>, _> = fields[1..]
                .iter()
                .map(|s| parse_value(s.trim(), line_no))
                .collect();
            times = Some(parsed?);
            continue;
        }

        if let Some(header) = heading.strip_prefix(ZONE_HEADER) {
            if let Some(zone) = current.take() {
                zones.push(zone);
            }
            let id: u32 = header
                .trim()
                .parse()
                .map_err(|_| HsuFileError::ParseError {
                    line: line_no,
                    message: format!("Invalid zone number in header {:?}", heading),
                })?;
            current = Some(HsuZone {
                id,
                rows: Vec::new(),
            });
            continue;
        }

        // Data row inside a section; rows outside any section are ignored
        if let Some(zone) = current.as_mut() {
            let values: Result<Vec<f64>, _> = fields[1..]
                .iter()
                .map(|s| parse_value(s.trim(), line_no))
                .collect();
            let values = values?;
            if let Some(times) = &times
                && values.len() != times.len()
            {
                return Err(HsuFileError::ParseError {
                    line: line_no,
                    message: format!(
                        "Row {:?} has {} values, expected {}",
                        heading,
                        values.len(),
                        times.len()
                    ),
                });
            }
            zone.rows.push(HsuRow {
                label: heading.to_string(),
                values,
            });
        }
    }

    if let Some(zone) = current.take() {
        zones.push(zone);
    }

    let times = times.ok_or(HsuFileError::MissingTimeValues)?;
    if zones.is_empty() {
        return Err(HsuFileError::NoZones);
    }

    Ok(HsuSummary { times, zones })
}
