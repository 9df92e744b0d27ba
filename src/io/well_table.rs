//! Reader for well usage tables.
//!
//! Parses the operator-reported table of well locations, discharge rates,
//! and service status that drives the East St. Louis activation strategy.
//!
//! # File Format
//!
//! ```text
//! # Well usage table, East St. Louis regional wells
//! # analysis_date: 2019-10-01
//! # columns: name x(m) y(m) discharge(gpm) in_service(0/1) [start end]
//! RW-1 228450.0 320880.0 1500.0 1 2019-06-01 2020-01-01
//! RW-2 228910.0 321030.0 800.0 0
//! ```
//!
//! Lines starting with `#` are comments. Well names must not contain
//! whitespace. The optional `start`/`end` columns bound the service window
//! (start inclusive, end exclusive) against the analysis date.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::aquifer::{Well, WellField, WellUsage, WellUsageTable};

/// Error type for well table parsing.
#[derive(Debug, Error)]
pub enum WellTableError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// No data records in the file
    #[error("Well table contains no wells")]
    EmptyFile,

    /// The same well name appears twice
    #[error("Duplicate well name at line {line}: {name}")]
    DuplicateName { line: usize, name: String },
}

/// Parsed contents of a well table file.
#[derive(Clone, Debug)]
pub struct WellTableFile {
    /// Well locations, in file order
    pub wells: WellField,
    /// Usage records keyed by well name
    pub usage: WellUsageTable,
    /// Analysis date from the file metadata, if present
    pub analysis_date: Option<NaiveDate>,
}

fn parse_date(s: &str, line: usize) -> Result<NaiveDate, WellTableError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| WellTableError::ParseError {
        line,
        message: format!("Invalid date {:?}, expected YYYY-MM-DD", s),
    })
}

fn parse_f64(s: &str, what: &str, line: usize) -> Result<f64, WellTableError> {
    s.parse().map_err(|_| WellTableError::ParseError {
        line,
        message: format!("Invalid {} value {:?}", what, s),
    })
}

/// Read a well usage table file.
///
/// # Errors
///
/// Returns a [`WellTableError`] on I/O failure, malformed lines (with the
/// line number), duplicate well names, or an empty table.
pub fn read_well_table<P: AsRef<Path>>(path: P) -> Result<WellTableFile, WellTableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut analysis_date = None;
    let mut wells = WellField::new();
    let mut usage = WellUsageTable::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_no = line_num + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // Parse metadata comments
        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if let Some(date_str) = comment.strip_prefix("analysis_date:") {
                analysis_date = Some(parse_date(date_str.trim(), line_no)?);
            }
            continue;
        }

        // Data line: name x y discharge in_service [start end]
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 5 && parts.len() != 7 {
            return Err(WellTableError::ParseError {
                line: line_no,
                message: "Expected: name x y discharge in_service [start end]".into(),
            });
        }

        let name = parts[0];
        if wells.find(name).is_some() {
            return Err(WellTableError::DuplicateName {
                line: line_no,
                name: name.to_string(),
            });
        }

        let x = parse_f64(parts[1], "x", line_no)?;
        let y = parse_f64(parts[2], "y", line_no)?;
        let discharge = parse_f64(parts[3], "discharge", line_no)?;
        let in_service = match parts[4] {
            "0" => false,
            "1" => true,
            other => {
                return Err(WellTableError::ParseError {
                    line: line_no,
                    message: format!("Invalid in_service flag {:?}, expected 0 or 1", other),
                });
            }
        };

        let mut record = WellUsage::new(name, discharge, in_service);
        if parts.len() == 7 {
            let start = parse_date(parts[5], line_no)?;
            let end = parse_date(parts[6], line_no)?;
            if end <= start {
                return Err(WellTableError::ParseError {
                    line: line_no,
                    message: format!("Service window end {} is not after start {}", end, start),
                });
            }
            record = record.with_window(start, end);
        }

        wells.push(Well::new(name, x, y));
        usage.push(record);
    }

    if wells.is_empty() {
        return Err(WellTableError::EmptyFile);
    }

    Ok(WellTableFile {
        wells,
        usage,
        analysis_date,
    })
}
