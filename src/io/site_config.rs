//! Reader for risk screening configuration files.
//!
//! The designated-site list and the infrastructure invert elevations are
//! data, not code: adding a site or a pipeline segment is an edit to this
//! file. Percentile overrides can be tuned in the metadata comments.
//!
//! # File Format
//!
//! ```text
//! # Risk screening configuration, East St. Louis
//! # base_percentile: 25
//! # roadway_percentile: 5
//! # designated_percentile: 2.5
//! site Falling Springs Pump Station
//! site Route 3 Underpass
//! invert 384.50 Missouri Avenue Infrastructure - Ranney
//! invert 385.25 Missouri Avenue Infrastructure - Pipeline North
//! ```
//!
//! Lines starting with `#` are comments. `site` lines name designated
//! sites (the rest of the line, spaces allowed); `invert` lines carry an
//! elevation [ft] followed by the polygon name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::risk::{InfrastructureTable, ThresholdPolicy};

/// Error type for site configuration parsing.
#[derive(Debug, Error)]
pub enum SiteConfigError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// Parsed risk screening configuration.
#[derive(Clone, Debug, Default)]
pub struct RiskSiteConfig {
    /// Base percentile override, if present
    pub base_percentile: Option<f64>,
    /// Venice roadway percentile override, if present
    pub roadway_percentile: Option<f64>,
    /// Designated-site percentile override, if present
    pub designated_percentile: Option<f64>,
    /// Designated site names
    pub designated_sites: Vec<String>,
    /// (name, invert elevation [ft]) pairs
    pub invert_elevations: Vec<(String, f64)>,
}

impl RiskSiteConfig {
    /// Build a threshold policy from this configuration, starting from the
    /// defaults and applying any overrides.
    pub fn threshold_policy(&self) -> ThresholdPolicy {
        let mut policy = ThresholdPolicy::default();
        if let Some(p) = self.base_percentile {
            policy.base_percentile = p;
        }
        if let Some(p) = self.roadway_percentile {
            policy.venice_roadway_percentile = p;
        }
        if let Some(p) = self.designated_percentile {
            policy.designated_site_percentile = p;
        }
        policy.designated_sites = self.designated_sites.clone();
        policy
    }

    /// Build an infrastructure table from this configuration.
    ///
    /// Falls back to the built-in as-built table when the file carries no
    /// `invert` lines.
    pub fn infrastructure_table(&self) -> InfrastructureTable {
        if self.invert_elevations.is_empty() {
            InfrastructureTable::default()
        } else {
            InfrastructureTable::from_entries(self.invert_elevations.clone())
        }
    }
}

fn parse_percentile(s: &str, line: usize) -> Result<f64, SiteConfigError> {
    let value: f64 = s.trim().parse().map_err(|_| SiteConfigError::ParseError {
        line,
        message: format!("Invalid percentile {:?}", s.trim()),
    })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(SiteConfigError::ParseError {
            line,
            message: format!("Percentile {} outside [0, 100]", value),
        });
    }
    Ok(value)
}

/// Read a risk screening configuration file.
///
/// # Errors
///
/// Returns a [`SiteConfigError`] on I/O failure or malformed lines, with
/// the line number.
pub fn read_site_config<P: AsRef<Path>>(path: P) -> Result<RiskSiteConfig, SiteConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut config = RiskSiteConfig::default();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_no = line_num + 1;
        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if let Some(v) = comment.strip_prefix("base_percentile:") {
                config.base_percentile = Some(parse_percentile(v, line_no)?);
            } else if let Some(v) = comment.strip_prefix("roadway_percentile:") {
                config.roadway_percentile = Some(parse_percentile(v, line_no)?);
            } else if let Some(v) = comment.strip_prefix("designated_percentile:") {
                config.designated_percentile = Some(parse_percentile(v, line_no)?);
            }
            continue;
        }

        if let Some(name) = line.strip_prefix("site ") {
            let name = name.trim();
            if name.is_empty() {
                return Err(SiteConfigError::ParseError {
                    line: line_no,
                    message: "site line has no name".into(),
                });
            }
            config.designated_sites.push(name.to_string());
        } else if let Some(rest) = line.strip_prefix("invert ") {
            let rest = rest.trim();
            let (elev_str, name) =
                rest.split_once(' ')
                    .ok_or_else(|| SiteConfigError::ParseError {
                        line: line_no,
                        message: "Expected: invert <elevation> <name>".into(),
                    })?;
            let elevation: f64 =
                elev_str
                    .parse()
                    .map_err(|_| SiteConfigError::ParseError {
                        line: line_no,
                        message: format!("Invalid invert elevation {:?}", elev_str),
                    })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(SiteConfigError::ParseError {
                    line: line_no,
                    message: "invert line has no name".into(),
                });
            }
            config.invert_elevations.push((name.to_string(), elevation));
        } else {
            return Err(SiteConfigError::ParseError {
                line: line_no,
                message: format!("Unrecognized directive: {:?}", line),
            });
        }
    }

    Ok(config)
}
