//! Roster CSV parsing
//!
//! The roster has a header row with nine fixed columns plus zero or more
//! dated service columns. Fixed fields land in typed record fields; every
//! other column is kept verbatim, in roster order, as a candidate service
//! cell for the billing engine to decode per target date.

use crate::app::models::CustomerRecord;
use crate::constants::{columns, SERVICE_COLUMN_PATTERN};
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Validation status of one non-fixed roster column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStatus {
    /// Matches the dated service column grammar
    ServiceColumn,
    /// A plow column whose depth token will abort billing
    MalformedPlow,
    /// Not recognized as a service column; billing ignores it
    Unrecognized,
}

/// Per-column diagnostic produced by header validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDiagnostic {
    pub column: String,
    pub status: ColumnStatus,
}

/// Read just the header row of a roster CSV
pub fn read_headers(path: &Path) -> Result<Vec<String>> {
    let file_name = path.display().to_string();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::csv_parsing(&file_name, "could not open roster", Some(e)))?;

    Ok(reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "could not read header row", Some(e)))?
        .iter()
        .map(str::to_string)
        .collect())
}

/// Load the roster CSV into a materialized batch of customer records
pub fn load_roster(path: &Path) -> Result<Vec<CustomerRecord>> {
    let file_name = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::csv_parsing(&file_name, "could not open roster", Some(e))
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "could not read header row", Some(e)))?
        .iter()
        .map(str::to_string)
        .collect();

    ensure_required_columns(&file_name, &headers)?;

    let index: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let fixed: Vec<usize> = columns::REQUIRED
        .iter()
        .map(|name| index[*name])
        .collect();

    let mut records = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            Error::csv_parsing(
                &file_name,
                format!("bad record at data row {}", row_number + 1),
                Some(e),
            )
        })?;

        let field = |name: &str| row.get(index[name]).unwrap_or_default().to_string();
        let optional = |name: &str| {
            let value = field(name);
            if value.trim().is_empty() {
                None
            } else {
                Some(value)
            }
        };

        let services = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !fixed.contains(i))
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or_default().to_string()))
            .collect();

        records.push(CustomerRecord {
            name: field(columns::BILL_TO_1),
            address: field(columns::BILL_TO_2),
            city_state_zip: field(columns::BILL_TO_3),
            account: field(columns::ACCOUNT_NO),
            email: field(columns::MAIN_EMAIL),
            terms: field(columns::TERMS),
            plow_rate: optional(columns::PLOW_RATE),
            sand_rate: optional(columns::SAND_RATE),
            common_rate: optional(columns::COMMON_RATE),
            services,
        });
    }

    info!("Loaded {} customers from {}", records.len(), file_name);
    Ok(records)
}

/// Validate the non-fixed columns of a roster header against the service
/// column grammar
///
/// Used by the `validate` subcommand to surface malformed plow columns
/// before a billing run trips over them.
pub fn validate_headers(headers: &[String]) -> Vec<ColumnDiagnostic> {
    // The pattern is a compile-time constant; an invalid pattern is a bug.
    let grammar = Regex::new(SERVICE_COLUMN_PATTERN).expect("invalid service column pattern");

    headers
        .iter()
        .filter(|name| !columns::REQUIRED.contains(&name.as_str()))
        .map(|name| {
            let status = match grammar.captures(name) {
                Some(caps) => {
                    let tag = &caps[2];
                    let rest = caps.get(3).map(|m| m.as_str());
                    if tag == crate::constants::SERVICE_TAG_PLOW {
                        let depth_ok = rest
                            .and_then(|r| r.split('_').next())
                            .map(|token| token.parse::<u32>().is_ok())
                            .unwrap_or(false);
                        if depth_ok {
                            ColumnStatus::ServiceColumn
                        } else {
                            ColumnStatus::MalformedPlow
                        }
                    } else {
                        ColumnStatus::ServiceColumn
                    }
                }
                None => {
                    if name.contains("_Plow") {
                        // Dated plow column that fails the grammar entirely,
                        // e.g. a missing depth segment.
                        ColumnStatus::MalformedPlow
                    } else {
                        ColumnStatus::Unrecognized
                    }
                }
            };

            if status == ColumnStatus::MalformedPlow {
                warn!("Malformed plow column in roster header: '{}'", name);
            } else {
                debug!("Header column '{}': {:?}", name, status);
            }

            ColumnDiagnostic {
                column: name.clone(),
                status,
            }
        })
        .collect()
}

fn ensure_required_columns(file_name: &str, headers: &[String]) -> Result<()> {
    let missing: Vec<&str> = columns::REQUIRED
        .iter()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Roster '{}' is missing required columns: {}",
            file_name,
            missing.join(", ")
        )))
    }
}
