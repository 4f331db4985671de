//! Roster loading and schema validation
//!
//! Reads the wide-format customer roster CSV into an in-memory, re-iterable
//! sequence of [`CustomerRecord`]s. Both invoice generation and summary
//! reporting traverse the same materialized batch, so the roster is read
//! exactly once.

pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::{load_roster, read_headers, validate_headers, ColumnDiagnostic, ColumnStatus};
