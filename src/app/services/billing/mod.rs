//! Billing engine for roster rows
//!
//! This module holds the only real decision logic in the repository: it
//! turns one customer record plus a list of target dates into an ordered
//! list of invoice line items and a total.
//!
//! # Architecture
//!
//! The module is organized into small, separately testable components:
//! - [`service_key`] - Decodes a dated column name into a typed service key
//! - [`depth_tier`] - Maps (snow depth, base rate) to a tier-adjusted rate
//! - [`rate_resolver`] - Resolves the effective rate for one service cell
//! - [`common_drive`] - Splits a plow charge into common and private items
//! - [`processor`] - Per-row orchestration and batch driving
//! - [`stats`] - Batch statistics and the combined batch result
//!
//! # Error philosophy
//!
//! A plow column whose depth token does not parse is a data-integrity
//! problem in the roster schema and aborts the whole run. Everything else
//! that can go wrong with a single cell (low explicit rate, missing
//! fallback rate, missing common rate) is resolved or skipped per cell,
//! logged with customer, date, and column context, and never disturbs the
//! processing of other services or other customers.

pub mod common_drive;
pub mod depth_tier;
pub mod processor;
pub mod rate_resolver;
pub mod service_key;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::RowProcessor;
pub use rate_resolver::CellOutcome;
pub use service_key::decode_service_column;
pub use stats::{BatchResult, BillingStats};
