//! Summary aggregation and reporting
//!
//! Reduces a processed billing batch to one status line per customer and
//! renders the text report and console table consumed by operators.

pub mod aggregator;
pub mod report;

pub use aggregator::aggregate;
pub use report::{print_console_table, render_text_report, write_text_report};
