//! Snowbill Library
//!
//! A Rust library for turning a wide-format snow-service roster into
//! customer invoices and one-line billing summaries.
//!
//! This library provides tools for:
//! - Parsing the customer roster CSV into immutable customer records
//! - Decoding dated service columns (`MM-DD-YYYY_Plow_<depth>[_<note>]`, `MM-DD-YYYY_Sand`)
//! - Resolving per-service rates with fallback precedence and tiered depth pricing
//! - Splitting shared-driveway plow charges into common and private line items
//! - Writing invoice documents and per-customer summary reports
//! - Comprehensive error handling with a clear fatal/recoverable split

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod billing;
        pub mod document;
        pub mod roster;
        pub mod summary;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CustomerRecord, InvoiceRecord, LineItem, ServiceKey, ServiceKind};
pub use config::{BillingConfig, FallbackPolicy};

/// Result type alias for snowbill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster billing operations
///
/// Fatal variants (`DepthParse`, `MissingField`, and `MissingFallbackRate`
/// under the strict policy) abort the whole batch; every other billing
/// irregularity is recoverable and is logged rather than returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Date parsing error
    #[error("Date parsing error for '{value}': expected MM-DD-YYYY")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A Plow column carries a depth token that is not an integer.
    /// A priced plow event without a depth cannot be tiered, so the
    /// whole run aborts rather than emitting a partial batch.
    #[error("Could not parse snow depth from '{column}' for {customer}")]
    DepthParse { column: String, customer: String },

    /// Required fallback rate missing or unparsable (fatal only under
    /// `FallbackPolicy::Fatal`)
    #[error("No usable fallback rate in '{column}' for {customer} on {date}")]
    MissingFallbackRate {
        customer: String,
        date: String,
        column: String,
    },

    /// A roster row is missing a field the summary cannot do without
    #[error("Missing required field '{field}' in roster row {row}")]
    MissingField { field: String, row: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create a date parsing error
    pub fn date_parse(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParse {
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a snow-depth parsing error
    pub fn depth_parse(column: impl Into<String>, customer: impl Into<String>) -> Self {
        Self::DepthParse {
            column: column.into(),
            customer: customer.into(),
        }
    }

    /// Create a missing fallback rate error
    pub fn missing_fallback_rate(
        customer: impl Into<String>,
        date: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self::MissingFallbackRate {
            customer: customer.into(),
            date: date.into(),
            column: column.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            row,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
