//! Application constants for snowbill
//!
//! This module contains the roster schema, cell markers, pricing
//! thresholds, and the depth tier table used throughout the application.

// =============================================================================
// Roster Schema
// =============================================================================

/// Fixed roster column names
///
/// Every column that is not one of these is treated as a candidate dated
/// service column and kept, in roster order, on the customer record.
pub mod columns {
    /// Customer display name (also the first billing address line)
    pub const BILL_TO_1: &str = "Bill to 1";

    /// Street address line
    pub const BILL_TO_2: &str = "Bill to 2";

    /// City, state and zip line
    pub const BILL_TO_3: &str = "Bill to 3";

    /// Account number, also embedded in the invoice number
    pub const ACCOUNT_NO: &str = "Account No.";

    /// Contact email (may be empty)
    pub const MAIN_EMAIL: &str = "Main Email";

    /// Customer-level fallback rate for plowing
    pub const PLOW_RATE: &str = "PlowRate";

    /// Customer-level fallback rate for sanding
    pub const SAND_RATE: &str = "SandRate";

    /// Optional shared-driveway rate
    pub const COMMON_RATE: &str = "CommonRate";

    /// Payment terms, passed through to the invoice
    pub const TERMS: &str = "Terms";

    /// All fixed columns a roster header must contain
    pub const REQUIRED: &[&str] = &[
        BILL_TO_1, BILL_TO_2, BILL_TO_3, ACCOUNT_NO, MAIN_EMAIL, PLOW_RATE, SAND_RATE, COMMON_RATE,
        TERMS,
    ];
}

/// Service date format used in column names and CLI arguments
pub const SERVICE_DATE_FORMAT: &str = "%m-%d-%Y";

/// Grammar for a dated service column name, used for header diagnostics
pub const SERVICE_COLUMN_PATTERN: &str = r"^(\d{2}-\d{2}-\d{4})_(Plow|Sand)(?:_(.+))?$";

/// Service tags as they appear in column names
pub const SERVICE_TAG_PLOW: &str = "Plow";
pub const SERVICE_TAG_SAND: &str = "Sand";

// =============================================================================
// Cell Markers and Pricing Rules
// =============================================================================

/// Cell values meaning the customer was not serviced on that date
pub const NOT_SERVICED_MARKERS: &[&str] = &["", "-"];

/// Cell value (case-insensitive) meaning the customer already paid
pub const PAID_MARKER: &str = "p";

/// Explicit per-cell rates below this are considered data-entry noise and
/// trigger the customer-level fallback rate instead
pub const MIN_EXPLICIT_RATE: f64 = 10.0;

/// Depth tiers as (max depth in inches, rate multiplier) pairs
///
/// A depth selects the first tier whose max is not exceeded. Depths above
/// the last tier have no defined multiplier; callers fall back to the
/// unadjusted base rate.
pub const DEPTH_TIERS: &[(u32, f64)] = &[
    (6, 1.0),
    (9, 1.5),
    (12, 2.25),
    (18, 3.0),
    (24, 3.75),
    (32, 4.5),
];

/// Largest depth the tier table covers
pub const MAX_TIERED_DEPTH: u32 = 32;

// =============================================================================
// Default Paths
// =============================================================================

/// Default provider identity file
pub const DEFAULT_PROVIDER_FILE: &str = "provider.json";

/// Default output directory for invoice documents and reports
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
