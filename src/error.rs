//! Error types for the rate engine.
//!
//! Every failure carries enough context (table, key, date) to log and
//! diagnose without re-running the lookup. The engine never recovers
//! locally and never substitutes a default rate.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The reference table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffTable {
    /// Zip3 reference table.
    Zip3,
    /// Zip3-to-zip3 distance bands.
    Distance,
    /// Effective-dated service area rates.
    ServiceArea,
    /// Base linehaul rates by mileage and weight bracket.
    BaseLinehaul,
    /// Shorthaul rates by CWT-miles bracket.
    Shorthaul,
    /// Effective-dated route discounts.
    Discount,
}

impl fmt::Display for TariffTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TariffTable::Zip3 => "zip3",
            TariffTable::Distance => "distance",
            TariffTable::ServiceArea => "service_area",
            TariffTable::BaseLinehaul => "base_linehaul",
            TariffTable::Shorthaul => "shorthaul",
            TariffTable::Discount => "discount",
        };
        f.write_str(name)
    }
}

/// The main error type for the rate engine.
///
/// # Example
///
/// ```
/// use rate_engine::error::{EngineError, TariffTable};
///
/// let error = EngineError::Lookup {
///     table: TariffTable::Distance,
///     key: "100 -> 182".to_string(),
/// };
/// assert_eq!(error.to_string(), "No distance row for key 100 -> 182");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Tariff directory or file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tariff file could not be parsed or violates a table invariant.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required reference row does not exist.
    #[error("No {table} row for key {key}")]
    Lookup {
        /// The table that was searched.
        table: TariffTable,
        /// The key that had no row.
        key: String,
    },

    /// Rows exist for the key but none is effective on the date.
    #[error("No {table} rate for key {key} effective on {date}")]
    NoRateForDate {
        /// The table that was searched.
        table: TariffTable,
        /// The key whose rows were searched.
        key: String,
        /// The requested date.
        date: NaiveDate,
    },

    /// More than one row is effective on the date for the key.
    #[error("Multiple {table} rates for key {key} effective on {date}")]
    AmbiguousRate {
        /// The table that was searched.
        table: TariffTable,
        /// The key with overlapping rows.
        key: String,
        /// The requested date.
        date: NaiveDate,
    },

    /// No discount row matches the route on the date.
    ///
    /// Distinct from a discount of zero, which is a successful lookup.
    #[error("No discount for route {origin_zip3} -> {destination_zip3} on {date}")]
    DiscountNotFound {
        /// Origin zip3 of the route.
        origin_zip3: u32,
        /// Destination zip3 of the route.
        destination_zip3: u32,
        /// The requested date.
        date: NaiveDate,
    },

    /// A status transition not allowed from the current state.
    #[error("Invalid transition: cannot {action} from status {from}")]
    InvalidTransition {
        /// The current status.
        from: String,
        /// The attempted action.
        action: String,
    },

    /// A caller-supplied value was out of range.
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
