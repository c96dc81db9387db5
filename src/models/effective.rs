//! Effective date ranges for time-versioned tariff rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open date range `[lower, upper)`.
///
/// # Example
///
/// ```
/// use rate_engine::models::EffectiveRange;
/// use chrono::NaiveDate;
///
/// let range = EffectiveRange::new(
///     NaiveDate::from_ymd_opt(2017, 5, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2018, 5, 15).unwrap(),
/// );
/// assert!(range.contains(NaiveDate::from_ymd_opt(2017, 5, 15).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2018, 5, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveRange {
    /// First day the row applies (inclusive).
    #[serde(rename = "effective_date_lower")]
    pub lower: NaiveDate,
    /// First day the row no longer applies (exclusive).
    #[serde(rename = "effective_date_upper")]
    pub upper: NaiveDate,
}

impl EffectiveRange {
    /// Creates a new range.
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> Self {
        Self { lower, upper }
    }

    /// Returns true if `date` falls within `[lower, upper)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower <= date && date < self.upper
    }

    /// Returns true if the two ranges share at least one day.
    pub fn overlaps(&self, other: &EffectiveRange) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }

    /// Returns true if the range contains no days.
    pub fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }
}
