//! Unit types for weights, money and postal codes.
//!
//! All money is carried as integer cents and all weights as integer pounds
//! or hundredweight. Nothing in the engine touches floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A weight in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub i64);

impl Pounds {
    /// Converts to hundredweight.
    ///
    /// The conversion truncates: 2099 lbs is 20 CWT.
    ///
    /// # Example
    ///
    /// ```
    /// use rate_engine::models::{Cwt, Pounds};
    ///
    /// assert_eq!(Pounds(2000).to_cwt(), Cwt(20));
    /// assert_eq!(Pounds(2099).to_cwt(), Cwt(20));
    /// ```
    pub fn to_cwt(self) -> Cwt {
        Cwt(self.0 / 100)
    }
}

/// A weight in hundredweight (100 lbs), the billing unit for tariff rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cwt(pub i64);

impl fmt::Display for Cwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cwt", self.0)
    }
}

/// A monetary amount in cents.
///
/// # Example
///
/// ```
/// use rate_engine::models::Cents;
///
/// let total: Cents = [Cents(1250), Cents(50)].into_iter().sum();
/// assert_eq!(total, Cents(1300));
/// assert_eq!(total.to_string(), "$13.00");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Cents = Cents(0);

    /// Multiplies a per-unit rate by a unit count.
    pub fn multiply(self, units: i64) -> Cents {
        Cents(self.0 * units)
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Mul<Cwt> for Cents {
    type Output = Cents;

    fn mul(self, rhs: Cwt) -> Cents {
        self.multiply(rhs.0)
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Truncates a 5-digit postal code to its 3-digit prefix.
///
/// # Example
///
/// ```
/// use rate_engine::models::zip5_to_zip3;
///
/// assert_eq!(zip5_to_zip3(10024), 100);
/// assert_eq!(zip5_to_zip3(2134), 21);
/// ```
pub fn zip5_to_zip3(zip5: u32) -> u32 {
    zip5 / 100
}
