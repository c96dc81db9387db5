//! Discount rates and their application to gross charges.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Cents;
use crate::error::{EngineError, EngineResult};

/// A negotiated discount expressed as a fraction in `[0, 1]`.
///
/// Application rounds to whole cents half-up: `gross * (1 - rate)` with
/// any exact half cent rounded away from zero. This single rule applies to
/// every customer-visible estimate.
///
/// # Example
///
/// ```
/// use rate_engine::models::{Cents, DiscountRate};
///
/// let five_percent = DiscountRate::from_basis_points(500).unwrap();
/// assert_eq!(five_percent.apply(Cents(10000)), Cents(9500));
/// assert_eq!(five_percent.apply(Cents(10001)), Cents(9501));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// A zero discount. A valid rate, not the absence of one.
    pub const ZERO: DiscountRate = DiscountRate(Decimal::ZERO);

    /// Creates a rate from a fraction, rejecting values outside `[0, 1]`.
    pub fn from_fraction(rate: Decimal) -> EngineResult<Self> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(EngineError::InvalidInput {
                field: "discount_rate".to_string(),
                message: format!("{} is outside [0, 1]", rate),
            });
        }
        Ok(Self(rate))
    }

    /// Creates a rate from basis points (500 = 5%).
    pub fn from_basis_points(bps: u32) -> EngineResult<Self> {
        Self::from_fraction(Decimal::new(i64::from(bps), 4))
    }

    /// Returns the rate as a fraction.
    pub fn fraction(&self) -> Decimal {
        self.0
    }

    /// Applies the discount to a gross charge.
    pub fn apply(&self, gross: Cents) -> Cents {
        let net = (Decimal::from(gross.0) * (Decimal::ONE - self.0))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // Scale is zero after rounding and |net| <= |gross|, so the mantissa
        // is the value and fits in i64.
        Cents(net.mantissa() as i64)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

/// The discounts resolved for a route and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDiscount {
    /// Applies to linehaul and service charges.
    pub linehaul: DiscountRate,
    /// Applies to storage-in-transit charges.
    pub sit: DiscountRate,
}
