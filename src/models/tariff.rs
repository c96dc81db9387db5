//! Reference-data rows read by the rate engine.
//!
//! These rows are externally seeded and never mutated by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Cents, EffectiveRange};

/// Maps a 3-digit postal prefix to its basepoint and rate geography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zip3 {
    /// The 3-digit postal prefix.
    pub zip3: u32,
    /// City used as the basepoint for this prefix.
    pub basepoint_city: String,
    /// Two-letter state code.
    pub state: String,
    /// Service area whose rates apply to this prefix.
    pub service_area: u32,
    /// Rate area, the origin half of a discount route.
    pub rate_area: String,
    /// Region, the destination half of a discount route.
    pub region: u32,
}

/// Directional mileage between two zip3 prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipDistance {
    /// Origin prefix.
    pub origin_zip3: u32,
    /// Destination prefix.
    pub destination_zip3: u32,
    /// Distance in miles.
    pub miles: u32,
}

/// Effective-dated rates for one service area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAreaRate {
    /// Service area code.
    pub service_area: u32,
    /// Display name (e.g. "Gulfport, MS").
    pub name: String,
    /// Linehaul factor in cents per CWT.
    pub linehaul_factor: Cents,
    /// Origin/destination service charge in cents per CWT.
    pub service_charge_cents: Cents,
    /// First-day SIT rate in cents per CWT.
    pub sit_first_day_rate_cents: Cents,
    /// Each additional SIT day in cents per CWT.
    pub sit_additional_day_rate_cents: Cents,
    /// Pickup/delivery to and from origin storage in cents per CWT.
    pub sit_pickup_delivery_rate_cents: Cents,
    /// Dates the row applies.
    #[serde(flatten)]
    pub effective: EffectiveRange,
}

/// Base linehaul rate for a mileage bracket and a weight bracket.
///
/// Brackets are half-open: `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseLinehaulRate {
    /// Lowest mileage covered.
    pub miles_lower: u32,
    /// First mileage not covered.
    pub miles_upper: u32,
    /// Lowest weight covered.
    pub cwt_lower: i64,
    /// First weight not covered.
    pub cwt_upper: i64,
    /// Rate in cents per CWT.
    pub rate_cents: Cents,
}

impl BaseLinehaulRate {
    /// Returns true if the row covers the mileage and weight.
    pub fn covers(&self, miles: u32, cwt: i64) -> bool {
        (self.miles_lower..self.miles_upper).contains(&miles)
            && (self.cwt_lower..self.cwt_upper).contains(&cwt)
    }
}

/// Shorthaul rate for a bracket of CWT-miles (`cwt * miles`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShorthaulRate {
    /// Lowest CWT-miles covered.
    pub cwt_miles_lower: i64,
    /// First CWT-miles not covered.
    pub cwt_miles_upper: i64,
    /// Rate in cents per CWT.
    pub rate_cents: Cents,
}

impl ShorthaulRate {
    /// Returns true if the row covers the CWT-miles figure.
    pub fn covers(&self, cwt_miles: i64) -> bool {
        (self.cwt_miles_lower..self.cwt_miles_upper).contains(&cwt_miles)
    }
}

/// Negotiated discount for a route, effective over a date range.
///
/// Rates are fractions (`0.05` is five percent off).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDiscountRate {
    /// Rate area of the origin zip3.
    pub origin_rate_area: String,
    /// Region of the destination zip3.
    pub destination_region: u32,
    /// Discount off linehaul and service charges.
    pub linehaul_rate: Decimal,
    /// Discount off storage-in-transit charges.
    pub sit_rate: Decimal,
    /// Dates the row applies.
    #[serde(flatten)]
    pub effective: EffectiveRange,
}
