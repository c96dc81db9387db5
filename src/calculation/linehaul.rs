//! Linehaul and shorthaul pricing.
//!
//! A shipment's transportation charge is priced on one of two curves,
//! selected purely by mileage in [`HaulType::for_mileage`]:
//!
//! - **Long-haul**: the base linehaul table, indexed by mileage bracket and
//!   weight bracket.
//! - **Short-haul**: the shorthaul table, indexed by CWT-miles.
//!
//! Both are then topped up with the origin and destination service areas'
//! linehaul factors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult, TariffTable};
use crate::models::{Cents, Cwt, Pounds};
use crate::tariff::TariffData;

use super::RateEngine;

/// Shipments shorter than this many miles are priced on the shorthaul curve.
pub const SHORTHAUL_THRESHOLD_MILES: u32 = 800;

/// Which pricing curve a shipment's transportation charge uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HaulType {
    /// Base linehaul table.
    Longhaul,
    /// Shorthaul table.
    Shorthaul,
}

impl HaulType {
    /// Selects the pricing curve for a mileage.
    ///
    /// # Example
    ///
    /// ```
    /// use rate_engine::calculation::HaulType;
    ///
    /// assert_eq!(HaulType::for_mileage(799), HaulType::Shorthaul);
    /// assert_eq!(HaulType::for_mileage(800), HaulType::Longhaul);
    /// ```
    pub fn for_mileage(mileage: u32) -> Self {
        if mileage < SHORTHAUL_THRESHOLD_MILES {
            HaulType::Shorthaul
        } else {
            HaulType::Longhaul
        }
    }
}

/// Breakdown of a linehaul charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinehaulCost {
    /// Resolved mileage.
    pub mileage: u32,
    /// Billed weight.
    pub cwt: Cwt,
    /// Curve the transportation charge was priced on.
    pub haul_type: HaulType,
    /// Base linehaul or shorthaul charge.
    pub transportation: Cents,
    /// Origin service area's linehaul factor charge.
    pub origin_linehaul_factor: Cents,
    /// Destination service area's linehaul factor charge.
    pub destination_linehaul_factor: Cents,
    /// Sum of the above.
    pub total: Cents,
}

impl<T: TariffData> RateEngine<T> {
    /// Computes the base linehaul charge for a mileage and weight.
    ///
    /// # Errors
    ///
    /// Returns `Lookup` on the base linehaul table if no bracket covers both
    /// the mileage and the weight.
    pub fn base_linehaul(&self, mileage: u32, cwt: Cwt) -> EngineResult<Cents> {
        let rate = self
            .tariff
            .base_linehaul_rates()
            .into_iter()
            .find(|rate| rate.covers(mileage, cwt.0))
            .ok_or_else(|| EngineError::Lookup {
                table: TariffTable::BaseLinehaul,
                key: format!("{} miles, {}", mileage, cwt),
            })?;

        let charge = rate.rate_cents * cwt;
        debug!(mileage, cwt = cwt.0, rate = rate.rate_cents.0, charge = charge.0, "Base linehaul");
        Ok(charge)
    }

    /// Computes the linehaul factor charge for a zip3's service area.
    ///
    /// The charge is the service area's linehaul factor (cents per CWT)
    /// times the weight, from the row effective on `date`. Integer
    /// multiplication only, so there is no rounding.
    ///
    /// # Errors
    ///
    /// - `Lookup` if the zip3 or its service area has no rows
    /// - `NoRateForDate` if no service area row covers `date`
    pub fn linehaul_factors(&self, cwt: Cwt, zip3: u32, date: NaiveDate) -> EngineResult<Cents> {
        let area = self.service_area_for_zip3(zip3, date)?;
        Ok(area.linehaul_factor * cwt)
    }

    /// Computes the shorthaul charge for a mileage and weight.
    ///
    /// The bracket is chosen by CWT-miles (`mileage * cwt`); its rate is
    /// charged per CWT.
    ///
    /// # Errors
    ///
    /// Returns `Lookup` on the shorthaul table if no bracket covers the
    /// CWT-miles figure.
    pub fn shorthaul_charge(&self, mileage: u32, cwt: Cwt) -> EngineResult<Cents> {
        let cwt_miles = i64::from(mileage) * cwt.0;
        let rate = self
            .tariff
            .shorthaul_rates()
            .into_iter()
            .find(|rate| rate.covers(cwt_miles))
            .ok_or_else(|| EngineError::Lookup {
                table: TariffTable::Shorthaul,
                key: format!("{} cwt-miles", cwt_miles),
            })?;

        let charge = rate.rate_cents * cwt;
        debug!(mileage, cwt = cwt.0, cwt_miles, charge = charge.0, "Shorthaul");
        Ok(charge)
    }

    /// Prices the transportation charge on the curve the mileage selects.
    pub fn transportation_charge(&self, mileage: u32, cwt: Cwt) -> EngineResult<(HaulType, Cents)> {
        let haul_type = HaulType::for_mileage(mileage);
        let charge = match haul_type {
            HaulType::Longhaul => self.base_linehaul(mileage, cwt)?,
            HaulType::Shorthaul => self.shorthaul_charge(mileage, cwt)?,
        };
        Ok((haul_type, charge))
    }

    /// Computes the itemized linehaul charge between two zip3s.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `weight` is negative
    /// - `Lookup` if the distance band, either zip3, either service area, or
    ///   a rate bracket is missing
    /// - `NoRateForDate` if either service area has no row covering `date`
    pub fn linehaul_cost(
        &self,
        weight: Pounds,
        origin_zip3: u32,
        destination_zip3: u32,
        date: NaiveDate,
    ) -> EngineResult<LinehaulCost> {
        if weight.0 < 0 {
            return Err(EngineError::InvalidInput {
                field: "weight".to_string(),
                message: format!("{} lbs is negative", weight.0),
            });
        }

        let mileage = self.mileage_between_zip3(origin_zip3, destination_zip3)?;
        let cwt = weight.to_cwt();
        let (haul_type, transportation) = self.transportation_charge(mileage, cwt)?;
        let origin_linehaul_factor = self.linehaul_factors(cwt, origin_zip3, date)?;
        let destination_linehaul_factor = self.linehaul_factors(cwt, destination_zip3, date)?;

        Ok(LinehaulCost {
            mileage,
            cwt,
            haul_type,
            transportation,
            origin_linehaul_factor,
            destination_linehaul_factor,
            total: transportation + origin_linehaul_factor + destination_linehaul_factor,
        })
    }

    /// Computes the total linehaul charge between two zip3s.
    ///
    /// See [`RateEngine::linehaul_cost`] for the breakdown and errors.
    pub fn linehaul_charge_total(
        &self,
        weight: Pounds,
        origin_zip3: u32,
        destination_zip3: u32,
        date: NaiveDate,
    ) -> EngineResult<Cents> {
        self.linehaul_cost(weight, origin_zip3, destination_zip3, date)
            .map(|cost| cost.total)
    }

    /// Computes the origin or destination service charge for a zip3.
    ///
    /// The service area's service charge (cents per CWT) times the weight,
    /// from the row effective on `date`.
    pub fn service_charge(&self, cwt: Cwt, zip3: u32, date: NaiveDate) -> EngineResult<Cents> {
        let area = self.service_area_for_zip3(zip3, date)?;
        Ok(area.service_charge_cents * cwt)
    }
}
