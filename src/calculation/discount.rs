//! Discount resolution for a route and date.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult, TariffTable};
use crate::models::{DiscountRate, RouteDiscount, zip5_to_zip3};
use crate::tariff::{TariffData, select_effective};

use super::RateEngine;

impl<T: TariffData> RateEngine<T> {
    /// Resolves the negotiated discounts for a route on a date.
    ///
    /// The route key is the origin zip3's rate area and the destination
    /// zip3's region. A resolved rate of zero is a real discount of zero;
    /// a missing row is an error, never an implied zero.
    ///
    /// # Errors
    ///
    /// - `Lookup` on the zip3 table if either postal code's prefix is unknown
    /// - `DiscountNotFound` if no discount row for the route covers `date`
    /// - `AmbiguousRate` if more than one does
    /// - `InvalidInput` if the stored rate lies outside `[0, 1]`
    pub fn resolve_discount(
        &self,
        origin_zip5: u32,
        destination_zip5: u32,
        date: NaiveDate,
    ) -> EngineResult<RouteDiscount> {
        let origin_zip3 = zip5_to_zip3(origin_zip5);
        let destination_zip3 = zip5_to_zip3(destination_zip5);
        let origin = self.zip3_row(origin_zip3)?;
        let destination = self.zip3_row(destination_zip3)?;

        let rows = self
            .tariff
            .route_discounts(&origin.rate_area, destination.region);
        let key = format!("{} -> region {}", origin.rate_area, destination.region);
        let row = select_effective(rows, TariffTable::Discount, &key, date).map_err(|err| {
            match err {
                EngineError::Lookup { .. } | EngineError::NoRateForDate { .. } => {
                    EngineError::DiscountNotFound {
                        origin_zip3,
                        destination_zip3,
                        date,
                    }
                }
                other => other,
            }
        })?;

        let discount = RouteDiscount {
            linehaul: DiscountRate::from_fraction(row.linehaul_rate)?,
            sit: DiscountRate::from_fraction(row.sit_rate)?,
        };
        debug!(
            origin_zip3,
            destination_zip3,
            date = %date,
            linehaul = %discount.linehaul,
            sit = %discount.sit,
            "Resolved route discount"
        );
        Ok(discount)
    }
}
