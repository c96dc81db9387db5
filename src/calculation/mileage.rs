//! Mileage resolution from zip3 distance bands.

use tracing::debug;

use crate::error::{EngineError, EngineResult, TariffTable};
use crate::models::zip5_to_zip3;
use crate::tariff::TariffData;

use super::RateEngine;

impl<T: TariffData> RateEngine<T> {
    /// Determines the mileage between two 5-digit postal codes.
    ///
    /// Each code is truncated to its zip3 and the ordered pair is looked up
    /// in the distance bands. Direction matters: a band for `(a, b)` says
    /// nothing about `(b, a)`.
    ///
    /// # Errors
    ///
    /// Returns `Lookup` on the distance table if the pair has no band.
    pub fn determine_mileage(&self, origin_zip5: u32, destination_zip5: u32) -> EngineResult<u32> {
        self.mileage_between_zip3(zip5_to_zip3(origin_zip5), zip5_to_zip3(destination_zip5))
    }

    /// Looks up the mileage for an ordered zip3 pair.
    pub fn mileage_between_zip3(
        &self,
        origin_zip3: u32,
        destination_zip3: u32,
    ) -> EngineResult<u32> {
        let miles = self
            .tariff
            .distance(origin_zip3, destination_zip3)
            .ok_or_else(|| EngineError::Lookup {
                table: TariffTable::Distance,
                key: format!("{} -> {}", origin_zip3, destination_zip3),
            })?;
        debug!(origin_zip3, destination_zip3, miles, "Resolved mileage");
        Ok(miles)
    }
}
