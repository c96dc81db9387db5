//! Calculation logic for the rate engine.
//!
//! [`RateEngine`] is the single entry point. It is constructed with a
//! [`TariffData`] accessor and exposes mileage resolution, linehaul and
//! shorthaul pricing, storage-in-transit pricing, discount resolution and
//! PPM estimate composition as methods, split across this module's files.
//!
//! Every charge is a gross, pre-discount amount unless the method says
//! otherwise; discounts are resolved and applied as a separate step.

mod discount;
mod estimate;
mod linehaul;
mod mileage;
mod sit;

#[cfg(test)]
pub(crate) mod test_support;

pub use estimate::{PpmEstimate, PpmEstimateRequest, SitEstimate};
pub use linehaul::{HaulType, LinehaulCost, SHORTHAUL_THRESHOLD_MILES};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult, TariffTable};
use crate::models::{ServiceAreaRate, Zip3};
use crate::tariff::{TariffData, select_effective};

/// Computes move charges from tariff tables.
///
/// The engine holds no state besides its accessor and caches nothing:
/// identical calls are recomputed from the accessor's current contents.
///
/// # Example
///
/// ```no_run
/// use rate_engine::calculation::RateEngine;
/// use rate_engine::config::TariffLoader;
/// use rate_engine::models::Pounds;
/// use chrono::NaiveDate;
///
/// let engine = RateEngine::new(TariffLoader::load("./config/tariff400ng")?.into_tariff());
/// let date = NaiveDate::from_ymd_opt(2018, 1, 15).unwrap();
///
/// let linehaul = engine.linehaul_charge_total(Pounds(2000), 395, 336, date)?;
/// let discount = engine.resolve_discount(39501, 33601, date)?;
/// println!("Linehaul estimate: {}", discount.linehaul.apply(linehaul));
/// # Ok::<(), rate_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RateEngine<T> {
    tariff: T,
}

impl<T: TariffData> RateEngine<T> {
    /// Creates an engine reading from `tariff`.
    pub fn new(tariff: T) -> Self {
        Self { tariff }
    }

    /// Returns the accessor the engine reads from.
    pub fn tariff(&self) -> &T {
        &self.tariff
    }

    /// Resolves the zip3 reference row.
    pub(crate) fn zip3_row(&self, zip3: u32) -> EngineResult<Zip3> {
        self.tariff
            .zip3(zip3)
            .ok_or_else(|| EngineError::Lookup {
                table: TariffTable::Zip3,
                key: zip3.to_string(),
            })
    }

    /// Resolves the service area row for a zip3 effective on `date`.
    pub(crate) fn service_area_for_zip3(
        &self,
        zip3: u32,
        date: NaiveDate,
    ) -> EngineResult<ServiceAreaRate> {
        let service_area = self.zip3_row(zip3)?.service_area;
        let rate = select_effective(
            self.tariff.service_area_rates(service_area),
            TariffTable::ServiceArea,
            &service_area.to_string(),
            date,
        )?;
        debug!(
            zip3,
            service_area,
            date = %date,
            effective_lower = %rate.effective.lower,
            "Resolved service area rate"
        );
        Ok(rate)
    }
}
