//! Storage-in-transit (SIT) pricing.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Cents, Cwt};
use crate::tariff::TariffData;

use super::RateEngine;

impl<T: TariffData> RateEngine<T> {
    /// Computes the gross storage-in-transit charge.
    ///
    /// Rates come from the service area of `zip3` (the zip3 where the goods
    /// are stored) effective on `date`:
    ///
    /// - the first day at the first-day rate per CWT
    /// - each further day at the additional-day rate per CWT
    /// - origin SIT only: one pickup/delivery charge per CWT to move the
    ///   goods between storage and the origin
    ///
    /// Zero days is a zero charge and performs no lookup. The result is
    /// pre-discount; resolve and apply the route's SIT discount separately.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `cwt` is negative
    /// - `Lookup` if the zip3 or its service area cannot be resolved
    /// - `NoRateForDate` if no service area row covers `date`
    pub fn sit_charge(
        &self,
        cwt: Cwt,
        days_in_storage: u32,
        zip3: u32,
        date: NaiveDate,
        is_destination_sit: bool,
    ) -> EngineResult<Cents> {
        if cwt.0 < 0 {
            return Err(EngineError::InvalidInput {
                field: "cwt".to_string(),
                message: format!("{} is negative", cwt),
            });
        }
        if days_in_storage == 0 {
            return Ok(Cents::ZERO);
        }

        let area = self.service_area_for_zip3(zip3, date)?;
        let additional_days = i64::from(days_in_storage - 1);

        let mut total = area.sit_first_day_rate_cents * cwt;
        total += area
            .sit_additional_day_rate_cents
            .multiply(additional_days * cwt.0);
        if !is_destination_sit {
            total += area.sit_pickup_delivery_rate_cents * cwt;
        }

        debug!(
            zip3,
            cwt = cwt.0,
            days_in_storage,
            is_destination_sit,
            total = total.0,
            "SIT charge"
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{date, rate_engine_date, test_engine};
    use super::*;
    use crate::error::TariffTable;
    use proptest::prelude::*;

    #[test]
    fn test_destination_sit_single_day() {
        let engine = test_engine();
        let charge = engine
            .sit_charge(Cwt(20), 1, 336, rate_engine_date(), true)
            .unwrap();
        assert_eq!(charge, Cents(30000));
    }

    #[test]
    fn test_destination_sit_multiple_days() {
        let engine = test_engine();
        // 1500 * 20 + 60 * 20 * 4
        let charge = engine
            .sit_charge(Cwt(20), 5, 336, rate_engine_date(), true)
            .unwrap();
        assert_eq!(charge, Cents(34800));
    }

    #[test]
    fn test_origin_sit_adds_pickup_delivery() {
        let engine = test_engine();
        // 1402 * 20 + 53 * 20 * 4 + 1735 * 20
        let charge = engine
            .sit_charge(Cwt(20), 5, 395, rate_engine_date(), false)
            .unwrap();
        assert_eq!(charge, Cents(28040 + 4240 + 34700));
    }

    #[test]
    fn test_origin_and_destination_policies_differ() {
        let engine = test_engine();
        let origin = engine
            .sit_charge(Cwt(20), 5, 395, rate_engine_date(), false)
            .unwrap();
        let destination = engine
            .sit_charge(Cwt(20), 5, 395, rate_engine_date(), true)
            .unwrap();
        assert_eq!(origin.0 - destination.0, 1735 * 20);
    }

    #[test]
    fn test_zero_days_is_zero_without_lookup() {
        let engine = test_engine();
        let charge = engine
            .sit_charge(Cwt(20), 0, 999, rate_engine_date(), true)
            .unwrap();
        assert_eq!(charge, Cents::ZERO);
    }

    #[test]
    fn test_unknown_zip3_fails() {
        let engine = test_engine();
        let result = engine.sit_charge(Cwt(20), 5, 999, rate_engine_date(), true);
        assert!(matches!(
            result,
            Err(EngineError::Lookup {
                table: TariffTable::Zip3,
                ..
            })
        ));
    }

    #[test]
    fn test_date_outside_cycle_fails() {
        let engine = test_engine();
        let result = engine.sit_charge(Cwt(20), 5, 336, date(2018, 5, 15), true);
        assert!(matches!(result, Err(EngineError::NoRateForDate { .. })));
    }

    #[test]
    fn test_uses_rate_effective_on_date() {
        let engine = test_engine();
        // 2018 cycle: 1450 * 10 + 55 * 10
        let charge = engine
            .sit_charge(Cwt(10), 2, 395, date(2018, 5, 15), true)
            .unwrap();
        assert_eq!(charge, Cents(15050));
    }

    #[test]
    fn test_negative_weight_fails() {
        let engine = test_engine();
        let result = engine.sit_charge(Cwt(-1), 5, 336, rate_engine_date(), true);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    proptest! {
        #[test]
        fn prop_sit_charge_is_idempotent(cwt in 0i64..500, days in 0u32..90, destination in any::<bool>()) {
            let engine = test_engine();
            let first = engine.sit_charge(Cwt(cwt), days, 336, rate_engine_date(), destination);
            let second = engine.sit_charge(Cwt(cwt), days, 336, rate_engine_date(), destination);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_each_extra_day_adds_additional_rate(cwt in 0i64..500, days in 1u32..90) {
            let engine = test_engine();
            let today = engine.sit_charge(Cwt(cwt), days, 336, rate_engine_date(), true).unwrap();
            let tomorrow = engine.sit_charge(Cwt(cwt), days + 1, 336, rate_engine_date(), true).unwrap();
            prop_assert_eq!(tomorrow.0 - today.0, 60 * cwt);
        }
    }
}
