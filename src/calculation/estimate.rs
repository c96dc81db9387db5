//! Customer-facing PPM estimates.
//!
//! These compose the gross calculators with the route discount. Discounts
//! are applied here, once per component, and nowhere else in the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Cents, DiscountRate, Pounds, RouteDiscount, zip5_to_zip3};
use crate::tariff::TariffData;

use super::{LinehaulCost, RateEngine};

/// Inputs for a PPM incentive estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpmEstimateRequest {
    /// Pickup postal code.
    pub origin_zip: u32,
    /// Destination postal code.
    pub destination_zip: u32,
    /// Estimated weight.
    pub weight: Pounds,
    /// Planned move date.
    pub planned_move_date: NaiveDate,
    /// Days of storage at destination, zero for none.
    #[serde(default)]
    pub days_in_storage: u32,
}

/// An itemized PPM estimate, gross and net of discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpmEstimate {
    /// Linehaul breakdown.
    pub linehaul: LinehaulCost,
    /// Origin service charge.
    pub origin_service_charge: Cents,
    /// Destination service charge.
    pub destination_service_charge: Cents,
    /// Destination SIT charge.
    pub sit: Cents,
    /// Discounts resolved for the route.
    pub discount: RouteDiscount,
    /// Linehaul total after the linehaul discount.
    pub linehaul_net: Cents,
    /// Service charges after the linehaul discount.
    pub service_charges_net: Cents,
    /// SIT after the SIT discount.
    pub sit_net: Cents,
    /// Sum of the gross components.
    pub gross_total: Cents,
    /// Sum of the net components.
    pub net_total: Cents,
}

/// A destination SIT estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitEstimate {
    /// Gross SIT charge.
    pub gross: Cents,
    /// SIT discount applied.
    pub discount_rate: DiscountRate,
    /// Net SIT charge.
    pub estimate: Cents,
}

impl<T: TariffData> RateEngine<T> {
    /// Builds an itemized PPM estimate.
    ///
    /// The linehaul discount applies to the linehaul total and to the service
    /// charges; the SIT discount applies to destination SIT. Each component
    /// is rounded on its own before summing.
    pub fn estimate_ppm(&self, request: &PpmEstimateRequest) -> EngineResult<PpmEstimate> {
        let origin_zip3 = zip5_to_zip3(request.origin_zip);
        let destination_zip3 = zip5_to_zip3(request.destination_zip);
        let date = request.planned_move_date;

        let linehaul = self.linehaul_cost(request.weight, origin_zip3, destination_zip3, date)?;
        let origin_service_charge = self.service_charge(linehaul.cwt, origin_zip3, date)?;
        let destination_service_charge =
            self.service_charge(linehaul.cwt, destination_zip3, date)?;
        let sit = self.sit_charge(
            linehaul.cwt,
            request.days_in_storage,
            destination_zip3,
            date,
            true,
        )?;

        let discount = self.resolve_discount(request.origin_zip, request.destination_zip, date)?;
        let linehaul_net = discount.linehaul.apply(linehaul.total);
        let service_charges_net = discount
            .linehaul
            .apply(origin_service_charge + destination_service_charge);
        let sit_net = discount.sit.apply(sit);

        let estimate = PpmEstimate {
            linehaul,
            origin_service_charge,
            destination_service_charge,
            sit,
            discount,
            linehaul_net,
            service_charges_net,
            sit_net,
            gross_total: linehaul.total + origin_service_charge + destination_service_charge + sit,
            net_total: linehaul_net + service_charges_net + sit_net,
        };

        info!(
            origin_zip = request.origin_zip,
            destination_zip = request.destination_zip,
            weight = request.weight.0,
            date = %date,
            gross_total = estimate.gross_total.0,
            net_total = estimate.net_total.0,
            "PPM estimate computed"
        );
        Ok(estimate)
    }

    /// Estimates destination SIT for a PPM, net of the route's SIT discount.
    pub fn sit_estimate(
        &self,
        origin_zip5: u32,
        destination_zip5: u32,
        weight: Pounds,
        date: NaiveDate,
        days_in_storage: u32,
    ) -> EngineResult<SitEstimate> {
        if weight.0 < 0 {
            return Err(EngineError::InvalidInput {
                field: "weight".to_string(),
                message: format!("{} lbs is negative", weight.0),
            });
        }

        let discount = self.resolve_discount(origin_zip5, destination_zip5, date)?;
        let gross = self.sit_charge(
            weight.to_cwt(),
            days_in_storage,
            zip5_to_zip3(destination_zip5),
            date,
            true,
        )?;

        Ok(SitEstimate {
            gross,
            discount_rate: discount.sit,
            estimate: discount.sit.apply(gross),
        })
    }
}
