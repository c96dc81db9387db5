//! Read access to the tariff reference tables.
//!
//! The engine never holds a database handle. It is constructed with any
//! [`TariffData`] implementation: the YAML-backed [`InMemoryTariff`] built
//! by [`crate::config::TariffLoader`], a test fixture, or an adapter over an
//! external store.
//!
//! Accessors return raw rows; selecting the single row effective on a date
//! is done by [`select_effective`] so every accessor resolves dates the same
//! way.

mod memory;
mod resolve;

pub use memory::InMemoryTariff;
pub use resolve::{Effective, select_effective};

use std::sync::Arc;

use crate::models::{BaseLinehaulRate, RouteDiscountRate, ServiceAreaRate, ShorthaulRate, Zip3};

/// Read-only access to the tariff tables.
///
/// Implementations must be safe for concurrent reads.
pub trait TariffData: Send + Sync {
    /// Returns the zip3 reference row, if any.
    fn zip3(&self, zip3: u32) -> Option<Zip3>;

    /// Returns the mileage for the ordered pair, if any.
    fn distance(&self, origin_zip3: u32, destination_zip3: u32) -> Option<u32>;

    /// Returns every effective-dated row for a service area.
    fn service_area_rates(&self, service_area: u32) -> Vec<ServiceAreaRate>;

    /// Returns the base linehaul rate table.
    fn base_linehaul_rates(&self) -> Vec<BaseLinehaulRate>;

    /// Returns the shorthaul rate table.
    fn shorthaul_rates(&self) -> Vec<ShorthaulRate>;

    /// Returns every effective-dated discount row for a route.
    fn route_discounts(&self, origin_rate_area: &str, destination_region: u32)
        -> Vec<RouteDiscountRate>;
}

impl<T: TariffData + ?Sized> TariffData for Arc<T> {
    fn zip3(&self, zip3: u32) -> Option<Zip3> {
        (**self).zip3(zip3)
    }

    fn distance(&self, origin_zip3: u32, destination_zip3: u32) -> Option<u32> {
        (**self).distance(origin_zip3, destination_zip3)
    }

    fn service_area_rates(&self, service_area: u32) -> Vec<ServiceAreaRate> {
        (**self).service_area_rates(service_area)
    }

    fn base_linehaul_rates(&self) -> Vec<BaseLinehaulRate> {
        (**self).base_linehaul_rates()
    }

    fn shorthaul_rates(&self) -> Vec<ShorthaulRate> {
        (**self).shorthaul_rates()
    }

    fn route_discounts(
        &self,
        origin_rate_area: &str,
        destination_region: u32,
    ) -> Vec<RouteDiscountRate> {
        (**self).route_discounts(origin_rate_area, destination_region)
    }
}
