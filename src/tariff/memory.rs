//! In-memory tariff tables.

use std::collections::HashMap;

use crate::models::{
    BaseLinehaulRate, RouteDiscountRate, ServiceAreaRate, ShorthaulRate, Zip3, ZipDistance,
};

use super::TariffData;

/// Tariff tables held in memory.
///
/// Built by [`crate::config::TariffLoader`] from a tariff directory, or
/// assembled row by row for tests.
///
/// # Example
///
/// ```
/// use rate_engine::models::ZipDistance;
/// use rate_engine::tariff::{InMemoryTariff, TariffData};
///
/// let tariff = InMemoryTariff::default().with_distance(ZipDistance {
///     origin_zip3: 100,
///     destination_zip3: 182,
///     miles: 1000,
/// });
/// assert_eq!(tariff.distance(100, 182), Some(1000));
/// assert_eq!(tariff.distance(182, 100), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTariff {
    zip3s: HashMap<u32, Zip3>,
    distances: HashMap<(u32, u32), u32>,
    service_areas: HashMap<u32, Vec<ServiceAreaRate>>,
    base_linehaul: Vec<BaseLinehaulRate>,
    shorthaul: Vec<ShorthaulRate>,
    discounts: HashMap<(String, u32), Vec<RouteDiscountRate>>,
}

impl InMemoryTariff {
    /// Adds a zip3 reference row, replacing any row for the same prefix.
    pub fn with_zip3(mut self, zip3: Zip3) -> Self {
        self.zip3s.insert(zip3.zip3, zip3);
        self
    }

    /// Adds a directional distance band.
    pub fn with_distance(mut self, distance: ZipDistance) -> Self {
        self.distances.insert(
            (distance.origin_zip3, distance.destination_zip3),
            distance.miles,
        );
        self
    }

    /// Adds an effective-dated service area row.
    pub fn with_service_area(mut self, rate: ServiceAreaRate) -> Self {
        self.service_areas
            .entry(rate.service_area)
            .or_default()
            .push(rate);
        self
    }

    /// Adds a base linehaul bracket.
    pub fn with_base_linehaul(mut self, rate: BaseLinehaulRate) -> Self {
        self.base_linehaul.push(rate);
        self
    }

    /// Adds a shorthaul bracket.
    pub fn with_shorthaul(mut self, rate: ShorthaulRate) -> Self {
        self.shorthaul.push(rate);
        self
    }

    /// Adds an effective-dated route discount.
    pub fn with_discount(mut self, discount: RouteDiscountRate) -> Self {
        self.discounts
            .entry((
                discount.origin_rate_area.clone(),
                discount.destination_region,
            ))
            .or_default()
            .push(discount);
        self
    }

    /// Iterates every service area row grouped by code.
    pub(crate) fn service_area_groups(&self) -> impl Iterator<Item = (&u32, &Vec<ServiceAreaRate>)> {
        self.service_areas.iter()
    }

    /// Iterates every discount row grouped by route.
    pub(crate) fn discount_groups(
        &self,
    ) -> impl Iterator<Item = (&(String, u32), &Vec<RouteDiscountRate>)> {
        self.discounts.iter()
    }
}

impl TariffData for InMemoryTariff {
    fn zip3(&self, zip3: u32) -> Option<Zip3> {
        self.zip3s.get(&zip3).cloned()
    }

    fn distance(&self, origin_zip3: u32, destination_zip3: u32) -> Option<u32> {
        self.distances.get(&(origin_zip3, destination_zip3)).copied()
    }

    fn service_area_rates(&self, service_area: u32) -> Vec<ServiceAreaRate> {
        self.service_areas
            .get(&service_area)
            .cloned()
            .unwrap_or_default()
    }

    fn base_linehaul_rates(&self) -> Vec<BaseLinehaulRate> {
        self.base_linehaul.clone()
    }

    fn shorthaul_rates(&self) -> Vec<ShorthaulRate> {
        self.shorthaul.clone()
    }

    fn route_discounts(
        &self,
        origin_rate_area: &str,
        destination_region: u32,
    ) -> Vec<RouteDiscountRate> {
        self.discounts
            .get(&(origin_rate_area.to_string(), destination_region))
            .cloned()
            .unwrap_or_default()
    }
}
