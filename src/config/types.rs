//! File layouts of a tariff directory.
//!
//! Each YAML file wraps one table in a single top-level key.

use serde::Deserialize;

use crate::models::{
    BaseLinehaulRate, RouteDiscountRate, ServiceAreaRate, ShorthaulRate, Zip3, ZipDistance,
};

/// Metadata about the tariff, from `tariff.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffMetadata {
    /// Tariff code (e.g. "400NG").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Version or publication label.
    pub version: String,
    /// Where the tables were sourced from.
    pub source: String,
}

/// `zip3s.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Zip3sFile {
    /// Zip3 reference rows.
    pub zip3s: Vec<Zip3>,
}

/// `distances.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DistancesFile {
    /// Directional distance bands.
    pub distances: Vec<ZipDistance>,
}

/// `service_areas.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAreasFile {
    /// Effective-dated service area rows.
    pub service_areas: Vec<ServiceAreaRate>,
}

/// `base_linehaul.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseLinehaulFile {
    /// Base linehaul brackets.
    pub rates: Vec<BaseLinehaulRate>,
}

/// `shorthaul.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShorthaulFile {
    /// Shorthaul brackets.
    pub rates: Vec<ShorthaulRate>,
}

/// `discounts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscountsFile {
    /// Effective-dated route discounts.
    pub discounts: Vec<RouteDiscountRate>,
}
