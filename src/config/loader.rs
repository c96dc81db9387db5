//! Tariff directory loading.
//!
//! This module provides the [`TariffLoader`] type for loading tariff
//! reference tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DiscountRate, EffectiveRange};
use crate::tariff::InMemoryTariff;

use super::types::{
    BaseLinehaulFile, DiscountsFile, DistancesFile, ServiceAreasFile, ShorthaulFile,
    TariffMetadata, Zip3sFile,
};

/// Loads a tariff directory into memory.
///
/// # Directory Structure
///
/// ```text
/// config/tariff400ng/
/// ├── tariff.yaml          # Tariff metadata
/// ├── zip3s.yaml           # Zip3 reference rows
/// ├── distances.yaml       # Directional zip3 distance bands
/// ├── service_areas.yaml   # Effective-dated service area rates
/// ├── base_linehaul.yaml   # Base linehaul brackets
/// ├── shorthaul.yaml       # Shorthaul brackets
/// └── discounts.yaml       # Effective-dated route discounts
/// ```
///
/// Loading validates the table invariants the engine relies on: effective
/// ranges are non-empty and never overlap for one service area or one
/// discount route, brackets are non-empty, and discount rates lie in
/// `[0, 1]`.
///
/// # Example
///
/// ```no_run
/// use rate_engine::calculation::RateEngine;
/// use rate_engine::config::TariffLoader;
///
/// let loader = TariffLoader::load("./config/tariff400ng")?;
/// println!("Loaded tariff: {}", loader.metadata().name);
///
/// let engine = RateEngine::new(loader.into_tariff());
/// let miles = engine.determine_mileage(10024, 18209)?;
/// # Ok::<(), rate_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TariffLoader {
    metadata: TariffMetadata,
    tariff: InMemoryTariff,
}

impl TariffLoader {
    /// Loads and validates the tariff directory at `path`.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if any required file is missing
    /// - `ConfigParseError` if a file is not valid YAML, is missing a field,
    ///   or violates a table invariant
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TariffMetadata>(&path.join("tariff.yaml"))?;
        let zip3s = Self::load_yaml::<Zip3sFile>(&path.join("zip3s.yaml"))?;
        let distances = Self::load_yaml::<DistancesFile>(&path.join("distances.yaml"))?;
        let service_areas_path = path.join("service_areas.yaml");
        let service_areas = Self::load_yaml::<ServiceAreasFile>(&service_areas_path)?;
        let base_linehaul_path = path.join("base_linehaul.yaml");
        let base_linehaul = Self::load_yaml::<BaseLinehaulFile>(&base_linehaul_path)?;
        let shorthaul_path = path.join("shorthaul.yaml");
        let shorthaul = Self::load_yaml::<ShorthaulFile>(&shorthaul_path)?;
        let discounts_path = path.join("discounts.yaml");
        let discounts = Self::load_yaml::<DiscountsFile>(&discounts_path)?;

        for rate in &base_linehaul.rates {
            if rate.miles_lower >= rate.miles_upper || rate.cwt_lower >= rate.cwt_upper {
                return Err(parse_error(
                    &base_linehaul_path,
                    format!(
                        "empty bracket miles [{}, {}) cwt [{}, {})",
                        rate.miles_lower, rate.miles_upper, rate.cwt_lower, rate.cwt_upper
                    ),
                ));
            }
        }

        for rate in &shorthaul.rates {
            if rate.cwt_miles_lower >= rate.cwt_miles_upper {
                return Err(parse_error(
                    &shorthaul_path,
                    format!(
                        "empty bracket cwt-miles [{}, {})",
                        rate.cwt_miles_lower, rate.cwt_miles_upper
                    ),
                ));
            }
        }

        for discount in &discounts.discounts {
            for rate in [discount.linehaul_rate, discount.sit_rate] {
                DiscountRate::from_fraction(rate)
                    .map_err(|e| parse_error(&discounts_path, e.to_string()))?;
            }
        }

        let mut tariff = InMemoryTariff::default();
        tariff = zip3s.zip3s.into_iter().fold(tariff, InMemoryTariff::with_zip3);
        tariff = distances
            .distances
            .into_iter()
            .fold(tariff, InMemoryTariff::with_distance);
        tariff = service_areas
            .service_areas
            .into_iter()
            .fold(tariff, InMemoryTariff::with_service_area);
        tariff = base_linehaul
            .rates
            .into_iter()
            .fold(tariff, InMemoryTariff::with_base_linehaul);
        tariff = shorthaul
            .rates
            .into_iter()
            .fold(tariff, InMemoryTariff::with_shorthaul);
        tariff = discounts
            .discounts
            .into_iter()
            .fold(tariff, InMemoryTariff::with_discount);

        for (code, rows) in tariff.service_area_groups() {
            let ranges: Vec<EffectiveRange> = rows.iter().map(|r| r.effective).collect();
            check_ranges(&ranges).map_err(|message| {
                parse_error(
                    &service_areas_path,
                    format!("service area {}: {}", code, message),
                )
            })?;
        }

        for ((rate_area, region), rows) in tariff.discount_groups() {
            let ranges: Vec<EffectiveRange> = rows.iter().map(|r| r.effective).collect();
            check_ranges(&ranges).map_err(|message| {
                parse_error(
                    &discounts_path,
                    format!("route {} -> region {}: {}", rate_area, region, message),
                )
            })?;
        }

        debug!(
            path = %path.display(),
            tariff = %metadata.code,
            version = %metadata.version,
            "Loaded tariff directory"
        );

        Ok(Self { metadata, tariff })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the tariff metadata.
    pub fn metadata(&self) -> &TariffMetadata {
        &self.metadata
    }

    /// Returns the loaded tables.
    pub fn tariff(&self) -> &InMemoryTariff {
        &self.tariff
    }

    /// Consumes the loader, returning the loaded tables.
    pub fn into_tariff(self) -> InMemoryTariff {
        self.tariff
    }
}

fn parse_error(path: &Path, message: String) -> EngineError {
    EngineError::ConfigParseError {
        path: path.display().to_string(),
        message,
    }
}

/// Checks that every range is non-empty and no two overlap.
fn check_ranges(ranges: &[EffectiveRange]) -> Result<(), String> {
    for (i, range) in ranges.iter().enumerate() {
        if range.is_empty() {
            return Err(format!(
                "empty effective range [{}, {})",
                range.lower, range.upper
            ));
        }
        if let Some(other) = ranges[i + 1..].iter().find(|other| range.overlaps(other)) {
            return Err(format!(
                "effective range [{}, {}) overlaps [{}, {})",
                range.lower, range.upper, other.lower, other.upper
            ));
        }
    }
    Ok(())
}
