//! Tariff directory loading for the rate engine.
//!
//! The engine itself never reads files; this module turns a directory of
//! YAML tables into an [`crate::tariff::InMemoryTariff`] the engine can be
//! constructed with.
//!
//! # Example
//!
//! ```no_run
//! use rate_engine::config::TariffLoader;
//!
//! let loader = TariffLoader::load("./config/tariff400ng").unwrap();
//! println!("Loaded tariff: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::TariffLoader;
pub use types::{
    BaseLinehaulFile, DiscountsFile, DistancesFile, ServiceAreasFile, ShorthaulFile,
    TariffMetadata, Zip3sFile,
};
