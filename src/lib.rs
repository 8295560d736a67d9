pub mod canopy;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod parcel;
pub mod ranking;
pub mod report;
pub mod rng;
pub mod scoring;
pub mod species;
pub mod validation;
pub mod valuation;

pub use catalog::{CatalogLoader, ParcelSource, StaticCatalog, YamlCatalog};
pub use config::Config;
pub use error::ValuationError;
pub use parcel::{Parcel, RadarFactor, SpeciesMix};
pub use ranking::{rank, rank_by_name, SortKey};
pub use report::ParcelReport;
