//! Parcel catalogs: YAML files and in-memory sources

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::canopy::generate_canopy_grid;
use crate::parcel::{Parcel, RadarFactor, SpeciesMix};
use crate::rng::RngManager;

fn default_seed() -> u64 {
    42
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub parcels: Vec<ParcelRecord>,
}

/// Parcel as written in a catalog file. The canopy grid is not stored; it is
/// generated from `canopy_density` when the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelRecord {
    pub id: u32,
    pub name: String,
    pub county: String,
    pub acres: f64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    pub slope_avg_deg: f64,
    pub avg_canopy_height_ft: f64,
    pub stand_age_years: u32,
    #[serde(default)]
    pub access_road: bool,
    #[serde(default)]
    pub water_rights: bool,
    #[serde(default)]
    pub lidar_coverage: bool,
    pub asking_price: f64,
    pub price_per_acre: f64,
    pub timber_value: f64,
    pub mbf_total: f64,
    pub harvest_ready_pct: f64,
    pub score: f64,
    pub canopy_density: f64,
    pub species: Vec<SpeciesMix>,
    pub radar: Vec<RadarFactor>,
    #[serde(default)]
    pub listing: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ParcelRecord {
    fn build(&self, rng: &RngManager) -> Parcel {
        let mut stream = rng.canopy_rng(self.id);
        Parcel {
            id: self.id,
            name: self.name.clone(),
            county: self.county.clone(),
            acres: self.acres,
            lat: self.lat,
            lng: self.lng,
            slope_avg_deg: self.slope_avg_deg,
            avg_canopy_height_ft: self.avg_canopy_height_ft,
            stand_age_years: self.stand_age_years,
            access_road: self.access_road,
            water_rights: self.water_rights,
            lidar_coverage: self.lidar_coverage,
            asking_price: self.asking_price,
            price_per_acre: self.price_per_acre,
            timber_value: self.timber_value,
            mbf_total: self.mbf_total,
            harvest_ready_pct: self.harvest_ready_pct,
            species: self.species.clone(),
            radar: self.radar.clone(),
            score: self.score,
            canopy_density: self.canopy_density,
            canopy_grid: generate_canopy_grid(self.acres, self.canopy_density, &mut stream),
            listing: self.listing.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl CatalogFile {
    pub fn from_yaml_str(data: &str) -> Result<Self> {
        serde_yaml::from_str(data).context("Failed to parse parcel catalog")
    }

    /// Builds the in-memory parcels. `seed_override` replaces the catalog seed.
    pub fn build_parcels(&self, seed_override: Option<u64>) -> Vec<Parcel> {
        let rng = RngManager::new(seed_override.unwrap_or(self.seed));
        self.parcels.iter().map(|record| record.build(&rng)).collect()
    }
}

pub struct CatalogLoader {
    base_dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<CatalogFile> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog: CatalogFile = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        info!(
            catalog = %catalog.name,
            parcels = catalog.parcels.len(),
            "loaded parcel catalog"
        );
        Ok(catalog)
    }
}

/// Anything that can hand the core a list of parcels.
pub trait ParcelSource {
    fn parcels(&self) -> Result<Vec<Parcel>>;
}

/// Catalog backed by a YAML file, read on every call.
pub struct YamlCatalog {
    loader: CatalogLoader,
    file: PathBuf,
    seed_override: Option<u64>,
}

impl YamlCatalog {
    pub fn new(base_dir: impl AsRef<Path>, file: impl AsRef<Path>) -> Self {
        Self {
            loader: CatalogLoader::new(base_dir),
            file: file.as_ref().to_path_buf(),
            seed_override: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_override = Some(seed);
        self
    }
}

impl ParcelSource for YamlCatalog {
    fn parcels(&self) -> Result<Vec<Parcel>> {
        let catalog = self.loader.load(&self.file)?;
        Ok(catalog.build_parcels(self.seed_override))
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    parcels: Vec<Parcel>,
}

impl StaticCatalog {
    pub fn new(parcels: Vec<Parcel>) -> Self {
        Self { parcels }
    }
}

impl ParcelSource for StaticCatalog {
    fn parcels(&self) -> Result<Vec<Parcel>> {
        Ok(self.parcels.clone())
    }
}
