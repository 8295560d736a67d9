//! Parcel reference data

use serde::{Deserialize, Serialize};

use crate::canopy::CanopyGrid;

/// One species row of a stand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesMix {
    pub name: String,
    /// Share of the stand, 0..=100.
    pub pct: f64,
    pub mbf_per_acre: f64,
}

impl SpeciesMix {
    pub fn new(name: impl Into<String>, pct: f64, mbf_per_acre: f64) -> Self {
        Self {
            name: name.into(),
            pct,
            mbf_per_acre,
        }
    }
}

/// A labelled 0..=100 sub-score shown on the radar breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFactor {
    pub metric: String,
    pub value: f64,
}

impl RadarFactor {
    pub fn new(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
        }
    }
}

pub const RADAR_METRICS: [&str; 6] = [
    "Timber Density",
    "Access",
    "Species Mix",
    "Stand Age",
    "Slope",
    "Price/Acre",
];

/// Immutable parcel record. Derived metrics are never stored here; see
/// [`crate::valuation`] and [`crate::species`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parcel {
    pub id: u32,
    pub name: String,
    pub county: String,
    pub acres: f64,
    pub lat: f64,
    pub lng: f64,
    pub slope_avg_deg: f64,
    pub avg_canopy_height_ft: f64,
    pub stand_age_years: u32,
    pub access_road: bool,
    pub water_rights: bool,
    pub lidar_coverage: bool,
    pub asking_price: f64,
    /// Listed price per acre; wins over the computed figure for display.
    pub price_per_acre: f64,
    pub timber_value: f64,
    pub mbf_total: f64,
    pub harvest_ready_pct: f64,
    pub species: Vec<SpeciesMix>,
    pub radar: Vec<RadarFactor>,
    /// Supplied composite score, not derived from `radar`.
    pub score: f64,
    /// Base density the grid was generated from.
    pub canopy_density: f64,
    pub canopy_grid: CanopyGrid,
    pub listing: Option<String>,
    pub notes: Option<String>,
}

impl Parcel {
    pub fn species_pct_total(&self) -> f64 {
        self.species.iter().map(|s| s.pct).sum()
    }

    pub fn radar_value(&self, metric: &str) -> Option<f64> {
        self.radar
            .iter()
            .find(|factor| factor.metric == metric)
            .map(|factor| factor.value)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// First catalog parcel with a flat grid, used across unit tests.
    pub fn finney() -> Parcel {
        Parcel {
            id: 1,
            name: "Finney Cumberland Rd Timber".into(),
            county: "Skagit".into(),
            acres: 74.0,
            lat: 48.53,
            lng: -121.78,
            slope_avg_deg: 16.0,
            avg_canopy_height_ft: 108.0,
            stand_age_years: 50,
            access_road: true,
            water_rights: true,
            lidar_coverage: true,
            asking_price: 245_000.0,
            price_per_acre: 3310.0,
            timber_value: 414_400.0,
            mbf_total: 1036.0,
            harvest_ready_pct: 70.0,
            species: vec![
                SpeciesMix::new("Douglas Fir", 60.0, 16.0),
                SpeciesMix::new("Western Red Cedar", 25.0, 13.0),
                SpeciesMix::new("Hemlock", 15.0, 9.0),
            ],
            radar: [90.0, 85.0, 92.0, 88.0, 78.0, 94.0]
                .into_iter()
                .zip(RADAR_METRICS)
                .map(|(value, metric)| RadarFactor::new(metric, value))
                .collect(),
            score: 88.0,
            canopy_density: 0.86,
            canopy_grid: CanopyGrid::filled(0.86),
            listing: None,
            notes: None,
        }
    }
}
