//! Optional consistency checks over parcel records
//!
//! Nothing here runs on the valuation path. Callers run it when they load a
//! catalog and decide what to do with the findings; records are never
//! corrected.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::canopy::{MAX_DENSITY, MIN_DENSITY};
use crate::parcel::{Parcel, RADAR_METRICS};

pub const EXPECTED_RADAR_FACTORS: usize = RADAR_METRICS.len();
const PCT_TOLERANCE: f64 = 1e-6;
const PRICE_PER_ACRE_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inconsistency {
    RadarFactorCount { found: usize },
    RadarValueOutOfRange { metric: String, value: f64 },
    ScoreOutOfRange { score: f64 },
    SpeciesPctSum { total: f64 },
    SpeciesPctOutOfRange { species: String, pct: f64 },
    PricePerAcreMismatch { listed: f64, computed: f64 },
    CanopyCellOutOfRange { row: usize, col: usize, value: f64 },
    DuplicateId { id: u32 },
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::RadarFactorCount { found } => write!(
                f,
                "expected {EXPECTED_RADAR_FACTORS} radar factors, found {found}"
            ),
            Inconsistency::RadarValueOutOfRange { metric, value } => {
                write!(f, "radar factor '{metric}' = {value} outside 0..=100")
            }
            Inconsistency::ScoreOutOfRange { score } => {
                write!(f, "composite score {score} outside 0..=100")
            }
            Inconsistency::SpeciesPctSum { total } => {
                write!(f, "species percentages sum to {total}, not 100")
            }
            Inconsistency::SpeciesPctOutOfRange { species, pct } => {
                write!(f, "species '{species}' has percentage {pct} outside 0..=100")
            }
            Inconsistency::PricePerAcreMismatch { listed, computed } => write!(
                f,
                "listed price per acre {listed} differs from computed {computed}"
            ),
            Inconsistency::CanopyCellOutOfRange { row, col, value } => {
                write!(f, "canopy cell ({row}, {col}) = {value} outside density bounds")
            }
            Inconsistency::DuplicateId { id } => write!(f, "parcel id {id} used more than once"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelIssues {
    pub parcel_id: u32,
    pub issues: Vec<Inconsistency>,
}

fn in_score_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

pub fn validate_parcel(parcel: &Parcel) -> Vec<Inconsistency> {
    let mut issues = Vec::new();

    if parcel.radar.len() != EXPECTED_RADAR_FACTORS {
        issues.push(Inconsistency::RadarFactorCount {
            found: parcel.radar.len(),
        });
    }
    for factor in &parcel.radar {
        if !in_score_range(factor.value) {
            issues.push(Inconsistency::RadarValueOutOfRange {
                metric: factor.metric.clone(),
                value: factor.value,
            });
        }
    }
    if !in_score_range(parcel.score) {
        issues.push(Inconsistency::ScoreOutOfRange {
            score: parcel.score,
        });
    }

    for mix in &parcel.species {
        if !in_score_range(mix.pct) {
            issues.push(Inconsistency::SpeciesPctOutOfRange {
                species: mix.name.clone(),
                pct: mix.pct,
            });
        }
    }
    let total = parcel.species_pct_total();
    if (total - 100.0).abs() > PCT_TOLERANCE {
        issues.push(Inconsistency::SpeciesPctSum { total });
    }

    if parcel.acres > 0.0 && parcel.asking_price > 0.0 {
        let computed = (parcel.asking_price / parcel.acres).round();
        if (computed - parcel.price_per_acre).abs() > PRICE_PER_ACRE_TOLERANCE {
            issues.push(Inconsistency::PricePerAcreMismatch {
                listed: parcel.price_per_acre,
                computed,
            });
        }
    }

    for (row, cells) in parcel.canopy_grid.rows().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if !(MIN_DENSITY..=MAX_DENSITY).contains(&value) {
                issues.push(Inconsistency::CanopyCellOutOfRange { row, col, value });
            }
        }
    }

    issues
}

/// Runs [`validate_parcel`] over a catalog and adds cross-record checks.
/// Only parcels with findings are returned.
pub fn validate_catalog(parcels: &[Parcel]) -> Vec<ParcelIssues> {
    let mut seen = HashSet::new();
    let mut report = Vec::new();
    for parcel in parcels {
        let mut issues = validate_parcel(parcel);
        if !seen.insert(parcel.id) {
            issues.push(Inconsistency::DuplicateId { id: parcel.id });
        }
        if !issues.is_empty() {
            report.push(ParcelIssues {
                parcel_id: parcel.id,
                issues,
            });
        }
    }
    report
}
