//! Everything a front end needs to render one selected parcel.

use serde::Serialize;

use crate::canopy::CanopyGrid;
use crate::error::ValuationError;
use crate::parcel::Parcel;
use crate::scoring::{assess_factors, recommend, FactorAssessment, Recommendation};
use crate::species::{species_breakdown, SpeciesBreakdown, SpeciesPriceTable};
use crate::validation::{validate_parcel, Inconsistency};
use crate::valuation::{
    display_price_per_acre, site_metrics, value_parcel, ParcelValuation, SiteMetrics,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelReport {
    pub id: u32,
    pub name: String,
    pub county: String,
    pub acres: f64,
    pub asking_price: f64,
    pub listed_price_per_acre: f64,
    pub timber_value: f64,
    pub score: f64,
    pub recommendation: Recommendation,
    pub recommendation_label: &'static str,
    pub valuation: ParcelValuation,
    pub species: SpeciesBreakdown,
    pub factors: Vec<FactorAssessment>,
    pub site: SiteMetrics,
    /// Present only for parcels with LiDAR coverage.
    pub canopy: Option<CanopyGrid>,
    pub issues: Vec<Inconsistency>,
}

impl ParcelReport {
    pub fn build(parcel: &Parcel, pricing: &SpeciesPriceTable) -> Result<Self, ValuationError> {
        let valuation = value_parcel(parcel)?;
        let species = species_breakdown(parcel, pricing)?;
        let recommendation = recommend(parcel);
        Ok(Self {
            id: parcel.id,
            name: parcel.name.clone(),
            county: parcel.county.clone(),
            acres: parcel.acres,
            asking_price: parcel.asking_price,
            listed_price_per_acre: display_price_per_acre(parcel),
            timber_value: parcel.timber_value,
            score: parcel.score,
            recommendation,
            recommendation_label: recommendation.label(),
            valuation,
            species,
            factors: assess_factors(parcel),
            site: site_metrics(parcel),
            canopy: parcel
                .lidar_coverage
                .then(|| parcel.canopy_grid.clone()),
            issues: validate_parcel(parcel),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
