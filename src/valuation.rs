//! Per-parcel investment metrics and harvest logistics

use serde::Serialize;

use crate::error::{
    ensure_positive_acreage, ensure_positive_price, ensure_timber_value, ValuationError,
};
use crate::parcel::Parcel;

pub const MAX_HARVEST_SLOPE_DEG: f64 = 45.0;
pub const REFERENCE_CANOPY_HEIGHT_FT: f64 = 150.0;
pub const ROAD_BUILD_COST: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelValuation {
    /// `asking_price / acres`, informational; display uses the listed figure.
    pub price_per_acre: i64,
    pub value_per_acre: i64,
    /// Percent, one decimal, signed.
    pub roi_pct: f64,
    pub timber_surplus: f64,
    pub canopy_closure_pct: u32,
}

/// Derives the scalar investment metrics of `parcel`.
///
/// Fails on non-positive acreage or asking price, or a non-finite or
/// negative timber value, instead of producing infinite or NaN ratios.
pub fn value_parcel(parcel: &Parcel) -> Result<ParcelValuation, ValuationError> {
    let acres = ensure_positive_acreage(parcel.acres)?;
    let asking = ensure_positive_price(parcel.asking_price)?;
    let timber_value = ensure_timber_value(parcel.timber_value)?;

    let timber_surplus = timber_value - asking;
    Ok(ParcelValuation {
        price_per_acre: (asking / acres).round() as i64,
        value_per_acre: (timber_value / acres).round() as i64,
        roi_pct: round_to_tenth(timber_surplus / asking * 100.0),
        timber_surplus,
        canopy_closure_pct: (parcel.canopy_grid.mean() * 100.0).round() as u32,
    })
}

/// Listed price per acre, which wins for display when it differs from the
/// computed value.
pub fn display_price_per_acre(parcel: &Parcel) -> f64 {
    parcel.price_per_acre
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Harvest logistics derived from the site fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMetrics {
    pub harvest_ready_mbf: u64,
    /// 1.0 on flat ground, 0.0 at or beyond the harvestable slope limit.
    pub slope_ease: f64,
    pub canopy_height_index: f64,
    pub road_build_cost: u64,
}

pub fn site_metrics(parcel: &Parcel) -> SiteMetrics {
    SiteMetrics {
        harvest_ready_mbf: (parcel.mbf_total * parcel.harvest_ready_pct / 100.0)
            .round()
            .max(0.0) as u64,
        slope_ease: (1.0 - parcel.slope_avg_deg / MAX_HARVEST_SLOPE_DEG).clamp(0.0, 1.0),
        canopy_height_index: (parcel.avg_canopy_height_ft / REFERENCE_CANOPY_HEIGHT_FT)
            .clamp(0.0, 1.0),
        road_build_cost: if parcel.access_road { 0 } else { ROAD_BUILD_COST },
    }
}
