//! Recommendation labels and per-factor tiers
//!
//! The composite score and the radar factors use different cut-offs
//! (85/70 vs 80/60). Both sets are kept separate on purpose; collapsing them
//! would change how parcels are labelled.

use std::fmt;

use serde::Serialize;

use crate::parcel::Parcel;

/// Lower bounds (inclusive) of the top and middle tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub upper: f64,
    pub lower: f64,
}

pub const COMPOSITE_THRESHOLDS: Thresholds = Thresholds {
    upper: 85.0,
    lower: 70.0,
};

pub const FACTOR_THRESHOLDS: Thresholds = Thresholds {
    upper: 80.0,
    lower: 60.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongBuy,
    Consider,
    Pass,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= COMPOSITE_THRESHOLDS.upper {
            Recommendation::StrongBuy
        } else if score >= COMPOSITE_THRESHOLDS.lower {
            Recommendation::Consider
        } else {
            Recommendation::Pass
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "STRONG BUY",
            Recommendation::Consider => "CONSIDER",
            Recommendation::Pass => "PASS",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity band of a single radar factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorTier {
    Strong,
    Fair,
    Weak,
}

impl FactorTier {
    pub fn from_value(value: f64) -> Self {
        if value >= FACTOR_THRESHOLDS.upper {
            FactorTier::Strong
        } else if value >= FACTOR_THRESHOLDS.lower {
            FactorTier::Fair
        } else {
            FactorTier::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorAssessment {
    pub metric: String,
    pub value: f64,
    pub tier: FactorTier,
}

pub fn recommend(parcel: &Parcel) -> Recommendation {
    Recommendation::from_score(parcel.score)
}

/// Tiers every radar factor of `parcel`, keeping radar order.
pub fn assess_factors(parcel: &Parcel) -> Vec<FactorAssessment> {
    parcel
        .radar
        .iter()
        .map(|factor| FactorAssessment {
            metric: factor.metric.clone(),
            value: factor.value,
            tier: FactorTier::from_value(factor.value),
        })
        .collect()
}
