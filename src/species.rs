//! Per-species volume and stumpage value

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_positive_acreage, ValuationError};
use crate::parcel::{Parcel, SpeciesMix};

fn default_fallback_price() -> u64 {
    400
}

fn default_price_rules() -> Vec<PriceRule> {
    vec![
        PriceRule {
            contains: vec!["Cedar".into()],
            price_per_mbf: 620,
        },
        PriceRule {
            contains: vec!["Pine".into(), "Larch".into()],
            price_per_mbf: 380,
        },
    ]
}

/// Price rule: applies when the species name contains any of `contains`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRule {
    pub contains: Vec<String>,
    pub price_per_mbf: u64,
}

/// Static $/MBF table. Rules are checked in order, matching is a
/// case-sensitive substring test, and the first hit wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPriceTable {
    #[serde(default = "default_price_rules")]
    pub rules: Vec<PriceRule>,
    #[serde(default = "default_fallback_price")]
    pub fallback_price_per_mbf: u64,
}

impl Default for SpeciesPriceTable {
    fn default() -> Self {
        Self {
            rules: default_price_rules(),
            fallback_price_per_mbf: default_fallback_price(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceLookup {
    pub price_per_mbf: u64,
    /// No rule matched and the fallback price was used.
    pub fallback: bool,
}

impl SpeciesPriceTable {
    pub fn lookup(&self, species: &str) -> PriceLookup {
        let hit = self.rules.iter().find(|rule| {
            rule.contains
                .iter()
                .any(|needle| species.contains(needle.as_str()))
        });
        match hit {
            Some(rule) => PriceLookup {
                price_per_mbf: rule.price_per_mbf,
                fallback: false,
            },
            None => {
                debug!(species, price = self.fallback_price_per_mbf, "species priced by fallback");
                PriceLookup {
                    price_per_mbf: self.fallback_price_per_mbf,
                    fallback: true,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesValue {
    pub name: String,
    pub pct: f64,
    pub mbf_per_acre: f64,
    pub volume_mbf: u64,
    pub price_per_mbf: u64,
    pub value: u64,
    pub priced_by_default: bool,
}

/// Volume and value of one species row across `acres`.
pub fn species_value(
    mix: &SpeciesMix,
    acres: f64,
    table: &SpeciesPriceTable,
) -> Result<SpeciesValue, ValuationError> {
    let acres = ensure_positive_acreage(acres)?;
    if !(0.0..=100.0).contains(&mix.pct) {
        return Err(ValuationError::PercentOutOfRange {
            species: mix.name.clone(),
            pct: mix.pct,
        });
    }
    if !mix.mbf_per_acre.is_finite() || mix.mbf_per_acre < 0.0 {
        return Err(ValuationError::InvalidYield {
            species: mix.name.clone(),
            mbf_per_acre: mix.mbf_per_acre,
        });
    }

    let overflow = || ValuationError::ValueOverflow {
        species: mix.name.clone(),
        acres,
    };
    let volume = (mix.mbf_per_acre * acres * (mix.pct / 100.0)).round();
    // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive
    if !volume.is_finite() || volume >= u64::MAX as f64 {
        return Err(overflow());
    }
    let volume_mbf = volume as u64;
    let price = table.lookup(&mix.name);
    let value = volume_mbf
        .checked_mul(price.price_per_mbf)
        .ok_or_else(overflow)?;
    Ok(SpeciesValue {
        name: mix.name.clone(),
        pct: mix.pct,
        mbf_per_acre: mix.mbf_per_acre,
        volume_mbf,
        price_per_mbf: price.price_per_mbf,
        value,
        priced_by_default: price.fallback,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesBreakdown {
    pub rows: Vec<SpeciesValue>,
    pub total_volume_mbf: u64,
    pub total_value: u64,
}

impl SpeciesBreakdown {
    pub fn defaulted_species(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|row| row.priced_by_default)
            .map(|row| row.name.as_str())
    }
}

/// Values every species row of `parcel`, in stand order.
pub fn species_breakdown(
    parcel: &Parcel,
    table: &SpeciesPriceTable,
) -> Result<SpeciesBreakdown, ValuationError> {
    let rows = parcel
        .species
        .iter()
        .map(|mix| species_value(mix, parcel.acres, table))
        .collect::<Result<Vec<_>, _>>()?;
    let overflow = || ValuationError::ValueOverflow {
        species: "total".into(),
        acres: parcel.acres,
    };
    let total_volume_mbf = rows
        .iter()
        .try_fold(0u64, |acc, row| acc.checked_add(row.volume_mbf))
        .ok_or_else(overflow)?;
    let total_value = rows
        .iter()
        .try_fold(0u64, |acc, row| acc.checked_add(row.value))
        .ok_or_else(overflow)?;
    Ok(SpeciesBreakdown {
        rows,
        total_volume_mbf,
        total_value,
    })
}
