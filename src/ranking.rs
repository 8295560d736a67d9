//! Parcel ordering by a selectable key

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::parcel::Parcel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Composite score, highest first.
    Score,
    /// Asking price, cheapest first.
    Price,
    /// Acreage, largest first.
    Acres,
    /// Timber value, highest first.
    Value,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Score, SortKey::Price, SortKey::Acres, SortKey::Value];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Price => "price",
            SortKey::Acres => "acres",
            SortKey::Value => "value",
        }
    }

    fn compare(self, a: &Parcel, b: &Parcel) -> Ordering {
        match self {
            SortKey::Score => cmp_key(b.score, a.score),
            SortKey::Price => cmp_key(a.asking_price, b.asking_price),
            SortKey::Acres => cmp_key(b.acres, a.acres),
            SortKey::Value => cmp_key(b.timber_value, a.timber_value),
        }
    }
}

/// Total order where `-0.0` and `0.0` tie.
fn cmp_key(a: f64, b: f64) -> Ordering {
    // adding 0.0 turns -0.0 into 0.0 and leaves every other value alone
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}'")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Stable sort of `parcels` by `key` into a new sequence; equal keys keep
/// their input order and the input slice is untouched.
pub fn rank(parcels: &[Parcel], key: SortKey) -> Vec<&Parcel> {
    let mut ordered: Vec<&Parcel> = parcels.iter().collect();
    ordered.sort_by(|a, b| key.compare(a, b));
    ordered
}

/// Ranks by a key name as received from a caller. An unknown name keeps the
/// input order and is logged rather than treated as an error.
pub fn rank_by_name<'a>(parcels: &'a [Parcel], key: &str) -> Vec<&'a Parcel> {
    match key.parse::<SortKey>() {
        Ok(key) => rank(parcels, key),
        Err(err) => {
            warn!(%err, "keeping catalog order");
            parcels.iter().collect()
        }
    }
}
