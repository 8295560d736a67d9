//! Input errors raised by the valuation and species calculators

use thiserror::Error;

/// Inputs the valuation code refuses to compute with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("acreage must be positive, got {0}")]
    NonPositiveAcreage(f64),

    #[error("asking price must be positive, got {0}")]
    NonPositiveAskingPrice(f64),

    #[error("timber value must be finite and non-negative, got {0}")]
    InvalidTimberValue(f64),

    #[error("species '{species}' value overflows at {acres} acres")]
    ValueOverflow { species: String, acres: f64 },

    #[error("species '{species}' has stand percentage {pct} outside 0..=100")]
    PercentOutOfRange { species: String, pct: f64 },

    #[error("species '{species}' has invalid yield {mbf_per_acre} MBF/acre")]
    InvalidYield { species: String, mbf_per_acre: f64 },
}

pub(crate) fn ensure_positive_acreage(acres: f64) -> Result<f64, ValuationError> {
    if acres.is_finite() && acres > 0.0 {
        Ok(acres)
    } else {
        Err(ValuationError::NonPositiveAcreage(acres))
    }
}

pub(crate) fn ensure_positive_price(price: f64) -> Result<f64, ValuationError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(ValuationError::NonPositiveAskingPrice(price))
    }
}

pub(crate) fn ensure_timber_value(value: f64) -> Result<f64, ValuationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValuationError::InvalidTimberValue(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_nan_acreage() {
        assert_eq!(
            ensure_positive_acreage(0.0),
            Err(ValuationError::NonPositiveAcreage(0.0))
        );
        assert!(ensure_positive_acreage(f64::NAN).is_err());
        assert_eq!(ensure_positive_acreage(74.0), Ok(74.0));
    }

    #[test]
    fn timber_value_may_be_zero_but_not_nan() {
        assert_eq!(ensure_timber_value(0.0), Ok(0.0));
        assert!(ensure_timber_value(f64::NAN).is_err());
        assert_eq!(
            ensure_timber_value(-1.0),
            Err(ValuationError::InvalidTimberValue(-1.0))
        );
        assert!(ensure_timber_value(f64::INFINITY).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ValuationError::PercentOutOfRange {
            species: "Hemlock".into(),
            pct: 120.0,
        };
        assert!(err.to_string().contains("Hemlock"));
        assert!(ensure_positive_price(-1.0)
            .unwrap_err()
            .to_string()
            .contains("asking price"));
    }
}
