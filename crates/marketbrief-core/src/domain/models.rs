use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// One instrument's session prices, as fetched from a price source.
///
/// Immutable once constructed; lives only for the duration of one report
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub symbol: Symbol,
    pub open: f64,
    pub close: f64,
}

impl PriceObservation {
    pub fn new(symbol: Symbol, open: f64, close: f64) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("close", close)?;

        Ok(Self {
            symbol,
            open,
            close,
        })
    }
}

/// A session change derived from a [`PriceObservation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedChange {
    pub symbol: Symbol,
    pub open: f64,
    pub close: f64,
    pub percent_change: f64,
}

impl RankedChange {
    /// Computes `(close - open) / open * 100`.
    ///
    /// A zero open price yields a zero percent change; this is a documented
    /// edge case, not an error.
    pub fn from_observation(observation: &PriceObservation) -> Self {
        let percent_change = if observation.open == 0.0 {
            0.0
        } else {
            (observation.close - observation.open) / observation.open * 100.0
        };

        Self {
            symbol: observation.symbol.clone(),
            open: observation.open,
            close: observation.close,
            percent_change,
        }
    }

    /// Absolute session change in price units.
    pub fn change(&self) -> f64 {
        self.close - self.open
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
