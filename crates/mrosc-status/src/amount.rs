//! Monetary field decoding.
//!
//! Backend numeric columns arrive as JSON numbers, numeric strings or `null`,
//! and are sometimes missing entirely. [`Amount`] absorbs all of those so
//! aggregation never sees NaN or an error.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary value where anything unusable counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Amount(Option<f64>);

impl Amount {
    pub const ZERO: Amount = Amount(None);

    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Amount(Some(value))
        } else {
            Amount(None)
        }
    }

    /// The value, or `0.0` when absent.
    pub fn value(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    pub fn is_present(self) -> bool {
        self.0.is_some()
    }
}

/// Running monetary total that saturates at the largest finite `f64`
/// instead of reaching infinity, which JSON cannot carry.
pub(crate) fn saturating_total(total: f64, value: f64) -> f64 {
    (total + value).clamp(f64::MIN, f64::MAX)
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawAmount>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawAmount::Number(value)) => Amount::new(value),
            Some(RawAmount::Text(text)) => text
                .trim()
                .parse::<f64>()
                .map(Amount::new)
                .unwrap_or(Amount::ZERO),
            Some(RawAmount::Other(_)) | None => Amount::ZERO,
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
