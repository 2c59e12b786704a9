use serde::{Deserialize, Serialize};
use std::fmt;

/// A composite 0–100 valuation score computed upstream.
///
/// Construction rejects NaN, so every classifier can treat "absent" and
/// "not a number" the same way by normalizing through [`Score::from_raw`].
/// Values outside 0–100 are accepted; the bands are open-ended.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else {
            Some(Score(value))
        }
    }

    /// Normalize an optional raw reading. NaN collapses to `None`.
    pub fn from_raw(raw: Option<f64>) -> Option<Self> {
        raw.and_then(Score::new)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn at_least(&self, floor: f64) -> bool {
        self.0 >= floor
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
