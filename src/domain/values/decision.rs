use crate::domain::values::score::Score;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score at or above which profit taking is recommended.
pub const TAKE_PROFIT_FLOOR: f64 = 60.0;
/// Score at or above which the user should wait rather than add.
pub const WAIT_FLOOR: f64 = 40.0;
/// Score at or above which the take-profit recommendation becomes "strong".
pub const STRONG_TAKE_PROFIT_FLOOR: f64 = 80.0;

/// Recommended user action for a score.
///
/// Variants are declared in ascending order so `Ord` follows the rank
/// HoldOrBuy < Wait < TakeProfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    HoldOrBuy,
    Wait,
    TakeProfit,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::HoldOrBuy, Decision::Wait, Decision::TakeProfit];

    pub fn rank(&self) -> u8 {
        match self {
            Decision::HoldOrBuy => 0,
            Decision::Wait => 1,
            Decision::TakeProfit => 2,
        }
    }

    /// Accessible label of the traffic-light widget.
    pub fn signal_label(&self) -> &'static str {
        match self {
            Decision::TakeProfit => "利確シグナル",
            Decision::HoldOrBuy => "保有シグナル",
            Decision::Wait => "様子見シグナル",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::TakeProfit => write!(f, "TAKE_PROFIT"),
            Decision::Wait => write!(f, "WAIT"),
            Decision::HoldOrBuy => write!(f, "HOLD_OR_BUY"),
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "TAKE_PROFIT" => Ok(Decision::TakeProfit),
            "WAIT" => Ok(Decision::Wait),
            "HOLD_OR_BUY" => Ok(Decision::HoldOrBuy),
            _ => Err(format!("Unknown decision: {s}")),
        }
    }
}

/// Primary decision rule used by the dashboard and the alert banner.
/// Missing or NaN scores fall back to `Wait`.
pub fn derive_decision(score: Option<f64>) -> Decision {
    match Score::from_raw(score) {
        None => Decision::Wait,
        Some(s) if s.at_least(TAKE_PROFIT_FLOOR) => Decision::TakeProfit,
        Some(s) if s.at_least(WAIT_FLOOR) => Decision::Wait,
        Some(_) => Decision::HoldOrBuy,
    }
}

/// Sell-action rule of the position panel.
///
/// Shares the 60/40 bands with [`derive_decision`] but defaults to
/// `HoldOrBuy` when the score is missing or NaN.
pub fn decide_sell_action(score: Option<f64>) -> Decision {
    let Some(s) = Score::from_raw(score) else {
        return Decision::HoldOrBuy;
    };
    if s.at_least(STRONG_TAKE_PROFIT_FLOOR) {
        return Decision::TakeProfit;
    }
    if s.at_least(TAKE_PROFIT_FLOOR) {
        return Decision::TakeProfit;
    }
    if s.at_least(WAIT_FLOOR) {
        return Decision::Wait;
    }
    Decision::HoldOrBuy
}
