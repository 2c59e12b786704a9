use crate::domain::values::index_type::IndexType;
use crate::domain::values::score_ma::ScoreMa;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SELL_THRESHOLD: f64 = 80.0;
pub const DEFAULT_BUY_THRESHOLD: f64 = 40.0;

/// Parameters of a threshold strategy simulation run by the backtest service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub initial_cash: f64,
    pub sell_threshold: f64,
    pub buy_threshold: f64,
    pub index_type: IndexType,
    pub score_ma: ScoreMa,
}

impl BacktestRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, initial_cash: f64) -> Self {
        Self {
            start_date,
            end_date,
            initial_cash,
            sell_threshold: DEFAULT_SELL_THRESHOLD,
            buy_threshold: DEFAULT_BUY_THRESHOLD,
            index_type: IndexType::default(),
            score_ma: ScoreMa::default(),
        }
    }

    /// Describe the first problem with this request, if any.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_date > self.end_date {
            return Err(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            ));
        }
        if !self.initial_cash.is_finite() || self.initial_cash <= 0.0 {
            return Err(format!(
                "initial_cash must be a positive amount, got {}",
                self.initial_cash
            ));
        }
        for (name, value) in [
            ("sell_threshold", self.sell_threshold),
            ("buy_threshold", self.buy_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("{name} must be between 0 and 100, got {value}"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub action: String,
    pub date: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub final_value: f64,
    pub buy_and_hold_final: f64,
    pub total_return_pct: f64,
    pub max_drawdown_pct: f64,
    pub trade_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cagr_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_history: Option<Vec<ValuePoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_hold_history: Option<Vec<ValuePoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<TradeRecord>>,
}

impl BacktestResult {
    /// Strategy value minus buy-and-hold value at the end of the period.
    pub fn excess_return(&self) -> f64 {
        self.final_value - self.buy_and_hold_final
    }

    pub fn beat_buy_and_hold(&self) -> bool {
        self.excess_return() > 0.0
    }
}
