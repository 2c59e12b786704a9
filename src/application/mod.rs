pub mod assess;
pub mod backtest;
