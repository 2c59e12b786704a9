pub mod backtest;
pub mod event;
