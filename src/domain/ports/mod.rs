pub mod backtest_gateway;
