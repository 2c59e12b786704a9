use crate::domain::entities::backtest::{BacktestRequest, BacktestResult};
use crate::domain::error::DomainError;
use crate::domain::ports::backtest_gateway::BacktestGateway;
use std::sync::Arc;
use tracing::{info, warn};

pub struct BacktestUseCase {
    gateway: Arc<dyn BacktestGateway>,
}

impl BacktestUseCase {
    pub fn new(gateway: Arc<dyn BacktestGateway>) -> Self {
        Self { gateway }
    }

    /// Validate locally, then hand the request to the backtest service.
    /// Invalid requests never reach the gateway.
    pub async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, DomainError> {
        request.validate().map_err(DomainError::InvalidInput)?;

        info!(
            index = %request.index_type,
            score_ma = %request.score_ma,
            start = %request.start_date,
            end = %request.end_date,
            sell_threshold = request.sell_threshold,
            buy_threshold = request.buy_threshold,
            "running backtest"
        );

        match self.gateway.run(request).await {
            Ok(result) => {
                info!(
                    final_value = result.final_value,
                    buy_and_hold_final = result.buy_and_hold_final,
                    trade_count = result.trade_count,
                    "backtest finished"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "backtest failed");
                Err(e)
            }
        }
    }
}
