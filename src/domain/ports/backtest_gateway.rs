use crate::domain::entities::backtest::{BacktestRequest, BacktestResult};
use crate::domain::error::DomainError;

/// Remote service that simulates a threshold strategy over index history.
#[async_trait::async_trait]
pub trait BacktestGateway: Send + Sync {
    async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, DomainError>;
}
