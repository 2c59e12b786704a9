pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::assess::{AssessUseCase, Assessment};
use crate::application::backtest::BacktestUseCase;
use crate::config::Config;
use crate::domain::entities::backtest::{BacktestRequest, BacktestResult};
use crate::domain::entities::event::{display_events, EventDetails, MarketEvent};
use crate::domain::error::DomainError;
use crate::domain::ports::backtest_gateway::BacktestGateway;
use crate::domain::values::macro_indicator::{macro_cards, MacroCard, MacroPercentiles};
use crate::infrastructure::http::backtest_client::HttpBacktestClient;
use std::sync::Arc;

pub struct Uridoki {
    assess_uc: AssessUseCase,
    backtest_uc: BacktestUseCase,
}

impl Uridoki {
    pub fn new(config: &Config) -> Self {
        let gateway: Arc<dyn BacktestGateway> =
            Arc::new(HttpBacktestClient::new(&config.api_base, &config.user_agent));
        Self::with_gateway(gateway)
    }

    pub fn with_gateway(gateway: Arc<dyn BacktestGateway>) -> Self {
        Self {
            assess_uc: AssessUseCase::new(),
            backtest_uc: BacktestUseCase::new(gateway),
        }
    }

    // Delegating methods
    pub fn assess(&self, score: Option<f64>) -> Assessment {
        self.assess_uc.assess(score)
    }

    pub async fn run_backtest(&self, request: &BacktestRequest) -> Result<BacktestResult, DomainError> {
        self.backtest_uc.run(request).await
    }

    pub fn macro_cards(&self, details: Option<&MacroPercentiles>) -> Vec<MacroCard> {
        macro_cards(details)
    }

    pub fn events(&self, details: Option<&EventDetails>) -> Vec<MarketEvent> {
        display_events(details)
    }
}
