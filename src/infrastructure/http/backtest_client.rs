use crate::domain::entities::backtest::{BacktestRequest, BacktestResult};
use crate::domain::error::DomainError;
use crate::domain::ports::backtest_gateway::BacktestGateway;
use reqwest::Client;
use tracing::{debug, warn};

/// Posts backtest requests as JSON to `{api_base}/backtest`.
pub struct HttpBacktestClient {
    client: Client,
    api_base: String,
}

impl HttpBacktestClient {
    pub fn new(api_base: &str, user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent.to_string())
                .build()
                .unwrap_or_default(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/backtest", self.api_base)
    }
}

#[async_trait::async_trait]
impl BacktestGateway for HttpBacktestClient {
    async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, DomainError> {
        let url = self.endpoint();
        debug!(%url, "posting backtest request");

        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Network(format!("{url}: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            warn!(status, "backtest endpoint rejected request");
            return Err(DomainError::Backtest { status, body });
        }

        resp.json::<BacktestResult>()
            .await
            .map_err(|e| DomainError::Parse(format!("backtest response: {e}")))
    }
}
