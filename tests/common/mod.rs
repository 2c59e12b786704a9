//! Shared test helpers.
#![allow(dead_code)]

use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uridoki::domain::entities::backtest::{BacktestRequest, BacktestResult, ValuePoint};
use uridoki::domain::error::DomainError;
use uridoki::domain::ports::backtest_gateway::BacktestGateway;
use uridoki::Uridoki;

/// Gateway that answers from memory and remembers what it was asked.
pub struct StubGateway {
    result: Option<BacktestResult>,
    calls: AtomicUsize,
    last_request: Mutex<Option<BacktestRequest>>,
}

impl StubGateway {
    pub fn ok(result: BacktestResult) -> Self {
        Self {
            result: Some(result),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always fails with a 500.
    pub fn failing() -> Self {
        Self {
            result: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<BacktestRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BacktestGateway for StubGateway {
    async fn run(&self, request: &BacktestRequest) -> Result<BacktestResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.result {
            Some(r) => Ok(r.clone()),
            None => Err(DomainError::Backtest {
                status: 500,
                body: "stub failure".into(),
            }),
        }
    }
}

pub fn setup_with(gateway: Arc<StubGateway>) -> Uridoki {
    Uridoki::with_gateway(gateway)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn sample_request() -> BacktestRequest {
    BacktestRequest::new(date("2020-01-01"), date("2024-12-31"), 1_000_000.0)
}

pub fn sample_result() -> BacktestResult {
    BacktestResult {
        final_value: 1_480_000.0,
        buy_and_hold_final: 1_520_000.0,
        total_return_pct: 48.0,
        max_drawdown_pct: -18.3,
        trade_count: 6,
        cagr_pct: Some(8.2),
        portfolio_history: Some(vec![
            ValuePoint { date: "2020-01-01".into(), value: 1_000_000.0 },
            ValuePoint { date: "2024-12-31".into(), value: 1_480_000.0 },
        ]),
        buy_hold_history: None,
        trades: None,
    }
}
