use crate::domain::values::alert_state::{alert_state, AlertState};
use crate::domain::values::decision::{decide_sell_action, derive_decision, Decision};
use crate::domain::values::score::Score;
use crate::domain::values::score_badge::{ScoreBadge, SignalLight};
use crate::domain::values::score_zone::score_zone_text;
use serde::Serialize;

/// Everything the dashboard shows for one score reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// `None` when the score was missing or NaN.
    pub score: Option<f64>,
    pub decision: Decision,
    pub sell_action: Decision,
    pub alert: AlertState,
    pub zone_text: &'static str,
    pub badge: ScoreBadge,
    pub signal: SignalLight,
}

#[derive(Default)]
pub struct AssessUseCase;

impl AssessUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, score: Option<f64>) -> Assessment {
        let decision = derive_decision(score);
        Assessment {
            score: Score::from_raw(score).map(|s| s.value()),
            decision,
            sell_action: decide_sell_action(score),
            alert: alert_state(score),
            zone_text: score_zone_text(score),
            badge: ScoreBadge::for_score(score),
            signal: SignalLight::for_decision(decision),
        }
    }
}
