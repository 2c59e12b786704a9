use crate::domain::values::decision::Decision;
use serde::Serialize;

/// Round colored badge next to the headline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBadge {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl ScoreBadge {
    /// Missing or NaN scores render as 0, i.e. the lowest badge.
    pub fn for_score(score: Option<f64>) -> Self {
        let s = score.filter(|v| !v.is_nan()).unwrap_or(0.0);
        if s >= 80.0 {
            ScoreBadge { color: "#22c55e", icon: "🟢", label: "高スコア" }
        } else if s >= 60.0 {
            ScoreBadge { color: "#3b82f6", icon: "🔵", label: "やや高め" }
        } else if s >= 40.0 {
            ScoreBadge { color: "#facc15", icon: "🟡", label: "平均" }
        } else {
            ScoreBadge { color: "#ef4444", icon: "🔴", label: "低め" }
        }
    }

    pub fn aria_label(&self) -> String {
        format!("スコアバッジ: {}", self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lamp {
    Red,
    Yellow,
    Green,
}

impl Lamp {
    pub fn color(&self) -> &'static str {
        match self {
            Lamp::Red => "#ff4f4f",
            Lamp::Yellow => "#f4c542",
            Lamp::Green => "#2ecc71",
        }
    }
}

/// Three-lamp traffic light; exactly one lamp is lit per decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalLight {
    pub label: &'static str,
    pub lit: Lamp,
    /// Color of the lit lamp.
    pub color: &'static str,
}

impl SignalLight {
    pub const LAMPS: [Lamp; 3] = [Lamp::Red, Lamp::Yellow, Lamp::Green];

    pub fn for_decision(decision: Decision) -> Self {
        let lit = match decision {
            Decision::HoldOrBuy => Lamp::Red,
            Decision::Wait => Lamp::Yellow,
            Decision::TakeProfit => Lamp::Green,
        };
        SignalLight {
            label: decision.signal_label(),
            lit,
            color: lit.color(),
        }
    }

    pub fn is_lit(&self, lamp: Lamp) -> bool {
        self.lit == lamp
    }
}
