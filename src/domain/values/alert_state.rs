use crate::domain::values::decision::{derive_decision, Decision, STRONG_TAKE_PROFIT_FLOOR};
use crate::domain::values::score::Score;
use serde::Serialize;

/// Decision bundled with the copy shown in the alert banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertState {
    pub decision: Decision,
    pub title: &'static str,
    pub message: &'static str,
    pub reaction: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub face: &'static str,
}

struct AlertCopy {
    title: &'static str,
    message: &'static str,
    reaction: &'static str,
    color: &'static str,
    icon: &'static str,
    face: &'static str,
}

impl AlertCopy {
    fn with_decision(&self, decision: Decision) -> AlertState {
        AlertState {
            decision,
            title: self.title,
            message: self.message,
            reaction: self.reaction,
            color: self.color,
            icon: self.icon,
            face: self.face,
        }
    }
}

const TAKE_PROFIT: AlertCopy = AlertCopy {
    title: "利確してOKな水準です",
    message: "株価は長期平均より上振れています。利益確定を積極的に検討できるゾーンです。",
    reaction: "いまが利確チャンス。どこで収穫するか作戦会議しましょう。",
    color: "#E4F6E8",
    icon: "🟢",
    face: "😄",
};

const STRONG_TAKE_PROFIT: AlertCopy = AlertCopy {
    title: "利確を強く推奨します",
    message: "スコアが高水準です。利益確定を強く検討してください。",
    reaction: "勢いに乗っている今のうちに、利確の計画を立てましょう。",
    color: "#DCF2E3",
    icon: "🟢",
    face: "😎",
};

const WAIT: AlertCopy = AlertCopy {
    title: "今は様子見で大丈夫です",
    message: "株価と環境は平均的。慌てず動向を見守るフェーズです。",
    reaction: "穏やかなレンジ。タイミングを待ちましょう。",
    color: "#FFF7E0",
    icon: "🟡",
    face: "( ˘ω˘ )",
};

const HOLD_OR_BUY: AlertCopy = AlertCopy {
    title: "まだ売らずに保有寄りです",
    message: "株価は割安寄り。中長期ではホールドや買い増しで育てる局面です。",
    reaction: "熟成中のゾーン。じっくり寝かせて育てましょう。",
    color: "#F7E6E6",
    icon: "🔴",
    face: "😌",
};

fn copy_for(decision: Decision) -> &'static AlertCopy {
    match decision {
        Decision::TakeProfit => &TAKE_PROFIT,
        Decision::Wait => &WAIT,
        Decision::HoldOrBuy => &HOLD_OR_BUY,
    }
}

/// Alert banner state for a score.
///
/// The table entry for the derived decision is used, except that a
/// take-profit score of 80 or more gets the stronger wording.
pub fn alert_state(score: Option<f64>) -> AlertState {
    let decision = derive_decision(score);
    let strong = decision == Decision::TakeProfit
        && Score::from_raw(score).is_some_and(|s| s.at_least(STRONG_TAKE_PROFIT_FLOOR));

    if strong {
        return STRONG_TAKE_PROFIT.with_decision(decision);
    }
    copy_for(decision).with_decision(decision)
}
