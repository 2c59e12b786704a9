use crate::domain::values::score::Score;

pub const CALCULATING: &str = "スコアの計算中です。";

const BANDS: [(f64, &str); 4] = [
    (80.0, "現在のスコアは「かなり高い水準」です。"),
    (60.0, "現在のスコアは「やや高めの水準」です。"),
    (40.0, "現在のスコアは「平均的な水準」です。"),
    (20.0, "現在のスコアは「やや低めの水準」です。"),
];

const LOWEST: &str = "現在のスコアは「かなり低い水準」です。";

/// One-line description of where a score sits. Missing and NaN scores
/// read as still being calculated. NaN never falls into the lowest band.
pub fn score_zone_text(score: Option<f64>) -> &'static str {
    let Some(s) = Score::from_raw(score) else {
        return CALCULATING;
    };
    BANDS
        .iter()
        .find(|(floor, _)| s.at_least(*floor))
        .map(|(_, text)| *text)
        .unwrap_or(LOWEST)
}
