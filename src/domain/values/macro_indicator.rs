use serde::{Deserialize, Serialize};

/// Macro percentiles over the last ten years, as delivered by the evaluate
/// endpoint. `M` is the composite macro score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentiles {
    pub p_r: f64,
    pub p_cpi: f64,
    pub p_vix: f64,
    #[serde(rename = "M")]
    pub m: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroIndicator {
    /// US 10-year treasury yield.
    Rate,
    Cpi,
    Vix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroCard {
    pub indicator: MacroIndicator,
    pub title: &'static str,
    pub color: &'static str,
    pub percentile_display: i64,
    pub band_label: &'static str,
}

impl MacroIndicator {
    pub const ALL: [MacroIndicator; 3] =
        [MacroIndicator::Rate, MacroIndicator::Cpi, MacroIndicator::Vix];

    pub fn title(&self) -> &'static str {
        match self {
            MacroIndicator::Rate => "米10年債利回り",
            MacroIndicator::Cpi => "インフレ (CPI)",
            MacroIndicator::Vix => "VIX",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MacroIndicator::Rate => "#f97316",
            MacroIndicator::Cpi => "#a855f7",
            MacroIndicator::Vix => "#22d3ee",
        }
    }

    /// Low / middle / high wording.
    pub fn band_labels(&self) -> [&'static str; 3] {
        match self {
            MacroIndicator::Rate => ["低め", "ふつう", "高め"],
            MacroIndicator::Cpi => ["鈍化", "中立", "加速"],
            MacroIndicator::Vix => ["穏やか", "注意", "警戒"],
        }
    }

    pub fn percentile(&self, details: &MacroPercentiles) -> f64 {
        match self {
            MacroIndicator::Rate => details.p_r,
            MacroIndicator::Cpi => details.p_cpi,
            MacroIndicator::Vix => details.p_vix,
        }
    }

    pub fn card(&self, details: Option<&MacroPercentiles>) -> MacroCard {
        let percentile = details.map(|d| self.percentile(d));
        MacroCard {
            indicator: *self,
            title: self.title(),
            color: self.color(),
            percentile_display: percentile_display(percentile),
            band_label: self.band_labels()[band_index(percentile)],
        }
    }
}

/// Tercile of a 0–1 percentile. Missing readings sit in the middle band;
/// out-of-range readings clamp to the nearest band.
pub fn band_index(percentile: Option<f64>) -> usize {
    match percentile.filter(|p| !p.is_nan()) {
        None => 1,
        Some(p) => (p * 3.0).floor().clamp(0.0, 2.0) as usize,
    }
}

/// Percentile as a whole-number "%tile". Halves round toward +inf.
pub fn percentile_display(percentile: Option<f64>) -> i64 {
    let p = percentile.filter(|p| p.is_finite()).unwrap_or(0.0);
    (p * 100.0 + 0.5).floor() as i64
}

pub fn macro_cards(details: Option<&MacroPercentiles>) -> Vec<MacroCard> {
    MacroIndicator::ALL.iter().map(|i| i.card(details)).collect()
}
