use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moving-average window the score is computed over, shown to the user as a
/// short / medium / long-term "lens".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ScoreMa {
    Ma20,
    Ma60,
    #[default]
    Ma200,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Persona {
    pub label: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
    pub copy_title: &'static str,
    pub copy_body: &'static str,
}

impl ScoreMa {
    /// Order on the time-horizon scale, shortest first.
    pub const ORDER: [ScoreMa; 3] = [ScoreMa::Ma20, ScoreMa::Ma60, ScoreMa::Ma200];

    /// Lens used for the avatar when nothing is selected.
    pub const AVATAR_DEFAULT: ScoreMa = ScoreMa::Ma60;

    pub fn days(&self) -> u32 {
        match self {
            ScoreMa::Ma20 => 20,
            ScoreMa::Ma60 => 60,
            ScoreMa::Ma200 => 200,
        }
    }

    pub fn persona(&self) -> Persona {
        match self {
            ScoreMa::Ma20 => Persona {
                label: "短期",
                duration: "2〜6週間",
                icon: "⏱",
                copy_title: "短期視点（2〜6週）",
                copy_body: "今の動きに素早く反応します。短いサイクルの売却を検討するレンズです。",
            },
            ScoreMa::Ma60 => Persona {
                label: "中期",
                duration: "1〜3か月",
                icon: "📅",
                copy_title: "中期視点（1〜3か月）",
                copy_body: "流れを見て判断します。バランスの取れた売却目安を示すレンズです。",
            },
            ScoreMa::Ma200 => Persona {
                label: "長期",
                duration: "3か月〜1年",
                icon: "🧭",
                copy_title: "長期視点（3か月〜1年）",
                copy_body: "大局を重視します。ゆったりと利確タイミングを計るレンズです。",
            },
        }
    }

    /// Lens whose avatar is shown: the active one, else the default.
    pub fn avatar_lens(active: Option<ScoreMa>) -> ScoreMa {
        active.unwrap_or(Self::AVATAR_DEFAULT)
    }

    pub fn avatar_sprite(&self) -> String {
        format!("/assets/uridoki-kun-sprite_MA{}.png", self.days())
    }

    pub fn avatar_alt(&self) -> String {
        format!("売り時くん（MA{}スプライト）", self.days())
    }

    fn position(&self) -> usize {
        match self {
            ScoreMa::Ma20 => 0,
            ScoreMa::Ma60 => 1,
            ScoreMa::Ma200 => 2,
        }
    }

    /// Fill of the time-horizon track when this lens is active, in percent.
    pub fn progress_pct(&self) -> f64 {
        self.position() as f64 / (Self::ORDER.len() - 1) as f64 * 100.0
    }
}

impl fmt::Display for ScoreMa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MA{}", self.days())
    }
}

impl TryFrom<u32> for ScoreMa {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            20 => Ok(ScoreMa::Ma20),
            60 => Ok(ScoreMa::Ma60),
            200 => Ok(ScoreMa::Ma200),
            _ => Err(format!("Unsupported score MA window: {days} (expected 20, 60 or 200)")),
        }
    }
}

impl From<ScoreMa> for u32 {
    fn from(ma: ScoreMa) -> Self {
        ma.days()
    }
}

impl FromStr for ScoreMa {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches("MA").trim_start_matches("ma");
        let days: u32 = digits
            .parse()
            .map_err(|_| format!("Invalid score MA window: {s}"))?;
        ScoreMa::try_from(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_along_scale() {
        assert_eq!(ScoreMa::Ma20.progress_pct(), 0.0);
        assert_eq!(ScoreMa::Ma60.progress_pct(), 50.0);
        assert_eq!(ScoreMa::Ma200.progress_pct(), 100.0);
    }

    #[test]
    fn test_avatar_paths() {
        assert_eq!(
            ScoreMa::AVATAR_DEFAULT.avatar_sprite(),
            "/assets/uridoki-kun-sprite_MA60.png"
        );
        assert_eq!(ScoreMa::Ma200.avatar_alt(), "売り時くん（MA200スプライト）");
    }

    #[test]
    fn test_avatar_lens_falls_back_to_default() {
        assert_eq!(ScoreMa::avatar_lens(None), ScoreMa::Ma60);
        assert_eq!(ScoreMa::avatar_lens(Some(ScoreMa::Ma20)), ScoreMa::Ma20);
        assert_eq!(
            ScoreMa::avatar_lens(Some(ScoreMa::Ma200)).avatar_sprite(),
            "/assets/uridoki-kun-sprite_MA200.png"
        );
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("20".parse::<ScoreMa>().unwrap(), ScoreMa::Ma20);
        assert_eq!("MA200".parse::<ScoreMa>().unwrap(), ScoreMa::Ma200);
        assert!("50".parse::<ScoreMa>().is_err());
        assert!("abc".parse::<ScoreMa>().is_err());
    }

    #[test]
    fn test_serializes_as_days() {
        assert_eq!(serde_json::to_string(&ScoreMa::Ma60).unwrap(), "60");
        let back: ScoreMa = serde_json::from_str("200").unwrap();
        assert_eq!(back, ScoreMa::Ma200);
        assert!(serde_json::from_str::<ScoreMa>("7").is_err());
    }
}
