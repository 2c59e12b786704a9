use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market index the scores and backtests refer to. Wire names are mixed
/// case and must be sent exactly as listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexType {
    #[default]
    #[serde(rename = "SP500")]
    Sp500,
    #[serde(rename = "sp500_jpy")]
    Sp500Jpy,
    #[serde(rename = "TOPIX")]
    Topix,
    #[serde(rename = "NIKKEI")]
    Nikkei,
    #[serde(rename = "NIFTY50")]
    Nifty50,
    #[serde(rename = "ORUKAN")]
    Orukan,
    #[serde(rename = "orukan_jpy")]
    OrukanJpy,
}

impl IndexType {
    pub const ALL: [IndexType; 7] = [
        IndexType::Sp500,
        IndexType::Sp500Jpy,
        IndexType::Topix,
        IndexType::Nikkei,
        IndexType::Nifty50,
        IndexType::Orukan,
        IndexType::OrukanJpy,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            IndexType::Sp500 => "SP500",
            IndexType::Sp500Jpy => "sp500_jpy",
            IndexType::Topix => "TOPIX",
            IndexType::Nikkei => "NIKKEI",
            IndexType::Nifty50 => "NIFTY50",
            IndexType::Orukan => "ORUKAN",
            IndexType::OrukanJpy => "orukan_jpy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndexType::Sp500 => "S&P500",
            IndexType::Sp500Jpy => "S&P500（円建て）",
            IndexType::Topix => "TOPIX",
            IndexType::Nikkei => "日経225",
            IndexType::Nifty50 => "NIFTY50（インド）",
            IndexType::Orukan => "オルカン（全世界株式）",
            IndexType::OrukanJpy => "オルカン（全世界株式・円建て）",
        }
    }

    /// Heading of the price-trend chart.
    pub fn price_title(&self) -> &'static str {
        match self {
            IndexType::Sp500 => "S&P500 価格トレンド",
            IndexType::Sp500Jpy => "S&P500（円建て） 価格トレンド",
            IndexType::Topix => "TOPIX（円建て） 価格トレンド",
            IndexType::Nikkei => "日経225（円建て） 価格トレンド",
            IndexType::Nifty50 => "NIFTY50（インド株）価格トレンド",
            IndexType::Orukan => "オルカン（全世界株式）価格トレンド",
            IndexType::OrukanJpy => "オルカン（全世界株式・円建て）価格トレンド",
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for IndexType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(exact) = IndexType::ALL.iter().find(|i| i.wire_name() == s) {
            return Ok(*exact);
        }
        IndexType::ALL
            .iter()
            .find(|i| i.wire_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown index type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for idx in IndexType::ALL {
            let json = serde_json::to_string(&idx).unwrap();
            assert_eq!(json, format!("\"{}\"", idx.wire_name()));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sp500".parse::<IndexType>().unwrap(), IndexType::Sp500);
        assert_eq!("SP500_JPY".parse::<IndexType>().unwrap(), IndexType::Sp500Jpy);
        assert_eq!("topix".parse::<IndexType>().unwrap(), IndexType::Topix);
        assert!("dow".parse::<IndexType>().is_err());
    }

    #[test]
    fn test_default_is_sp500() {
        assert_eq!(IndexType::default(), IndexType::Sp500);
    }
}
