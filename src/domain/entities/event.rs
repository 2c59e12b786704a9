use chrono::{DateTime, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_EVENT_SOURCE: &str = "local heuristic calendar";

const JST_OFFSET_HOURS: i64 = 9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEvent {
    pub name: String,
    pub importance: u8,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl MarketEvent {
    pub fn new(name: &str, importance: u8, date: &str) -> Self {
        Self {
            name: name.to_string(),
            importance,
            date: date.to_string(),
            source: None,
        }
    }

    /// Calendar date of the event in JST, `None` if unparseable. Timestamps
    /// are shifted to +09:00 first; plain dates are taken as JST dates.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.date) {
            let jst = dt.naive_utc() + Duration::hours(JST_OFFSET_HOURS);
            return Some(jst.date());
        }
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => self.date.clone(),
        }
    }

    pub fn display_jst(&self) -> String {
        format!("{} (JST)", self.display_date())
    }

    pub fn source_or_default(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_EVENT_SOURCE)
    }
}

/// Event calendar block of the evaluate response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default)]
    pub events: Vec<MarketEvent>,
    #[serde(default)]
    pub effective_event: Option<MarketEvent>,
    #[serde(rename = "E_adj", default)]
    pub e_adj: f64,
}

fn placeholder_events() -> Vec<MarketEvent> {
    vec![
        MarketEvent::new("FOMC", 5, "2025-03-03"),
        MarketEvent::new("雇用統計", 3, "2025-03-07"),
    ]
}

impl EventDetails {
    /// Events to show: the full list, else the effective event alone, else
    /// a placeholder calendar.
    pub fn display_events(&self) -> Vec<MarketEvent> {
        let real = self.real_events();
        if real.is_empty() {
            return placeholder_events();
        }
        trace_events(&real);
        real
    }

    fn real_events(&self) -> Vec<MarketEvent> {
        if !self.events.is_empty() {
            return self.events.clone();
        }
        self.effective_event.iter().cloned().collect()
    }
}

/// Same lookup for a response that may lack the block entirely.
pub fn display_events(details: Option<&EventDetails>) -> Vec<MarketEvent> {
    match details {
        Some(d) => d.display_events(),
        None => placeholder_events(),
    }
}

fn trace_events(events: &[MarketEvent]) {
    for event in events {
        info!(
            name = %event.name,
            source = %event.source_or_default(),
            raw_date = %event.date,
            parsed_date = %event.display_date(),
            display_jst = %event.display_jst(),
            "event trace"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_from_jst_timestamp() {
        let e = MarketEvent::new("CPI", 4, "2025-03-12T00:00:00+09:00");
        assert_eq!(e.display_date(), "2025-03-12");
        assert_eq!(e.display_jst(), "2025-03-12 (JST)");
    }

    #[test]
    fn test_utc_timestamp_crosses_into_next_jst_day() {
        let e = MarketEvent::new("CPI", 4, "2025-03-11T20:00:00Z");
        assert_eq!(e.display_jst(), "2025-03-12 (JST)");

        let e = MarketEvent::new("FOMC", 5, "2025-03-19T14:59:00-00:00");
        assert_eq!(e.display_date(), "2025-03-19");

        let e = MarketEvent::new("NFP", 3, "2025-03-07T08:30:00-05:00");
        assert_eq!(e.display_date(), "2025-03-07");
    }

    #[test]
    fn test_unparseable_date_shown_verbatim() {
        let e = MarketEvent::new("???", 1, "next week");
        assert_eq!(e.parsed_date(), None);
        assert_eq!(e.display_date(), "next week");
    }

    #[test]
    fn test_source_default() {
        let mut e = MarketEvent::new("FOMC", 5, "2025-03-03");
        assert_eq!(e.source_or_default(), DEFAULT_EVENT_SOURCE);
        e.source = Some("fed.gov".into());
        assert_eq!(e.source_or_default(), "fed.gov");
    }
}
