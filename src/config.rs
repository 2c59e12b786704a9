use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the scoring API, without trailing slash.
    pub api_base: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("uridoki/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Read `URIDOKI_*` variables, loading `.env` first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("URIDOKI_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let user_agent = lookup("URIDOKI_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        Self { api_base, user_agent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(config.user_agent.starts_with("uridoki/"));
    }

    #[test]
    fn test_api_base_is_trimmed() {
        let config = Config::from_lookup(lookup_from(&[(
            "URIDOKI_API_BASE",
            " https://uridoki.example.com/api/ ",
        )]));
        assert_eq!(config.api_base, "https://uridoki.example.com/api");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("URIDOKI_API_BASE", "   "),
            ("URIDOKI_USER_AGENT", ""),
        ]));
        assert_eq!(config, Config::default());
    }
}
