use std::time::Duration;

use crate::providers::{headhunter, superjob};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings read once at startup and handed to the providers.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub superjob_api_key: Option<String>,
    pub hh_base_url: String,
    pub superjob_base_url: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            superjob_api_key: None,
            hh_base_url: headhunter::DEFAULT_BASE_URL.to_string(),
            superjob_base_url: superjob::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        cfg.superjob_api_key = get(superjob::API_KEY_VAR);
        if let Some(base) = get("HH_BASE_URL") {
            cfg.hh_base_url = base;
        }
        if let Some(base) = get("SUPERJOB_BASE_URL") {
            cfg.superjob_base_url = base;
        }
        if let Some(timeout) = get("VACANCY_HTTP_TIMEOUT_SECS") {
            if let Ok(parsed) = timeout.parse::<u64>() {
                cfg.timeout = Duration::from_secs(parsed);
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.superjob_api_key, None);
        assert_eq!(cfg.hh_base_url, "https://api.hh.ru/vacancies");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_from_env() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("SUPERJOB_SECRET_KEY", "v3.r.123"),
            ("SUPERJOB_BASE_URL", "http://localhost:9000/"),
            ("VACANCY_HTTP_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(cfg.superjob_api_key.as_deref(), Some("v3.r.123"));
        assert_eq!(cfg.superjob_base_url, "http://localhost:9000/");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_keeps_default() {
        let cfg = AppConfig::from_lookup(lookup(&[("VACANCY_HTTP_TIMEOUT_SECS", "soon")]));
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }
}
