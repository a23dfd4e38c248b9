use std::fmt;

/// Failures of a single search request.
///
/// `Transport` and `Http` are request-level and only cost the current
/// language; `Structural` means the provider broke its response contract.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Transport { url: String, message: String, timeout: bool },
    Http { url: String, status: u16 },
    Structural(String),
}

impl FetchError {
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        FetchError::Transport { url: url.to_string(), message: err.to_string(), timeout: err.is_timeout() }
    }

    pub fn missing_field(field: &str) -> Self {
        FetchError::Structural(format!("missing field `{field}`"))
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        FetchError::Structural(format!("field `{field}` is not {expected}"))
    }

    /// Errors the run loop absorbs by skipping the language.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, FetchError::Transport { .. } | FetchError::Http { .. })
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, message, timeout: true } => write!(f, "request to {url} timed out: {message}"),
            FetchError::Transport { url, message, .. } => write!(f, "unable to reach {url}: {message}"),
            FetchError::Http { url, status } => write!(f, "http status {status} from {url}"),
            FetchError::Structural(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingApiKey(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingApiKey(var) => write!(f, "{var} is not set; please provide an API key"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_are_distinguished() {
        let http = FetchError::Http { url: "https://api.hh.ru/vacancies".into(), status: 503 };
        let transport = FetchError::Transport { url: "x".into(), message: "dns".into(), timeout: false };
        assert!(http.is_request_failure());
        assert!(transport.is_request_failure());
        assert!(!FetchError::missing_field("items").is_request_failure());
        assert_eq!(format!("{http}"), "http status 503 from https://api.hh.ru/vacancies");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = ConfigError::MissingApiKey("SUPERJOB_SECRET_KEY");
        assert!(err.to_string().starts_with("SUPERJOB_SECRET_KEY is not set"));
    }
}
