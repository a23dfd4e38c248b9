use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::error::FetchError;

pub type Params = Vec<(&'static str, String)>;

/// GET a URL with query parameters and headers and decode the body as JSON.
#[allow(async_fn_in_trait)]
pub trait JsonFetcher {
    async fn fetch_json(&self, url: &str, query: &Params, headers: &Params) -> Result<Value, FetchError>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    async fn fetch_json(&self, url: &str, query: &Params, headers: &Params) -> Result<Value, FetchError> {
        (**self).fetch_json(url, query, headers).await
    }
}

#[derive(Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::from_reqwest("<client>", e))?;
        Ok(Self { http })
    }
}

impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str, query: &Params, headers: &Params) -> Result<Value, FetchError> {
        let mut req = self.http.get(url).query(query);
        for (name, value) in headers {
            req = req.header(*name, value);
        }
        let response = req.send().await.map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::from_reqwest(url, e))?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Structural(format!("body of {url} is not JSON: {e}")))
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Call {
        pub url: String,
        pub query: Params,
        pub headers: Params,
    }

    impl Call {
        pub fn param(&self, name: &str) -> Option<&str> {
            self.query.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
        }
    }

    /// Replays canned responses in order and records every request.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        responses: Mutex<VecDeque<Result<Value, FetchError>>>,
        calls: Mutex<Vec<Call>>,
    }

    impl MockFetcher {
        pub fn new() -> Self { Self::default() }

        pub fn push_response(&self, resp: Result<Value, FetchError>) {
            self.responses.lock().unwrap().push_back(resp);
        }

        pub fn push_json(&self, body: Value) { self.push_response(Ok(body)); }

        pub fn calls(&self) -> Vec<Call> { self.calls.lock().unwrap().clone() }
    }

    impl JsonFetcher for MockFetcher {
        async fn fetch_json(&self, url: &str, query: &Params, headers: &Params) -> Result<Value, FetchError> {
            self.calls.lock().unwrap().push(Call { url: url.to_string(), query: query.clone(), headers: headers.clone() });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Structural("mock response queue is empty".into())))
        }
    }
}
