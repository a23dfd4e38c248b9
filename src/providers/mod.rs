use serde_json::Value;

use crate::salary::SalaryBounds;

pub mod error;
pub mod headhunter;
pub mod superjob;
pub mod transport;

pub use error::{ConfigError, FetchError};
pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

/// One page of search results, already reduced to salary bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub listings: Vec<SalaryBounds>,
    pub found: u64,
    pub total_pages: u64,
}

/// A job board that can be searched page by page.
///
/// Implementations own the request parameters and the response shape;
/// pagination and averaging live in `collect::aggregate`.
#[allow(async_fn_in_trait)]
pub trait VacancyProvider {
    /// Table title, e.g. "HeadHunter Moscow".
    fn title(&self) -> &'static str;

    async fn search(&self, language: &str, page: u64) -> Result<SearchPage, FetchError>;
}

// Response walking helpers. A missing key is an upstream contract break,
// never a business case, so these error instead of defaulting.

pub(crate) fn field<'a>(obj: &'a Value, key: &str) -> Result<&'a Value, FetchError> {
    obj.get(key).ok_or_else(|| FetchError::missing_field(key))
}

pub(crate) fn u64_field(obj: &Value, key: &str) -> Result<u64, FetchError> {
    field(obj, key)?.as_u64().ok_or_else(|| FetchError::wrong_type(key, "a non-negative integer"))
}

pub(crate) fn array_field<'a>(obj: &'a Value, key: &str) -> Result<&'a Vec<Value>, FetchError> {
    field(obj, key)?.as_array().ok_or_else(|| FetchError::wrong_type(key, "an array"))
}

/// Salary amounts, kept as sent: `null` is absent.
pub(crate) fn amount_field(obj: &Value, key: &str) -> Result<Option<f64>, FetchError> {
    match field(obj, key)? {
        Value::Null => Ok(None),
        v => v.as_f64().map(Some).ok_or_else(|| FetchError::wrong_type(key, "a number")),
    }
}
