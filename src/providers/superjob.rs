use serde_json::Value;

use super::transport::{JsonFetcher, Params};
use super::{ConfigError, FetchError, SearchPage, VacancyProvider, amount_field, array_field, u64_field};
use crate::salary::SalaryBounds;

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
pub const API_KEY_VAR: &str = "SUPERJOB_SECRET_KEY";

const TOWN_MOSCOW: u32 = 4;
const PERIOD_DAYS: u32 = 30;
// "Разработка, программирование"
const CATALOGUE_DEVELOPMENT: u32 = 48;
const COUNT_MAX: u64 = 100;

pub struct SuperJob<F> {
    fetcher: F,
    base_url: String,
    api_key: String,
}

impl<F: JsonFetcher> SuperJob<F> {
    /// Fails before any request is made when no key is configured.
    pub fn new(fetcher: F, base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty()).ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        Ok(Self { fetcher, base_url: base_url.into(), api_key })
    }

    fn params(language: &str, page: u64) -> Params {
        vec![
            ("town", TOWN_MOSCOW.to_string()),
            ("period", PERIOD_DAYS.to_string()),
            ("catalogues", CATALOGUE_DEVELOPMENT.to_string()),
            ("count", COUNT_MAX.to_string()),
            ("keyword", language.to_string()),
            ("page", page.to_string()),
        ]
    }
}

impl<F: JsonFetcher> VacancyProvider for SuperJob<F> {
    fn title(&self) -> &'static str { "SuperJob Moscow" }

    async fn search(&self, language: &str, page: u64) -> Result<SearchPage, FetchError> {
        let headers = vec![("X-Api-App-Id", self.api_key.clone())];
        let resp = self.fetcher.fetch_json(&self.base_url, &Self::params(language, page), &headers).await?;
        parse_page(&resp)
    }
}

fn parse_page(resp: &Value) -> Result<SearchPage, FetchError> {
    let listings = array_field(resp, "objects")?
        .iter()
        .map(extract_bounds)
        .collect::<Result<Vec<_>, _>>()?;
    let found = u64_field(resp, "total")?;
    Ok(SearchPage { listings, found, total_pages: found.div_ceil(COUNT_MAX) })
}

/// `payment_from`/`payment_to`, with 0 meaning "not specified".
pub fn extract_bounds(vacancy: &Value) -> Result<SalaryBounds, FetchError> {
    let lower = amount_field(vacancy, "payment_from")?.filter(|v| *v != 0.0);
    let upper = amount_field(vacancy, "payment_to")?.filter(|v| *v != 0.0);
    Ok(SalaryBounds::new(lower, upper))
}
