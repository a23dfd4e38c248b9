use serde_json::Value;

use super::transport::{JsonFetcher, Params};
use super::{FetchError, SearchPage, VacancyProvider, amount_field, array_field, field, u64_field};
use crate::salary::SalaryBounds;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";

const AREA_MOSCOW: u32 = 1;
const PERIOD_DAYS: u32 = 30;
// "Программист, разработчик"
const ROLE_DEVELOPER: u32 = 96;
const PER_PAGE_MAX: u64 = 50;
const LOCAL_CURRENCY: &str = "RUR";

pub struct HeadHunter<F> {
    fetcher: F,
    base_url: String,
}

impl<F: JsonFetcher> HeadHunter<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self { fetcher, base_url: base_url.into() }
    }

    fn params(language: &str, page: u64) -> Params {
        vec![
            ("area", AREA_MOSCOW.to_string()),
            ("period", PERIOD_DAYS.to_string()),
            ("professional_role", ROLE_DEVELOPER.to_string()),
            ("search_field", "name".to_string()),
            ("per_page", PER_PAGE_MAX.to_string()),
            ("text", language.to_string()),
            ("page", page.to_string()),
        ]
    }
}

impl<F: JsonFetcher> VacancyProvider for HeadHunter<F> {
    fn title(&self) -> &'static str { "HeadHunter Moscow" }

    async fn search(&self, language: &str, page: u64) -> Result<SearchPage, FetchError> {
        let resp = self.fetcher.fetch_json(&self.base_url, &Self::params(language, page), &Vec::new()).await?;
        parse_page(&resp)
    }
}

fn parse_page(resp: &Value) -> Result<SearchPage, FetchError> {
    let listings = array_field(resp, "items")?
        .iter()
        .map(extract_bounds)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SearchPage { listings, found: u64_field(resp, "found")?, total_pages: u64_field(resp, "pages")? })
}

/// Salary range of one vacancy; only rouble salaries count.
pub fn extract_bounds(vacancy: &Value) -> Result<SalaryBounds, FetchError> {
    let salary = field(vacancy, "salary")?;
    if salary.is_null() {
        return Ok(SalaryBounds::none());
    }
    if field(salary, "currency")?.as_str() != Some(LOCAL_CURRENCY) {
        return Ok(SalaryBounds::none());
    }
    Ok(SalaryBounds::new(amount_field(salary, "from")?, amount_field(salary, "to")?))
}
