use crate::providers::{FetchError, VacancyProvider};
use crate::salary::usable_estimate;
use crate::telemetry::{self};
use crate::telemetry::ops::collect::Phase as CollectPhase;

use super::capitalize;
use super::types::LanguageSummary;

/// Walk every result page for `language` and summarise the salaries found.
///
/// The page count is refined from each response, so pages are read strictly
/// in order. Any request failure aborts this language without retrying.
pub async fn collect_language_stats<P: VacancyProvider>(provider: &P, language: &str) -> Result<LanguageSummary, FetchError> {
    let log = telemetry::collect();
    let display = capitalize(language);

    let mut found = 0u64;
    let mut estimates: Vec<i64> = Vec::new();
    let (mut page, mut pages) = (0u64, 1u64);

    while page < pages {
        let result = {
            let _s = log.span_kv(&CollectPhase::FetchPage, [("language", display.clone()), ("page", page.to_string())]).entered();
            provider.search(language, page).await?
        };

        estimates.extend(result.listings.iter().filter_map(usable_estimate));
        found = result.found;
        pages = result.total_pages;
        log.page_progress(&display, page + 1, pages);
        page += 1;
    }

    let summary = LanguageSummary {
        vacancies_found: found,
        vacancies_processed: estimates.len(),
        average_salary: average(&estimates),
    };
    log.language_summary(&display, summary.vacancies_found, summary.vacancies_processed, summary.average_salary);
    Ok(summary)
}

/// Integer mean truncated toward zero; 0 for no samples.
fn average(values: &[i64]) -> i64 {
    if values.is_empty() {
        return 0;
    }
    let sum: i128 = values.iter().map(|v| *v as i128).sum();
    (sum / values.len() as i128) as i64
}
