use crate::providers::{FetchError, VacancyProvider};
use crate::telemetry::{self};
use crate::telemetry::ops::collect::Phase as CollectPhase;

use super::aggregate::collect_language_stats;
use super::capitalize;
use super::types::RunReport;

/// Collect stats for each language in order.
///
/// Transport and HTTP failures drop the language from the report and the run
/// moves on; anything else (a malformed response) aborts the whole run.
pub async fn run_languages<P: VacancyProvider>(provider: &P, languages: &[String], progress: bool) -> Result<RunReport, FetchError> {
    let log = telemetry::collect();
    let mut report = RunReport::new();

    for language in languages {
        let _lang = log.span_kv(&CollectPhase::Language, [("provider", provider.title().to_string()), ("language", language.clone())]).entered();
        if progress { println!("Searching {} positions...", language); }
        else { log.info(format!("Searching {} positions...", language)); }

        match collect_language_stats(provider, language).await {
            Ok(summary) => report.insert(capitalize(language), summary),
            Err(e) if e.is_request_failure() => {
                let short = match e {
                    FetchError::Transport { .. } => "Unable to connect API.",
                    _ => "Request to API failed.",
                };
                if progress { println!("{}", short); }
                log.error_kv(short, [("language", language.clone()), ("error", e.to_string())]);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
