use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::config::AppConfig;
use crate::output::{Emitter, OutputConfig};
use crate::providers::transport::{HttpFetcher, JsonFetcher};
use crate::providers::{HeadHunter, SuperJob, VacancyProvider};
use crate::telemetry::{self};
use crate::telemetry::ops::collect::Phase as CollectPhase;

pub mod aggregate;
pub mod orchestrate;
pub mod types;

pub use types::ProviderReport;

pub const DEFAULT_LANGUAGES: [&str; 12] = [
    "Python", "C", "C++", "Ruby", "Java", "1С", "JavaScript", "Go", "PHP", "C#", "Swift", "Kotlin",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderChoice {
    Hh,
    Superjob,
    All,
}

impl ProviderChoice {
    fn wants_hh(self) -> bool { matches!(self, ProviderChoice::Hh | ProviderChoice::All) }
    fn wants_superjob(self) -> bool { matches!(self, ProviderChoice::Superjob | ProviderChoice::All) }
}

#[derive(Args, Debug)]
pub struct CollectCmd {
    /// Which job board(s) to query
    #[arg(long, value_enum, default_value_t = ProviderChoice::All)]
    pub provider: ProviderChoice,

    /// Comma-separated search terms (default: the usual dozen languages)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,
}

impl CollectCmd {
    fn languages(&self) -> Vec<String> {
        if self.languages.is_empty() {
            DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.languages.iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
        }
    }
}

pub async fn run(cfg: &AppConfig, args: CollectCmd) -> Result<()> {
    let log = telemetry::collect();
    let languages = args.languages();
    let _g = log.root_span_kv([
        ("provider", format!("{:?}", args.provider)),
        ("languages", languages.join(",")),
        ("json", telemetry::config::json_mode().to_string()),
    ]).entered();

    let fetcher = HttpFetcher::new(cfg.timeout)?;
    let progress = !telemetry::config::json_mode();
    let reports = collect_reports(&fetcher, cfg, args.provider, &languages, progress).await?;

    let _r = log.span(&CollectPhase::Render).entered();
    Emitter::from_config(OutputConfig::from_env(telemetry::config::json_mode())).emit_reports(&reports)?;
    Ok(())
}

/// One report per chosen provider, HeadHunter first.
pub async fn collect_reports<F: JsonFetcher>(
    fetcher: &F,
    cfg: &AppConfig,
    choice: ProviderChoice,
    languages: &[String],
    progress: bool,
) -> Result<Vec<ProviderReport>> {
    // every provider is built before the first request so a missing key fails fast
    let hh = choice.wants_hh().then(|| HeadHunter::new(fetcher, cfg.hh_base_url.clone()));
    let sj = if choice.wants_superjob() {
        Some(SuperJob::new(fetcher, cfg.superjob_base_url.clone(), cfg.superjob_api_key.clone())?)
    } else {
        None
    };

    let mut reports = Vec::new();
    if let Some(hh) = &hh {
        reports.push(collect_provider(hh, languages, progress).await?);
    }
    if let Some(sj) = &sj {
        reports.push(collect_provider(sj, languages, progress).await?);
    }
    Ok(reports)
}

async fn collect_provider<P: VacancyProvider>(provider: &P, languages: &[String], progress: bool) -> Result<ProviderReport> {
    let log = telemetry::collect();
    let _p = log.span_kv(&CollectPhase::Provider, [("title", provider.title().to_string())]).entered();
    let report = orchestrate::run_languages(provider, languages, progress).await?;
    log.info_kv("provider done", [("title", provider.title().to_string()), ("languages", report.len().to_string())]);
    Ok(ProviderReport { title: provider.title().to_string(), languages: report })
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ConfigError;
    use crate::providers::superjob::API_KEY_VAR;
    use crate::providers::transport::mock::MockFetcher;
    use serde_json::json;

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("JavaScript"), "Javascript");
        assert_eq!(capitalize("PHP"), "Php");
        assert_eq!(capitalize("c++"), "C++");
        assert_eq!(capitalize("1С"), "1с");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn default_languages_when_none_given() {
        let cmd = CollectCmd { provider: ProviderChoice::All, languages: vec![] };
        assert_eq!(cmd.languages().len(), 12);
        assert_eq!(cmd.languages()[5], "1С");

        let cmd = CollectCmd { provider: ProviderChoice::Hh, languages: vec![" Rust".into(), "".into(), "Go".into()] };
        assert_eq!(cmd.languages(), vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn provider_choice_selection() {
        assert!(ProviderChoice::All.wants_hh() && ProviderChoice::All.wants_superjob());
        assert!(!ProviderChoice::Hh.wants_superjob());
        assert!(!ProviderChoice::Superjob.wants_hh());
    }

    #[tokio::test]
    async fn missing_superjob_key_fails_before_any_request() {
        let mock = MockFetcher::new();
        let cfg = AppConfig { superjob_api_key: None, ..AppConfig::default() };
        let langs = vec!["Python".to_string()];

        let err = collect_reports(&mock, &cfg, ProviderChoice::All, &langs, false).await.unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::MissingApiKey(API_KEY_VAR)));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn hh_only_runs_without_superjob_key() {
        let mock = MockFetcher::new();
        mock.push_json(json!({
            "items": [{"salary": {"from": 100000, "to": 200000, "currency": "RUR"}}],
            "found": 1,
            "pages": 1
        }));
        let cfg = AppConfig { superjob_api_key: None, ..AppConfig::default() };
        let langs = vec!["go".to_string()];

        let reports = collect_reports(&mock, &cfg, ProviderChoice::Hh, &langs, false).await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].title, "HeadHunter Moscow");
        assert_eq!(
            reports[0].languages.get("Go"),
            Some(&types::LanguageSummary { vacancies_found: 1, vacancies_processed: 1, average_salary: 150000 })
        );
        assert_eq!(mock.calls().len(), 1);
    }
}
