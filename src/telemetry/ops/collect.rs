use tracing::{Span, info, info_span};

use crate::telemetry::ctx::{LogCtx, OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Collect;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Provider, Language, FetchPage, Render }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Provider => "provider",
        Phase::Language => "language",
        Phase::FetchPage => "fetch_page",
        Phase::Render => "render",
    }}
    fn span(&self) -> Span { match self {
        Phase::Provider => info_span!("provider"),
        Phase::Language => info_span!("language"),
        Phase::FetchPage => info_span!("fetch_page"),
        Phase::Render => info_span!("render"),
    }}
}

impl OpMarker for Collect {
    const NAME: &'static str = "collect";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("collect") }
}

impl LogCtx<Collect> {
    pub fn page_progress(&self, language: &str, page: u64, pages: u64) {
        if self.json { info!(op = %self.op_name(), language, page, pages, "page_progress"); }
        else { info!("{} page {} of {}.", language, page, pages); }
    }

    pub fn language_summary(&self, language: &str, found: u64, processed: usize, average: i64) {
        if self.json { info!(op = %self.op_name(), language, found, processed, average, "language_summary"); }
        else { info!("✅ {} — found={} processed={} average={}", language, found, processed, average); }
    }
}
