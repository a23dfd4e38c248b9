use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Estimate;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Compute }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Compute => "compute" } }
    fn span(&self) -> Span { match self { Phase::Compute => info_span!("compute") } }
}

impl OpMarker for Estimate {
    const NAME: &'static str = "estimate";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("estimate") }
}
