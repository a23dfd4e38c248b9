use anyhow::Result;
use clap::Args;

use crate::output::{Emitter, EstimateView, OutputConfig};
use crate::salary;
use crate::telemetry::{self};
use crate::telemetry::ops::estimate::Phase as EstimatePhase;

#[derive(Args, Debug)]
pub struct EstimateCmd {
    /// Lower salary bound ("from"); 0 means not specified
    #[arg(long, allow_negative_numbers = true)] pub from: Option<f64>,
    /// Upper salary bound ("to"); 0 means not specified
    #[arg(long, allow_negative_numbers = true)] pub to: Option<f64>,
}

pub fn run(args: EstimateCmd) -> Result<()> {
    let log = telemetry::estimate();
    let _g = log.root_span_kv([("from", format!("{:?}", args.from)), ("to", format!("{:?}", args.to))]).entered();

    let view = {
        let _s = log.span(&EstimatePhase::Compute).entered();
        EstimateView { from: args.from, to: args.to, estimate: salary::estimate(args.from, args.to) }
    };
    if view.estimate.is_none() {
        log.debug("no usable bounds");
    }
    Emitter::from_config(OutputConfig::from_env(telemetry::config::json_mode())).emit_estimate(&view)?;
    Ok(())
}
