pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

pub fn collect() -> LogCtx<ops::collect::Collect> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn estimate() -> LogCtx<ops::estimate::Estimate> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
