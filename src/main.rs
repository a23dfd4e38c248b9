use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;

mod collect;
mod config;
mod estimate;
mod output;
mod providers;
mod salary;
mod telemetry;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "vacancy-stats", about = "Programming-language salary stats from HeadHunter and SuperJob")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Collect(collect::CollectCmd),
    Estimate(estimate::EstimateCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and VACANCY_LOG_FORMAT
    telemetry::config::init_tracing();
    let cfg = AppConfig::from_env();

    match cli.command {
        Commands::Collect(args) => collect::run(&cfg, args).await?,
        Commands::Estimate(args) => estimate::run(args)?,
    }

    Ok(())
}
