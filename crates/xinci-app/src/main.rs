use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod pipeline;
pub mod profile;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::pipeline::RunOutcome;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = match profile::build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&args.document, &config) {
        Ok(RunOutcome::Written { path, candidates }) => {
            println!("Discovered {candidates} new words, saved to {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoContent) => {
            println!("No Chinese content to analyze in {}", args.document.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
