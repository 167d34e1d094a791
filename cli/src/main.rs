//! Weight Predictor
//!
//! Predicts a week-by-week body weight and composition trajectory for a
//! scenario file and prints a report.

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weight_predictor_cli::config::AppConfig;
use weight_predictor_cli::error::{CliError, CliResult};
use weight_predictor_cli::report::{Report, ReportFormat, ReportOptions};
use weight_predictor_cli::scenario::load_scenario;
use weight_predictor_engine::{predict_trajectory, ScenarioRequest};

#[derive(Parser)]
#[command(
    name = "weight-predictor",
    version,
    about = "Predict a week-by-week weight loss trajectory",
    long_about = "Simulate body weight, body fat and calorie targets week by week toward a goal"
)]
struct Args {
    /// Scenario file (.toml or .json)
    #[arg(long, short = 's', required_unless_present = "sample", conflicts_with = "sample")]
    scenario: Option<PathBuf>,

    /// Use the built-in demo scenario
    #[arg(long)]
    sample: bool,

    /// Report format (defaults to the configured format)
    #[arg(long, short = 'f', value_enum)]
    format: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Decimal places for weights and percentages
    #[arg(long)]
    decimals: Option<usize>,

    /// Config file overriding config/{RUST_ENV}.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return exit_code(&CliError::Config(e));
        }
    };

    init_tracing(&config);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(code = e.exit_code(), error = ?e, "Prediction failed");
            eprintln!("error: {}", e);
            exit_code(&e)
        }
    }
}

fn exit_code(error: &CliError) -> ExitCode {
    ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
}

fn load_config(args: &Args) -> Result<AppConfig> {
    match &args.config {
        Some(path) => AppConfig::load_from(&path.to_string_lossy()),
        None => AppConfig::load(),
    }
}

fn run(args: &Args, config: &AppConfig) -> CliResult<()> {
    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioRequest::sample(),
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        scenario = %scenario.name,
        "Running prediction"
    );

    let (profile, goal) = scenario.into_model()?;
    let trajectory = predict_trajectory(&profile, &goal)?;

    let format = args.format.unwrap_or(config.report.format);
    let mut options = ReportOptions::from(&config.report);
    if let Some(decimals) = args.decimals {
        options.decimals = decimals;
    }

    let report = Report::new(&scenario.name, profile, goal, &trajectory);
    let rendered = report.render(format, &options)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), %format, "Report saved");
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so the report on stdout stays clean.
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.as_str().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.logging.json || AppConfig::is_production() {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
