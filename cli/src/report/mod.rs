//! Report rendering
//!
//! Formats:
//! - Markdown: narrative report with profile, metabolism, forecast and insights
//! - CSV: one row per simulated week
//! - JSON: the full structured prediction

mod json;
mod markdown;
mod tabular;

use crate::config::ReportConfig;
use crate::error::{CliError, CliResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use weight_predictor_engine::{Goal, PredictionResponse, Profile, Trajectory};

/// Output format for a prediction report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Markdown,
    Csv,
    Json,
}

impl ReportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Rendering knobs taken from [`ReportConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub decimals: usize,
    pub include_notice: bool,
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            decimals: config.decimals,
            include_notice: config.include_notice,
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

/// Everything a renderer needs about one prediction
#[derive(Debug, Clone)]
pub struct Report {
    pub profile: Profile,
    pub goal: Goal,
    pub prediction: PredictionResponse,
}

impl Report {
    pub fn new(scenario: &str, profile: Profile, goal: Goal, trajectory: &Trajectory) -> Self {
        let prediction = PredictionResponse::new(scenario, trajectory, &profile, &goal);
        Self {
            profile,
            goal,
            prediction,
        }
    }

    /// Render the report in `format`
    pub fn render(&self, format: ReportFormat, options: &ReportOptions) -> CliResult<String> {
        match format {
            ReportFormat::Markdown => markdown::render(self, options)
                .map_err(|e| CliError::Report(format!("Markdown formatting error: {}", e))),
            ReportFormat::Csv => tabular::render(&self.prediction, options),
            ReportFormat::Json => json::render(&self.prediction),
        }
    }
}

/// Round `value` to `decimals` places
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals.min(12) as i32);
    (value * factor).round() / factor
}

/// Notice printed for bodybuilder profiles
pub const ENHANCED_TRAINING_NOTICE: &str = "This prediction uses the bodybuilder profile, whose muscle-gain \
rate (2.5x natural) and adaptation floor assume use of performance-enhancing drugs. \
Expect slower lean-mass gain without them.";
