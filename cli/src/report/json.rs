//! JSON rendering of the full prediction

use crate::error::{CliError, CliResult};
use weight_predictor_engine::PredictionResponse;

pub(super) fn render(prediction: &PredictionResponse) -> CliResult<String> {
    serde_json::to_string_pretty(prediction)
        .map_err(|e| CliError::Report(format!("JSON serialization error: {}", e)))
}
