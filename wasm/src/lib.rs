//! Weight Predictor WASM Module
//!
//! WebAssembly bindings so the trajectory prediction can run in the browser.
//! Each binding wraps a plain Rust function that the native tests exercise.

use wasm_bindgen::prelude::*;
use weight_predictor_engine::{
    predict_trajectory, resting_metabolic_rate, total_daily_energy_expenditure, ActivityCategory,
    ActivityLevel, BiologicalSex, EnergyInputs, ErrorResponse, PredictionResponse, PredictorError,
    ScenarioRequest,
};

/// Predict a trajectory from a scenario JSON document
///
/// Returns the prediction as JSON, or an error payload
/// `{"error": {"code", "message"}}` as the rejection value.
#[wasm_bindgen]
pub fn predict_trajectory_json(scenario_json: &str) -> Result<String, JsValue> {
    predict_json(scenario_json).map_err(|e| JsValue::from_str(&e))
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses Mifflin-St Jeor with activity multiplier, TEF and NEAT
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: u8,
    is_athlete: bool,
    protein_g: f64,
    job_activity: &str,
    leisure_activity: &str,
) -> Result<f64, JsValue> {
    tdee(
        weight_kg,
        height_cm,
        age_years,
        is_male,
        activity_level,
        is_athlete,
        protein_g,
        job_activity,
        leisure_activity,
    )
    .map_err(|e| JsValue::from_str(&error_json(&e)))
}

/// Calculate RMR (Resting Metabolic Rate)
#[wasm_bindgen]
pub fn calculate_rmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    is_athlete: bool,
) -> f64 {
    resting_metabolic_rate(weight_kg, age_years, sex(is_male), height_cm, is_athlete)
}

fn sex(is_male: bool) -> BiologicalSex {
    if is_male {
        BiologicalSex::Male
    } else {
        BiologicalSex::Female
    }
}

fn error_json(err: &PredictorError) -> String {
    serde_json::to_string(&ErrorResponse::from(err)).unwrap_or_else(|_| err.to_string())
}

fn predict_json(scenario_json: &str) -> Result<String, String> {
    let request: ScenarioRequest = serde_json::from_str(scenario_json).map_err(|e| {
        serde_json::json!({ "error": { "code": "INVALID_JSON", "message": e.to_string() } })
            .to_string()
    })?;

    let (profile, goal) = request.into_model().map_err(|e| error_json(&e))?;
    let trajectory = predict_trajectory(&profile, &goal).map_err(|e| error_json(&e))?;
    let response = PredictionResponse::new(&request.name, &trajectory, &profile, &goal);

    serde_json::to_string(&response).map_err(|e| e.to_string())
}

#[allow(clippy::too_many_arguments)]
fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    is_male: bool,
    activity_level: u8,
    is_athlete: bool,
    protein_g: f64,
    job_activity: &str,
    leisure_activity: &str,
) -> Result<f64, PredictorError> {
    Ok(total_daily_energy_expenditure(&EnergyInputs {
        weight_kg,
        age_years,
        sex: sex(is_male),
        activity_level: ActivityLevel::from_tier(activity_level)?,
        height_cm,
        is_athlete,
        protein_g,
        job_activity: job_activity.parse::<ActivityCategory>()?,
        leisure_activity: leisure_activity.parse::<ActivityCategory>()?,
    }))
}
