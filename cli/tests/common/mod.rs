//! Shared helpers for command-line integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Path to a file under the workspace `demos/` directory
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("demos")
        .join(name)
}

/// Write scenario text to a temporary file with the given extension
pub fn scenario_file(contents: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write scenario");
    file
}

/// Run the binary with `args`, isolated from any ambient configuration
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weight-predictor"))
        .args(args)
        .env_remove("RUST_ENV")
        .env_remove("RUST_LOG")
        .env("WP__LOGGING__FILTER", "off")
        .output()
        .expect("Failed to run weight-predictor")
}

/// JSON scenario with the given goal body fat
pub fn json_scenario(goal_body_fat: f64) -> String {
    format!(
        r#"{{
  "name": "Test cut",
  "profile": {{
    "weight": 240, "body_fat_percent": 30, "height": {{ "cm": 180 }},
    "date_of_birth": "1990-01-01", "sex": "m", "activity_level": 3,
    "resistance_training": true, "daily_protein_g": 150,
    "job_activity": "sedentary", "leisure_activity": "light",
    "experience": "Intermediate", "workout_type": "Bodybuilding",
    "workout_days_per_week": 4
  }},
  "goal": {{
    "target_weight": 217, "target_body_fat_percent": {},
    "start_date": "2023-01-01", "end_date": "2023-04-01"
  }}
}}"#,
        goal_body_fat
    )
}
