//! Scenario file loading
//!
//! Scenarios are TOML or JSON documents shaped like
//! [`ScenarioRequest`]; the format is chosen by file extension.

use crate::error::{CliError, CliResult};
use std::fs;
use std::path::Path;
use tracing::debug;
use weight_predictor_engine::ScenarioRequest;

/// Supported scenario encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> CliResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(ScenarioFormat::Toml),
            "json" => Ok(ScenarioFormat::Json),
            other => Err(CliError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Parse scenario text in the given format
pub fn parse_scenario(text: &str, format: ScenarioFormat, path: &Path) -> CliResult<ScenarioRequest> {
    let parsed = match format {
        ScenarioFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        ScenarioFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| CliError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> CliResult<ScenarioRequest> {
    let format = ScenarioFormat::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scenario = parse_scenario(&text, format, path)?;
    debug!(path = %path.display(), ?format, name = %scenario.name, "Loaded scenario");
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plan.toml", ScenarioFormat::Toml)]
    #[case("plan.TOML", ScenarioFormat::Toml)]
    #[case("dir/plan.json", ScenarioFormat::Json)]
    fn test_format_from_extension(#[case] path: &str, #[case] expected: ScenarioFormat) {
        assert_eq!(ScenarioFormat::from_path(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("plan.yaml")]
    #[case("plan")]
    fn test_unsupported_extension(#[case] path: &str) {
        assert!(matches!(
            ScenarioFormat::from_path(Path::new(path)),
            Err(CliError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_toml_scenario() {
        let text = r#"
name = "Spring cut"

[profile]
weight = 90.0
weight_unit = "kg"
body_fat_percent = 24.0
height = { feet = 5, inches = 11 }
date_of_birth = "1992-03-14"
sex = "f"
activity_level = 2
resistance_training = true
daily_protein_g = 140.0
job_activity = "light"
leisure_activity = "moderate"
experience = 2
workout_type = "General Fitness"
workout_days_per_week = 3

[goal]
target_weight = 80.0
target_body_fat_percent = 20.0
start_date = "2024-03-01"
end_date = "2024-06-01"
"#;
        let scenario = parse_scenario(text, ScenarioFormat::Toml, Path::new("x.toml")).unwrap();
        assert_eq!(scenario.name, "Spring cut");

        let (profile, goal) = scenario.into_model().unwrap();
        assert!((profile.weight_lbs - 198.416).abs() < 0.001);
        assert!((profile.height_cm - 180.34).abs() < 1e-9);
        assert_eq!(goal.total_weeks(), 13);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_scenario("{ not json", ScenarioFormat::Json, Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
