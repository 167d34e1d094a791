//! Integration tests for scenario loading and report rendering

mod common;

use weight_predictor_cli::error::CliError;
use weight_predictor_cli::report::{Report, ReportFormat, ReportOptions};
use weight_predictor_cli::scenario::load_scenario;
use weight_predictor_engine::{predict_trajectory, PredictorError};

#[test]
fn test_demo_scenarios_load_and_predict() {
    for name in ["autumn_cut.toml", "spring_cut.json"] {
        let scenario = load_scenario(&common::demo_path(name)).unwrap();
        let (profile, goal) = scenario.into_model().unwrap();
        let trajectory = predict_trajectory(&profile, &goal).unwrap();

        assert!(trajectory.len() <= goal.total_weeks() as usize + 1);
        assert!(trajectory.last().weight_lbs < profile.weight_lbs, "{}", name);
    }
}

#[test]
fn test_toml_demo_matches_builtin_sample() {
    let from_file = load_scenario(&common::demo_path("autumn_cut.toml"))
        .unwrap()
        .into_model()
        .unwrap();
    let builtin = weight_predictor_engine::ScenarioRequest::sample()
        .into_model()
        .unwrap();
    assert_eq!(from_file, builtin);
}

#[test]
fn test_json_scenario_renders_every_format() {
    let file = common::scenario_file(&common::json_scenario(7.0), "json");
    let scenario = load_scenario(file.path()).unwrap();
    let (profile, goal) = scenario.into_model().unwrap();
    let trajectory = predict_trajectory(&profile, &goal).unwrap();
    let report = Report::new(&scenario.name, profile, goal, &trajectory);

    let markdown = report
        .render(ReportFormat::Markdown, &ReportOptions::default())
        .unwrap();
    assert!(markdown.contains("# Weight Loss Forecast: Test cut"));
    assert!(markdown.contains("| 12 | 2023-04-01 |"));

    let csv = report.render(ReportFormat::Csv, &ReportOptions::default()).unwrap();
    assert_eq!(csv.lines().count(), 14);

    let json = report.render(ReportFormat::Json, &ReportOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["weeks"].as_array().unwrap().len(), 13);
}

#[test]
fn test_invalid_goal_surfaces_predictor_error() {
    let file = common::scenario_file(&common::json_scenario(100.0), "json");
    let scenario = load_scenario(file.path()).unwrap();
    let err = CliError::from(scenario.into_model().unwrap_err());

    assert!(matches!(err, CliError::Predictor(PredictorError::InvalidGoal(_))));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_scenario(&common::demo_path("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let file = common::scenario_file("name = \"broken\"\n[profile]\nweight = ", "toml");
    let err = load_scenario(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Parse { .. }));
    assert_eq!(err.exit_code(), 65);
}
