//! CSV rendering: one row per simulated week

use super::{round_to, ReportOptions};
use crate::error::{CliError, CliResult};
use serde::Serialize;
use weight_predictor_engine::{PredictionResponse, WeeklySnapshot};

/// CSV export row for a weekly snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotCsvRow {
    pub week: u32,
    pub date: String,
    pub weight_lbs: f64,
    pub body_fat_percent: f64,
    pub lean_mass_lbs: f64,
    pub fat_mass_lbs: f64,
    pub daily_calorie_target: f64,
    pub tdee: f64,
    pub weekly_caloric_balance: f64,
    pub total_weight_lost_lbs: f64,
    pub muscle_gain_lbs: f64,
    pub rmr: f64,
}

impl SnapshotCsvRow {
    fn from_snapshot(snapshot: &WeeklySnapshot, decimals: usize) -> Self {
        let round = |value: f64| round_to(value, decimals);
        Self {
            week: snapshot.week,
            date: snapshot.date.format("%Y-%m-%d").to_string(),
            weight_lbs: round(snapshot.weight_lbs),
            body_fat_percent: round(snapshot.body_fat_percent),
            lean_mass_lbs: round(snapshot.lean_mass_lbs),
            fat_mass_lbs: round(snapshot.fat_mass_lbs),
            daily_calorie_target: snapshot.daily_calorie_target.round(),
            tdee: snapshot.tdee.round(),
            weekly_caloric_balance: snapshot.weekly_caloric_balance.round(),
            total_weight_lost_lbs: round(snapshot.total_weight_lost_lbs),
            // Weekly gains are small; keep extra precision
            muscle_gain_lbs: round_to(snapshot.muscle_gain_lbs, decimals + 2),
            rmr: snapshot.rmr.round(),
        }
    }
}

pub(super) fn render(prediction: &PredictionResponse, options: &ReportOptions) -> CliResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for snapshot in &prediction.weeks {
        wtr.serialize(SnapshotCsvRow::from_snapshot(snapshot, options.decimals))
            .map_err(|e| CliError::Report(format!("CSV serialization error: {}", e)))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| CliError::Report(format!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| CliError::Report(format!("CSV encoding error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use crate::report::Report;
    use chrono::Duration;
    use proptest::prelude::*;
    use weight_predictor_engine::{predict_trajectory, ScenarioRequest};

    #[test]
    fn test_one_row_per_week() {
        let report = sample_report();
        let text = render(&report.prediction, &ReportOptions::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), report.prediction.weeks.len() + 1);
        assert!(lines[0].starts_with("week,date,weight_lbs,body_fat_percent"));
        assert!(lines[1].starts_with("0,2024-09-09,245.6,30.5,"));
    }

    #[test]
    fn test_rows_parse_back() {
        let report = sample_report();
        let text = render(&report.prediction, &ReportOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let weeks: Vec<u32> = reader
            .records()
            .map(|record| record.unwrap()[0].parse().unwrap())
            .collect();
        let expected: Vec<u32> = (0..report.prediction.weeks.len() as u32).collect();
        assert_eq!(weeks, expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Rounding an already rounded value changes nothing
        #[test]
        fn prop_round_to_idempotent(value in -10_000.0f64..10_000.0, decimals in 0usize..6) {
            let once = round_to(value, decimals);
            prop_assert_eq!(round_to(once, decimals), once);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// Property: The CSV has a header plus one row per snapshot
        #[test]
        fn prop_row_count_matches_weeks(
            weight in 150.0f64..350.0,
            body_fat in 12.0f64..45.0,
            weeks in 0i64..40,
        ) {
            let mut request = ScenarioRequest::sample();
            request.profile.weight = weight;
            request.profile.body_fat_percent = body_fat;
            request.goal.end_date = request.goal.start_date + Duration::weeks(weeks);

            let (profile, goal) = request.into_model().unwrap();
            let trajectory = predict_trajectory(&profile, &goal).unwrap();
            let report = Report::new(&request.name, profile, goal, &trajectory);

            let text = render(&report.prediction, &ReportOptions::default()).unwrap();
            prop_assert_eq!(text.lines().count(), report.prediction.weeks.len() + 1);
            prop_assert_eq!(report.prediction.weeks.len(), trajectory.len());
        }
    }
}
