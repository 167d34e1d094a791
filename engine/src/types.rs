//! Scenario request and response types
//!
//! A [`ScenarioRequest`] carries raw, user-facing labels (weight units,
//! "m"/"f", activity tiers, free-form experience labels). Converting it
//! with [`ScenarioRequest::into_model`] is where those labels are checked
//! and resolved into a typed [`Profile`] and [`Goal`].

use crate::errors::{PredictorError, PredictorResult};
use crate::metabolism::MetabolicBreakdown;
use crate::profile::{
    ActivityCategory, ActivityLevel, BiologicalSex, ExperienceLevel, Goal, Profile, WorkoutType,
};
use crate::simulation::{Trajectory, WeeklySnapshot};
use crate::summary::TrajectorySummary;
use crate::training::TrainingScores;
use crate::units::{FeetInchesHeight, HeightInput, WeightUnit};
use crate::validation::{
    check_field, validate_body_fat, validate_date_of_birth, validate_goal_dates,
    validate_height_cm, validate_protein_g, validate_weight_lbs, validate_workout_days,
    ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_scenario_name() -> String {
    "Scenario".to_string()
}

/// A named prediction scenario as read from a file or a JSON payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    #[serde(default = "default_scenario_name")]
    pub name: String,
    pub profile: ProfileInput,
    pub goal: GoalInput,
}

/// Training experience as an ordinal tier (1-5) or a label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExperienceInput {
    Tier(u8),
    Label(String),
}

impl ExperienceInput {
    fn resolve(&self) -> PredictorResult<ExperienceLevel> {
        match self {
            ExperienceInput::Tier(tier) => ExperienceLevel::from_tier(*tier),
            ExperienceInput::Label(label) => Ok(ExperienceLevel::from_label(label)),
        }
    }
}

/// Raw profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub weight: f64,
    /// Unit for `weight` and the goal weight; pounds when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    pub body_fat_percent: f64,
    pub height: HeightInput,
    pub date_of_birth: NaiveDate,
    pub sex: String,
    pub activity_level: u8,
    #[serde(default)]
    pub is_athlete: bool,
    #[serde(default)]
    pub resistance_training: bool,
    pub daily_protein_g: f64,
    pub job_activity: String,
    pub leisure_activity: String,
    pub experience: ExperienceInput,
    pub workout_type: String,
    pub workout_days_per_week: u8,
}

/// Raw goal fields; the target weight uses the profile's weight unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    pub target_weight: f64,
    pub target_body_fat_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn range_error(err: ValidationError) -> PredictorError {
    PredictorError::InvalidRange(err.user_message())
}

fn goal_error(err: ValidationError) -> PredictorError {
    PredictorError::InvalidGoal(err.user_message())
}

impl ScenarioRequest {
    /// Validate every field and resolve labels into model types
    pub fn into_model(&self) -> PredictorResult<(Profile, Goal)> {
        let input = &self.profile;
        let goal_input = &self.goal;

        let unit = match input.weight_unit.as_deref() {
            Some(label) => label
                .parse::<WeightUnit>()
                .map_err(PredictorError::InvalidCategory)?,
            None => WeightUnit::default(),
        };
        let weight_lbs = unit.to_lbs(input.weight);
        let target_weight_lbs = unit.to_lbs(goal_input.target_weight);
        let height_cm = input.height.to_cm();

        check_field("weight", validate_weight_lbs(weight_lbs)).map_err(range_error)?;
        check_field("body_fat_percent", validate_body_fat(input.body_fat_percent))
            .map_err(range_error)?;
        check_field("height", validate_height_cm(height_cm)).map_err(range_error)?;
        check_field("daily_protein_g", validate_protein_g(input.daily_protein_g))
            .map_err(range_error)?;
        check_field(
            "workout_days_per_week",
            validate_workout_days(input.workout_days_per_week),
        )
        .map_err(range_error)?;
        check_field(
            "date_of_birth",
            validate_date_of_birth(input.date_of_birth, goal_input.start_date),
        )
        .map_err(range_error)?;

        check_field("target_weight", validate_weight_lbs(target_weight_lbs)).map_err(goal_error)?;
        check_field(
            "target_body_fat_percent",
            validate_body_fat(goal_input.target_body_fat_percent),
        )
        .map_err(goal_error)?;
        check_field(
            "end_date",
            validate_goal_dates(goal_input.start_date, goal_input.end_date),
        )
        .map_err(goal_error)?;

        let profile = Profile {
            weight_lbs,
            body_fat_percent: input.body_fat_percent,
            height_cm,
            date_of_birth: input.date_of_birth,
            sex: input.sex.parse::<BiologicalSex>()?,
            activity_level: ActivityLevel::from_tier(input.activity_level)?,
            is_athlete: input.is_athlete,
            resistance_training: input.resistance_training,
            daily_protein_g: input.daily_protein_g,
            job_activity: input.job_activity.parse::<ActivityCategory>()?,
            leisure_activity: input.leisure_activity.parse::<ActivityCategory>()?,
            experience: input.experience.resolve()?,
            workout_type: input.workout_type.parse::<WorkoutType>()?,
            workout_days_per_week: input.workout_days_per_week,
        };
        let goal = Goal {
            target_weight_lbs,
            target_body_fat_percent: goal_input.target_body_fat_percent,
            start_date: goal_input.start_date,
            end_date: goal_input.end_date,
        };

        Ok((profile, goal))
    }

    /// Built-in demo: an advanced bodybuilder cutting over one autumn
    pub fn sample() -> Self {
        Self {
            name: "Autumn cut".to_string(),
            profile: ProfileInput {
                weight: 245.6,
                weight_unit: Some("lbs".to_string()),
                body_fat_percent: 30.5,
                height: HeightInput::FeetInches(FeetInchesHeight {
                    feet: 5,
                    inches: 9.0,
                }),
                date_of_birth: NaiveDate::from_ymd_opt(1978, 7, 5).unwrap_or_default(),
                sex: "m".to_string(),
                activity_level: 1,
                is_athlete: false,
                resistance_training: true,
                daily_protein_g: 245.0,
                job_activity: "sedentary".to_string(),
                leisure_activity: "sedentary".to_string(),
                experience: ExperienceInput::Tier(4),
                workout_type: "Bodybuilding".to_string(),
                workout_days_per_week: 3,
            },
            goal: GoalInput {
                target_weight: 217.0,
                target_body_fat_percent: 7.0,
                start_date: NaiveDate::from_ymd_opt(2024, 9, 9).unwrap_or_default(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            },
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Complete prediction result, ready to serialize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub scenario: String,
    pub assumes_enhanced_training: bool,
    pub training: TrainingScores,
    pub initial_metabolism: MetabolicBreakdown,
    pub summary: TrajectorySummary,
    pub weeks: Vec<WeeklySnapshot>,
}

impl PredictionResponse {
    pub fn new(name: &str, trajectory: &Trajectory, profile: &Profile, goal: &Goal) -> Self {
        Self {
            scenario: name.to_string(),
            assumes_enhanced_training: trajectory.assumes_enhanced_training(),
            training: trajectory.training_scores(),
            initial_metabolism: trajectory.initial_metabolism(),
            summary: TrajectorySummary::from_trajectory(trajectory, profile, goal),
            weeks: trajectory.snapshots().to_vec(),
        }
    }
}

/// Error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&PredictorError> for ErrorResponse {
    fn from(err: &PredictorError) -> Self {
        Self {
            error: ErrorDetail {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        }
    }
}
