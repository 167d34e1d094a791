//! Profile and goal models
//!
//! Category inputs are closed enums backed by fixed lookup tables. Parsing a
//! label or tier is the single point where unrecognized input is rejected,
//! so everything downstream works with values that are known to be valid.

use crate::errors::PredictorError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex for physiological constants
///
/// Only male/non-male matters to the formulas; `Female` covers non-male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn is_male(&self) -> bool {
        matches!(self, BiologicalSex::Male)
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiologicalSex::Male => write!(f, "Male"),
            BiologicalSex::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(BiologicalSex::Male),
            "f" | "female" => Ok(BiologicalSex::Female),
            _ => Err(PredictorError::InvalidCategory(format!(
                "unknown biological sex '{}', expected m/f",
                s
            ))),
        }
    }
}

// ============================================================================
// Activity Level (tiers 1-5)
// ============================================================================

/// Activity level tier used for the TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Look up the level for an ordinal tier in 1..=5
    pub fn from_tier(tier: u8) -> Result<Self, PredictorError> {
        match tier {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::LightlyActive),
            3 => Ok(ActivityLevel::ModeratelyActive),
            4 => Ok(ActivityLevel::VeryActive),
            5 => Ok(ActivityLevel::ExtraActive),
            _ => Err(PredictorError::InvalidRange(format!(
                "activity level {} must be between 1 and 5",
                tier
            ))),
        }
    }

    /// Ordinal tier in 1..=5
    pub fn tier(&self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::LightlyActive => 2,
            ActivityLevel::ModeratelyActive => 3,
            ActivityLevel::VeryActive => 4,
            ActivityLevel::ExtraActive => 5,
        }
    }

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little to no exercise",
            ActivityLevel::LightlyActive => "Light exercise/sports 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise/sports 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise/sports 6-7 days a week",
            ActivityLevel::ExtraActive => "Very hard exercise/sports & a physical job",
        }
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = PredictorError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        ActivityLevel::from_tier(tier)
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.tier()
    }
}

// ============================================================================
// Job / Leisure Activity Category
// ============================================================================

/// Non-exercise activity category for job or leisure time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Sedentary => "sedentary",
            ActivityCategory::Light => "light",
            ActivityCategory::Moderate => "moderate",
            ActivityCategory::Active => "active",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityCategory::Sedentary),
            "light" => Ok(ActivityCategory::Light),
            "moderate" => Ok(ActivityCategory::Moderate),
            "active" => Ok(ActivityCategory::Active),
            _ => Err(PredictorError::InvalidCategory(format!(
                "'{}' is not one of sedentary, light, moderate, active",
                s
            ))),
        }
    }
}

// ============================================================================
// Training Experience
// ============================================================================

/// Resistance-training experience bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// 0-1 year
    Beginner,
    /// 1-2 years
    Novice,
    /// 2-4 years
    Intermediate,
    /// 4-10 years
    Advanced,
    /// 10+ years
    Elite,
}

impl ExperienceLevel {
    /// Look up the level for an ordinal tier in 1..=5
    pub fn from_tier(tier: u8) -> Result<Self, PredictorError> {
        match tier {
            1 => Ok(ExperienceLevel::Beginner),
            2 => Ok(ExperienceLevel::Novice),
            3 => Ok(ExperienceLevel::Intermediate),
            4 => Ok(ExperienceLevel::Advanced),
            5 => Ok(ExperienceLevel::Elite),
            _ => Err(PredictorError::InvalidRange(format!(
                "experience level {} must be between 1 and 5",
                tier
            ))),
        }
    }

    /// Resolve a free-form label such as "Advanced (4-10 years)" or "novice"
    ///
    /// Unrecognized labels fall back to `Intermediate`.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        let head = normalized.split_whitespace().next().unwrap_or_default();
        match head {
            "beginner" => ExperienceLevel::Beginner,
            "novice" => ExperienceLevel::Novice,
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            "elite" => ExperienceLevel::Elite,
            _ => {
                tracing::warn!(label, "Unrecognized experience level, assuming intermediate");
                ExperienceLevel::Intermediate
            }
        }
    }

    /// Whether this level counts as experienced enough for the bodybuilder profile
    pub fn is_intermediate_or_above(&self) -> bool {
        *self >= ExperienceLevel::Intermediate
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner (0-1 year)",
            ExperienceLevel::Novice => "Novice (1-2 years)",
            ExperienceLevel::Intermediate => "Intermediate (2-4 years)",
            ExperienceLevel::Advanced => "Advanced (4-10 years)",
            ExperienceLevel::Elite => "Elite (10+ years)",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// ============================================================================
// Workout Type
// ============================================================================

/// Primary workout style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Strength training and muscle building
    Bodybuilding,
    /// Running, cycling and other endurance work
    Cardio,
    /// A mix of exercises for overall health
    GeneralFitness,
}

impl WorkoutType {
    pub fn description(&self) -> &'static str {
        match self {
            WorkoutType::Bodybuilding => "Bodybuilding",
            WorkoutType::Cardio => "Cardio",
            WorkoutType::GeneralFitness => "General Fitness",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for WorkoutType {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "bodybuilding" | "1" => Ok(WorkoutType::Bodybuilding),
            "cardio" | "2" => Ok(WorkoutType::Cardio),
            "generalfitness" | "3" => Ok(WorkoutType::GeneralFitness),
            _ => Err(PredictorError::InvalidWorkoutType(format!(
                "'{}' is not one of Bodybuilding, Cardio, General Fitness",
                s
            ))),
        }
    }
}

// ============================================================================
// Profile and Goal
// ============================================================================

/// Static description of the person being simulated
///
/// Weights are in pounds, height in centimeters, protein in grams per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight_lbs: f64,
    pub body_fat_percent: f64,
    pub height_cm: f64,
    pub date_of_birth: NaiveDate,
    pub sex: BiologicalSex,
    pub activity_level: ActivityLevel,
    pub is_athlete: bool,
    pub resistance_training: bool,
    pub daily_protein_g: f64,
    pub job_activity: ActivityCategory,
    pub leisure_activity: ActivityCategory,
    pub experience: ExperienceLevel,
    pub workout_type: WorkoutType,
    pub workout_days_per_week: u8,
}

impl Profile {
    /// Strength-focused training with at least intermediate experience
    ///
    /// This profile enables the aggressive adaptation and muscle-gain
    /// parameters, which assume performance-enhancing drug use.
    pub fn is_bodybuilder(&self) -> bool {
        self.workout_type == WorkoutType::Bodybuilding && self.experience.is_intermediate_or_above()
    }

    pub fn lean_mass_lbs(&self) -> f64 {
        self.weight_lbs * (1.0 - self.body_fat_percent / 100.0)
    }

    pub fn fat_mass_lbs(&self) -> f64 {
        self.weight_lbs * (self.body_fat_percent / 100.0)
    }
}

/// Target weight and body fat to reach between two dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub target_weight_lbs: f64,
    pub target_body_fat_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Goal {
    /// Simulation horizon in whole weeks (floor of elapsed days / 7)
    ///
    /// Zero when the end date does not lie after the start date.
    pub fn total_weeks(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        if days <= 0 {
            0
        } else {
            (days / 7) as u32
        }
    }

    /// Whether a body state satisfies both targets
    pub fn is_reached(&self, weight_lbs: f64, body_fat_percent: f64) -> bool {
        body_fat_percent <= self.target_body_fat_percent && weight_lbs <= self.target_weight_lbs
    }
}
