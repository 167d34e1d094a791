//! Aggregate statistics over a predicted trajectory
//!
//! Everything a report needs beyond the raw weekly rows: totals, averages,
//! adaptation, lean-mass retention, body-fat categories and follow-up
//! suggestions.

use crate::adaptation::metabolic_adaptation;
use crate::composition::{classify_body_fat, BodyFatCategory};
use crate::profile::{Goal, Profile};
use crate::simulation::{Outcome, Trajectory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Protein suggestion in grams per pound of final body weight
const PROTEIN_G_PER_LB: f64 = 0.8;
/// Lowest body fat ever suggested as a next goal
const MIN_NEXT_BODY_FAT: f64 = 5.0;

/// Qualitative rating of the average weekly muscle gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGainRating {
    Excellent,
    Good,
    Moderate,
}

impl MuscleGainRating {
    pub fn from_weekly_gain(lbs_per_week: f64) -> Self {
        if lbs_per_week > 0.5 {
            MuscleGainRating::Excellent
        } else if lbs_per_week > 0.25 {
            MuscleGainRating::Good
        } else {
            MuscleGainRating::Moderate
        }
    }
}

impl fmt::Display for MuscleGainRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuscleGainRating::Excellent => write!(f, "excellent"),
            MuscleGainRating::Good => write!(f, "good"),
            MuscleGainRating::Moderate => write!(f, "moderate"),
        }
    }
}

/// Totals and derived insights for one trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weeks: u32,
    pub outcome: Outcome,
    pub goal_reached: bool,
    pub initial_weight_lbs: f64,
    pub final_weight_lbs: f64,
    pub initial_body_fat_percent: f64,
    pub final_body_fat_percent: f64,
    pub total_weight_loss_lbs: f64,
    pub total_body_fat_reduction: f64,
    pub average_weekly_loss_lbs: f64,
    pub total_muscle_gain_lbs: f64,
    pub average_weekly_muscle_gain_lbs: f64,
    pub muscle_gain_rating: MuscleGainRating,
    /// Drop in expenditure from the baseline to the last week, in percent
    pub adaptation_percent: f64,
    /// Final lean mass as a percentage of the initial lean mass
    pub lean_mass_preserved_percent: f64,
    pub first_week_adaptation: f64,
    pub final_week_adaptation: f64,
    pub initial_category: BodyFatCategory,
    pub final_category: BodyFatCategory,
    /// Expenditure at the end, suggested as maintenance intake
    pub maintenance_calories: f64,
    pub suggested_protein_g: f64,
    pub next_body_fat_goal: f64,
}

impl TrajectorySummary {
    pub fn from_trajectory(trajectory: &Trajectory, profile: &Profile, goal: &Goal) -> Self {
        let initial = trajectory.baseline();
        let last = trajectory.last();
        let weeks = trajectory.weeks_simulated();
        let is_bodybuilder = trajectory.assumes_enhanced_training();

        let total_weight_loss_lbs = initial.weight_lbs - last.weight_lbs;
        let total_muscle_gain_lbs: f64 = trajectory
            .snapshots()
            .iter()
            .map(|s| s.muscle_gain_lbs)
            .sum();
        let per_week = |total: f64| if weeks == 0 { 0.0 } else { total / f64::from(weeks) };
        let average_weekly_muscle_gain_lbs = per_week(total_muscle_gain_lbs);

        let lean_mass_preserved_percent = if initial.lean_mass_lbs > 0.0 {
            last.lean_mass_lbs / initial.lean_mass_lbs * 100.0
        } else {
            100.0
        };

        Self {
            start_date: initial.date,
            end_date: last.date,
            weeks,
            outcome: trajectory.outcome(),
            goal_reached: goal.is_reached(last.weight_lbs, last.body_fat_percent),
            initial_weight_lbs: initial.weight_lbs,
            final_weight_lbs: last.weight_lbs,
            initial_body_fat_percent: initial.body_fat_percent,
            final_body_fat_percent: last.body_fat_percent,
            total_weight_loss_lbs,
            total_body_fat_reduction: initial.body_fat_percent - last.body_fat_percent,
            average_weekly_loss_lbs: per_week(total_weight_loss_lbs),
            total_muscle_gain_lbs,
            average_weekly_muscle_gain_lbs,
            muscle_gain_rating: MuscleGainRating::from_weekly_gain(average_weekly_muscle_gain_lbs),
            adaptation_percent: (1.0 - last.tdee / initial.tdee) * 100.0,
            lean_mass_preserved_percent,
            first_week_adaptation: metabolic_adaptation(1, initial.body_fat_percent, is_bodybuilder),
            final_week_adaptation: metabolic_adaptation(
                weeks.max(1),
                last.body_fat_percent,
                is_bodybuilder,
            ),
            initial_category: classify_body_fat(initial.body_fat_percent, profile.sex),
            final_category: classify_body_fat(last.body_fat_percent, profile.sex),
            maintenance_calories: last.tdee,
            suggested_protein_g: last.weight_lbs * PROTEIN_G_PER_LB,
            next_body_fat_goal: (last.body_fat_percent - 2.0).max(MIN_NEXT_BODY_FAT),
        }
    }
}
