//! Weekly body-composition simulation
//!
//! The loop starts from a baseline snapshot (week 0) and advances one week
//! at a time. Each step recomputes expenditure from the current weight,
//! applies metabolic adaptation, picks the calorie target that would reach
//! the goal body fat on schedule, splits the resulting mass change between
//! fat and lean tissue and adds any muscle gain. It ends early once both
//! targets are met (converged) or after the last week of the horizon.
//!
//! The running state is a [`BodyState`] value passed into and returned from
//! every step. Nothing else mutates it.

use crate::adaptation::metabolic_adaptation;
use crate::composition::{estimate_muscle_gain, partition_weight_change, MuscleGainInputs};
use crate::errors::{PredictorError, PredictorResult};
use crate::metabolism::{age_on, metabolic_breakdown, EnergyInputs, MetabolicBreakdown};
use crate::profile::{Goal, Profile};
use crate::training::{training_scores, TrainingScores};
use crate::units::lbs_to_kg;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Energy content of one pound of body tissue
pub const KCAL_PER_LB: f64 = 3500.0;

/// Absolute floor for any daily calorie target
pub const MIN_DAILY_CALORIES: f64 = 1000.0;

/// Starting intake as a fraction of min(RMR, TDEE)
const INITIAL_INTAKE_FACTOR: f64 = 0.58;

/// Lean mass never drops below this fraction of the previous week's weight
const LEAN_MASS_FLOOR_FRACTION: f64 = 0.05;

/// Running body composition carried from one week to the next
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub weight_lbs: f64,
    pub body_fat_percent: f64,
}

impl BodyState {
    pub fn fat_mass_lbs(&self) -> f64 {
        self.weight_lbs * (self.body_fat_percent / 100.0)
    }

    pub fn lean_mass_lbs(&self) -> f64 {
        self.weight_lbs - self.fat_mass_lbs()
    }
}

/// One week of the predicted trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySnapshot {
    /// 0 for the baseline, then 1, 2, ...
    pub week: u32,
    pub date: NaiveDate,
    pub weight_lbs: f64,
    pub body_fat_percent: f64,
    pub lean_mass_lbs: f64,
    pub fat_mass_lbs: f64,
    pub daily_calorie_target: f64,
    /// Expenditure after metabolic adaptation (raw on the baseline)
    pub tdee: f64,
    /// Calories below expenditure over the week
    pub weekly_caloric_balance: f64,
    /// Initial weight minus current weight; positive means weight lost
    pub total_weight_lost_lbs: f64,
    /// Muscle added this week
    pub muscle_gain_lbs: f64,
    pub rmr: f64,
}

/// How the simulation terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both goal weight and goal body fat were reached before the end date
    Converged,
    /// The horizon ran out first
    HorizonReached,
}

/// Ordered, immutable result of a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    snapshots: Vec<WeeklySnapshot>,
    outcome: Outcome,
    total_weeks: u32,
    training: TrainingScores,
    initial_metabolism: MetabolicBreakdown,
    assumes_enhanced_training: bool,
}

impl Trajectory {
    /// All snapshots, baseline first
    pub fn snapshots(&self) -> &[WeeklySnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<WeeklySnapshot> {
        self.snapshots
    }

    /// Baseline snapshot (week 0)
    pub fn baseline(&self) -> &WeeklySnapshot {
        // Always populated by `predict_trajectory`
        &self.snapshots[0]
    }

    pub fn last(&self) -> &WeeklySnapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false for a trajectory from [`predict_trajectory`], which
    /// holds at least the baseline snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of simulated weeks after the baseline
    pub fn weeks_simulated(&self) -> u32 {
        (self.snapshots.len() - 1) as u32
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Horizon length in weeks derived from the goal dates
    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    pub fn training_scores(&self) -> TrainingScores {
        self.training
    }

    /// Metabolic breakdown at the start date
    pub fn initial_metabolism(&self) -> MetabolicBreakdown {
        self.initial_metabolism
    }

    /// Whether the bodybuilder parameters (2.5x muscle gain, 0.80 adaptation
    /// floor) were applied. They assume performance-enhancing drug use.
    pub fn assumes_enhanced_training(&self) -> bool {
        self.assumes_enhanced_training
    }
}

/// Reject inputs that would make the weekly arithmetic undefined
fn validate_inputs(profile: &Profile, goal: &Goal) -> PredictorResult<()> {
    let goal_bf = goal.target_body_fat_percent;
    if !goal_bf.is_finite() || !(0.0..100.0).contains(&goal_bf) {
        return Err(PredictorError::InvalidGoal(format!(
            "goal body fat {}% must be at least 0 and below 100",
            goal_bf
        )));
    }
    if !goal.target_weight_lbs.is_finite() || goal.target_weight_lbs <= 0.0 {
        return Err(PredictorError::InvalidGoal(format!(
            "goal weight {} must be a positive number",
            goal.target_weight_lbs
        )));
    }
    if goal.end_date < goal.start_date {
        return Err(PredictorError::InvalidGoal(format!(
            "end date {} is before start date {}",
            goal.end_date, goal.start_date
        )));
    }

    if !profile.weight_lbs.is_finite() || profile.weight_lbs <= 0.0 {
        return Err(PredictorError::InvalidRange(format!(
            "weight {} must be a positive number",
            profile.weight_lbs
        )));
    }
    let bf = profile.body_fat_percent;
    if !bf.is_finite() || !(0.0..100.0).contains(&bf) {
        return Err(PredictorError::InvalidRange(format!(
            "body fat {}% must be at least 0 and below 100",
            bf
        )));
    }
    if profile.workout_days_per_week > 7 {
        return Err(PredictorError::InvalidRange(format!(
            "{} workout days per week exceeds 7",
            profile.workout_days_per_week
        )));
    }
    if !profile.daily_protein_g.is_finite() || profile.daily_protein_g < 0.0 {
        return Err(PredictorError::InvalidRange(format!(
            "daily protein {} g cannot be negative",
            profile.daily_protein_g
        )));
    }
    Ok(())
}

/// Per-run constants shared by every step
struct Simulation<'a> {
    profile: &'a Profile,
    goal: &'a Goal,
    total_weeks: u32,
    training: TrainingScores,
    is_bodybuilder: bool,
    initial_weight_lbs: f64,
}

impl<'a> Simulation<'a> {
    fn new(profile: &'a Profile, goal: &'a Goal) -> Self {
        Self {
            profile,
            goal,
            total_weeks: goal.total_weeks(),
            training: training_scores(profile.workout_days_per_week, profile.workout_type),
            is_bodybuilder: profile.is_bodybuilder(),
            initial_weight_lbs: profile.weight_lbs,
        }
    }

    /// Calendar date of a week; the horizon week lands on the goal end date
    fn date_of_week(&self, week: u32) -> NaiveDate {
        if week > 0 && week == self.total_weeks {
            self.goal.end_date
        } else {
            self.goal.start_date + Duration::weeks(i64::from(week))
        }
    }

    fn metabolism(&self, weight_lbs: f64, age_years: i32) -> MetabolicBreakdown {
        metabolic_breakdown(&EnergyInputs {
            weight_kg: lbs_to_kg(weight_lbs),
            age_years,
            sex: self.profile.sex,
            activity_level: self.profile.activity_level,
            height_cm: self.profile.height_cm,
            is_athlete: self.profile.is_athlete,
            protein_g: self.profile.daily_protein_g,
            job_activity: self.profile.job_activity,
            leisure_activity: self.profile.leisure_activity,
        })
    }

    /// Week 0: the starting body with zero deltas
    fn baseline(&self) -> (BodyState, MetabolicBreakdown, WeeklySnapshot) {
        let state = BodyState {
            weight_lbs: self.profile.weight_lbs,
            body_fat_percent: self.profile.body_fat_percent,
        };
        let date = self.date_of_week(0);
        let metabolism = self.metabolism(state.weight_lbs, age_on(self.profile.date_of_birth, date));
        let initial_intake = INITIAL_INTAKE_FACTOR * metabolism.rmr.min(metabolism.tdee);

        let snapshot = WeeklySnapshot {
            week: 0,
            date,
            weight_lbs: state.weight_lbs,
            body_fat_percent: state.body_fat_percent,
            lean_mass_lbs: state.lean_mass_lbs(),
            fat_mass_lbs: state.fat_mass_lbs(),
            daily_calorie_target: initial_intake.max(calorie_floor(metabolism.tdee)),
            tdee: metabolism.tdee,
            weekly_caloric_balance: 0.0,
            total_weight_lost_lbs: 0.0,
            muscle_gain_lbs: 0.0,
            rmr: metabolism.rmr,
        };
        (state, metabolism, snapshot)
    }

    /// Advance one week from `state`, returning the next state and its snapshot
    fn step(&self, week: u32, state: BodyState) -> (BodyState, WeeklySnapshot) {
        let profile = self.profile;
        let date = self.date_of_week(week);
        let age_years = age_on(profile.date_of_birth, date);

        let metabolism = self.metabolism(state.weight_lbs, age_years);
        let adaptation = metabolic_adaptation(week, state.body_fat_percent, self.is_bodybuilder);
        let adapted_tdee = metabolism.tdee * adaptation;

        // Deficit needed to reach the goal body fat by the end date
        let remaining_weeks = self.total_weeks.saturating_sub(week).max(1);
        let fat_mass = state.fat_mass_lbs();
        let lean_mass = state.lean_mass_lbs();
        let goal_fraction = self.goal.target_body_fat_percent / 100.0;
        let goal_fat_mass = goal_fraction * lean_mass / (1.0 - goal_fraction);
        let remaining_fat = (fat_mass - goal_fat_mass).max(0.0);
        let weekly_fat_loss = remaining_fat / f64::from(remaining_weeks);
        let daily_deficit = weekly_fat_loss * KCAL_PER_LB / 7.0;

        let daily_calorie_target = (adapted_tdee - daily_deficit).max(calorie_floor(adapted_tdee));
        let weekly_caloric_balance = (adapted_tdee - daily_calorie_target) * 7.0;
        let weekly_delta = weekly_caloric_balance / KCAL_PER_LB;

        let (fat_loss, lean_loss) = partition_weight_change(
            weekly_delta,
            state.body_fat_percent,
            profile.resistance_training,
            profile.daily_protein_g,
            state.weight_lbs,
            self.goal.target_body_fat_percent,
            self.is_bodybuilder,
        );

        let muscle_gain = if profile.resistance_training {
            estimate_muscle_gain(&MuscleGainInputs {
                weight_lbs: state.weight_lbs,
                training_frequency: self.training.training_days(),
                training_volume: self.training.volume_units(),
                intensity: self.training.intensity,
                daily_protein_g: profile.daily_protein_g,
                age_years,
                sex: profile.sex,
                experience: profile.experience,
                is_bodybuilder: self.is_bodybuilder,
            })
        } else {
            0.0
        };

        let new_fat_mass = (fat_mass - fat_loss).max(0.0);
        let new_lean_mass =
            (lean_mass - lean_loss + muscle_gain).max(LEAN_MASS_FLOOR_FRACTION * state.weight_lbs);
        let new_weight = new_fat_mass + new_lean_mass;
        let next = BodyState {
            weight_lbs: new_weight,
            body_fat_percent: new_fat_mass / new_weight * 100.0,
        };

        debug!(
            week,
            %date,
            weight_lbs = next.weight_lbs,
            body_fat_percent = next.body_fat_percent,
            adaptation,
            adapted_tdee,
            daily_calorie_target,
            muscle_gain,
            "Simulated week"
        );

        let snapshot = WeeklySnapshot {
            week,
            date,
            weight_lbs: new_weight,
            body_fat_percent: next.body_fat_percent,
            lean_mass_lbs: new_lean_mass,
            fat_mass_lbs: new_fat_mass,
            daily_calorie_target,
            tdee: adapted_tdee,
            weekly_caloric_balance,
            total_weight_lost_lbs: self.initial_weight_lbs - new_weight,
            muscle_gain_lbs: muscle_gain,
            rmr: metabolism.rmr,
        };
        (next, snapshot)
    }
}

/// Lowest daily target allowed for a given expenditure
fn calorie_floor(tdee: f64) -> f64 {
    (tdee / 3.0).max(MIN_DAILY_CALORIES)
}

/// Predict the week-by-week trajectory from `profile` toward `goal`
///
/// The result holds `goal.total_weeks() + 1` snapshots unless the goal is
/// reached earlier, in which case the last snapshot satisfies both targets.
///
/// # Errors
///
/// `InvalidGoal` for a goal body fat outside [0, 100), a non-positive goal
/// weight or an end date before the start date; `InvalidRange` for a
/// non-positive weight, body fat outside [0, 100), more than 7 workout days
/// or negative protein. Nothing is simulated when validation fails.
pub fn predict_trajectory(profile: &Profile, goal: &Goal) -> PredictorResult<Trajectory> {
    validate_inputs(profile, goal)?;

    let simulation = Simulation::new(profile, goal);
    let (mut state, initial_metabolism, baseline) = simulation.baseline();

    let mut snapshots = Vec::with_capacity(simulation.total_weeks as usize + 1);
    snapshots.push(baseline);

    let mut outcome = Outcome::HorizonReached;
    for week in 1..=simulation.total_weeks {
        let (next, snapshot) = simulation.step(week, state);
        state = next;
        snapshots.push(snapshot);

        if goal.is_reached(state.weight_lbs, state.body_fat_percent) {
            outcome = Outcome::Converged;
            break;
        }
    }

    info!(
        weeks = snapshots.len() - 1,
        total_weeks = simulation.total_weeks,
        ?outcome,
        final_weight_lbs = state.weight_lbs,
        final_body_fat_percent = state.body_fat_percent,
        "Trajectory prediction complete"
    );

    Ok(Trajectory {
        snapshots,
        outcome,
        total_weeks: simulation.total_weeks,
        training: simulation.training,
        initial_metabolism,
        assumes_enhanced_training: simulation.is_bodybuilder,
    })
}
