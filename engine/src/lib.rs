//! Weight Predictor Engine
//!
//! Week-by-week body weight and composition prediction for a calorie
//! deficit. Shared by the command-line tool and the WASM bindings.

pub mod adaptation;
pub mod composition;
pub mod errors;
pub mod metabolism;
pub mod profile;
pub mod simulation;
pub mod summary;
pub mod training;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use profile::*;
pub use simulation::{predict_trajectory, BodyState, Outcome, Trajectory, WeeklySnapshot};
pub use summary::{MuscleGainRating, TrajectorySummary};
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

pub use adaptation::metabolic_adaptation;
pub use composition::{classify_body_fat, BodyFatCategory};
pub use metabolism::{
    metabolic_breakdown, non_exercise_activity_thermogenesis, resting_metabolic_rate,
    total_daily_energy_expenditure, EnergyInputs, MetabolicBreakdown,
};
pub use training::{training_scores, ScoreBand, TrainingScores};
