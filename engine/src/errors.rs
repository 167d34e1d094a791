//! Error types for the prediction engine

use thiserror::Error;

/// Errors raised while validating inputs for a trajectory prediction.
///
/// Every variant is produced before any simulation state exists, so a
/// failed call never yields a partial progression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// An ordinal or numeric input lies outside its defined range
    /// (e.g. activity tier not in 1..=5)
    #[error("Value out of range: {0}")]
    InvalidRange(String),

    /// Job or leisure activity label is not one of the recognized categories
    #[error("Invalid activity category: {0}")]
    InvalidCategory(String),

    /// Workout type label is not one of the recognized kinds
    #[error("Invalid workout type: {0}")]
    InvalidWorkoutType(String),

    /// Goal would make the simulation arithmetic undefined
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
}

impl PredictorError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            PredictorError::InvalidRange(_) => "INVALID_RANGE",
            PredictorError::InvalidCategory(_) => "INVALID_CATEGORY",
            PredictorError::InvalidWorkoutType(_) => "INVALID_WORKOUT_TYPE",
            PredictorError::InvalidGoal(_) => "INVALID_GOAL",
        }
    }
}

/// Result alias used throughout the engine
pub type PredictorResult<T> = Result<T, PredictorError>;
