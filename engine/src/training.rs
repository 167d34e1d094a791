//! Training-quality scores
//!
//! Derives normalized volume, intensity and frequency scores from the
//! workout style and weekly session count. Scores are computed once per
//! simulation and held constant.

use crate::profile::WorkoutType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume units that map to a perfect volume score
const REFERENCE_VOLUME: f64 = 20.0;
/// Sessions per week that map to a perfect frequency score
const REFERENCE_FREQUENCY_DAYS: f64 = 3.0;

/// Normalized training scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingScores {
    pub volume: f64,
    pub intensity: f64,
    pub frequency: f64,
}

impl TrainingScores {
    /// Weekly training days implied by the frequency score
    pub fn training_days(&self) -> f64 {
        self.frequency * REFERENCE_FREQUENCY_DAYS
    }

    /// Weekly volume units implied by the volume score
    pub fn volume_units(&self) -> f64 {
        self.volume * REFERENCE_VOLUME
    }
}

/// (volume base, intensity) per workout style
fn workout_constants(workout_type: WorkoutType) -> (f64, f64) {
    match workout_type {
        WorkoutType::Bodybuilding => (20.0, 0.8),
        WorkoutType::Cardio => (10.0, 0.4),
        WorkoutType::GeneralFitness => (15.0, 0.6),
    }
}

/// Score a training week
///
/// `volume = min(base * days / 7 / 20, 1)`, `intensity` is the style's
/// constant and `frequency = min(days / 3, 1)`.
pub fn training_scores(workout_days_per_week: u8, workout_type: WorkoutType) -> TrainingScores {
    let days = f64::from(workout_days_per_week);
    let (volume_base, intensity) = workout_constants(workout_type);

    TrainingScores {
        volume: (volume_base * days / 7.0 / REFERENCE_VOLUME).min(1.0),
        intensity,
        frequency: (days / REFERENCE_FREQUENCY_DAYS).min(1.0),
    }
}

/// Qualitative band for a [0, 1] score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score <= 0.20 {
            ScoreBand::VeryLow
        } else if score <= 0.40 {
            ScoreBand::Low
        } else if score <= 0.60 {
            ScoreBand::Moderate
        } else if score <= 0.80 {
            ScoreBand::High
        } else {
            ScoreBand::VeryHigh
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::VeryLow => "Very low",
            ScoreBand::Low => "Low",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::High => "High",
            ScoreBand::VeryHigh => "Very high",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
