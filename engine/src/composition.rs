//! Body-composition partitioning
//!
//! Splits a week's mass change between fat and lean tissue, estimates
//! concurrent muscle accretion, and classifies body-fat levels.
//!
//! # Enhanced-training assumption
//!
//! The bodybuilder profile (strength focus with intermediate or higher
//! experience) multiplies muscle gain by 2.5 and lets more of the loss come
//! from fat. Both encode an assumption of performance-enhancing drug use and
//! should be called out wherever results are shown to a person.

use crate::profile::{BiologicalSex, ExperienceLevel};
use serde::{Deserialize, Serialize};

const BASE_FAT_RATIO: f64 = 0.75;
const RATIO_STEP: f64 = 0.05;
const BODYBUILDER_RATIO_BONUS: f64 = 0.10;
const RATIO_CAP: f64 = 0.90;
const BODYBUILDER_RATIO_CAP: f64 = 0.95;

/// Multiplier on muscle gain under the enhanced-training assumption
pub const ENHANCED_GAIN_MULTIPLIER: f64 = 2.5;

/// Share of a mass change attributed to fat tissue
fn fat_loss_ratio(
    body_fat_percent: f64,
    resistance_training: bool,
    daily_protein_g: f64,
    weight_lbs: f64,
    is_bodybuilder: bool,
) -> f64 {
    let mut ratio = BASE_FAT_RATIO;

    if body_fat_percent > 30.0 {
        ratio += RATIO_STEP;
    } else if body_fat_percent < 15.0 {
        ratio -= RATIO_STEP;
    }

    if resistance_training {
        ratio += RATIO_STEP;
    }

    let protein_adequacy = (daily_protein_g / (weight_lbs * 0.8)).min(1.0);
    ratio += protein_adequacy * RATIO_STEP;

    if is_bodybuilder {
        (ratio + BODYBUILDER_RATIO_BONUS).min(BODYBUILDER_RATIO_CAP)
    } else {
        ratio.min(RATIO_CAP)
    }
}

/// Split a weekly mass change into `(fat, lean)` components
///
/// The two parts always sum to `weekly_delta_lbs`. `_goal_body_fat_percent`
/// does not influence the split.
pub fn partition_weight_change(
    weekly_delta_lbs: f64,
    body_fat_percent: f64,
    resistance_training: bool,
    daily_protein_g: f64,
    weight_lbs: f64,
    _goal_body_fat_percent: f64,
    is_bodybuilder: bool,
) -> (f64, f64) {
    let ratio = fat_loss_ratio(
        body_fat_percent,
        resistance_training,
        daily_protein_g,
        weight_lbs,
        is_bodybuilder,
    );
    (weekly_delta_lbs * ratio, weekly_delta_lbs * (1.0 - ratio))
}

/// Monthly lean gain as a fraction of body weight, by experience
fn monthly_gain_rate(experience: ExperienceLevel) -> f64 {
    match experience {
        ExperienceLevel::Beginner => 0.0125,
        ExperienceLevel::Novice => 0.0100,
        ExperienceLevel::Intermediate => 0.0075,
        ExperienceLevel::Advanced => 0.0050,
        ExperienceLevel::Elite => 0.0025,
    }
}

/// Inputs to the weekly muscle-gain estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuscleGainInputs {
    pub weight_lbs: f64,
    /// Training days per week
    pub training_frequency: f64,
    /// Volume units per week
    pub training_volume: f64,
    /// Intensity score in [0, 1]
    pub intensity: f64,
    pub daily_protein_g: f64,
    pub age_years: i32,
    pub sex: BiologicalSex,
    pub experience: ExperienceLevel,
    pub is_bodybuilder: bool,
}

/// Estimated muscle gained per week, in pounds
pub fn estimate_muscle_gain(inputs: &MuscleGainInputs) -> f64 {
    let age_factor = if inputs.age_years < 30 {
        1.0
    } else if inputs.age_years < 40 {
        0.8
    } else {
        0.6
    };
    let sex_factor = if inputs.sex.is_male() { 1.0 } else { 0.8 };
    let frequency_factor = (inputs.training_frequency / 3.0).min(1.25);
    let volume_intensity_factor = ((inputs.training_volume * inputs.intensity) / 7.0).min(1.25);
    let protein_factor = (inputs.daily_protein_g / (inputs.weight_lbs * 1.6)).min(1.25);

    let mut monthly_rate = monthly_gain_rate(inputs.experience)
        * age_factor
        * sex_factor
        * frequency_factor
        * volume_intensity_factor
        * protein_factor;

    if inputs.is_bodybuilder && inputs.experience.is_intermediate_or_above() {
        monthly_rate *= ENHANCED_GAIN_MULTIPLIER;
    }

    (monthly_rate * inputs.weight_lbs) / 4.0
}

// ============================================================================
// Body Fat Categories
// ============================================================================

/// Visual body-fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    VeryLean,
    Lean,
    Average,
    AboveAverage,
    HighBodyFat,
    Obese,
}

impl BodyFatCategory {
    const ORDERED: [BodyFatCategory; 6] = [
        BodyFatCategory::VeryLean,
        BodyFatCategory::Lean,
        BodyFatCategory::Average,
        BodyFatCategory::AboveAverage,
        BodyFatCategory::HighBodyFat,
        BodyFatCategory::Obese,
    ];

    /// Exclusive upper body-fat bound for this category
    pub fn upper_bound(&self, sex: BiologicalSex) -> f64 {
        match (self, sex) {
            (BodyFatCategory::VeryLean, BiologicalSex::Male) => 10.0,
            (BodyFatCategory::VeryLean, BiologicalSex::Female) => 18.0,
            (BodyFatCategory::Lean, BiologicalSex::Male) => 14.0,
            (BodyFatCategory::Lean, BiologicalSex::Female) => 22.0,
            (BodyFatCategory::Average, BiologicalSex::Male) => 19.0,
            (BodyFatCategory::Average, BiologicalSex::Female) => 27.0,
            (BodyFatCategory::AboveAverage, BiologicalSex::Male) => 24.0,
            (BodyFatCategory::AboveAverage, BiologicalSex::Female) => 32.0,
            (BodyFatCategory::HighBodyFat, BiologicalSex::Male) => 29.0,
            (BodyFatCategory::HighBodyFat, BiologicalSex::Female) => 37.0,
            (BodyFatCategory::Obese, _) => f64::INFINITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BodyFatCategory::VeryLean => "Very Lean",
            BodyFatCategory::Lean => "Lean",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::AboveAverage => "Above Average",
            BodyFatCategory::HighBodyFat => "High Body Fat",
            BodyFatCategory::Obese => "Obese",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BodyFatCategory::VeryLean => "Visible abs, vascularity, striations",
            BodyFatCategory::Lean => "Some muscle definition, less visible abs",
            BodyFatCategory::Average => "Little muscle definition, soft look",
            BodyFatCategory::AboveAverage => "No visible abs, excess fat",
            BodyFatCategory::HighBodyFat => "Excess fat all around, round physique",
            BodyFatCategory::Obese => "Significant excess fat all around",
        }
    }

    /// Rough time needed to reach visible abdominals from this category
    pub fn time_to_visible_abs(&self) -> &'static str {
        match self {
            BodyFatCategory::VeryLean => "3-4 weeks",
            BodyFatCategory::Lean => "2-3 months",
            BodyFatCategory::Average => "3-4 months",
            BodyFatCategory::AboveAverage => "4-6 months",
            BodyFatCategory::HighBodyFat => "6-12 months",
            BodyFatCategory::Obese => "12+ months",
        }
    }
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    BodyFatCategory::ORDERED
        .into_iter()
        .find(|category| body_fat_percent < category.upper_bound(sex))
        .unwrap_or(BodyFatCategory::Obese)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn gain_inputs() -> MuscleGainInputs {
        MuscleGainInputs {
            weight_lbs: 200.0,
            training_frequency: 3.0,
            training_volume: 20.0,
            intensity: 0.35,
            daily_protein_g: 320.0,
            age_years: 25,
            sex: BiologicalSex::Male,
            experience: ExperienceLevel::Beginner,
            is_bodybuilder: false,
        }
    }

    #[rstest]
    // 0.75 + 0.05 (bf>30) + 0.05 (rt) + 0.05 (protein) = 0.90
    #[case(35.0, true, 200.0, 200.0, false, 0.90)]
    // 0.75 - 0.05 (bf<15) + 0 + 0.05 * 0.5 = 0.725
    #[case(12.0, false, 80.0, 200.0, false, 0.725)]
    // 0.75 + 0.05 + 0.05 + 0.10 = 0.95 cap for bodybuilders
    #[case(20.0, true, 200.0, 200.0, true, 0.95)]
    // 0.75 + 0.05 + 0.05 + 0.05 = 0.90 cap for everyone else
    #[case(31.0, true, 400.0, 200.0, false, 0.90)]
    fn test_fat_ratio(
        #[case] bf: f64,
        #[case] rt: bool,
        #[case] protein: f64,
        #[case] weight: f64,
        #[case] bodybuilder: bool,
        #[case] expected: f64,
    ) {
        let (fat, lean) = partition_weight_change(2.0, bf, rt, protein, weight, 10.0, bodybuilder);
        assert!((fat - 2.0 * expected).abs() < 1e-9, "fat {} expected {}", fat, 2.0 * expected);
        assert!((lean - 2.0 * (1.0 - expected)).abs() < 1e-9);
    }

    #[test]
    fn test_partition_handles_gain() {
        let (fat, lean) = partition_weight_change(-1.0, 20.0, false, 0.0, 180.0, 10.0, false);
        assert!((fat + 0.75).abs() < 1e-12);
        assert!((lean + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_muscle_gain_beginner_baseline() {
        // all factors 1.0 except volume-intensity (20 * 0.35 / 7 = 1.0)
        let gain = estimate_muscle_gain(&gain_inputs());
        // 0.0125 * 200 / 4
        assert!((gain - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_muscle_gain_age_and_sex() {
        let inputs = MuscleGainInputs {
            age_years: 45,
            sex: BiologicalSex::Female,
            ..gain_inputs()
        };
        // 0.625 * 0.6 * 0.8
        assert!((estimate_muscle_gain(&inputs) - 0.3).abs() < 1e-9);

        let thirties = MuscleGainInputs { age_years: 35, ..gain_inputs() };
        assert!((estimate_muscle_gain(&thirties) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_muscle_gain_enhanced_multiplier() {
        let natural = MuscleGainInputs {
            experience: ExperienceLevel::Advanced,
            ..gain_inputs()
        };
        let enhanced = MuscleGainInputs { is_bodybuilder: true, ..natural };
        let ratio = estimate_muscle_gain(&enhanced) / estimate_muscle_gain(&natural);
        assert!((ratio - ENHANCED_GAIN_MULTIPLIER).abs() < 1e-9);

        // Flag without the experience does nothing
        let beginner = MuscleGainInputs { is_bodybuilder: true, ..gain_inputs() };
        assert_eq!(estimate_muscle_gain(&beginner), estimate_muscle_gain(&gain_inputs()));
    }

    #[test]
    fn test_muscle_gain_factor_caps() {
        let maxed = MuscleGainInputs {
            training_frequency: 7.0,
            training_volume: 40.0,
            intensity: 1.0,
            daily_protein_g: 1000.0,
            ..gain_inputs()
        };
        // 0.625 * 1.25^3
        assert!((estimate_muscle_gain(&maxed) - 0.625 * 1.25f64.powi(3)).abs() < 1e-9);
    }

    #[rstest]
    #[case(8.0, BiologicalSex::Male, BodyFatCategory::VeryLean)]
    #[case(10.0, BiologicalSex::Male, BodyFatCategory::Lean)]
    #[case(18.5, BiologicalSex::Male, BodyFatCategory::Average)]
    #[case(30.0, BiologicalSex::Male, BodyFatCategory::Obese)]
    #[case(17.0, BiologicalSex::Female, BodyFatCategory::VeryLean)]
    #[case(30.0, BiologicalSex::Female, BodyFatCategory::AboveAverage)]
    #[case(36.9, BiologicalSex::Female, BodyFatCategory::HighBodyFat)]
    fn test_classify_body_fat(
        #[case] bf: f64,
        #[case] sex: BiologicalSex,
        #[case] expected: BodyFatCategory,
    ) {
        assert_eq!(classify_body_fat(bf, sex), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Fat and lean parts always sum to the input delta
        #[test]
        fn prop_partition_conserves_mass(
            delta in -5.0f64..5.0,
            bf in 3.0f64..60.0,
            rt in any::<bool>(),
            protein in 0.0f64..400.0,
            weight in 90.0f64..400.0,
            bb in any::<bool>()
        ) {
            let (fat, lean) = partition_weight_change(delta, bf, rt, protein, weight, 10.0, bb);
            prop_assert!((fat + lean - delta).abs() < 1e-9);
        }

        /// Property: Fat share of a loss lies between 0.70 and 0.95
        #[test]
        fn prop_fat_ratio_bounds(
            bf in 3.0f64..60.0,
            rt in any::<bool>(),
            protein in 0.0f64..400.0,
            weight in 90.0f64..400.0,
            bb in any::<bool>()
        ) {
            let (fat, _) = partition_weight_change(1.0, bf, rt, protein, weight, 10.0, bb);
            prop_assert!(fat >= 0.70 - 1e-12 && fat <= 0.95 + 1e-12);
        }

        /// Property: Muscle gain is never negative for non-negative inputs
        #[test]
        fn prop_muscle_gain_non_negative(
            weight in 90.0f64..400.0,
            freq in 0.0f64..7.0,
            volume in 0.0f64..20.0,
            protein in 0.0f64..400.0,
            age in 16i32..80
        ) {
            let inputs = MuscleGainInputs {
                weight_lbs: weight,
                training_frequency: freq,
                training_volume: volume,
                daily_protein_g: protein,
                age_years: age,
                ..gain_inputs()
            };
            prop_assert!(estimate_muscle_gain(&inputs) >= 0.0);
        }
    }
}
