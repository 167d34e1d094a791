//! Metabolic estimator
//!
//! Pure functions for resting metabolic rate, thermic effect of food,
//! non-exercise activity thermogenesis and total daily energy expenditure.
//! Inputs are not range-checked here; nonsensical values propagate.

use crate::profile::{ActivityCategory, ActivityLevel, BiologicalSex};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Multiplier applied to RMR for athletes
const ATHLETE_RMR_FACTOR: f64 = 1.1;

/// Fraction of protein grams spent on digestion, in kcal per gram
const PROTEIN_TEF_FACTOR: f64 = 0.3;

/// Whole years elapsed between `dob` and `on`
///
/// One year is subtracted when the birthday has not yet come around in
/// `on`'s calendar year.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> i32 {
    let before_birthday = (on.month(), on.day()) < (dob.month(), dob.day());
    on.year() - dob.year() - i32::from(before_birthday)
}

/// Calculate Resting Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: RMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: RMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
///
/// Athletes get a 10% uplift.
pub fn resting_metabolic_rate(
    weight_kg: f64,
    age_years: i32,
    sex: BiologicalSex,
    height_cm: f64,
    is_athlete: bool,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let rmr = match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    };
    if is_athlete {
        rmr * ATHLETE_RMR_FACTOR
    } else {
        rmr
    }
}

/// Calories spent digesting the day's protein
pub fn thermic_effect_of_food(protein_g: f64) -> f64 {
    protein_g * PROTEIN_TEF_FACTOR
}

fn job_neat(category: ActivityCategory) -> f64 {
    match category {
        ActivityCategory::Sedentary => 100.0,
        ActivityCategory::Light => 300.0,
        ActivityCategory::Moderate => 500.0,
        ActivityCategory::Active => 700.0,
    }
}

fn leisure_neat(category: ActivityCategory) -> f64 {
    match category {
        ActivityCategory::Sedentary => 50.0,
        ActivityCategory::Light => 150.0,
        ActivityCategory::Moderate => 250.0,
        ActivityCategory::Active => 350.0,
    }
}

/// Calories from non-workout movement at work and in leisure time
pub fn non_exercise_activity_thermogenesis(
    job: ActivityCategory,
    leisure: ActivityCategory,
) -> f64 {
    job_neat(job) + leisure_neat(leisure)
}

/// Everything needed to estimate daily energy expenditure at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyInputs {
    pub weight_kg: f64,
    pub age_years: i32,
    pub sex: BiologicalSex,
    pub activity_level: ActivityLevel,
    pub height_cm: f64,
    pub is_athlete: bool,
    pub protein_g: f64,
    pub job_activity: ActivityCategory,
    pub leisure_activity: ActivityCategory,
}

/// Energy expenditure with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetabolicBreakdown {
    /// Resting Metabolic Rate
    pub rmr: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Thermic Effect of Food
    pub tef: f64,
    /// Non-Exercise Activity Thermogenesis
    pub neat: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = RMR × activity multiplier + TEF + NEAT
pub fn total_daily_energy_expenditure(inputs: &EnergyInputs) -> f64 {
    metabolic_breakdown(inputs).tdee
}

/// Calculate TDEE and keep each component
pub fn metabolic_breakdown(inputs: &EnergyInputs) -> MetabolicBreakdown {
    let rmr = resting_metabolic_rate(
        inputs.weight_kg,
        inputs.age_years,
        inputs.sex,
        inputs.height_cm,
        inputs.is_athlete,
    );
    let activity_multiplier = inputs.activity_level.multiplier();
    let tef = thermic_effect_of_food(inputs.protein_g);
    let neat = non_exercise_activity_thermogenesis(inputs.job_activity, inputs.leisure_activity);

    MetabolicBreakdown {
        rmr,
        activity_multiplier,
        tef,
        neat,
        tdee: rmr * activity_multiplier + tef + neat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rmr_female_exact() {
        // 700 + 1031.25 - 125 - 161
        let rmr = resting_metabolic_rate(70.0, 25, BiologicalSex::Female, 165.0, false);
        assert_eq!(rmr, 1445.25);
    }

    #[test]
    fn test_rmr_male_and_athlete() {
        // 800 + 1125 - 150 + 5 = 1780
        let rmr = resting_metabolic_rate(80.0, 30, BiologicalSex::Male, 180.0, false);
        assert!((rmr - 1780.0).abs() < 1e-9);

        let athlete = resting_metabolic_rate(80.0, 30, BiologicalSex::Male, 180.0, true);
        assert!((athlete - 1958.0).abs() < 1e-9);
    }

    #[test]
    fn test_tef() {
        assert!((thermic_effect_of_food(150.0) - 45.0).abs() < 1e-9);
        assert_eq!(thermic_effect_of_food(0.0), 0.0);
    }

    #[rstest]
    #[case(ActivityCategory::Sedentary, ActivityCategory::Moderate, 350.0)]
    #[case(ActivityCategory::Sedentary, ActivityCategory::Sedentary, 150.0)]
    #[case(ActivityCategory::Light, ActivityCategory::Light, 450.0)]
    #[case(ActivityCategory::Active, ActivityCategory::Active, 1050.0)]
    #[case(ActivityCategory::Moderate, ActivityCategory::Sedentary, 550.0)]
    fn test_neat_table(
        #[case] job: ActivityCategory,
        #[case] leisure: ActivityCategory,
        #[case] expected: f64,
    ) {
        assert_eq!(non_exercise_activity_thermogenesis(job, leisure), expected);
    }

    #[test]
    fn test_neat_from_labels() {
        let job: ActivityCategory = "sedentary".parse().unwrap();
        let leisure: ActivityCategory = "moderate".parse().unwrap();
        assert_eq!(non_exercise_activity_thermogenesis(job, leisure), 350.0);
    }

    #[test]
    fn test_tdee_breakdown() {
        let inputs = EnergyInputs {
            weight_kg: 80.0,
            age_years: 30,
            sex: BiologicalSex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            height_cm: 180.0,
            is_athlete: false,
            protein_g: 150.0,
            job_activity: ActivityCategory::Sedentary,
            leisure_activity: ActivityCategory::Light,
        };
        let breakdown = metabolic_breakdown(&inputs);

        // 1780 * 1.55 + 45 + 250
        assert!((breakdown.tdee - 3054.0).abs() < 1e-9);
        assert_eq!(breakdown.neat, 250.0);
        assert_eq!(total_daily_energy_expenditure(&inputs), breakdown.tdee);
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let dob = date(1990, 6, 15);
        assert_eq!(age_on(dob, date(2023, 6, 14)), 32);
        assert_eq!(age_on(dob, date(2023, 6, 15)), 33);
        assert_eq!(age_on(date(1990, 1, 1), date(2023, 1, 1)), 33);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male RMR exceeds female RMR by exactly 166 kcal
        #[test]
        fn prop_sex_offset(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let male = resting_metabolic_rate(weight, age, BiologicalSex::Male, height, false);
            let female = resting_metabolic_rate(weight, age, BiologicalSex::Female, height, false);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: TDEE grows with activity tier, all else equal
        #[test]
        fn prop_tdee_increases_with_tier(
            weight in 50.0f64..130.0,
            height in 150.0f64..200.0,
            age in 18i32..70,
            tier in 1u8..5
        ) {
            let lower = EnergyInputs {
                weight_kg: weight,
                age_years: age,
                sex: BiologicalSex::Female,
                activity_level: ActivityLevel::from_tier(tier).unwrap(),
                height_cm: height,
                is_athlete: false,
                protein_g: 100.0,
                job_activity: ActivityCategory::Light,
                leisure_activity: ActivityCategory::Light,
            };
            let higher = EnergyInputs {
                activity_level: ActivityLevel::from_tier(tier + 1).unwrap(),
                ..lower
            };
            prop_assert!(
                total_daily_energy_expenditure(&higher) > total_daily_energy_expenditure(&lower)
            );
        }
    }
}
