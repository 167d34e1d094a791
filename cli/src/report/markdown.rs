//! Markdown narrative report

use super::{Report, ReportOptions, ENHANCED_TRAINING_NOTICE};
use std::fmt::{self, Write};
use weight_predictor_engine::metabolism::age_on;
use weight_predictor_engine::{classify_body_fat, FeetInchesHeight, ScoreBand};

const SCORE_BANDS: &str = "  - 0.00 to 0.20 - Very low\n  - 0.21 to 0.40 - Low\n  - 0.41 to 0.60 - Moderate\n  - 0.61 to 0.80 - High\n  - 0.81 to 1.00 - Very high\n";

pub(super) fn render(report: &Report, options: &ReportOptions) -> Result<String, fmt::Error> {
    let d = options.decimals;
    let profile = &report.profile;
    let goal = &report.goal;
    let prediction = &report.prediction;
    let summary = &prediction.summary;
    let metabolism = &prediction.initial_metabolism;
    let training = &prediction.training;
    let (Some(initial), Some(last)) = (prediction.weeks.first(), prediction.weeks.last()) else {
        return Err(fmt::Error);
    };

    let mut out = String::new();
    writeln!(out, "# Weight Loss Forecast: {}", prediction.scenario)?;
    writeln!(out)?;

    if options.include_notice && prediction.assumes_enhanced_training {
        writeln!(out, "> **Note:** {}", ENHANCED_TRAINING_NOTICE)?;
        writeln!(out)?;
    }

    writeln!(out, "## 1. Personal Profile")?;
    writeln!(out)?;
    writeln!(out, "- Start Date: {}", summary.start_date)?;
    writeln!(out, "- End Date: {}", summary.end_date)?;
    writeln!(out, "- Age: {} years", age_on(profile.date_of_birth, goal.start_date))?;
    writeln!(out, "- Sex: {}", profile.sex)?;
    writeln!(
        out,
        "- Height: {} ({:.1} cm)",
        FeetInchesHeight::from_cm(profile.height_cm),
        profile.height_cm
    )?;
    writeln!(out, "- Initial Weight: {:.*} lbs", d, profile.weight_lbs)?;
    writeln!(out, "- Goal Weight: {:.*} lbs", d, goal.target_weight_lbs)?;
    writeln!(out, "- Initial Body Fat: {:.*}%", d, profile.body_fat_percent)?;
    writeln!(out, "- Goal Body Fat: {:.*}%", d, goal.target_body_fat_percent)?;
    writeln!(out, "- Activity Level: {}", profile.activity_level.description())?;
    writeln!(out, "- Experience Level: {}", profile.experience)?;
    writeln!(out)?;

    writeln!(out, "## 2. Metabolic Calculations")?;
    writeln!(out)?;
    writeln!(out, "- Resting Metabolic Rate (RMR): {:.0} calories/day", metabolism.rmr)?;
    writeln!(
        out,
        "- Total Daily Energy Expenditure (TDEE): {:.0} calories/day",
        metabolism.tdee
    )?;
    writeln!(out, "- Thermic Effect of Food (TEF): {:.0} calories/day", metabolism.tef)?;
    writeln!(
        out,
        "- Non-Exercise Activity Thermogenesis (NEAT): {:.0} calories/day",
        metabolism.neat
    )?;
    writeln!(
        out,
        "- Initial Daily Calorie Target: {:.0} calories/day",
        initial.daily_calorie_target
    )?;
    writeln!(out)?;

    writeln!(out, "## 3. Workout Analysis")?;
    writeln!(out)?;
    writeln!(out, "- Workout Type: {}", profile.workout_type)?;
    writeln!(out, "- Workout Frequency: {} days/week", profile.workout_days_per_week)?;
    for (label, score) in [
        ("Volume", training.volume),
        ("Intensity", training.intensity),
        ("Frequency", training.frequency),
    ] {
        writeln!(
            out,
            "- {} Score: {:.2} ({})",
            label,
            score,
            ScoreBand::classify(score)
        )?;
    }
    out.push_str(SCORE_BANDS);
    writeln!(out, "- Resistance Training: {}", yes_no(profile.resistance_training))?;
    writeln!(out, "- Athlete: {}", yes_no(profile.is_athlete))?;
    writeln!(out)?;

    writeln!(out, "## 4. Body Composition")?;
    writeln!(out)?;
    writeln!(out, "- Initial Lean Mass: {:.*} lbs", d, initial.lean_mass_lbs)?;
    writeln!(out, "- Initial Fat Mass: {:.*} lbs", d, initial.fat_mass_lbs)?;
    writeln!(
        out,
        "- Estimated Weekly Muscle Gain: {:.3} lbs",
        summary.average_weekly_muscle_gain_lbs
    )?;
    writeln!(out)?;

    writeln!(out, "## 5. Weekly Forecast")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Week | Date | Weight (lbs) | Body Fat % | Lean Mass | Fat Mass | Calories | TDEE | Weekly Balance | Muscle Gain |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|---|---|---|---|")?;
    for week in &prediction.weeks {
        writeln!(
            out,
            "| {} | {} | {:.*} | {:.*} | {:.*} | {:.*} | {:.0} | {:.0} | {:.0} | {:.3} |",
            week.week,
            week.date,
            d,
            week.weight_lbs,
            d,
            week.body_fat_percent,
            d,
            week.lean_mass_lbs,
            d,
            week.fat_mass_lbs,
            week.daily_calorie_target,
            week.tdee,
            week.weekly_caloric_balance,
            week.muscle_gain_lbs
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## 6. Body Fat Categories Over Time")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Category | Body Fat % | Date | Description | Est. Time to Visible Abs |"
    )?;
    writeln!(out, "|---|---|---|---|---|")?;
    for week in &prediction.weeks {
        let category = classify_body_fat(week.body_fat_percent, profile.sex);
        writeln!(
            out,
            "| {} | {:.*}% | {} | {} | {} |",
            category.name(),
            d,
            week.body_fat_percent,
            week.date,
            category.description(),
            category.time_to_visible_abs()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## 7. Metabolic Adaptation")?;
    writeln!(out)?;
    writeln!(out, "- Week 1 Adaptation: {:.2}", summary.first_week_adaptation)?;
    writeln!(out, "- Final Week Adaptation: {:.2}", summary.final_week_adaptation)?;
    writeln!(out)?;

    writeln!(out, "## 8. Final Results")?;
    writeln!(out)?;
    writeln!(out, "- Duration: {} weeks", summary.weeks)?;
    writeln!(out, "- Goal Reached: {}", yes_no(summary.goal_reached))?;
    writeln!(out, "- Total Weight Loss: {:.*} lbs", d, summary.total_weight_loss_lbs)?;
    writeln!(
        out,
        "- Total Body Fat Reduction: {:.*}%",
        d, summary.total_body_fat_reduction
    )?;
    writeln!(out, "- Final Weight: {:.*} lbs", d, summary.final_weight_lbs)?;
    writeln!(out, "- Final Body Fat: {:.*}%", d, summary.final_body_fat_percent)?;
    writeln!(
        out,
        "- Average Weekly Weight Loss: {:.2} lbs",
        summary.average_weekly_loss_lbs
    )?;
    writeln!(out, "- Total Muscle Gain: {:.*} lbs", d, summary.total_muscle_gain_lbs)?;
    writeln!(
        out,
        "- Final Daily Calorie Target: {:.0} calories",
        last.daily_calorie_target
    )?;
    writeln!(out, "- Final TDEE: {:.0} calories", last.tdee)?;
    writeln!(
        out,
        "- Final Weekly Caloric Balance: {:.0} calories",
        last.weekly_caloric_balance
    )?;
    writeln!(out)?;

    writeln!(out, "## 9. Body Fat Category Progression")?;
    writeln!(out)?;
    for (label, category) in [
        ("Initial", summary.initial_category),
        ("Final", summary.final_category),
    ] {
        writeln!(out, "- {} Category: {}", label, category.name())?;
        writeln!(out, "   - Description: {}", category.description())?;
        writeln!(
            out,
            "   - Estimated Time to Visible Abs: {}",
            category.time_to_visible_abs()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## 10. Insights")?;
    writeln!(out)?;
    writeln!(
        out,
        "- Metabolic rate adapted by {:.1}% over the forecast.",
        summary.adaptation_percent
    )?;
    writeln!(
        out,
        "- Lean mass retained: {:.1}% of the starting lean mass.",
        summary.lean_mass_preserved_percent
    )?;
    writeln!(
        out,
        "- Muscle gain averaged {:.3} lbs per week, which is {}.",
        summary.average_weekly_muscle_gain_lbs, summary.muscle_gain_rating
    )?;
    writeln!(
        out,
        "- Final body fat places you in the {} category.",
        summary.final_category.name()
    )?;
    writeln!(
        out,
        "- To maintain the result, eat around {:.0} calories per day.",
        summary.maintenance_calories
    )?;
    writeln!(out)?;

    writeln!(out, "## 11. Next Steps")?;
    writeln!(out)?;
    if summary.final_body_fat_percent > goal.target_body_fat_percent {
        writeln!(out, "- Continue with the current plan.")?;
    } else {
        writeln!(
            out,
            "- Consider a muscle building phase to further improve body composition."
        )?;
    }
    writeln!(
        out,
        "- Aim for about {:.0} g of protein per day to support lean mass.",
        summary.suggested_protein_g
    )?;
    writeln!(
        out,
        "- A reasonable next body fat goal is {:.1}%.",
        summary.next_body_fat_goal
    )?;

    Ok(out)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_sections_present() {
        let report = sample_report();
        let text = render(&report, &ReportOptions::default()).unwrap();

        assert!(text.starts_with("# Weight Loss Forecast: Autumn cut"));
        for heading in [
            "## 1. Personal Profile",
            "## 2. Metabolic Calculations",
            "## 5. Weekly Forecast",
            "## 8. Final Results",
            "## 11. Next Steps",
        ] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("- Height: 5'9\" (175.3 cm)"));
        assert!(text.contains("- Initial Weight: 245.6 lbs"));
        assert!(text.contains("| 0 | 2024-09-09 | 245.6 | 30.5 |"));
    }

    #[test]
    fn test_enhanced_training_notice() {
        let report = sample_report();
        let text = render(&report, &ReportOptions::default()).unwrap();
        assert!(text.contains(ENHANCED_TRAINING_NOTICE));

        let quiet = ReportOptions {
            include_notice: false,
            ..ReportOptions::default()
        };
        let text = render(&report, &quiet).unwrap();
        assert!(!text.contains(ENHANCED_TRAINING_NOTICE));
    }

    #[test]
    fn test_decimals_option() {
        let report = sample_report();
        let options = ReportOptions {
            decimals: 2,
            ..ReportOptions::default()
        };
        let text = render(&report, &options).unwrap();
        assert!(text.contains("- Initial Weight: 245.60 lbs"));
    }
}
