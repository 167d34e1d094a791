//! Metabolic adaptation model
//!
//! Sustained deficits slow energy expenditure. The slowdown is modelled as a
//! multiplier on TDEE that decays with elapsed weeks and with leanness.

/// Floor of the time-based decay for the general population
const BASELINE_FLOOR: f64 = 0.85;
/// Weeks over which the general decay would reach zero if unfloored
const BASELINE_DECAY_WEEKS: f64 = 300.0;

/// Floor of the time-based decay for bodybuilders (enhanced-training assumption)
const BODYBUILDER_FLOOR: f64 = 0.80;
const BODYBUILDER_DECAY_WEEKS: f64 = 200.0;

/// Body fat at which the leanness factor is exactly 1.0
const LEANNESS_PIVOT_PERCENT: f64 = 30.0;
const LEANNESS_FLOOR: f64 = 0.9;

/// Multiplier applied to TDEE in week `week` of a deficit
///
/// `baseline = max(0.85, 1 - week/300)`, or `max(0.80, 1 - week/200)` for
/// bodybuilders. The leanness factor `1 - (30 - bf)/100` is floored at 0.9
/// and has no upper cap, so bodies above 30% fat get a multiplier above 1.0.
pub fn metabolic_adaptation(week: u32, body_fat_percent: f64, is_bodybuilder: bool) -> f64 {
    let week = f64::from(week);
    let baseline = if is_bodybuilder {
        (1.0 - week / BODYBUILDER_DECAY_WEEKS).max(BODYBUILDER_FLOOR)
    } else {
        (1.0 - week / BASELINE_DECAY_WEEKS).max(BASELINE_FLOOR)
    };
    let leanness =
        (1.0 - (LEANNESS_PIVOT_PERCENT - body_fat_percent) / 100.0).max(LEANNESS_FLOOR);

    baseline * leanness
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_week_general() {
        // 1 - 1/300, no leanness penalty at 30%
        let m = metabolic_adaptation(1, 30.0, false);
        assert!((m - (1.0 - 1.0 / 300.0)).abs() < 1e-12);
    }

    #[test]
    fn test_floors() {
        assert!((metabolic_adaptation(500, 30.0, false) - 0.85).abs() < 1e-12);
        assert!((metabolic_adaptation(500, 30.0, true) - 0.80).abs() < 1e-12);
        // Lowest possible value: bodybuilder floor times leanness floor
        assert!((metabolic_adaptation(500, 2.0, true) - 0.72).abs() < 1e-12);
    }

    #[test]
    fn test_leanness_factor() {
        // 20% body fat -> 0.9 factor; 25% -> 0.95
        let base = 1.0 - 10.0 / 300.0;
        assert!((metabolic_adaptation(10, 20.0, false) - base * 0.9).abs() < 1e-12);
        assert!((metabolic_adaptation(10, 25.0, false) - base * 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_high_body_fat_raises_multiplier() {
        // 40% body fat -> leanness factor 1.10
        let m = metabolic_adaptation(1, 40.0, false);
        assert!((m - (1.0 - 1.0 / 300.0) * 1.10).abs() < 1e-12);
        assert!(m > 1.0);
        assert!(metabolic_adaptation(1, 45.0, false) > metabolic_adaptation(1, 30.0, false));
    }

    #[test]
    fn test_bodybuilder_decays_faster() {
        assert!(metabolic_adaptation(20, 15.0, true) < metabolic_adaptation(20, 15.0, false));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Multiplier stays within [0.72, 1 + max(bf - 30, 0)/100]
        #[test]
        fn prop_bounded(week in 1u32..1000, bf in 0.0f64..70.0, bb in any::<bool>()) {
            let m = metabolic_adaptation(week, bf, bb);
            let upper = 1.0 + (bf - 30.0).max(0.0) / 100.0;
            prop_assert!(m >= 0.72 - 1e-12 && m <= upper + 1e-12, "multiplier {} out of range", m);
        }

        /// Property: More weeks never reduce adaptation (multiplier non-increasing)
        #[test]
        fn prop_non_increasing_in_time(week in 1u32..500, bf in 5.0f64..40.0, bb in any::<bool>()) {
            prop_assert!(metabolic_adaptation(week + 1, bf, bb) <= metabolic_adaptation(week, bf, bb));
        }
    }
}
