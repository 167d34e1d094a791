//! Unit conversions used at the input boundary
//!
//! The simulation runs in pounds because its energy constant is expressed
//! per pound of tissue (3500 kcal/lb). The Mifflin-St Jeor estimator is
//! calibrated in kilograms, so the loop converts with [`lbs_to_kg`] right
//! before calling it. Heights are always centimeters internally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Kilograms per stone
pub const KG_PER_STONE: f64 = 6.35029;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
#[inline]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

// ============================================================================
// Weight Units
// ============================================================================

/// Unit a scenario states its body weights in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    #[default]
    Lbs,
    Stone,
}

impl WeightUnit {
    /// Convert a value in this unit to pounds
    pub fn to_lbs(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value / KG_PER_LB,
            WeightUnit::Lbs => value,
            WeightUnit::Stone => value * KG_PER_STONE / KG_PER_LB,
        }
    }

    /// Convert pounds into this unit
    pub fn from_lbs(&self, lbs: f64) -> f64 {
        match self {
            WeightUnit::Kg => lbs * KG_PER_LB,
            WeightUnit::Lbs => lbs,
            WeightUnit::Stone => lbs * KG_PER_LB / KG_PER_STONE,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            "st" | "stone" | "stones" => Ok(WeightUnit::Stone),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height
// ============================================================================

/// Height given either in centimeters or as feet plus inches
///
/// Deserializes from `{ cm = 180.0 }` or `{ feet = 5, inches = 9 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeightInput {
    Centimeters { cm: f64 },
    FeetInches(FeetInchesHeight),
}

impl HeightInput {
    /// Height in centimeters
    pub fn to_cm(&self) -> f64 {
        match self {
            HeightInput::Centimeters { cm } => *cm,
            HeightInput::FeetInches(height) => height.to_cm(),
        }
    }
}

/// Represents height in feet and inches for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    #[serde(default)]
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from total inches
    pub fn from_total_inches(total_inches: f64) -> Self {
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = total_inches % 12.0;
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm / CM_PER_INCH)
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        self.to_total_inches() * CM_PER_INCH
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}
