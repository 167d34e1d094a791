//! Input validation functions
//!
//! Field-level checks applied to raw scenario input before it becomes a
//! [`Profile`](crate::profile::Profile) / [`Goal`](crate::profile::Goal).

use chrono::NaiveDate;

/// Validate body weight (in pounds)
/// Valid range: 44-1100 lbs (20-500 kg)
pub fn validate_weight_lbs(weight_lbs: f64) -> Result<(), String> {
    if weight_lbs.is_nan() || weight_lbs.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_lbs < 44.0 {
        return Err("Weight must be at least 44 lbs (20 kg)".to_string());
    }
    if weight_lbs > 1100.0 {
        return Err("Weight must be at most 1100 lbs (500 kg)".to_string());
    }
    Ok(())
}

/// Validate body fat percentage, which must stay below 100
pub fn validate_body_fat(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if value < 0.0 || value >= 100.0 {
        return Err("Body fat must be at least 0% and below 100%".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate daily protein intake in grams
pub fn validate_protein_g(protein_g: f64) -> Result<(), String> {
    if protein_g.is_nan() || protein_g.is_infinite() {
        return Err("Protein must be a valid number".to_string());
    }
    if protein_g < 0.0 {
        return Err("Protein cannot be negative".to_string());
    }
    if protein_g > 1000.0 {
        return Err("Protein value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate workout days per week
pub fn validate_workout_days(days: u8) -> Result<(), String> {
    if days > 7 {
        return Err("A week has at most 7 workout days".to_string());
    }
    Ok(())
}

/// Validate date of birth against the simulation start date
/// Age at the start must be between 1 and 150 years
pub fn validate_date_of_birth(dob: NaiveDate, start_date: NaiveDate) -> Result<(), String> {
    if dob > start_date {
        return Err("Date of birth cannot be after the start date".to_string());
    }

    match start_date.years_since(dob) {
        Some(age) if age < 1 => Err("Age must be at least 1 year".to_string()),
        Some(age) if age > 150 => Err("Age cannot exceed 150 years".to_string()),
        None => Err("Invalid date of birth".to_string()),
        _ => Ok(()),
    }
}

/// Validate the goal dates
pub fn validate_goal_dates(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), String> {
    if end_date < start_date {
        return Err("End date cannot be before the start date".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Current Weight",
        "body_fat_percent" => "Current Body Fat",
        "height" | "height_cm" => "Height",
        "date_of_birth" => "Date of Birth",
        "daily_protein_g" => "Daily Protein",
        "workout_days_per_week" => "Workout Days",
        "target_weight" => "Goal Weight",
        "target_body_fat_percent" => "Goal Body Fat",
        "end_date" => "End Date",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Run a field check and attach the field name to any failure
pub fn check_field(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}
