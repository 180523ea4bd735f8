//! Input validation functions
//!
//! Range checks for every calculator field, applied before any formula
//! evaluation. Evaluators are total over the validated domain, so a value
//! that passes these checks can never produce NaN or infinity downstream.
//! Uses custom validators here plus the `validator` crate's derive macros
//! on the typed request structs.

use crate::errors::{CalcError, CalcResult};

/// Reject NaN and infinities for a named field
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(CalcError::invalid(field, "must be a valid number"));
    }
    Ok(())
}

/// Validate body weight (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> CalcResult<()> {
    ensure_finite("weight", weight_kg)?;
    if weight_kg < 20.0 {
        return Err(CalcError::invalid("weight", "must be at least 20 kg"));
    }
    if weight_kg > 500.0 {
        return Err(CalcError::invalid("weight", "must be at most 500 kg"));
    }
    Ok(())
}

/// Validate height (in cm)
/// Valid range: 50-300 cm (covers infants to tallest recorded humans)
pub fn validate_height_cm(height_cm: f64) -> CalcResult<()> {
    ensure_finite("height", height_cm)?;
    if height_cm < 50.0 {
        return Err(CalcError::invalid("height", "must be at least 50 cm"));
    }
    if height_cm > 300.0 {
        return Err(CalcError::invalid("height", "must be at most 300 cm"));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> CalcResult<()> {
    if age_years < 1 {
        return Err(CalcError::invalid("age", "must be at least 1 year"));
    }
    if age_years > 120 {
        return Err(CalcError::invalid("age", "must be at most 120 years"));
    }
    Ok(())
}

/// Validate a body circumference (waist, neck, hip) in cm
pub fn validate_circumference_cm(field: &str, value_cm: f64) -> CalcResult<()> {
    ensure_finite(field, value_cm)?;
    if value_cm < 10.0 {
        return Err(CalcError::invalid(field, "must be at least 10 cm"));
    }
    if value_cm > 300.0 {
        return Err(CalcError::invalid(field, "must be at most 300 cm"));
    }
    Ok(())
}

/// Validate heart rate (bpm)
pub fn validate_heart_rate(field: &str, bpm: f64) -> CalcResult<()> {
    ensure_finite(field, bpm)?;
    if bpm < 20.0 {
        return Err(CalcError::invalid(field, "heart rate too low"));
    }
    if bpm > 300.0 {
        return Err(CalcError::invalid(field, "heart rate too high"));
    }
    Ok(())
}

/// Validate a blood pressure reading (mmHg); systolic must exceed diastolic
pub fn validate_blood_pressure(systolic: f64, diastolic: f64) -> CalcResult<()> {
    ensure_finite("systolic", systolic)?;
    ensure_finite("diastolic", diastolic)?;
    if !(50.0..=300.0).contains(&systolic) {
        return Err(CalcError::invalid("systolic", "must be between 50 and 300 mmHg"));
    }
    if !(20.0..=200.0).contains(&diastolic) {
        return Err(CalcError::invalid("diastolic", "must be between 20 and 200 mmHg"));
    }
    if systolic <= diastolic {
        return Err(CalcError::invalid(
            "systolic",
            "must be greater than diastolic pressure",
        ));
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(field: &str, value: f64) -> CalcResult<()> {
    ensure_finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(CalcError::invalid(field, "must be between 0 and 100"));
    }
    Ok(())
}

/// Validate an exercise intensity fraction (0 exclusive to 1 inclusive)
pub fn validate_intensity(intensity: f64) -> CalcResult<()> {
    ensure_finite("intensity", intensity)?;
    if intensity <= 0.0 || intensity > 1.0 {
        return Err(CalcError::invalid(
            "intensity",
            "must be a fraction above 0 and at most 1",
        ));
    }
    Ok(())
}

/// Validate duration in minutes
pub fn validate_duration_minutes(minutes: f64) -> CalcResult<()> {
    ensure_finite("duration", minutes)?;
    if minutes <= 0.0 {
        return Err(CalcError::invalid("duration", "must be positive"));
    }
    if minutes > 1440.0 {
        // 24 hours
        return Err(CalcError::invalid("duration", "cannot exceed 24 hours"));
    }
    Ok(())
}

/// Validate a run/walk distance in meters
pub fn validate_distance_meters(distance_m: f64) -> CalcResult<()> {
    ensure_finite("distance", distance_m)?;
    if distance_m < 100.0 {
        return Err(CalcError::invalid("distance", "must be at least 100 m"));
    }
    if distance_m > 10000.0 {
        return Err(CalcError::invalid("distance", "must be at most 10 km"));
    }
    Ok(())
}

/// Validate serum creatinine (in mg/dL, after unit normalization)
pub fn validate_serum_creatinine_mg_dl(scr_mg_dl: f64) -> CalcResult<()> {
    ensure_finite("serum_creatinine", scr_mg_dl)?;
    if scr_mg_dl <= 0.0 {
        return Err(CalcError::undefined(
            "serum creatinine of zero would divide by zero",
        ));
    }
    if scr_mg_dl < 0.1 {
        return Err(CalcError::invalid("serum_creatinine", "must be at least 0.1 mg/dL"));
    }
    if scr_mg_dl > 20.0 {
        return Err(CalcError::invalid("serum_creatinine", "must be at most 20 mg/dL"));
    }
    Ok(())
}

/// Validate repetition count for rep-max estimation
pub fn validate_reps(reps: u32) -> CalcResult<()> {
    if reps == 0 {
        return Err(CalcError::invalid("reps", "must be at least 1"));
    }
    if reps > 30 {
        return Err(CalcError::invalid("reps", "must be at most 30"));
    }
    Ok(())
}

/// Validate a lifted weight in kg (lighter floor than body weight)
pub fn validate_lifted_weight_kg(weight_kg: f64) -> CalcResult<()> {
    ensure_finite("weight", weight_kg)?;
    if weight_kg <= 0.0 {
        return Err(CalcError::invalid("weight", "must be positive"));
    }
    if weight_kg > 1000.0 {
        return Err(CalcError::invalid("weight", "must be at most 1000 kg"));
    }
    Ok(())
}

/// Validate a MET value for activity energy expenditure
pub fn validate_met(met: f64) -> CalcResult<()> {
    ensure_finite("met", met)?;
    if !(0.5..=30.0).contains(&met) {
        return Err(CalcError::invalid("met", "must be between 0.5 and 30"));
    }
    Ok(())
}

/// Validate a gestational week (0-42)
pub fn validate_gestational_week(week: u32) -> CalcResult<()> {
    if week > 42 {
        return Err(CalcError::invalid(
            "gestational_week",
            "must be at most 42 weeks",
        ));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" => "Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "waist" => "Waist Circumference",
        "neck" => "Neck Circumference",
        "hip" => "Hip Circumference",
        "systolic" => "Systolic Pressure",
        "diastolic" => "Diastolic Pressure",
        "resting_heart_rate" => "Resting Heart Rate",
        "heart_rate" => "Heart Rate",
        "serum_creatinine" => "Serum Creatinine",
        "distance" => "Distance",
        "duration" => "Duration",
        "reps" => "Repetitions",
        "intensity" => "Training Intensity",
        "body_fat_percent" => "Body Fat Percentage",
        "gestational_week" => "Week of Pregnancy",
        "met" => "MET Value",
        _ => field_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(170.0).is_ok());
        assert!(validate_height_cm(50.0).is_ok()); // Minimum
        assert!(validate_height_cm(300.0).is_ok()); // Maximum
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(-10.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age_years(30).is_ok());
        assert!(validate_age_years(1).is_ok());
        assert!(validate_age_years(120).is_ok());
        assert!(validate_age_years(0).is_err());
        assert!(validate_age_years(-5).is_err());
        assert!(validate_age_years(130).is_err());
    }

    #[test]
    fn test_validate_blood_pressure() {
        assert!(validate_blood_pressure(120.0, 80.0).is_ok());
        assert!(validate_blood_pressure(80.0, 120.0).is_err()); // swapped
        assert!(validate_blood_pressure(120.0, 120.0).is_err()); // equal
        assert!(validate_blood_pressure(400.0, 80.0).is_err());
        assert!(validate_blood_pressure(120.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_heart_rate() {
        assert!(validate_heart_rate("heart_rate", 60.0).is_ok());
        assert!(validate_heart_rate("heart_rate", 180.0).is_ok());
        assert!(validate_heart_rate("heart_rate", 10.0).is_err());
        assert!(validate_heart_rate("heart_rate", 350.0).is_err());
    }

    #[test]
    fn test_validate_intensity() {
        assert!(validate_intensity(0.7).is_ok());
        assert!(validate_intensity(1.0).is_ok());
        assert!(validate_intensity(0.0).is_err());
        assert!(validate_intensity(1.1).is_err());
    }

    #[test]
    fn test_validate_serum_creatinine() {
        assert!(validate_serum_creatinine_mg_dl(1.0).is_ok());
        assert!(validate_serum_creatinine_mg_dl(0.05).is_err());
        assert!(validate_serum_creatinine_mg_dl(25.0).is_err());
        // zero divides by zero downstream, reported as undefined
        assert!(matches!(
            validate_serum_creatinine_mg_dl(0.0),
            Err(crate::errors::CalcError::UndefinedResult { .. })
        ));
    }

    #[test]
    fn test_validate_reps() {
        assert!(validate_reps(1).is_ok());
        assert!(validate_reps(10).is_ok());
        assert!(validate_reps(30).is_ok());
        assert!(validate_reps(0).is_err());
        assert!(validate_reps(31).is_err());
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("serum_creatinine"), "Serum Creatinine");
        assert_eq!(get_field_display_label("waist"), "Waist Circumference");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    // Property-based tests
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_invalid_height_above_max(height in 300.1f64..500.0) {
            prop_assert!(validate_height_cm(height).is_err());
        }

        #[test]
        fn prop_valid_percentage_range(pct in 0.0f64..=100.0) {
            prop_assert!(validate_percentage("body_fat_percent", pct).is_ok());
        }

        #[test]
        fn prop_valid_heart_rate_range(bpm in 20.0f64..=300.0) {
            prop_assert!(validate_heart_rate("heart_rate", bpm).is_ok());
        }

        #[test]
        fn prop_systolic_must_exceed_diastolic(
            systolic in 50.0f64..=300.0,
            diastolic in 20.0f64..=200.0
        ) {
            let result = validate_blood_pressure(systolic, diastolic);
            if systolic <= diastolic {
                prop_assert!(result.is_err());
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
