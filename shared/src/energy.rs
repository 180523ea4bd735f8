//! Energy expenditure calculators
//!
//! BMR (three published equations), TDEE with calorie targets and macro
//! splits, and workout energy expenditure via MET values or the Keytel
//! heart-rate regression.

use crate::errors::{CalcError, CalcResult};
use crate::types::{ActivityLevel, BiologicalSex, HealthProfile};
use crate::validation::{
    validate_age_years, validate_duration_minutes, validate_heart_rate, validate_met,
    validate_percentage, validate_weight_kg,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// BMR and TDEE
// ============================================================================

/// BMR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Mifflin-St Jeor (most accurate for most people)
    #[default]
    MifflinStJeor,
    /// Harris-Benedict (original, less accurate)
    HarrisBenedict,
    /// Katch-McArdle (requires body fat %, most accurate if available)
    KatchMcArdle,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
) -> f64 {
    match sex {
        BiologicalSex::Male => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
        }
        BiologicalSex::Female => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
        }
    }
}

/// Calculate BMR using Katch-McArdle equation
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn calculate_bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> CalcResult<f64> {
    validate_weight_kg(weight_kg)?;
    validate_percentage("body_fat_percent", body_fat_percent)?;
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    Ok(370.0 + 21.6 * lean_body_mass)
}

/// Calculate BMR with the specified method
///
/// Katch-McArdle needs a measured body fat percentage; the other methods
/// ignore it.
pub fn calculate_bmr(
    profile: &HealthProfile,
    method: BmrMethod,
    body_fat_percent: Option<f64>,
) -> CalcResult<f64> {
    profile.check_ranges()?;
    match method {
        BmrMethod::MifflinStJeor => Ok(calculate_bmr_mifflin(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        )),
        BmrMethod::HarrisBenedict => Ok(calculate_bmr_harris_benedict(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        )),
        BmrMethod::KatchMcArdle => {
            let body_fat = body_fat_percent.ok_or_else(|| {
                CalcError::invalid("body_fat_percent", "required for Katch-McArdle")
            })?;
            calculate_bmr_katch_mcardle(profile.weight_kg, body_fat)
        }
    }
}

/// TDEE calculation result with breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdeeResult {
    /// Basal Metabolic Rate
    pub bmr: f64,
    /// Total Daily Energy Expenditure
    pub tdee: f64,
    /// Activity multiplier used
    pub activity_multiplier: f64,
    /// Calories for weight loss (500 deficit, floored at 1200)
    pub calories_for_loss: f64,
    /// Calories for weight gain (500 surplus)
    pub calories_for_gain: f64,
    /// Calories for maintenance
    pub calories_for_maintenance: f64,
}

/// Calculate complete TDEE result
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee_result(profile: &HealthProfile, method: BmrMethod) -> CalcResult<TdeeResult> {
    let bmr = calculate_bmr(profile, method, None)?;
    let tdee = bmr * profile.activity_level.multiplier();

    Ok(TdeeResult {
        bmr,
        tdee,
        activity_multiplier: profile.activity_level.multiplier(),
        calories_for_loss: (tdee - 500.0).max(1200.0), // Never below 1200
        calories_for_gain: tdee + 500.0,
        calories_for_maintenance: tdee,
    })
}

// ============================================================================
// Macro Splits
// ============================================================================

/// Macro split preset offered on the TDEE page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroPlan {
    /// 30% protein / 40% carbs / 30% fat
    #[default]
    Balanced,
    /// 40% protein / 20% carbs / 40% fat
    LowCarb,
    /// 40% protein / 40% carbs / 20% fat
    HighProtein,
}

impl MacroPlan {
    /// Calorie fractions as (protein, carbs, fat); always sums to 1
    pub fn fractions(&self) -> (f64, f64, f64) {
        match self {
            MacroPlan::Balanced => (0.30, 0.40, 0.30),
            MacroPlan::LowCarb => (0.40, 0.20, 0.40),
            MacroPlan::HighProtein => (0.40, 0.40, 0.20),
        }
    }
}

/// Daily macro targets in grams
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Split a daily calorie target into gram targets
///
/// Uses 4 kcal/g for protein and carbs, 9 kcal/g for fat
pub fn macro_targets(calories: f64, plan: MacroPlan) -> CalcResult<MacroTargets> {
    if !calories.is_finite() || calories <= 0.0 {
        return Err(CalcError::invalid("calories", "must be a positive number"));
    }
    let (protein, carbs, fat) = plan.fractions();
    Ok(MacroTargets {
        protein_g: calories * protein / 4.0,
        carbs_g: calories * carbs / 4.0,
        fat_g: calories * fat / 9.0,
    })
}

// ============================================================================
// Calories Burned
// ============================================================================

/// Calories burned from a MET value
///
/// Formula: kcal = duration(min) × (MET × 3.5 × weight(kg)) / 200
pub fn calories_burned_met(met: f64, weight_kg: f64, duration_min: f64) -> CalcResult<f64> {
    validate_met(met)?;
    validate_weight_kg(weight_kg)?;
    validate_duration_minutes(duration_min)?;
    Ok(duration_min * (met * 3.5 * weight_kg) / 200.0)
}

/// Calories burned from average workout heart rate (Keytel regression)
///
/// kcal/min, men: (-55.0969 + 0.6309×HR + 0.1988×weight + 0.2017×age) / 4.184
/// kcal/min, women: (-20.4022 + 0.4472×HR - 0.1263×weight + 0.074×age) / 4.184
pub fn calories_burned_heart_rate(
    sex: BiologicalSex,
    heart_rate_bpm: f64,
    weight_kg: f64,
    age_years: i32,
    duration_min: f64,
) -> CalcResult<f64> {
    validate_heart_rate("heart_rate", heart_rate_bpm)?;
    validate_weight_kg(weight_kg)?;
    validate_age_years(age_years)?;
    validate_duration_minutes(duration_min)?;

    let age = age_years as f64;
    let kcal_per_min = match sex {
        BiologicalSex::Male => {
            (-55.0969 + 0.6309 * heart_rate_bpm + 0.1988 * weight_kg + 0.2017 * age) / 4.184
        }
        BiologicalSex::Female => {
            (-20.4022 + 0.4472 * heart_rate_bpm - 0.1263 * weight_kg + 0.074 * age) / 4.184
        }
    };

    if kcal_per_min <= 0.0 {
        // the regression is only meaningful at exercise heart rates
        return Err(CalcError::undefined(
            "heart rate below the regression's valid range",
        ));
    }
    Ok(kcal_per_min * duration_min)
}
