//! Health Calculators WASM Module
//!
//! WebAssembly bindings for the calculator forms embedded in the site
//! pages. Scalar calculators return plain numbers; composite results and
//! chart series are returned as JSON strings for the rendering layer.

use health_calc_shared::validation::get_field_display_label;
use health_calc_shared::{
    body, cardio, energy, hydration, pregnancy, renal, strength,
    ActivityLevel, BiologicalSex, BmrMethod, CalcError, CreatinineUnit, ExerciseLoad,
    HealthProfile, MaxHrFormula, OneRepMaxFormula, WeightUnit,
};
use wasm_bindgen::prelude::*;

fn to_js(err: CalcError) -> JsValue {
    // surface the user-facing field label in form error messages
    let message = match &err {
        CalcError::InvalidInput { field, message } => {
            format!("{}: {}", get_field_display_label(field), message)
        }
        _ => err.to_string(),
    };
    JsValue::from_str(&message)
}

fn parse_js<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, JsValue>
where
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| JsValue::from_str(&format!("{}: {}", field, e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// Unit conversion
// ============================================================================

/// Convert a weight between display units ("kg", "lbs", "stone")
#[wasm_bindgen]
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    let from: WeightUnit = parse_js("from", from)?;
    let to: WeightUnit = parse_js("to", to)?;
    Ok(from.convert(value, to))
}

// ============================================================================
// Body composition
// ============================================================================

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, JsValue> {
    body::calculate_bmi(weight_kg, height_cm).map_err(to_js)
}

/// Full BMI panel (value, category, healthy weight range) as JSON
#[wasm_bindgen]
pub fn bmi_result_json(weight_kg: f64, height_cm: f64) -> Result<String, JsValue> {
    let result = body::calculate_bmi_result(weight_kg, height_cm).map_err(to_js)?;
    to_json(&result)
}

/// Navy-method body fat panel as JSON; hip is required for "female"
#[wasm_bindgen]
pub fn body_fat_navy_json(
    sex: &str,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
    weight_kg: Option<f64>,
) -> Result<String, JsValue> {
    let sex: BiologicalSex = parse_js("sex", sex)?;
    let measurements = body::NavyTapeMeasurements {
        sex,
        height_cm,
        waist_cm,
        neck_cm,
        hip_cm,
    };
    let result = body::body_fat_navy_result(&measurements, weight_kg).map_err(to_js)?;
    to_json(&result)
}

/// Waist-to-height ratio panel as JSON
#[wasm_bindgen]
pub fn waist_to_height_ratio_json(waist_cm: f64, height_cm: f64) -> Result<String, JsValue> {
    let result = body::waist_to_height_ratio(waist_cm, height_cm).map_err(to_js)?;
    to_json(&result)
}

/// Ideal body weight across the published formulas as JSON
#[wasm_bindgen]
pub fn ideal_weight_json(height_cm: f64, sex: &str) -> Result<String, JsValue> {
    let sex: BiologicalSex = parse_js("sex", sex)?;
    let result = body::calculate_ideal_weight(height_cm, sex).map_err(to_js)?;
    to_json(&result)
}

// ============================================================================
// Energy
// ============================================================================

fn profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity: &str,
) -> Result<HealthProfile, JsValue> {
    Ok(HealthProfile {
        height_cm,
        weight_kg,
        age_years,
        sex: parse_js("sex", sex)?,
        activity_level: parse_js::<ActivityLevel>("activity", activity)?,
    })
}

/// Calculate TDEE (Total Daily Energy Expenditure) via Mifflin-St Jeor
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity: &str,
) -> Result<f64, JsValue> {
    let profile = profile(weight_kg, height_cm, age_years, sex, activity)?;
    let result =
        energy::calculate_tdee_result(&profile, BmrMethod::MifflinStJeor).map_err(to_js)?;
    Ok(result.tdee)
}

/// Full TDEE panel (BMR, TDEE, calorie targets) as JSON
#[wasm_bindgen]
pub fn tdee_result_json(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity: &str,
) -> Result<String, JsValue> {
    let profile = profile(weight_kg, height_cm, age_years, sex, activity)?;
    let result =
        energy::calculate_tdee_result(&profile, BmrMethod::MifflinStJeor).map_err(to_js)?;
    to_json(&result)
}

/// Calories burned for an activity MET value
#[wasm_bindgen]
pub fn calories_burned_met(met: f64, weight_kg: f64, duration_min: f64) -> Result<f64, JsValue> {
    energy::calories_burned_met(met, weight_kg, duration_min).map_err(to_js)
}

/// Calories burned from average workout heart rate
#[wasm_bindgen]
pub fn calories_burned_heart_rate(
    sex: &str,
    heart_rate_bpm: f64,
    weight_kg: f64,
    age_years: i32,
    duration_min: f64,
) -> Result<f64, JsValue> {
    let sex: BiologicalSex = parse_js("sex", sex)?;
    energy::calories_burned_heart_rate(sex, heart_rate_bpm, weight_kg, age_years, duration_min)
        .map_err(to_js)
}

// ============================================================================
// Cardio
// ============================================================================

/// Max heart rate; `tanaka` switches from 220−age to 208−0.7×age
#[wasm_bindgen]
pub fn max_heart_rate(age_years: i32, tanaka: bool) -> Result<f64, JsValue> {
    let formula = if tanaka {
        MaxHrFormula::Tanaka
    } else {
        MaxHrFormula::Standard
    };
    cardio::max_heart_rate(age_years, formula).map_err(to_js)
}

/// Karvonen target heart rate
#[wasm_bindgen]
pub fn target_heart_rate(
    max_hr: f64,
    resting_hr: f64,
    intensity: f64,
) -> Result<f64, JsValue> {
    cardio::karvonen_target_hr(max_hr, resting_hr, intensity).map_err(to_js)
}

/// Five training zones as JSON, Karvonen when a resting HR is given
#[wasm_bindgen]
pub fn heart_rate_zones_json(max_hr: f64, resting_hr: Option<f64>) -> Result<String, JsValue> {
    let zones = cardio::heart_rate_zones(max_hr, resting_hr).map_err(to_js)?;
    to_json(&zones)
}

/// Mean arterial pressure panel as JSON
#[wasm_bindgen]
pub fn mean_arterial_pressure_json(systolic: f64, diastolic: f64) -> Result<String, JsValue> {
    let result = cardio::mean_arterial_pressure(systolic, diastolic).map_err(to_js)?;
    to_json(&result)
}

/// ACC/AHA blood pressure stage name
#[wasm_bindgen]
pub fn blood_pressure_stage(systolic: f64, diastolic: f64) -> Result<String, JsValue> {
    let category = cardio::classify_blood_pressure(systolic, diastolic).map_err(to_js)?;
    Ok(category.description().to_string())
}

/// Cooper 12-minute test VO2max panel as JSON
#[wasm_bindgen]
pub fn vo2max_cooper_json(distance_meters: f64) -> Result<String, JsValue> {
    let result = cardio::vo2max_cooper(distance_meters).map_err(to_js)?;
    to_json(&result)
}

// ============================================================================
// Strength
// ============================================================================

/// One-rep max; formula is "epley" or "brzycki"
#[wasm_bindgen]
pub fn one_rep_max(weight_kg: f64, reps: u32, formula: &str) -> Result<f64, JsValue> {
    let formula = match formula.to_lowercase().as_str() {
        "epley" => OneRepMaxFormula::Epley,
        "brzycki" => OneRepMaxFormula::Brzycki,
        other => {
            return Err(JsValue::from_str(&format!(
                "formula: unknown 1RM formula '{}'",
                other
            )))
        }
    };
    strength::one_rep_max(weight_kg, reps, formula).map_err(to_js)
}

/// 1RM with the full loading percentage table as JSON
#[wasm_bindgen]
pub fn one_rep_max_table_json(weight_kg: f64, reps: u32) -> Result<String, JsValue> {
    let result = strength::one_rep_max_result(weight_kg, reps, OneRepMaxFormula::Epley)
        .map_err(to_js)?;
    to_json(&result)
}

// ============================================================================
// Hydration
// ============================================================================

/// Daily water intake panel as JSON; exercise is "none", "moderate" or "heavy"
#[wasm_bindgen]
pub fn water_intake_json(
    weight_kg: f64,
    exercise: &str,
    hot_climate: bool,
    illness: bool,
    pregnant: bool,
    breastfeeding: bool,
) -> Result<String, JsValue> {
    let exercise = match exercise.to_lowercase().as_str() {
        "none" => ExerciseLoad::None,
        "moderate" => ExerciseLoad::Moderate,
        "heavy" => ExerciseLoad::Heavy,
        other => {
            return Err(JsValue::from_str(&format!(
                "exercise: unknown level '{}'",
                other
            )))
        }
    };
    let result = hydration::daily_water_intake(&hydration::WaterIntakeInput {
        weight_kg,
        exercise,
        hot_climate,
        illness,
        pregnant,
        breastfeeding,
    })
    .map_err(to_js)?;
    to_json(&result)
}

// ============================================================================
// Renal
// ============================================================================

/// Cockcroft-Gault creatinine clearance panel as JSON;
/// unit is "mg_dl" or "umol_l"
#[wasm_bindgen]
pub fn creatinine_clearance_json(
    sex: &str,
    age_years: i32,
    weight_kg: f64,
    serum_creatinine: f64,
    unit: &str,
) -> Result<String, JsValue> {
    let sex: BiologicalSex = parse_js("sex", sex)?;
    let creatinine_unit = match unit.to_lowercase().as_str() {
        "mg_dl" | "mg/dl" => CreatinineUnit::MgDl,
        "umol_l" | "umol/l" | "µmol/l" => CreatinineUnit::UmolL,
        other => {
            return Err(JsValue::from_str(&format!(
                "unit: unknown creatinine unit '{}'",
                other
            )))
        }
    };
    let result = renal::creatinine_clearance(&renal::CreatinineClearanceInput {
        sex,
        age_years,
        weight_kg,
        serum_creatinine,
        creatinine_unit,
    })
    .map_err(to_js)?;
    to_json(&result)
}

// ============================================================================
// Pregnancy
// ============================================================================

/// IOM weight-gain trajectory chart data as JSON
#[wasm_bindgen]
pub fn pregnancy_trajectory_json(
    pre_pregnancy_weight_kg: f64,
    height_cm: f64,
) -> Result<String, JsValue> {
    let result = pregnancy::weight_gain_trajectory(pre_pregnancy_weight_kg, height_cm)
        .map_err(to_js)?;
    to_json(&result)
}
