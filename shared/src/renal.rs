//! Creatinine clearance calculator (Cockcroft-Gault)

use crate::category::{Bands, Severity};
use crate::errors::CalcResult;
use crate::types::BiologicalSex;
use crate::units::CreatinineUnit;
use crate::validation::{
    validate_age_years, validate_serum_creatinine_mg_dl, validate_weight_kg,
};
use serde::{Deserialize, Serialize};

/// Kidney function band for an estimated creatinine clearance (mL/min)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenalFunctionCategory {
    KidneyFailure,
    SevereReduction,
    ModerateReduction,
    MildReduction,
    Normal,
}

impl RenalFunctionCategory {
    pub fn bands() -> Bands<RenalFunctionCategory> {
        Bands::new(
            RenalFunctionCategory::KidneyFailure,
            vec![
                (15.0, RenalFunctionCategory::SevereReduction),
                (30.0, RenalFunctionCategory::ModerateReduction),
                (60.0, RenalFunctionCategory::MildReduction),
                (90.0, RenalFunctionCategory::Normal),
            ],
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            RenalFunctionCategory::KidneyFailure => "Kidney Failure",
            RenalFunctionCategory::SevereReduction => "Severely Reduced",
            RenalFunctionCategory::ModerateReduction => "Moderately Reduced",
            RenalFunctionCategory::MildReduction => "Mildly Reduced",
            RenalFunctionCategory::Normal => "Normal",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RenalFunctionCategory::KidneyFailure => Severity::Danger,
            RenalFunctionCategory::SevereReduction => Severity::Danger,
            RenalFunctionCategory::ModerateReduction => Severity::Warning,
            RenalFunctionCategory::MildReduction => Severity::Caution,
            RenalFunctionCategory::Normal => Severity::Good,
        }
    }
}

/// Creatinine clearance form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatinineClearanceInput {
    pub sex: BiologicalSex,
    pub age_years: i32,
    pub weight_kg: f64,
    /// Serum creatinine in the lab's reporting unit
    pub serum_creatinine: f64,
    #[serde(default)]
    pub creatinine_unit: CreatinineUnit,
}

/// Creatinine clearance result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatinineClearanceResult {
    /// Estimated clearance in mL/min
    pub clearance_ml_min: f64,
    pub category: RenalFunctionCategory,
    /// Serum creatinine after normalization to mg/dL
    pub serum_creatinine_mg_dl: f64,
}

/// Estimate creatinine clearance with the Cockcroft-Gault equation
///
/// CrCl = ((140 − age) × weight(kg)) / (72 × Scr(mg/dL)), × 0.85 if female
pub fn creatinine_clearance(
    input: &CreatinineClearanceInput,
) -> CalcResult<CreatinineClearanceResult> {
    validate_age_years(input.age_years)?;
    validate_weight_kg(input.weight_kg)?;

    let scr_mg_dl = input.creatinine_unit.to_mg_dl(input.serum_creatinine);
    validate_serum_creatinine_mg_dl(scr_mg_dl)?;

    let mut clearance =
        ((140.0 - input.age_years as f64) * input.weight_kg) / (72.0 * scr_mg_dl);
    if input.sex == BiologicalSex::Female {
        clearance *= 0.85;
    }

    Ok(CreatinineClearanceResult {
        clearance_ml_min: clearance,
        category: RenalFunctionCategory::bands().classify(clearance),
        serum_creatinine_mg_dl: scr_mg_dl,
    })
}
