//! One-rep max estimation and loading percentages

use crate::errors::{CalcError, CalcResult};
use crate::series::DerivedSeries;
use crate::validation::{ensure_finite, validate_lifted_weight_kg, validate_reps};
use serde::{Deserialize, Serialize};

/// 1RM estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Epley: weight × (1 + reps/30)
    #[default]
    Epley,
    /// Brzycki: weight × 36 / (37 − reps)
    Brzycki,
}

/// Estimate a one-rep max from a submaximal set
///
/// A single-rep set already is the max; the formulas only apply above one
/// rep.
pub fn one_rep_max(weight_kg: f64, reps: u32, formula: OneRepMaxFormula) -> CalcResult<f64> {
    validate_lifted_weight_kg(weight_kg)?;
    validate_reps(reps)?;
    if reps == 1 {
        return Ok(weight_kg);
    }
    let reps = f64::from(reps);
    Ok(match formula {
        OneRepMaxFormula::Epley => weight_kg * (1.0 + reps / 30.0),
        OneRepMaxFormula::Brzycki => weight_kg * 36.0 / (37.0 - reps),
    })
}

/// One row of the loading percentage table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepMaxEntry {
    /// Percentage of the one-rep max
    pub percent: u32,
    /// Load at that percentage, in kg
    pub weight_kg: f64,
    /// Repetitions typically possible at that load (Epley inverse)
    pub estimated_reps: u32,
}

/// Full 1RM result with the loading table the page renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRepMaxResult {
    pub one_rep_max_kg: f64,
    pub formula: OneRepMaxFormula,
    /// 100% down to 50% in 5% steps
    pub table: Vec<RepMaxEntry>,
}

/// Loading percentages from 100% down to 50% in 5% steps.
///
/// Accepts any positive max so estimates above the raw input ceiling still
/// get a table.
pub fn rep_max_table(one_rep_max_kg: f64) -> CalcResult<Vec<RepMaxEntry>> {
    ensure_finite("weight", one_rep_max_kg)?;
    if one_rep_max_kg <= 0.0 {
        return Err(CalcError::invalid("weight", "must be positive"));
    }
    Ok((0u32..=10)
        .map(|step| {
            let percent = 100 - step * 5;
            let ratio = percent as f64 / 100.0;
            // invert Epley: reps at which this load is the set max
            let estimated_reps = if percent == 100 {
                1
            } else {
                (30.0 * (1.0 / ratio - 1.0)).round() as u32
            };
            RepMaxEntry {
                percent,
                weight_kg: one_rep_max_kg * ratio,
                estimated_reps,
            }
        })
        .collect())
}

/// Compute the 1RM and its loading table in one call
pub fn one_rep_max_result(
    weight_kg: f64,
    reps: u32,
    formula: OneRepMaxFormula,
) -> CalcResult<OneRepMaxResult> {
    let one_rep_max_kg = one_rep_max(weight_kg, reps, formula)?;
    if !one_rep_max_kg.is_finite() || one_rep_max_kg <= 0.0 {
        return Err(CalcError::undefined("one-rep max estimate diverged"));
    }
    Ok(OneRepMaxResult {
        one_rep_max_kg,
        formula,
        table: rep_max_table(one_rep_max_kg)?,
    })
}

/// The loading table as a chart series (x = %1RM, y = load)
pub fn rep_max_series(one_rep_max_kg: f64) -> CalcResult<DerivedSeries> {
    ensure_finite("weight", one_rep_max_kg)?;
    if one_rep_max_kg <= 0.0 {
        return Err(CalcError::invalid("weight", "must be positive"));
    }
    Ok(DerivedSeries::generate(
        "Load by %1RM",
        (0u32..=10).map(|step| f64::from(100 - step * 5)),
        |percent| one_rep_max_kg * percent / 100.0,
    ))
}
