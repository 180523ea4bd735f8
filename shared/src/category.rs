//! Categorizer engine
//!
//! Every calculator maps its numeric result into a named bucket using a
//! fixed table of clinical/fitness thresholds. Tables are expressed as an
//! ordered list of lower-bound cuts over a base category, which makes them
//! contiguous and exhaustive by construction: any finite value lands in
//! exactly one bucket. Lower bounds are inclusive, so a BMI of exactly 25.0
//! classifies as Overweight, not Normal.

use serde::{Deserialize, Serialize};

/// Display tier attached to each category, used by the result panels to
/// pick a badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Good,
    Caution,
    Warning,
    Danger,
}

impl Severity {
    /// CSS class suffix used by the calculator result badges
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Good => "good",
            Severity::Caution => "caution",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// An ordered threshold table over a base category.
///
/// `base` applies below the first cut; each cut's category applies from its
/// lower bound (inclusive) up to the next cut.
#[derive(Debug, Clone)]
pub struct Bands<C> {
    base: C,
    cuts: Vec<(f64, C)>,
}

impl<C: Copy> Bands<C> {
    /// Build a table from the base category and ascending (lower_bound,
    /// category) cuts. Cuts must be strictly ascending.
    pub fn new(base: C, cuts: Vec<(f64, C)>) -> Self {
        debug_assert!(
            cuts.windows(2).all(|w| w[0].0 < w[1].0),
            "threshold cuts must be strictly ascending"
        );
        Self { base, cuts }
    }

    /// Classify a value: the last cut whose lower bound is at or below the
    /// value wins; values below every cut fall into the base category.
    pub fn classify(&self, value: f64) -> C {
        self.cuts
            .iter()
            .take_while(|(lower, _)| value >= *lower)
            .last()
            .map(|(_, category)| *category)
            .unwrap_or(self.base)
    }

    /// Enumerate the bucket spans as (category, lower, upper) for display
    /// tables; the first lower bound and last upper bound are open-ended.
    pub fn spans(&self) -> Vec<(C, f64, f64)> {
        let mut spans = Vec::with_capacity(self.cuts.len() + 1);
        let mut lower = f64::NEG_INFINITY;
        let mut current = self.base;
        for &(cut, category) in &self.cuts {
            spans.push((current, lower, cut));
            lower = cut;
            current = category;
        }
        spans.push((current, lower, f64::INFINITY));
        spans
    }
}
