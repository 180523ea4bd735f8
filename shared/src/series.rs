//! Derived series for table/chart calculators
//!
//! Calculators that render a curve or table (rep-max percentages, pregnancy
//! weight trajectory, heart rate zones) evaluate their formula over a small
//! fixed domain and hand the ordered pairs to the charting layer. Series
//! stay small; the charts never need more than 40 points.

use serde::{Deserialize, Serialize};

/// Upper bound on chart series length
pub const MAX_SERIES_POINTS: usize = 40;

/// One (independent variable, result) evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered sequence of formula evaluations for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedSeries {
    /// Chart legend label
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl DerivedSeries {
    /// Evaluate `f` at each point of the domain, in order
    pub fn generate<F>(name: impl Into<String>, domain: impl IntoIterator<Item = f64>, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let points: Vec<SeriesPoint> = domain
            .into_iter()
            .map(|x| SeriesPoint { x, y: f(x) })
            .collect();
        debug_assert!(points.len() <= MAX_SERIES_POINTS);
        debug_assert!(points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
