//! Health Calculator Formula Library
//!
//! The shared computation core behind the calculator pages. Every
//! calculator follows the same pipeline: normalize units, validate, run one
//! closed-form formula, classify the result against a fixed threshold
//! table, and (for the chart calculators) sample a small derived series.
//! Everything is pure and synchronous; the rendering layer consumes plain
//! result structs.

pub mod body;
pub mod cardio;
pub mod category;
pub mod energy;
pub mod errors;
pub mod hydration;
pub mod pregnancy;
pub mod renal;
pub mod series;
pub mod strength;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use body::*;
pub use category::{Bands, Severity};
pub use cardio::*;
pub use energy::*;
pub use errors::*;
pub use hydration::*;
pub use pregnancy::*;
pub use renal::*;
pub use series::*;
pub use strength::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;
