//! # Unit Types
//!
//! Newtypes for the concrete takeoff chain: plan dimensions in feet, slab
//! depth in inches, area in square feet, volume in cubic feet and finally
//! cubic yards, the unit ready-mix is ordered in. Each step is a typed
//! operation, so an inch value cannot reach the volume without being
//! converted.
//!
//! ```rust
//! use pour_core::units::{CubicYards, Feet, Inches};
//!
//! let area = Feet(9.0) * Feet(6.0);
//! let depth: Feet = Inches(6.0).into();
//! let yards: CubicYards = (area * depth).into();
//! assert_eq!(yards.value(), 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

/// Cubic feet per cubic yard
pub const CUBIC_FEET_PER_YARD: f64 = 27.0;

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

impl Mul<Feet> for SqFt {
    type Output = CubicFeet;
    fn mul(self, rhs: Feet) -> CubicFeet {
        CubicFeet(self.0 * rhs.0)
    }
}

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_YARD)
    }
}

/// Scaling an order quantity (waste allowance)
impl Mul<f64> for CubicYards {
    type Output = CubicYards;
    fn mul(self, factor: f64) -> CubicYards {
        CubicYards(self.0 * factor)
    }
}

impl CubicYards {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Round up to the next tenth (material orders never round down).
pub fn ceil_to_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Round up to the next whole cent.
pub fn ceil_to_cent(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
