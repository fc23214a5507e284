//! # Material Quantities
//!
//! Takeoff of the three bulk materials a pour needs.
//!
//! ```text
//! area          = length × width                       (ft²)
//! concrete      = ceil_tenth(area × t/12 / 27 × 1.1)   (yd³, 10% waste)
//! reinforcement = area if reinforced, else 0           (ft²)
//! base          = ceil_tenth(area × 0.167)             (2" base layer, tons)
//! ```
//!
//! Quantities round up to the next tenth: an order is never short.
//! Reinforcement is an area proxy whatever the kind; mesh and rebar only
//! differ in price (see [`crate::rates`]).

use serde::{Deserialize, Serialize};

use crate::params::{Dimensions, ReinforcementType};
use crate::rates::takeoff;
use crate::units::{ceil_to_tenth, CubicYards, Feet, Inches, SqFt};

/// Bulk material quantities for one pour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    /// Ready-mix to order, cubic yards (waste included, rounded up to 0.1)
    pub concrete_cubic_yards: f64,
    /// Reinforced area, square feet (0 when unreinforced)
    pub reinforcement_sqft: f64,
    /// Base aggregate, tons (rounded up to 0.1)
    pub base_aggregate_tons: f64,
}

/// Theoretical slab volume with waste, before rounding.
pub fn concrete_volume_with_waste(dimensions: &Dimensions) -> CubicYards {
    let area: SqFt = Feet(dimensions.length_ft) * Feet(dimensions.width_ft);
    let depth: Feet = Inches(f64::from(dimensions.thickness.inches())).into();
    let volume: CubicYards = (area * depth).into();
    volume * takeoff::WASTE_FACTOR
}

/// Compute material quantities from the slab dimensions.
///
/// # Example
///
/// ```rust
/// use pour_core::calculations::materials::calculate;
/// use pour_core::params::{Dimensions, ReinforcementType, SlabThickness};
///
/// let dims = Dimensions::new(20.0, 20.0, SlabThickness::FourInch);
/// let qty = calculate(&dims, ReinforcementType::WireMesh);
///
/// assert_eq!(qty.concrete_cubic_yards, 5.5);
/// assert_eq!(qty.reinforcement_sqft, 400.0);
/// assert_eq!(qty.base_aggregate_tons, 66.8);
/// ```
pub fn calculate(dimensions: &Dimensions, reinforcement: ReinforcementType) -> MaterialQuantities {
    let area = dimensions.plan_area_sqft();

    MaterialQuantities {
        concrete_cubic_yards: ceil_to_tenth(concrete_volume_with_waste(dimensions).value()),
        reinforcement_sqft: if reinforcement.is_reinforced() { area } else { 0.0 },
        base_aggregate_tons: ceil_to_tenth(area * takeoff::BASE_LAYER_DEPTH_FT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Choice, SlabThickness};

    #[test]
    fn test_driveway_takeoff() {
        let dims = Dimensions::new(20.0, 20.0, SlabThickness::FourInch);
        let qty = calculate(&dims, ReinforcementType::None);

        // 400 × (4/12) = 133.33 ft³ / 27 = 4.938 yd³ × 1.1 = 5.432 → 5.5
        assert_eq!(qty.concrete_cubic_yards, 5.5);
        assert_eq!(qty.reinforcement_sqft, 0.0);
        assert_eq!(qty.base_aggregate_tons, 66.8);
    }

    #[test]
    fn test_thicker_slab() {
        let dims = Dimensions::new(30.0, 20.0, SlabThickness::SixInch);
        let qty = calculate(&dims, ReinforcementType::Rebar);

        // 600 × 0.5 = 300 ft³ / 27 = 11.11 yd³ × 1.1 = 12.22 → 12.3
        assert_eq!(qty.concrete_cubic_yards, 12.3);
        assert_eq!(qty.reinforcement_sqft, 600.0);
        assert_eq!(qty.base_aggregate_tons, 100.2);
    }

    #[test]
    fn test_any_reinforcement_uses_full_area() {
        let dims = Dimensions::new(12.0, 10.0, SlabThickness::FourInch);
        for kind in ReinforcementType::ALL {
            let qty = calculate(&dims, *kind);
            let expected = if kind.is_reinforced() { 120.0 } else { 0.0 };
            assert_eq!(qty.reinforcement_sqft, expected);
        }
    }

    #[test]
    fn test_concrete_never_under_ordered() {
        for thickness in SlabThickness::ALL {
            for length in [3.0, 7.5, 11.0, 18.25, 40.0, 97.0] {
                for width in [2.0, 4.5, 9.0, 23.0] {
                    let dims = Dimensions::new(length, width, *thickness);
                    let qty = calculate(&dims, ReinforcementType::None);

                    let needed_cf = length * width * f64::from(thickness.inches()) / 12.0;
                    let ordered_cf = qty.concrete_cubic_yards * 27.0 / 1.1;
                    assert!(
                        ordered_cf + 1e-9 >= needed_cf,
                        "{length}x{width}x{}: ordered {ordered_cf} ft³ < needed {needed_cf} ft³",
                        thickness.inches()
                    );
                    // never more than one rounding step over
                    let unrounded = concrete_volume_with_waste(&dims).value();
                    assert!(qty.concrete_cubic_yards - unrounded < 0.1 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_concrete_monotonic_in_area() {
        let mut previous = 0.0;
        for length in 1..=80 {
            let dims = Dimensions::new(f64::from(length) * 0.75, 10.0, SlabThickness::SixInch);
            let qty = calculate(&dims, ReinforcementType::None);
            assert!(qty.concrete_cubic_yards >= previous);
            previous = qty.concrete_cubic_yards;
        }
    }

    #[test]
    fn test_serialization() {
        let qty = calculate(&Dimensions::new(20.0, 20.0, SlabThickness::FourInch), ReinforcementType::None);
        let json = serde_json::to_string(&qty).unwrap();
        assert!(json.contains("\"concrete_cubic_yards\":5.5"));
    }
}
