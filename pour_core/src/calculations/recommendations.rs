//! Advisory notes shown with an estimate.
//!
//! Four lines are always present (strength, schedule, concrete order,
//! drainage slope), followed by the conditional clay-soil and pump-truck
//! advisories. The wording is displayed verbatim.

use crate::calculations::labor::duration_days;
use crate::calculations::materials::MaterialQuantities;
use crate::params::{Choice, ProjectParameters, SoilType};
use crate::rates::{labor, PUMP_THRESHOLD_SQFT};

/// Minimum drainage slope recommended, in percent
pub const MIN_DRAINAGE_SLOPE_PCT: f64 = 1.0;

pub const CLAY_SOIL_ADVISORY: &str = "Consider additional base preparation due to clay soil";
pub const PUMP_TRUCK_ADVISORY: &str = "Recommend scheduling concrete pump truck";

/// Build the recommendation list.
pub fn generate(params: &ProjectParameters, labor_hours: u32, materials: &MaterialQuantities) -> Vec<String> {
    let site = &params.site_conditions;

    let mut recommendations = vec![
        format!(
            "Recommended concrete strength: {} PSI for {}",
            params.concrete_strength.psi(),
            params.project_type.key()
        ),
        format!(
            "Estimated completion time: {} day(s) with a crew of {}",
            duration_days(labor_hours),
            labor::CREW_SIZE
        ),
        format!("Order {} cubic yards of concrete", materials.concrete_cubic_yards),
        format!(
            "Ensure proper drainage slope of {}%",
            site.slope_grade.max(MIN_DRAINAGE_SLOPE_PCT)
        ),
    ];

    if site.soil_type == SoilType::Clay {
        recommendations.push(CLAY_SOIL_ADVISORY.to_string());
    }
    if params.dimensions.square_footage > PUMP_THRESHOLD_SQFT {
        recommendations.push(PUMP_TRUCK_ADVISORY.to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::materials;
    use crate::params::{ConcreteStrength, Dimensions, ProjectType, SiteConditions, SlabThickness};

    fn recommend(params: &ProjectParameters, labor_hours: u32) -> Vec<String> {
        let qty = materials::calculate(&params.dimensions, params.reinforcement);
        generate(params, labor_hours, &qty)
    }

    #[test]
    fn test_fixed_lines() {
        let params = ProjectParameters::new(
            ProjectType::Driveway,
            Dimensions::new(20.0, 20.0, SlabThickness::FourInch),
        );
        assert_eq!(
            recommend(&params, 4),
            vec![
                "Recommended concrete strength: 3000 PSI for driveway",
                "Estimated completion time: 1 day(s) with a crew of 3",
                "Order 5.5 cubic yards of concrete",
                "Ensure proper drainage slope of 1%",
            ]
        );
    }

    #[test]
    fn test_project_key_and_slope_restated() {
        let params = ProjectParameters::new(
            ProjectType::PoolDeck,
            Dimensions::new(10.0, 10.0, SlabThickness::FourInch),
        )
        .with_strength(ConcreteStrength::Psi4000)
        .with_site_conditions(SiteConditions {
            slope_grade: 2.5,
            ..Default::default()
        });
        let lines = recommend(&params, 17);
        assert_eq!(lines[0], "Recommended concrete strength: 4000 PSI for poolDeck");
        assert_eq!(lines[1], "Estimated completion time: 3 day(s) with a crew of 3");
        assert_eq!(lines[3], "Ensure proper drainage slope of 2.5%");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_conditional_advisories_in_order() {
        let params = ProjectParameters::new(
            ProjectType::Foundation,
            Dimensions::new(30.0, 20.0, SlabThickness::SixInch),
        )
        .with_site_conditions(SiteConditions {
            soil_type: SoilType::Clay,
            ..Default::default()
        });
        let lines = recommend(&params, 6);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "Order 12.3 cubic yards of concrete");
        assert_eq!(lines[4], CLAY_SOIL_ADVISORY);
        assert_eq!(lines[5], PUMP_TRUCK_ADVISORY);
    }

    #[test]
    fn test_whole_numbers_print_without_decimals() {
        let params = ProjectParameters::new(
            ProjectType::Sidewalk,
            Dimensions::new(27.0, 10.0, SlabThickness::FourInch),
        )
        .with_site_conditions(SiteConditions {
            slope_grade: 100.0,
            ..Default::default()
        });
        let lines = recommend(&params, 3);
        // 270 × (4/12) / 27 × 1.1 = 3.667 → 3.7
        assert_eq!(lines[2], "Order 3.7 cubic yards of concrete");
        assert_eq!(lines[3], "Ensure proper drainage slope of 100%");
    }
}
