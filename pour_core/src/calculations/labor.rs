//! # Labor Hours
//!
//! Crew-hour estimate, always rounded up so the schedule is never
//! under-promised.
//!
//! ```text
//! hours = ft² / 100 × formwork factor
//!       + ft² / 200   (demolition)
//!       + ft² / 300   (grading)
//!       + 4           (drainage)
//!       + ft² / 250   (base preparation)
//! ```
//!
//! Expansion and control joints are cut during the pour and add no time.

use crate::params::{AdditionalServices, FormworkComplexity};
use crate::rates::labor;

/// Crew hours before rounding.
pub fn raw_hours(square_footage: f64, complexity: FormworkComplexity, services: &AdditionalServices) -> f64 {
    let mut hours = square_footage / labor::SQFT_PER_HOUR;
    hours *= complexity.labor_multiplier();

    if services.demolition {
        hours += square_footage / labor::DEMOLITION_SQFT_PER_HOUR;
    }
    if services.grading {
        hours += square_footage / labor::GRADING_SQFT_PER_HOUR;
    }
    if services.drainage {
        hours += labor::DRAINAGE_HOURS;
    }
    if services.base_preparation {
        hours += square_footage / labor::BASE_PREPARATION_SQFT_PER_HOUR;
    }
    hours
}

/// Crew hours, rounded up to the whole hour.
///
/// Validation caps the slab area, which keeps the result well inside `u32`.
///
/// # Example
///
/// ```rust
/// use pour_core::calculations::labor::calculate;
/// use pour_core::params::{AdditionalServices, FormworkComplexity};
///
/// let services = AdditionalServices { drainage: true, ..Default::default() };
/// // 400 / 100 × 1.3 + 4 = 9.2 → 10
/// assert_eq!(calculate(400.0, FormworkComplexity::Moderate, &services), 10);
/// ```
pub fn calculate(square_footage: f64, complexity: FormworkComplexity, services: &AdditionalServices) -> u32 {
    raw_hours(square_footage, complexity, services).ceil() as u32
}

/// Working days for the crew, rounded up.
pub fn duration_days(labor_hours: u32) -> u32 {
    labor_hours.div_ceil(labor::HOURS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_services() -> AdditionalServices {
        AdditionalServices {
            demolition: true,
            grading: true,
            drainage: true,
            base_preparation: true,
            expansion_joints: true,
            control_joints: true,
        }
    }

    #[test]
    fn test_base_throughput() {
        let none = AdditionalServices::default();
        assert_eq!(calculate(400.0, FormworkComplexity::Simple, &none), 4);
        assert_eq!(calculate(401.0, FormworkComplexity::Simple, &none), 5);
        assert_eq!(calculate(50.0, FormworkComplexity::Simple, &none), 1);
    }

    #[test]
    fn test_complexity_and_services() {
        let demo_and_drain = AdditionalServices {
            demolition: true,
            drainage: true,
            ..Default::default()
        };
        // 4 × 1.3 + 2 + 4 = 11.2
        assert_eq!(calculate(400.0, FormworkComplexity::Moderate, &demo_and_drain), 12);

        // 6 × 1.6 + 3 + 2 + 4 + 2.4 = 21
        assert_eq!(calculate(600.0, FormworkComplexity::Complex, &all_services()), 21);
    }

    #[test]
    fn test_joints_add_no_time() {
        let joints = AdditionalServices {
            expansion_joints: true,
            control_joints: true,
            ..Default::default()
        };
        assert_eq!(
            raw_hours(800.0, FormworkComplexity::Simple, &joints),
            raw_hours(800.0, FormworkComplexity::Simple, &AdditionalServices::default())
        );
    }

    #[test]
    fn test_hours_monotonic_in_area() {
        let mut previous = 0;
        for step in 1..=100 {
            let sqft = f64::from(step) * 37.5;
            let hours = calculate(sqft, FormworkComplexity::Complex, &all_services());
            assert!(hours >= previous);
            previous = hours;
        }
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(duration_days(0), 0);
        assert_eq!(duration_days(1), 1);
        assert_eq!(duration_days(8), 1);
        assert_eq!(duration_days(9), 2);
        assert_eq!(duration_days(21), 3);
    }
}
