//! # Estimation Engine
//!
//! Turns one validated [`ProjectParameters`] record into an
//! [`EstimationResult`]. The engine is split into independent calculations
//! that each follow the same pattern as the top-level entry point: plain data
//! in, plain data out, no state kept between calls.
//!
//! - [`cost`] - Itemized cost breakdown and total
//! - [`materials`] - Concrete, reinforcement and base aggregate takeoff
//! - [`labor`] - Crew hours and working days
//! - [`equipment`] - Equipment list
//! - [`recommendations`] - Advisory notes
//!
//! ## Example
//!
//! ```rust
//! use pour_core::calculations::estimate;
//! use pour_core::params::{Dimensions, ProjectParameters, ProjectType, SlabThickness};
//!
//! let params = ProjectParameters::new(ProjectType::Driveway, Dimensions::new(20.0, 20.0, SlabThickness::FourInch));
//! let result = estimate(&params).unwrap();
//!
//! assert_eq!(result.costs.total, 4160.0);
//! assert_eq!(result.material_quantities.concrete_cubic_yards, 5.5);
//! assert_eq!(result.labor_hours, 4);
//! assert_eq!(result.estimated_duration_days, 1);
//! ```

pub mod cost;
pub mod equipment;
pub mod labor;
pub mod materials;
pub mod recommendations;

use serde::{Deserialize, Serialize};

use crate::errors::EstimateResult;
use crate::params::{Choice, ProjectParameters};

// Re-export commonly used types
pub use cost::{urgency_multiplier, CostBreakdown};
pub use equipment::Equipment;
pub use materials::MaterialQuantities;

/// Everything the estimator derives from one parameter record.
///
/// The input is echoed back so a result can be rendered or archived on its
/// own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// The parameters this estimate was computed from
    pub parameters: ProjectParameters,

    /// Itemized costs
    pub costs: CostBreakdown,

    /// Bulk material quantities
    pub material_quantities: MaterialQuantities,

    /// Crew hours, rounded up
    pub labor_hours: u32,

    /// Equipment to bring, in selection order
    pub equipment_needed: Vec<Equipment>,

    /// Working days, `ceil(labor_hours / 8)`
    pub estimated_duration_days: u32,

    /// Advisory notes, displayed verbatim
    pub recommendations: Vec<String>,
}

/// Estimate a project.
///
/// Validates the record first and fails fast on a broken input contract;
/// nothing is clamped or coerced.
///
/// # Returns
///
/// * `Ok(EstimationResult)` - The full estimate
/// * `Err(EstimateError::InvalidInput)` - The first field that violates its constraint
pub fn estimate(params: &ProjectParameters) -> EstimateResult<EstimationResult> {
    params.validate()?;
    let result = estimate_unchecked(params);

    tracing::debug!(
        project_type = params.project_type.key(),
        square_footage = params.dimensions.square_footage,
        labor_hours = result.labor_hours,
        total = result.costs.total,
        "estimate computed"
    );

    Ok(result)
}

/// Estimate a project that has already been validated.
///
/// Output on invalid input is meaningless; prefer [`estimate`].
pub fn estimate_unchecked(params: &ProjectParameters) -> EstimationResult {
    let dims = &params.dimensions;
    let site = &params.site_conditions;
    let services = &params.additional_services;

    let costs = cost::calculate(params);
    let material_quantities = materials::calculate(dims, params.reinforcement);
    let labor_hours = labor::calculate(dims.square_footage, site.formwork_complexity, services);
    let equipment_needed = equipment::select(dims.square_footage, services, site.needs_excavation);
    let recommendations = recommendations::generate(params, labor_hours, &material_quantities);

    EstimationResult {
        parameters: params.clone(),
        costs,
        material_quantities,
        labor_hours,
        equipment_needed,
        estimated_duration_days: labor::duration_days(labor_hours),
        recommendations,
    }
}
