//! # Cost Breakdown
//!
//! Prices a validated parameter record into nine line items.
//!
//! ```text
//! base          = ft² × base rate(project type)
//! finish        = base × (finish multiplier − 1)
//! reinforcement = ft² × reinforcement rate
//! services      = Σ active service charges
//! site          = excavation + haul-away + (slope% / 100) × base × 0.2
//! travel        = miles × 2
//! subtotal      = base + finish + reinforcement + services + site + travel
//! markup        = subtotal × 0.3
//! total         = ceil_cent((subtotal + markup) × urgency multiplier)
//! ```
//!
//! Only `total` is rounded; every other item is kept at full precision.
//! Markup is taken on the subtotal before urgency is applied.

use serde::{Deserialize, Serialize};

use crate::params::{AdditionalServices, ProjectParameters, SiteConditions, NEUTRAL_URGENCY};
use crate::rates::{pricing, services, site};
use crate::units::ceil_to_cent;

/// Itemized cost of a project, in dollars.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base_cost": 3200.0,
///   "finish_cost": 0.0,
///   "reinforcement_cost": 0.0,
///   "additional_services_cost": 0.0,
///   "site_conditions_cost": 0.0,
///   "travel_cost": 0.0,
///   "subtotal": 3200.0,
///   "markup": 960.0,
///   "total": 4160.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Square footage × project base rate
    pub base_cost: f64,
    /// Finish premium over a broom finish
    pub finish_cost: f64,
    /// Reinforcement material and placement
    pub reinforcement_cost: f64,
    /// Sum of the selected additional services
    pub additional_services_cost: f64,
    /// Excavation, haul-away and slope surcharges
    pub site_conditions_cost: f64,
    /// Round-trip travel charge
    pub travel_cost: f64,
    /// Sum of the six items above
    pub subtotal: f64,
    /// Margin on the subtotal
    pub markup: f64,
    /// Price to the customer, urgency applied, rounded up to the cent
    pub total: f64,
}

/// Urgency price multiplier.
///
/// Levels at or below 5 are neutral; each level above adds 10%.
///
/// ```rust
/// use pour_core::calculations::cost::urgency_multiplier;
///
/// assert_eq!(urgency_multiplier(1), 1.0);
/// assert_eq!(urgency_multiplier(5), 1.0);
/// assert_eq!(urgency_multiplier(10), 1.5);
/// ```
pub fn urgency_multiplier(urgency_level: u8) -> f64 {
    1.0 + f64::from(urgency_level.saturating_sub(NEUTRAL_URGENCY)) * pricing::URGENCY_STEP
}

/// Charge for the selected additional services.
///
/// Drainage is flat; every other service scales with square footage.
pub fn additional_services_cost(selected: &AdditionalServices, square_footage: f64) -> f64 {
    let mut cost = 0.0;
    if selected.demolition {
        cost += square_footage * services::DEMOLITION_PER_SQFT;
    }
    if selected.grading {
        cost += square_footage * services::GRADING_PER_SQFT;
    }
    if selected.drainage {
        cost += services::DRAINAGE_FLAT;
    }
    if selected.base_preparation {
        cost += square_footage * services::BASE_PREPARATION_PER_SQFT;
    }
    if selected.expansion_joints {
        cost += square_footage * services::EXPANSION_JOINTS_PER_SQFT;
    }
    if selected.control_joints {
        cost += square_footage * services::CONTROL_JOINTS_PER_SQFT;
    }
    cost
}

/// Site-condition surcharges.
///
/// The slope surcharge is proportional to base cost. Access difficulty and
/// soil type carry no charge.
pub fn site_conditions_cost(conditions: &SiteConditions, square_footage: f64, base_cost: f64) -> f64 {
    let mut cost = 0.0;
    if conditions.needs_excavation {
        cost += square_footage * site::EXCAVATION_PER_SQFT;
    }
    if conditions.needs_haul_away {
        cost += square_footage * site::HAUL_AWAY_PER_SQFT;
    }
    cost += (conditions.slope_grade / 100.0) * base_cost * site::SLOPE_BASE_COST_FACTOR;
    cost
}

/// Price a parameter record.
///
/// Expects validated input (see [`ProjectParameters::validate`]); use
/// [`crate::calculations::estimate`] for the checked entry point.
pub fn calculate(params: &ProjectParameters) -> CostBreakdown {
    let sqft = params.dimensions.square_footage;

    let base_cost = sqft * params.project_type.base_rate_per_sqft();
    let finish_cost = base_cost * (params.surface_finish.cost_multiplier() - 1.0);
    let reinforcement_cost = sqft * params.reinforcement.rate_per_sqft();
    let additional_services_cost = additional_services_cost(&params.additional_services, sqft);
    let site_conditions_cost = site_conditions_cost(&params.site_conditions, sqft, base_cost);
    let travel_cost = params.travel_distance * pricing::TRAVEL_PER_MILE;

    let subtotal = base_cost
        + finish_cost
        + reinforcement_cost
        + additional_services_cost
        + site_conditions_cost
        + travel_cost;

    let markup = subtotal * pricing::MARKUP_RATE;
    let total = ceil_to_cent((subtotal + markup) * urgency_multiplier(params.urgency_level));

    CostBreakdown {
        base_cost,
        finish_cost,
        reinforcement_cost,
        additional_services_cost,
        site_conditions_cost,
        travel_cost,
        subtotal,
        markup,
        total,
    }
}
