//! # Pricing and Production Rates
//!
//! Every rate the estimator applies, in one place. Per-option rates are
//! exhaustive `match`es on the closed enums from [`crate::params`], so adding
//! a project type or finish fails to compile until it is priced here.
//!
//! ## Rate Summary
//!
//! | Table                  | Keyed by             | Unit            |
//! |------------------------|----------------------|-----------------|
//! | Base rate              | `ProjectType`        | $/ft²           |
//! | Finish multiplier      | `SurfaceFinish`      | × base cost     |
//! | Reinforcement rate     | `ReinforcementType`  | $/ft²           |
//! | Formwork labor factor  | `FormworkComplexity` | × base hours    |

use crate::params::{FormworkComplexity, ProjectType, ReinforcementType, SurfaceFinish};

impl ProjectType {
    /// Base price per square foot before any adjustment
    pub fn base_rate_per_sqft(&self) -> f64 {
        match self {
            ProjectType::Driveway => 8.0,
            ProjectType::Patio => 9.0,
            ProjectType::Sidewalk => 8.0,
            ProjectType::PoolDeck => 10.0,
            ProjectType::Foundation => 12.0,
            ProjectType::GarageFloor => 8.0,
            ProjectType::DecorativeConcrete => 15.0,
            ProjectType::Repair => 12.0,
        }
    }
}

impl SurfaceFinish {
    /// Multiplier on base cost; the finish line item is `base × (multiplier − 1)`
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            SurfaceFinish::Broom => 1.0,
            SurfaceFinish::Smooth => 1.1,
            SurfaceFinish::ExposedAggregate => 1.3,
            SurfaceFinish::Stamped => 1.5,
            SurfaceFinish::Colored => 1.25,
            SurfaceFinish::Sealed => 1.15,
        }
    }
}

impl ReinforcementType {
    /// Reinforcement price per square foot of slab
    pub fn rate_per_sqft(&self) -> f64 {
        match self {
            ReinforcementType::FiberMesh => 0.5,
            ReinforcementType::WireMesh => 1.0,
            ReinforcementType::Rebar => 1.5,
            ReinforcementType::None => 0.0,
        }
    }
}

impl FormworkComplexity {
    /// Multiplier on base crew hours
    pub fn labor_multiplier(&self) -> f64 {
        match self {
            FormworkComplexity::Simple => 1.0,
            FormworkComplexity::Moderate => 1.3,
            FormworkComplexity::Complex => 1.6,
        }
    }
}

/// Additional-service prices
pub mod services {
    /// Demolition, per ft²
    pub const DEMOLITION_PER_SQFT: f64 = 3.0;
    /// Grading, per ft²
    pub const GRADING_PER_SQFT: f64 = 2.0;
    /// Drainage solutions, flat
    pub const DRAINAGE_FLAT: f64 = 1000.0;
    /// Base preparation, per ft²
    pub const BASE_PREPARATION_PER_SQFT: f64 = 2.0;
    /// Expansion joints, per ft²
    pub const EXPANSION_JOINTS_PER_SQFT: f64 = 0.5;
    /// Control joints, per ft²
    pub const CONTROL_JOINTS_PER_SQFT: f64 = 0.3;
}

/// Site-condition surcharges
pub mod site {
    /// Excavation, per ft²
    pub const EXCAVATION_PER_SQFT: f64 = 2.0;
    /// Haul-away, per ft²
    pub const HAUL_AWAY_PER_SQFT: f64 = 1.5;
    /// Share of base cost added per 100% of slope grade
    pub const SLOPE_BASE_COST_FACTOR: f64 = 0.2;
}

/// Margin, travel and urgency
pub mod pricing {
    /// Round-trip travel charge per mile of distance
    pub const TRAVEL_PER_MILE: f64 = 2.0;
    /// Flat margin on the subtotal
    pub const MARKUP_RATE: f64 = 0.3;
    /// Price inflation per urgency level above neutral
    pub const URGENCY_STEP: f64 = 0.1;
}

/// Crew production assumptions
pub mod labor {
    /// Placing and finishing throughput (ft² per crew hour)
    pub const SQFT_PER_HOUR: f64 = 100.0;
    /// Demolition throughput (ft² per added hour)
    pub const DEMOLITION_SQFT_PER_HOUR: f64 = 200.0;
    /// Grading throughput (ft² per added hour)
    pub const GRADING_SQFT_PER_HOUR: f64 = 300.0;
    /// Drainage install, flat hours
    pub const DRAINAGE_HOURS: f64 = 4.0;
    /// Base preparation throughput (ft² per added hour)
    pub const BASE_PREPARATION_SQFT_PER_HOUR: f64 = 250.0;
    /// Working hours per crew day
    pub const HOURS_PER_DAY: u32 = 8;
    /// Crew size the day count assumes
    pub const CREW_SIZE: u32 = 3;
}

/// Material takeoff assumptions
pub mod takeoff {
    /// Concrete over-order for spillage and over-pour
    pub const WASTE_FACTOR: f64 = 1.1;
    /// Base aggregate layer depth in feet (2 in)
    pub const BASE_LAYER_DEPTH_FT: f64 = 0.167;
}

/// Slab area above which a pump (and pump truck scheduling) is called for
pub const PUMP_THRESHOLD_SQFT: f64 = 500.0;
