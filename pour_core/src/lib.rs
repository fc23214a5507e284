//! # pour_core - Concrete Project Estimation Engine
//!
//! `pour_core` is the computational heart of Pourwise: it turns a concrete
//! project description (slab size, finish, reinforcement, site conditions,
//! extra services, urgency) into an itemized price, a material takeoff, crew
//! hours, an equipment list and advisory notes. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Closed choices**: Every option is an enum, every rate an exhaustive match
//! - **Rich Errors**: Invalid input is rejected with the field and the constraint, never clamped
//!
//! ## Quick Start
//!
//! ```rust
//! use pour_core::{estimate, Dimensions, ProjectParameters, ProjectType, SlabThickness};
//!
//! let params = ProjectParameters::new(ProjectType::Driveway, Dimensions::new(20.0, 20.0, SlabThickness::FourInch))
//!     .with_urgency(10);
//!
//! let result = estimate(&params).unwrap();
//! assert_eq!(result.costs.total, 6240.0);
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"total\": 6240.0"));
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Parameter record and closed option enums
//! - [`validation`] - Input contract checks
//! - [`calculations`] - The estimation engine
//! - [`rates`] - Pricing and production rates
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod params;
pub mod rates;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{estimate, CostBreakdown, Equipment, EstimationResult, MaterialQuantities};
pub use errors::{EstimateError, EstimateResult};
pub use params::{
    AccessDifficulty, AdditionalServices, Choice, ConcreteStrength, Dimensions, FormworkComplexity,
    ProjectParameters, ProjectType, ReinforcementType, SiteConditions, SlabThickness, SoilType, SurfaceFinish,
};
