//! # Equipment Selection
//!
//! Every job gets the hand-tool baseline; larger slabs, demolition, grading
//! and excavation each add their own machines. The rule order is fixed so the
//! list is deterministic, and the rules add disjoint sets, so no entry
//! repeats.

use serde::{Deserialize, Serialize};

use crate::params::AdditionalServices;
use crate::rates::PUMP_THRESHOLD_SQFT;

/// A piece of equipment to bring to the job.
///
/// Serializes as its display name (e.g. `"Concrete Pump"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    #[serde(rename = "Concrete Tools")]
    ConcreteTools,
    #[serde(rename = "Wheelbarrow")]
    Wheelbarrow,
    #[serde(rename = "Levels")]
    Levels,
    #[serde(rename = "Concrete Pump")]
    ConcretePump,
    #[serde(rename = "Jackhammer")]
    Jackhammer,
    #[serde(rename = "Dump Trailer")]
    DumpTrailer,
    #[serde(rename = "Skid Steer")]
    SkidSteer,
    #[serde(rename = "Laser Level")]
    LaserLevel,
    #[serde(rename = "Mini Excavator")]
    MiniExcavator,
}

impl Equipment {
    /// Tools every job needs
    pub const BASELINE: [Equipment; 3] = [Equipment::ConcreteTools, Equipment::Wheelbarrow, Equipment::Levels];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Equipment::ConcreteTools => "Concrete Tools",
            Equipment::Wheelbarrow => "Wheelbarrow",
            Equipment::Levels => "Levels",
            Equipment::ConcretePump => "Concrete Pump",
            Equipment::Jackhammer => "Jackhammer",
            Equipment::DumpTrailer => "Dump Trailer",
            Equipment::SkidSteer => "Skid Steer",
            Equipment::LaserLevel => "Laser Level",
            Equipment::MiniExcavator => "Mini Excavator",
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Select equipment for a job.
///
/// # Example
///
/// ```rust
/// use pour_core::calculations::equipment::{select, Equipment};
/// use pour_core::params::AdditionalServices;
///
/// let list = select(200.0, &AdditionalServices::default(), false);
/// assert_eq!(list, Equipment::BASELINE.to_vec());
/// ```
pub fn select(square_footage: f64, services: &AdditionalServices, needs_excavation: bool) -> Vec<Equipment> {
    let mut equipment = Equipment::BASELINE.to_vec();

    if square_footage > PUMP_THRESHOLD_SQFT {
        equipment.push(Equipment::ConcretePump);
    }
    if services.demolition {
        equipment.extend([Equipment::Jackhammer, Equipment::DumpTrailer]);
    }
    if services.grading {
        equipment.extend([Equipment::SkidSteer, Equipment::LaserLevel]);
    }
    if needs_excavation {
        equipment.push(Equipment::MiniExcavator);
    }

    equipment
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(list: &[Equipment]) -> Vec<&'static str> {
        list.iter().map(Equipment::display_name).collect()
    }

    #[test]
    fn test_demolition_with_excavation() {
        let services = AdditionalServices {
            demolition: true,
            ..Default::default()
        };
        let list = select(600.0, &services, true);
        assert_eq!(
            names(&list),
            vec![
                "Concrete Tools",
                "Wheelbarrow",
                "Levels",
                "Concrete Pump",
                "Jackhammer",
                "Dump Trailer",
                "Mini Excavator",
            ]
        );
    }

    #[test]
    fn test_pump_threshold_is_exclusive() {
        let none = AdditionalServices::default();
        assert!(!select(500.0, &none, false).contains(&Equipment::ConcretePump));
        assert!(select(500.5, &none, false).contains(&Equipment::ConcretePump));
    }

    #[test]
    fn test_everything_in_rule_order() {
        let services = AdditionalServices {
            demolition: true,
            grading: true,
            drainage: true,
            base_preparation: true,
            expansion_joints: true,
            control_joints: true,
        };
        let list = select(1200.0, &services, true);
        assert_eq!(
            list,
            vec![
                Equipment::ConcreteTools,
                Equipment::Wheelbarrow,
                Equipment::Levels,
                Equipment::ConcretePump,
                Equipment::Jackhammer,
                Equipment::DumpTrailer,
                Equipment::SkidSteer,
                Equipment::LaserLevel,
                Equipment::MiniExcavator,
            ]
        );
        let unique: HashSet<_> = list.iter().collect();
        assert_eq!(unique.len(), list.len());
    }

    #[test]
    fn test_serializes_as_names() {
        let json = serde_json::to_string(&select(600.0, &AdditionalServices::default(), false)).unwrap();
        assert_eq!(json, r#"["Concrete Tools","Wheelbarrow","Levels","Concrete Pump"]"#);
    }
}
