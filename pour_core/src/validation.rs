//! # Input Validation
//!
//! The estimator only accepts validated parameters. Enum membership is
//! enforced by the types themselves (and by deserialization); this module
//! checks the numeric ranges and the square-footage consistency rule, and
//! reports the first violation with the field path and the constraint.
//!
//! Nothing here clamps or rewrites a value: a bad record is rejected.

use crate::errors::{EstimateError, EstimateResult};
use crate::params::ProjectParameters;

/// Relative tolerance for `square_footage == length × width`
const AREA_TOLERANCE: f64 = 1e-9;

/// Largest slab accepted, in square feet. Keeps crew hours and days well
/// inside `u32`.
pub const MAX_SQUARE_FOOTAGE: f64 = 1_000_000.0;

/// Slope grade bounds in percent
const SLOPE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Urgency level bounds
const URGENCY_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

fn require_positive(field: &str, value: f64, what: &str) -> EstimateResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EstimateError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be greater than 0", what),
        ));
    }
    Ok(())
}

impl ProjectParameters {
    /// Validate the numeric parts of the record.
    ///
    /// Checks, in order: length, width, square footage (positive, equal to
    /// length × width, at most [`MAX_SQUARE_FOOTAGE`]), slope grade, urgency
    /// level, travel distance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pour_core::params::{Dimensions, ProjectParameters, ProjectType, SlabThickness};
    ///
    /// let params = ProjectParameters::new(ProjectType::Patio, Dimensions::new(10.0, 10.0, SlabThickness::FourInch));
    /// assert!(params.validate().is_ok());
    ///
    /// let rushed = params.clone().with_urgency(11);
    /// let err = rushed.validate().unwrap_err();
    /// assert_eq!(err.field(), Some("urgency_level"));
    /// ```
    pub fn validate(&self) -> EstimateResult<()> {
        let dims = &self.dimensions;
        require_positive("dimensions.length_ft", dims.length_ft, "length")?;
        require_positive("dimensions.width_ft", dims.width_ft, "width")?;
        require_positive("dimensions.square_footage", dims.square_footage, "square footage")?;

        let plan_area = dims.plan_area_sqft();
        if (dims.square_footage - plan_area).abs() > AREA_TOLERANCE * plan_area.max(1.0) {
            return Err(EstimateError::invalid_input(
                "dimensions.square_footage",
                dims.square_footage.to_string(),
                format!("square footage must equal length × width ({})", plan_area),
            ));
        }
        if dims.square_footage > MAX_SQUARE_FOOTAGE {
            return Err(EstimateError::invalid_input(
                "dimensions.square_footage",
                dims.square_footage.to_string(),
                format!("square footage must be at most {}", MAX_SQUARE_FOOTAGE),
            ));
        }

        let slope = self.site_conditions.slope_grade;
        if !slope.is_finite() || !SLOPE_RANGE.contains(&slope) {
            return Err(EstimateError::invalid_input(
                "site_conditions.slope_grade",
                slope.to_string(),
                "slope grade must be between 0 and 100 percent",
            ));
        }

        if !URGENCY_RANGE.contains(&self.urgency_level) {
            return Err(EstimateError::invalid_input(
                "urgency_level",
                self.urgency_level.to_string(),
                "urgency level must be between 1 and 10",
            ));
        }

        if !self.travel_distance.is_finite() || self.travel_distance < 0.0 {
            return Err(EstimateError::invalid_input(
                "travel_distance",
                self.travel_distance.to_string(),
                "travel distance must be zero or greater",
            ));
        }

        Ok(())
    }

    /// Parse a JSON parameter record and validate it.
    ///
    /// Malformed JSON and unknown enum keys come back as
    /// `EstimateError::Serialization`; range violations as
    /// `EstimateError::InvalidInput`.
    pub fn from_json(json: &str) -> EstimateResult<Self> {
        let params: ProjectParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
