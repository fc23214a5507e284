//! # Project Parameters
//!
//! The `ProjectParameters` record is the single input of the estimator. It is
//! a value object: built (or deserialized) once by the caller, validated, and
//! handed to [`crate::calculations::estimate`].
//!
//! ## Structure
//!
//! ```text
//! ProjectParameters
//! ├── project_type: ProjectType (selects the base rate)
//! ├── dimensions: Dimensions (length, width, thickness, derived square footage)
//! ├── concrete_strength / surface_finish / reinforcement
//! ├── site_conditions: SiteConditions (slope, soil, access, formwork, excavation, haul-away)
//! ├── additional_services: AdditionalServices (six independent flags)
//! └── urgency_level, travel_distance, notes
//! ```
//!
//! Every selectable option is a closed enum implementing [`Choice`], so the
//! wire keys, the form labels and the lenient text parser all come from one
//! place.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "project_type": "driveway",
//!   "dimensions": { "length_ft": 20.0, "width_ft": 20.0, "thickness": 4, "square_footage": 400.0 },
//!   "concrete_strength": 3000,
//!   "surface_finish": "broom",
//!   "reinforcement": "none",
//!   "site_conditions": {
//!     "slope_grade": 0.0,
//!     "needs_excavation": false,
//!     "soil_type": "sandy",
//!     "access_difficulty": "easy",
//!     "needs_haul_away": false,
//!     "formwork_complexity": "simple"
//!   },
//!   "additional_services": {
//!     "demolition": false, "grading": false, "drainage": false,
//!     "base_preparation": false, "expansion_joints": false, "control_joints": false
//!   },
//!   "urgency_level": 5,
//!   "travel_distance": 0.0,
//!   "notes": ""
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

// ============================================================================
// Closed Choices
// ============================================================================

/// A closed set of options selectable on the estimate form.
///
/// Implementors list every variant in `ALL` and give each a stable wire key
/// and a human label. Parsing accepts either, ignoring case, spaces,
/// underscores, hyphens and quote marks.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Dotted path of the parameter field this choice fills
    const FIELD: &'static str;

    /// Every variant, in form order
    const ALL: &'static [Self];

    /// Stable key used on the wire and in recommendation text
    fn key(&self) -> &'static str;

    /// Label shown on the form
    fn display_name(&self) -> &'static str;

    /// Parse from a key or label.
    ///
    /// ```rust
    /// use pour_core::params::{Choice, ProjectType};
    ///
    /// assert_eq!(ProjectType::from_str_flexible("pool deck").unwrap(), ProjectType::PoolDeck);
    /// assert_eq!(ProjectType::from_str_flexible("poolDeck").unwrap(), ProjectType::PoolDeck);
    /// assert!(ProjectType::from_str_flexible("barn").is_err());
    /// ```
    fn from_str_flexible(s: &str) -> EstimateResult<Self> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|c| normalize(c.key()) == wanted || normalize(c.display_name()) == wanted)
            .ok_or_else(|| EstimateError::invalid_input(Self::FIELD, s, Self::allowed_message()))
    }

    /// "<field> must be one of <keys>" message for rejected values
    fn allowed_message() -> String {
        let leaf = Self::FIELD.rsplit('.').next().unwrap_or(Self::FIELD);
        let keys: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
        format!("{} must be one of {}", leaf, keys.join(", "))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Implements `Display` via `Choice::display_name`.
macro_rules! display_via_choice {
    ($($type:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $type {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.display_name())
                }
            }
        )*
    };
}

/// Kind of concrete work being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectType {
    #[default]
    Driveway,
    Patio,
    Sidewalk,
    PoolDeck,
    Foundation,
    GarageFloor,
    DecorativeConcrete,
    Repair,
}

impl Choice for ProjectType {
    const FIELD: &'static str = "project_type";
    const ALL: &'static [Self] = &[
        ProjectType::Driveway,
        ProjectType::Patio,
        ProjectType::Sidewalk,
        ProjectType::PoolDeck,
        ProjectType::Foundation,
        ProjectType::GarageFloor,
        ProjectType::DecorativeConcrete,
        ProjectType::Repair,
    ];

    fn key(&self) -> &'static str {
        match self {
            ProjectType::Driveway => "driveway",
            ProjectType::Patio => "patio",
            ProjectType::Sidewalk => "sidewalk",
            ProjectType::PoolDeck => "poolDeck",
            ProjectType::Foundation => "foundation",
            ProjectType::GarageFloor => "garageFloor",
            ProjectType::DecorativeConcrete => "decorativeConcrete",
            ProjectType::Repair => "repair",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Driveway => "Driveway",
            ProjectType::Patio => "Patio",
            ProjectType::Sidewalk => "Sidewalk",
            ProjectType::PoolDeck => "Pool Deck",
            ProjectType::Foundation => "Foundation",
            ProjectType::GarageFloor => "Garage Floor",
            ProjectType::DecorativeConcrete => "Decorative Concrete",
            ProjectType::Repair => "Repair",
        }
    }
}

/// Slab thickness. Serialized as the bare number of inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SlabThickness {
    #[default]
    FourInch,
    SixInch,
    EightInch,
}

impl SlabThickness {
    /// Thickness in inches
    pub fn inches(&self) -> u32 {
        match self {
            SlabThickness::FourInch => 4,
            SlabThickness::SixInch => 6,
            SlabThickness::EightInch => 8,
        }
    }
}

impl Choice for SlabThickness {
    const FIELD: &'static str = "dimensions.thickness";
    const ALL: &'static [Self] = &[
        SlabThickness::FourInch,
        SlabThickness::SixInch,
        SlabThickness::EightInch,
    ];

    fn key(&self) -> &'static str {
        match self {
            SlabThickness::FourInch => "4",
            SlabThickness::SixInch => "6",
            SlabThickness::EightInch => "8",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SlabThickness::FourInch => "4\"",
            SlabThickness::SixInch => "6\"",
            SlabThickness::EightInch => "8\"",
        }
    }
}

impl TryFrom<u32> for SlabThickness {
    type Error = EstimateError;

    fn try_from(inches: u32) -> EstimateResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.inches() == inches)
            .ok_or_else(|| EstimateError::invalid_input(Self::FIELD, inches.to_string(), Self::allowed_message()))
    }
}

impl From<SlabThickness> for u32 {
    fn from(t: SlabThickness) -> u32 {
        t.inches()
    }
}

/// Specified 28-day compressive strength. Serialized as the bare PSI number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ConcreteStrength {
    Psi2500,
    #[default]
    Psi3000,
    Psi3500,
    Psi4000,
}

impl ConcreteStrength {
    /// Strength in pounds per square inch
    pub fn psi(&self) -> u32 {
        match self {
            ConcreteStrength::Psi2500 => 2500,
            ConcreteStrength::Psi3000 => 3000,
            ConcreteStrength::Psi3500 => 3500,
            ConcreteStrength::Psi4000 => 4000,
        }
    }
}

impl Choice for ConcreteStrength {
    const FIELD: &'static str = "concrete_strength";
    const ALL: &'static [Self] = &[
        ConcreteStrength::Psi2500,
        ConcreteStrength::Psi3000,
        ConcreteStrength::Psi3500,
        ConcreteStrength::Psi4000,
    ];

    fn key(&self) -> &'static str {
        match self {
            ConcreteStrength::Psi2500 => "2500",
            ConcreteStrength::Psi3000 => "3000",
            ConcreteStrength::Psi3500 => "3500",
            ConcreteStrength::Psi4000 => "4000",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ConcreteStrength::Psi2500 => "2500 PSI",
            ConcreteStrength::Psi3000 => "3000 PSI",
            ConcreteStrength::Psi3500 => "3500 PSI",
            ConcreteStrength::Psi4000 => "4000 PSI",
        }
    }
}

impl TryFrom<u32> for ConcreteStrength {
    type Error = EstimateError;

    fn try_from(psi: u32) -> EstimateResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.psi() == psi)
            .ok_or_else(|| EstimateError::invalid_input(Self::FIELD, psi.to_string(), Self::allowed_message()))
    }
}

impl From<ConcreteStrength> for u32 {
    fn from(s: ConcreteStrength) -> u32 {
        s.psi()
    }
}

/// Surface finish applied after the pour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SurfaceFinish {
    #[default]
    Broom,
    Smooth,
    ExposedAggregate,
    Stamped,
    Colored,
    Sealed,
}

impl Choice for SurfaceFinish {
    const FIELD: &'static str = "surface_finish";
    const ALL: &'static [Self] = &[
        SurfaceFinish::Broom,
        SurfaceFinish::Smooth,
        SurfaceFinish::ExposedAggregate,
        SurfaceFinish::Stamped,
        SurfaceFinish::Colored,
        SurfaceFinish::Sealed,
    ];

    fn key(&self) -> &'static str {
        match self {
            SurfaceFinish::Broom => "broom",
            SurfaceFinish::Smooth => "smooth",
            SurfaceFinish::ExposedAggregate => "exposedAggregate",
            SurfaceFinish::Stamped => "stamped",
            SurfaceFinish::Colored => "colored",
            SurfaceFinish::Sealed => "sealed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SurfaceFinish::Broom => "Broom Finish",
            SurfaceFinish::Smooth => "Smooth Finish",
            SurfaceFinish::ExposedAggregate => "Exposed Aggregate",
            SurfaceFinish::Stamped => "Stamped",
            SurfaceFinish::Colored => "Colored",
            SurfaceFinish::Sealed => "Sealed",
        }
    }
}

/// Slab reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReinforcementType {
    FiberMesh,
    WireMesh,
    Rebar,
    #[default]
    None,
}

impl ReinforcementType {
    /// Whether any reinforcement is placed
    pub fn is_reinforced(&self) -> bool {
        !matches!(self, ReinforcementType::None)
    }
}

impl Choice for ReinforcementType {
    const FIELD: &'static str = "reinforcement";
    const ALL: &'static [Self] = &[
        ReinforcementType::None,
        ReinforcementType::FiberMesh,
        ReinforcementType::WireMesh,
        ReinforcementType::Rebar,
    ];

    fn key(&self) -> &'static str {
        match self {
            ReinforcementType::FiberMesh => "fiberMesh",
            ReinforcementType::WireMesh => "wireMesh",
            ReinforcementType::Rebar => "rebar",
            ReinforcementType::None => "none",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            ReinforcementType::FiberMesh => "Fiber Mesh",
            ReinforcementType::WireMesh => "Wire Mesh",
            ReinforcementType::Rebar => "Rebar",
            ReinforcementType::None => "None",
        }
    }
}

/// Predominant soil at the pour site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoilType {
    #[default]
    Sandy,
    Clay,
    Loam,
    Rocky,
}

impl Choice for SoilType {
    const FIELD: &'static str = "site_conditions.soil_type";
    const ALL: &'static [Self] = &[SoilType::Sandy, SoilType::Clay, SoilType::Loam, SoilType::Rocky];

    fn key(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Clay => "clay",
            SoilType::Loam => "loam",
            SoilType::Rocky => "rocky",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Rocky => "Rocky",
        }
    }
}

/// How hard it is to get crew and trucks to the pour.
///
/// Recorded with the estimate but not priced: no cost, labor or equipment
/// rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessDifficulty {
    #[default]
    Easy,
    Moderate,
    Difficult,
}

impl Choice for AccessDifficulty {
    const FIELD: &'static str = "site_conditions.access_difficulty";
    const ALL: &'static [Self] = &[
        AccessDifficulty::Easy,
        AccessDifficulty::Moderate,
        AccessDifficulty::Difficult,
    ];

    fn key(&self) -> &'static str {
        match self {
            AccessDifficulty::Easy => "easy",
            AccessDifficulty::Moderate => "moderate",
            AccessDifficulty::Difficult => "difficult",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            AccessDifficulty::Easy => "Easy",
            AccessDifficulty::Moderate => "Moderate",
            AccessDifficulty::Difficult => "Difficult",
        }
    }
}

/// Formwork difficulty tier (drives the labor multiplier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormworkComplexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

impl Choice for FormworkComplexity {
    const FIELD: &'static str = "site_conditions.formwork_complexity";
    const ALL: &'static [Self] = &[
        FormworkComplexity::Simple,
        FormworkComplexity::Moderate,
        FormworkComplexity::Complex,
    ];

    fn key(&self) -> &'static str {
        match self {
            FormworkComplexity::Simple => "simple",
            FormworkComplexity::Moderate => "moderate",
            FormworkComplexity::Complex => "complex",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            FormworkComplexity::Simple => "Simple",
            FormworkComplexity::Moderate => "Moderate",
            FormworkComplexity::Complex => "Complex",
        }
    }
}

display_via_choice!(
    ProjectType,
    SlabThickness,
    ConcreteStrength,
    SurfaceFinish,
    ReinforcementType,
    SoilType,
    AccessDifficulty,
    FormworkComplexity,
);

// ============================================================================
// Parameter Record
// ============================================================================

/// Plan dimensions of the slab.
///
/// The caller owns `length_ft` and `width_ft`; `square_footage` is derived
/// from them by [`Dimensions::new`] and must stay equal to `length × width`
/// (validation rejects a record where it does not).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in feet
    pub length_ft: f64,

    /// Width in feet
    pub width_ft: f64,

    /// Slab thickness (4, 6 or 8 inches)
    pub thickness: SlabThickness,

    /// Plan area in square feet (`length_ft × width_ft`)
    pub square_footage: f64,
}

impl Dimensions {
    /// Create dimensions, deriving the square footage.
    ///
    /// ```rust
    /// use pour_core::params::{Dimensions, SlabThickness};
    ///
    /// let dims = Dimensions::new(20.0, 12.5, SlabThickness::SixInch);
    /// assert_eq!(dims.square_footage, 250.0);
    /// ```
    pub fn new(length_ft: f64, width_ft: f64, thickness: SlabThickness) -> Self {
        Dimensions {
            length_ft,
            width_ft,
            thickness,
            square_footage: length_ft * width_ft,
        }
    }

    /// Plan area computed from length and width (ft²)
    pub fn plan_area_sqft(&self) -> f64 {
        self.length_ft * self.width_ft
    }
}

/// Conditions at the pour site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConditions {
    /// Existing grade in percent (0-100)
    pub slope_grade: f64,

    /// Site must be dug out before forming
    pub needs_excavation: bool,

    /// Predominant soil type
    pub soil_type: SoilType,

    /// Site access (not priced)
    pub access_difficulty: AccessDifficulty,

    /// Spoils and debris must be hauled off site
    pub needs_haul_away: bool,

    /// Formwork difficulty tier
    pub formwork_complexity: FormworkComplexity,
}

impl Default for SiteConditions {
    fn default() -> Self {
        SiteConditions {
            slope_grade: 0.0,
            needs_excavation: false,
            soil_type: SoilType::default(),
            access_difficulty: AccessDifficulty::default(),
            needs_haul_away: false,
            formwork_complexity: FormworkComplexity::default(),
        }
    }
}

/// Optional services quoted alongside the pour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdditionalServices {
    /// Break out and remove existing concrete
    pub demolition: bool,
    /// Grade the subbase
    pub grading: bool,
    /// Drainage solutions (flat-priced)
    pub drainage: bool,
    /// Place and compact base aggregate
    pub base_preparation: bool,
    /// Expansion joints
    pub expansion_joints: bool,
    /// Saw-cut control joints
    pub control_joints: bool,
}

/// Complete input record for one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Kind of work (selects the base rate)
    pub project_type: ProjectType,

    /// Slab dimensions
    pub dimensions: Dimensions,

    /// Specified compressive strength
    pub concrete_strength: ConcreteStrength,

    /// Surface finish
    pub surface_finish: SurfaceFinish,

    /// Reinforcement
    pub reinforcement: ReinforcementType,

    /// Site conditions
    pub site_conditions: SiteConditions,

    /// Optional services
    #[serde(default)]
    pub additional_services: AdditionalServices,

    /// Urgency, 1 (whenever) to 10 (rush). Levels above 5 inflate the price.
    pub urgency_level: u8,

    /// One-way distance to the site in miles
    pub travel_distance: f64,

    /// Free text carried with the estimate; never read by any calculation
    #[serde(default)]
    pub notes: String,
}

/// Neutral urgency level (no price inflation at or below this)
pub const NEUTRAL_URGENCY: u8 = 5;

impl ProjectParameters {
    /// Create a parameter record with the estimate form's defaults for
    /// everything except project type and dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pour_core::params::{Dimensions, ProjectParameters, ProjectType, SlabThickness, SurfaceFinish};
    ///
    /// let params = ProjectParameters::new(ProjectType::Patio, Dimensions::new(12.0, 16.0, SlabThickness::FourInch))
    ///     .with_finish(SurfaceFinish::Stamped)
    ///     .with_urgency(7);
    ///
    /// assert_eq!(params.dimensions.square_footage, 192.0);
    /// assert_eq!(params.urgency_level, 7);
    /// ```
    pub fn new(project_type: ProjectType, dimensions: Dimensions) -> Self {
        ProjectParameters {
            project_type,
            dimensions,
            concrete_strength: ConcreteStrength::default(),
            surface_finish: SurfaceFinish::default(),
            reinforcement: ReinforcementType::default(),
            site_conditions: SiteConditions::default(),
            additional_services: AdditionalServices::default(),
            urgency_level: NEUTRAL_URGENCY,
            travel_distance: 0.0,
            notes: String::new(),
        }
    }

    /// Set the concrete strength
    pub fn with_strength(mut self, strength: ConcreteStrength) -> Self {
        self.concrete_strength = strength;
        self
    }

    /// Set the surface finish
    pub fn with_finish(mut self, finish: SurfaceFinish) -> Self {
        self.surface_finish = finish;
        self
    }

    /// Set the reinforcement
    pub fn with_reinforcement(mut self, reinforcement: ReinforcementType) -> Self {
        self.reinforcement = reinforcement;
        self
    }

    /// Replace the site conditions
    pub fn with_site_conditions(mut self, site_conditions: SiteConditions) -> Self {
        self.site_conditions = site_conditions;
        self
    }

    /// Replace the additional services
    pub fn with_services(mut self, services: AdditionalServices) -> Self {
        self.additional_services = services;
        self
    }

    /// Set the urgency level (1-10)
    pub fn with_urgency(mut self, level: u8) -> Self {
        self.urgency_level = level;
        self
    }

    /// Set the travel distance in miles
    pub fn with_travel_distance(mut self, miles: f64) -> Self {
        self.travel_distance = miles;
        self
    }

    /// Attach free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
