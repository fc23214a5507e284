//! Interactive parameter entry
//!
//! [`collect_parameters`] walks the estimate form field by field and builds a
//! parameter record from whatever [`FormPrompts`] answers. [`TerminalForm`]
//! answers with `dialoguer` widgets drawn on stderr, so stdout keeps only the
//! report.

use std::str::FromStr;

use console::Term;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use pour_core::params::NEUTRAL_URGENCY;
use pour_core::{
    AccessDifficulty, AdditionalServices, Choice, ConcreteStrength, Dimensions, FormworkComplexity,
    ProjectParameters, ProjectType, ReinforcementType, SiteConditions, SlabThickness, SoilType, SurfaceFinish,
};

/// Default slab length and width on the form, in feet
pub const DEFAULT_SIDE_FT: f64 = 20.0;

/// One answer per form widget
pub trait FormPrompts {
    /// Pick one option of a closed choice
    fn choice<T: Choice>(&mut self, label: &str, default: T) -> Result<T>;

    /// Enter a value parsed with `FromStr`
    fn number<T>(&mut self, label: &str, default: T) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString;

    /// Answer yes or no
    fn confirm(&mut self, label: &str, default: bool) -> Result<bool>;

    /// Free text, may be empty
    fn text(&mut self, label: &str) -> Result<String>;
}

/// Terminal form on stderr
pub struct TerminalForm {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalForm {
    pub fn new() -> Self {
        TerminalForm {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Whether stderr is attached to a terminal the widgets can draw on
    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

impl Default for TerminalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPrompts for TerminalForm {
    fn choice<T: Choice>(&mut self, label: &str, default: T) -> Result<T> {
        let items: Vec<&str> = T::ALL.iter().map(|c| c.display_name()).collect();
        let default_idx = T::ALL.iter().position(|c| *c == default).unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(&items)
            .default(default_idx)
            .interact_on(&self.term)
            .into_diagnostic()?;

        T::ALL
            .get(selection)
            .copied()
            .ok_or_else(|| miette::miette!("No option at position {} for {}", selection, label))
    }

    fn number<T>(&mut self, label: &str, default: T) -> Result<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: ToString,
    {
        Input::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .interact_text_on(&self.term)
            .into_diagnostic()
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .interact_on(&self.term)
            .into_diagnostic()
    }

    fn text(&mut self, label: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .into_diagnostic()
    }
}

/// Walk the whole form and build a parameter record.
///
/// The record is not validated here; ranges are checked by the estimate.
pub fn collect_parameters(p: &mut impl FormPrompts) -> Result<ProjectParameters> {
    let project_type = p.choice("Project type", ProjectType::default())?;
    let length_ft = p.number("Length (ft)", DEFAULT_SIDE_FT)?;
    let width_ft = p.number("Width (ft)", DEFAULT_SIDE_FT)?;
    let thickness = p.choice("Thickness", SlabThickness::default())?;
    let concrete_strength = p.choice("Concrete strength", ConcreteStrength::default())?;
    let surface_finish = p.choice("Surface finish", SurfaceFinish::default())?;
    let reinforcement = p.choice("Reinforcement", ReinforcementType::default())?;

    let site_conditions = SiteConditions {
        slope_grade: p.number("Slope grade (%)", 0.0)?,
        needs_excavation: p.confirm("Needs excavation?", false)?,
        soil_type: p.choice("Soil type", SoilType::default())?,
        access_difficulty: p.choice("Site access", AccessDifficulty::default())?,
        needs_haul_away: p.confirm("Haul away spoil?", false)?,
        formwork_complexity: p.choice("Formwork complexity", FormworkComplexity::default())?,
    };

    let additional_services = AdditionalServices {
        demolition: p.confirm("Demolition?", false)?,
        grading: p.confirm("Grading?", false)?,
        drainage: p.confirm("Drainage?", false)?,
        base_preparation: p.confirm("Base preparation?", false)?,
        expansion_joints: p.confirm("Expansion joints?", false)?,
        control_joints: p.confirm("Control joints?", false)?,
    };

    let urgency_level = p.number("Urgency (1-10)", NEUTRAL_URGENCY)?;
    let travel_distance = p.number("Travel distance (miles)", 0.0)?;
    let notes = p.text("Notes")?;

    Ok(ProjectParameters::new(project_type, Dimensions::new(length_ft, width_ft, thickness))
        .with_strength(concrete_strength)
        .with_finish(surface_finish)
        .with_reinforcement(reinforcement)
        .with_site_conditions(site_conditions)
        .with_services(additional_services)
        .with_urgency(urgency_level)
        .with_travel_distance(travel_distance)
        .with_notes(notes))
}
