//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pour")]
#[command(author, version, about = "Pourwise concrete project estimator")]
#[command(
    long_about = "Estimate the price, materials, crew hours and equipment for a concrete slab project from a JSON parameter record."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format (overrides the config file)
    #[arg(long, short = 'f', global = true, env = "POUR_FORMAT", value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON config file
    #[arg(long, global = true, env = "POUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// How results are written to stdout
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// The full estimate as pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate a project from a parameters JSON file
    Estimate(EstimateArgs),

    /// Answer prompts for each parameter, then estimate
    Interactive,

    /// Print a default parameter record to start from
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct EstimateArgs {
    /// Parameters file, or `-` to read stdin
    pub input: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Project type key or label (e.g. `patio`, "pool deck")
    #[arg(long, short = 't', default_value = "driveway")]
    pub project_type: String,
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
