//! Subcommand implementations

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use miette::{IntoDiagnostic, Result, WrapErr};
use pour_core::{estimate, Choice, Dimensions, EstimateResult, EstimationResult, ProjectParameters, ProjectType, SlabThickness};

use crate::cli::{Cli, CompletionsArgs, EstimateArgs, OutputFormat, TemplateArgs};
use crate::config::Config;
use crate::interactive::{collect_parameters, TerminalForm, DEFAULT_SIDE_FT};
use crate::render;

/// Read the parameter file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .into_diagnostic()
            .wrap_err("Failed to read parameters from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Print an estimate, or report why there is none.
///
/// In JSON mode a rejected record is also printed to stdout as the
/// serialized error so scripts can read the offending field.
fn emit(outcome: EstimateResult<EstimationResult>, config: &Config) -> Result<()> {
    match outcome {
        Ok(result) => render::print_result(&result, config),
        Err(err) => {
            tracing::warn!(code = err.error_code(), field = err.field(), "estimate rejected");
            if config.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&err).into_diagnostic()?);
            }
            Err(err).into_diagnostic().wrap_err("Could not estimate project")
        }
    }
}

pub fn estimate_file(args: EstimateArgs, config: &Config) -> Result<()> {
    let json = read_input(&args.input)?;
    tracing::info!(input = %args.input.display(), bytes = json.len(), "read parameters");

    let outcome = ProjectParameters::from_json(&json).and_then(|params| estimate(&params));
    emit(outcome, config)
}

pub fn interactive(config: &Config) -> Result<()> {
    let mut form = TerminalForm::new();
    if !form.is_interactive() {
        return Err(miette::miette!(
            help = "write a parameters file (see `pour template`) and run `pour estimate <FILE>`",
            "Interactive mode needs a terminal"
        ));
    }

    let params = collect_parameters(&mut form).wrap_err("Failed to read answers")?;
    tracing::debug!(?params, "collected parameters");

    emit(estimate(&params), config)
}

pub fn template(args: TemplateArgs) -> Result<()> {
    let project_type = ProjectType::from_str_flexible(&args.project_type).into_diagnostic()?;
    let params = ProjectParameters::new(
        project_type,
        Dimensions::new(DEFAULT_SIDE_FT, DEFAULT_SIDE_FT, SlabThickness::default()),
    );
    println!("{}", serde_json::to_string_pretty(&params).into_diagnostic()?);
    Ok(())
}

pub fn completions(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "pour", &mut io::stdout());
    Ok(())
}
