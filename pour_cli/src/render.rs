//! Report rendering
//!
//! The text report has four sections: Cost Breakdown, Materials Needed,
//! Project Details and Recommendations. JSON output is the
//! [`EstimationResult`] exactly as the engine returns it.

use std::fmt::{self, Write};

use miette::{IntoDiagnostic, Result};
use pour_core::rates::pricing::MARKUP_RATE;
use pour_core::EstimationResult;

use crate::cli::OutputFormat;
use crate::config::Config;

const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 14;

/// Format money with thousands separators and two decimals, e.g. `$1,234.56`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, cents % 100)
}

fn heading(out: &mut impl Write, title: &str) -> fmt::Result {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.len()))
}

fn row(out: &mut impl Write, label: &str, value: &str) -> fmt::Result {
    writeln!(out, "  {:<lw$}{:>aw$}", label, value, lw = LABEL_WIDTH, aw = AMOUNT_WIDTH)
}

fn write_text(out: &mut impl Write, result: &EstimationResult, symbol: &str) -> fmt::Result {
    let costs = &result.costs;
    let money = |amount: f64| format_currency(amount, symbol);

    heading(out, "Cost Breakdown")?;
    row(out, "Base Cost", &money(costs.base_cost))?;
    row(out, "Finish Cost", &money(costs.finish_cost))?;
    row(out, "Reinforcement Cost", &money(costs.reinforcement_cost))?;
    row(out, "Additional Services", &money(costs.additional_services_cost))?;
    row(out, "Site Conditions", &money(costs.site_conditions_cost))?;
    row(out, "Travel Cost", &money(costs.travel_cost))?;
    writeln!(out, "  {}", "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH))?;
    row(out, "Subtotal", &money(costs.subtotal))?;
    row(out, &format!("Markup ({:.0}%)", MARKUP_RATE * 100.0), &money(costs.markup))?;
    writeln!(out, "  {}", "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH))?;
    row(out, "Total", &money(costs.total))?;
    writeln!(out)?;

    let qty = &result.material_quantities;
    heading(out, "Materials Needed")?;
    row(out, "Concrete", &format!("{} cubic yards", qty.concrete_cubic_yards))?;
    if qty.reinforcement_sqft > 0.0 {
        row(out, "Reinforcement", &format!("{} sq ft", qty.reinforcement_sqft))?;
    }
    row(out, "Base Aggregate", &format!("{} tons", qty.base_aggregate_tons))?;
    writeln!(out)?;

    heading(out, "Project Details")?;
    row(out, "Labor Hours", &format!("{} hours", result.labor_hours))?;
    row(out, "Estimated Duration", &format!("{} days", result.estimated_duration_days))?;
    writeln!(out, "  Equipment Needed")?;
    for item in &result.equipment_needed {
        writeln!(out, "    - {}", item)?;
    }
    writeln!(out)?;

    heading(out, "Recommendations")?;
    for note in &result.recommendations {
        writeln!(out, "  * {}", note)?;
    }
    Ok(())
}

/// Render the human-readable report.
pub fn text_report(result: &EstimationResult, currency_symbol: &str) -> String {
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_text(&mut out, result, currency_symbol);
    out
}

/// Print an estimate to stdout in the configured format.
pub fn print_result(result: &EstimationResult, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Text => print!("{}", text_report(result, &config.currency_symbol)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result).into_diagnostic()?),
    }
    Ok(())
}
