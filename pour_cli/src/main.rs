//! # Pourwise CLI
//!
//! Command-line front end for `pour_core`.
//!
//! ```bash
//! pour template --project-type patio > patio.json
//! pour estimate patio.json
//! pour --format json estimate - < patio.json
//! pour interactive
//! ```

mod cli;
mod commands;
mod config;
mod interactive;
mod logging;
mod render;

use clap::Parser;
use miette::Result;

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let config = Config::resolve(&cli.global)?;
    logging::init(config.log_filter.as_deref(), cli.global.verbose);
    tracing::debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Estimate(args) => commands::estimate_file(args, &config),
        Commands::Interactive => commands::interactive(&config),
        Commands::Template(args) => commands::template(args),
        Commands::Completions(args) => commands::completions(args),
    }
}
