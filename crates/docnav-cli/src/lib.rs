//! docnav CLI - browse and search a directory of markdown documentation
//!
//! The binary in `main.rs` only maps the result of [`run`] to an exit code; all
//! argument handling and command dispatch lives here.

use anyhow::Result;
use clap::Parser;
use docnav_core::{Config, DocsService, DocumentStore};
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::utils::initialize_logging;

/// Execute the docnav CLI with the currently configured environment.
///
/// # Errors
///
/// Returns an error if configuration loading or command execution fails. Errors
/// carry a [`CliError`] category where one is known.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let config = load_config(&cli)?;
    debug!("documents root: {}", config.docs.root.display());
    let service = DocsService::from_config(&config);

    execute_command(cli, &config, &service).await
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path).map_err(CliError::from)?;
            config.apply_env();
            config
        },
        None => Config::load().map_err(CliError::from)?,
    };
    if let Some(dir) = &cli.docs_dir {
        config.docs.root.clone_from(dir);
    }
    Ok(config)
}

async fn execute_command<S: DocumentStore>(
    cli: Cli,
    config: &Config,
    service: &DocsService<S>,
) -> Result<()> {
    match cli.command {
        Commands::Get { doc, format } => {
            commands::get_document(service, &doc, format.resolve()).await?;
        },
        Commands::View {
            target,
            html,
            format,
        } => {
            commands::view_page(service, &target, html, format.resolve()).await?;
        },
        Commands::Toc {
            doc,
            min_headings,
            format,
        } => {
            let min_headings = min_headings.unwrap_or(config.toc.min_headings);
            commands::show_toc(service, &doc, min_headings, format.resolve(), cli.quiet).await?;
        },
        Commands::Search {
            query,
            limit,
            format,
        } => {
            commands::search(service, &query.join(" "), limit, format.resolve()).await?;
        },
    }
    Ok(())
}
