use anyhow::Result;
use colored::Colorize;
use docnav_core::{DocsService, DocumentStore, NavTarget};

use crate::error::CliError;
use crate::output::{OutputFormat, print_json};

/// Assemble and print the page for a `doc[/anchor]` route.
pub async fn execute<S: DocumentStore>(
    service: &DocsService<S>,
    target: &str,
    html: bool,
    format: OutputFormat,
) -> Result<()> {
    let target = NavTarget::parse(target);
    let page = service.view(&target).await.map_err(CliError::from)?;

    match format {
        OutputFormat::Json => print_json(&page)?,
        OutputFormat::Text if html => println!("{}", page.html.trim_end()),
        OutputFormat::Text => {
            println!("{}\n", page.window_title.bold());
            println!("{}", page.markdown);
        },
    }
    Ok(())
}
