use anyhow::{Result, anyhow};
use docnav_core::{DocsService, DocumentStore, SearchQuery};
use tracing::debug;

use crate::error::CliError;
use crate::output::{OutputFormat, print_json};

/// Search the collection and print the digest or the structured result.
///
/// Arguments are taken literally; only `view search/<query>` routes are
/// percent-decoded.
pub async fn execute<S: DocumentStore>(
    service: &DocsService<S>,
    query: &str,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    if limit == Some(0) {
        return Err(CliError::usage(anyhow!("--limit must be at least 1")).into());
    }

    let query = SearchQuery::from_text(query).map_err(CliError::from)?;
    let result = service
        .search_with(&query, limit)
        .await
        .map_err(CliError::from)?;
    debug!(
        "{} matches for '{}'{}",
        result.total_count,
        result.query,
        if result.truncated { " (truncated)" } else { "" }
    );

    match format {
        OutputFormat::Text => println!("{}", result.render_digest().trim_end()),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}
