use anyhow::Result;
use docnav_core::{DocsService, DocumentStore};
use serde::Serialize;

use crate::error::CliError;
use crate::output::{OutputFormat, print_json};

#[derive(Serialize)]
struct DocumentOutput<'a> {
    id: &'a str,
    cache_ttl_secs: u64,
    text: &'a str,
}

/// Print the raw markdown of `doc`.
pub async fn execute<S: DocumentStore>(
    service: &DocsService<S>,
    doc: &str,
    format: OutputFormat,
) -> Result<()> {
    let response = service.get_document(doc).await.map_err(CliError::from)?;

    match format {
        OutputFormat::Text => print!("{}", response.text),
        OutputFormat::Json => print_json(&DocumentOutput {
            id: doc,
            cache_ttl_secs: response.cache_ttl.as_secs(),
            text: &response.text,
        })?,
    }
    Ok(())
}
