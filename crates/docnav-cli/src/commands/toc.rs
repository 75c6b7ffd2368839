use anyhow::Result;
use colored::Colorize;
use docnav_core::{Document, DocsService, DocumentStore, TocBuilder, parse_headings};

use crate::error::CliError;
use crate::output::{OutputFormat, print_json};

/// Print the table of contents of `doc`.
///
/// Text output is the markdown link list the viewer prepends to the page. JSON
/// output is the list of entries, empty below the heading threshold and for the
/// configured index document, which the viewer never gives a TOC.
pub async fn execute<S: DocumentStore>(
    service: &DocsService<S>,
    doc: &str,
    min_headings: usize,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let response = service.get_document(doc).await.map_err(CliError::from)?;
    let shows_toc = service.page_options().shows_toc(doc);
    let document = Document::parse(doc, response.text);
    let headings = if shows_toc {
        parse_headings(&document.body)
    } else {
        Vec::new()
    };
    let builder = TocBuilder::with_min_headings(min_headings);

    match format {
        OutputFormat::Json => print_json(&builder.entries(&headings))?,
        OutputFormat::Text => {
            let toc = builder.build(&headings);
            if toc.is_empty() {
                if !quiet {
                    let note = if shows_toc {
                        format!(
                            "'{doc}' has {} heading(s); a table of contents needs at least {min_headings}",
                            headings.len()
                        )
                    } else {
                        format!("'{doc}' is the index document and has no table of contents")
                    };
                    eprintln!("{}", note.yellow());
                }
            } else {
                print!("{toc}");
            }
        },
    }
    Ok(())
}
