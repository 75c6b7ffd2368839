//! Brute-force substring search across the document collection.
//!
//! Documents are read one at a time in store order and scanned line by line with
//! the shared [`LineScanner`]. Matches are unranked and kept in discovery order.
//! Once `limit` matches are recorded the scan stops at once, without finishing the
//! current document and without reading any further documents, so earlier
//! documents are fully represented and later ones are not.

mod digest;
mod query;

use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{debug, info};

use crate::document::split_title;
use crate::heading::LineScanner;
use crate::store::DocumentStore;
use crate::Result;

pub use query::SearchQuery;

/// Match cap used when the caller does not give one.
pub const DEFAULT_LIMIT: usize = 100;

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    /// Id of the document containing the line.
    pub doc_id: String,
    /// Title of that document.
    pub title: String,
    /// 1-based line number within the document body (title line excluded).
    pub line_number: usize,
    /// The matching line as written.
    pub line_text: String,
    /// Character offset of the first match within the line.
    pub match_offset: usize,
    /// Whether the line sits inside a fenced code block.
    pub in_code_fence: bool,
    /// Title of the closest heading at or above the line, or empty.
    pub section_title: String,
    /// Anchor of that heading, or empty.
    pub section_anchor: String,
    /// Whether the matching line is itself a heading.
    pub is_heading_match: bool,
    /// `<doc_id>.md`, plus `#<section_anchor>` inside a section.
    pub href: String,
}

/// Outcome of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Sanitized query text, as searched.
    pub query: String,
    /// Matches in document order, then line order.
    pub matches: Vec<SearchMatch>,
    /// True when the scan stopped at the limit.
    pub truncated: bool,
    /// Number of matches returned.
    pub total_count: usize,
}

/// Search over a [`DocumentStore`].
pub struct SearchEngine<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> SearchEngine<'a, S> {
    /// Engine reading from `store`.
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Sanitize `raw_query` and search every titled document for it.
    ///
    /// Fails with a validation error, before any read, when the query is empty
    /// after decoding and tag stripping. A read failure on any document fails the
    /// whole search. A `limit` of zero is treated as one.
    pub async fn search(&self, raw_query: &str, limit: usize) -> Result<SearchResult> {
        let query = SearchQuery::parse(raw_query)?;
        self.search_query(&query, limit).await
    }

    /// Search with an already sanitized query.
    pub async fn search_query(&self, query: &SearchQuery, limit: usize) -> Result<SearchResult> {
        let limit = limit.max(1);
        let mut collector = MatchCollector::new(query.lowercase(), limit);

        for id in self.store.list_ids().await? {
            let text = self.store.read(&id).await?;
            if collector.scan_document(&id, &text).is_break() {
                info!(
                    "search for '{}' stopped at {limit} matches in '{id}'",
                    query.as_str()
                );
                break;
            }
        }

        let matches = collector.matches;
        Ok(SearchResult {
            query: query.as_str().to_string(),
            total_count: matches.len(),
            truncated: collector.truncated,
            matches,
        })
    }
}

/// Accumulates matches across documents and enforces the global cap.
struct MatchCollector<'q> {
    needle: &'q str,
    limit: usize,
    matches: Vec<SearchMatch>,
    truncated: bool,
}

impl<'q> MatchCollector<'q> {
    const fn new(needle: &'q str, limit: usize) -> Self {
        Self {
            needle,
            limit,
            matches: Vec::new(),
            truncated: false,
        }
    }

    /// Scan one document. Breaks as soon as the cap is reached.
    fn scan_document(&mut self, doc_id: &str, text: &str) -> ControlFlow<()> {
        let Some((title, body)) = split_title(text) else {
            debug!("skipping '{doc_id}': no title heading");
            return ControlFlow::Continue(());
        };

        let mut section_title = String::new();
        let mut section_anchor = String::new();

        for line in LineScanner::new(body.trim_end()) {
            if let Some(heading) = &line.heading {
                section_title.clone_from(&heading.title);
                section_anchor.clone_from(&heading.anchor);
            }

            let lowered = line.text.to_lowercase();
            let Some(byte_idx) = lowered.find(self.needle) else {
                continue;
            };

            let mut href = format!("{doc_id}.md");
            if !section_anchor.is_empty() {
                href.push('#');
                href.push_str(&section_anchor);
            }

            self.matches.push(SearchMatch {
                doc_id: doc_id.to_string(),
                title: title.clone(),
                line_number: line.number,
                line_text: line.text.to_string(),
                match_offset: lowered[..byte_idx].chars().count(),
                in_code_fence: line.in_code_fence,
                section_title: section_title.clone(),
                section_anchor: section_anchor.clone(),
                is_heading_match: line.is_heading(),
                href,
            });

            if self.matches.len() >= self.limit {
                self.truncated = true;
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }
}
