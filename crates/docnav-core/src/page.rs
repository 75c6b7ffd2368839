//! Page assembly for the document viewer.
//!
//! Turns raw document text into what the viewer shows: title, window title, the
//! markdown with a table of contents prepended, and HTML with rewritten links and
//! deep-linkable headings.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};
use serde::Serialize;

use crate::anchor::slugify;
use crate::document::split_title;
use crate::heading::{classify_heading, parse_headings};
use crate::links::{doc_route, rewrite_links};
use crate::toc::TocBuilder;

/// Title used when a document has no leading level-1 heading.
pub const UNTITLED: &str = "No Title";

/// Window title of the index document and suffix of every other one.
pub const SITE_TITLE: &str = "Documentation";

/// Settings that shape page assembly.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Id of the collection's landing document (no TOC, generic window title).
    pub index_doc: String,
    /// TOC threshold.
    pub toc: TocBuilder,
}

impl PageOptions {
    /// Whether `doc_id` gets a table of contents at all.
    ///
    /// The landing document never does, whatever its heading count.
    pub fn shows_toc(&self, doc_id: &str) -> bool {
        doc_id != self.index_doc
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            index_doc: "index".to_string(),
            toc: TocBuilder::default(),
        }
    }
}

/// A document ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    /// Document id the page was built for.
    pub doc_id: String,
    /// Document title, or [`UNTITLED`].
    pub title: String,
    /// Browser window title.
    pub window_title: String,
    /// Body markdown, with the TOC prepended when one was generated.
    pub markdown: String,
    /// Rendered body with links rewritten and headings decorated.
    pub html: String,
    /// Ids attached to rendered headings, in document order.
    pub heading_ids: Vec<String>,
}

impl PageView {
    /// Whether a rendered heading carries this id.
    pub fn has_heading(&self, id: &str) -> bool {
        self.heading_ids.iter().any(|h| h == id)
    }
}

/// Assemble the page for `doc_id` from its raw text.
pub fn build_page(doc_id: &str, raw_text: &str, options: &PageOptions) -> PageView {
    let (title, body) = match split_title(raw_text) {
        Some((title, body)) => (title, body.trim()),
        None => (UNTITLED.to_string(), raw_text.trim()),
    };
    let is_index = doc_id == options.index_doc;

    let window_title = if is_index {
        SITE_TITLE.to_string()
    } else {
        format!("{title} | {SITE_TITLE}")
    };

    let toc = if options.shows_toc(doc_id) {
        options.toc.build(&parse_headings(body))
    } else {
        String::new()
    };
    let markdown = if toc.is_empty() {
        body.to_string()
    } else {
        format!("## Table of Contents\n\n{toc}\n{body}")
    };

    let (rendered, heading_ids) = render_page_html(&markdown, doc_id);
    let html = rewrite_links(&rendered, doc_id);

    PageView {
        doc_id: doc_id.to_string(),
        title,
        window_title,
        markdown,
        html,
        heading_ids,
    }
}

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render markdown with every heading given an id and a deep-link affordance.
///
/// A heading's id is the anchor [`classify_heading`] derives from its source
/// line, so it is exactly the anchor the TOC and search results link to. Setext
/// headings fall back to slugifying their first line. Returns the HTML and the
/// ids in document order.
pub fn render_page_html(markdown: &str, doc_id: &str) -> (String, Vec<String>) {
    let mut ids = Vec::new();
    let events = Parser::new_ext(markdown, markdown_options())
        .into_offset_iter()
        .map(|(event, range)| match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let id = heading_anchor(&markdown[range]);
                let href = doc_route(doc_id, &id);
                let open = format!(
                    r#"<{level} id="{id}" class="heading"><a href="{href}" class="anchor"><i class="mdi mdi-link-variant"></i></a>"#
                );
                ids.push(id);
                Event::Html(open.into())
            }
            Event::End(TagEnd::Heading(level)) => Event::Html(format!("</{level}>\n").into()),
            other => other,
        });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events);
    (output, ids)
}

fn heading_anchor(source: &str) -> String {
    let line = source.lines().next().unwrap_or_default();
    classify_heading(line.trim_start()).map_or_else(|| slugify(line.trim()), |h| h.anchor)
}
