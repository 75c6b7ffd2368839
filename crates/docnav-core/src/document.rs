//! Documents and their title line.

use serde::Serialize;

use crate::heading::classify_heading;
use crate::{Error, Result};

/// A document of the collection, split into title and body.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Document id (file stem, word characters only).
    pub id: String,
    /// Raw markdown as stored.
    #[serde(skip)]
    pub raw_text: String,
    /// Text of the leading level-1 heading, if any.
    pub title: Option<String>,
    /// Everything after the title line (the whole text when there is no title).
    pub body: String,
}

impl Document {
    /// Split `raw_text` into title and body.
    pub fn parse(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let (title, body) = match split_title(&raw_text) {
            Some((title, body)) => (Some(title), body.to_string()),
            None => (None, raw_text.clone()),
        };
        Self {
            id: id.into(),
            raw_text,
            title,
            body,
        }
    }

    /// Whether the document takes part in search (it needs a title).
    pub const fn is_searchable(&self) -> bool {
        self.title.is_some()
    }
}

/// Split off a leading level-1 heading.
///
/// Leading blank lines are skipped; the first remaining line must be a `# Title`
/// heading. Returns the title text and the rest of the document after that line.
///
/// ```rust
/// use docnav_core::document::split_title;
///
/// let (title, body) = split_title("# Welcome\n\nHello\n").unwrap();
/// assert_eq!(title, "Welcome");
/// assert_eq!(body, "\nHello\n");
/// assert!(split_title("## Not a title\n").is_none());
/// ```
pub fn split_title(text: &str) -> Option<(String, &str)> {
    let text = text.trim_start();
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let heading = classify_heading(first.trim_end_matches('\r'))?;
    (heading.level == 1).then_some((heading.title, rest))
}

/// Check a document id: one or more ASCII word characters.
pub fn validate_doc_id(id: &str) -> Result<()> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        Ok(())
    } else {
        Err(Error::Validation(format!("Invalid document id: '{id}'")))
    }
}
