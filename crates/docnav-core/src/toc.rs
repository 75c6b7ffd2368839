//! Table of contents generation.
//!
//! The TOC is a flat markdown link list, indented with one tab per level below the
//! shallowest heading in the document. Short documents get no TOC at all.

use std::fmt::Write;

use serde::Serialize;

use crate::heading::Heading;

/// Minimum number of headings before a TOC is produced.
pub const DEFAULT_MIN_HEADINGS: usize = 4;

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Link target within the document.
    pub anchor: String,
    /// Heading text.
    pub title: String,
    /// Heading level minus the minimum level found in the document.
    pub indent: usize,
}

/// Builds table-of-contents text from a document's headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBuilder {
    min_headings: usize,
}

impl Default for TocBuilder {
    fn default() -> Self {
        Self {
            min_headings: DEFAULT_MIN_HEADINGS,
        }
    }
}

impl TocBuilder {
    /// Builder producing a TOC only when at least `min_headings` headings exist.
    pub const fn with_min_headings(min_headings: usize) -> Self {
        Self { min_headings }
    }

    /// Structured entries, or an empty list below the threshold.
    pub fn entries(&self, headings: &[Heading]) -> Vec<TocEntry> {
        if headings.len() < self.min_headings {
            return Vec::new();
        }
        let Some(min_level) = headings.iter().map(|h| h.level).min() else {
            return Vec::new();
        };

        headings
            .iter()
            .map(|h| TocEntry {
                anchor: h.anchor.clone(),
                title: h.title.clone(),
                indent: h.level - min_level,
            })
            .collect()
    }

    /// Markdown link list, one `- [title](#anchor)` line per heading in
    /// document order, or an empty string below the threshold.
    pub fn build(&self, headings: &[Heading]) -> String {
        let mut toc = String::new();
        for entry in self.entries(headings) {
            let tabs = "\t".repeat(entry.indent);
            let _ = writeln!(toc, "{tabs}- [{}](#{})", entry.title, entry.anchor);
        }
        toc
    }
}

/// [`TocBuilder::build`] with the default threshold of four headings.
pub fn build_toc(headings: &[Heading]) -> String {
    TocBuilder::default().build(headings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::parse_headings;

    #[test]
    fn test_short_documents_have_no_toc() {
        let headings = parse_headings("## A\n## B\n### C\n");
        assert_eq!(build_toc(&headings), "");
        assert!(TocBuilder::default().entries(&headings).is_empty());
    }

    #[test]
    fn test_toc_indents_relative_to_minimum_level() {
        let text = "## Install\n### Linux\n### macOS\n#### Homebrew\n## Usage\n";
        let toc = build_toc(&parse_headings(text));
        assert_eq!(
            toc,
            "- [Install](#install)\n\
             \t- [Linux](#linux)\n\
             \t- [macOS](#macos)\n\
             \t\t- [Homebrew](#homebrew)\n\
             - [Usage](#usage)\n"
        );
    }

    #[test]
    fn test_toc_keeps_document_order_and_duplicates() {
        let text = "### Zeta\n### Alpha\n### Setup\n### Setup\n";
        let entries = TocBuilder::default().entries(&parse_headings(text));
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Setup", "Setup"]);
        assert!(entries.iter().all(|e| e.indent == 0));
    }

    #[test]
    fn test_custom_threshold() {
        let headings = parse_headings("## A\n## B\n");
        assert_eq!(TocBuilder::with_min_headings(2).build(&headings).lines().count(), 2);
        assert_eq!(TocBuilder::with_min_headings(0).build(&[]), "");
    }
}
