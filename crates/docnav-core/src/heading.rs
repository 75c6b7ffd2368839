//! Line-oriented heading scanner.
//!
//! Only ATX headings are recognised: one or more `#`, whitespace, then text.
//! Fenced code blocks are tracked with a single on/off flag toggled by any line
//! that starts with three backticks; fences do not nest.
//!
//! [`LineScanner`] is the one place that decides whether a line is a heading. The
//! table of contents and the search engine both walk documents through it, so a
//! heading found for navigation is always the heading used for search sections.

use serde::Serialize;

use crate::anchor::slugify;

const FENCE_MARKER: &str = "```";

/// A heading found outside any code fence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Number of leading `#` characters (1 for `#`, 2 for `##`, ...).
    pub level: usize,
    /// Heading text after the marker.
    pub title: String,
    /// `slugify(title)`.
    pub anchor: String,
}

/// Classify a single line as a heading, ignoring fence state.
///
/// Returns `None` unless the line is one or more `#`, at least one whitespace
/// character, and non-empty text.
///
/// ```rust
/// use docnav_core::heading::classify_heading;
///
/// let h = classify_heading("## Key Rotation").unwrap();
/// assert_eq!((h.level, h.title.as_str(), h.anchor.as_str()), (2, "Key Rotation", "key-rotation"));
/// assert!(classify_heading("#hashtag").is_none());
/// ```
pub fn classify_heading(line: &str) -> Option<Heading> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }

    let rest = &line[level..];
    let title = rest.trim_start();
    // Marker must be followed by whitespace, and something must follow that.
    if title.len() == rest.len() || title.is_empty() {
        return None;
    }

    let title = title.trim_end();
    Some(Heading {
        level,
        title: title.to_string(),
        anchor: slugify(title),
    })
}

/// True when the line opens or closes a fenced code block.
pub fn is_fence_line(line: &str) -> bool {
    line.starts_with(FENCE_MARKER)
}

/// One line of a document as seen by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based line number within the scanned text.
    pub number: usize,
    /// Line content without the trailing newline.
    pub text: &'a str,
    /// Fence state after this line's toggle, so an opening fence line reports
    /// `true` and its closing line reports `false`.
    pub in_code_fence: bool,
    /// Set when this line is a heading outside a fence.
    pub heading: Option<Heading>,
}

impl ScannedLine<'_> {
    /// Whether this line is itself a heading.
    pub const fn is_heading(&self) -> bool {
        self.heading.is_some()
    }
}

/// Iterator over the lines of a text with fence and heading classification.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    lines: std::str::Lines<'a>,
    number: usize,
    in_code_fence: bool,
}

impl<'a> LineScanner<'a> {
    /// Start scanning `text` from its first line, outside any fence.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            number: 0,
            in_code_fence: false,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.number += 1;

        if is_fence_line(text) {
            self.in_code_fence = !self.in_code_fence;
        }

        let heading = if self.in_code_fence {
            None
        } else {
            classify_heading(text)
        };

        Some(ScannedLine {
            number: self.number,
            text,
            in_code_fence: self.in_code_fence,
            heading,
        })
    }
}

/// All headings of `text` in document order.
pub fn parse_headings(text: &str) -> Vec<Heading> {
    LineScanner::new(text).filter_map(|line| line.heading).collect()
}
