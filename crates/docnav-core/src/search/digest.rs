//! Markdown digest of a search result.

use std::fmt::Write;
use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;

use super::{SearchMatch, SearchResult};

static LEADING_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\s*(-|\d+\.|#+)\s+").expect("static marker pattern")
});

impl SearchResult {
    /// Render the result as a markdown page.
    ///
    /// Consecutive matches with the same `href` share one bold link line; every
    /// non-heading match adds one preview bullet under it.
    pub fn render_digest(&self) -> String {
        let query = encode_text(&self.query);
        let mut text = String::from("# Search Results\n\n");

        if self.matches.is_empty() {
            let _ = write!(
                text,
                "No results found for &ldquo;{query}&rdquo;.  Please try a different search query."
            );
            return text;
        }

        let more = if self.truncated { "+" } else { "" };
        let _ = writeln!(
            text,
            "## {}{more} {} for &ldquo;{query}&rdquo;:",
            format_number(self.total_count),
            pluralize("result", self.total_count)
        );

        let mut last_href: Option<&str> = None;
        for m in &self.matches {
            if last_href != Some(m.href.as_str()) {
                last_href = Some(m.href.as_str());
                write_link_line(&mut text, m);
            }

            // Heading matches are represented by their link line alone.
            if m.is_heading_match {
                continue;
            }
            let _ = writeln!(text, "\t- {}", preview(m));
        }

        if self.truncated {
            text.push_str("\n*(Additional matches were chopped.)*");
        }
        text
    }
}

fn write_link_line(text: &mut String, m: &SearchMatch) {
    let _ = write!(text, "\n- **[{}]({}.md)**", m.title, m.doc_id);
    if !m.section_anchor.is_empty() {
        let _ = write!(text, " → **[{}]({})**", m.section_title, m.href);
    }
    text.push('\n');
}

fn preview(m: &SearchMatch) -> String {
    let escaped = m.line_text.replace('<', "&lt;").replace('>', "&gt;");
    let mut line = escaped.trim().to_string();
    if m.in_code_fence {
        line = format!("<code>{}</code>", line.replace('`', ""));
    }
    LEADING_MARKER_RE.replace(&line, "").trim().to_string()
}

fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Format a number with thousand separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
