//! Rewriting of intra-collection links into `#Docs/...` routes.
//!
//! Documents link to each other with plain markdown targets (`other.md`,
//! `other.md#setup`, `#setup`). Once rendered, those targets are rewritten into the
//! hosting application's routes so navigation stays inside the viewer.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Route prefix for documents.
pub const ROUTE_PREFIX: &str = "#Docs";

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"(<a\s[^>]*?\bhref=)(?:"([^"]*)"|'([^']*)')"#).expect("static href pattern")
});

/// Route for a document, optionally at an anchor.
///
/// ```rust
/// use docnav_core::links::doc_route;
///
/// assert_eq!(doc_route("intro", ""), "#Docs/intro");
/// assert_eq!(doc_route("intro", "setup"), "#Docs/intro/setup");
/// ```
pub fn doc_route(doc: &str, anchor: &str) -> String {
    if anchor.is_empty() {
        format!("{ROUTE_PREFIX}/{doc}")
    } else {
        format!("{ROUTE_PREFIX}/{doc}/{anchor}")
    }
}

/// Rewrite one link target, or `None` when it is not an intra-collection link.
///
/// - `word.md` → `#Docs/word`
/// - `word.md#frag` → `#Docs/word/frag`
/// - `#frag` → `#Docs/<current_doc>/frag`
///
/// Fragments may not contain whitespace or `/`, so an already rewritten target
/// never matches again.
pub fn rewrite_target(target: &str, current_doc: &str) -> Option<String> {
    if let Some(fragment) = target.strip_prefix('#') {
        return is_fragment(fragment).then(|| doc_route(current_doc, fragment));
    }

    let (file, fragment) = match target.split_once('#') {
        Some((file, fragment)) => (file, Some(fragment)),
        None => (target, None),
    };
    let doc = file.strip_suffix(".md")?;
    if !is_word(doc) {
        return None;
    }

    match fragment {
        None => Some(doc_route(doc, "")),
        Some(fragment) if is_fragment(fragment) => Some(doc_route(doc, fragment)),
        Some(_) => None,
    }
}

/// Rewrite every anchor-tag `href` in rendered HTML. Link text is left alone.
pub fn rewrite_links(html: &str, current_doc: &str) -> String {
    HREF_RE
        .replace_all(html, |caps: &Captures<'_>| {
            let (quote, target) = match (caps.get(2), caps.get(3)) {
                (Some(target), _) => ('"', target.as_str()),
                (None, Some(target)) => ('\'', target.as_str()),
                (None, None) => return caps[0].to_string(),
            };
            match rewrite_target(target, current_doc) {
                Some(route) => format!("{}{quote}{route}{quote}", &caps[1]),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_fragment(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '/')
}
