use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::{Error, Result};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"<[^>]*>").expect("static tag pattern")
});

const INVALID_QUERY: &str = "Invalid search query.";

/// A search query after decoding and sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    lowercase: String,
}

impl SearchQuery {
    /// Decode a raw query and strip tag-like sequences.
    ///
    /// The raw text is percent-decoded first (`%20` is a space, `+` stays a plus).
    /// Malformed escapes, invalid UTF-8, or a query left with no non-whitespace
    /// characters are rejected with [`Error::Validation`].
    ///
    /// ```rust
    /// use docnav_core::search::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::parse("key%20rotation").unwrap().as_str(), "key rotation");
    /// assert!(SearchQuery::parse("<b></b>").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if has_malformed_escape(raw) {
            return Err(Error::Validation(INVALID_QUERY.into()));
        }
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| Error::Validation(INVALID_QUERY.into()))?;
        Self::from_text(&decoded)
    }

    /// Sanitize query text that was never percent-encoded, such as a command-line
    /// argument. `%` is an ordinary character here.
    ///
    /// ```rust
    /// use docnav_core::search::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::from_text("100%").unwrap().as_str(), "100%");
    /// assert!(SearchQuery::from_text(" <br> ").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self> {
        let text = TAG_RE.replace_all(text, "").into_owned();
        if text.trim().is_empty() {
            return Err(Error::Validation(INVALID_QUERY.into()));
        }

        let lowercase = text.to_lowercase();
        Ok(Self { text, lowercase })
    }

    /// Sanitized query as entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowercased form used for matching.
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }
}

/// A `%` must always start a two-hex-digit escape.
fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}
