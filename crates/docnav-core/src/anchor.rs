//! Anchor ids for headings.
//!
//! The same function produces ids on the server (TOC links, search hrefs) and when
//! decorating rendered heading elements, so the two always agree for a given title.

/// Convert heading text into an anchor id.
///
/// Surrounding whitespace is trimmed, every run of non-word characters (anything
/// other than ASCII letters, digits and `_`) becomes a single `-`, hyphens left at
/// either end are dropped, and the result is lowercased.
///
/// Two different titles may map to the same id; nothing here de-duplicates them.
///
/// ```rust
/// use docnav_core::anchor::slugify;
///
/// assert_eq!(slugify("Key Rotation!"), "key-rotation");
/// assert_eq!(slugify("  A & B  "), "a-b");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.trim().chars() {
        if is_word_char(ch) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
