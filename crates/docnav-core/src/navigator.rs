//! View-side navigation state for the document viewer.
//!
//! [`DocsView`] is the controller of the active documentation view. It decides
//! whether a navigation needs a fetch or just a scroll, and remembers scroll
//! offsets per `(document, anchor)` so returning to a place restores it. The scroll
//! cache belongs to the view: it is created on [`DocsView::activate`] and dropped
//! with the view on [`DocsView::deactivate`].

use std::collections::HashMap;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::page::PageView;

/// Document shown when a route names none.
pub const DEFAULT_DOC: &str = "index";

/// Pseudo-document whose anchor is a search query.
pub const SEARCH_DOC: &str = "search";

/// Where a route points: a document and an optional anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavTarget {
    /// Document id.
    pub doc: String,
    /// Anchor within the document, empty for the top.
    pub anchor: String,
}

impl NavTarget {
    /// Parse a `doc/anchor` sub-route. An empty document means the index.
    ///
    /// ```rust
    /// use docnav_core::navigator::NavTarget;
    ///
    /// let t = NavTarget::parse("hosting/key-rotation");
    /// assert_eq!((t.doc.as_str(), t.anchor.as_str()), ("hosting", "key-rotation"));
    /// assert_eq!(NavTarget::parse("").doc, "index");
    /// ```
    pub fn parse(sub: &str) -> Self {
        let mut parts = sub.split('/');
        let doc = parts.next().filter(|d| !d.is_empty()).unwrap_or(DEFAULT_DOC);
        let anchor = parts.next().unwrap_or_default();
        Self {
            doc: doc.to_string(),
            anchor: anchor.to_string(),
        }
    }
}

/// What the view has to do after a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Drop the current rendering and fetch this target.
    Fetch(NavTarget),
    /// Stay on the page and scroll to the heading with this id.
    ScrollTo {
        /// Heading id.
        anchor: String,
        /// Animate the scroll.
        smooth: bool,
    },
    /// Nothing to do.
    Stay,
}

/// How to position a freshly rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestorePlan {
    /// Vertical offset to restore (0 = top of page).
    pub offset: u32,
    /// Heading to scroll into view after restoring, if any.
    pub scroll_into_view: Option<String>,
}

/// Last known scroll offsets per `(doc, anchor)`.
#[derive(Debug, Default)]
pub struct ScrollCache {
    offsets: HashMap<NavTarget, u32>,
}

impl ScrollCache {
    /// Remember `offset` for `target`.
    pub fn store(&mut self, target: NavTarget, offset: u32) {
        self.offsets.insert(target, offset);
    }

    /// Offset previously stored for `target`.
    pub fn get(&self, target: &NavTarget) -> Option<u32> {
        self.offsets.get(target).copied()
    }

    /// Number of remembered positions.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether nothing has been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Controller of an active documentation view.
#[derive(Debug)]
pub struct DocsView {
    current: NavTarget,
    scroll_cache: ScrollCache,
    last_scroll: u32,
}

impl DocsView {
    /// Activate the view on a sub-route. Always starts with a fetch.
    pub fn activate(sub: &str) -> (Self, NavAction) {
        let current = NavTarget::parse(sub);
        let view = Self {
            current: current.clone(),
            scroll_cache: ScrollCache::default(),
            last_scroll: 0,
        };
        (view, NavAction::Fetch(current))
    }

    /// Target currently displayed.
    pub const fn current(&self) -> &NavTarget {
        &self.current
    }

    /// Scroll cache owned by this view.
    pub const fn scroll_cache(&self) -> &ScrollCache {
        &self.scroll_cache
    }

    /// Track the live scroll position.
    pub const fn record_scroll(&mut self, offset: u32) {
        self.last_scroll = offset;
    }

    /// Handle navigation to another sub-route.
    ///
    /// The current position is cached first. A different document, or a new
    /// query on the search page, needs a fetch; an anchor on the same document is
    /// a smooth scroll.
    pub fn navigate(&mut self, sub: &str) -> NavAction {
        let target = NavTarget::parse(sub);
        self.scroll_cache
            .store(self.current.clone(), self.last_scroll);

        if target.doc != self.current.doc {
            self.current = target.clone();
            return NavAction::Fetch(target);
        }
        if target.anchor.is_empty() {
            return NavAction::Stay;
        }
        if target.doc == SEARCH_DOC {
            self.current = target.clone();
            return NavAction::Fetch(target);
        }

        self.current.anchor.clone_from(&target.anchor);
        NavAction::ScrollTo {
            anchor: target.anchor,
            smooth: true,
        }
    }

    /// Decide how to position a page that was just rendered for the current target.
    ///
    /// A cached offset wins; otherwise the requested heading is scrolled into view
    /// when the page has it.
    pub fn on_rendered(&mut self, page: &PageView) -> RestorePlan {
        let cached = self.scroll_cache.get(&self.current);
        let offset = cached.unwrap_or(0);
        self.last_scroll = offset;

        let anchor = &self.current.anchor;
        let scroll_into_view = (cached.is_none() && !anchor.is_empty() && page.has_heading(anchor))
            .then(|| anchor.clone());

        RestorePlan {
            offset,
            scroll_into_view,
        }
    }

    /// Tear the view down, discarding its scroll cache.
    pub fn deactivate(self) {
        debug!(
            "discarding {} cached scroll positions",
            self.scroll_cache.len()
        );
    }
}

/// Route for a search typed into the viewer's search box.
///
/// Returns `None` when the query has no visible characters.
///
/// ```rust
/// use docnav_core::navigator::search_route;
///
/// assert_eq!(search_route(" key rotation ").as_deref(), Some("Docs/search/key%20rotation"));
/// assert_eq!(search_route("   "), None);
/// ```
pub fn search_route(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "Docs/{SEARCH_DOC}/{}",
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    ))
}
