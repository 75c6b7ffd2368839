//! # docnav-core
//!
//! Core functionality for docnav - browse and search a directory of markdown
//! documents.
//!
//! The crate turns a flat collection of `<id>.md` files into something a reader
//! can navigate: deterministic heading anchors, a generated table of contents,
//! brute-force full-text search with a grouped markdown digest, and link
//! rewriting so that intra-collection links stay inside the viewer.
//!
//! ## Architecture
//!
//! - **Anchors & headings**: [`slugify`] and the code-fence-aware [`LineScanner`]
//!   shared by the TOC builder and the search engine
//! - **Table of contents**: [`TocBuilder`], generated only for longer documents
//! - **Search**: [`SearchEngine`] scans every titled document in store order and
//!   stops at a global match limit
//! - **Pages**: markdown rendering, link rewriting and heading decoration
//! - **Navigation**: [`DocsView`] decides between fetching and scrolling and owns
//!   its scroll cache
//! - **Service**: [`DocsService`] ties a [`DocumentStore`] to the configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use docnav_core::{Config, DocsService, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> docnav_core::Result<()> {
//! let store = MemoryStore::new().with("intro", "# Welcome\n\nA widget appears here.\n");
//! let service = DocsService::new(store, &Config::default());
//!
//! let digest = service.search("widget", None).await?;
//! assert!(digest.text.starts_with("# Search Results"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`]. Validation errors are raised before
//! any document is read:
//!
//! ```rust
//! use docnav_core::{Error, SearchQuery};
//!
//! match SearchQuery::parse("<b></b>") {
//!     Err(Error::Validation(msg)) => assert_eq!(msg, "Invalid search query."),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

/// Deterministic anchor ids for headings
pub mod anchor;
/// Configuration loading and defaults
pub mod config;
/// Documents and their title line
pub mod document;
/// Error types and result aliases
pub mod error;
/// Code-fence-aware heading scanning
pub mod heading;
/// Intra-collection link rewriting
pub mod links;
/// View-side navigation state
pub mod navigator;
/// Page assembly for the viewer
pub mod page;
/// Substring search and digest rendering
pub mod search;
/// Request-level service facade
pub mod service;
/// Document storage backends
pub mod store;
/// Table of contents generation
pub mod toc;

// Re-export commonly used types
pub use anchor::slugify;
pub use config::{CacheConfig, Config, DocsConfig, SearchConfig, TocConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use heading::{Heading, LineScanner, ScannedLine, parse_headings};
pub use links::{rewrite_links, rewrite_target};
pub use navigator::{DocsView, NavAction, NavTarget, RestorePlan, ScrollCache, search_route};
pub use page::{PageOptions, PageView, build_page};
pub use search::{SearchEngine, SearchMatch, SearchQuery, SearchResult};
pub use service::{DocRequest, DocResponse, DocsService};
pub use store::{DocumentStore, FsDocumentStore, MemoryStore};
pub use toc::{TocBuilder, TocEntry, build_toc};
