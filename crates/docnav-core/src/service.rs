//! Request-level entry points over a document store.
//!
//! [`DocsService`] is what an HTTP handler or the CLI talks to. Each call is
//! independent; the only shared state is the store and the configuration.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::document::validate_doc_id;
use crate::navigator::{NavTarget, SEARCH_DOC};
use crate::page::{PageOptions, PageView, build_page};
use crate::search::{SearchEngine, SearchQuery, SearchResult};
use crate::store::{DocumentStore, FsDocumentStore};
use crate::{Error, Result};

/// A request for a document by id, as routed by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRequest {
    /// Document id, or `search`.
    pub doc: String,
    /// Anchor. For `search` this is the (encoded) query.
    pub anchor: Option<String>,
}

impl DocRequest {
    /// Request for a plain document.
    pub fn doc(id: impl Into<String>) -> Self {
        Self {
            doc: id.into(),
            anchor: None,
        }
    }

    /// Request for the search pseudo-document.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            doc: SEARCH_DOC.to_string(),
            anchor: Some(query.into()),
        }
    }
}

impl From<&NavTarget> for DocRequest {
    fn from(target: &NavTarget) -> Self {
        Self {
            doc: target.doc.clone(),
            anchor: (!target.anchor.is_empty()).then(|| target.anchor.clone()),
        }
    }
}

/// Text handed back to the caller, with the cache lifetime it may be kept for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocResponse {
    /// Raw markdown of a document, or a search digest.
    pub text: String,
    /// How long the response may be cached.
    pub cache_ttl: Duration,
}

/// Document and search service.
#[derive(Debug)]
pub struct DocsService<S> {
    store: S,
    default_limit: usize,
    cache_ttl: Duration,
    page_options: PageOptions,
}

impl DocsService<FsDocumentStore> {
    /// Service over the directory named by `config.docs.root`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(FsDocumentStore::new(&config.docs.root), config)
    }
}

impl<S: DocumentStore> DocsService<S> {
    /// Service over `store`, configured by `config`.
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            default_limit: config.search.default_limit,
            cache_ttl: config.cache_ttl(),
            page_options: config.page_options(),
        }
    }

    /// Underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Page assembly settings, shared with anything that previews pages.
    pub const fn page_options(&self) -> &PageOptions {
        &self.page_options
    }

    /// Raw markdown of one document.
    ///
    /// The id is validated before the store is touched.
    pub async fn get_document(&self, id: &str) -> Result<DocResponse> {
        validate_doc_id(id)?;
        let text = self.store.read(id).await?;
        Ok(self.respond(text))
    }

    /// Search the collection and render the digest.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> Result<DocResponse> {
        let result = self.search_result(query, limit).await?;
        Ok(self.respond(result.render_digest()))
    }

    /// Search the collection, returning the structured result.
    ///
    /// `query` is percent-encoded, as it arrives in a `search/<query>` route.
    pub async fn search_result(&self, query: &str, limit: Option<usize>) -> Result<SearchResult> {
        let query = SearchQuery::parse(query)?;
        self.search_with(&query, limit).await
    }

    /// Search with an already sanitized query.
    pub async fn search_with(
        &self,
        query: &SearchQuery,
        limit: Option<usize>,
    ) -> Result<SearchResult> {
        let limit = limit.unwrap_or(self.default_limit);
        debug!("searching for '{}' (limit {limit})", query.as_str());
        SearchEngine::new(&self.store)
            .search_query(query, limit)
            .await
    }

    /// Route a request by document id. `search` runs a search on the anchor.
    pub async fn handle(&self, request: &DocRequest) -> Result<DocResponse> {
        if request.doc == SEARCH_DOC {
            let query = request
                .anchor
                .as_deref()
                .filter(|q| !q.is_empty())
                .ok_or_else(|| Error::Validation("Invalid search query.".into()))?;
            return self.search(query, None).await;
        }
        self.get_document(&request.doc).await
    }

    /// Fetch and assemble the page the viewer shows for `target`.
    pub async fn view(&self, target: &NavTarget) -> Result<PageView> {
        let response = self.handle(&DocRequest::from(target)).await?;
        Ok(build_page(&target.doc, &response.text, &self.page_options))
    }

    fn respond(&self, text: String) -> DocResponse {
        DocResponse {
            text,
            cache_ttl: self.cache_ttl,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> DocsService<MemoryStore> {
        let store = MemoryStore::new()
            .with("intro", "# Welcome\n\nA widget appears here.\n\n## Widgets\n\nMore widget talk.\n")
            .with("index", "# Home\n\nSee [intro](intro.md).\n");
        DocsService::new(store, &Config::default())
    }

    #[tokio::test]
    async fn test_get_document_returns_raw_text_with_ttl() {
        let response = service().get_document("index").await.unwrap();
        assert_eq!(response.text, "# Home\n\nSee [intro](intro.md).\n");
        assert_eq!(response.cache_ttl, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn test_get_document_errors() {
        let svc = service();
        assert!(matches!(svc.get_document("a b").await, Err(Error::Validation(_))));
        assert!(matches!(svc.get_document("missing").await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_handle_routes_search_doc() {
        let svc = service();
        let via_handle = svc.handle(&DocRequest::search("widget")).await.unwrap();
        let direct = svc.search("widget", None).await.unwrap();
        assert_eq!(via_handle, direct);
        assert!(direct.text.starts_with("# Search Results\n\n## 3 results for"));
    }

    #[tokio::test]
    async fn test_handle_search_without_query_is_invalid() {
        let svc = service();
        let request = DocRequest {
            doc: "search".into(),
            anchor: None,
        };
        assert!(matches!(svc.handle(&request).await, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_view_assembles_page() {
        let svc = service();
        let page = svc.view(&NavTarget::parse("index")).await.unwrap();
        assert_eq!(page.window_title, "Documentation");
        assert!(page.html.contains(r##"href="#Docs/intro""##));

        let page = svc.view(&NavTarget::parse("search/widget")).await.unwrap();
        assert_eq!(page.title, "Search Results");
        assert!(page.html.contains(r##"href="#Docs/intro/widgets""##));
    }

    #[tokio::test]
    async fn test_configured_default_limit() {
        let mut config = Config::default();
        config.search.default_limit = 1;
        let svc = DocsService::new(service().store, &config);
        let result = svc.search_result("widget", None).await.unwrap();
        assert_eq!(result.total_count, 1);
        assert!(result.truncated);
    }

    #[tokio::test]
    async fn test_search_with_plain_text_query() {
        let store = MemoryStore::new()
            .with("status", "# Status

Uptime was 100% last month.

Literal a%20b here.
");
        let svc = DocsService::new(store, &Config::default());

        let query = SearchQuery::from_text("100%").unwrap();
        let result = svc.search_with(&query, None).await.unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.query, "100%");

        let query = SearchQuery::from_text("a%20b").unwrap();
        assert_eq!(svc.search_with(&query, None).await.unwrap().total_count, 1);
        assert!(matches!(svc.search_result("100%", None).await, Err(Error::Validation(_))));
    }
}
