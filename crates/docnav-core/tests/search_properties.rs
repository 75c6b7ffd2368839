#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use docnav_core::{
    Config, DocRequest, DocsService, DocumentStore, Error, MemoryStore, Result, SearchEngine,
};

/// Memory store that counts reads.
struct CountingStore {
    inner: MemoryStore,
    reads: AtomicUsize,
}

impl CountingStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn list_ids(&self) -> Result<Vec<String>> {
        self.inner.list_ids().await
    }

    async fn read(&self, id: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read(id).await
    }
}

const INTRO: &str = "# Welcome\n\nA widget appears here.\n\n## Widgets\n\nMore widget talk.\n";

fn many_matches(title: &str, lines: usize) -> String {
    let mut text = format!("# {title}\n");
    for i in 0..lines {
        text.push_str(&format!("widget line {i}\n"));
    }
    text
}

#[tokio::test]
async fn empty_queries_fail_before_any_read() {
    let store = CountingStore::new(MemoryStore::new().with("intro", INTRO));
    let engine = SearchEngine::new(&store);

    for raw in ["   ", "<tag></tag>", "%3Cb%3E%3C%2Fb%3E", "", "%ZZ"] {
        let err = engine.search(raw, 10).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{raw:?} gave {err:?}");
    }
    assert_eq!(store.reads(), 0);
}

#[tokio::test]
async fn intro_document_end_to_end() {
    let store = MemoryStore::new().with("intro", INTRO);
    let result = SearchEngine::new(&store).search("widget", 10).await.unwrap();

    // Both body lines and the "## Widgets" heading line match.
    let body: Vec<_> = result.matches.iter().filter(|m| !m.is_heading_match).collect();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].section_anchor, "");
    assert_eq!(body[1].section_anchor, "widgets");

    assert_eq!(
        result.render_digest(),
        "# Search Results\n\n\
         ## 3 results for &ldquo;widget&rdquo;:\n\
         \n- **[Welcome](intro.md)**\n\
         \t- A widget appears here.\n\
         \n- **[Welcome](intro.md)** → **[Widgets](intro.md#widgets)**\n\
         \t- More widget talk.\n"
    );
}

#[tokio::test]
async fn truncation_stops_inside_third_document() {
    let store = CountingStore::new(
        MemoryStore::new()
            .with("a", many_matches("A", 40))
            .with("b", many_matches("B", 40))
            .with("c", many_matches("C", 40))
            .with("d", many_matches("D", 40)),
    );
    let result = SearchEngine::new(&store).search("widget", 100).await.unwrap();

    assert_eq!(result.total_count, 100);
    assert_eq!(result.matches.len(), 100);
    assert!(result.truncated);

    let from = |doc: &str| result.matches.iter().filter(|m| m.doc_id == doc).count();
    assert_eq!((from("a"), from("b"), from("c"), from("d")), (40, 40, 20, 0));
    assert_eq!(store.reads(), 3);

    let digest = result.render_digest();
    assert!(digest.contains("## 100+ results for &ldquo;widget&rdquo;:"));
    assert!(digest.ends_with("*(Additional matches were chopped.)*"));
}

#[tokio::test]
async fn results_follow_enumeration_then_line_order() {
    let store = MemoryStore::new()
        .with("beta", "# Beta\nwidget one\n\nwidget two\n")
        .with("alpha", "# Alpha\nwidget\n");
    let result = SearchEngine::new(&store).search("Widget", 10).await.unwrap();

    let order: Vec<_> = result
        .matches
        .iter()
        .map(|m| (m.doc_id.as_str(), m.line_number))
        .collect();
    assert_eq!(order, vec![("alpha", 1), ("beta", 1), ("beta", 3)]);
    assert!(!result.truncated);
}

#[tokio::test]
async fn heading_matches_never_produce_previews() {
    let store = MemoryStore::new().with(
        "guide",
        "# Guide\n\n## Rotation\n\n### Rotation schedule\n\nrotation happens nightly\n",
    );
    let result = SearchEngine::new(&store).search("rotation", 10).await.unwrap();
    assert_eq!(result.total_count, 3);

    let digest = result.render_digest();
    assert_eq!(digest.matches("\t- ").count(), 1);
    assert_eq!(digest.matches("\n- **[Guide]").count(), 2);
    assert!(digest.contains("**[Rotation schedule](guide.md#rotation-schedule)**\n\t- rotation happens nightly\n"));
}

#[tokio::test]
async fn encoded_queries_are_decoded() {
    let store = MemoryStore::new().with("marks", "# Marks\n\nDone ✓\n");
    let svc = DocsService::new(store, &Config::default());

    let result = svc.search_result("%E2%9C%93", None).await.unwrap();
    assert_eq!(result.query, "✓");
    assert_eq!(result.total_count, 1);
    assert_eq!(result.matches[0].match_offset, 5);

    assert!(matches!(
        svc.search_result("%ZZ", None).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn search_document_route_matches_direct_search() {
    let svc = DocsService::new(MemoryStore::new().with("intro", INTRO), &Config::default());
    let routed = svc
        .handle(&DocRequest::search("widget"))
        .await
        .unwrap();
    let direct = svc.search("widget", None).await.unwrap();
    assert_eq!(routed.text, direct.text);
}

#[tokio::test]
async fn invalid_document_id_is_rejected_before_read() {
    let store = CountingStore::new(MemoryStore::new().with("intro", INTRO));
    let svc = DocsService::new(store, &Config::default());

    for id in ["../intro", "intro.md", "", "two words"] {
        assert!(matches!(svc.get_document(id).await, Err(Error::Validation(_))), "{id:?}");
    }
    assert_eq!(svc.store().reads(), 0);
}
