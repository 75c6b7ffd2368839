//! Benchmarks for search and page assembly

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docnav_core::{MemoryStore, PageOptions, SearchEngine, build_page};

// Create a realistic collection of documents
fn create_store(docs: usize, sections: usize) -> (MemoryStore, usize) {
    let base_content = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                       Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

    let mut store = MemoryStore::new();
    let mut total_bytes = 0;
    for d in 0..docs {
        let mut text = format!("# Document {d}\n\nIntro paragraph. {base_content}\n");
        for s in 0..sections {
            text.push_str(&format!("\n## Section {s}\n\n{base_content}\n"));
            if s % 4 == 0 {
                text.push_str("\n```rust\nlet rotation = key.rotate();\n```\n");
            }
            if (d + s) % 7 == 0 {
                text.push_str("Remember to schedule key rotation.\n");
            }
        }
        total_bytes += text.len();
        store.insert(format!("doc_{d:04}"), text);
    }
    (store, total_bytes)
}

fn bench_search_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let mut group = c.benchmark_group("search_scaling");

    for &docs in &[10, 50, 200] {
        let (store, total_bytes) = create_store(docs, 20);
        group.throughput(Throughput::Bytes(total_bytes as u64));

        group.bench_with_input(BenchmarkId::new("rare_term", docs), &store, |b, store| {
            b.to_async(&rt).iter(|| async move {
                let engine = SearchEngine::new(store);
                black_box(engine.search("schedule key", 100).await.expect("search"))
            });
        });

        group.bench_with_input(BenchmarkId::new("early_abort", docs), &store, |b, store| {
            b.to_async(&rt).iter(|| async move {
                let engine = SearchEngine::new(store);
                black_box(engine.search("lorem", 100).await.expect("search"))
            });
        });
    }

    group.finish();
}

fn bench_digest(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let (store, _) = create_store(50, 20);
    let result = rt
        .block_on(SearchEngine::new(&store).search("rotation", 100))
        .expect("search");

    c.bench_function("render_digest", |b| {
        b.iter(|| black_box(result.render_digest()));
    });
}

fn bench_page_assembly(c: &mut Criterion) {
    let mut text = String::from("# Guide\n\n");
    for s in 0..40 {
        text.push_str(&format!(
            "## Section {s}\n\nSee [other](other.md#section-{s}) and [here](#section-{s}).\n\n"
        ));
    }
    let options = PageOptions::default();

    c.bench_function("build_page", |b| {
        b.iter(|| black_box(build_page("guide", black_box(&text), &options)));
    });
}

criterion_group!(benches, bench_search_scaling, bench_digest, bench_page_assembly);
criterion_main!(benches);
