//! Performance benchmarks for rs-htree.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - The small fixture document used by the integration tests
//! - Synthetic documents of growing size for throughput numbers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_htree::{find_all_elements, indentln, parse, prune, text, walk, Tag};

const SAMPLE_HTML: &str = include_str!("../tests/fixtures/sample.html");

const ARTICLE_BLOCK: &str = r#"
<article class="post">
    <h2>Sample Article Title</h2>
    <p class="byline">By <a href="/authors/jd">John Doe</a></p>
    <p>This is a paragraph with <b>bold</b>, <i>italic</i> &amp; an entity.<br>Next line.</p>
    <table><tr><th>Key</th><td>Value</td></tr><tr><th>Other</th><td>42</td></tr></table>
    <script>var x = 1 < 2;</script>
    <ul><li>One</li><li>Two</li><li>Three</li></ul>
</article>
"#;

fn synthetic_html(blocks: usize) -> String {
    format!("<!DOCTYPE html><html><body>{}</body></html>", ARTICLE_BLOCK.repeat(blocks))
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_sample", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML)));
    });
}

fn bench_sample_operations(c: &mut Criterion) {
    let tree = parse(SAMPLE_HTML);

    c.bench_function("walk_sample", |b| {
        b.iter(|| walk(black_box(tree.root())).count());
    });
    c.bench_function("text_sample", |b| {
        b.iter(|| text(black_box(tree.root())));
    });
    c.bench_function("prune_sample", |b| {
        b.iter(|| prune(black_box(tree.root()), |n| n.has_tag(Tag::Li)));
    });
    c.bench_function("indentln_sample", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            indentln(&mut out, black_box(tree.root()), 0).map(|()| out.len())
        });
    });
}

/// Benchmark with synthetic documents of growing size
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for blocks in [10, 100, 1000] {
        let html = synthetic_html(blocks);
        let tree = parse(&html);
        group.throughput(Throughput::Bytes(html.len() as u64));

        group.bench_with_input(BenchmarkId::new("find_all_td", blocks), &tree, |b, tree| {
            b.iter(|| find_all_elements(tree.root(), |n| n.has_tag(Tag::Td)).count());
        });
        group.bench_with_input(BenchmarkId::new("prune_tables", blocks), &tree, |b, tree| {
            b.iter(|| prune(tree.root(), |n| n.has_tag(Tag::Table)));
        });
        group.bench_with_input(BenchmarkId::new("indentln", blocks), &tree, |b, tree| {
            b.iter(|| {
                let mut out = Vec::with_capacity(html.len() * 2);
                indentln(&mut out, tree.root(), 0).map(|()| out.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_sample_operations, bench_scaling);
criterion_main!(benches);
