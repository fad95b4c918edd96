//! Criterion benchmarks for Loupe.
//!
//! Covers the hot paths of query execution:
//! - Regex compilation into both engines
//! - Regexp matching over memory and FST segments
//! - Negation and conjunction-with-exclusion over several segments

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use loupe::prelude::*;

/// Generate segments of `per_segment` documents each.
fn generate_segments(segments: usize, per_segment: usize) -> Vec<MemSegment> {
    let words = [
        "search", "engine", "index", "query", "document", "field", "term", "boolean",
        "negation", "segment", "regex", "automaton", "posting", "cursor", "union",
    ];

    (0..segments)
        .map(|s| {
            let base = (s * per_segment) as DocId;
            let mut builder = MemSegment::builder(base);
            for i in 0..per_segment {
                let n = s * per_segment + i;
                let doc = Document::builder()
                    .add_field("word", words[n % words.len()])
                    .add_field("bucket", format!("b{}", n % 97))
                    .build();
                builder.insert(doc).unwrap();
            }
            builder.build()
        })
        .collect()
}

fn mem_readers(segments: &[MemSegment]) -> Vec<Arc<dyn Reader>> {
    segments
        .iter()
        .map(|s| Arc::new(s.clone()) as Arc<dyn Reader>)
        .collect()
}

fn fst_readers(segments: &[MemSegment]) -> Vec<Arc<dyn Reader>> {
    segments
        .iter()
        .map(|s| Arc::new(FstSegment::from_mem(s).unwrap()) as Arc<dyn Reader>)
        .collect()
}

fn count(query: &Query, readers: &[Arc<dyn Reader>]) -> usize {
    let mut searcher = query.searcher(readers).unwrap();
    collect_docs(&mut searcher).unwrap().len()
}

/// Benchmark compiling patterns into both engines.
fn bench_regex_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("regex_compile");

    for pattern in ["^seg.*", "(search|engine|index)", "b[0-9]{1,2}"] {
        group.bench_function(pattern, |b| {
            b.iter(|| compile_regex(black_box(pattern.as_bytes())))
        });
    }

    group.finish();
}

/// Benchmark regexp queries against both segment kinds.
fn bench_regexp_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("regexp_search");
    let segments = generate_segments(4, 5_000);
    let mem = mem_readers(&segments);
    let fst = fst_readers(&segments);
    let query = Query::regexp("bucket", "b1[0-9]").unwrap();

    group.throughput(Throughput::Elements(20_000));
    group.bench_function("memory", |b| b.iter(|| count(black_box(&query), &mem)));
    group.bench_function("fst", |b| b.iter(|| count(black_box(&query), &fst)));

    group.finish();
}

/// Benchmark complement computation.
fn bench_negation(c: &mut Criterion) {
    let mut group = c.benchmark_group("negation");
    let segments = generate_segments(4, 5_000);
    let readers = mem_readers(&segments);

    let negation = Query::negation(Query::term("word", "query"));
    let excluded = Query::conjunction(vec![
        Query::term("word", "segment"),
        Query::negation(Query::term("bucket", "b3")),
    ]);

    group.throughput(Throughput::Elements(20_000));
    group.bench_function("negation_over_universe", |b| {
        b.iter(|| count(black_box(&negation), &readers))
    });
    group.bench_function("conjunction_with_exclusion", |b| {
        b.iter(|| count(black_box(&excluded), &readers))
    });

    group.finish();
}

criterion_group!(benches, bench_regex_compile, bench_regexp_search, bench_negation);
criterion_main!(benches);
