// Criterion benchmarks for tahlil-parser.
//
// Uses the bundled dictionary and grammar, so nothing has to be set up.
//
// Run:
//   cargo bench -p tahlil-parser

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use tahlil_lexicon::{LexiconOptions, bundled_root_map};
use tahlil_parser::graph::turkish;
use tahlil_parser::{
    CachingParser, ContextlessParser, FormGraph, MorphologicParser, ParserOptions, parse_batch,
};

const WORDS: &[&str] = &[
    "kapıya", "armudunu", "kitapçı", "evlerimizden", "geliyor", "gelmez", "arıyor", "diyor",
    "bana", "onunla", "3'ü", "Ankara'ya", "güzellik", "arabasız", "çocuklar", "okudum",
    "yazmalı", "koşarak", "öğretmendi", "renginden", "xyzzy",
];

fn bundled() -> ContextlessParser {
    ContextlessParser::bundled(&LexiconOptions::default(), ParserOptions::default())
        .expect("bundled parser")
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    c.bench_function("grammar", |b| {
        b.iter(|| black_box(turkish::grammar().unwrap()))
    });

    let graph = turkish::grammar().expect("grammar");
    c.bench_function("form_graph", |b| {
        b.iter(|| black_box(FormGraph::build(&graph)))
    });

    c.bench_function("parser", |b| {
        b.iter(|| {
            let roots = bundled_root_map(&LexiconOptions::default()).unwrap();
            black_box(ContextlessParser::new(Arc::new(roots), ParserOptions::default()).unwrap())
        })
    });
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Every word of the list, one at a time.
fn bench_parse_words(c: &mut Criterion) {
    let parser = bundled();
    c.bench_function("parse_words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(parser.parse(black_box(word)).unwrap());
            }
        })
    });
}

fn bench_parse_cached(c: &mut Criterion) {
    let parser = CachingParser::new(bundled());
    c.bench_function("parse_words_cached", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(parser.parse(black_box(word)).unwrap());
            }
        })
    });
}

fn bench_parse_batch(c: &mut Criterion) {
    let parser = bundled();
    let words: Vec<&str> = WORDS
        .iter()
        .copied()
        .cycle()
        .take(WORDS.len() * 20)
        .collect();
    c.bench_function("parse_batch", |b| {
        b.iter(|| black_box(parse_batch(&parser, &words)))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_parse_words,
    bench_parse_cached,
    bench_parse_batch
);
criterion_main!(benches);
