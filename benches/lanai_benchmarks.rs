//! Lanai Benchmarks
//!
//! This module contains benchmarks for the Lanai Trie.
//! The benchmarks are implemented using the Criterion framework, which provides
//! statistical analysis and performance regression detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanai_lib::data_structures::lanai_trie::LanaiTrie;
use std::time::Duration;

/// Deterministic word list with plenty of shared prefixes.
fn generate_words(count: usize) -> Vec<String> {
    const SYLLABLES: [&str; 8] = ["ka", "la", "ma", "na", "ho", "ku", "le", "wa"];

    (0..count)
        .map(|i| {
            let mut word = String::new();
            let mut n = i;
            loop {
                word.push_str(SYLLABLES[n % SYLLABLES.len()]);
                n /= SYLLABLES.len();
                if n == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}

fn build_trie(words: &[String]) -> LanaiTrie {
    let mut trie = LanaiTrie::new();
    for word in words {
        let _ = trie.add_word(word);
    }
    trie
}

/// Benchmark insertion
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie_insert");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1_000, 10_000].iter() {
        let words = generate_words(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("add_word", size), &words, |b, words| {
            b.iter(|| {
                let trie = build_trie(black_box(words));
                black_box(trie.len())
            });
        });
    }

    group.finish();
}

/// Benchmark membership queries
fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie_contains");
    group.measurement_time(Duration::from_secs(2));

    let words = generate_words(10_000);
    let trie = build_trie(&words);

    group.bench_function("hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % words.len();
            black_box(trie.contains_word(black_box(&words[i])))
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| black_box(trie.contains_word(black_box("kalamazoo"))));
    });

    group.finish();
}

/// Benchmark prefix queries at several result limits
fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie_prefix");
    group.measurement_time(Duration::from_secs(2));

    let words = generate_words(10_000);
    let trie = build_trie(&words);

    for limit in [1, 10, 100, 1_000].iter() {
        group.bench_with_input(
            BenchmarkId::new("words_matching_prefix", limit),
            limit,
            |b, &limit| {
                b.iter(|| black_box(trie.words_matching_prefix(black_box("ka"), limit).len()));
            },
        );
    }

    group.bench_function("fill_prefix_matches", |b| {
        b.iter(|| {
            let empty: &[u8] = &[];
            let mut out = [empty; 16];
            black_box(trie.fill_prefix_matches(black_box("la"), &mut out))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_prefix);
criterion_main!(benches);
