//! Scanner benchmarks for `split_lexer_core`.
//!
//! Measures splitting throughput on comment-heavy source, with merged
//! tokens (the default) and with raw lexemes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use split_lexer_core::{ScanOptions, Scanner};

/// Generate N documented functions with nested and line comments.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "/** Adds {i}. /* nested */ */\n\
                 fn func{i}(x: i32) -> i32 {{ x + {i} }} // \"not a string\"\n\
                 let s{i} = \"/* not a comment */\";"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_throughput(c: &mut Criterion, name: &str, options: ScanOptions) {
    let mut group = c.benchmark_group(name);

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let mut scanner = Scanner::with_options(src, options);
                    while let Some(token) = scanner.advance() {
                        black_box(token);
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_merged(c: &mut Criterion) {
    bench_throughput(c, "split/merged/throughput", ScanOptions::default());
}

fn bench_lexemes(c: &mut Criterion) {
    bench_throughput(c, "split/lexemes/throughput", ScanOptions::lexemes());
}

criterion_group!(benches, bench_merged, bench_lexemes);
criterion_main!(benches);
