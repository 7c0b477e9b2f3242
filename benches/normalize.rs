use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sumsort::args::Args;

fn benchmark_normalize(c: &mut Criterion) {
    let terms: Vec<String> = (0..1000u32).map(|i| (i % 10).to_string()).collect();
    let input = terms.join("+");

    c.bench_function("normalize_1k_terms", |b| {
        b.iter(|| {
            let out = sumsort_core::normalize(black_box(&input)).unwrap();
            black_box(out);
        })
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["sumsort", "3+2+1"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_normalize, benchmark_cli_parsing);
criterion_main!(benches);
