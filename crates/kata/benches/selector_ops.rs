//! Selector Builder Benchmarks
//!
//! Benchmarks for chain building, grammar rejection, and combination.
//!
//! Run with: `cargo bench --bench selector_ops`

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kata::prelude::*;

fn bench_chain_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_building");

    let depths = vec![1, 2, 4, 8, 16];
    for depth in depths {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bench, &d| {
            bench.iter(|| {
                let mut chain = Builder::new().element("div").unwrap();
                for _ in 1..d {
                    chain = chain.class(black_box("item")).unwrap();
                }
                black_box(chain);
            });
        });
    }

    group.finish();
}

fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection");
    let chain = Builder::new().element("a").unwrap().class("x").unwrap();

    group.bench_function("order_violation", |bench| {
        bench.iter(|| black_box(chain.id(black_box("late")).is_err()));
    });
    group.bench_function("duplicate_singleton", |bench| {
        bench.iter(|| black_box(chain.element(black_box("b")).is_err()));
    });

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let b = Builder::new();
    let left = b.element("ul").unwrap().id("menu").unwrap();
    let right = b
        .element("li")
        .unwrap()
        .class("entry")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();

    c.bench_function("combine_child", |bench| {
        bench.iter(|| black_box(b.combine(&left, Combinator::Child, &right)));
    });
}

criterion_group!(benches, bench_chain_building, bench_rejection, bench_combine);
criterion_main!(benches);
