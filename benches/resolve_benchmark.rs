//! Benchmarks for response decoding and version resolution.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eol_lookup::{resolve, ReleaseFeed};
use std::fmt::Write;
use std::hint::black_box;

/// A v1-shaped body with `count` releases named `N.0` in descending order.
fn v1_body(count: usize) -> String {
    let mut releases = String::new();
    for i in (0..count).rev() {
        if !releases.is_empty() {
            releases.push(',');
        }
        let _ = write!(
            releases,
            r#"{{"name":"{i}.0","label":"{i}.0 LTS","eolFrom":"2030-01-01"}}"#
        );
    }
    format!(r#"{{"result":{{"label":"Bench","category":"app","releases":[{releases}]}}}}"#)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for count in [10, 100, 1000] {
        let body = v1_body(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| ReleaseFeed::parse(black_box(body)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let feed = ReleaseFeed::parse(&v1_body(1000)).unwrap_or_else(|e| panic!("{e}"));
    let releases = feed.releases();

    let mut group = c.benchmark_group("resolve");
    group.bench_function("name_exact_first", |b| {
        b.iter(|| resolve(black_box(releases), black_box("999.0")));
    });
    group.bench_function("name_exact_last", |b| {
        b.iter(|| resolve(black_box(releases), black_box("0.0")));
    });
    group.bench_function("name_prefix", |b| {
        b.iter(|| resolve(black_box(releases), black_box("0.")));
    });
    group.bench_function("not_found", |b| {
        b.iter(|| resolve(black_box(releases), black_box("nope")));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_resolve);
criterion_main!(benches);
