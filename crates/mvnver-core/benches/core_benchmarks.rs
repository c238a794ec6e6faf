//! Benchmarks for version parsing, ordering and version-set queries.
//!
//! Performance targets:
//! - Parsing a version literal: < 1µs
//! - Building a set of 500 versions: < 1ms
//! - Segment-scoped newest-update lookup on 500 versions: < 200µs

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mvnver_core::{
    ArtifactCoordinate, ComparatorKind, Segment, Version, VersionCache, VersionRange, VersionSet,
};
use std::hint::black_box;

const LITERALS: &[&str] = &[
    "1.0",
    "1.0.0",
    "2.17.1",
    "3.0.0-alpha-1",
    "3.0.0-beta2",
    "3.0.0-RC1",
    "1.1-SNAPSHOT",
    "1.0.0-20240101.120000-3",
    "5.3.39.RELEASE",
    "1.1.0-2",
];

/// Release train with qualifiers and snapshots mixed in.
fn generate_versions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let major = i / 100;
            let minor = (i / 10) % 10;
            let patch = i % 10;
            match i % 7 {
                0 => format!("{major}.{minor}.{patch}-SNAPSHOT"),
                1 => format!("{major}.{minor}.{patch}-rc{patch}"),
                2 => format!("{major}.{minor}.{patch}-{i}"),
                _ => format!("{major}.{minor}.{patch}"),
            }
        })
        .collect()
}

fn build_set(versions: &[String], kind: ComparatorKind) -> VersionSet {
    let artifact = ArtifactCoordinate::new("org.example", "bench")
        .with_version("2.5.0")
        .unwrap();
    VersionSet::new(artifact, versions, kind.comparator(), &VersionCache::new())
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_parse");

    for literal in LITERALS {
        group.bench_with_input(BenchmarkId::from_parameter(literal), literal, |b, literal| {
            b.iter(|| Version::parse(black_box(literal)));
        });
    }

    group.bench_function("range_union", |b| {
        b.iter(|| VersionRange::parse(black_box("(,1.0],[1.2,2.0),[3.0,)")));
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparator");
    let versions: Vec<Version> = LITERALS.iter().map(|l| Version::parse(l)).collect();

    for kind in [ComparatorKind::Maven, ComparatorKind::Mercury] {
        let comparator = kind.comparator();
        group.bench_function(BenchmarkId::new("sort", kind), |b| {
            b.iter(|| {
                let mut sorted = versions.clone();
                sorted.sort_by(|a, b| comparator.compare(a, b));
                black_box(sorted)
            });
        });
    }

    group.finish();
}

fn bench_version_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_set");

    for count in [50, 500] {
        let versions = generate_versions(count);

        group.bench_with_input(BenchmarkId::new("build", count), &versions, |b, versions| {
            b.iter(|| build_set(black_box(versions), ComparatorKind::Maven));
        });

        let set = build_set(&versions, ComparatorKind::Maven);
        group.bench_with_input(BenchmarkId::new("newest_update_minor", count), &set, |b, set| {
            b.iter(|| set.newest_update(black_box(Some(Segment::Minor)), false));
        });
        group.bench_with_input(BenchmarkId::new("update_summary", count), &set, |b, set| {
            b.iter(|| set.update_summary(black_box(false)));
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let versions = generate_versions(500);
    let cache = VersionCache::new();

    c.bench_function("cache_warm_lookup", |b| {
        for literal in &versions {
            cache.get(literal);
        }
        b.iter(|| {
            for literal in &versions {
                black_box(cache.get(literal));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_compare,
    bench_version_set,
    bench_cache
);
criterion_main!(benches);
