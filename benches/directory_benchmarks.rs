//! Performance benchmarks for the directory.
//!
//! These benchmarks measure:
//! - Inserting records (including field validation)
//! - Paging through directories of different sizes

use address_book::{ContactRecord, Directory};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Build a directory with `size` records, each holding one phone.
fn build_directory(size: usize) -> Directory {
    (0..size)
        .map(|i| {
            let mut record =
                ContactRecord::new(format!("Contact {}", i), Some("15-05-1990")).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            record
        })
        .collect()
}

/// Benchmark building directories of increasing size.
fn bench_add_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_records");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| build_directory(black_box(size)));
        });
    }

    group.finish();
}

/// Benchmark a full paged pass over the directory.
fn bench_iterate_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pages");
    let directory = build_directory(10_000);

    for chunk_size in [1, 10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    directory
                        .iterator(black_box(chunk_size))
                        .map(|page| page.len())
                        .sum::<usize>()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the birthday countdown.
fn bench_days_to_birthday(c: &mut Criterion) {
    let record = ContactRecord::new("John", Some("15-05-1423")).unwrap();

    c.bench_function("days_to_birthday", |b| {
        b.iter(|| black_box(&record).days_to_birthday().unwrap());
    });
}

criterion_group!(
    benches,
    bench_add_records,
    bench_iterate_pages,
    bench_days_to_birthday
);
criterion_main!(benches);
