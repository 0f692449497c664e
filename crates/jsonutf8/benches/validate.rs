//! Benchmark – `jsonutf8` validation, counting and decoding
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use jsonutf8::{count_chars, count_chars_fast, decode, decode_unchecked, validate};

/// Produce a *deterministic* text of exactly `target_len` bytes. `width`
/// selects the sequence length most characters use, so the scenarios
/// exercise the one- to four-byte paths of the validator separately.
fn make_payload(target_len: usize, width: usize) -> Vec<u8> {
    let unit = match width {
        1 => "a",
        2 => "\u{e9}",
        3 => "\u{20ac}",
        _ => "\u{1f980}",
    };
    let mut s = String::with_capacity(target_len);
    while s.len() + unit.len() <= target_len {
        s.push_str(unit);
    }
    // Pad with ASCII so every width produces the same number of bytes.
    s.extend(std::iter::repeat_n('a', target_len - s.len()));
    debug_assert_eq!(s.len(), target_len);
    s.into_bytes()
}

/// Walk `payload` one sequence at a time and return the number of code
/// points, so Criterion has a result to black-box.
fn walk(payload: &[u8], checked: bool) -> usize {
    let mut rest = payload;
    let mut n = 0usize;
    while !rest.is_empty() {
        let step = if checked {
            decode(rest)
        } else {
            decode_unchecked(rest)
        };
        let (_, len) = step.expect("payload is valid UTF-8");
        rest = &rest[len..];
        n += 1;
    }
    n
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for &width in &[1usize, 2, 3, 4] {
        let payload = make_payload(64 * 1024, width);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("jsonutf8", width), &payload, |b, p| {
            b.iter(|| black_box(validate(black_box(p))));
        });
        group.bench_with_input(BenchmarkId::new("core_str", width), &payload, |b, p| {
            b.iter(|| black_box(std::str::from_utf8(black_box(p)).is_ok()));
        });
    }

    group.finish();
}

fn bench_count_and_decode(c: &mut Criterion) {
    let payload = make_payload(64 * 1024, 3);
    let mut group = c.benchmark_group("count_and_decode");
    group.throughput(Throughput::Bytes(payload.len() as u64));

    group.bench_function("count_chars", |b| {
        b.iter(|| black_box(count_chars(black_box(&payload))));
    });
    group.bench_function("count_chars_fast", |b| {
        b.iter(|| black_box(count_chars_fast(black_box(&payload))));
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(walk(black_box(&payload), true)));
    });
    group.bench_function("decode_unchecked", |b| {
        b.iter(|| black_box(walk(black_box(&payload), false)));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2));
    targets = bench_validate, bench_count_and_decode
}
criterion_main!(benches);
