#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use jsonutf8::{
    Utf8Error, count_chars, count_chars_fast, decode, encode, escape_to_utf8, is_noncharacter,
    resync, validate,
};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Sequences sitting right on the edges the validator cares about.
static EDGE_TABLE: &[&[u8]] = &[
    b"\x00",
    b"\x7F",
    b"\xC0\x80",
    b"\xC2\x80",
    b"\xDF\xBF",
    b"\xE0\x9F\xBF",
    b"\xE0\xA0\x80",
    b"\xED\x9F\xBF",
    b"\xED\xA0\x80",
    b"\xEF\xB7\x8F",
    b"\xEF\xB7\x90",
    b"\xEF\xB7\xAF",
    b"\xEF\xBF\xBD",
    b"\xEF\xBF\xBE",
    b"\xF0\x8F\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF0\x9F\xBF\xBE",
    b"\xF4\x8F\xBF\xBD",
    b"\xF4\x90\x80\x80",
    b"\xF5\x80\x80\x80",
    b"\xFE",
    b"\xFF",
    b"\\u",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || seed % 4 == 0 {
        let mut written = 0;
        while written < max_size {
            let limit = max_size - written;
            let n = if with_rng(|rng| rng.random_bool(0.3)) {
                append_edge(&mut data[written..], limit)
            } else {
                append_scalar(&mut data[written..], limit)
            };
            if n == 0 || with_rng(|rng| rng.random_bool(0.05)) {
                written += n;
                break;
            }
            written += n;
        }
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one entry of `EDGE_TABLE`, truncated to `limit`.
fn append_edge(buf: &mut [u8], limit: usize) -> usize {
    let edge = with_rng(|rng| EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())]);
    let len = edge.len().min(limit);
    buf[..len].copy_from_slice(&edge[..len]);
    len
}

/// Append one encodable code point, or nothing if it would not fit.
fn append_scalar(buf: &mut [u8], limit: usize) -> usize {
    let value = with_rng(|rng| rng.random_range(0..=0x10_FFFF));
    let mut seq = [0u8; 4];
    match encode(value, &mut seq) {
        Ok(n) if n <= limit => {
            buf[..n].copy_from_slice(&seq[..n]);
            n
        }
        _ => 0,
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// An escape-text probe carved from the input.
#[derive(Debug, Arbitrary)]
struct EscapeProbe<'a> {
    text: &'a [u8],
}

fn codec(data: &[u8]) {
    let v = validate(data);
    assert!(v.bytes_consumed <= data.len());

    // The validator accepts exactly what the standard library accepts,
    // minus zero bytes and noncharacters.
    let expected = std::str::from_utf8(data)
        .ok()
        .filter(|s| s.chars().all(|c| c != '\0' && !is_noncharacter(u32::from(c))));
    match expected {
        Some(s) => {
            let n = s.chars().count();
            assert!(v.is_ok(), "{data:X?}: {:?}", v.status);
            assert_eq!(v.code_points_seen, n);
            assert_eq!(count_chars(data), Ok(n));
            assert_eq!(count_chars_fast(data), Ok(n));
        }
        None => assert!(!v.is_ok(), "{data:X?} accepted"),
    }

    // Walking with the checked decoder stops exactly where validation does.
    let mut pos = 0;
    while pos < v.bytes_consumed {
        match decode(&data[pos..]) {
            Ok((_, len)) => pos += len,
            Err(_) => break,
        }
    }
    if v.is_ok() {
        assert_eq!(pos, data.len());
    }

    for i in 0..data.len() {
        if let Ok(skip) = resync(&data[i..]) {
            assert!(skip <= 3 && i + skip <= data.len());
        }
    }

    let mut u = Unstructured::new(data);
    if let Ok(probe) = EscapeProbe::arbitrary(&mut u) {
        let mut dst = [0u8; 4];
        match escape_to_utf8(probe.text, &mut dst) {
            Ok(d) => assert!(d.consumed == 6 || d.consumed == 12),
            Err(e) => assert_ne!(e, Utf8Error::BadLeadingByte),
        }
    }
}

fuzz_target!(|data: &[u8]| codec(data));
