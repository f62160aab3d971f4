//! Benchmark hooks and workload generation for string dispatch.
//!
//! The `bench_*` functions are the entry points for an external benchmark
//! framework (see `benches/string_dispatch.rs`): each one classifies every key
//! exactly once and throws the results away through `black_box`, so the work
//! cannot be folded at compile time.

use super::code::{if_else, switch_hash, switch_string, ClassifyFn, KEYS};
use rand::distr::{Alphanumeric, SampleString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Non-members covering the interesting paths: empty input, a one-character
/// miss, a case variant, a same-hash collision and a length mismatch.
pub const MISS_PROBES: [&str; 5] = ["", "AaAb", "aaaa", "AaC#", "BBBBB"];

/// One pass of `func` over the key set.
#[inline(always)]
pub fn run_pass(func: ClassifyFn) {
    for key in KEYS {
        black_box(func(black_box(key)));
    }
}

pub fn bench_switch_string() {
    run_pass(switch_string);
}

pub fn bench_switch_hash() {
    run_pass(switch_hash);
}

pub fn bench_if_else() {
    run_pass(if_else);
}

/// Generate `size` probe strings: roughly three in four are keys, the rest
/// are misses from [`MISS_PROBES`] or random alphanumeric strings.
pub fn generate_workload(size: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..size)
        .map(|_| {
            if rng.random_ratio(3, 4) {
                KEYS[rng.random_range(0..KEYS.len())].to_string()
            } else if rng.random_bool(0.5) {
                MISS_PROBES[rng.random_range(0..MISS_PROBES.len())].to_string()
            } else {
                let len = rng.random_range(1..=16);
                Alphanumeric.sample_string(&mut rng, len)
            }
        })
        .collect()
}
