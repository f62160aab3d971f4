//! Shared benchmark utilities.
//!
//! Measurements are wall-clock [`Duration`]s read from [`Instant`]. The
//! helpers here turn raw samples into the statistics shown by the runner.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Measurement value type
pub type Measurement = Duration;

/// Read the current instant
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Calculate elapsed measurement
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Time an expression, returning `(Measurement, value)`.
///
/// ```
/// let (elapsed, value) = string_dispatch_bench::measure!(2 + 2);
/// assert_eq!(value, 4);
/// let _ = elapsed;
/// ```
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let value = $body;
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Convert measurement to nanoseconds for display
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Format a measurement with the most readable unit
pub fn format_measurement(m: Measurement) -> String {
    format!("{:?}", m)
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

/// Timing statistics over a set of samples
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub avg: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub std_dev: Duration,
}

/// Compute timing statistics from a list of durations
pub fn compute_stats(times: &[Duration]) -> Stats {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return Stats::default();
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;

    Stats {
        avg,
        median: calculate_median(times),
        min,
        max,
        std_dev: calculate_std_dev(times, avg),
    }
}

/// Seeded Fisher-Yates shuffle, reproducible for a given seed
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
