//! Unified timing system for micro-benchmarks.
//!
//! - Optional CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias
//! - Raw samples reduced to average / median / min / max / std dev

use std::hint::black_box;
use std::time::Duration;

use super::bench::{compute_stats, shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::{core_count, CpuPinGuard};

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements (minimal overhead)
    Global,
    /// Pin/unpin around each execution
    #[default]
    PerExecution,
    /// Leave scheduling to the OS
    Disabled,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the execution schedule; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one timed pass - returns (measurement, optional result value).
    /// Timing happens inside the closure to keep the boxed call out of it.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Precise average in nanoseconds
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of measured runs
    pub iterations: usize,
    /// Result of the last run, compared across variants for sanity
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// Warms up every variant, then executes a shuffled schedule of
/// `(variant, sample)` tasks so no variant systematically runs first or last.
/// Results come back in the order the variants were given.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, config.seed.unwrap_or_else(time_seed));

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(pin_or_warn);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    log::debug!(
        "measured {} variants x {} runs",
        variants.len(),
        samples
    );

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            compute_variant_result(variant.name, variant.description, &times, result_sample)
        })
        .collect()
}

fn pin_or_warn() -> CpuPinGuard {
    let guard = CpuPinGuard::new();
    match (guard.core_id(), core_count()) {
        (Some(core), Some(cores)) => log::debug!("pinned to core {} of {}", core, cores),
        (Some(core), None) => log::debug!("pinned to core {}", core),
        (None, _) => log::warn!("could not pin thread to a CPU core, timings may be noisy"),
    }
    guard
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    let stats = compute_stats(times);
    let avg_nanos_f64 = if times.is_empty() {
        0.0
    } else {
        times.iter().map(|t| to_nanos(*t) as f64).sum::<f64>() / times.len() as f64
    };

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: stats.avg,
        avg_nanos_f64,
        median_time: stats.median,
        min_time: stats.min,
        max_time: stats.max,
        std_dev: stats.std_dev,
        iterations: times.len(),
        result_sample,
    }
}
