//! Manual timing driver.
//!
//! Replays the key set `round` times through each variant, one variant after
//! the other, and reports the elapsed wall-clock milliseconds per phase. No
//! warmup, no repetition: this is a crude relative timing, the statistical
//! runner lives in [`crate::utils::timer`].

use super::code::{get_variants, ClassifyFn, KEYS};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Timing of one variant's phase
#[derive(Clone, Debug)]
pub struct PhaseTiming {
    pub name: &'static str,
    pub elapsed: Duration,
    /// Number of classifier calls made during the phase
    pub calls: u64,
}

/// Result of [`run_rounds`]. `Display` renders the four-line report.
#[derive(Clone, Debug)]
pub struct RoundReport {
    pub round: i32,
    pub phases: Vec<PhaseTiming>,
}

impl RoundReport {
    /// Find a phase by variant name
    pub fn phase(&self, name: &str) -> Option<&PhaseTiming> {
        self.phases.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "round: {}", self.round)?;
        for phase in &self.phases {
            writeln!(f, "{}: {}", phase.name, phase.elapsed.as_millis())?;
        }
        Ok(())
    }
}

fn run_phase(func: ClassifyFn, round: i32) -> u64 {
    let mut calls = 0u64;
    for _ in 0..round.max(0) {
        for key in KEYS {
            black_box(func(black_box(key)));
            calls += 1;
        }
    }
    calls
}

/// Run every variant for `round` rounds, in registration order. A negative
/// `round` runs no passes but is still reported as given.
///
/// A timestamp is taken before the first phase and after each phase; each
/// phase's elapsed time is the difference between consecutive timestamps.
pub fn run_rounds(round: i32) -> RoundReport {
    let variants = get_variants();
    let mut phases = Vec::with_capacity(variants.len());

    let mut mark = Instant::now();
    for variant in &variants {
        let calls = run_phase(variant.function, round);
        let now = Instant::now();

        phases.push(PhaseTiming {
            name: variant.name,
            elapsed: now.duration_since(mark),
            calls,
        });
        mark = now;
    }

    log::debug!("completed {} rounds over {} variants", round, phases.len());

    RoundReport { round, phases }
}
