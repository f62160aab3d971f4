//! Runs registered algorithms across input sizes and exports raw data to CSV.

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::{measure_variants, TimingConfig};
use std::io::Write;
use std::path::Path;

/// Raw timing data for a single variant (one CSV row)
#[derive(Clone, Debug)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub median_nanos: u64,
}

/// Results of one algorithm at one input size
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<BenchmarkResult>,
}

/// Measure every variant of `algo` at each of `sizes`.
///
/// The workload for each size is generated from `workload_seed` so repeated
/// runs compare the same inputs.
pub fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    workload_seed: u64,
) -> Vec<SizeResults> {
    sizes
        .iter()
        .map(|&size| {
            log::debug!("running {} at size {}", algo.name(), size);
            let closures = algo.get_variant_closures(size, workload_seed);
            SizeResults {
                size,
                results: measure_variants(closures, config),
            }
        })
        .collect()
}

/// Flatten results into CSV rows
pub fn collect_raw_data(algo_name: &str, runs: &[SizeResults]) -> Vec<RawTimingData> {
    runs.iter()
        .flat_map(|run| {
            run.results.iter().map(move |r| RawTimingData {
                algo_name: algo_name.to_string(),
                variant_name: r.name.clone(),
                input_size: run.size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                median_nanos: r.median_time.as_nanos() as u64,
            })
        })
        .collect()
}

/// Write timing rows as CSV
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,input_size,avg_time_ns,median_time_ns")?;

    for entry in data {
        writeln!(
            out,
            "{},{},{},{},{}",
            entry.algo_name, entry.variant_name, entry.input_size, entry.avg_nanos, entry.median_nanos
        )?;
    }

    out.flush()
}

/// Export timing data to CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(std::io::BufWriter::new(file), data)
}
