//! Generic CLI for running registered algorithms with the statistical runner.
//!
//! Usage:
//!   dispatch-bench                  # Run all algorithms
//!   dispatch-bench --list           # List available algorithms
//!   dispatch-bench string_dispatch  # Run specific algorithm
//!   dispatch-bench --help           # Show help

use anyhow::{anyhow, Context, Result};
use std::env;
use string_dispatch_bench::config::HarnessArgs;
use string_dispatch_bench::registry::{build_registry, AlgorithmRunner};
use string_dispatch_bench::tui;
use string_dispatch_bench::utils::{runner, time_seed};

fn main() -> Result<()> {
    env_logger::init();

    let args = HarnessArgs::parse(env::args().skip(1)).context("invalid arguments, see --help")?;
    let registry = build_registry();

    if args.show_help {
        tui::print_help();
        return Ok(());
    }

    if args.show_list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &args.algorithm {
        Some(name) => vec![registry.find(name).with_context(|| {
            format!(
                "algorithm '{}' not found, available: {:?}",
                name,
                registry.list_names()
            )
        })?],
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let workload_seed = args.seed.unwrap_or_else(time_seed);
    let config = args.timing_config();
    log::info!("workload seed {}", workload_seed);

    tui::print_header();

    let mut raw_data = Vec::new();
    for algo in algorithms {
        algo.verify()
            .map_err(|e| anyhow!("algorithm '{}' failed verification: {}", algo.name(), e))?;

        tui::print_algo_info_box(algo);
        let runs = runner::run_algorithm(algo, &args.sizes, &config, workload_seed);
        for run in &runs {
            tui::print_results_table(&run.results, run.size);
        }
        raw_data.extend(runner::collect_raw_data(algo.name(), &runs));
    }

    if let Some(path) = &args.csv_path {
        runner::export_csv(path, &raw_data)
            .with_context(|| format!("failed to export CSV to {}", path.display()))?;
        println!("  Raw data exported to: {}", path.display());
        println!();
    }

    println!("Note: Speedup is relative to the first variant of each algorithm.");
    Ok(())
}
