//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the `dispatch-bench` CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Speedup of `result` relative to `baseline` (>1 means faster)
fn speedup(baseline: &BenchmarkResult, result: &BenchmarkResult) -> f64 {
    if result.avg_nanos_f64 > 0.0 {
        baseline.avg_nanos_f64 / result.avg_nanos_f64
    } else {
        0.0
    }
}

/// Coefficient of variation of a result
fn coefficient_of_variation(result: &BenchmarkResult) -> f64 {
    if result.avg_nanos_f64 > 0.0 {
        result.std_dev.as_nanos() as f64 / result.avg_nanos_f64
    } else {
        0.0
    }
}

/// Print results table for a single size. The first row is the baseline.
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    // Columns: 12+12+12+12+9+9 = 66 chars + 6 spaces + 2 indent
    let fixed_width = 74;
    let variant_col_width = get_term_width().saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 66 + 6;

    println!("  Size: {} ({} runs)", size, baseline.iterations);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>9} {:>9}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Max",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let mismatch = if result.result_sample != baseline.result_sample {
            " (!)"
        } else {
            ""
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}%{}",
            truncate(&result.name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.median_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup(baseline, result),
            coefficient_of_variation(result) * 100.0,
            mismatch,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " String Dispatch Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: dispatch-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available algorithms");
    println!("  --help, -h     Show this help message");
    println!("  --sizes SIZES  Comma-separated workload sizes (default: 64,256,1024,4096)");
    println!("  --runs N       Number of measured runs per variant (default: 30)");
    println!("  --warmup N     Number of warmup runs per variant (default: 10)");
    println!("  --seed N       Seed for workload and schedule (default: time-based)");
    println!("  --csv PATH     Export per-variant averages to CSV");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM      Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  dispatch-bench                      # Run all algorithms");
    println!("  dispatch-bench string_dispatch      # Run only string_dispatch");
    println!("  dispatch-bench --sizes 128,512      # Custom sizes");
    println!("  dispatch-bench --seed 12345         # Reproducible run");
    println!("  dispatch-bench --csv data.csv       # Export timings to CSV");
}

/// Render the algorithm listing, grouped by category
fn format_algorithm_list(registry: &AlgorithmRegistry) -> String {
    let mut out = String::from("Available algorithms:\n");
    for category in registry.categories() {
        out.push_str(&format!("\n[{}]\n", category));
        for algo in registry.by_category(category) {
            out.push_str(&format!("  {:<20} - {}\n", algo.name(), algo.description()));
        }
    }
    out
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    print!("{}", format_algorithm_list(registry));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str, avg_ns: u64) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            description: String::new(),
            avg_time: Duration::from_nanos(avg_ns),
            avg_nanos_f64: avg_ns as f64,
            median_time: Duration::from_nanos(avg_ns),
            min_time: Duration::from_nanos(avg_ns),
            max_time: Duration::from_nanos(avg_ns),
            std_dev: Duration::from_nanos(avg_ns / 10),
            iterations: 30,
            result_sample: Some(1.0),
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("switch-hash", 20), "switch-hash");
        assert_eq!(truncate("switch-string", 8), "switc...");
        assert_eq!(truncate("switch-string", 8).chars().count(), 8);
        assert_eq!(truncate("ÄÖÜäöüßé-x", 6), "ÄÖÜ...");
    }

    #[test]
    fn test_algorithm_list_grouped() {
        let listing = format_algorithm_list(&crate::registry::build_registry());
        let lines: Vec<_> = listing.lines().collect();

        assert_eq!(lines[0], "Available algorithms:");
        let header = lines.iter().position(|l| *l == "[control_flow]").expect("category header");
        assert!(lines[header + 1].trim_start().starts_with("string_dispatch"));
    }

    #[test]
    fn test_speedup_and_cv() {
        let base = result("switch-string", 200);
        let fast = result("switch-hash", 100);

        assert!((speedup(&base, &fast) - 2.0).abs() < 1e-9);
        assert!((coefficient_of_variation(&fast) - 0.1).abs() < 1e-9);
        assert_eq!(speedup(&base, &result("zero", 0)), 0.0);
    }
}
