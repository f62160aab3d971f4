//! Crude back-to-back timing of the three string dispatch variants.
//!
//! Usage:
//!   switch-string <ROUND>
//!
//! Prints the round count followed by the elapsed milliseconds of each
//! variant, one per line. A missing or non-numeric ROUND is fatal and
//! nothing is printed to stdout. A negative ROUND runs no passes.

use anyhow::{Context, Result};
use std::env;
use string_dispatch_bench::config::parse_round_count;
use string_dispatch_bench::control_flow::string_dispatch::rounds::run_rounds;

fn main() -> Result<()> {
    env_logger::init();

    let arg = env::args().nth(1);
    let round = parse_round_count(arg.as_deref()).context("usage: switch-string <ROUND>")?;

    let report = run_rounds(round);
    print!("{}", report);

    Ok(())
}
