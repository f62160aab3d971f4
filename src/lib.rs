//! # String-Dispatch-Bench
//!
//! Compares three ways of testing a string against a small fixed key set:
//! a `match` on string literals, a hand-written hash-bucket dispatch, and an
//! if-else chain of equality checks.

pub mod config;
pub mod control_flow;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;
