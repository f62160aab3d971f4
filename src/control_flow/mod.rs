//! Control-flow micro-benchmarks.

pub mod string_dispatch;
