//! Implementation variants for string membership dispatch

pub mod hash_dispatch;
pub mod if_else;
pub mod original;

pub use hash_dispatch::{bucket_count, string_hash, switch_hash};
pub use if_else::if_else;
pub use original::switch_string;

use crate::utils::VariantInfo;

/// The fixed key set. Every member hashes to the same 31-polynomial value.
pub const KEYS: [&str; 4] = ["AaAa", "AaBB", "BBAa", "BBBB"];

/// Returned when the input is one of [`KEYS`]
pub const MEMBER: i32 = 1;

/// Returned for everything else
pub const NOT_MEMBER: i32 = -1;

/// Function signature: classifies a string as member (1) or not (-1)
pub type ClassifyFn = fn(&str) -> i32;

/// Returns all available variants. The first one is the baseline.
pub fn get_variants() -> Vec<VariantInfo<ClassifyFn>> {
    vec![
        VariantInfo {
            name: "switch-string",
            description: "Rust match over string literals",
            function: switch_string,
        },
        VariantInfo {
            name: "switch-hash",
            description: "Hash bucket lookup, equality confirmation, discriminant match",
            function: switch_hash,
        },
        VariantInfo {
            name: "if-else",
            description: "Short-circuit chain of equality checks",
            function: if_else,
        },
    ]
}
