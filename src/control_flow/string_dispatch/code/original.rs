//! Original Rust implementation using a match on string literals
//!
//! rustc lowers this to length checks followed by `memcmp`-style comparisons;
//! no hashing is involved.

use super::{MEMBER, NOT_MEMBER};

/// Returns [`MEMBER`] when `key` is one of the four keys, [`NOT_MEMBER`] otherwise.
///
/// # Example
/// ```
/// use string_dispatch_bench::control_flow::string_dispatch::code::switch_string;
///
/// assert_eq!(switch_string("BBAa"), 1);
/// assert_eq!(switch_string("BBAb"), -1);
/// ```
#[inline(never)]
pub fn switch_string(key: &str) -> i32 {
    match key {
        "AaAa" | "AaBB" | "BBAa" | "BBBB" => MEMBER,
        _ => NOT_MEMBER,
    }
}
