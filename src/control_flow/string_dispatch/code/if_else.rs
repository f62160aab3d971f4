//! Linear chain of equality checks joined with `||`.

use super::{MEMBER, NOT_MEMBER};

/// Compares `key` against each member in order and stops at the first match.
#[inline(never)]
pub fn if_else(key: &str) -> i32 {
    if key == "AaAa" || key == "AaBB" || key == "BBAa" || key == "BBBB" {
        MEMBER
    } else {
        NOT_MEMBER
    }
}
