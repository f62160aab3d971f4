//! Tests for string dispatch implementations

use super::bench::{generate_workload, MISS_PROBES};
use super::code::{get_variants, KEYS};

/// Verify all variants agree with the baseline on the key set, the miss
/// probes and a generated workload.
pub fn verify_all() -> Result<(), String> {
    let variants = get_variants();
    let baseline = variants
        .first()
        .ok_or("No baseline variant registered")?
        .function;

    let workload = generate_workload(1024, 0x1234_5678);
    let inputs = KEYS
        .iter()
        .chain(MISS_PROBES.iter())
        .copied()
        .chain(workload.iter().map(String::as_str));

    for input in inputs {
        let expected = baseline(input);
        for variant in variants.iter().skip(1) {
            let actual = (variant.function)(input);
            if actual != expected {
                return Err(format!(
                    "Variant '{}' failed for {:?}: expected {}, got {}",
                    variant.name, input, expected, actual
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control_flow::string_dispatch::code::{
        bucket_count, string_hash, switch_hash, switch_string, MEMBER, NOT_MEMBER,
    };

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_members() {
        for variant in get_variants() {
            for key in KEYS {
                assert_eq!((variant.function)(key), MEMBER, "{}: {:?}", variant.name, key);
            }
        }
    }

    #[test]
    fn test_non_members() {
        let long = "Zq7rX2mB9kLp0sWvYt4uNc8eHd3gFj6aQo1iRl5".repeat(8);
        let misses = ["", "AaAb", "aaaa", "AAAA", "AaA", "AaAaA", " AaAa", long.as_str()];

        for variant in get_variants() {
            for input in misses {
                assert_eq!(
                    (variant.function)(input),
                    NOT_MEMBER,
                    "{}: {:?}",
                    variant.name,
                    input
                );
            }
        }
    }

    #[test]
    fn test_keys_share_one_hash() {
        for key in KEYS {
            assert_eq!(string_hash(key), 2031744, "{:?}", key);
        }
        assert_eq!(bucket_count(), 1);
    }

    #[test]
    fn test_hash_collision_falls_through() {
        // "C#" hashes like "Aa" and "BB": 67 * 31 + 35 == 65 * 31 + 97
        for colliding in ["AaC#", "C#BB", "C#C#"] {
            assert_eq!(string_hash(colliding), string_hash("AaAa"));
            assert_eq!(switch_hash(colliding), NOT_MEMBER, "{:?}", colliding);
            assert_eq!(switch_string(colliding), NOT_MEMBER, "{:?}", colliding);
        }
    }

    #[test]
    fn test_deterministic() {
        for variant in get_variants() {
            for &input in KEYS.iter().chain(MISS_PROBES.iter()) {
                let first = (variant.function)(input);
                for _ in 0..100 {
                    assert_eq!((variant.function)(input), first, "{}", variant.name);
                }
            }
        }
    }

    #[test]
    fn test_non_ascii_input() {
        for variant in get_variants() {
            assert_eq!((variant.function)("ÄaAa"), NOT_MEMBER, "{}", variant.name);
            assert_eq!((variant.function)("BBBB\u{0}"), NOT_MEMBER, "{}", variant.name);
        }
    }
}
