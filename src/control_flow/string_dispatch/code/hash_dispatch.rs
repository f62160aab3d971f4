//! Manual hash dispatch, the shape a compiler gives a `switch` on strings.
//!
//! Lookup happens in three steps:
//! 1. hash the input and binary-search the (sorted) bucket table, the way a
//!    sparse integer switch is lowered
//! 2. confirm with exact equality against each member of the bucket, recording
//!    a discriminant for the one that matches
//! 3. match on the discriminant
//!
//! The bucket table is built at compile time from [`KEYS`], so a different key
//! set or hash gets as many buckets as it needs.

use super::{KEYS, MEMBER, NOT_MEMBER};

const KEY_COUNT: usize = KEYS.len();

/// Discriminant left in place when nothing in the bucket matched
const NO_MATCH: i8 = -1;

// The discriminant match in `switch_hash` lists every code explicitly.
const _: () = assert!(KEY_COUNT == 4, "update the discriminant arms in switch_hash");

/// 32-bit polynomial string hash: `h = 31 * h + byte`, wrapping.
///
/// Matches the classic platform string hash for ASCII input.
///
/// ```
/// use string_dispatch_bench::control_flow::string_dispatch::code::string_hash;
///
/// assert_eq!(string_hash("AaAa"), 2031744);
/// assert_eq!(string_hash(""), 0);
/// ```
pub const fn string_hash(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let mut hash: i32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(31).wrapping_add(bytes[i] as i32);
        i += 1;
    }
    hash
}

#[derive(Clone, Copy)]
struct Bucket {
    hash: i32,
    /// Indices into `KEYS`, in key order
    members: [u8; KEY_COUNT],
    len: usize,
}

impl Bucket {
    const EMPTY: Bucket = Bucket {
        hash: 0,
        members: [0; KEY_COUNT],
        len: 0,
    };

    fn members(&self) -> &[u8] {
        &self.members[..self.len]
    }
}

struct BucketTable {
    buckets: [Bucket; KEY_COUNT],
    len: usize,
}

impl BucketTable {
    fn buckets(&self) -> &[Bucket] {
        &self.buckets[..self.len]
    }
}

/// Groups `KEYS` by hash, then sorts the buckets by hash value.
const fn build_table() -> BucketTable {
    let mut buckets = [Bucket::EMPTY; KEY_COUNT];
    let mut len = 0;

    let mut k = 0;
    while k < KEY_COUNT {
        let hash = string_hash(KEYS[k]);

        let mut b = 0;
        while b < len && buckets[b].hash != hash {
            b += 1;
        }
        if b == len {
            buckets[len].hash = hash;
            len += 1;
        }

        let slot = buckets[b].len;
        buckets[b].members[slot] = k as u8;
        buckets[b].len += 1;
        k += 1;
    }

    // Insertion sort, at most KEY_COUNT entries
    let mut i = 1;
    while i < len {
        let mut j = i;
        while j > 0 && buckets[j - 1].hash > buckets[j].hash {
            let tmp = buckets[j];
            buckets[j] = buckets[j - 1];
            buckets[j - 1] = tmp;
            j -= 1;
        }
        i += 1;
    }

    BucketTable { buckets, len }
}

static TABLE: BucketTable = build_table();

/// Number of distinct hash buckets the key set occupies.
pub fn bucket_count() -> usize {
    TABLE.len
}

/// Hash-then-verify membership test.
///
/// An input that lands in a bucket without equalling any of its members keeps
/// the `NO_MATCH` discriminant and falls through to [`NOT_MEMBER`].
#[inline(never)]
pub fn switch_hash(key: &str) -> i32 {
    let mut discriminant = NO_MATCH;

    let buckets = TABLE.buckets();
    if let Ok(idx) = buckets.binary_search_by_key(&string_hash(key), |b| b.hash) {
        // Later keys are tested first
        for &member in buckets[idx].members().iter().rev() {
            if key == KEYS[member as usize] {
                discriminant = member as i8;
                break;
            }
        }
    }

    match discriminant {
        0 | 1 | 2 | 3 => MEMBER,
        _ => NOT_MEMBER,
    }
}
