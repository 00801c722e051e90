//! Polynomial string hashing and the bucket-count growth schedule.

use core::hash::Hasher;

/// Bucket counts used by the hash store: primes close to powers of two.
/// Growth walks this schedule left to right and stops at the last entry.
pub(crate) const BUCKET_COUNTS: [usize; 8] =
    [509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

const HASH_MULTIPLIER: u64 = 65599;

/// Polynomial accumulator over a byte stream: `h = h * 65599 + byte`.
///
/// The multiplier and byte order are fixed. Bucket placement must be
/// reproducible for the same key across lookups and rehashes within one
/// table, so the accumulator carries no per-instance or per-process state.
/// Arithmetic is wrapping 64-bit.
#[derive(Debug, Default, Copy, Clone)]
pub struct PolyHasher {
    hash: u64,
}

impl PolyHasher {
    /// Create a hasher with the accumulator at zero.
    pub fn new() -> Self {
        Self { hash: 0 }
    }
}

impl Hasher for PolyHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = self
                .hash
                .wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(u64::from(b));
        }
    }
}

/// Bucket index for `key` in a table with `bucket_count` buckets.
pub(crate) fn bucket_index(key: &str, bucket_count: usize) -> usize {
    let mut hasher = PolyHasher::new();
    hasher.write(key.as_bytes());
    (hasher.finish() % bucket_count as u64) as usize
}
