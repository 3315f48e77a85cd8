//! Deterministic polynomial rolling hash for bucket placement.

/// Multiplier of the rolling hash. The accumulator is a fixed-width `u64`
/// and wraps on overflow; placement must be reproducible across runs and
/// platforms, so the hash is a pure function with no per-process seed.
const HASH_MULTIPLIER: u64 = 65599;

/// Map `key` to a bucket index in `[0, bucket_count)`.
///
/// Recomputed on every call; the table never caches hash codes.
pub(crate) fn bucket_index(key: &str, bucket_count: usize) -> usize {
    let mut acc: u64 = 0;
    for &byte in key.as_bytes() {
        acc = acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(byte));
    }
    (acc % bucket_count as u64) as usize
}
