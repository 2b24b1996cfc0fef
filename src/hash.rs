//! Polynomial rolling hash over key bytes, reduced to a bucket index.

const HASH_MULTIPLIER: usize = 65599;

/// Map `key` to a bucket index in `[0, capacity)`.
///
/// The accumulator starts at 0 and folds each byte in order with
/// wrapping arithmetic; the same key hashed against two different
/// capacities generally lands in unrelated buckets.
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let mut acc: usize = 0;
    for &b in key.as_bytes() {
        acc = acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(b as usize);
    }
    acc % capacity
}
