//! The fixed ascending capacity sequence the hash table steps through.

/// Bucket-array capacities, smallest first. The table starts at the first
/// entry and advances one step per resize; past the last entry it stops
/// growing and chains lengthen instead.
pub(crate) const CAPACITY_SEQUENCE: [usize; 8] =
    [509, 1021, 2039, 4093, 8191, 16381, 32749, 65521];

/// Capacity one step beyond `sequence_index`, or `None` at the ceiling.
pub(crate) fn next_capacity(sequence_index: usize) -> Option<usize> {
    CAPACITY_SEQUENCE.get(sequence_index + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::{next_capacity, CAPACITY_SEQUENCE};

    #[test]
    fn sequence_is_strictly_ascending() {
        for w in CAPACITY_SEQUENCE.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn stepping_walks_the_sequence_and_stops() {
        for i in 0..CAPACITY_SEQUENCE.len() - 1 {
            assert_eq!(next_capacity(i), Some(CAPACITY_SEQUENCE[i + 1]));
        }
        assert_eq!(next_capacity(CAPACITY_SEQUENCE.len() - 1), None);
    }

    #[test]
    fn first_capacity_is_509() {
        assert_eq!(CAPACITY_SEQUENCE[0], 509);
    }
}
