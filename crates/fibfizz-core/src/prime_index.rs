//! Known Fibonacci-prime indices.
//!
//! Indices n for which F(n) is prime or probably prime, taken from
//! OEIS A001605. Membership is a table lookup, not a primality test: an
//! index past the end of the table is "not known to be prime".

/// Sorted indices n such that F(n) is a (probable) prime.
pub static PRIME_INDICES: &[u32] = &[
    3, 4, 5, 7, 11, 13, 17, 23, 29, 43, 47, 83, 131, 137, 359, 431, 433, 449, 509, 569, 571, 2971,
    4723, 5387, 9311, 9677, 14431, 25561, 30757, 35999, 37511, 50833, 81839, 104_911, 130_021,
    148_091, 201_107, 397_379, 433_781, 590_041, 593_689, 604_711, 931_517, 1_049_897, 1_285_607,
    1_636_007, 1_803_059, 1_968_721, 2_904_353,
];

/// Whether `index` is a tabulated Fibonacci-prime index.
#[inline]
#[must_use]
pub fn is_prime_index(index: u32) -> bool {
    PRIME_INDICES.binary_search(&index).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(PRIME_INDICES.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PRIME_INDICES.len(), 49);
    }

    #[test]
    fn known_members() {
        for index in [3, 4, 5, 7, 11, 571, 2971, 2_904_353] {
            assert!(is_prime_index(index), "{index} should be tabulated");
        }
    }

    #[test]
    fn non_members() {
        for index in [0, 1, 2, 6, 8, 9, 10, 12, 570, 572, 2_904_352] {
            assert!(!is_prime_index(index), "{index} should not be tabulated");
        }
    }

    #[test]
    fn beyond_table_is_unknown() {
        assert_eq!(PRIME_INDICES.last(), Some(&2_904_353));
        assert!(!is_prime_index(2_904_354));
        assert!(!is_prime_index(u32::MAX));
    }
}
