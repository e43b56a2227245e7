use crate::{checker::is_prime, config::Rank, error::PrimeError};

/// Returns the `target_count`-th prime, counting 2 as the first.
///
/// A zero rank is rejected up front instead of searching forever.
pub fn find_nth_prime(target_count: u64) -> Result<u64, PrimeError> {
    find_nth_prime_for(Rank::new(target_count)?)
}

#[tracing::instrument(
    skip_all,
    name = "find_nth_prime",
    level = "trace",
    fields(profiling_1, rank = %rank)
)]
pub fn find_nth_prime_for(rank: Rank) -> Result<u64, PrimeError> {
    let target = rank.get();
    let mut count = 0u64;
    let mut candidate = 2u64;

    loop {
        if is_prime(candidate) {
            count += 1;
            if count == target {
                tracing::debug!(
                    prime = candidate,
                    candidates = candidate - 1,
                    "found prime of rank {target}"
                );
                return Ok(candidate);
            }
        }
        candidate = candidate
            .checked_add(1)
            .ok_or(PrimeError::CandidateOverflow {
                found: count,
                target,
            })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_ranks() {
        assert_eq!(find_nth_prime(1), Ok(2));
        assert_eq!(find_nth_prime(2), Ok(3));
        assert_eq!(find_nth_prime(3), Ok(5));
        assert_eq!(find_nth_prime(6), Ok(13));
        assert_eq!(find_nth_prime(10), Ok(29));
    }

    #[test]
    fn test_larger_ranks() {
        assert_eq!(find_nth_prime(100), Ok(541));
        assert_eq!(find_nth_prime(1000), Ok(7919));
        assert_eq!(find_nth_prime(10_001), Ok(104_743));
    }

    #[test]
    fn test_zero_rank() {
        assert_eq!(find_nth_prime(0), Err(PrimeError::InvalidRank(0)));
    }

    #[test]
    fn test_result_is_prime() {
        for rank in 1..200 {
            let p = find_nth_prime(rank).unwrap();
            assert!(is_prime(p), "rank {rank} gave composite {p}");
        }
    }

    #[test]
    fn test_rank_form_matches() {
        let rank = Rank::new(42).unwrap();
        assert_eq!(find_nth_prime_for(rank), find_nth_prime(42));
    }

    proptest! {
        #[test]
        fn test_monotonic(a in 1u64..800, b in 1u64..800) {
            prop_assume!(a < b);
            prop_assert!(find_nth_prime(a).unwrap() < find_nth_prime(b).unwrap());
        }

        #[test]
        fn test_counts_primes_below(rank in 1u64..500) {
            let p = find_nth_prime(rank).unwrap();
            let below = (2..=p).filter(|&n| is_prime(n)).count() as u64;
            prop_assert_eq!(below, rank);
        }
    }
}
