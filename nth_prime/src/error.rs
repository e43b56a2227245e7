use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PrimeError {
    #[error("invalid rank {0}: the first prime has rank 1")]
    InvalidRank(u64),
    #[error("ran out of u64 candidates after {found} of {target} primes")]
    CandidateOverflow { found: u64, target: u64 },
}
