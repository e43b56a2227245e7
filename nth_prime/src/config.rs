use crate::error::PrimeError;
use std::{fmt, num::NonZeroU64};

/// Rank searched for when none is given.
pub const DEFAULT_RANK: u64 = 46100;

/// 1-based position of a prime in the ascending sequence of primes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(NonZeroU64);

impl Rank {
    pub const DEFAULT: Rank = match NonZeroU64::new(DEFAULT_RANK) {
        Some(rank) => Rank(rank),
        None => panic!("DEFAULT_RANK must be non-zero"),
    };

    pub fn new(rank: u64) -> Result<Self, PrimeError> {
        NonZeroU64::new(rank)
            .map(Self)
            .ok_or(PrimeError::InvalidRank(rank))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub rank: Rank,
}

impl Config {
    pub fn new(rank: Rank) -> Self {
        Self { rank }
    }
}
