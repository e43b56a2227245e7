mod checker;
pub use checker::is_prime;

mod config;
pub use config::{Config, DEFAULT_RANK, Rank};

pub mod error;
pub use error::PrimeError;

mod finder;
pub use finder::{find_nth_prime, find_nth_prime_for};

mod run;
pub use run::{render, run};
