use crate::{config::Config, finder::find_nth_prime_for};
use anyhow::Context;
use std::io::Write;

/// The line printed for a finished search.
pub fn render(nth: u64, prime: u64) -> String {
    format!("The {nth}th prime number is: {prime}")
}

/// Searches for the configured rank and writes the result line to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<u64> {
    let prime = find_nth_prime_for(config.rank)
        .with_context(|| format!("could not find prime of rank {}", config.rank))?;
    writeln!(out, "{}", render(config.rank.get(), prime)).context("failed to write result")?;
    Ok(prime)
}
