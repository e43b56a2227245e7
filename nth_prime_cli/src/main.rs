use crate::{options::*, utils::*};
use anyhow::Context;
use clap::Parser;
use nth_prime::{Config, DEFAULT_RANK, Rank};
use std::time::Instant;

mod options;
mod utils;

#[derive(Parser)]
#[command(
    name = "nth-prime",
    author,
    version,
    about = "Print the n-th prime number, found by trial division",
    long_about = None
)]
struct PrimeCli {
    /// 1-based rank of the prime to find.
    #[arg(short, long, default_value_t = DEFAULT_RANK)]
    rank: u64,
    #[clap(flatten, next_help_heading = "Logging Options")]
    log_options: LogOptions,
}

impl PrimeCli {
    fn run(self) -> anyhow::Result<()> {
        self.log_options.try_setup_logger();
        let rank = Rank::new(self.rank).context("invalid --rank")?;

        let start = Instant::now();
        let mut stdout = std::io::stdout().lock();
        nth_prime::run(&Config::new(rank), &mut stdout)?;
        tracing::info!("elapsed: {:?}", start.elapsed());
        Ok(())
    }
}

fn main() {
    let cli = PrimeCli::parse();
    if let Err(e) = cli
        .run()
        .context("could not compute prime due to previous error")
    {
        print_error(e);
        std::process::exit(1);
    }
}
