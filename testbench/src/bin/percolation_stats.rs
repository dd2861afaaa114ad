//! Estimate the percolation threshold of an `n` by `n` grid with `trials`
//! Monte Carlo experiments.

use clap::Parser;
use percolate::PercolationStats;
use rand::{SeedableRng, rngs::StdRng};
use std::error::Error;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the grid.
    n: usize,
    /// Number of independent experiments.
    trials: usize,
    /// Seed for reproducible experiments.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Log more, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn report(stats: &PercolationStats) -> String {
    format!(
        "mean                    = {}\nstddev                  = {}\n95% confidence interval = [{}, {}]",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    testbench::init_logging(args.verbose);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(n = args.n, trials = args.trials, "Running experiments.");
    let stats = PercolationStats::run(args.n, args.trials, &mut rng)?;
    println!("{}", report(&stats));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_report() {
        let mut rng = StdRng::seed_from_u64(0);
        let stats = PercolationStats::run(1, 3, &mut rng).unwrap();
        assert_eq!(
            report(&stats),
            "mean                    = 1\nstddev                  = 0\n95% confidence interval = [1, 1]"
        );
    }

    #[test]
    fn t_parse() {
        let args = Args::try_parse_from(["percolation-stats", "200", "100"]).unwrap();
        assert_eq!((args.n, args.trials, args.seed), (200, 100, None));
        assert!(Args::try_parse_from(["percolation-stats", "200"]).is_err());
        assert!(Args::try_parse_from(["percolation-stats", "x", "100"]).is_err());
    }

    #[test]
    fn t_rejects_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(PercolationStats::run(0, 1, &mut rng).is_err());
        assert!(PercolationStats::run(1, 0, &mut rng).is_err());
    }
}
