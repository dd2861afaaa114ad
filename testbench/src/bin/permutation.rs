//! Read whitespace separated strings from stdin and print `k` of them,
//! chosen uniformly at random, one per line.

use clap::Parser;
use percolate::RandomizedBag;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{
    error::Error,
    io::{BufWriter, Read, Write},
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of strings to print.
    k: usize,
    /// Seed for a reproducible selection.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Log more, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn permute<I: Read, O: Write, R: Rng>(
    k: usize,
    mut input: I,
    output: O,
    mut bag: RandomizedBag<String, R>,
) -> Result<(), Box<dyn Error>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    bag.extend(text.split_whitespace().map(String::from));
    info!(count = bag.len(), k, "Loaded strings.");
    let mut output = BufWriter::new(output);
    for _ in 0..k {
        let item = bag.dequeue()?;
        debug!(item = item.as_str(), "Dequeued.");
        writeln!(output, "{item}")?;
    }
    output.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    testbench::init_logging(args.verbose);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    permute(
        args.k,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        RandomizedBag::with_rng(rng),
    )
}
