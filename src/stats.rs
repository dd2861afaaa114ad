use crate::{error::Error, grid::ConnectivityGrid};
use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

/// Two sided 95% quantile of the standard normal distribution.
const CONFIDENCE_95: f64 = 1.96;

/// Monte Carlo estimate of the percolation threshold.
///
/// Every trial opens sites of a fresh grid in a uniformly random order until
/// the grid percolates, and records the fraction of open sites at that
/// point. The mean of those fractions estimates the threshold.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` independent experiments on grids of side `n`.
    #[instrument(level = "debug", skip(rng))]
    pub fn run<R: Rng + ?Sized>(n: usize, trials: usize, rng: &mut R) -> Result<Self, Error> {
        if trials == 0 {
            return Err(Error::InvalidArgument("number of trials must be positive"));
        }
        // Validates `n` before any work is done.
        let template = ConnectivityGrid::new(n)?;
        let num_sites = n * n;
        let mut order: Vec<usize> = (0..num_sites).collect();
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let mut grid = template.clone();
            order.shuffle(rng);
            for &site in &order {
                grid.open(site / n + 1, site % n + 1)?;
                if grid.percolates() {
                    break;
                }
            }
            let threshold = grid.number_of_open_sites() as f64 / num_sites as f64;
            debug!(trial, threshold, "Trial percolated.");
            thresholds.push(threshold);
        }
        Ok(PercolationStats { n, thresholds })
    }

    /// Side length of the grids used in the experiments.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation. NaN when there was only one trial.
    pub fn stddev(&self) -> f64 {
        let count = self.thresholds.len();
        if count < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sumsq: f64 = self.thresholds.iter().map(|t| (t - mean) * (t - mean)).sum();
        (sumsq / (count - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.thresholds.len() as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}
