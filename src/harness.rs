//! Timing harness for comparing matcher implementations.
//!
//! [`measure`] is the primitive: call something K times back to back and
//! report the wall-clock total. [`Benchmark`] drives it over every configured
//! size and matcher on a seeded random input pair.

use std::fmt;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::matcher::PermutationMatcher;

const DEFAULT_REPETITIONS: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9);

/// Total wall-clock time of `repetitions` back-to-back calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub repetitions: NonZeroUsize,
    pub total: Duration,
}

impl Measurement {
    pub fn mean(&self) -> Duration {
        Duration::from_secs_f64(self.mean_secs())
    }

    pub fn mean_secs(&self) -> f64 {
        self.total.as_secs_f64() / self.repetitions.get() as f64
    }
}

/// Calls `f` exactly `repetitions` times and times the whole run.
///
/// The first error aborts the measurement and is returned as is; no further
/// calls are made. A completed measurement is logged at debug level.
pub fn measure<F, R, E>(mut f: F, repetitions: NonZeroUsize) -> Result<Measurement, E>
where
    F: FnMut() -> Result<R, E>,
{
    let start = Instant::now();
    for _ in 0..repetitions.get() {
        std::hint::black_box(f()?);
    }
    let measurement = Measurement {
        repetitions,
        total: start.elapsed(),
    };
    tracing::debug!(
        repetitions = repetitions.get(),
        total_secs = measurement.total.as_secs_f64(),
        mean_secs = measurement.mean_secs(),
        "measured"
    );
    Ok(measurement)
}

/// Two `n`×`n` matrices of independent uniform values in `[0, 1)`.
pub fn random_pair(n: usize, seed: u64) -> (DMatrix<f64>, DMatrix<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = DMatrix::from_fn(n, n, |_, _| rng.gen::<f64>());
    let b = DMatrix::from_fn(n, n, |_, _| rng.gen::<f64>());
    (a, b)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Matrix dimensions to run, in order.
    pub sizes: Vec<usize>,
    pub repetitions: NonZeroUsize,
    /// Seed for the random input pair of every size.
    pub seed: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![9],
            repetitions: DEFAULT_REPETITIONS,
            seed: 0,
        }
    }
}

/// Outcome of timing one matcher at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub implementation: &'static str,
    pub n: usize,
    pub measurement: Measurement,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} N={:<2} reps={:<4} total {:.6}s  mean {:.6}s/call",
            self.implementation,
            self.n,
            self.measurement.repetitions,
            self.measurement.total.as_secs_f64(),
            self.measurement.mean_secs(),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    config: HarnessConfig,
}

impl Benchmark {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn run(&self, matchers: &[Box<dyn PermutationMatcher<f64>>]) -> Result<Vec<Report>> {
        self.run_with(matchers, |_| {})
    }

    /// Times every matcher at every configured size, handing each report to
    /// `on_report` as soon as it is available.
    ///
    /// A failing matcher aborts the run; reports already handed out stay valid.
    pub fn run_with<F>(
        &self,
        matchers: &[Box<dyn PermutationMatcher<f64>>],
        mut on_report: F,
    ) -> Result<Vec<Report>>
    where
        F: FnMut(&Report),
    {
        let mut reports = Vec::with_capacity(self.config.sizes.len() * matchers.len());
        for &n in &self.config.sizes {
            let (a, b) = random_pair(n, self.config.seed);
            for matcher in matchers {
                let measurement = measure(|| matcher.min_distance(&a, &b), self.config.repetitions)
                    .inspect_err(|e| {
                        tracing::error!(matcher = matcher.name(), n, "measurement aborted: {e}")
                    })?;
                tracing::info!(
                    matcher = matcher.name(),
                    n,
                    repetitions = measurement.repetitions.get(),
                    total_secs = measurement.total.as_secs_f64(),
                    mean_secs = measurement.mean_secs(),
                    "measured"
                );
                let report = Report {
                    implementation: matcher.name(),
                    n,
                    measurement,
                };
                on_report(&report);
                reports.push(report);
            }
        }
        Ok(reports)
    }
}
