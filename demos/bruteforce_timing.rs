use graph_match::{matcher, Benchmark, HarnessConfig};
use std::num::NonZeroUsize;
use tracing_subscriber::EnvFilter;

const SIZES: [usize; 3] = [7, 8, 9];
const TRIALS: usize = 10;
const SEED: u64 = 2017;

fn main() -> Result<(), graph_match::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let config = HarnessConfig {
        sizes: SIZES.to_vec(),
        repetitions: NonZeroUsize::new(TRIALS).expect("non-zero trials"),
        seed: SEED,
    };
    println!(
        "sizes {:?}, {} trials each, seed {}",
        config.sizes, config.repetitions, config.seed
    );

    Benchmark::new(config).run_with(&matcher::all(), |report| println!("{report}"))?;
    Ok(())
}
