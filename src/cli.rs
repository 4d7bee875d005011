use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use sortbench::Algorithm;

/// Times an in-place sort over a sweep of random input sizes
#[derive(Parser, Debug)]
#[command(name = "sortbench", version, about)]
pub struct Args {
    /// Algorithm to time
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Heap)]
    pub algorithm: AlgorithmArg,

    /// Preset: quick (1..=100 / 10), standard (1..=250 / 100), thorough (1..=1000 / 1000)
    #[arg(long)]
    pub profile: Option<String>,

    /// Smallest input size
    #[arg(long)]
    pub min_size: Option<usize>,

    /// Largest input size (inclusive)
    #[arg(long)]
    pub max_size: Option<usize>,

    /// Timed sorts per size
    #[arg(long)]
    pub trials: Option<u32>,

    /// Lower bound of the random element values
    #[arg(long)]
    pub min_value: Option<f64>,

    /// Upper bound of the random element values
    #[arg(long)]
    pub max_value: Option<f64>,

    /// RNG seed; defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output table path
    #[arg(long, short, default_value = "timings.txt")]
    pub output: PathBuf,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    Bubble,
    BubbleFullPasses,
    Quick,
    Heap,
    HeapRebuild,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => Algorithm::Bubble,
            AlgorithmArg::BubbleFullPasses => Algorithm::BubbleFullPasses,
            AlgorithmArg::Quick => Algorithm::Quick,
            AlgorithmArg::Heap => Algorithm::Heap,
            AlgorithmArg::HeapRebuild => Algorithm::HeapRebuild,
        }
    }
}
