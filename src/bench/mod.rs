//! Measurement harness: builds random instances, times one algorithm over
//! them, and averages the durations per input size.

pub mod profile;
pub mod table;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;
use thiserror::Error;

use crate::algo::Algorithm;
use crate::core::NumericVector;
use crate::error::SortError;

/// Errors raised while running a sweep or writing its results.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("trial count must be at least 1")]
    ZeroTrials,
    #[error("size range {min}..={max} is empty")]
    EmptySizeRange { min: usize, max: usize },
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for one sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub trials: u32,
    pub value_min: f64,
    pub value_max: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_size: 1,
            max_size: 1000,
            trials: 1000,
            value_min: 0.0,
            value_max: 10.0,
        }
    }
}

impl BenchConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.trials == 0 {
            return Err(BenchError::ZeroTrials);
        }
        if self.min_size > self.max_size {
            return Err(BenchError::EmptySizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// Averaged timing for one input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub trials: u32,
    pub total: Duration,
    pub mean_seconds: f64,
}

/// Wall-clock time between two monotonic samples. Never negative.
pub fn elapsed_time(start: Instant, end: Instant) -> Duration {
    end.saturating_duration_since(start)
}

/// Times a single sort of a fresh random vector of `size` elements.
///
/// Only the sort is timed; building and filling the vector is not. The
/// sorted data is dropped.
pub fn time_sort<R: Rng + ?Sized>(
    algorithm: Algorithm,
    size: usize,
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Duration, SortError> {
    let mut v = NumericVector::random(size, config.value_min, config.value_max, rng)?;

    let start = Instant::now();
    algorithm.sort(&mut v, rng);
    let end = Instant::now();

    Ok(elapsed_time(start, end))
}

/// Runs `config.trials` timed sorts for every size in
/// `config.min_size..=config.max_size`.
///
/// `progress` is called once per completed size.
pub fn run_sweep<R: Rng + ?Sized>(
    algorithm: Algorithm,
    config: &BenchConfig,
    rng: &mut R,
    progress: Option<&dyn Fn(&Measurement)>,
) -> Result<Vec<Measurement>, BenchError> {
    config.validate()?;
    info!(
        "{algorithm}: sizes {}..={}, {} trials each",
        config.min_size, config.max_size, config.trials
    );

    let mut results = Vec::new();
    for size in config.min_size..=config.max_size {
        let mut total = Duration::ZERO;
        for _ in 0..config.trials {
            total += time_sort(algorithm, size, config, rng)?;
        }

        let measurement = Measurement {
            size,
            trials: config.trials,
            total,
            mean_seconds: total.as_secs_f64() / f64::from(config.trials),
        };
        debug!(
            "{algorithm} @ {size}: mean {:.3e}s",
            measurement.mean_seconds
        );
        if let Some(cb) = progress {
            cb(&measurement);
        }
        results.push(measurement);
    }

    info!("{algorithm}: {} sizes measured", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    fn small_config() -> BenchConfig {
        BenchConfig {
            min_size: 1,
            max_size: 8,
            trials: 3,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_elapsed_time_is_monotonic() {
        let start = Instant::now();
        let end = Instant::now();
        assert_eq!(elapsed_time(end, start), Duration::ZERO);
        assert_eq!(elapsed_time(start, start), Duration::ZERO);
    }

    #[test]
    fn test_sweep_covers_every_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = small_config();

        for algorithm in Algorithm::ALL {
            let results = run_sweep(algorithm, &config, &mut rng, None).unwrap();
            let sizes: Vec<usize> = results.iter().map(|m| m.size).collect();
            assert_eq!(sizes, (1..=8).collect::<Vec<_>>());
            assert!(results.iter().all(|m| m.trials == 3));
            assert!(results.iter().all(|m| m.mean_seconds >= 0.0));
        }
    }

    #[test]
    fn test_sweep_reports_progress() {
        let mut rng = StdRng::seed_from_u64(2);
        let seen = Cell::new(0usize);
        let cb = |_: &Measurement| seen.set(seen.get() + 1);

        run_sweep(Algorithm::Heap, &small_config(), &mut rng, Some(&cb)).unwrap();
        assert_eq!(seen.get(), 8);
    }

    #[test]
    fn test_sweep_rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(3);

        let zero = BenchConfig {
            trials: 0,
            ..small_config()
        };
        assert!(matches!(
            run_sweep(Algorithm::Quick, &zero, &mut rng, None),
            Err(BenchError::ZeroTrials)
        ));

        let inverted = BenchConfig {
            min_size: 5,
            max_size: 4,
            ..small_config()
        };
        assert!(matches!(
            run_sweep(Algorithm::Quick, &inverted, &mut rng, None),
            Err(BenchError::EmptySizeRange { min: 5, max: 4 })
        ));

        let bad_values = BenchConfig {
            value_min: 10.0,
            value_max: 0.0,
            ..small_config()
        };
        assert!(matches!(
            run_sweep(Algorithm::Quick, &bad_values, &mut rng, None),
            Err(BenchError::Sort(SortError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_time_sort_zero_size() {
        let mut rng = StdRng::seed_from_u64(4);
        let d = time_sort(Algorithm::Bubble, 0, &BenchConfig::default(), &mut rng).unwrap();
        assert!(d < Duration::from_secs(1));
    }
}
