mod cli;

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::Args;
use sortbench::Algorithm;
use sortbench::bench::profile::get_profile;
use sortbench::bench::table::{format_general, write_table_file};
use sortbench::bench::{BenchConfig, Measurement, run_sweep};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let algorithm = Algorithm::from(args.algorithm);

    // One seed per run, shared by data generation and pivot selection.
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    });
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let report = |m: &Measurement| {
        if m.size % 100 == 0 {
            info!("{algorithm} @ {}: {}s", m.size, format_general(m.mean_seconds));
        }
    };
    let results = run_sweep(algorithm, &config, &mut rng, Some(&report))
        .with_context(|| format!("{algorithm} sweep failed"))?;

    write_table_file(&args.output, &results)?;
    Ok(())
}

/// Profile values first, explicit flags on top.
fn resolve_config(args: &Args) -> Result<BenchConfig> {
    let mut config = match &args.profile {
        Some(name) => match get_profile(name) {
            Some(p) => p.config,
            None => bail!("unknown profile '{name}'. Valid: quick, standard, thorough"),
        },
        None => BenchConfig::default(),
    };

    if let Some(v) = args.min_size {
        config.min_size = v;
    }
    if let Some(v) = args.max_size {
        config.max_size = v;
    }
    if let Some(v) = args.trials {
        config.trials = v;
    }
    if let Some(v) = args.min_value {
        config.value_min = v;
    }
    if let Some(v) = args.max_value {
        config.value_max = v;
    }
    Ok(config)
}
