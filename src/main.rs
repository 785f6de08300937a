//! Benchmark runner for the multiplication variants.

use anyhow::Context;
use clap::Parser;
use matmul_lab::blocked::DEFAULT_TILE;
use matmul_lab::config::{DEFAULT_REPETITIONS, DEFAULT_SIZE};
use matmul_lab::{BenchConfig, Harness, Matrix, Timing, Variant};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "matmul-lab")]
#[command(about = "Time and verify dense integer matrix multiplication variants", long_about = None)]
struct Cli {
    /// Matrix side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Tile edge for the tiled variants
    #[arg(short, long, default_value_t = DEFAULT_TILE)]
    tile: usize,

    /// Timed runs per variant
    #[arg(short, long = "reps", default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Seed for the random operands
    #[arg(long)]
    seed: Option<u64>,

    /// Variant to run (repeatable); all variants when omitted
    #[arg(long = "variant", value_enum)]
    variants: Vec<Variant>,

    /// Print a speedup table after the timing lines
    #[arg(long)]
    summary: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> BenchConfig {
        let variants = if self.variants.is_empty() {
            Variant::ALL.to_vec()
        } else {
            self.variants
        };
        BenchConfig {
            size: self.size,
            tile: self.tile,
            repetitions: self.repetitions,
            seed: self.seed,
            variants,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let summary = cli.summary;
    let config = cli.into_config();
    config.validate().context("invalid benchmark settings")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = config.size;
    info!(n, tile = config.tile, reps = config.repetitions, "generating operands");
    let a = Matrix::random(n, &mut rng);
    let b = Matrix::random(n, &mut rng);

    let start = Instant::now();
    let mut harness = Harness::new(a, b)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "reference ready");

    let mut timings = Vec::with_capacity(config.variants.len());
    for &variant in &config.variants {
        let timing = harness
            .run(variant, config.tile, config.repetitions)
            .with_context(|| format!("{} produced a wrong result", variant))?;
        println!("{}", timing);
        timings.push(timing);
    }

    if summary {
        print_summary_table(&timings);
    }
    Ok(())
}

fn print_summary_table(timings: &[Timing]) {
    let Some(baseline) = timings.first() else {
        return;
    };
    let baseline_secs = baseline.average_secs();

    println!("\n{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));
    println!("{:<24} {:>16} {:>12}", "Method", "Avg (ms)", "Speedup");
    println!("{}", "-".repeat(60));

    for timing in timings {
        let secs = timing.average_secs();
        let speedup = if secs > 0.0 { baseline_secs / secs } else { 0.0 };
        println!(
            "{:<24} {:>16.3} {:>11.2}×",
            timing.variant.label(),
            secs * 1000.0,
            speedup
        );
    }

    println!("{}", "=".repeat(60));
    println!("Speedup relative to {}. Higher is better.\n", baseline.variant.label());
}
