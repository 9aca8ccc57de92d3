//! Birthday paradox analysis driver
//!
//! Reproduces the full analysis run: a uniform-distribution sweep, an
//! empirical sweep from real birth counts when a data file is given, a
//! deliberately skewed sinusoidal sweep, and the figures for each stage.

use anyhow::{Context, Result};
use birthday_puzzle_core::{births, plot, CollisionEstimator, DayDistribution, SweepResult};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Birthday paradox Monte Carlo analysis")]
struct Args {
    /// Daily birth counts CSV (year,month,date_of_month,day_of_week,births)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output directory for figures
    #[arg(short, long, default_value = "images")]
    out_dir: PathBuf,

    /// Number of trials per room size
    #[arg(short, long, default_value_t = 5000)]
    trials: usize,

    /// Sweep room sizes 1 through this value
    #[arg(short = 'n', long, default_value_t = 100)]
    max_room_size: usize,

    /// RNG seed for a reproducible run (entropy-seeded when absent)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write all computed curves to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Serialize)]
struct CurveReport {
    trials: usize,
    uniform: SweepResult,
    empirical: Option<SweepResult>,
    sinusoidal: SweepResult,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.out_dir))?;

    let estimator = CollisionEstimator::new(args.trials)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let room_sizes: Vec<usize> = (1..=args.max_room_size).collect();

    info!(
        "Sweeping room sizes 1..={} with {} trials each (uniform distribution)",
        args.max_room_size, args.trials
    );
    let uniform = estimator.sweep(
        room_sizes.iter().copied(),
        DayDistribution::uniform(),
        &mut rng,
    )?;

    let title = format!("Prob. >=2 People Share Birthday ({} Simulations)", args.trials);
    plot::probability_curves(
        &args.out_dir.join("p_gte2_vs_N_uniform.png"),
        &title,
        &room_sizes,
        &[(">=2", &uniform.at_least_two)],
    )?;

    let title = format!("Prob. >=N People Share Birthday ({} Simulations)", args.trials);
    plot::probability_curves(
        &args.out_dir.join("p_gte2_gte3_vs_N_uniform.png"),
        &title,
        &room_sizes,
        &[
            (">=2", &uniform.at_least_two),
            (">=3", &uniform.at_least_three),
        ],
    )?;

    let empirical = match &args.data {
        Some(path) => {
            info!("Loading birth counts from {:?}", path);
            let records = births::load_birth_records(path)
                .with_context(|| format!("Failed to load birth data from {:?}", path))?;
            info!("Loaded {} daily records", records.len());

            let grid = births::month_day_totals(&records)?;
            plot::births_heatmap(&args.out_dir.join("births_heatmap.png"), &grid)?;

            let totals = births::day_of_year_totals(&records)?;
            let dist = DayDistribution::from_counts(&totals)?;
            plot::birth_probability_scatter(
                &args.out_dir.join("birth_prob_vs_yday.png"),
                &dist,
            )?;

            info!("Sweeping with the empirical birth distribution");
            let sweep = estimator.sweep(room_sizes.iter().copied(), &dist, &mut rng)?;

            let title = format!(
                "Prob. >=2 People Share Birthday ({} Simulations)",
                args.trials
            );
            plot::probability_curves(
                &args.out_dir.join("p_gte2_vs_N_uniform_actual.png"),
                &title,
                &room_sizes,
                &[
                    ("Uniform Dist.", &uniform.at_least_two),
                    ("W/ Actual Probs", &sweep.at_least_two),
                ],
            )?;

            Some(sweep)
        }
        None => {
            info!("No data file given, skipping the empirical stages");
            None
        }
    };

    let sine = DayDistribution::sinusoidal();
    plot::weight_profile(
        &args.out_dir.join("fake_birth_prob_vs_yday.png"),
        "Fake Probability Distribution",
        &sine,
    )?;

    info!("Sweeping with the sinusoidal test distribution");
    let sinusoidal = estimator.sweep(room_sizes.iter().copied(), &sine, &mut rng)?;

    let title = format!("Prob. >=2 People Share Birthday ({} Simulations)", args.trials);
    plot::probability_curves(
        &args.out_dir.join("p_gte2_vs_N_uniform_fakeprobs.png"),
        &title,
        &room_sizes,
        &[
            ("Uniform Dist.", &uniform.at_least_two),
            ("W/ Fake Probs", &sinusoidal.at_least_two),
        ],
    )?;

    if let Some(json_path) = &args.json {
        let report = CurveReport {
            trials: args.trials,
            uniform,
            empirical,
            sinusoidal,
        };
        let file = fs::File::create(json_path)
            .with_context(|| format!("Failed to create {:?}", json_path))?;
        serde_json::to_writer_pretty(file, &report)?;
        info!("Wrote curve report to {:?}", json_path);
    }

    info!("Done, figures written to {:?}", args.out_dir);
    Ok(())
}
