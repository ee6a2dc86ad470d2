//! staffplan — command-line front end for the staffplan workforce planner.
//!
//! ```text
//! staffplan divisors --day-hours 24
//! staffplan shifts   --day-hours 24 --bucket-minutes 15 --min-hours 4
//! staffplan template --config data/plan.toml --out periods.csv
//! staffplan fit      --samples data/durations.csv --degree 2 --curve curve.csv
//! staffplan plan     --config data/plan.toml --periods data/periods.csv \
//!                    --samples data/durations.csv --out ./output
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_catalog::{
    align_call_volumes, build_period_grid, enumerate_admissible_shifts, find_divisors,
    load_period_table_csv, load_shift_table_csv,
};
use sp_core::{PlanConfig, MINUTES_PER_DAY};
use sp_duration::{fit_polynomial, load_samples_csv, FitReport};
use sp_output::{write_fit_curve_csv, write_period_template_csv, write_shift_table_csv, CsvWriter};
use sp_plan::{NoopObserver, PlanBuilder, PlanOutcome, WriterObserver};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimum-cost call-center shift planning", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List bucket sizes (minutes) that evenly divide the planning window.
    Divisors {
        #[arg(long, default_value_t = 24)]
        day_hours: u32,
    },

    /// List shift durations that fit the bucket grid.
    Shifts {
        #[arg(long, default_value_t = 24)]
        day_hours: u32,
        #[arg(long, default_value_t = 15)]
        bucket_minutes: u32,
        #[arg(long, default_value_t = 1.0)]
        min_hours: f64,
    },

    /// Write an empty period table (and the configured shift table) to fill in.
    Template {
        #[arg(long)]
        config: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Also write the configured shifts as an editable shift table.
        #[arg(long)]
        shift_table: Option<PathBuf>,
    },

    /// Fit the call-duration polynomial and report its quality.
    Fit {
        #[arg(long)]
        samples: PathBuf,
        #[arg(long, default_value_t = 2)]
        degree: u32,
        /// Write the fitted curve, sampled at 1000 points, to this CSV.
        #[arg(long)]
        curve: Option<PathBuf>,
    },

    /// Run a full planning pass.
    Plan {
        #[arg(long)]
        config: PathBuf,
        /// Period table with call volumes filled in.
        #[arg(long)]
        periods: PathBuf,
        /// Historical call-duration samples.
        #[arg(long)]
        samples: PathBuf,
        /// Shift table CSV; overrides the shifts in the config file.
        #[arg(long)]
        shift_table: Option<PathBuf>,
        /// Run seed; overrides the config file.
        #[arg(long)]
        seed: Option<u64>,
        /// Directory for the CSV output files.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Divisors { day_hours } => divisors(day_hours),
        Command::Shifts { day_hours, bucket_minutes, min_hours } => {
            shifts(day_hours, bucket_minutes, min_hours)
        }
        Command::Template { config, out, shift_table } => template(&config, &out, shift_table.as_deref()),
        Command::Fit { samples, degree, curve } => fit(&samples, degree, curve.as_deref()),
        Command::Plan { config, periods, samples, shift_table, seed, out } => plan(
            &config,
            &periods,
            &samples,
            shift_table.as_deref(),
            seed,
            out.as_deref(),
        ),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn divisors(day_hours: u32) -> Result<()> {
    let day_minutes = day_hours * 60;
    println!("Bucket sizes dividing a {day_hours} h window ({day_minutes} min):");
    for d in find_divisors(day_minutes) {
        println!("  {d:>5} min");
    }
    Ok(())
}

fn shifts(day_hours: u32, bucket_minutes: u32, min_hours: f64) -> Result<()> {
    let durations = enumerate_admissible_shifts(min_hours, day_hours as f64, bucket_minutes)?;
    println!("Shift durations on a {bucket_minutes}-min grid, {min_hours} h to {day_hours} h:");
    for minutes in durations {
        println!("  {:02}h{:02}", minutes / 60, minutes % 60);
    }
    Ok(())
}

fn template(config_path: &Path, out: &Path, shift_table: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let periods = build_period_grid(
        config.day_hours,
        config.bucket_minutes,
        config.start_hour,
        config.start_minute,
    )?;
    write_period_template_csv(out, &periods)
        .with_context(|| format!("writing period template {}", out.display()))?;
    println!("Wrote {} periods to {}", periods.len(), out.display());

    if let Some(path) = shift_table {
        let shifts = config.shift_types()?;
        write_shift_table_csv(path, &shifts)
            .with_context(|| format!("writing shift table {}", path.display()))?;
        println!("Wrote {} shifts to {}", shifts.len(), path.display());
    }
    Ok(())
}

fn fit(samples_path: &Path, degree: u32, curve: Option<&Path>) -> Result<()> {
    let samples = load_samples_csv(samples_path)
        .with_context(|| format!("loading duration samples {}", samples_path.display()))?;
    let model = fit_polynomial(&samples, degree)?;
    let report = FitReport::new(&model, &samples);

    println!("Fitted degree-{degree} polynomial on {} samples", samples.len());
    for (power, c) in model.coefficients().iter().enumerate() {
        println!("  x^{power}: {c:>14.6}");
    }
    println!("  RMSE          {:>10.3} s", report.rmse);
    println!("  max residual  {:>10.3} s", report.max_residual);
    if report.min_on_curve < 0.0 {
        println!("  curve dips to {:.3} s; negative draws are folded to positive", report.min_on_curve);
    }

    if let Some(path) = curve {
        write_fit_curve_csv(path, &report.curve)
            .with_context(|| format!("writing fit curve {}", path.display()))?;
        println!("Wrote {} curve points to {}", report.curve.len(), path.display());
    }
    Ok(())
}

fn plan(
    config_path:  &Path,
    periods_path: &Path,
    samples_path: &Path,
    shift_table:  Option<&Path>,
    seed:         Option<u64>,
    out:          Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    config.validate()?;

    let grid = build_period_grid(
        config.day_hours,
        config.bucket_minutes,
        config.start_hour,
        config.start_minute,
    )?;
    let records = load_period_table_csv(periods_path)
        .with_context(|| format!("loading period table {}", periods_path.display()))?;
    let volumes = align_call_volumes(&grid, &records)?;
    let samples = load_samples_csv(samples_path)
        .with_context(|| format!("loading duration samples {}", samples_path.display()))?;

    let mut builder = PlanBuilder::new(config.clone(), volumes).samples(samples);
    if let Some(path) = shift_table {
        let shifts = load_shift_table_csv(path, config.bucket_minutes, config.day_minutes())
            .with_context(|| format!("loading shift table {}", path.display()))?;
        builder = builder.shifts(shifts);
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let planner = builder.build()?;

    let t0 = Instant::now();
    let outcome = match out {
        Some(dir) => {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let mut observer = WriterObserver::new(CsvWriter::new(dir)?);
            let outcome = planner.run(&mut observer)?;
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing plan output");
            }
            info!(dir = %dir.display(), "wrote staffing plan");
            outcome
        }
        None => planner.run(&mut NoopObserver)?,
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "planning run finished");

    print_outcome(&outcome, config.day_hours * 60 > MINUTES_PER_DAY);
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: &Path) -> Result<PlanConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_outcome(outcome: &PlanOutcome, multi_day: bool) {
    if let Some(fit) = &outcome.fit {
        println!("Duration fit RMSE: {:.3} s", fit.rmse);
    }
    if multi_day {
        println!("Planning window is longer than a day; clock times repeat.");
    }
    println!("{}", outcome.plan);
    for t in &outcome.plan.totals {
        println!("  {:<6} {:>5} agents  {:>12.2}", t.label, t.agents, t.cost);
    }
    println!("Seed {} (pass --seed {} to reproduce)", outcome.seed, outcome.seed);
}
