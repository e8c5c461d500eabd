//! Helm command line.
//!
//! # Usage
//!
//! ```text
//! # Run a preset and print a summary
//! helm run --preset transparent
//!
//! # Run a scenario file and write the trajectory as CSV
//! helm run --config steered.toml --format csv --output steered.csv
//!
//! # Contrast the built-in presets
//! helm compare
//!
//! # Contrast two scenarios from a file, as JSON
//! helm compare --config policies.toml --format json
//! ```
//!
//! Build with `--features plot` to enable `--plot`.

use std::{
    convert::Infallible,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use helm_core::Observer;
use helm_observers::LogObserver;
use helm_steering::{Preset, Run, Scenario, Simulator, StepEvent, compare, config, output};

#[derive(Parser, Debug)]
#[command(name = "helm")]
#[command(about = "Simulate steered vs. uncontrolled phase/magnitude dynamics")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one scenario
    Run(RunArgs),

    /// Run two scenarios and contrast them
    Compare(CompareArgs),
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Built-in scenario to run
    #[arg(short, long, value_enum, conflicts_with = "config")]
    preset: Option<Preset>,

    /// TOML file with a [scenario] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress every N steps
    #[arg(long, default_value = "500")]
    log_every: usize,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct CompareArgs {
    /// TOML file with [baseline] and [alternative] tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: Format,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// Open a plot window after the run
    #[cfg(feature = "plot")]
    #[arg(long)]
    plot: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Summary,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Run(args) => run(&args),
        Command::Compare(args) => run_compare(&args),
    }
}

fn run(args: &RunArgs) -> anyhow::Result<()> {
    let scenario = match &args.config {
        Some(path) => config::load_scenario(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => args.preset.unwrap_or(Preset::Transparent).scenario(),
    };
    info!(name = %scenario.name, steps = scenario.params.step_count(), "running scenario");

    let mut progress = LogObserver::new(scenario.name.clone(), args.log_every);
    #[cfg(feature = "plot")]
    let mut plotter = helm_observers::PlotObserver::<2>::new(["magnitude ρ", "phase φ"]);

    let trajectory = Simulator::new(scenario.params).run_observed(
        scenario.initial,
        |event: &StepEvent| -> Option<Infallible> {
            let _: Option<Infallible> = progress.observe(event);
            #[cfg(feature = "plot")]
            let _: Option<Infallible> = plotter.observe(event);
            None
        },
    )?;
    let run = Run {
        scenario,
        trajectory,
    };

    let mut writer = open_output(args.out.output.as_deref())?;
    match args.out.format {
        Format::Summary => writeln!(writer, "{}", run.summary())?,
        Format::Json => output::write_json(&mut writer, &run)?,
        Format::Csv => output::write_csv(&mut writer, &run.trajectory)?,
    }
    writer.flush()?;

    #[cfg(feature = "plot")]
    if args.out.plot {
        plot::show_run(plotter, &run.scenario.name)?;
    }

    Ok(())
}

fn run_compare(args: &CompareArgs) -> anyhow::Result<()> {
    let (baseline, alternative): (Scenario, Scenario) = match &args.config {
        Some(path) => config::load_comparison(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => (Preset::Transparent.scenario(), Preset::Opaque.scenario()),
    };

    let comparison = compare(baseline, alternative)?;

    let mut writer = open_output(args.out.output.as_deref())?;
    match args.out.format {
        Format::Summary => writeln!(writer, "{}", comparison.summary())?,
        Format::Json => output::write_json(&mut writer, &comparison)?,
        Format::Csv => output::write_comparison_csv(&mut writer, &comparison)?,
    }
    writer.flush()?;

    #[cfg(feature = "plot")]
    if args.out.plot {
        plot::compare(&comparison)?;
    }

    Ok(())
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            info!(path = %path.display(), "writing results");
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

#[cfg(feature = "plot")]
mod plot {
    use helm_observers::{PlotObserver, ShowConfig};
    use helm_steering::Comparison;

    pub(super) fn show_run(obs: PlotObserver<2>, name: &str) -> anyhow::Result<()> {
        obs.show(
            ShowConfig::new()
                .title(format!("Helm: {name}"))
                .legend()
                .x_label("t"),
        )
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
    }

    pub(super) fn compare(comparison: &Comparison) -> anyhow::Result<()> {
        let baseline = &comparison.baseline;
        let alternative = &comparison.alternative;
        let mut obs = PlotObserver::<2>::new([
            baseline.scenario.name.as_str(),
            alternative.scenario.name.as_str(),
        ]);
        for (t, state) in baseline.trajectory.times().zip(&baseline.trajectory) {
            obs.record(t, [Some(state.magnitude()), None]);
        }
        for (t, state) in alternative.trajectory.times().zip(&alternative.trajectory) {
            obs.record(t, [None, Some(state.magnitude())]);
        }
        obs.show(
            ShowConfig::new()
                .title("Helm: retained magnitude")
                .legend()
                .x_label("t")
                .y_label("ρ"),
        )
        .map_err(|e| anyhow::anyhow!("plot window failed: {e}"))
    }
}
