use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calibrix::{EquationSolver, OperatorSet, SearchOutcome, SolverConfig, parse_equations};
use clap::{Parser, ValueEnum};
use log::{info, warn};

const DEFAULT_INPUT: &str = "input.txt";
const SAMPLE_INPUT: &str = "sample.txt";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Which passes to run over the input
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Mode {
    /// Addition and multiplication only
    Basic,
    /// Addition, multiplication and concatenation
    Extended,
    /// Basic pass, then an extended pass over the equations it rejected
    TwoPhase,
}

/// Calibrix - Balance calibration equations with left-to-right operators
#[derive(Parser, Debug)]
#[command(name = "calibrix")]
#[command(about = "Find which equations can be balanced by inserting operators between operands")]
#[command(version)]
pub struct CliArgs {
    /// Puzzle input, one `TARGET: n1 n2 ...` equation per line
    pub input: Option<PathBuf>,

    /// Read sample.txt instead of input.txt when no input is given
    #[arg(long)]
    pub sample: bool,

    /// Passes to run
    #[arg(short, long, value_enum, default_value = "two-phase")]
    pub mode: Mode,

    /// Search equations in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Also print the input indices of accepted equations
    #[arg(long)]
    pub indices: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: PathBuf,
    pub mode: Mode,
    pub solver: SolverConfig,
    pub show_indices: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let input = args.input.unwrap_or_else(|| {
            PathBuf::from(if args.sample {
                SAMPLE_INPUT
            } else {
                DEFAULT_INPUT
            })
        });

        Self {
            input,
            mode: args.mode,
            solver: SolverConfig {
                parallel: args.parallel,
            },
            show_indices: args.indices,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn report(label: &str, outcome: &SearchOutcome, indices: &[usize], show_indices: bool) {
    println!("{}: {}", label, outcome.accepted_sum());
    if show_indices {
        println!("{} indices: {}", label, format_indices(indices));
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    // Initialize logging
    init_logging(&config.log_level)?;

    let input = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;
    let equations = parse_equations(&input)
        .with_context(|| format!("Invalid equation in {}", config.input.display()))?;

    if equations.is_empty() {
        warn!("No equations in {}", config.input.display());
    }

    info!(
        "Loaded {} equations from {}",
        equations.len(),
        config.input.display()
    );

    let solver = EquationSolver::new(config.solver);

    match config.mode {
        Mode::Basic | Mode::Extended => {
            let set = OperatorSet::from_extended(config.mode == Mode::Extended);
            let outcome = solver.search(&equations, set)?;
            report("Total", &outcome, &outcome.accepted_indices, config.show_indices);
        }
        Mode::TwoPhase => {
            let first = solver.search(&equations, OperatorSet::Basic)?;
            report("Part 1", &first, &first.accepted_indices, config.show_indices);

            let second = solver.search(&first.not_accepted, OperatorSet::Extended)?;
            println!(
                "Part 2: {}",
                first.accepted_sum() + second.accepted_sum()
            );
            if config.show_indices {
                println!(
                    "Part 2 indices: {}",
                    format_indices(&second.accepted_indices_in(&first))
                );
            }
        }
    }

    Ok(())
}
