use clap::{Parser, ValueEnum};
use foldspan::engine::backend::BackendPreference;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Dan Voulez",
    version,
    about = "FoldSpan CLI - A command-line interface for FoldSpan, a physics evaluation bridge that scores single residue rotations applied to a coarse-grained polymer chain.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Read the request document from this JSON file instead of standard input.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Select the execution strategy, overriding the config file.
    #[arg(short, long, value_enum, value_name = "STRATEGY")]
    pub backend: Option<BackendArg>,

    /// Seed the simulation noise stream for a reproducible trajectory.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Execution strategy choices exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    /// Probe the simulation toolkit and fall back silently to the heuristic.
    Auto,
    /// Force the closed-form heuristic strategy.
    Heuristic,
    /// Demand the particle simulation strategy; fail if it cannot run.
    Simulation,
}

impl From<BackendArg> for BackendPreference {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => BackendPreference::Auto,
            BackendArg::Heuristic => BackendPreference::Heuristic,
            BackendArg::Simulation => BackendPreference::Simulation,
        }
    }
}
