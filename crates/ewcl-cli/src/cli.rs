use clap::{Args, Parser, Subcommand};
use ewcl::core::io::ExportFormat;
use ewcl::core::models::comparison::MissingResiduePolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "EWCL Platform Developers",
    version,
    about = "EWCL CLI - Classify per-residue entropy signals, detect stable and disordered regions, and compare structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to analyze input files in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more entropy signals and export the results.
    Analyze(AnalyzeArgs),
    /// Compare a variant signal against a baseline, residue by residue.
    Compare(CompareArgs),
}

/// Options shared by every command that builds an analysis configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S regions.min-run-length=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    // --- Core Arguments ---
    /// Signal files to analyze (.json or .csv).
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory the exports are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Export format: `csv` writes `<stem>_entropy.csv`, `json` writes `<stem>_analysis.json`.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Structure-wide collapse score, overriding any score carried by the input.
    #[arg(long, value_name = "FLOAT")]
    pub collapse_score: Option<f64>,

    /// Structure name, overriding any name carried by the input.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Baseline signal to compare every input against.
    #[arg(short, long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    // --- Classification Overrides ---
    /// Override the lower classification cut point.
    #[arg(long, value_name = "FLOAT")]
    pub low_cut: Option<f64>,

    /// Override the upper classification cut point.
    #[arg(long, value_name = "FLOAT")]
    pub high_cut: Option<f64>,

    // --- Region Overrides ---
    /// Override the minimum number of residues in a reported region.
    #[arg(long, value_name = "INT")]
    pub min_run_length: Option<usize>,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Baseline signal file (.json or .csv).
    #[arg(long, required = true, value_name = "PATH")]
    pub baseline: PathBuf,

    /// Variant signal file (.json or .csv).
    #[arg(long, required = true, value_name = "PATH")]
    pub variant: PathBuf,

    /// Override the significance threshold for a per-residue change.
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// How residues present in only one signal are treated.
    #[arg(short, long, value_name = "POLICY")]
    pub missing: Option<MissingResiduePolicy>,

    /// Write the comparison to this path; the format follows the extension.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of largest changes to print.
    #[arg(long, value_name = "INT", default_value_t = 10)]
    pub top: usize,

    #[command(flatten)]
    pub config: ConfigArgs,
}
