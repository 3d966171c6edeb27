use clap::{Args, Parser, Subcommand, ValueEnum};
use hbscan::core::hbond::RoleFlags;
use hbscan::core::utils::zone::{ResidueSpec, ResidueZone};
use hbscan::engine::config::ScanKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hbscan - Baker & Hubbard hydrogen-bond detection between the residues of a protein structure.",
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

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report every hydrogen-bonded residue pair of a structure.
    Scan(ScanArgs),
    /// Classify a single pair of residues.
    Pair(PairArgs),
}

/// Options shared by every command that classifies residue pairs.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifyArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Roles the residues may take: a preset (bb, bs, ss, sb, sidechain,
    /// backbone, any) or a '+'-joined list of back1, back2, side1, side2.
    #[arg(short, long, value_name = "ROLES")]
    pub roles: Option<RoleFlags>,

    /// Which part of the first residue must take part:
    /// all, mainchain-donor (mc-donor) or mainchain-acceptor (mc-acceptor).
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<ScanKind>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S criteria.donor-acceptor-cutoff=3.2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    #[command(flatten)]
    pub classify: ClassifyArgs,

    /// Restrict the scan to a residue zone such as A10-A20, A10B-A20 or A5.
    /// Can be used multiple times; replaces the zones of the config file.
    #[arg(short, long = "zone", value_name = "ZONE")]
    pub zones: Vec<ResidueZone>,

    /// Output format for the contact list.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write contacts to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `pair` subcommand.
#[derive(Args, Debug)]
pub struct PairArgs {
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// The first residue, e.g. A12 or A12B.
    #[arg(value_name = "FIRST")]
    pub first: ResidueSpec,

    /// The second residue.
    #[arg(value_name = "SECOND")]
    pub second: ResidueSpec,

    #[command(flatten)]
    pub classify: ClassifyArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per contact.
    Text,
    /// Comma-separated values with a header row.
    Csv,
}
