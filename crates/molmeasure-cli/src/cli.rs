use crate::utils::parser::parse_point;
use clap::{Args, Parser, Subcommand};
use nalgebra::Point3;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "molmeasure - distances, angles and distance-based bond lists for molecular structures.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Euclidean distance between two points.
    Distance(DistanceArgs),
    /// Angle at a vertex formed by two other points.
    Angle(AngleArgs),
    /// List atom pairs of an XYZ structure whose separation falls in a distance window.
    Bonds(BondsArgs),
    /// Full structural analysis of an XYZ structure: bonds, bond angles and statistics.
    Analyze(AnalyzeArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Distance(_) => "distance",
            Commands::Angle(_) => "angle",
            Commands::Bonds(_) => "bonds",
            Commands::Analyze(_) => "analyze",
        }
    }
}

/// Arguments for the `distance` subcommand.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First point as x,y,z.
    #[arg(value_parser = parse_point, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub a: Point3<f64>,

    /// Second point as x,y,z.
    #[arg(value_parser = parse_point, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub b: Point3<f64>,
}

/// Arguments for the `angle` subcommand.
#[derive(Args, Debug)]
pub struct AngleArgs {
    /// First outer point as x,y,z.
    #[arg(value_parser = parse_point, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub a: Point3<f64>,

    /// Vertex, where the angle is measured, as x,y,z.
    #[arg(value_parser = parse_point, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub vertex: Point3<f64>,

    /// Second outer point as x,y,z.
    #[arg(value_parser = parse_point, allow_hyphen_values = true, value_name = "X,Y,Z")]
    pub c: Point3<f64>,

    /// Report the angle in degrees instead of radians.
    #[arg(short, long)]
    pub degrees: bool,
}

/// Configuration sources shared by the structure commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the platform configuration directory, if present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S bonds.max-bond=1.6
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `bonds` subcommand.
#[derive(Args, Debug)]
pub struct BondsArgs {
    /// Path to the input structure file (XYZ format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Override the minimum bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_bond: Option<f64>,

    /// Override the maximum bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max_bond: Option<f64>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input structure file (XYZ format).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the full report to this path as TOML.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the minimum bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub min_bond: Option<f64>,

    /// Override the maximum bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub max_bond: Option<f64>,

    /// Report angles in radians, overriding the config file.
    #[arg(long)]
    pub radians: bool,

    /// Skip bond angle measurement, overriding the config file.
    #[arg(long)]
    pub no_angles: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}
