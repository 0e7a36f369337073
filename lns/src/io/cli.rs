use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::opt::Algorithm;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optimization algorithm to run
    #[arg(value_enum)]
    pub algorithm: Algorithm,
    /// Instance to solve: JSON if the extension is `.json`, the plain text format otherwise
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,
    /// Destination of the plain text solution
    #[arg(value_name = "FILE")]
    pub solution_file: PathBuf,
    /// Destination of the per-iteration progress report
    #[arg(value_name = "FILE")]
    pub report_file: PathBuf,
    /// Number of iterations of the (A)LNS
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_iterations: u64,
    /// Accept worse candidates with the simulated annealing criterion
    #[arg(long)]
    pub annealing: bool,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the strip width of the configuration
    #[arg(long)]
    pub strip_width: Option<i32>,
    /// Overrides the PRNG seed of the configuration
    #[arg(long)]
    pub seed: Option<u64>,
    /// Also write the solution as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
    /// Also draw the solution as SVG to this file
    #[arg(long, value_name = "FILE")]
    pub svg: Option<PathBuf>,
}
