use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Weighted release sampling and dependent call-graph collection
#[derive(Parser, Debug)]
#[command(name = "callgraph-sampler")]
#[command(version)]
#[command(
    about = "Weighted release sampling and dependent call-graph collection",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./callgraph-sampler.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors and the final summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw weighted samples of releases created within a date range
    Select(SelectArgs),
    /// Resolve dependents and dependencies of seed releases and build call graphs
    Generate(GenerateArgs),
    /// Score seed callables over previously generated call graphs
    Analyse(AnalyseArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SelectArgs {
    /// Start of the sampling frame, inclusive (dd/mm/yyyy)
    #[arg(short, long, value_name = "DATE")]
    pub start_date: String,

    /// End of the sampling frame, inclusive (dd/mm/yyyy)
    #[arg(short, long, value_name = "DATE")]
    pub end_date: String,

    /// SQLite metadata store
    #[arg(long, value_name = "PATH")]
    pub metadata_db: Option<PathBuf>,

    /// Base URL of the dependency-resolution service
    #[arg(long, value_name = "URL")]
    pub resolver_url: Option<String>,

    /// Directory receiving dependents-count.txt and the sample files
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Count provided-scope dependents towards a release's weight
    #[arg(long)]
    pub include_provided: bool,

    /// Seed for the random source
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// File listing one seed coordinate (group:artifact:version) per line
    #[arg(value_name = "FILE")]
    pub seed_file: PathBuf,

    /// Resolve transitive dependents instead of direct ones
    #[arg(short, long)]
    pub transitive: bool,

    /// Callable index handed to the merge engine
    #[arg(long, value_name = "DIR")]
    pub callable_index: Option<PathBuf>,

    /// Base URL of the dependency-resolution service
    #[arg(long, value_name = "URL")]
    pub resolver_url: Option<String>,

    /// Merge engine command line
    #[arg(long, value_name = "CMD")]
    pub merger_command: Option<String>,

    /// Working directory of the merge engine (defaults to ./tmp)
    #[arg(long, value_name = "DIR")]
    pub temporary_folder: Option<PathBuf>,

    /// Directory receiving the input/ tree
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of dependents analysed per seed
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_dependents: Option<u32>,

    /// Follow provided-scope dependents
    #[arg(long)]
    pub include_provided: bool,

    /// Seed for the random source
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyseArgs {
    /// The input/ tree written by `generate`
    #[arg(short, long, value_name = "DIR", default_value = "input")]
    pub input_dir: PathBuf,

    /// Directory receiving one sub-directory per analysed seed
    #[arg(short, long, value_name = "DIR", default_value = "analysis")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
