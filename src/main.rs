mod cli;

use callgraph_sampler::config::{self, ConfigFile};
use callgraph_sampler::prelude::*;
use callgraph_sampler::shared::error::{ExitCode, PipelineError};
use cli::{AnalyseArgs, Args, Command, GenerateArgs, SelectArgs};
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_RESOLVER_URL: &str = "http://localhost:8080";
const DEFAULT_MERGER_COMMAND: &str = "callgraph-merger";
const DEFAULT_TEMPORARY_FOLDER: &str = "tmp";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let reporter = StdoutProgressReporter::new(args.quiet);

    match args.command {
        Command::Select(select) => run_select(select, config, reporter).await,
        Command::Generate(generate) => run_generate(generate, config, reporter).await,
        Command::Analyse(analyse) => run_analyse(analyse, reporter),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => {
            let config = config::load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Ok(config)
        }
        None => {
            let cwd = std::env::current_dir()?;
            match config::discover_config(&cwd)? {
                Some(config) => {
                    eprintln!(
                        "📄 Auto-discovered config file: {}",
                        cwd.join(config::CONFIG_FILENAME).display()
                    );
                    Ok(config)
                }
                None => Ok(ConfigFile::default()),
            }
        }
    }
}

async fn run_select(
    args: SelectArgs,
    config: ConfigFile,
    reporter: StdoutProgressReporter,
) -> Result<()> {
    let request = SelectionRequest::from_dates(&args.start_date, &args.end_date)?
        .with_seed(args.seed.or(config.seed))
        .with_provided(args.include_provided || config.include_provided.unwrap_or(false));

    let metadata_db = required(
        args.metadata_db.or(config.metadata_db),
        "--metadata-db",
        "metadata_db",
    )?;
    let resolver_url = args
        .resolver_url
        .or(config.resolver_url)
        .unwrap_or_else(|| DEFAULT_RESOLVER_URL.to_string());
    let output_dir = args
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Create adapters (Dependency Injection)
    let metadata_store = SqliteMetadataStore::open(&metadata_db)?;
    let resolver = RestDependencyResolver::new(&resolver_url)?;

    let use_case = SelectArtefactsUseCase::new(
        metadata_store,
        resolver,
        FileSystemWriter::new(),
        reporter,
        OutputLayout::new(output_dir),
    );

    use_case.execute(request).await?;
    Ok(())
}

async fn run_generate(
    args: GenerateArgs,
    config: ConfigFile,
    reporter: StdoutProgressReporter,
) -> Result<()> {
    let callable_index = required(
        args.callable_index.or(config.callable_index),
        "--callable-index",
        "callable_index",
    )?;
    let resolver_url = args
        .resolver_url
        .or(config.resolver_url)
        .unwrap_or_else(|| DEFAULT_RESOLVER_URL.to_string());
    let merger_command = args
        .merger_command
        .or(config.merger_command)
        .unwrap_or_else(|| DEFAULT_MERGER_COMMAND.to_string());
    let output_dir = args
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let temporary_folder =
        prepare_temporary_folder(args.temporary_folder.or(config.temporary_folder))?;

    let mut request = GenerationRequest::new(
        args.seed_file,
        ResolverDepth::from_transitive_flag(args.transitive),
    )
    .with_seed(args.seed.or(config.seed))
    .with_provided(args.include_provided || config.include_provided.unwrap_or(false));
    if let Some(max) = args.max_dependents.map(|m| m as usize).or(config.max_dependents) {
        request = request.with_max_dependents(max);
    }

    // Create adapters (Dependency Injection)
    let resolver = CachingDependencyResolver::new(RestDependencyResolver::new(&resolver_url)?);
    let merger = CommandCallGraphMerger::new(&merger_command, callable_index, temporary_folder)?;

    let use_case = GenerateCallGraphsUseCase::new(
        FileSystemReader::new(),
        resolver,
        merger,
        FileSystemWriter::new(),
        reporter,
        OutputLayout::new(output_dir),
    );

    use_case.execute(request).await?;
    Ok(())
}

fn run_analyse(args: AnalyseArgs, reporter: StdoutProgressReporter) -> Result<()> {
    let use_case =
        AnalyseCallGraphsUseCase::new(FileSystemReader::new(), FileSystemWriter::new(), reporter);

    use_case.execute(AnalysisRequest::new(args.input_dir, args.output_dir))?;
    Ok(())
}

/// Returns the value or a validation error naming both the flag and the config field
fn required<T>(value: Option<T>, flag: &str, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        PipelineError::Validation {
            message: format!(
                "Missing {}. Pass it on the command line or set '{}' in {}",
                flag,
                field,
                config::CONFIG_FILENAME
            ),
        }
        .into()
    })
}

/// Creates the temporary folder, defaulting to `./tmp`
fn prepare_temporary_folder(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?.join(DEFAULT_TEMPORARY_FOLDER),
    };

    std::fs::create_dir_all(&path).map_err(|e| PipelineError::FileWriteError {
        path: path.clone(),
        details: format!("Failed to create temporary folder: {}", e),
    })?;

    Ok(path)
}
