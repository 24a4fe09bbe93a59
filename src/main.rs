use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use pyimports::core::scanner::{DEFAULT_EXCLUDE_PATTERN, DEFAULT_INCLUDE_PATTERN};
use pyimports::core::{build_graph, CollectorConfig, DependencyCollector, WalkOptions};
use pyimports::formatters::{GraphMlFormatter, JsonGraphFormatter};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "pyimports",
    version,
    about = "Builds the import dependency graph of Python source"
)]
struct Cli {
    /// Directory (or single file) to scan for Python files
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Recurse into subdirectories
    #[arg(short, long, value_name = "BOOL", action = ArgAction::Set, required = true)]
    recurse: bool,

    /// Output graph file (*.graphml)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Graphml)]
    format: OutputFormat,

    /// Regex a file path must match to be scanned
    #[arg(long, value_name = "REGEX", default_value = DEFAULT_INCLUDE_PATTERN)]
    include: String,

    /// Regex excluding file paths (replaces the stdlib/virtualenv default)
    #[arg(long, value_name = "REGEX", conflicts_with = "no_default_exclude")]
    exclude: Option<String>,

    /// Scan stdlib and virtualenv directories too
    #[arg(long)]
    no_default_exclude: bool,

    /// Parse files in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Graphml,
    Json,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Graphml => "graphml",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        recurse,
        output,
        format,
        include,
        exclude,
        no_default_exclude,
        parallel,
    } = cli;

    let start_time = Instant::now();

    let exclude = if no_default_exclude {
        None
    } else {
        Some(exclude.unwrap_or_else(|| DEFAULT_EXCLUDE_PATTERN.to_string()))
    };
    let config = CollectorConfig {
        walk: WalkOptions {
            recursive: recurse,
            include,
            exclude,
        },
        parallel,
    };

    info!(
        "Input: {} (recursive: {}), output: {} ({})",
        input.display(),
        recurse,
        output.display(),
        format.as_str()
    );

    let collector = DependencyCollector::new(&config).context("Invalid scan configuration")?;
    let edges = collector
        .collect(&input)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;
    let graph = build_graph(&edges);

    let written = match format {
        OutputFormat::Graphml => GraphMlFormatter::new().format_to_file(&graph, &output),
        OutputFormat::Json => JsonGraphFormatter::new().format_to_file(&graph, &output),
    };
    written.with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Wrote {} modules and {} import edges to {} in {:.2}s",
        graph.node_count(),
        graph.edge_count(),
        output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
