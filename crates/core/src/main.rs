use anyhow::{Context, Result};
use clap::Parser;
use protocol::{RouteSummary, VertexName};
use std::path::PathBuf;
use std::process::ExitCode;
use store::{reconstruct, shortest_path, GraphStore};
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod reader;
use reader::{read_edge_list, ReadError};

#[derive(Parser)]
#[command(name = "pathwise")]
#[command(about = "Minimum-weight paths in small directed graphs read from an edge list", long_about = None)]
struct Cli {
    /// Edge-list file with one SRC,DST,WEIGHT entry per line
    input: PathBuf,

    /// Source vertex name (single character)
    source: String,

    /// Target vertex name (single character)
    target: String,

    /// Print the result as a JSON object instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("source name '{0}' must be a single character")]
    SourceName(String),
    #[error("target name '{0}' must be a single character")]
    TargetName(String),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("source vertex '{0}' not found in the graph")]
    SourceNotFound(VertexName),
    #[error("target vertex '{0}' not found in the graph")]
    TargetNotFound(VertexName),
}

impl AppError {
    fn exit_code(&self) -> u8 {
        match self {
            AppError::SourceName(_) => 2,
            AppError::TargetName(_) => 3,
            AppError::Read(ReadError::Open { .. }) => 4,
            AppError::Read(ReadError::Io { .. }) | AppError::Read(ReadError::Malformed { .. }) => 5,
            AppError::Read(ReadError::Empty) => 6,
            AppError::SourceNotFound(_) => 7,
            AppError::TargetNotFound(_) => 8,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version land here too; only real usage errors fail
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(summary) => match report(&summary, cli.json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("pathwise: {:#}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("pathwise: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(cli: &Cli) -> std::result::Result<RouteSummary, AppError> {
    let source =
        single_name(&cli.source).ok_or_else(|| AppError::SourceName(cli.source.clone()))?;
    let target =
        single_name(&cli.target).ok_or_else(|| AppError::TargetName(cli.target.clone()))?;

    let edge_list = read_edge_list(&cli.input)?;
    let store = GraphStore::build_from_records(&edge_list.records);

    let s = store.find_vertex(source).ok_or(AppError::SourceNotFound(source))?;
    let t = store.find_vertex(target).ok_or(AppError::TargetNotFound(target))?;

    let labels = shortest_path(&store, s, t, edge_list.infinity);

    Ok(match reconstruct(&labels, t) {
        Some(ids) => {
            let path: Vec<VertexName> = ids.iter().rev().map(|&id| store.name(id)).collect();
            info!("found path with cost {}", labels.distance(t));
            RouteSummary::reached(source, target, labels.distance(t), path)
        }
        None => {
            info!("'{}' is unreachable from '{}'", target, source);
            RouteSummary::unreachable(source, target)
        }
    })
}

fn report(summary: &RouteSummary, json: bool) -> Result<()> {
    if json {
        let rendered = serde_json::to_string(summary).context("serializing result")?;
        println!("{}", rendered);
    } else if summary.is_reachable() {
        let names: Vec<String> = summary.path.iter().map(|c| c.to_string()).collect();
        println!("{}", names.join(" -> "));
    } else {
        println!("no path exists");
    }
    Ok(())
}

fn single_name(arg: &str) -> Option<VertexName> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
