use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rigplan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a parameter catalog and print the definitions as JSON.
    Catalog(CatalogArgs),
    /// Plan a timeline for a request JSON and print it as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Catalog text file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Request JSON (`words`, `visemes`, `parameterCatalog`, `fps`, `strategy`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Planner config JSON; defaults to environment variables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Never call the generator; always synthesize.
    #[arg(long, conflicts_with = "reply")]
    offline: bool,

    /// Replay a recorded generator reply instead of calling the generator.
    #[arg(long)]
    reply: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Plan(args) => cmd_plan(args).await,
    }
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let report = rigplan::parse_catalog_file(&args.in_path)?;
    write_json(None, &report)
}

async fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => rigplan::PlannerConfig::from_json_file(path)?,
        None => rigplan::PlannerConfig::from_env()?,
    };
    if args.offline {
        config.generator = None;
    }

    let orchestrator = match &args.reply {
        Some(path) => {
            let reply = std::fs::read_to_string(path)
                .with_context(|| format!("read reply '{}'", path.display()))?;
            rigplan::PlanOrchestrator::new(
                &config,
                Arc::new(rigplan::StaticGenerator::new(reply)),
            )
        }
        None => rigplan::PlanOrchestrator::from_config(&config),
    };

    let body = read_request_json(&args.in_path)?;
    let outcome = orchestrator.plan_json(&body).await?;
    match &outcome.provenance {
        rigplan::Provenance::Generated { generator } => {
            eprintln!("planned {} ({})", outcome.timeline.mode(), generator);
        }
        rigplan::Provenance::Fallback(reason) => {
            eprintln!("planned {} (fallback: {reason})", outcome.timeline.mode());
        }
    }

    write_json(args.out.as_deref(), &outcome.timeline)
}

fn read_request_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let r = BufReader::new(f);
    let body = serde_json::from_reader(r).with_context(|| "parse request JSON")?;
    Ok(body)
}

fn write_json(out: Option<&Path>, value: &impl serde::Serialize) -> anyhow::Result<()> {
    let Some(path) = out else {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(f, value)
        .with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
