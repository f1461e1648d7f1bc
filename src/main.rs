use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};
use clap::Parser;
use nodegen::fmt::SeparatedBy as _;
use nodegen::{Artifact, Dialect, Document};
use tracing_subscriber::EnvFilter;

/// Generates syntax node builders, equality, printer, skipped-token
/// touching and first/last token lookup from a node header.
#[derive(Parser, Debug)]
#[command(name = "nodegen", version)]
struct Args {
    /// Node header to scan
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory, or `-` for stdout
    #[arg(value_name = "OUT")]
    out: PathBuf,

    /// Only generate these artifacts
    /// (builders, equality, printer, toucher, token-boundary)
    #[arg(long, value_name = "ARTIFACT")]
    only: Vec<Artifact>,

    /// Compare with the files in OUT instead of writing them
    #[arg(long)]
    check: bool,

    /// Print the scanned schema to stderr
    #[arg(long)]
    dump_schema: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let src = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let dialect = Dialect::default();
    let schema = nodegen::scan(&src, &dialect);
    tracing::info!(input = %args.input.display(), structs = schema.len(), "scanned schema");
    if args.dump_schema {
        eprintln!("{schema:#?}");
    }

    let mut artifacts = if args.only.is_empty() {
        Artifact::ALL.to_vec()
    } else {
        args.only.clone()
    };
    artifacts.sort();
    artifacts.dedup();

    let documents: Vec<Document> = artifacts
        .iter()
        .map(|&artifact| nodegen::generate_one(&schema, artifact, &dialect))
        .collect();

    let to_stdout = args.out == Path::new("-");
    match (args.check, to_stdout) {
        (true, true) => bail!("--check needs an output directory"),
        (true, false) => check(&args.out, &documents),
        (false, true) => print(&documents),
        (false, false) => write(&args.out, &documents),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write(out: &Path, documents: &[Document]) -> Result<()> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    for document in documents {
        let path = out.join(document.file_name());
        std::fs::write(&path, &document.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(artifact = %document.artifact, path = %path.display(), "wrote document");
    }
    Ok(())
}

fn print(documents: &[Document]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for document in documents {
        stdout
            .write_all(document.text.as_bytes())
            .context("failed to write to stdout")?;
    }
    stdout.flush().context("failed to write to stdout")
}

fn check(out: &Path, documents: &[Document]) -> Result<()> {
    let mut stale = Vec::new();
    for document in documents {
        let path = out.join(document.file_name());
        match std::fs::read_to_string(&path) {
            Ok(text) if text == document.text => {
                tracing::debug!(path = %path.display(), "up to date");
            }
            Ok(_) => stale.push(document.file_name()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                stale.push(document.file_name());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        }
    }

    if !stale.is_empty() {
        bail!(
            "generated documents are out of date: {} (rerun without --check)",
            stale.iter().separated_by(", ")
        );
    }
    tracing::info!(documents = documents.len(), "generated documents are up to date");
    Ok(())
}
