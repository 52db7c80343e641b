use anyhow::Result;
use clap::{Parser, Subcommand};
use mailfts::builder::IndexBuilder;
use mailfts::corpus::build_from_corpus;
use mailfts::engine::SearchEngine;
use mailfts::error::Error;
use mailfts::storage::Storage;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Prefix search over maildir-style email corpora", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk a mail corpus and build a fresh index snapshot
    Build {
        /// Root directory of the corpus
        #[arg(short, long)]
        corpus: PathBuf,

        /// Index database path
        #[arg(short, long, default_value = "./mailfts-index")]
        index: PathBuf,
    },

    /// Run a prefix query against an existing snapshot
    Search {
        /// Index database path
        #[arg(short, long, default_value = "./mailfts-index")]
        index: PathBuf,

        /// Query prefix (case-insensitive)
        query: String,
    },

    /// Serve the search API over HTTP
    Serve {
        /// Index database path
        #[arg(short, long, default_value = "./mailfts-index")]
        index: PathBuf,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { corpus, index } => build(&corpus, &index),
        Commands::Search { index, query } => search(&index, &query),
        Commands::Serve { index, host, port } => serve(&index, &host, port).await,
    }
}

fn build(corpus: &PathBuf, index: &PathBuf) -> Result<()> {
    let start = Instant::now();
    let mut builder = IndexBuilder::new();
    let stats = build_from_corpus(corpus, &mut builder)?;
    let snapshot = builder.finish();

    let storage = Storage::open(index)?;
    storage.save_snapshot(&snapshot)?;

    let index_stats = snapshot.stats();
    println!(
        "Indexed {} documents ({} skipped, {} failed) in {:?}",
        stats.indexed,
        stats.skipped,
        stats.failed,
        start.elapsed()
    );
    println!(
        "{} tokens, {:.2} documents per token on average",
        index_stats.total_tokens, index_stats.avg_docs_per_token
    );
    Ok(())
}

fn load_engine(index: &PathBuf) -> Result<SearchEngine> {
    let storage = Storage::open(index)?;
    let snapshot = storage
        .load_snapshot()?
        .ok_or_else(|| Error::SnapshotMissing(index.clone()))?;
    Ok(SearchEngine::new(snapshot))
}

fn search(index: &PathBuf, query: &str) -> Result<()> {
    let engine = load_engine(index)?;

    let start = Instant::now();
    let result = engine.search(query);
    let duration = start.elapsed();

    if result.is_empty() {
        println!("Could not match search");
        return Ok(());
    }

    println!("Terms that match your search: {:?}", result.matched_terms);
    println!(
        "Found {} locations in {:?}:",
        result.locations.len(),
        duration
    );
    for location in &result.locations {
        println!("{location}");
    }
    Ok(())
}

async fn serve(index: &PathBuf, host: &str, port: u16) -> Result<()> {
    let engine = Arc::new(load_engine(index)?);
    let stats = engine.stats();
    tracing::info!(
        documents = stats.total_documents,
        tokens = stats.total_tokens,
        "snapshot loaded"
    );

    let app = mailfts::api::create_router(engine);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
