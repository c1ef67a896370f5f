//! Letopis CLI binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use serde::Serialize;

use letopis::core::config::Config;
use letopis::core::engine::SearchEngine;
use letopis::core::error::Result;
use letopis::core::stats::IndexStats;
use letopis::index::inverted::InvertedIndex;
use letopis::ingest::jsonl::JsonlSource;
use letopis::search::results::SearchResult;

/// Letopis - Russian full-text indexing and boolean search
#[derive(Parser, Debug)]
#[command(name = "letopis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Index crawled pages and run boolean queries over them")]
struct Args {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file; missing keys use defaults
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an index and Zipf statistics from a JSONL document dump
    Index {
        #[arg(value_name = "DOCUMENTS")]
        documents: PathBuf,

        /// Output directory (overrides storage_path)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Run a boolean query against a saved index
    Search {
        #[arg(value_name = "INDEX_FILE")]
        index: PathBuf,

        #[arg(value_name = "QUERY")]
        query: String,

        /// Order results by summed term frequency
        #[arg(short, long)]
        rank: bool,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show statistics for a saved index
    Stats {
        #[arg(value_name = "INDEX_FILE")]
        index: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    total_hits: usize,
    duration_ms: u64,
    hits: &'a [SearchResult],
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        log::error!("{e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Index { ref documents, ref output } => {
            let config = match output {
                Some(dir) => config.with_storage_path(dir),
                None => config,
            };
            index_documents(config, documents, args.json)
        }
        Command::Search { ref index, ref query, rank, limit } => {
            search_index(config, index, query, rank, limit, args.json)
        }
        Command::Stats { ref index } => show_stats(index, args.json),
    }
}

fn index_documents(config: Config, documents: &Path, json: bool) -> Result<()> {
    let mut source = JsonlSource::new(documents);
    let mut engine = SearchEngine::new(config);

    let report = engine.index_source(&mut source)?;
    let layout = engine.save()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Vocabulary size: {}", report.vocabulary_size);
    println!("Indexed documents: {}", report.indexed_documents);
    println!("Processing time: {:.3} seconds ({:.1} docs/s)",
             report.elapsed_secs(), report.docs_per_second());
    println!("Tokens: {} (avg length {:.2} bytes)",
             report.tokenizer.total_tokens, report.tokenizer.avg_length);
    println!("Total terms processed: {}", report.zipf.total_terms);
    println!("Unique terms: {}", report.zipf.unique_terms);
    println!("Vocabulary richness: {:.2}%", report.zipf.vocabulary_richness);
    println!("Index: {}", layout.index_path().display());
    println!("Zipf analysis: {}", layout.zipf_path().display());
    Ok(())
}

fn search_index(
    config: Config,
    index: &Path,
    query: &str,
    rank: bool,
    limit: usize,
    json: bool,
) -> Result<()> {
    let engine = SearchEngine::open(config, index)?;
    let searcher = engine.searcher();

    let start = Instant::now();
    let results = if rank {
        searcher.search_with_ranking(query)
    } else {
        searcher.search(query)
    };
    let duration_ms = start.elapsed().as_millis() as u64;
    let shown = &results[..results.len().min(limit)];

    if json {
        let output = SearchOutput { query, total_hits: results.len(), duration_ms, hits: shown };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Found {} documents in {} ms", results.len(), duration_ms);
    for (i, result) in shown.iter().enumerate() {
        if rank {
            println!("{:>3}. [{}] {}", i + 1, result.relevance_score, result.doc_id);
        } else {
            println!("{:>3}. {}", i + 1, result.doc_id);
        }
    }
    Ok(())
}

fn show_stats(index_path: &Path, json: bool) -> Result<()> {
    let index = InvertedIndex::open(index_path)?;
    let stats = IndexStats {
        total_documents: index.total_documents(),
        vocabulary_size: index.vocabulary_size(),
        total_postings: index.postings().map(|(_, list)| list.len()).sum(),
        index_size_bytes: fs::metadata(index_path)?.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Documents: {}", stats.total_documents);
    println!("Vocabulary size: {}", stats.vocabulary_size);
    println!("Postings: {}", stats.total_postings);
    println!("Index size: {} bytes", stats.index_size_bytes);
    Ok(())
}
