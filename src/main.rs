//! evp-scrape main entry point
//!
//! Command-line interface for the English Vocabulary Profile scraper.

use anyhow::Context;
use clap::{Parser, Subcommand};
use evp_scrape::output::{load_records, write_records_pretty};
use evp_scrape::scraper::build_http_client;
use evp_scrape::{discover_words, scrape_words, JsonArrayWriter, ScrapeOptions, WordPreview};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// evp-scrape: English Vocabulary Profile scraper
///
/// Discovers the EVP word index into a preview list, then scrapes each
/// word's detail page into structured sense data. The upstream site runs on
/// a small CMS instance; keep the connection limit low.
#[derive(Parser, Debug)]
#[command(name = "evp-scrape")]
#[command(version, about = "English Vocabulary Profile scraper", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover word previews from the word index
    Discover {
        /// Where to write the preview list
        #[arg(long, value_name = "FILE", default_value = "englishprofile.json")]
        out: PathBuf,
    },

    /// Collect full word data for previously discovered previews
    Worddata {
        /// Concurrent connection limit
        #[arg(long, default_value_t = 4)]
        speed: usize,

        /// Words fetched per batch before flushing to disk; decrease on low
        /// memory systems
        #[arg(long, default_value_t = 12)]
        batch_size: usize,

        /// Preview list produced by `discover`
        #[arg(long, value_name = "FILE", default_value = "englishprofile.json")]
        input: PathBuf,

        /// Where to stream the word data array
        #[arg(long, value_name = "FILE", default_value = "worddata.json")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let base_url = Url::parse(evp_scrape::BASE_URL)?;

    match cli.command {
        Command::Discover { out } => handle_discover(&base_url, &out).await,
        Command::Worddata {
            speed,
            batch_size,
            input,
            out,
        } => {
            let options = ScrapeOptions {
                connection_limit: speed,
                batch_size,
            };
            handle_worddata(&base_url, &input, &out, &options).await
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("evp_scrape=info,warn"),
            1 => EnvFilter::new("evp_scrape=debug,info"),
            2 => EnvFilter::new("evp_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the `discover` subcommand: fetch the index, write the preview list
async fn handle_discover(base_url: &Url, out: &Path) -> anyhow::Result<()> {
    let client = build_http_client(1)?;

    let words = discover_words(&client, base_url).await?;
    write_records_pretty(out, &words)
        .with_context(|| format!("failed to write {}", out.display()))?;

    tracing::info!("wrote {} previews to {}", words.len(), out.display());
    Ok(())
}

/// Handles the `worddata` subcommand: scrape every discovered preview
async fn handle_worddata(
    base_url: &Url,
    input: &Path,
    out: &Path,
    options: &ScrapeOptions,
) -> anyhow::Result<()> {
    let words: Vec<WordPreview> = load_records(input)
        .with_context(|| format!("failed to read previews from {}", input.display()))?;
    tracing::info!("loaded {} previews from {}", words.len(), input.display());

    let client = build_http_client(options.connection_limit)?;
    let mut writer = JsonArrayWriter::create(out)?;

    match scrape_words(&client, base_url, &words, &mut writer, options).await {
        Ok(()) => {
            tracing::info!(
                "wrote {} records to {}",
                writer.records_written(),
                out.display()
            );
            Ok(())
        }
        Err(e) => {
            // The array on disk is left unterminated; rerun from scratch.
            tracing::error!("scrape aborted: {}", e);
            Err(e.into())
        }
    }
}
