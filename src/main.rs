use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;
use url::Url;

use tonearm::cli::{Cli, Commands};
use tonearm::core::{config, init_logger, log_credential_configuration};
use tonearm::download::ytdlp::log_ytdlp_version;
use tonearm::{find_cached_artifact, teardown_cache, Downloader};

/// Main entry point for the CLI
///
/// Parses arguments and dispatches to the matching pipeline operation. The
/// CLI is the thin caller layer: each subcommand builds the engine, runs one
/// request, and (for downloads) wipes the cache area before exiting.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env before any Lazy config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Commands::Resolve { url } => run_resolve(url).await,
        Commands::Info { url, json } => run_info(url, json).await,
        Commands::Download { url, output, keep_cache } => run_download(url, output, keep_cache).await,
        Commands::Check => run_check().await,
    }
}

/// Resolve and print the direct stream URL
async fn run_resolve(url: Url) -> Result<()> {
    let engine = Downloader::from_env();
    let stream_url = engine.resolve_stream_url(&url).await?;
    println!("{}", stream_url);
    Ok(())
}

/// Fetch and print metadata, as JSON or as readable lines
async fn run_info(url: Url, json: bool) -> Result<()> {
    let engine = Downloader::from_env();
    let meta = engine.fetch_metadata(&url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        println!("Title:    {}", meta.title);
        println!("Uploader: {}", meta.uploader);
        println!("Duration: {}s", meta.duration);
        println!("Source:   {}", meta.parser);
    }
    Ok(())
}

/// Download audio to the cache, copy it out, wipe the cache area
async fn run_download(url: Url, output: Option<PathBuf>, keep_cache: bool) -> Result<()> {
    let engine = Downloader::from_env();

    let base = engine.download_to_cache(&url).await?;
    let artifact = find_cached_artifact(&base)?;

    if keep_cache {
        log::info!("Keeping cache area at {}", engine.cache_dir().display());
        println!("{}", artifact.display());
        return Ok(());
    }

    // The cache is process-owned scratch; the artifact must be copied out
    // before the shutdown wipe.
    let dest = match output {
        Some(path) => path,
        None => {
            let name = artifact
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("artifact path {} has no file name", artifact.display()))?;
            PathBuf::from(name)
        }
    };
    std::fs::copy(&artifact, &dest)
        .map_err(|e| anyhow::anyhow!("failed to copy {} to {}: {}", artifact.display(), dest.display(), e))?;

    teardown_cache(engine.cache_dir());

    println!("{}", dest.display());
    Ok(())
}

/// Report extractor binary and credential status
async fn run_check() -> Result<()> {
    log_ytdlp_version().await;

    let engine = Downloader::from_env();
    log_credential_configuration(engine.cookie_path());

    Ok(())
}
