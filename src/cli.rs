use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "tonearm")]
#[command(author, version, about = "Media resolution and retrieval engine over yt-dlp", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a media page URL into a direct playable stream URL
    Resolve {
        /// Media page URL
        url: Url,
    },

    /// Fetch structured metadata for a media URL
    Info {
        /// Media page URL
        url: Url,

        /// Print the raw metadata record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download best-available audio and copy it out of the cache
    Download {
        /// Media page URL
        url: Url,

        /// Destination path for the downloaded file (defaults to the
        /// artifact's own name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave the artifact in the cache directory instead of copying it
        /// out (skips the shutdown cache wipe)
        #[arg(long)]
        keep_cache: bool,
    },

    /// Check the yt-dlp binary and credential configuration
    Check,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
