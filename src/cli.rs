//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use catbucket_core::MAINE_COON_ID;
use catbucket_core::cats::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use catbucket_core::storage::DEFAULT_REGION;

/// Fetch a cat image and round-trip it through an S3 bucket.
///
/// Looks up images for a breed on The Cat API, downloads the first one,
/// uploads it to the bucket, then downloads it back to a local file.
#[derive(Parser, Debug)]
#[command(name = "catbucket")]
#[command(author, version, about)]
pub struct Args {
    /// API key for The Cat API
    #[arg(long, env = "CAT_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Bucket to upload to and download from
    #[arg(short, long, env = "CAT_BUCKET")]
    pub bucket: String,

    /// Breed id to search for
    #[arg(long, default_value = MAINE_COON_ID)]
    pub breed: String,

    /// AWS region of the bucket
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Custom S3 endpoint (for S3-compatible stores)
    #[arg(long, env = "CAT_S3_ENDPOINT")]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long)]
    pub path_style: bool,

    /// Object key (default: cat-<minute>.<ext>)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Local file for the downloaded object (default: the object key)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HTTP connect timeout in seconds (1-3600)
    #[arg(long, default_value_t = CONNECT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub connect_timeout: u64,

    /// HTTP read timeout in seconds (1-3600)
    #[arg(long, default_value_t = READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=3600))]
    pub read_timeout: u64,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log level used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
