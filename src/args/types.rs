use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use super::validators::validate;
use crate::store::ConsistencyWait;
use crate::utils::path_utils::{check_parent_dir_writable, check_readable_file, check_writable_dir};

pub const DEMO_BUCKET_DEFAULT: &str = "s3-crud-demo-bucket";
pub const WAIT_SECS_DEFAULT: u64 = 60;
pub const POLL_INTERVAL_MS_DEFAULT: u64 = 500;

#[derive(Parser, Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print extra stuff (use -v -v or --verbose --verbose for request-level detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Region to sign requests for; defaults to the SDK provider chain
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible stores, e.g. http://127.0.0.1:9000
    #[arg(long, value_name = "URL", global = true)]
    pub endpoint_url: Option<String>,

    /// Use path-style bucket addressing (needed by most S3-compatible stores)
    #[arg(long, global = true)]
    pub force_path_style: bool,

    /// Total attempts per request for the SDK's standard retry strategy
    #[arg(
        long,
        value_name = "N",
        global = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: Option<u32>,

    /// File holding the access key id; pass together with --secret-key-file
    #[arg(long, value_name = "FILE", global = true, value_parser = check_readable_file)]
    pub access_key_file: Option<PathBuf>,

    /// File holding the secret access key
    #[arg(long, value_name = "FILE", global = true, value_parser = check_readable_file)]
    pub secret_key_file: Option<PathBuf>,

    /// Run against a throwaway in-memory store instead of S3
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Print listings and the demo report as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl Args {
    /// Check combinations of arguments clap cannot express on its own
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid combination found.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Command {
    /// Create a bucket
    CreateBucket { bucket: String },
    /// List all buckets owned by the account
    ListBuckets,
    /// Exit 0 if the bucket exists, 1 otherwise
    BucketExists { bucket: String },
    /// Create a directory placeholder; a trailing '/' is added if missing
    Mkdir { bucket: String, prefix: String },
    /// Delete every object in a bucket
    DeleteAll { bucket: String },
    /// Delete a single object
    DeleteObject {
        bucket: String,
        key: String,
        /// Treat the key as a directory placeholder and add a trailing '/'
        #[arg(long)]
        dir: bool,
    },
    /// Empty and delete a bucket; succeeds if the bucket is already gone
    DeleteBucket { bucket: String },
    /// List every object key in a bucket
    List { bucket: String },
    /// List object keys starting with a prefix
    Filter {
        bucket: String,
        prefix: Option<String>,
    },
    /// Upload a local file
    Upload {
        bucket: String,
        #[arg(value_parser = check_readable_file)]
        local_path: PathBuf,
        remote_key: String,
    },
    /// Download an object to a local file
    Download {
        bucket: String,
        remote_key: String,
        #[arg(value_parser = check_parent_dir_writable)]
        local_path: PathBuf,
    },
    /// Run the end-to-end create/upload/download/teardown scenario
    Demo(DemoArgs),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DemoArgs {
    /// Bucket to create and tear down
    #[arg(long, default_value = DEMO_BUCKET_DEFAULT)]
    pub bucket: String,

    /// Keep downloaded files here instead of a temporary directory
    #[arg(long, value_name = "DIR", value_parser = check_writable_dir)]
    pub download_dir: Option<PathBuf>,

    /// How to wait for uploads to become visible before downloading
    #[arg(long, value_enum, default_value_t = WaitMode::Fixed)]
    pub wait: WaitMode,

    /// Sleep length for --wait fixed, or the give-up time for --wait poll
    #[arg(long, value_name = "SECS", default_value_t = WAIT_SECS_DEFAULT)]
    pub wait_secs: u64,

    /// Delay between listings for --wait poll
    #[arg(long, value_name = "MS", default_value_t = POLL_INTERVAL_MS_DEFAULT)]
    pub poll_interval_ms: u64,
}

impl DemoArgs {
    #[must_use]
    pub fn consistency_wait(&self) -> ConsistencyWait {
        match self.wait {
            WaitMode::Skip => ConsistencyWait::None,
            WaitMode::Fixed => ConsistencyWait::Fixed(Duration::from_secs(self.wait_secs)),
            WaitMode::Poll => ConsistencyWait::Poll {
                timeout: Duration::from_secs(self.wait_secs),
                interval: Duration::from_millis(self.poll_interval_ms),
            },
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum WaitMode {
    #[value(name = "none")]
    Skip,
    Fixed,
    Poll,
}
