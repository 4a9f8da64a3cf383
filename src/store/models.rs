use crate::args::Args;
use std::path::PathBuf;

/// Construction parameters for the S3 backend.
///
/// Anything left as `None` is resolved by the SDK's default provider chain
/// (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint`.
    pub force_path_style: bool,
    /// Total attempts per request handed to the SDK's standard retry strategy.
    pub max_attempts: Option<u32>,
    pub access_key_file: Option<PathBuf>,
    pub secret_key_file: Option<PathBuf>,
    pub verbose: u8,
}

impl StoreConfig {
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            region: args.region.clone(),
            endpoint_url: args.endpoint_url.clone(),
            force_path_style: args.force_path_style,
            max_attempts: args.max_attempts,
            access_key_file: args.access_key_file.clone(),
            secret_key_file: args.secret_key_file.clone(),
            verbose: args.verbose,
        }
    }
}
