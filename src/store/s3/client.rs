use crate::store::error::{Result, StoreError};
use crate::store::models::StoreConfig;
use crate::utils::log_utils::{LogLevel, Logger};
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// S3 backend driving the async SDK client from a runtime it owns.
pub struct S3Backend {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) region: Option<String>,
    pub(crate) logger: Logger,
}

impl S3Backend {
    /// Create a new S3 backend from the provided config
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let logger = Logger::new(config.verbose);
        let credentials = static_credentials(config)?;

        // Reused for every request this backend sends
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| StoreError::Runtime(format!("Failed to create runtime: {e}")))?;

        logger.debug("Creating S3 client with these parameters:");
        logger.debug(&format!(
            "Region: {}",
            config.region.as_deref().unwrap_or("<provider chain>")
        ));
        logger.debug(&format!(
            "Endpoint: {}",
            config.endpoint_url.as_deref().unwrap_or("<default>")
        ));
        logger.debug(&format!("Path-style addressing: {}", config.force_path_style));
        if let Some(credentials) = &credentials {
            if logger.enabled(LogLevel::Debug) {
                let key_id = masked_key_id(credentials.access_key_id());
                logger.debug(&format!("Key ID: {key_id}"));
            }
        }

        let shared_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(credentials) = credentials {
                loader = loader.credentials_provider(credentials);
            }
            loader.load().await
        });

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }
        if let Some(max_attempts) = config.max_attempts {
            builder = builder.retry_config(RetryConfig::standard().with_max_attempts(max_attempts));
        }

        let region = shared_config.region().map(ToString::to_string);
        logger.debug(&format!("Resolved region: {region:?}"));

        Ok(Self {
            client: Client::from_conf(builder.build()),
            runtime,
            region,
            logger,
        })
    }

    /// The region requests are signed for, if one was resolved
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Log the full SDK error chain and wrap it unchanged
    pub(crate) fn sdk_error<E>(&self, operation: &'static str, e: E) -> StoreError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.logger.debug(&format!(
            "S3 {operation} error details: {}",
            DisplayErrorContext(&e)
        ));
        StoreError::backend(operation, e)
    }
}

/// First four characters of the key ID, the rest starred out
fn masked_key_id(key_id: &str) -> String {
    let visible: String = key_id.chars().take(4).collect();
    format!("{visible}****")
}

fn static_credentials(config: &StoreConfig) -> Result<Option<Credentials>> {
    match (&config.access_key_file, &config.secret_key_file) {
        (Some(access_key_file), Some(secret_key_file)) => {
            let access_key = read_value_from_file(access_key_file)?;
            let secret_key = read_value_from_file(secret_key_file)?;
            Ok(Some(Credentials::new(
                access_key,
                secret_key,
                None, // No session token
                None, // No expiry
                "StaticKeyFiles",
            )))
        }
        (None, None) => Ok(None),
        _ => Err(StoreError::Config(
            "--access-key-file and --secret-key-file must be given together".to_string(),
        )),
    }
}

/// Helper function to read a value from a file
pub fn read_value_from_file(file_path: &Path) -> Result<String> {
    let mut value = String::new();
    File::open(file_path)
        .map_err(|e| {
            StoreError::Config(format!(
                "Failed to open file '{}': {e}",
                file_path.display()
            ))
        })?
        .read_to_string(&mut value)
        .map_err(|e| {
            StoreError::Config(format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ))
        })?;

    // Trim whitespace and newlines
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(StoreError::Config(format!(
            "File '{}' is empty",
            file_path.display()
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_value_from_file_trims() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "  AKIAEXAMPLE  ").unwrap();
        assert_eq!(read_value_from_file(file.path()).unwrap(), "AKIAEXAMPLE");
    }

    #[test]
    fn test_read_value_from_empty_file_fails() {
        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            read_value_from_file(file.path()),
            Err(StoreError::Config(_))
        ));
    }

    #[test]
    fn test_key_files_must_be_paired() {
        let file = NamedTempFile::new().unwrap();
        let config = StoreConfig {
            access_key_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            static_credentials(&config),
            Err(StoreError::Config(_))
        ));
        assert!(static_credentials(&StoreConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_masked_key_id_splits_on_chars() {
        assert_eq!(masked_key_id("AKIAEXAMPLE"), "AKIA****");
        assert_eq!(masked_key_id("AK"), "AK****");
        assert_eq!(masked_key_id("€€€€€"), "€€€€****");
    }

    #[test]
    fn test_non_ascii_key_file_builds_backend() {
        let mut access = NamedTempFile::new().unwrap();
        let mut secret = NamedTempFile::new().unwrap();
        writeln!(access, "€€").unwrap();
        writeln!(secret, "secret").unwrap();
        let config = StoreConfig {
            region: Some("us-east-1".to_string()),
            access_key_file: Some(access.path().to_path_buf()),
            secret_key_file: Some(secret.path().to_path_buf()),
            verbose: 2,
            ..Default::default()
        };

        let credentials = static_credentials(&config).unwrap().unwrap();
        assert_eq!(credentials.access_key_id(), "€€");
        let backend = S3Backend::new(&config).unwrap();
        assert_eq!(backend.region(), Some("us-east-1"));
    }
}
