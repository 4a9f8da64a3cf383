use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Error raised by the storage backend, kept unchanged as the source.
    #[error("{operation} failed: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request build error: {0}")]
    Request(#[from] aws_sdk_s3::error::BuildError),

    #[error("Bulk delete in bucket '{bucket}' failed for {failed} object(s), first was '{first_key}': {message}")]
    PartialDelete {
        bucket: String,
        failed: usize,
        first_key: String,
        message: String,
    },

    #[error("Timed out after {waited_secs}s waiting for {missing} object(s) to appear in bucket '{bucket}'")]
    ConsistencyTimeout {
        bucket: String,
        missing: usize,
        waited_secs: u64,
    },

    #[error("Downloaded '{key}' does not match its source: expected md5 {expected}, got {actual}")]
    DownloadMismatch {
        key: String,
        expected: String,
        actual: String,
    },
}

impl StoreError {
    pub fn backend<E>(operation: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend {
            operation,
            source: Box::new(source),
        }
    }

    /// The backend error this wraps, if any. Callers downcast it to the concrete SDK type.
    pub fn backend_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            StoreError::Backend { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
