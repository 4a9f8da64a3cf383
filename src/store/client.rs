use crate::interfaces::StorageBackend;
use crate::store::error::Result;
use crate::store::models::StoreConfig;
use crate::store::s3::S3Backend;
use crate::utils::log_utils::Logger;

/// Synchronous facade over a single storage backend connection.
///
/// Holds no state about buckets or objects: every query goes to the backend.
/// Calls block until the backend answers. Not meant to be shared across threads.
pub struct ObjectStoreClient<B: StorageBackend = S3Backend> {
    pub(crate) backend: B,
    pub(crate) logger: Logger,
}

impl ObjectStoreClient<S3Backend> {
    /// Build an S3 backend from `config` and wrap it
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let backend = S3Backend::new(config)?;
        Ok(Self::new(backend, config.verbose))
    }
}

impl<B: StorageBackend> ObjectStoreClient<B> {
    pub fn new(backend: B, verbose: u8) -> Self {
        Self {
            backend,
            logger: Logger::new(verbose),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
