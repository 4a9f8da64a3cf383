use crate::interfaces::StorageBackend;
use crate::store::client::ObjectStoreClient;
use crate::store::error::Result;
use std::path::Path;

impl<B: StorageBackend> ObjectStoreClient<B> {
    /// Upload `local_path` to `remote_key`, replacing any existing object
    pub fn upload_object(&self, bucket: &str, local_path: &Path, remote_key: &str) -> Result<()> {
        self.backend.upload_file(bucket, local_path, remote_key)?;
        self.logger.normal(&format!(
            "Uploaded object - {remote_key} in bucket - {bucket}."
        ));
        Ok(())
    }

    /// Download `remote_key` to `local_path`, replacing any existing file
    pub fn download_object(&self, bucket: &str, remote_key: &str, local_path: &Path) -> Result<()> {
        self.backend.download_file(bucket, remote_key, local_path)?;
        self.logger.normal(&format!(
            "Downloaded object - {} in bucket - {bucket}.",
            local_path.display()
        ));
        Ok(())
    }
}
